//! Image sources: data-URL formats, payload normalization, and the built-in
//! placeholder artwork.
//!
//! The backend ships images as `src` attributes — base64 data URLs ready to
//! hand to the host's image loader. [`ImageSource`] wraps such a string and
//! normalizes bare base64 payloads that arrive without the `data:` scheme.

#[cfg(test)]
#[path = "source_test.rs"]
mod source_test;

/// Placeholder shown in the node until the backend pushes its first frame.
pub const SRC_DIAMOND_GREEN: &str = "data:image/png;base64, iVBORw0KGgoAAAANSUhEUgAAAB4AAAAeCAIAAAC0Ujn1AAAAAXNSR0IArs4c6QAAAARnQU1BAACxjwv8YQUAAAAJcEhZcwAADsMAAA7DAcdvqGQAAAEDSURBVEhLtZJBEoMwDAP7lr6nn+0LqUGChsVOwoGdvTSSNRz6Wh7jxvT7+wn9Y4LZae0e+rXLeBqjh45rBtOYgy4V9KYxlOpqRjmNiY4+uJBP41gOI5BM40w620AknTVwGgfSWQMK0tnOaRpV6ewCatLZxn8aJemsAGXp7JhGLBX1wYlUtE4jkIpnwKGM9xeepG7mwblMpl2/CUbCJ7+6CnQzAw5lvD/8DxGIpbMClKWzdjpASTq7gJp0tnGaDlCVzhpQkM52OB3gQDrbQCSdNSTTAc7kMAL5dIDjjj64UE4HmEh1NaM3HWAIulQwmA4wd+i4ZjwdYDR00GVqWsyPrizLD76QCPOHqP2cAAAAAElFTkSuQmCC";

/// Tiny red dot, useful as a probe image when testing the pipeline by hand.
pub const SRC_DOT_RED: &str = "data:image/png;base64, iVBORw0KGgoAAAANSUhEUgAAAAUAAAAFCAYAAACNbyblAAAAHElEQVQI12P4//8/w38GIAXDIBKE0DHxgljNBAAO9TXL0Y4OHwAAAABJRU5ErkJggg==";

/// Image formats the controller can wrap into a data URL.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImageFormat {
    Apng,
    Avif,
    Bmp,
    Gif,
    Ico,
    Jpeg,
    Png,
    Svg,
    Webp,
}

impl ImageFormat {
    /// The media subtype as it appears in a data URL.
    #[must_use]
    pub fn media_type(self) -> &'static str {
        match self {
            Self::Apng => "apng",
            Self::Avif => "avif",
            Self::Bmp => "bmp",
            Self::Gif => "gif",
            Self::Ico => "ico",
            Self::Jpeg => "jpeg",
            Self::Png => "png",
            Self::Svg => "svg",
            Self::Webp => "webp",
        }
    }

    /// `src`-attribute prefix for base64 payloads of this format.
    #[must_use]
    pub fn attribute_prefix(self) -> String {
        format!("data:image/{};base64, ", self.media_type())
    }
}

/// A displayable image source attribute.
///
/// Opaque to the controller: it is handed to the host's image loader as-is
/// and never decoded here.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageSource(String);

impl ImageSource {
    /// Wrap an already-formed source attribute.
    pub fn new(src: impl Into<String>) -> Self {
        Self(src.into())
    }

    /// Normalize a wire payload into a source attribute.
    ///
    /// A payload already carrying the `data:` scheme passes through
    /// unchanged; anything else is treated as bare base64 PNG data and
    /// wrapped with the matching prefix.
    #[must_use]
    pub fn from_payload(payload: &str) -> Self {
        if payload.starts_with("data:") {
            Self(payload.to_owned())
        } else {
            Self(format!("{}{payload}", ImageFormat::Png.attribute_prefix()))
        }
    }

    /// The source attribute string.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for ImageSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}
