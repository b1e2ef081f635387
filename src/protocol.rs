//! Wire vocabulary and envelope decoding.
//!
//! Inbound events arrive on a named channel carrying a `detail` object that
//! maps payload tags to values. Decoding treats the mapping as a set: each
//! recognized entry becomes a [`Payload`], unknown tags are logged and
//! skipped, and only a missing or non-object detail is an error.

#[cfg(test)]
#[path = "protocol_test.rs"]
mod protocol_test;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::Error;
use crate::source::ImageSource;

/// Named event channel the host transport delivers envelopes on.
pub const TRANSCEIVER_MSG_KEY: &str = "TRANSCEIVER_MSG";

/// Payload tag: replace the displayed image.
pub const PICT_CHA_KEY: &str = "pict_cha";

/// Payload tag: a controller command.
pub const COMFYUI_CMD_KEY: &str = "comfyui_command";

/// Controller protocol version. Keep in sync with the backend producer.
pub const VERSION: &str = "0.7.10";

/// The closed command vocabulary.
///
/// Only [`EnqueuePrompt`](Self::EnqueuePrompt) and
/// [`AbortWorkflow`](Self::AbortWorkflow) are handled by this controller;
/// `command` and `config` are reserved tags used elsewhere in the protocol.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ControllerCommand {
    /// Reserved envelope tag used by the backend protocol.
    #[serde(rename = "command")]
    Attention,
    /// Reserved: backend transport configuration.
    Config,
    /// Queue the current workflow prompt once.
    EnqueuePrompt,
    /// Abort the running workflow.
    AbortWorkflow,
}

impl ControllerCommand {
    /// Parse a wire command string. `None` for anything outside the
    /// vocabulary.
    #[must_use]
    pub fn from_tag(tag: &str) -> Option<Self> {
        match tag {
            "command" => Some(Self::Attention),
            "config" => Some(Self::Config),
            "enqueue_prompt" => Some(Self::EnqueuePrompt),
            "abort_workflow" => Some(Self::AbortWorkflow),
            _ => None,
        }
    }

    /// The wire string for this command.
    #[must_use]
    pub fn tag(self) -> &'static str {
        match self {
            Self::Attention => "command",
            Self::Config => "config",
            Self::EnqueuePrompt => "enqueue_prompt",
            Self::AbortWorkflow => "abort_workflow",
        }
    }
}

/// One decoded payload entry from an inbound envelope.
#[derive(Debug, Clone, PartialEq)]
pub enum Payload {
    /// New image to display.
    Picture(ImageSource),
    /// A command string for the session's command processor.
    Command(String),
}

/// Decode an event detail into payload entries.
///
/// Entries with an unknown tag or a non-string value are logged and skipped;
/// decoding always continues with the remaining entries. An empty mapping
/// decodes to an empty list.
///
/// # Errors
///
/// Returns [`Error::MissingPayload`] when `detail` is absent or not an
/// object.
pub fn decode_detail(detail: Option<&Value>) -> Result<Vec<Payload>, Error> {
    let Some(Value::Object(entries)) = detail else {
        return Err(Error::MissingPayload);
    };
    let mut payloads = Vec::with_capacity(entries.len());
    for (tag, value) in entries {
        match tag.as_str() {
            PICT_CHA_KEY => match value.as_str() {
                Some(src) => payloads.push(Payload::Picture(ImageSource::from_payload(src))),
                None => log::error!("pict_cha payload is not a string: {value}"),
            },
            COMFYUI_CMD_KEY => match value.as_str() {
                Some(cmd) => payloads.push(Payload::Command(cmd.to_owned())),
                None => log::error!("comfyui_command payload is not a string: {value}"),
            },
            other => log::error!("unsupported payload {other:?} in event detail"),
        }
    }
    Ok(payloads)
}
