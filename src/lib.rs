//! View controller bridging a backend image producer and a single node in a
//! graph-based workflow editor.
//!
//! The backend pushes frames and control commands over the host's event
//! transport; this crate owns the browser-side session that renders the most
//! recent frame into the bound node on every host frame and forwards
//! commands back to host actions. The core is host-agnostic and fully
//! testable natively; everything touching the browser lives in the `web`
//! module behind the `web` cargo feature.
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`session`] | Session controller: dispatch, commands, draw, loop tick |
//! | [`binding`] | Write-once binding to the host view node |
//! | [`state`] | Render state and the shared dirty flag |
//! | [`protocol`] | Payload tags, command vocabulary, envelope decoding |
//! | [`source`] | Image-source normalization and placeholder artwork |
//! | [`geometry`] | Fit-scale computation for the node's content region |
//! | [`host`] | Traits for the host collaborators |
//! | [`consts`] | Layout and host-action constants |
//! | [`error`] | Error taxonomy |
//! | `web` | Browser glue (feature `web`): `web-sys` host, rAF loop |

pub mod binding;
pub mod consts;
pub mod error;
pub mod geometry;
pub mod host;
pub mod protocol;
pub mod session;
pub mod source;
pub mod state;

#[cfg(feature = "web")]
pub mod web;
