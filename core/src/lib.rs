//! Typed client for the example.com comment API.
//!
//! # Overview
//! Three operations, `list_comments`, `add_comment` and `update_comment`,
//! each performing a single HTTP round trip through an injected
//! `HttpTransport` and mapping the response to a typed value or a
//! classified `ClientError`.
//!
//! # Design
//! - `CommentApiClient` is stateless; it holds only `base_url` and the
//!   transport.
//! - Each operation is split into `build_*` (produces request) and `parse_*`
//!   (consumes response), so the I/O boundary is explicit.
//! - Transport errors are returned unchanged inside `ClientError::Transport`.
//! - `UreqTransport` (feature `ureq-transport`, on by default) is a ready-made
//!   blocking transport.

pub mod client;
pub mod config;
pub mod error;
pub mod http;
#[cfg(feature = "ureq-transport")]
pub mod transport;
pub mod types;

pub use client::CommentApiClient;
pub use config::{ClientConfig, DEFAULT_BASE_URL};
pub use error::{ClientError, ConfigError};
pub use http::{HttpMethod, HttpRequest, HttpResponse, HttpTransport};
#[cfg(feature = "ureq-transport")]
pub use transport::UreqTransport;
pub use types::{Comment, CommentUpdate, NewComment};
