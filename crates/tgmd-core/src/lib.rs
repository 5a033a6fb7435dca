//! Markdown → Telegram MarkdownV2 transcoding.
//!
//! The converter is a pure function over strings: callers (bot glue, the
//! `tgmd` CLI) hand it one string and send the result as a MarkdownV2
//! message. All I/O lives in the binary crate.

pub mod convert;
pub mod errors;
pub mod escape;
pub mod logging;
pub mod scanner;
pub mod span;

pub use convert::markdown_to_v2;
pub use errors::{Error, Result};
