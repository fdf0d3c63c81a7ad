//! Selection Translator - translate camelCase editor selections
//!
//! This library implements one editor-style action: split the selected text
//! on camelCase boundaries, lowercase it, translate it through a remote
//! endpoint with a single blocking HTTP GET, and hand back the pair to
//! present. Failures are logged, never shown.

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::missing_docs_in_private_items)]

pub mod core;

// Re-export key types for convenience
pub use crate::core::{
    action::{format_result, handle, perform, ErrorSink, TracingSink},
    client::TranslatorClient,
    config::TranslationConfig,
    errors::TranslateError,
    tokenizer::split_camel_case,
};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library name
pub const NAME: &str = env!("CARGO_PKG_NAME");
