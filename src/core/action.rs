//! The translate-selection action
//!
//! This is the host boundary: the host hands over whatever text is selected
//! (or nothing), and gets back either a `(normalized, translated)` pair to
//! present, or nothing. Failures never reach the presentation side; they go
//! to an [`ErrorSink`] and the action stays silent.

use tracing::error;

use crate::core::client::TranslatorClient;
use crate::core::errors::Result;
use crate::core::tokenizer::split_camel_case;

/// Logging capability handed in by the host.
pub trait ErrorSink {
    /// Report one failure message. Fire-and-forget.
    fn report(&self, message: &str);
}

/// [`ErrorSink`] that forwards to the `tracing` error level.
#[derive(Debug, Default)]
pub struct TracingSink;

impl ErrorSink for TracingSink {
    fn report(&self, message: &str) {
        error!("{}", message);
    }
}

/// Run the action for a selection, propagating failures to the caller.
///
/// `None` means nothing is selected and the action is a no-op. Otherwise the
/// selection is split on camelCase boundaries, lowercased, and translated;
/// the returned pair is `(normalized_text, translated_text)`.
pub fn handle(
    selected_text: Option<&str>,
    client: &TranslatorClient,
) -> Result<Option<(String, String)>> {
    let Some(selected) = selected_text else {
        return Ok(None);
    };

    let normalized = split_camel_case(selected);
    let translated = client.translate(&normalized)?;
    Ok(Some((normalized, translated)))
}

/// Run the action and swallow failures.
///
/// Every failure is converted to a message and reported to `errors` exactly
/// once; the caller only ever sees a result to present or `None`.
pub fn perform(
    selected_text: Option<&str>,
    client: &TranslatorClient,
    errors: &dyn ErrorSink,
) -> Option<(String, String)> {
    match handle(selected_text, client) {
        Ok(result) => result,
        Err(e) => {
            errors.report(&e.to_string());
            None
        }
    }
}

/// Render the presentation string for a successful translation.
pub fn format_result(normalized: &str, translated: &str) -> String {
    format!("{} - {}", normalized, translated)
}
