//! `ModelText` — the outcome of one model call, as handed to the response layer.

use std::fmt;

use serde::{Serialize, Serializer};
use tracing::warn;

use super::LlmError;

/// Prefix that marks a failed model call inside a response field.
pub const AI_ERROR_MARKER: &str = "AI_ERROR: ";

/// Text produced by the model, or the reason it could not be produced.
///
/// Serializes as a plain string. A failure renders as `AI_ERROR: <reason>`
/// so existing clients keep their string-matching contract.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ModelText {
    Generated(String),
    Failed { reason: String },
}

impl ModelText {
    pub fn is_failed(&self) -> bool {
        matches!(self, ModelText::Failed { .. })
    }

    /// The text a downstream prompt or client sees.
    pub fn as_wire_text(&self) -> String {
        self.to_string()
    }
}

impl From<Result<String, LlmError>> for ModelText {
    fn from(result: Result<String, LlmError>) -> Self {
        match result {
            Ok(text) => ModelText::Generated(text),
            Err(e) => {
                warn!("LLM call failed, degrading to marker text: {e}");
                ModelText::Failed {
                    reason: e.to_string(),
                }
            }
        }
    }
}

impl fmt::Display for ModelText {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ModelText::Generated(text) => f.write_str(text),
            ModelText::Failed { reason } => write!(f, "{AI_ERROR_MARKER}{reason}"),
        }
    }
}

impl Serialize for ModelText {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}
