//! Result types for session operations
//!
//! Sibling operations fail differently on purpose:
//!
//! | Operation             | On backend failure                  |
//! |-----------------------|-------------------------------------|
//! | `initialize`          | returns `false`, session untouched  |
//! | `submit_answer`       | returns `Err(SubmitError)`          |
//! | lock after last answer| logged and swallowed                |
//! | `request_edit_access` | returns `EditAccessOutcome::Denied` |

use crate::api::ApiError;
use serde_json::Value;
use thiserror::Error;

pub const NO_QUESTIONNAIRE_LOADED: &str = "No questionnaire loaded";

/// What happens to local state when a write to the backend fails.
///
/// The only policy in use keeps the local edit and the recomputed completion;
/// a typed answer is never discarded because the network round-trip failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OptimisticPolicy {
    #[default]
    KeepLocalOnFailure,
}

#[derive(Debug, Clone, PartialEq)]
pub struct SubmitOutcome {
    pub success: bool,
    pub completion_percentage: u8,
    /// Backend response; `None` in preview mode
    pub data: Option<Value>,
    /// Whether this submission locked the questionnaire
    pub locked: bool,
}

#[derive(Debug, Error)]
pub enum SubmitError {
    #[error("questionnaire is not initialized")]
    NotInitialized,

    /// The answer did not reach the backend; local state keeps the edit
    #[error("failed to submit answer: {0}")]
    Gateway(#[from] ApiError),
}

#[derive(Debug, Clone, PartialEq)]
pub enum EditAccessOutcome {
    Granted { data: Value },
    Denied { error: String },
}

impl EditAccessOutcome {
    pub fn is_success(&self) -> bool {
        matches!(self, EditAccessOutcome::Granted { .. })
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            EditAccessOutcome::Granted { .. } => None,
            EditAccessOutcome::Denied { error } => Some(error),
        }
    }
}
