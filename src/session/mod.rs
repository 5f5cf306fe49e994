//! Questionnaire session state machine
//!
//! Holds the fetched questionnaire, the respondent's position in it and the
//! preview/lock flags, and coordinates answer submission with the backend.

pub mod outcome;
pub mod state;
pub mod store;

pub use outcome::{EditAccessOutcome, NO_QUESTIONNAIRE_LOADED, OptimisticPolicy, SubmitError, SubmitOutcome};
pub use state::{Question, QuestionnaireSession};
pub use store::{SessionPhase, SessionStore};
