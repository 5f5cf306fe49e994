pub mod mode;
pub mod prompts;

pub use mode::{InteractionMode, UiState};
