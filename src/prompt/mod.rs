//! Interactive selection of one launch configuration.

pub mod session;
pub mod state;

pub use session::{prompt_for_selection, render_menu, INVALID_CHOICE_MESSAGE};
pub use state::{PromptState, SelectionPrompt};
