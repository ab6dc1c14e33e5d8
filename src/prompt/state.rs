/// State of the selection loop.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PromptState {
    /// No valid choice seen yet; the prompt should be (re-)issued.
    AwaitingInput,
    /// A choice was accepted; holds the zero-based configuration index.
    Resolved(usize),
}

/// Selection state machine, fed one input line at a time.
///
/// Accepts exactly the lines that parse as base-10 integers in
/// `[1, option_count]`; everything else leaves the machine awaiting input.
/// Once resolved the machine stays resolved, a fresh instance is required to
/// prompt again.
#[derive(Debug)]
pub struct SelectionPrompt {
    option_count: usize,
    state: PromptState,
}

impl SelectionPrompt {
    pub fn new(option_count: usize) -> Self {
        Self {
            option_count,
            state: PromptState::AwaitingInput,
        }
    }

    pub fn state(&self) -> PromptState {
        self.state
    }

    /// Feed one line of user input and return the resulting state.
    pub fn offer(&mut self, line: &str) -> PromptState {
        if matches!(self.state, PromptState::Resolved(_)) {
            return self.state;
        }

        if let Ok(choice) = line.trim().parse::<i64>() {
            if choice >= 1 && choice as usize <= self.option_count {
                self.state = PromptState::Resolved(choice as usize - 1);
            }
        }
        self.state
    }
}
