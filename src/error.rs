use thiserror::Error;

/// Errors that can occur while building a suffix tree.
#[derive(Debug, Error)]
pub enum TreeError {
    /// The terminal byte occurs inside the input it is meant to terminate.
    #[error("terminal byte {terminal:#04x} occurs inside the input")]
    TerminalInInput {
        /// The terminal byte that was found inside the input.
        terminal: u8,
    },

    /// Allocating the input buffer or node arena failed.
    #[error("failed to allocate tree storage: {reason}")]
    OutOfMemory {
        /// Description of which allocation failed.
        reason: String,
    },
}

/// A specialized `Result` type for suffix tree construction.
pub type Result<T> = std::result::Result<T, TreeError>;

impl TreeError {
    pub(crate) fn terminal_in_input(terminal: u8) -> Self {
        Self::TerminalInInput { terminal }
    }

    pub(crate) fn out_of_memory(reason: impl std::fmt::Display) -> Self {
        Self::OutOfMemory {
            reason: reason.to_string(),
        }
    }
}
