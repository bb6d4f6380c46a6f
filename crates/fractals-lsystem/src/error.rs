//! Error types for grammar validation and expansion.

/// Errors surfaced by the expansion engine.
///
/// Unknown symbols are never an error: they are skipped during expansion.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum LSystemError {
    /// `]` was reached with no saved cursor state on the stack.
    ///
    /// `position` is the index of the offending `]` among all symbols
    /// visited so far in the run (0-based).
    #[error("stack underflow at symbol #{position}: ']' without a matching '['")]
    StackUnderflow { position: u64 },

    /// The run finished with `depth` saved states never restored.
    #[error("unbalanced grammar: {depth} '[' left open at end of expansion")]
    UnclosedBranch { depth: usize },

    /// The grammar failed [`crate::Grammar::validate`].
    #[error("invalid grammar: {0}")]
    InvalidGrammar(String),

    /// The OS refused to start the expander thread of a
    /// [`crate::CommandStream`].
    #[error("failed to start expander thread: {0}")]
    Spawn(String),

    /// The expander thread of a [`crate::CommandStream`] panicked; the
    /// commands received before the panic are a truncated expansion.
    #[error("expander thread panicked: {0}")]
    ProducerPanicked(String),

    /// No built-in fractal is registered under this name.
    #[error("unknown fractal {0:?} (expected one of: hilbert, dragon, sierpTri, tree)")]
    UnknownFractal(String),
}
