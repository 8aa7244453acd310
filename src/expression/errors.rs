use thiserror::Error;

/// Errors raised while turning text into an evaluable function of `x`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    #[error("empty expression")]
    Empty,

    #[error("invalid expression `{input}`: {reason}")]
    Syntax { input: String, reason: String },

    #[error("expression `{input}` is not a function of x alone: {reason}")]
    Binding { input: String, reason: String },
}
