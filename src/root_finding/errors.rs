//! Root-finding error types.
//!
//! ┌ [`RootFindingError`] : common runtime errors
//! │   ├ non-finite function evaluation
//! │   └ invalid configuration (tolerance, max_iter)
//! │
//! └ method-specific errors live next to their method
//!     └ [`RegulaFalsiError`](super::regula_falsi::RegulaFalsiError)

use thiserror::Error;


/// Root-finding runtime errors shared by every method.
///
/// ┌ Non-finite function evaluation
/// └ Invalid configuration (tolerance <= 0, max_iter < 1)
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum RootFindingError {
    #[error("function non-finite at x={x}, f(x)={fx}")]
    NonFiniteEvaluation { x: f64, fx: f64 },

    #[error("invalid tolerance: must be finite and > 0. got {got}")]
    InvalidTolerance { got: f64 },

    #[error("invalid max_iter: must be >= 1. got max_iter={got}")]
    InvalidMaxIter { got: usize },
}
