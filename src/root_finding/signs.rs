//! Sign utilities for the bracket checks.
//! - `same_sign_strict`     : `true` if the product is strictly positive
//! - `opposite_sign_strict` : `true` if the product is strictly negative
//!
//! Products are used rather than sign bits so an exact zero on either side
//! counts as neither, and `-0.0` behaves like `0.0`.

/// Returns `true` if `x * y > 0`.
#[inline]
pub(crate) fn same_sign_strict(x: f64, y: f64) -> bool {
    x * y > 0.0
}


/// Returns `true` if `x * y < 0`.
#[inline]
pub(crate) fn opposite_sign_strict(x: f64, y: f64) -> bool {
    x * y < 0.0
}
