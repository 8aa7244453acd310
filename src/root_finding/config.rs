//! Configuration for the regula falsi root finder.
//!
//! [`RegulaFalsiCfg`] fields
//! ├ `tolerance` : threshold on |f(c)| below which `c` is accepted
//! └ `max_iter`  : iteration cap
//!
//! [`RegulaFalsiCfg::new`] initializes configuration with default values.
//! Setters validate eagerly; [`RegulaFalsiCfg::validate`] re-checks before
//! a run so hand-built values cannot slip through.

use super::errors::RootFindingError;


/// Regula falsi configuration.
///
/// # Defaults
///
/// ┌ DEFAULT_TOLERANCE - |f(c)| threshold for convergence
/// └ DEFAULT_MAX_ITER  - iteration cap
///
/// # Validation
/// ├ `tolerance` >  0 and finite
/// └ `max_iter`  >= 1
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct RegulaFalsiCfg {
    tolerance: f64,
    max_iter:  usize,
}

impl RegulaFalsiCfg {
    pub const DEFAULT_TOLERANCE: f64   = 1e-6;
    pub const DEFAULT_MAX_ITER:  usize = 100;

    #[must_use]
    pub fn new() -> Self { Self::default() }

    // getters
    #[inline] #[must_use] pub fn tolerance(&self) -> f64   { self.tolerance }
    #[inline] #[must_use] pub fn max_iter(&self)  -> usize { self.max_iter }

    pub fn set_tolerance(mut self, v: f64) -> Result<Self, RootFindingError> {
        check_tolerance(v)?;
        self.tolerance = v;
        Ok(self)
    }

    pub fn set_max_iter(mut self, v: usize) -> Result<Self, RootFindingError> {
        check_max_iter(v)?;
        self.max_iter = v;
        Ok(self)
    }

    pub fn validate(&self) -> Result<(), RootFindingError> {
        check_tolerance(self.tolerance)?;
        check_max_iter(self.max_iter)
    }
}

impl Default for RegulaFalsiCfg {
    fn default() -> Self {
        Self {
            tolerance: Self::DEFAULT_TOLERANCE,
            max_iter:  Self::DEFAULT_MAX_ITER,
        }
    }
}

fn check_tolerance(v: f64) -> Result<(), RootFindingError> {
    if !(v.is_finite() && v > 0.0) {
        return Err(RootFindingError::InvalidTolerance { got: v });
    }
    Ok(())
}

fn check_max_iter(v: usize) -> Result<(), RootFindingError> {
    if v == 0 {
        return Err(RootFindingError::InvalidMaxIter { got: v });
    }
    Ok(())
}
