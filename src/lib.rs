//! Regula falsi (false position) root finding.
//!
//! ┌ [`root_finding`] : the solver, generic over any `FnMut(f64) -> f64`
//! ├ [`expression`]   : text -> function of `x`
//! ├ [`reporting`]    : iteration table and plot
//! └ [`driver`]       : one configured run, plus the CLI front end
//!
//! ```
//! use falsi::root_finding::find_root;
//!
//! let report = find_root(|x| x * x - 2.0, 0.0, 2.0).unwrap();
//! assert!(report.converged());
//! assert!((report.root - 2f64.sqrt()).abs() < 1e-6);
//! ```

pub mod driver;
pub mod expression;
pub mod reporting;
pub mod root_finding;
