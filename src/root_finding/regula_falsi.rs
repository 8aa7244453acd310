use super::config::RegulaFalsiCfg;
use super::errors::RootFindingError;
use super::observe::Observer;
use super::report::{IterationRecord, RegulaFalsiReport, Termination, Trace};
use super::signs::{opposite_sign_strict, same_sign_strict};
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum RegulaFalsiError {
    #[error(transparent)]
    Common(#[from] RootFindingError),

    #[error("invalid bounds: a and b must be finite and distinct. got [{a}, {b}]")]
    InvalidBounds { a: f64, b: f64 },

    #[error("function must have opposite signs at a and b: f({a})={fa}, f({b})={fb}")]
    InvalidBracket { a: f64, b: f64, fa: f64, fb: f64 },

    #[error("degenerate bracket at iteration {iteration}: f(a) == f(b) == {fa} on [{a}, {b}]")]
    DegenerateBracket { iteration: usize, a: f64, b: f64, fa: f64 },
}

/// Traces longer than this grow on demand instead of being preallocated.
const TRACE_PREALLOC: usize = 128;


/// Wraps the user function, counting evaluations and rejecting
/// non-finite values.
struct Counted<F> {
    func:  F,
    evals: usize,
}

impl<F> Counted<F>
where F: FnMut(f64) -> f64 {
    fn new(func: F) -> Self {
        Self { func, evals: 0 }
    }

    #[inline]
    fn eval(&mut self, x: f64) -> Result<f64, RootFindingError> {
        self.evals += 1;
        let fx = (self.func)(x);
        if !fx.is_finite() {
            return Err(RootFindingError::NonFiniteEvaluation { x, fx });
        }
        Ok(fx)
    }
}


/// x-intercept of the secant line through `(a, fa)` and `(b, fb)`.
///
/// # Returns
/// ├ `Some(c)` with `c = (a * fb - b * fa) / (fb - fa)`
/// └ `None` if `fb - fa` is exactly zero
///
/// Unlike bisection the point is not the midpoint, so the bracket may
/// shrink from one side only.
#[inline]
fn false_position((a, fa): (f64, f64), (b, fb): (f64, f64)) -> Option<f64> {
    let denom = fb - fa;
    if denom == 0.0 {
        return None;
    }
    Some((a * fb - b * fa) / denom)
}


/// Finds a root of `func` on `[a, b]` with default settings
/// (`tolerance = 1e-6`, `max_iter = 100`).
///
/// See [`regula_falsi`].
pub fn find_root<F>(func: F, a: f64, b: f64) -> Result<RegulaFalsiReport, RegulaFalsiError>
where F: FnMut(f64) -> f64 {
    regula_falsi(func, a, b, RegulaFalsiCfg::default())
}


/// Finds a root of a function using the
/// [regula falsi method](https://en.wikipedia.org/wiki/Regula_falsi).
///
/// This method assumes that `func` is continuous between `a` and `b` and
/// that `func(a)` and `func(b)` do not share a sign, guaranteeing a root
/// exists within the interval.
///
/// # Arguments
///
/// ┌ `func` - The function whose root is to be found.
/// ├ `a`    - One end of the bracket. Must be finite.
/// ├ `b`    - Other end of the bracket. Must be finite and differ from `a`.
/// └ `cfg`  - Tolerance on |f(c)| and iteration cap. See [`RegulaFalsiCfg`].
///
/// # Algorithm
///
/// Each iteration, 1-indexed, up to `max_iter`:
/// ├ `c = (a f(b) - b f(a)) / (f(b) - f(a))`
/// ├ evaluate f(c) and append an [`IterationRecord`]
/// ├ stop if |f(c)| < `tolerance`
/// └ if f(a) f(c) < 0 then `b <- c` else `a <- c`
///
/// An exactly zero product takes the `a <- c` branch.
///
/// # Returns
///
/// A [`RegulaFalsiReport`] holding the last `c`, the full trace and the
/// iteration count. Running out of iterations is not an error: the report
/// is returned with [`Termination::IterationLimit`] and callers should
/// inspect [`RegulaFalsiReport::converged`].
///
/// # Errors
///
/// ┌ [`RegulaFalsiError::InvalidBounds`]     - `a` or `b` is NaN/inf, or `a == b`.
/// ├ [`RegulaFalsiError::InvalidBracket`]    - `func(a) * func(b) > 0`.
/// ├ [`RegulaFalsiError::DegenerateBracket`] - `func(b) == func(a)` when computing `c`.
///
/// * The following are propagated via [`RegulaFalsiError::Common`]
/// ├ [`RootFindingError::NonFiniteEvaluation`] - `func(x)` produced NaN or inf.
/// ├ [`RootFindingError::InvalidTolerance`]    - `cfg.tolerance` <= 0 or not finite.
/// └ [`RootFindingError::InvalidMaxIter`]      - `cfg.max_iter` == 0.
pub fn regula_falsi<F>(
    func: F,
    a: f64,
    b: f64,
    cfg: RegulaFalsiCfg,
) -> Result<RegulaFalsiReport, RegulaFalsiError>
where F: FnMut(f64) -> f64 {
    regula_falsi_observed(func, a, b, cfg, ())
}


/// Same as [`regula_falsi`], handing every [`IterationRecord`] to
/// `observer` as soon as it is recorded.
pub fn regula_falsi_observed<F, O>(
    func: F,
    mut a: f64,
    mut b: f64,
    cfg: RegulaFalsiCfg,
    mut observer: O,
) -> Result<RegulaFalsiReport, RegulaFalsiError>
where
    F: FnMut(f64) -> f64,
    O: Observer<IterationRecord>,
{
    cfg.validate()?;

    if !(a.is_finite() && b.is_finite()) || a == b {
        return Err(RegulaFalsiError::InvalidBounds { a, b });
    }

    let tolerance = cfg.tolerance();
    let max_iter  = cfg.max_iter();

    let mut func = Counted::new(func);
    let mut fa = func.eval(a)?;
    let mut fb = func.eval(b)?;

    if same_sign_strict(fa, fb) {
        return Err(RegulaFalsiError::InvalidBracket { a, b, fa, fb });
    }

    let mut trace: Trace = Vec::with_capacity(max_iter.min(TRACE_PREALLOC));

    let mut c  = a;     // gets overwritten
    let mut fc = fa;    // gets overwritten

    for iteration in 1..=max_iter {
        c = false_position((a, fa), (b, fb))
            .ok_or(RegulaFalsiError::DegenerateBracket { iteration, a, b, fa })?;
        fc = func.eval(c)?;

        let record = IterationRecord { iteration, a, b, c, fa, fb, fc, error: fc.abs() };
        observer.observe(&record);
        trace.push(record);

        if fc.abs() < tolerance {
            return Ok(RegulaFalsiReport {
                root        : c,
                f_root      : fc,
                iterations  : iteration,
                evaluations : func.evals,
                termination : Termination::ToleranceReached,
                left        : a,
                right       : b,
                trace,
            });
        }

        // keep the endpoint whose sign differs from f(c)
        if opposite_sign_strict(fa, fc) {
            b  = c;
            fb = fc;
        } else {
            a  = c;
            fa = fc;
        }
    }

    Ok(RegulaFalsiReport {
        root        : c,
        f_root      : fc,
        iterations  : max_iter,
        evaluations : func.evals,
        termination : Termination::IterationLimit,
        left        : a,
        right       : b,
        trace,
    })
}
