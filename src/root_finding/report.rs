//! Defines the [`RegulaFalsiReport`] returned by the root finder and the
//! per-iteration [`IterationRecord`]s that make up its trace.

/// Reasons the root finder may terminate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Termination {
    ToleranceReached,
    IterationLimit,
}


/// State of one iteration, captured after `f(c)` is evaluated and before
/// the bracket is updated.
///
/// [`IterationRecord`]
/// - `iteration` : 1-based index
/// - `a`, `b`    : bracket at the start of the iteration
/// - `c`         : false-position point
/// - `fa`, `fb`  : f(a), f(b)
/// - `fc`        : f(c)
/// - `error`     : |f(c)|
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct IterationRecord {
    pub iteration: usize,
    pub a:         f64,
    pub b:         f64,
    pub c:         f64,
    pub fa:        f64,
    pub fb:        f64,
    pub fc:        f64,
    pub error:     f64,
}

/// Ordered log of every iteration of a run.
pub type Trace = Vec<IterationRecord>;


/// Final report returned by [`regula_falsi`](super::regula_falsi::regula_falsi).
///
/// [`RegulaFalsiReport`]
/// - `root`        : last computed `c`
/// - `f_root`      : f(`root`)
/// - `iterations`  : iterations performed, always equal to `trace.len()`
/// - `evaluations` : total function evaluations (endpoints included)
/// - `termination` : why the solver stopped ([`Termination`])
/// - `left`        : final `a` of the bracket
/// - `right`       : final `b` of the bracket
/// - `trace`       : every [`IterationRecord`], in order
///
/// Hitting the iteration cap is not an error: the best estimate is still
/// returned and `termination` is [`Termination::IterationLimit`].
#[derive(Debug, Clone, PartialEq)]
pub struct RegulaFalsiReport {
    pub root:        f64,
    pub f_root:      f64,
    pub iterations:  usize,
    pub evaluations: usize,
    pub termination: Termination,
    pub left:        f64,
    pub right:       f64,
    pub trace:       Trace,
}

impl RegulaFalsiReport {
    /// `true` if |f(root)| dropped below the tolerance.
    #[must_use]
    pub fn converged(&self) -> bool {
        self.termination == Termination::ToleranceReached
    }

    /// Record of the final iteration.
    #[must_use]
    pub fn last(&self) -> Option<&IterationRecord> {
        self.trace.last()
    }
}
