//! Ties the pieces together: text -> [`Expression`] -> root finder ->
//! report and plot.
//!
//! [`RunCfg`] carries everything a run needs, so the library never prompts
//! or reads global state. Interactive input lives in [`cli`].

pub mod cli;

use std::path::PathBuf;

use log::{debug, info, warn};
use thiserror::Error;

use crate::expression::{Expression, ParseError};
use crate::reporting::{self, PlotCfg, PlotError, Summary, TraceTable};
use crate::root_finding::{
    regula_falsi_observed, IterationRecord, RegulaFalsiCfg, RegulaFalsiError, RegulaFalsiReport,
};

#[derive(Debug, Error)]
pub enum DriverError {
    #[error(transparent)]
    Parse(#[from] ParseError),

    #[error(transparent)]
    RootFinding(#[from] RegulaFalsiError),

    #[error(transparent)]
    Plot(#[from] PlotError),
}


/// Inputs of a single run.
///
/// [`RunCfg`]
/// - `expression` : f(x) as text
/// - `a`, `b`     : initial bracket
/// - `solver`     : tolerance and iteration cap ([`RegulaFalsiCfg`])
/// - `plot`       : where and how to draw, `None` to skip plotting
#[derive(Debug, Clone, PartialEq)]
pub struct RunCfg {
    expression: String,
    a:          f64,
    b:          f64,
    solver:     RegulaFalsiCfg,
    plot:       Option<PlotCfg>,
}

impl RunCfg {
    #[must_use]
    pub fn new(expression: impl Into<String>, a: f64, b: f64) -> Self {
        Self {
            expression: expression.into(),
            a,
            b,
            solver: RegulaFalsiCfg::default(),
            plot:   None,
        }
    }

    pub fn with_solver(mut self, v: RegulaFalsiCfg) -> Self { self.solver = v; self }
    pub fn with_plot(mut self, v: Option<PlotCfg>) -> Self { self.plot = v; self }

    #[inline] #[must_use] pub fn expression(&self) -> &str              { &self.expression }
    #[inline] #[must_use] pub fn bounds(&self)     -> (f64, f64)        { (self.a, self.b) }
    #[inline] #[must_use] pub fn solver(&self)     -> RegulaFalsiCfg    { self.solver }
    #[inline] #[must_use] pub fn plot(&self)       -> Option<&PlotCfg>  { self.plot.as_ref() }
}


/// A parsed expression together with the root finder's report.
#[derive(Debug)]
pub struct Solution {
    pub expression: Expression,
    pub a:          f64,
    pub b:          f64,
    pub report:     RegulaFalsiReport,
}

impl Solution {
    pub fn table(&self) -> TraceTable<'_> {
        TraceTable::new(&self.report.trace)
    }

    pub fn summary(&self) -> Summary<'_> {
        Summary::new(&self.report)
    }
}

/// Result of [`run`]: the solution and, if requested, the plot location.
#[derive(Debug)]
pub struct RunOutcome {
    pub solution: Solution,
    pub plot:     Option<PathBuf>,
}


/// Parses the expression and runs the root finder.
///
/// Each iteration is logged at `debug` level as it happens.
///
/// # Errors
/// ┌ [`DriverError::Parse`]       - the expression is invalid.
/// └ [`DriverError::RootFinding`] - bad bracket, degenerate secant, ...
pub fn solve(cfg: &RunCfg) -> Result<Solution, DriverError> {
    let (a, b) = cfg.bounds();
    info!(
        "solving f(x) = {} on [{a}, {b}] (tolerance={}, max_iter={})",
        cfg.expression(),
        cfg.solver().tolerance(),
        cfg.solver().max_iter()
    );

    let expression = Expression::parse(cfg.expression())?;

    let log_iteration = |r: &IterationRecord| {
        debug!(
            "iteration {}: a={} b={} c={} f(c)={}",
            r.iteration, r.a, r.b, r.c, r.fc
        );
    };
    let report = regula_falsi_observed(|x| expression.eval(x), a, b, cfg.solver(), log_iteration)?;

    if report.converged() {
        info!("root {} after {} iterations", report.root, report.iterations);
    } else {
        warn!(
            "tolerance {} not reached after {} iterations, best estimate {} (|f| = {})",
            cfg.solver().tolerance(),
            report.iterations,
            report.root,
            report.f_root.abs()
        );
    }

    Ok(Solution { expression, a, b, report })
}

/// Draws the solved function over its initial bracket.
pub fn plot(solution: &Solution, cfg: &PlotCfg) -> Result<PathBuf, DriverError> {
    let expr = &solution.expression;
    let path = reporting::render(
        |x| expr.eval(x),
        expr.source(),
        solution.a,
        solution.b,
        solution.report.root,
        cfg,
    )?;
    info!("plot written to {}", path.display());
    Ok(path)
}

/// [`solve`], then [`plot`] if `cfg` asks for a plot.
pub fn run(cfg: &RunCfg) -> Result<RunOutcome, DriverError> {
    let solution = solve(cfg)?;
    let plot_path = match cfg.plot() {
        Some(plot_cfg) => Some(plot(&solution, plot_cfg)?),
        None => None,
    };
    Ok(RunOutcome { solution, plot: plot_path })
}
