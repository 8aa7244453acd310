use approx::assert_abs_diff_eq;
use falsi::driver::{run, solve, DriverError, RunCfg};
use falsi::expression::ParseError;
use falsi::reporting::PlotCfg;
use falsi::root_finding::{RegulaFalsiCfg, RegulaFalsiError};

type DriverResult = Result<(), DriverError>;

#[test]
fn solves_without_plot() -> DriverResult {
    let cfg = RunCfg::new("x**2 - 2", 0.0, 2.0);
    let out = run(&cfg)?;

    assert!(out.plot.is_none());
    assert!(out.solution.report.converged());
    assert_abs_diff_eq!(out.solution.report.root, 1.41421356, epsilon = 1e-6);
    assert_eq!((out.solution.a, out.solution.b), (0.0, 2.0));
    assert_eq!(out.solution.expression.source(), "x**2 - 2");
    Ok(())
}

#[test]
fn honours_solver_cfg() -> Result<(), Box<dyn std::error::Error>> {
    let solver = RegulaFalsiCfg::new().set_max_iter(3)?;
    let cfg = RunCfg::new("x^2 - 2", 0.0, 2.0).with_solver(solver);
    let sol = solve(&cfg)?;

    assert!(!sol.report.converged());
    assert_eq!(sol.report.iterations, 3);
    assert!(sol.summary().to_string().contains("tolerance not reached"));
    assert_eq!(sol.table().to_string().lines().count(), 2 + 3);
    Ok(())
}

#[test]
fn parse_error_aborts() {
    let err = solve(&RunCfg::new("x +* )", 0.0, 1.0)).unwrap_err();
    assert!(matches!(err, DriverError::Parse(ParseError::Syntax { .. })));
}

#[test]
fn bad_bracket_aborts() {
    let err = solve(&RunCfg::new("x**2 - 2", 3.0, 5.0)).unwrap_err();
    assert!(matches!(
        err,
        DriverError::RootFinding(RegulaFalsiError::InvalidBracket { .. })
    ));
    assert!(err.to_string().contains("opposite signs"));
}

#[test]
fn degenerate_aborts() {
    let err = solve(&RunCfg::new("0 * x", -1.0, 1.0)).unwrap_err();
    assert!(matches!(
        err,
        DriverError::RootFinding(RegulaFalsiError::DegenerateBracket { .. })
    ));
}

#[test]
fn writes_requested_plot() -> Result<(), Box<dyn std::error::Error>> {
    let output = std::env::temp_dir().join(format!("falsi_{}_run.svg", std::process::id()));
    let cfg = RunCfg::new("x**2 - 2", 0.0, 2.0).with_plot(Some(PlotCfg::new().with_output(&output)));
    let out = run(&cfg)?;

    assert_eq!(out.plot.as_deref(), Some(output.as_path()));
    assert!(output.exists());
    std::fs::remove_file(output)?;
    Ok(())
}
