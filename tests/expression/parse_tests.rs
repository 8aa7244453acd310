use approx::assert_abs_diff_eq;
use falsi::expression::{Expression, ParseError};
use falsi::root_finding::find_root;

type ParseResult = Result<(), ParseError>;

#[test]
fn polynomial() -> ParseResult {
    let f = Expression::parse("x^2 - 2")?;
    assert_eq!(f.eval(0.0), -2.0);
    assert_eq!(f.eval(2.0), 2.0);
    Ok(())
}

#[test]
fn python_power_syntax() -> ParseResult {
    let f = Expression::parse("x**3 - x - 2")?;
    assert_eq!(f.eval(2.0), 4.0);
    assert_eq!(f.source(), "x**3 - x - 2");
    Ok(())
}

#[test]
fn functions_and_constants() -> ParseResult {
    let f = Expression::parse("exp(-x) - x")?;
    assert_abs_diff_eq!(f.eval(1.0), (-1.0_f64).exp() - 1.0, epsilon = 1e-15);

    let g = Expression::parse("sin(x) + cos(pi * x)")?;
    assert_abs_diff_eq!(g.eval(0.0), 1.0, epsilon = 1e-15);

    let h = Expression::parse("log(x)")?;
    assert_abs_diff_eq!(h.eval(std::f64::consts::E), 1.0, epsilon = 1e-15);
    Ok(())
}

#[test]
fn trims_and_displays_source() -> ParseResult {
    let f: Expression = "  x - 1 \n".parse()?;
    assert_eq!(f.to_string(), "x - 1");
    assert_eq!(f.eval(1.0), 0.0);
    Ok(())
}

#[test]
fn empty() {
    assert_eq!(Expression::parse("   ").unwrap_err(), ParseError::Empty);
}

#[test]
fn syntax_errors() {
    for bad in ["(x", "x +", "2 * * x"] {
        let err = Expression::parse(bad).unwrap_err();
        assert!(matches!(err, ParseError::Syntax { .. }), "input={bad:?}, got {err:?}");
    }
}

#[test]
fn other_variables_rejected() {
    let err = Expression::parse("x + y").unwrap_err();
    assert!(matches!(err, ParseError::Binding { ref input, .. } if input == "x + y"));
}

#[test]
fn unknown_function_rejected() {
    let err = Expression::parse("frobnicate(x)").unwrap_err();
    assert!(matches!(err, ParseError::Binding { .. }));
}

#[test]
fn drives_root_finder() -> Result<(), Box<dyn std::error::Error>> {
    let f = Expression::parse("x**2 - 2")?;
    let res = find_root(|x| f.eval(x), 0.0, 2.0)?;

    assert_abs_diff_eq!(res.root, 2.0_f64.sqrt(), epsilon = 1e-6);
    Ok(())
}
