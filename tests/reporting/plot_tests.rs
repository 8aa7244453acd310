use std::path::PathBuf;

use falsi::reporting::plot::{render, PlotCfg, PlotError};
use falsi::root_finding::find_root;

#[test]
fn cfg_defaults() {
    let cfg = PlotCfg::new();
    assert_eq!(cfg.output(), PathBuf::from("regula_falsi.png"));
    assert_eq!(cfg.size(), (1000, 600));
    assert_eq!(cfg.samples(), 400);
    assert!(cfg.validate().is_ok());
}

#[test]
fn cfg_validation() {
    let bad = [
        PlotCfg::new().with_samples(1),
        PlotCfg::new().with_size(0, 600),
        PlotCfg::new().with_output(""),
    ];
    for cfg in bad {
        assert!(matches!(cfg.validate(), Err(PlotError::InvalidConfig { .. })), "{cfg:?}");
    }
}

#[test]
fn nothing_to_draw() {
    // sqrt is NaN on the whole bracket
    let err = render(|x: f64| x.sqrt(), "sqrt(x)", -2.0, -1.0, -1.5, &PlotCfg::new()).unwrap_err();
    assert!(matches!(err, PlotError::NoFiniteSamples { a, b } if a == -2.0 && b == -1.0));
}

#[test]
fn degenerate_range() {
    let err = render(|x| x, "x", 0.0, f64::NAN, 0.0, &PlotCfg::new()).unwrap_err();
    assert!(matches!(err, PlotError::InvalidRange { .. }));
}

fn temp_output(name: &str) -> PathBuf {
    std::env::temp_dir().join(format!("falsi_{}_{name}", std::process::id()))
}

#[test]
fn svg_output() -> Result<(), Box<dyn std::error::Error>> {
    let res  = find_root(|x| x * x - 2.0, 0.0, 2.0)?;
    let cfg  = PlotCfg::new().with_output(temp_output("sqrt2.svg"));
    let path = render(|x| x * x - 2.0, "x**2 - 2", 0.0, 2.0, res.root, &cfg)?;

    assert_eq!(path, cfg.output());
    let svg = std::fs::read_to_string(&path)?;
    assert!(svg.starts_with("<svg"));
    assert!(svg.contains("f(x) = x**2 - 2"));
    assert!(svg.contains(&format!("root ≈ {:.6}", res.root)));
    assert!(svg.contains("root ≈ 1.414213"));

    std::fs::remove_file(path)?;
    Ok(())
}

#[test]
fn png_output() -> Result<(), Box<dyn std::error::Error>> {
    let res  = find_root(|x| x * x * x - x - 2.0, 1.0, 2.0)?;
    let cfg  = PlotCfg::new().with_output(temp_output("cubic.png")).with_size(400, 300);
    let path = render(|x| x * x * x - x - 2.0, "x**3 - x - 2", 1.0, 2.0, res.root, &cfg)?;

    let bytes = std::fs::read(&path)?;
    assert!(bytes.starts_with(b"\x89PNG"));

    std::fs::remove_file(path)?;
    Ok(())
}
