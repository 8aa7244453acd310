//! Plot of `f` over the initial bracket with the root marked.
//!
//! The backend is chosen from the output extension:
//! ├ `.svg`    -> [`SVGBackend`]
//! └ otherwise -> [`BitMapBackend`] (PNG for `.png`)

use std::path::{Path, PathBuf};

use plotters::coord::Shift;
use plotters::prelude::*;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum PlotError {
    #[error("invalid plot range: a and b must be finite and distinct. got [{a}, {b}]")]
    InvalidRange { a: f64, b: f64 },

    #[error("no finite samples of f on [{a}, {b}]")]
    NoFiniteSamples { a: f64, b: f64 },

    #[error("invalid plot config: {reason}")]
    InvalidConfig { reason: &'static str },

    #[error("plotting backend failed: {0}")]
    Backend(String),
}

impl PlotError {
    fn backend<E: std::fmt::Display>(err: E) -> Self {
        Self::Backend(err.to_string())
    }
}


/// Plot configuration.
///
/// # Defaults
///
/// ┌ DEFAULT_OUTPUT  - `regula_falsi.png`
/// ├ DEFAULT_SIZE    - 1000 x 600 px
/// └ DEFAULT_SAMPLES - points along the curve
#[derive(Debug, Clone, PartialEq)]
pub struct PlotCfg {
    output:  PathBuf,
    size:    (u32, u32),
    samples: usize,
}

impl PlotCfg {
    pub const DEFAULT_OUTPUT:  &'static str = "regula_falsi.png";
    pub const DEFAULT_SIZE:    (u32, u32)   = (1000, 600);
    pub const DEFAULT_SAMPLES: usize        = 400;

    #[must_use]
    pub fn new() -> Self { Self::default() }

    pub fn with_output(mut self, v: impl Into<PathBuf>) -> Self { self.output = v.into(); self }
    pub fn with_size(mut self, width: u32, height: u32) -> Self { self.size = (width, height); self }
    pub fn with_samples(mut self, v: usize) -> Self { self.samples = v; self }

    #[inline] #[must_use] pub fn output(&self)  -> &Path      { &self.output }
    #[inline] #[must_use] pub fn size(&self)    -> (u32, u32) { self.size }
    #[inline] #[must_use] pub fn samples(&self) -> usize      { self.samples }

    pub fn validate(&self) -> Result<(), PlotError> {
        if self.samples < 2 {
            return Err(PlotError::InvalidConfig { reason: "samples must be >= 2" });
        }
        if self.size.0 == 0 || self.size.1 == 0 {
            return Err(PlotError::InvalidConfig { reason: "width and height must be > 0" });
        }
        if self.output.as_os_str().is_empty() {
            return Err(PlotError::InvalidConfig { reason: "output path is empty" });
        }
        Ok(())
    }
}

impl Default for PlotCfg {
    fn default() -> Self {
        Self {
            output:  PathBuf::from(Self::DEFAULT_OUTPUT),
            size:    Self::DEFAULT_SIZE,
            samples: Self::DEFAULT_SAMPLES,
        }
    }
}


/// Draws `func` over `[a, b]` (either order) with `root` marked on the
/// x axis and writes the figure to `cfg.output()`.
///
/// `label` is shown in the legend as `f(x) = <label>`.
///
/// # Returns
/// The path that was written.
///
/// # Errors
/// ┌ [`PlotError::InvalidRange`]    - `a`/`b` non-finite or equal.
/// ├ [`PlotError::InvalidConfig`]   - see [`PlotCfg::validate`].
/// ├ [`PlotError::NoFiniteSamples`] - f is NaN/inf everywhere sampled.
/// └ [`PlotError::Backend`]         - drawing or writing the file failed.
pub fn render<F>(
    func: F,
    label: &str,
    a: f64,
    b: f64,
    root: f64,
    cfg: &PlotCfg,
) -> Result<PathBuf, PlotError>
where F: Fn(f64) -> f64 {
    cfg.validate()?;
    if !(a.is_finite() && b.is_finite()) || a == b {
        return Err(PlotError::InvalidRange { a, b });
    }

    let x_range = (a.min(b), a.max(b));
    let points  = sample(&func, x_range, cfg.samples());
    if points.is_empty() {
        return Err(PlotError::NoFiniteSamples { a, b });
    }
    let y_range = y_range(&points);

    let output = cfg.output();
    let is_svg = output
        .extension()
        .and_then(|e| e.to_str())
        .is_some_and(|e| e.eq_ignore_ascii_case("svg"));

    if is_svg {
        let area = SVGBackend::new(output, cfg.size()).into_drawing_area();
        draw(&area, &points, label, x_range, y_range, root)?;
    } else {
        let area = BitMapBackend::new(output, cfg.size()).into_drawing_area();
        draw(&area, &points, label, x_range, y_range, root)?;
    }

    Ok(output.to_path_buf())
}


/// `n` evenly spaced samples over `[lo, hi]`, dropping non-finite values.
fn sample<F>(func: &F, (lo, hi): (f64, f64), n: usize) -> Vec<(f64, f64)>
where F: Fn(f64) -> f64 {
    let step = (hi - lo) / (n - 1) as f64;
    (0..n)
        .filter_map(|i| {
            let x = if i + 1 == n { hi } else { lo + step * i as f64 };
            let y = func(x);
            y.is_finite().then_some((x, y))
        })
        .collect()
}

/// y extent of the samples, widened to include 0 and padded by 10%.
fn y_range(points: &[(f64, f64)]) -> (f64, f64) {
    let (lo, hi) = points
        .iter()
        .fold((0.0_f64, 0.0_f64), |(lo, hi), &(_, y)| (lo.min(y), hi.max(y)));
    let span   = hi - lo;
    let margin = if span > 0.0 { 0.1 * span } else { 1.0 };
    (lo - margin, hi + margin)
}

fn draw<DB: DrawingBackend>(
    area: &DrawingArea<DB, Shift>,
    points: &[(f64, f64)],
    label: &str,
    (x_lo, x_hi): (f64, f64),
    (y_lo, y_hi): (f64, f64),
    root: f64,
) -> Result<(), PlotError> {
    area.fill(&WHITE).map_err(PlotError::backend)?;

    let mut chart = ChartBuilder::on(area)
        .caption("Regula falsi root search", ("sans-serif", 28).into_font())
        .margin(10)
        .x_label_area_size(35)
        .y_label_area_size(60)
        .build_cartesian_2d(x_lo..x_hi, y_lo..y_hi)
        .map_err(PlotError::backend)?;

    chart
        .configure_mesh()
        .x_desc("x")
        .y_desc("f(x)")
        .draw()
        .map_err(PlotError::backend)?;

    // axes at zero
    chart
        .draw_series(LineSeries::new(vec![(x_lo, 0.0), (x_hi, 0.0)], &BLACK))
        .map_err(PlotError::backend)?;
    if x_lo <= 0.0 && 0.0 <= x_hi {
        chart
            .draw_series(LineSeries::new(vec![(0.0, y_lo), (0.0, y_hi)], &BLACK))
            .map_err(PlotError::backend)?;
    }

    chart
        .draw_series(LineSeries::new(points.iter().copied(), &BLUE))
        .map_err(PlotError::backend)?
        .label(format!("f(x) = {label}"))
        .legend(|(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], &BLUE));

    chart
        .draw_series(PointSeries::of_element(
            vec![(root, 0.0)],
            5,
            &RED,
            &|c, s, st| {
                EmptyElement::at(c)
                    + Circle::new((0, 0), s, st.filled())
                    + Text::new(
                        format!("{root:.6}"),
                        (10, -15),
                        ("sans-serif", 15).into_font(),
                    )
            },
        ))
        .map_err(PlotError::backend)?
        .label(format!("root ≈ {root:.6}"))
        .legend(|(x, y)| Circle::new((x, y), 4, RED.filled()));

    chart
        .configure_series_labels()
        .background_style(&WHITE.mix(0.8))
        .border_style(&BLACK)
        .draw()
        .map_err(PlotError::backend)?;

    area.present().map_err(PlotError::backend)?;
    Ok(())
}
