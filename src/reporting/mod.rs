//! Presentation of a finished run: text table and plot.
//!
//! Nothing here feeds back into the root finder.

pub mod plot;
pub mod table;

pub use plot::{render, PlotCfg, PlotError};
pub use table::{Summary, TraceTable};
