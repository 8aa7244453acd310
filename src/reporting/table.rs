//! Fixed-width text rendering of a trace and of the final result.

use std::fmt;

use crate::root_finding::{IterationRecord, RegulaFalsiReport};

/// Column header, aligned with 6-decimal values.
pub const HEADER: &str =
    "   Iter |     a     |     b     |     c     |    f(a)   |    f(b)   |    f(c)   |  Error";

/// Width of the rule printed under [`HEADER`].
pub const RULE_WIDTH: usize = 90;


/// Renders a trace as a table, one row per [`IterationRecord`].
///
/// ```text
///    Iter |     a     |     b     |     c     |    f(a)   |    f(b)   |    f(c)   |  Error
/// ------------------------------------------------------------------------------------------
///       1 | 0.000000 | 2.000000 | 1.000000 | -2.000000 | 2.000000 | -1.000000 | 1.000000
/// ```
#[derive(Debug, Clone, Copy)]
pub struct TraceTable<'a> {
    records: &'a [IterationRecord],
}

impl<'a> TraceTable<'a> {
    pub fn new(records: &'a [IterationRecord]) -> Self {
        Self { records }
    }
}

impl fmt::Display for TraceTable<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{HEADER}")?;
        writeln!(f, "{}", "-".repeat(RULE_WIDTH))?;
        for r in self.records {
            writeln!(
                f,
                "{:7} | {:.6} | {:.6} | {:.6} | {:.6} | {:.6} | {:.6} | {:.6}",
                r.iteration, r.a, r.b, r.c, r.fa, r.fb, r.fc, r.error
            )?;
        }
        Ok(())
    }
}


/// One-line result summary, with a note when the tolerance was not met.
#[derive(Debug, Clone, Copy)]
pub struct Summary<'a> {
    report: &'a RegulaFalsiReport,
}

impl<'a> Summary<'a> {
    pub fn new(report: &'a RegulaFalsiReport) -> Self {
        Self { report }
    }
}

impl fmt::Display for Summary<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let r = self.report;
        write!(f, "Root found at x ≈ {:.8} after {} iterations", r.root, r.iterations)?;
        if !r.converged() {
            write!(
                f,
                "\nwarning: tolerance not reached within {} iterations (|f(x)| = {:e})",
                r.iterations,
                r.f_root.abs()
            )?;
        }
        Ok(())
    }
}
