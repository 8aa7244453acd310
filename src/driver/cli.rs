//! Command-line front end.
//!
//! ```text
//! falsi [EXPR] [A] [B] [--tol T] [--max-iter N] [--plot PATH | --no-plot] [-v]
//! ```
//!
//! Positionals left out on the command line are asked for interactively.
//! `--` ends option parsing.

use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use thiserror::Error;

use super::RunCfg;
use crate::expression::{Expression, ParseError};
use crate::reporting::PlotCfg;
use crate::root_finding::{RegulaFalsiCfg, RootFindingError};

pub const USAGE: &str = "\
usage: falsi [EXPR] [A] [B] [options]

  EXPR              f(x), e.g. \"x**2 - 2\" or \"exp(-x) - x\"
  A, B              bracket; f(A) and f(B) must have opposite signs

options:
  --tol T           stop once |f(c)| < T           (default 1e-6)
  --max-iter N      iteration cap                  (default 100)
  --plot PATH       write the plot to PATH (.png or .svg, default regula_falsi.png)
  --no-plot         skip plotting
  -v, --verbose     log progress to stderr
  -h, --help        show this message";

#[derive(Debug, Error)]
pub enum CliError {
    #[error("unknown option `{0}`")]
    UnknownOption(String),

    #[error("option `{0}` requires a value")]
    MissingValue(String),

    #[error("unexpected argument `{0}`")]
    UnexpectedArgument(String),

    #[error("invalid {name}: `{value}`")]
    InvalidNumber { name: &'static str, value: String },

    #[error("input ended before {0} was given")]
    UnexpectedEof(&'static str),

    #[error(transparent)]
    Parse(#[from] ParseError),

    #[error(transparent)]
    Config(#[from] RootFindingError),

    #[error("failed to read input")]
    Io(#[from] io::Error),
}


/// Where the plot goes.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum PlotChoice {
    #[default]
    Default,
    Path(PathBuf),
    Disabled,
}

/// Raw command-line arguments, before prompting.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct CliArgs {
    pub expression: Option<String>,
    pub a:          Option<f64>,
    pub b:          Option<f64>,
    pub tolerance:  Option<f64>,
    pub max_iter:   Option<usize>,
    pub plot:       PlotChoice,
    pub verbose:    bool,
    pub help:       bool,
}


/// Parses arguments (program name excluded).
///
/// Tokens that parse as numbers are positionals even when they start with
/// `-`, so negative bounds need no escaping. Everything after `--` is
/// positional, for expressions such as `-x + 2`.
pub fn parse_args<I, S>(args: I) -> Result<CliArgs, CliError>
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    let mut out = CliArgs::default();
    let mut positionals: Vec<String> = Vec::new();
    let mut iter = args.into_iter().map(Into::into);

    while let Some(arg) = iter.next() {
        if arg == "--" {
            positionals.extend(iter.by_ref());
            break;
        }
        let is_option = arg.starts_with('-') && arg.parse::<f64>().is_err();
        if !is_option {
            positionals.push(arg);
            continue;
        }

        let (flag, inline) = match arg.split_once('=') {
            Some((f, v)) => (f.to_owned(), Some(v.to_owned())),
            None => (arg.clone(), None),
        };
        let mut value = |name: &str| -> Result<String, CliError> {
            inline
                .clone()
                .or_else(|| iter.next())
                .ok_or_else(|| CliError::MissingValue(name.to_owned()))
        };

        match flag.as_str() {
            "--tol" | "--tolerance" => {
                out.tolerance = Some(parse_number("tolerance", &value(&flag)?)?);
            }
            "--max-iter" => {
                let v = value(&flag)?;
                let n = v
                    .parse::<usize>()
                    .map_err(|_| CliError::InvalidNumber { name: "max-iter", value: v })?;
                out.max_iter = Some(n);
            }
            "--plot"           => out.plot = PlotChoice::Path(PathBuf::from(value(&flag)?)),
            "--no-plot" | "-v" | "--verbose" | "-h" | "--help" if inline.is_some() => {
                return Err(CliError::UnexpectedArgument(arg));
            }
            "--no-plot"        => out.plot = PlotChoice::Disabled,
            "-v" | "--verbose" => out.verbose = true,
            "-h" | "--help"    => out.help = true,
            _ => return Err(CliError::UnknownOption(arg)),
        }
    }

    let mut positionals = positionals.into_iter();
    out.expression = positionals.next();
    out.a = positionals.next().map(|v| parse_number("a", &v)).transpose()?;
    out.b = positionals.next().map(|v| parse_number("b", &v)).transpose()?;
    if let Some(extra) = positionals.next() {
        return Err(CliError::UnexpectedArgument(extra));
    }

    Ok(out)
}


/// Completes `args` into a [`RunCfg`], prompting on `input`/`output` for
/// anything missing.
///
/// The expression is checked before the bounds are asked for.
pub fn resolve<R, W>(args: CliArgs, input: &mut R, output: &mut W) -> Result<RunCfg, CliError>
where
    R: BufRead,
    W: Write,
{
    let expression = match args.expression {
        Some(e) => e,
        None => prompt(input, output, "f(x)", "Enter f(x) (Python syntax, e.g. x**2 - 2): ")?,
    };
    Expression::parse(&expression)?;

    let a = match args.a {
        Some(v) => v,
        None => parse_number("a", &prompt(input, output, "a", "Enter the lower bound (a): ")?)?,
    };
    let b = match args.b {
        Some(v) => v,
        None => parse_number("b", &prompt(input, output, "b", "Enter the upper bound (b): ")?)?,
    };

    let mut solver = RegulaFalsiCfg::new();
    if let Some(t) = args.tolerance {
        solver = solver.set_tolerance(t)?;
    }
    if let Some(n) = args.max_iter {
        solver = solver.set_max_iter(n)?;
    }

    let plot = match args.plot {
        PlotChoice::Default  => Some(PlotCfg::default()),
        PlotChoice::Path(p)  => Some(PlotCfg::default().with_output(p)),
        PlotChoice::Disabled => None,
    };

    Ok(RunCfg::new(expression, a, b).with_solver(solver).with_plot(plot))
}

fn prompt<R, W>(
    input: &mut R,
    output: &mut W,
    what: &'static str,
    message: &str,
) -> Result<String, CliError>
where
    R: BufRead,
    W: Write,
{
    write!(output, "{message}")?;
    output.flush()?;

    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Err(CliError::UnexpectedEof(what));
    }
    Ok(line.trim().to_owned())
}

fn parse_number(name: &'static str, value: &str) -> Result<f64, CliError> {
    value
        .trim()
        .parse::<f64>()
        .map_err(|_| CliError::InvalidNumber { name, value: value.to_owned() })
}
