//! Single-variable expressions parsed from text.
//!
//! [`Expression::parse`] turns user input such as `x**2 - 2` or
//! `exp(-x) - x` into a callable `f(x)`. Parsing and evaluation are
//! delegated to [`meval`]; this module only normalizes the input and makes
//! sure the result depends on `x` alone.
//!
//! Accepted syntax is meval's (`^` for powers, `ln`, `sqrt`, `exp`, `sin`,
//! `pi`, `e`, ...) plus two aliases:
//! ├ `**`   -> `^`
//! └ `log(` -> `ln(`

pub mod errors;

pub use errors::ParseError;

use std::fmt;

use meval::Expr;

/// Name of the free variable.
pub const VARIABLE: &str = "x";

/// A parsed, bound expression in the single real variable `x`.
pub struct Expression {
    source: String,
    func:   Box<dyn Fn(f64) -> f64>,
}

impl Expression {
    /// Parses `input` and binds it to the variable `x`.
    ///
    /// # Errors
    /// ┌ [`ParseError::Empty`]   - `input` is blank.
    /// ├ [`ParseError::Syntax`]  - `input` is not a valid expression.
    /// └ [`ParseError::Binding`] - `input` uses a variable other than `x`,
    ///                             or calls a function with the wrong arity.
    pub fn parse(input: &str) -> Result<Self, ParseError> {
        let source = input.trim();
        if source.is_empty() {
            return Err(ParseError::Empty);
        }

        let expr: Expr = normalize(source).parse().map_err(|e: meval::Error| {
            ParseError::Syntax { input: source.to_owned(), reason: e.to_string() }
        })?;

        let func = expr.bind(VARIABLE).map_err(|e| ParseError::Binding {
            input:  source.to_owned(),
            reason: e.to_string(),
        })?;

        Ok(Self { source: source.to_owned(), func: Box::new(func) })
    }

    /// Evaluates the expression at `x`.
    #[inline]
    pub fn eval(&self, x: f64) -> f64 {
        (self.func)(x)
    }

    /// The expression as the user wrote it (trimmed).
    #[must_use]
    pub fn source(&self) -> &str {
        &self.source
    }
}

impl fmt::Display for Expression {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.source)
    }
}

impl fmt::Debug for Expression {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Expression").field("source", &self.source).finish_non_exhaustive()
    }
}

impl std::str::FromStr for Expression {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

/// Rewrites Python-style operators into meval syntax.
fn normalize(input: &str) -> String {
    input.replace("**", "^").replace("log(", "ln(")
}
