#![warn(missing_docs, clippy::all, clippy::pedantic)]
#![allow(
    clippy::needless_return,
    clippy::missing_docs_in_private_items,
    clippy::non_ascii_literal
)]

//! Curvecalc, the core of a graphing calculator: a mathematical expression
//! evaluator plus the sampling and geometry pipeline that turns an expression
//! into drawable curves, grid lines and axis labels.
//!
//! # Evaluating expressions
//!
//! The easiest way to evaluate an expression is the
//! [`eval`](fn.eval.html) function:
//!
//! ```
//! use std::collections::HashMap;
//! assert_eq!(curvecalc::eval("3 + 5 * 2", &HashMap::new()), Ok(13.0));
//! ```
//!
//! The second argument supplies variable bindings:
//!
//! ```
//! use std::collections::HashMap;
//!
//! let mut bindings: HashMap<String, f64> = HashMap::new();
//! bindings.insert("x".into(), 3.5);
//! assert_eq!(curvecalc::eval("2 * x", &bindings), Ok(7.0));
//! ```
//!
//! Parsing can be separated from evaluation with the
//! [`Expr`](struct.Expr.html) type, which is how the plotting pipeline reuses
//! one expression across many sample points:
//!
//! ```
//! use std::collections::HashMap;
//! use curvecalc::Expr;
//!
//! let expr = Expr::parse("x^2 - 1").unwrap();
//! let mut bindings: HashMap<String, f64> = HashMap::new();
//! bindings.insert("x".into(), 3.0);
//! assert_eq!(expr.eval(&bindings), Ok(8.0));
//!
//! bindings.insert("x".into(), -1.0);
//! assert_eq!(expr.eval(&bindings), Ok(0.0));
//! ```
//!
//! # Rendering a curve
//!
//! [`render`](fn.render.html) runs one full synchronous pass: it maps the
//! viewport onto the canvas, lays out grid lines and axis labels, then
//! samples the expression into device-space polylines, splitting them at
//! discontinuities and off-screen excursions:
//!
//! ```
//! use curvecalc::{render, CanvasSize, Viewport};
//!
//! let canvas = CanvasSize { width: 800, height: 600 };
//! let frame = render("tan(x)", &Viewport::default(), canvas).unwrap();
//! assert!(frame.error_message.is_none());
//! // the branches of tan are separate polylines, not joined across asymptotes
//! assert!(frame.polylines.len() >= 2);
//! ```
//!
//! # The calculator
//!
//! [`Calculator`](struct.Calculator.html) is a small button-driven state
//! machine over the same evaluator:
//!
//! ```
//! use curvecalc::Calculator;
//!
//! let mut calc = Calculator::new();
//! for key in ["5", "+", "3", "="].iter() {
//!     calc.press(key);
//! }
//! assert_eq!(calc.display(), "8");
//! ```
//!
//! # Language definition
//!
//! The expression language contains the following elements:
//!
//! - float literal values: `12.456`, `0.0045e78`, ...;
//! - left and right parenthesis;
//! - mathematical operators: `+` for addition, `-` for subtraction and
//!   negation, `*` for multiplication, `/` for division and `^` for
//!   exponentiation;
//! - variables. Variable names are ASCII only, start with a letter or `_`,
//!   and contain letters, digits and `_`;
//! - the named constants `pi`, `e` and `tau`;
//! - function calls: `sin(x)`, `atan(22.0)`. The following functions are
//!   accessible, with the same meaning as the corresponding `libm` function:
//!   `sqrt`, `cbrt`, `sin`, `cos`, `tan`, `asin`, `acos`, `atan`, `sinh`,
//!   `cosh`, `tanh`, `asinh`, `acosh`, `atanh`, `floor`, `ceil`, `abs`,
//!   `exp`, `log`, `ln`, `log2`, `log10`.
//!
//! Identifiers are matched case-insensitively; any other symbol in the input
//! is an error.
//!
//! The mathematical operators obey the usual relations of associativity and
//! precedence (`^` is right-associative and binds tighter than negation),
//! but still carry the floating point properties: `1/0` is an infinity,
//! out-of-domain arguments give `NaN`, and only parse errors and unknown
//! names are hard failures.
//!
//! # Technical details
//!
//! The evaluator is an AST interpreter using a shunting-yard pass for
//! parsing. It works only with `f64` data, and performs constant propagation
//! to optimize the expressions once at parse time. Rendering is a pure
//! function of its inputs: nothing is cached or shared between passes.

#[macro_use]
extern crate lazy_static;

mod ast;
mod calculator;
mod error;
mod expr;
mod grid;
mod lexer;
mod render;
mod sampler;
mod token;
mod util;
mod viewport;

pub use crate::calculator::Calculator;
pub use crate::error::Error;
pub use crate::expr::{eval, Expr};
pub use crate::grid::{compute_grid, GridGeometry, TickLabel};
pub use crate::lexer::is_variable;
pub use crate::render::{render, render_with, CanvasSize, RenderOptions, RenderOutput};
pub use crate::sampler::{sample, Polyline, SampleOptions};
pub use crate::util::{CONSTANTS, FUNCTIONS};
pub use crate::viewport::{CoordinateMapper, Viewport};
