use crate::ast::Ast;
use crate::lexer::Lexer;
use crate::Error;
use std::collections::{HashMap, HashSet};

/// Evaluate a single expression from `input`.
///
/// Returns `Ok(result)` if the evaluation is successful, or `Err(cause)` if
/// parsing or evaluating the expression failed.
///
/// # Example
///
/// ```
/// # use std::collections::HashMap;
/// # use curvecalc::eval;
///
/// assert_eq!(eval("45 - 2^3", &HashMap::new()), Ok(37.0));
///
/// let mut bindings: HashMap<String, f64> = HashMap::new();
/// bindings.insert("a".into(), -5.0);
/// assert_eq!(eval("3 * a", &bindings), Ok(-15.0));
/// ```
pub fn eval(input: &str, bindings: &HashMap<String, f64>) -> Result<f64, Error> {
    Expr::parse(input).and_then(|expr| expr.eval(bindings))
}

/// A parsed and optimized mathematical expression.
///
/// # Examples
/// ```
/// # use curvecalc::Expr;
/// # use std::collections::HashMap;
/// let expr = Expr::parse("3 + 5 * 2").unwrap();
/// assert_eq!(expr.eval(&HashMap::new()), Ok(13.0));
///
/// let mut bindings: HashMap<String, f64> = HashMap::new();
/// bindings.insert("x".into(), 42.0);
/// let expr = Expr::parse("-2 * x").unwrap();
/// assert_eq!(expr.eval(&bindings), Ok(-84.0));
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Expr {
    ast: Ast,
}

impl Expr {
    /// Parse the given mathematical `expression` into an `Expr`.
    ///
    /// Identifiers are matched case-insensitively, so `SIN(X)` parses to the
    /// same expression as `sin(x)`.
    ///
    /// # Examples
    /// ```
    /// # use curvecalc::Expr;
    /// // A valid expression
    /// assert!(Expr::parse("3 + 5 * 2").is_ok());
    /// // an invalid expression
    /// assert!(Expr::parse("3 +* 5").is_err());
    /// ```
    pub fn parse(expression: &str) -> Result<Self, Error> {
        let mut tokens = Lexer::new(expression).parse()?;
        let ast = Ast::from_tokens(&mut tokens, "")?;
        if !tokens.is_empty() {
            return Err(Error::ParseError(
                "malformed expression: unexpected trailing input".into(),
            ));
        }
        Ok(Self { ast })
    }

    /// Evaluate the expression against the given variable `bindings`.
    ///
    /// Arithmetic follows IEEE-754: dividing by zero gives an infinity and
    /// out-of-domain function arguments give `NaN` rather than an error. Only
    /// a reference to a name missing from `bindings` fails.
    ///
    /// # Examples
    ///
    /// ```
    /// # use curvecalc::Expr;
    /// # use std::collections::HashMap;
    /// let expr = Expr::parse("1 / x").unwrap();
    ///
    /// let mut bindings: HashMap<String, f64> = HashMap::new();
    /// bindings.insert("x".into(), 4.0);
    /// assert_eq!(expr.eval(&bindings), Ok(0.25));
    /// bindings.insert("x".into(), 0.0);
    /// assert_eq!(expr.eval(&bindings), Ok(f64::INFINITY));
    /// ```
    pub fn eval(&self, bindings: &HashMap<String, f64>) -> Result<f64, Error> {
        Self::inner_eval(&self.ast, bindings)
    }

    fn inner_eval(ast: &Ast, bindings: &HashMap<String, f64>) -> Result<f64, Error> {
        match *ast {
            Ast::Variable(ref name) => bindings.get(name).copied().ok_or_else(|| {
                Error::NameError(format!("name '{}' is not defined", name))
            }),
            Ast::Value(number) => Ok(number),
            Ast::Add(ref left, ref right) => {
                Ok(Self::inner_eval(left, bindings)? + Self::inner_eval(right, bindings)?)
            }
            Ast::Sub(ref left, ref right) => {
                Ok(Self::inner_eval(left, bindings)? - Self::inner_eval(right, bindings)?)
            }
            Ast::Mul(ref left, ref right) => {
                Ok(Self::inner_eval(left, bindings)? * Self::inner_eval(right, bindings)?)
            }
            Ast::Div(ref left, ref right) => {
                Ok(Self::inner_eval(left, bindings)? / Self::inner_eval(right, bindings)?)
            }
            Ast::Exp(ref left, ref right) => Ok(libm::pow(
                Self::inner_eval(left, bindings)?,
                Self::inner_eval(right, bindings)?,
            )),
            Ast::Neg(ref arg) => Ok(-Self::inner_eval(arg, bindings)?),
            Ast::Function(ref func, ref arg) => Ok(func(Self::inner_eval(arg, bindings)?)),
        }
    }

    /// Get the set of unbound variable names referenced by the expression.
    ///
    /// Named constants and function names do not count: they are resolved at
    /// parse time.
    ///
    /// # Examples
    /// ```
    /// # use curvecalc::Expr;
    /// # use std::collections::HashSet;
    /// let expr = Expr::parse("3 + 5 * 2").unwrap();
    /// assert_eq!(expr.variables(), HashSet::new());
    ///
    /// let expr = Expr::parse("sin(x) + pi").unwrap();
    /// assert_eq!(expr.variables(), HashSet::from(["x"]));
    /// ```
    pub fn variables(&self) -> HashSet<&str> {
        let mut variables = HashSet::new();
        Self::inner_variables(&self.ast, &mut variables);
        variables
    }

    fn inner_variables<'a>(ast: &'a Ast, variables: &mut HashSet<&'a str>) {
        match *ast {
            Ast::Variable(ref name) => {
                variables.insert(name);
            }
            Ast::Value(_) => {}
            Ast::Add(ref left, ref right)
            | Ast::Sub(ref left, ref right)
            | Ast::Mul(ref left, ref right)
            | Ast::Div(ref left, ref right)
            | Ast::Exp(ref left, ref right) => {
                Self::inner_variables(left, variables);
                Self::inner_variables(right, variables);
            }
            Ast::Neg(ref arg) | Ast::Function(_, ref arg) => {
                Self::inner_variables(arg, variables);
            }
        }
    }
}
