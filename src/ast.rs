use crate::error::Error;
use crate::lexer::is_variable;
use crate::token::{Op, Token};
use crate::util::{CONSTANTS, FUNCTIONS};

/// Ast nodes for the expressions
#[derive(Debug, Clone)]
pub enum Ast {
    /// A variable, to be resolved at evaluation time
    Variable(String),
    /// A constant value
    Value(f64),
    /// <left> + <right>
    Add(Box<Ast>, Box<Ast>),
    /// <left> - <right>
    Sub(Box<Ast>, Box<Ast>),
    /// <left> * <right>
    Mul(Box<Ast>, Box<Ast>),
    /// <left> / <right>
    Div(Box<Ast>, Box<Ast>),
    /// <left> ^ <right>
    Exp(Box<Ast>, Box<Ast>),
    /// -<arg>
    Neg(Box<Ast>),
    /// fn(<arg>)
    Function(fn(f64) -> f64, Box<Ast>),
}

impl PartialEq<Self> for Ast {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Ast::Variable(name), Ast::Variable(name2)) => name == name2,
            (Ast::Value(v), Ast::Value(v2)) => v.to_le_bytes() == v2.to_le_bytes(),
            (Ast::Add(a, b), Ast::Add(a2, b2)) => a == a2 && b == b2,
            (Ast::Sub(a, b), Ast::Sub(a2, b2)) => a == a2 && b == b2,
            (Ast::Mul(a, b), Ast::Mul(a2, b2)) => a == a2 && b == b2,
            (Ast::Div(a, b), Ast::Div(a2, b2)) => a == a2 && b == b2,
            (Ast::Exp(a, b), Ast::Exp(a2, b2)) => a == a2 && b == b2,
            (Ast::Neg(a), Ast::Neg(a2)) => a == a2,
            (Ast::Function(f, a), Ast::Function(f2, a2)) => f == f2 && a == a2,
            _ => false,
        }
    }
}
impl Eq for Ast {}

impl Ast {
    /// Construct the AST for a vector of tokens in reverse polish notation.
    /// This function eats the tokens as it uses them
    pub fn from_tokens(tokens: &mut Vec<Token>, context: &str) -> Result<Self, Error> {
        let ast = Self::from_tokens_internal(tokens, context)?;
        Ok(ast.optimize())
    }

    fn from_tokens_internal(tokens: &mut Vec<Token>, context: &str) -> Result<Self, Error> {
        if let Some(token) = tokens.pop() {
            match token {
                Token::Value(value) => {
                    if let Ok(number) = value.parse() {
                        Ok(Self::Value(number))
                    } else if let Some(&constant) = CONSTANTS.get(&value) {
                        Ok(Self::Value(constant))
                    } else if is_variable(&value) {
                        Ok(Self::Variable(value))
                    } else {
                        Err(Error::ParseError(format!("invalid value {}", value)))
                    }
                }
                Token::Func(name) => match FUNCTIONS.get(&name) {
                    Some(&func) => {
                        let arg =
                            Box::new(Self::from_tokens_internal(tokens, " in function call")?);
                        Ok(Self::Function(func, arg))
                    }
                    None => Err(Error::NameError(format!("unknown function '{}'", name))),
                },
                Token::Op(Op::Neg) => {
                    let arg = Box::new(Self::from_tokens_internal(tokens, " after unary minus")?);
                    Ok(Self::Neg(arg))
                }
                Token::Op(op) => {
                    let right = Box::new(Self::from_tokens_internal(tokens, " after operator")?);
                    let left = Box::new(Self::from_tokens_internal(tokens, " before operator")?);
                    match op {
                        Op::Plus => Ok(Self::Add(left, right)),
                        Op::Minus => Ok(Self::Sub(left, right)),
                        Op::Mul => Ok(Self::Mul(left, right)),
                        Op::Div => Ok(Self::Div(left, right)),
                        Op::Exp => Ok(Self::Exp(left, right)),
                        Op::Neg => unreachable!("prefix operators are handled above"),
                    }
                }
                other => panic!("Internal error: got {:?} token after shunting yard", other),
            }
        } else {
            Err(Error::ParseError(format!("empty expression{}", context)))
        }
    }

    /// If the AST node correspond to a constant, get `Some(constant)`. Else,
    /// get `None`
    pub fn value(&self) -> Option<f64> {
        if let Self::Value(value) = *self {
            Some(value)
        } else {
            None
        }
    }

    /// Optimize the AST by doing constants propagation
    pub fn optimize(self) -> Self {
        match self {
            Self::Variable(_) | Self::Value(_) => self,
            Self::Function(func, arg) => {
                let arg = arg.optimize();
                if let Some(arg) = arg.value() {
                    return Self::Value(func(arg));
                }
                return Self::Function(func, Box::new(arg));
            }
            Self::Neg(arg) => {
                let arg = arg.optimize();
                if let Some(arg) = arg.value() {
                    return Self::Value(-arg);
                }
                return Self::Neg(Box::new(arg));
            }
            Self::Add(left, right) => {
                let left = left.optimize();
                let right = right.optimize();
                if let Some(left) = left.value() {
                    if let Some(right) = right.value() {
                        return Self::Value(left + right);
                    }
                }
                return Self::Add(Box::new(left), Box::new(right));
            }
            Self::Sub(left, right) => {
                let left = left.optimize();
                let right = right.optimize();
                if let Some(left) = left.value() {
                    if let Some(right) = right.value() {
                        return Self::Value(left - right);
                    }
                }
                return Self::Sub(Box::new(left), Box::new(right));
            }
            Self::Mul(left, right) => {
                let left = left.optimize();
                let right = right.optimize();
                if let Some(left) = left.value() {
                    if let Some(right) = right.value() {
                        return Self::Value(left * right);
                    }
                }
                return Self::Mul(Box::new(left), Box::new(right));
            }
            Self::Div(left, right) => {
                let left = left.optimize();
                let right = right.optimize();
                if let Some(left) = left.value() {
                    if let Some(right) = right.value() {
                        return Self::Value(left / right);
                    }
                }
                return Self::Div(Box::new(left), Box::new(right));
            }
            Self::Exp(left, right) => {
                let left = left.optimize();
                let right = right.optimize();
                if let Some(left) = left.value() {
                    if let Some(right) = right.value() {
                        return Self::Value(libm::pow(left, right));
                    }
                }
                return Self::Exp(Box::new(left), Box::new(right));
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::Ast;
    use crate::error::Error;
    use crate::lexer::Lexer;

    fn build(input: &str) -> Result<Ast, Error> {
        Ast::from_tokens(&mut Lexer::new(input).parse()?, "")
    }

    #[test]
    // Verifies that we have reduced the input to a single value token when possible
    fn optimize() {
        assert_eq!(build("3 + 5").unwrap().value(), Some(8.0));
        assert_eq!(build("(3 + 5^2)*45").unwrap().value(), Some(1260.0));
        assert_eq!(build("sqrt(9)").unwrap().value(), Some(3.0));
        assert_eq!(build("-2^2").unwrap().value(), Some(-4.0));
        assert_eq!(build("2 * pi").unwrap().value(), Some(2.0 * std::f64::consts::PI));
    }

    #[test]
    fn variables_are_not_folded() {
        let ast = build("x + 1").unwrap();
        assert_eq!(ast.value(), None);
    }

    #[test]
    fn unknown_function() {
        let err = build("frob(2)").unwrap_err();
        assert_eq!(
            err,
            Error::NameError("unknown function 'frob'".to_string())
        );
    }
}
