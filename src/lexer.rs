use crate::error::Error;
use crate::token::{Op, Token};
use std::iter::Peekable;
use std::str::Chars;

#[must_use]
/// Check if `ident` is a valid variable name
///
/// # Examples
///
/// ```
/// # use curvecalc::is_variable;
///
/// assert_eq!(is_variable("__abc3"), true);
/// assert_eq!(is_variable("34zb"), false);
/// ```
pub fn is_variable(ident: &str) -> bool {
    let mut chars = ident.chars();
    // Check first char
    if !chars.next().map_or(false, is_variable_start) {
        return false;
    }
    // Check all others
    for c in chars {
        if !is_variable_part(c) {
            return false;
        }
    }
    return true;
}

/// An helper struct for lexing the input
pub struct Lexer<'a> {
    input: Peekable<Chars<'a>>,
}

impl<'a> Lexer<'a> {
    pub fn new(string: &str) -> Lexer {
        Lexer {
            input: string.chars().peekable(),
        }
    }

    /// Lex the input and run it through a shunting-yard pass, producing the
    /// tokens in reverse polish notation.
    pub fn parse(&mut self) -> Result<Vec<Token>, Error> {
        let tokens = self.tokenize()?;
        let mut output = Vec::new();
        let mut operators: Vec<Token> = Vec::new();

        'tokens: for token in tokens {
            match token {
                Token::Value(_) => output.push(token),
                Token::Func(_) => operators.push(token),
                Token::Op(o1) if o1.is_unary() => {
                    // A prefix operator takes the next operand; nothing on the
                    // stack can complete before that operand is read.
                    operators.push(Token::Op(o1));
                }
                Token::Op(o1) => {
                    'operators: while let Some(top) = operators.last().cloned() {
                        match top {
                            Token::Op(o2) => {
                                let pop_me =
                                    o1.is_left_associative() && o1.precedence() <= o2.precedence();
                                let pop_me = pop_me
                                    || o1.is_right_associative()
                                        && o1.precedence() < o2.precedence();
                                if pop_me {
                                    operators.pop();
                                    output.push(Token::Op(o2));
                                } else {
                                    break 'operators;
                                }
                            }
                            _ => break 'operators,
                        }
                    }
                    operators.push(Token::Op(o1));
                }
                Token::LParen => operators.push(token),
                Token::RParen => {
                    while let Some(top) = operators.pop() {
                        match top {
                            Token::LParen => {
                                // The parenthesis may have closed a call's
                                // argument, in which case the function applies
                                // now.
                                if let Some(&Token::Func(_)) = operators.last() {
                                    output.extend(operators.pop());
                                }
                                continue 'tokens;
                            }
                            Token::Op(_) => output.push(top),
                            other => panic!("Internal bug: found {:?} in operators stack", other),
                        }
                    }
                    return Err(Error::ParseError("mismatched parenthesis".into()));
                }
            }
        }

        while let Some(token) = operators.pop() {
            match token {
                Token::LParen => return Err(Error::ParseError("mismatched parenthesis".into())),
                Token::Op(_) | Token::Func(_) => output.push(token),
                other => panic!("Internal bug: found {:?} in operators stack", other),
            }
        }
        Ok(output)
    }

    /// Lex the whole input into infix tokens, classifying `+`/`-` in operand
    /// position as prefix signs and identifiers followed by `(` as call
    /// sites.
    fn tokenize(&mut self) -> Result<Vec<Token>, Error> {
        let mut raw = Vec::new();
        while let Some(token) = self.next_token()? {
            raw.push(token);
        }

        let mut tokens: Vec<Token> = Vec::with_capacity(raw.len());
        let mut iter = raw.into_iter().peekable();
        while let Some(token) = iter.next() {
            let operand_position = matches!(
                tokens.last(),
                None | Some(Token::Op(_)) | Some(Token::LParen) | Some(Token::Func(_))
            );
            match token {
                // A prefix plus is a no-op
                Token::Op(Op::Plus) if operand_position => {}
                Token::Op(Op::Minus) if operand_position => tokens.push(Token::Op(Op::Neg)),
                Token::Value(name)
                    if is_variable(&name) && iter.peek() == Some(&Token::LParen) =>
                {
                    tokens.push(Token::Func(name));
                }
                other => tokens.push(other),
            }
        }
        Ok(tokens)
    }

    fn next_token(&mut self) -> Result<Option<Token>, Error> {
        let c = loop {
            match self.input.next() {
                Some(c) if c == ' ' || c == '\t' || c == '\n' || c == '\r' => continue,
                Some(c) => break c,
                None => return Ok(None),
            }
        };
        let token = match c {
            '+' => Token::Op(Op::Plus),
            '-' => Token::Op(Op::Minus),
            '*' => Token::Op(Op::Mul),
            '/' => Token::Op(Op::Div),
            '^' => Token::Op(Op::Exp),
            '(' => Token::LParen,
            ')' => Token::RParen,
            c if c.is_ascii_digit() => Token::Value(self.lex_number(c)),
            c if is_variable_start(c) => Token::Value(self.lex_identifier(c)),
            other => {
                return Err(Error::ParseError(format!(
                    "unexpected character in input: {}",
                    other
                )));
            }
        };
        Ok(Some(token))
    }

    /// Lex a numeric literal: digits and dots, plus an optional `e`/`E`
    /// exponent with its own sign, as in `5e-6`.
    fn lex_number(&mut self, first: char) -> String {
        let mut text = String::new();
        text.push(first);
        while let Some(&c) = self.input.peek() {
            if c.is_ascii_digit() || c == '.' {
                self.input.next();
                text.push(c);
            } else if c == 'e' || c == 'E' {
                // Only an exponent when a (signed) digit follows; otherwise
                // the `e` starts an identifier and the literal ends here.
                let mut ahead = self.input.clone();
                ahead.next();
                let sign = match ahead.peek() {
                    Some(&s) if s == '+' || s == '-' => {
                        ahead.next();
                        Some(s)
                    }
                    _ => None,
                };
                match ahead.peek() {
                    Some(d) if d.is_ascii_digit() => {
                        self.input.next();
                        text.push('e');
                        if let Some(sign) = sign {
                            self.input.next();
                            text.push(sign);
                        }
                    }
                    _ => break,
                }
            } else {
                break;
            }
        }
        text
    }

    /// Lex an identifier, lowercasing it so that `SIN(X)` and `sin(x)` parse
    /// identically.
    fn lex_identifier(&mut self, first: char) -> String {
        let mut ident = String::new();
        ident.push(first.to_ascii_lowercase());
        while let Some(&c) = self.input.peek() {
            if is_variable_part(c) {
                self.input.next();
                ident.push(c.to_ascii_lowercase());
            } else {
                break;
            }
        }
        ident
    }
}

/// Check if `c` can appear at the first character of a variable
fn is_variable_start(c: char) -> bool {
    c == '_' || c.is_ascii_alphabetic()
}

/// Check if `c` can appear inside a variable
fn is_variable_part(c: char) -> bool {
    c == '_' || c.is_ascii_alphanumeric()
}
