use std::error;
use std::fmt::{self, Display, Formatter};

/// Error type for the curvecalc crate
#[derive(Debug, Clone, PartialEq)]
pub enum Error {
    /// Error while parsing an expression
    ParseError(String),
    /// Unknown variable or function name during parsing or evaluation
    NameError(String),
    /// A viewport axis range with zero or non-finite width, which cannot be
    /// mapped to device coordinates
    DegenerateViewport(String),
}

impl Display for Error {
    fn fmt(&self, fmt: &mut Formatter) -> fmt::Result {
        match *self {
            Self::ParseError(ref message) => write!(fmt, "ParseError: {}", message),
            Self::NameError(ref message) => write!(fmt, "NameError: {}", message),
            Self::DegenerateViewport(ref message) => {
                write!(fmt, "DegenerateViewport: {}", message)
            }
        }
    }
}

impl error::Error for Error {}
