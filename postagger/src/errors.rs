//! Definition of errors.

use std::error::Error;
use std::fmt;

pub type Result<T, E = PosTaggerError> = std::result::Result<T, E>;

#[derive(Debug)]
pub enum PosTaggerError {
    MalformedToken(MalformedTokenError),
    LengthMismatch(LengthMismatchError),
    InvalidArgument(InvalidArgumentError),
    DecodeError(bincode::error::DecodeError),
    EncodeError(bincode::error::EncodeError),
    IOError(std::io::Error),
}

impl PosTaggerError {
    pub(crate) fn malformed_token<S, T>(token: S, line: T) -> Self
    where
        S: Into<String>,
        T: Into<String>,
    {
        Self::MalformedToken(MalformedTokenError {
            token: token.into(),
            line: line.into(),
            line_number: None,
        })
    }

    pub(crate) fn invalid_argument<S>(arg: &'static str, msg: S) -> Self
    where
        S: Into<String>,
    {
        Self::InvalidArgument(InvalidArgumentError {
            arg,
            msg: msg.into(),
        })
    }

    pub(crate) fn with_line_number(self, line_number: usize) -> Self {
        match self {
            Self::MalformedToken(e) => Self::MalformedToken(MalformedTokenError {
                line_number: Some(line_number),
                ..e
            }),
            e => e,
        }
    }
}

impl fmt::Display for PosTaggerError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Self::MalformedToken(e) => e.fmt(f),
            Self::LengthMismatch(e) => e.fmt(f),
            Self::InvalidArgument(e) => e.fmt(f),
            Self::DecodeError(e) => e.fmt(f),
            Self::EncodeError(e) => e.fmt(f),
            Self::IOError(e) => e.fmt(f),
        }
    }
}

impl Error for PosTaggerError {}

/// Error used when a unit of a tagged corpus has no `word/tag` shape.
#[derive(Debug)]
pub struct MalformedTokenError {
    /// The offending whitespace-separated unit.
    pub(crate) token: String,

    /// The line containing the unit.
    pub(crate) line: String,

    /// 1-origin line number, if the unit was read from a file.
    pub(crate) line_number: Option<usize>,
}

impl MalformedTokenError {
    /// Gets the offending unit.
    pub fn token(&self) -> &str {
        &self.token
    }

    /// Gets the line containing the offending unit.
    pub fn line(&self) -> &str {
        &self.line
    }

    /// Gets the 1-origin line number, if known.
    pub const fn line_number(&self) -> Option<usize> {
        self.line_number
    }
}

impl fmt::Display for MalformedTokenError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self.line_number {
            Some(n) => write!(
                f,
                "MalformedTokenError: line {}: `{}` is not a word/tag pair: {}",
                n, self.token, self.line
            ),
            None => write!(
                f,
                "MalformedTokenError: `{}` is not a word/tag pair: {}",
                self.token, self.line
            ),
        }
    }
}

impl Error for MalformedTokenError {}

/// Error used when two tag streams cannot be aligned position by position.
#[derive(Debug)]
pub struct LengthMismatchError {
    /// Number of tags in the predicted stream.
    pub(crate) predicted: usize,

    /// Number of tags in the key stream.
    pub(crate) key: usize,
}

impl LengthMismatchError {
    /// Gets the number of predicted tags.
    pub const fn predicted(&self) -> usize {
        self.predicted
    }

    /// Gets the number of key tags.
    pub const fn key(&self) -> usize {
        self.key
    }
}

impl fmt::Display for LengthMismatchError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "LengthMismatchError: {} predicted tags but {} key tags",
            self.predicted, self.key
        )
    }
}

impl Error for LengthMismatchError {}

/// Error used when the argument is invalid.
#[derive(Debug)]
pub struct InvalidArgumentError {
    /// Name of the argument.
    pub(crate) arg: &'static str,

    /// Error message.
    pub(crate) msg: String,
}

impl fmt::Display for InvalidArgumentError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "InvalidArgumentError: {}: {}", self.arg, self.msg)
    }
}

impl Error for InvalidArgumentError {}

impl From<bincode::error::DecodeError> for PosTaggerError {
    fn from(error: bincode::error::DecodeError) -> Self {
        Self::DecodeError(error)
    }
}

impl From<bincode::error::EncodeError> for PosTaggerError {
    fn from(error: bincode::error::EncodeError) -> Self {
        Self::EncodeError(error)
    }
}

impl From<std::io::Error> for PosTaggerError {
    fn from(error: std::io::Error) -> Self {
        Self::IOError(error)
    }
}
