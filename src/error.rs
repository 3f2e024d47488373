//! Error type shared by the curve evaluator and the raster output.

use std::fmt::{Display, Formatter};

/// Everything that can go wrong while building, drawing or saving a curve.
#[derive(Debug)]
pub enum Error {
    /// A curve needs at least two control points
    InvalidInput {
        /// Number of control points that were actually given
        points: usize,
    },

    /// The output file couldn't be created or written
    Io(std::io::Error),

    /// The png encoder rejected the image
    Encoding(png::EncodingError),
}

/// Shorthand for results carrying this crate's [`Error`].
pub type Result<T> = std::result::Result<T, Error>;

impl Display for Error {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Error::InvalidInput { points } => write!(
                f,
                "a bezier curve needs at least 2 control points, got {}",
                points
            ),
            Error::Io(err) => write!(f, "couldn't write image: {}", err),
            Error::Encoding(err) => write!(f, "couldn't encode png: {}", err),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::InvalidInput { .. } => None,
            Error::Io(err) => Some(err),
            Error::Encoding(err) => Some(err),
        }
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Io(err)
    }
}

impl From<png::EncodingError> for Error {
    fn from(err: png::EncodingError) -> Self {
        Error::Encoding(err)
    }
}
