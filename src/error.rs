//! Errors surfaced by a render.

use std::{fmt, io};

/// A render either had bad inputs or could not write its output.
#[derive(Debug)]
pub enum RenderError {
    InvalidParameters(ParameterError),
    /// The output could not be opened, written, or flushed.
    Output(io::Error),
}

#[derive(Debug, Clone, PartialEq)]
pub enum ParameterError {
    ZeroWidth,
    ZeroHeight,
    /// The image does not fit the 32-bit size fields of the header.
    TooLarge { width: u32, height: u32 },
    Resolution(u32),
    Iterations(u32),
    Centre { x: f64, y: f64 },
    Radius(f64),
    RowLength { expected: usize, actual: usize },
    /// More rows were written than the header declares.
    ExtraRow { height: u32 },
    /// The encoder was finished before every row was written.
    MissingRows { written: u32, height: u32 },
}

impl fmt::Display for ParameterError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParameterError::ZeroWidth => write!(f, "image width must be greater than 0"),
            ParameterError::ZeroHeight => write!(f, "image height must be greater than 0"),
            ParameterError::TooLarge { width, height } => {
                write!(f, "a {width}x{height} image is too large for a bitmap")
            }
            ParameterError::Resolution(resolution) => {
                write!(f, "resolution {resolution} is outside 1..=37800")
            }
            ParameterError::Iterations(iterations) => {
                write!(f, "iteration cap {iterations} is outside 1..=4294967294")
            }
            ParameterError::Centre { x, y } => {
                write!(f, "centre ({x}, {y}) must lie strictly within 2 of the origin on both axes")
            }
            ParameterError::Radius(radius) => write!(f, "radius {radius} is outside (0, 2]"),
            ParameterError::RowLength { expected, actual } => {
                write!(f, "row has {actual} samples, expected {expected}")
            }
            ParameterError::ExtraRow { height } => {
                write!(f, "image only has {height} rows")
            }
            ParameterError::MissingRows { written, height } => {
                write!(f, "only {written} of {height} rows were written")
            }
        }
    }
}

impl std::error::Error for ParameterError {}

impl fmt::Display for RenderError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RenderError::InvalidParameters(err) => write!(f, "invalid render parameters: {err}"),
            RenderError::Output(err) => write!(f, "could not write output: {err}"),
        }
    }
}

impl std::error::Error for RenderError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            RenderError::InvalidParameters(err) => Some(err),
            RenderError::Output(err) => Some(err),
        }
    }
}

impl From<io::Error> for RenderError {
    fn from(err: io::Error) -> Self {
        RenderError::Output(err)
    }
}

impl From<ParameterError> for RenderError {
    fn from(err: ParameterError) -> Self {
        RenderError::InvalidParameters(err)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn io_errors_are_output_errors() {
        let err: RenderError = io::Error::new(io::ErrorKind::PermissionDenied, "nope").into();
        assert!(matches!(err, RenderError::Output(_)));
        assert_eq!(err.to_string(), "could not write output: nope");
    }

    #[test]
    fn parameter_errors_are_distinguished() {
        let err: RenderError = ParameterError::ZeroWidth.into();
        assert!(matches!(
            err,
            RenderError::InvalidParameters(ParameterError::ZeroWidth)
        ));
        assert_eq!(
            err.to_string(),
            "invalid render parameters: image width must be greater than 0"
        );
    }
}
