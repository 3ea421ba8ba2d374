//! Error type for animation data

use std::io;

/// Errors raised while building or loading animation data
#[derive(Debug)]
pub enum AnimError {
    /// Parallel frame columns have different lengths
    LengthMismatch {
        /// Index of the offending column
        index: usize,
        expected: usize,
        found: usize,
    },
    /// A path was given no points
    EmptyPath,
    /// A path needs more points than it was given
    TooFewPoints { required: usize, found: usize },
    /// An easing type or method name was not recognised
    UnknownEasing(String),
    /// IO error (file not found, permission denied, etc.)
    Io(io::Error),
    /// Parse error (invalid RON syntax)
    Parse(ron::error::SpannedError),
    /// Serialization error
    Serialize(ron::Error),
}

impl From<io::Error> for AnimError {
    fn from(e: io::Error) -> Self {
        AnimError::Io(e)
    }
}

impl From<ron::error::SpannedError> for AnimError {
    fn from(e: ron::error::SpannedError) -> Self {
        AnimError::Parse(e)
    }
}

impl From<ron::Error> for AnimError {
    fn from(e: ron::Error) -> Self {
        AnimError::Serialize(e)
    }
}

impl std::fmt::Display for AnimError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AnimError::LengthMismatch { index, expected, found } => write!(
                f,
                "Column {} has {} entries, expected {}",
                index, found, expected
            ),
            AnimError::EmptyPath => write!(f, "Path has no points"),
            AnimError::TooFewPoints { required, found } => write!(
                f,
                "Path needs at least {} points, got {}",
                required, found
            ),
            AnimError::UnknownEasing(name) => write!(f, "Unknown easing: {}", name),
            AnimError::Io(e) => write!(f, "IO error: {}", e),
            AnimError::Parse(e) => write!(f, "Parse error: {}", e),
            AnimError::Serialize(e) => write!(f, "Serialize error: {}", e),
        }
    }
}

impl std::error::Error for AnimError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            AnimError::Io(e) => Some(e),
            AnimError::Parse(e) => Some(e),
            AnimError::Serialize(e) => Some(e),
            _ => None,
        }
    }
}
