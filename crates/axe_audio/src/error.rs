//! Error type for the audio layer

use std::io;

#[derive(Debug)]
pub enum AudioError {
    /// No sound, bank or queue is registered under this name
    UnknownSound(String),
    /// No context is registered under this name
    UnknownContext(String),
    /// The sound backend could not load an asset
    Load { asset: String, reason: String },
    /// IO error (file not found, permission denied, etc.)
    Io(io::Error),
    /// Parse error (invalid RON syntax)
    Parse(ron::error::SpannedError),
    /// Serialization error
    Serialize(ron::Error),
}

impl From<io::Error> for AudioError {
    fn from(e: io::Error) -> Self {
        AudioError::Io(e)
    }
}

impl From<ron::error::SpannedError> for AudioError {
    fn from(e: ron::error::SpannedError) -> Self {
        AudioError::Parse(e)
    }
}

impl From<ron::Error> for AudioError {
    fn from(e: ron::Error) -> Self {
        AudioError::Serialize(e)
    }
}

impl std::fmt::Display for AudioError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AudioError::UnknownSound(name) => write!(f, "Unknown sound: {}", name),
            AudioError::UnknownContext(name) => write!(f, "Unknown audio context: {}", name),
            AudioError::Load { asset, reason } => write!(f, "Failed to load '{}': {}", asset, reason),
            AudioError::Io(e) => write!(f, "IO error: {}", e),
            AudioError::Parse(e) => write!(f, "Parse error: {}", e),
            AudioError::Serialize(e) => write!(f, "Serialize error: {}", e),
        }
    }
}

impl std::error::Error for AudioError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            AudioError::Io(e) => Some(e),
            AudioError::Parse(e) => Some(e),
            AudioError::Serialize(e) => Some(e),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        let e = AudioError::Load { asset: "boom".into(), reason: "missing".into() };
        assert_eq!(e.to_string(), "Failed to load 'boom': missing");
        assert_eq!(AudioError::UnknownContext("menu".into()).to_string(), "Unknown audio context: menu");
    }

    #[test]
    fn test_io_source() {
        use std::error::Error;
        let e: AudioError = io::Error::new(io::ErrorKind::NotFound, "gone").into();
        assert!(e.source().is_some());
        assert!(AudioError::UnknownSound("x".into()).source().is_none());
    }
}
