//! Error types for the huffman_rust crate.

use std::io;

/// Result type alias using our Error type.
pub type Result<T> = std::result::Result<T, HuffmanError>;

/// Errors that can occur while decoding an artifact or talking to a byte source/sink.
///
/// Empty input is not an error: it compresses to an empty artifact.
#[derive(Debug, thiserror::Error)]
pub enum HuffmanError {
    /// The serialized code tree is malformed or truncated.
    #[error("Corrupt tree header: {0}")]
    CorruptHeader(String),

    /// The content bitstream ended before the declared data did.
    #[error("Truncated content: {0}")]
    TruncatedContent(String),

    /// The content decoded to a different number of bytes than the artifact declares.
    #[error("Decoded {actual} bytes, the artifact declares {expected}")]
    LengthMismatch { expected: u64, actual: u64 },

    /// The container bytes could not be deserialized.
    #[error("Invalid artifact: {0}")]
    InvalidArtifact(String),

    /// The properties sidecar is missing a key or holds an unparsable value.
    #[error("Invalid properties: {0}")]
    InvalidProperties(String),

    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] io::Error),
}

impl HuffmanError {
    /// Maps an error raised while deserializing an in-memory buffer.
    ///
    /// There is no real I/O behind a slice, so an unexpected end of input means the
    /// artifact was cut short.
    pub(crate) fn from_buffer(err: bincode::Error) -> Self {
        match *err {
            bincode::ErrorKind::Io(e) if e.kind() == io::ErrorKind::UnexpectedEof => {
                HuffmanError::TruncatedContent("artifact ends before its declared fields".into())
            }
            other => HuffmanError::InvalidArtifact(other.to_string()),
        }
    }

    /// Maps an error raised while reading from or writing to a stream, keeping I/O
    /// failures unchanged.
    pub(crate) fn from_stream(err: bincode::Error) -> Self {
        match *err {
            bincode::ErrorKind::Io(e) => HuffmanError::Io(e),
            other => HuffmanError::InvalidArtifact(other.to_string()),
        }
    }
}
