//! Input abstraction
//!
//! Sources of text for the transformer. Reading and UTF-8 decoding are the
//! only fallible steps in the pipeline.

use crate::error::{CoreError, Result};
use std::fs;
use std::io::Read;
use std::path::PathBuf;

/// Text source for a transformer run
pub enum Input {
    /// Text already in memory
    Text(String),
    /// Bytes to decode as UTF-8
    Bytes(Vec<u8>),
    /// File to read
    File(PathBuf),
    /// Reader stream such as stdin
    Reader(Box<dyn Read + Send>),
}

impl std::fmt::Debug for Input {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Input::Text(text) => f.debug_tuple("Text").field(text).finish(),
            Input::Bytes(bytes) => f
                .debug_tuple("Bytes")
                .field(&format!("<{} bytes>", bytes.len()))
                .finish(),
            Input::File(path) => f.debug_tuple("File").field(path).finish(),
            Input::Reader(_) => f.debug_tuple("Reader").field(&"<Reader>").finish(),
        }
    }
}

impl Input {
    /// Create input from a text string
    pub fn from_text<S: Into<String>>(text: S) -> Self {
        Input::Text(text.into())
    }

    /// Create input from raw bytes
    pub fn from_bytes(bytes: Vec<u8>) -> Self {
        Input::Bytes(bytes)
    }

    /// Create input from a file path
    pub fn from_file<P: Into<PathBuf>>(path: P) -> Self {
        Input::File(path.into())
    }

    /// Create input from a reader
    pub fn from_reader<R: Read + Send + 'static>(reader: R) -> Self {
        Input::Reader(Box::new(reader))
    }

    /// Read and decode the whole input
    pub fn to_text(self) -> Result<String> {
        match self {
            Input::Text(text) => Ok(text),
            Input::Bytes(bytes) => String::from_utf8(bytes)
                .map_err(|e| CoreError::Encoding(format!("Invalid UTF-8: {e}"))),
            Input::File(path) => {
                let bytes = fs::read(&path)
                    .map_err(|e| CoreError::Io(format!("Failed to read file {path:?}: {e}")))?;
                String::from_utf8(bytes)
                    .map_err(|e| CoreError::Encoding(format!("Invalid UTF-8 in {path:?}: {e}")))
            }
            Input::Reader(mut reader) => {
                let mut buffer = Vec::new();
                reader
                    .read_to_end(&mut buffer)
                    .map_err(|e| CoreError::Io(format!("Failed to read from stream: {e}")))?;
                String::from_utf8(buffer)
                    .map_err(|e| CoreError::Encoding(format!("Invalid UTF-8 from stream: {e}")))
            }
        }
    }
}

impl From<String> for Input {
    fn from(text: String) -> Self {
        Input::Text(text)
    }
}

impl From<&str> for Input {
    fn from(text: &str) -> Self {
        Input::Text(text.to_string())
    }
}

impl From<PathBuf> for Input {
    fn from(path: PathBuf) -> Self {
        Input::File(path)
    }
}

impl From<Vec<u8>> for Input {
    fn from(bytes: Vec<u8>) -> Self {
        Input::Bytes(bytes)
    }
}
