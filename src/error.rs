//! Error types for Spectral Binary encode/decode operations.

use thiserror::Error;

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, FormatError>;

/// Errors that can occur while reading or writing `.spb` data.
#[derive(Error, Debug)]
pub enum FormatError {
    /// The first three bytes are not `"SPB"`
    #[error("Bad file identifier: expected \"SPB\", found {found:?}")]
    BadMagic {
        /// The three bytes found at offset 0
        found: [u8; 3],
    },

    /// Buffer ends before a section is complete
    #[error("Truncated data at offset {offset}: needed {needed} bytes, got {available}")]
    Truncated {
        /// Absolute file offset of the section being read
        offset: usize,
        /// Bytes the section requires
        needed: usize,
        /// Bytes actually present
        available: usize,
    },

    /// Payload length disagrees with the header dimensions
    #[error("Size mismatch: expected {expected} {unit}, found {actual}")]
    SizeMismatch {
        /// Length implied by the header dimensions
        expected: usize,
        /// Length actually present
        actual: usize,
        /// Unit of both lengths ("bytes" or "values")
        unit: &'static str,
    },

    /// Dimensions whose product does not fit in memory addressing
    #[error("Image dimensions too large: {width}x{height}x{channel_count}")]
    TooLarge {
        /// Declared width
        width: u32,
        /// Declared height
        height: u32,
        /// Declared channel count
        channel_count: u32,
    },

    /// Array shape unusable as a spectral image
    #[error("Invalid array shape {shape:?}: {message}")]
    Shape {
        /// Offending shape
        shape: Vec<usize>,
        /// Description of the problem
        message: String,
    },

    /// I/O error during file operations
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// NumPy array could not be read
    #[error("NumPy read error: {0}")]
    NpyRead(#[from] ndarray_npy::ReadNpyError),

    /// NumPy array could not be written
    #[error("NumPy write error: {0}")]
    NpyWrite(#[from] ndarray_npy::WriteNpyError),
}

impl FormatError {
    /// Create a truncation error for the section starting at `offset`.
    pub fn truncated(offset: usize, needed: usize, available: usize) -> Self {
        Self::Truncated {
            offset,
            needed,
            available,
        }
    }

    /// Create a size mismatch measured in bytes.
    pub fn byte_mismatch(expected: usize, actual: usize) -> Self {
        Self::SizeMismatch {
            expected,
            actual,
            unit: "bytes",
        }
    }

    /// Create a size mismatch measured in reflectance values.
    pub fn value_mismatch(expected: usize, actual: usize) -> Self {
        Self::SizeMismatch {
            expected,
            actual,
            unit: "values",
        }
    }

    /// Create an invalid shape error.
    pub fn shape(shape: &[usize], message: impl Into<String>) -> Self {
        Self::Shape {
            shape: shape.to_vec(),
            message: message.into(),
        }
    }

    /// Whether this error reports malformed file content (as opposed to I/O).
    pub fn is_corruption(&self) -> bool {
        matches!(
            self,
            Self::BadMagic { .. } | Self::Truncated { .. } | Self::SizeMismatch { .. }
        )
    }
}
