//! SPB - Spectral Binary codec
//!
//! Reads and writes `.spb` hyperspectral raster files: a fixed 27-byte header
//! (`"SPB"`, dimensions, wavelength metadata) followed by `width * height *
//! channel_count` little-endian `f32` reflectance values in column-major order.
//!
//! ```rust,ignore
//! use spb::{decode_image, encode_image};
//!
//! let image = decode_image(&bytes)?;
//! let spectrum = image.spectrum(10, 20);
//! let out = encode_image(&image)?;
//! ```

mod codec;
mod config;
mod descriptor;
mod error;
mod header;
mod image;
mod io;
mod npy;
mod payload;

#[cfg(test)]
mod tests;

pub use codec::{decode_image, decode_image_with, encode_image};
pub use config::{CodecOptions, TrailingBytes};
pub use descriptor::FormatDescriptor;
pub use error::{FormatError, Result};
pub use header::{decode_header, encode_header, is_spb};
pub use image::SpectralImage;
pub use io::{read_file, read_file_with, read_header_file, write_file};
pub use npy::{read_npy, write_npy};
pub use payload::{decode_payload, encode_payload, encode_payload_into};

/// File identifier at offset 0
pub const MAGIC: [u8; 3] = *b"SPB";

/// Size of the fixed header in bytes
pub const HEADER_SIZE: usize = 27;

/// Size of one encoded reflectance value
pub const SAMPLE_SIZE: usize = 4;
