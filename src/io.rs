//! Read-all / write-all file wrapper around the byte codecs.
//!
//! File handles live only inside these functions and are closed on every
//! return path, including decode failures.

use std::fs::File;
use std::io::{BufWriter, Read, Write};
use std::path::Path;

use crate::HEADER_SIZE;
use crate::codec::{decode_image_with, encode_image};
use crate::config::CodecOptions;
use crate::descriptor::FormatDescriptor;
use crate::error::Result;
use crate::header::decode_header;
use crate::image::SpectralImage;

/// Read only the header of a `.spb` file.
pub fn read_header_file(path: impl AsRef<Path>) -> Result<FormatDescriptor> {
    let path = path.as_ref();
    let file = File::open(path)?;

    let mut header = Vec::with_capacity(HEADER_SIZE);
    file.take(HEADER_SIZE as u64).read_to_end(&mut header)?;
    log::trace!("Read {} header bytes from {}", header.len(), path.display());
    decode_header(&header)
}

/// Read and decode a whole `.spb` file with the default options.
pub fn read_file(path: impl AsRef<Path>) -> Result<SpectralImage> {
    read_file_with(path, &CodecOptions::default())
}

/// Read and decode a whole `.spb` file.
pub fn read_file_with(path: impl AsRef<Path>, options: &CodecOptions) -> Result<SpectralImage> {
    let path = path.as_ref();
    let bytes = std::fs::read(path)?;
    log::debug!("Read {} bytes from {}", bytes.len(), path.display());
    decode_image_with(&bytes, options)
}

/// Encode `image` and write it to `path`, replacing any existing file.
///
/// Encoding happens before the file is created, so an inconsistent image
/// leaves the filesystem untouched.
pub fn write_file(path: impl AsRef<Path>, image: &SpectralImage) -> Result<()> {
    let path = path.as_ref();
    let bytes = encode_image(image)?;

    let mut writer = BufWriter::new(File::create(path)?);
    writer.write_all(&bytes)?;
    writer.flush()?;

    log::debug!("Wrote {} bytes to {}", bytes.len(), path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::TrailingBytes;
    use crate::error::FormatError;

    fn sample() -> SpectralImage {
        let desc = FormatDescriptor::new(4, 2, 3).with_wavelengths(450.0, 50.0, 550.0);
        let data = (0..24).map(|i| (i % 7) as f32 * 0.125).collect();
        SpectralImage::new(desc, data).unwrap()
    }

    #[test]
    fn test_write_then_read() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("scene.spb");

        write_file(&path, &sample()).unwrap();
        assert_eq!(
            std::fs::metadata(&path).unwrap().len() as usize,
            sample().descriptor.file_len().unwrap()
        );
        assert_eq!(read_file(&path).unwrap(), sample());
        assert_eq!(read_header_file(&path).unwrap(), sample().descriptor);
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing.spb");
        assert!(matches!(read_file(&path), Err(FormatError::Io(_))));
        assert!(matches!(read_header_file(&path), Err(FormatError::Io(_))));
    }

    #[test]
    fn test_short_file_header_truncated() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("short.spb");
        std::fs::write(&path, b"SPB\x01\x00").unwrap();
        assert!(matches!(
            read_header_file(&path),
            Err(FormatError::Truncated { available: 5, .. })
        ));
    }

    #[test]
    fn test_inconsistent_image_not_written() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("bad.spb");
        let mut image = sample();
        image.data.truncate(3);

        assert!(matches!(
            write_file(&path, &image),
            Err(FormatError::SizeMismatch { .. })
        ));
        assert!(!path.exists());
    }

    #[test]
    fn test_read_with_lenient_options() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("padded.spb");
        let mut bytes = encode_image(&sample()).unwrap();
        bytes.extend_from_slice(&[0, 0, 0, 0]);
        std::fs::write(&path, &bytes).unwrap();

        assert!(read_file(&path).is_err());
        let options = CodecOptions::new().trailing_bytes(TrailingBytes::Ignore);
        assert_eq!(read_file_with(&path, &options).unwrap(), sample());
    }
}
