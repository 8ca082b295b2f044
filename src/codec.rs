//! Whole-file decode and encode.

use crate::HEADER_SIZE;
use crate::config::CodecOptions;
use crate::error::{FormatError, Result};
use crate::header::{decode_header, encode_header};
use crate::image::SpectralImage;
use crate::payload::{decode_payload, encode_payload_into};

/// Decode a complete `.spb` file with the default (strict) options.
pub fn decode_image(data: &[u8]) -> Result<SpectralImage> {
    decode_image_with(data, &CodecOptions::default())
}

/// Decode a complete `.spb` file.
///
/// Either a fully valid image is returned or nothing is.
pub fn decode_image_with(data: &[u8], options: &CodecOptions) -> Result<SpectralImage> {
    let descriptor = decode_header(data)?;
    let values = decode_payload(&data[HEADER_SIZE..], &descriptor, options.trailing_bytes)?;

    // Cross-check the decoded value count against the declared dimensions
    let image = SpectralImage::new(descriptor, values)?;

    log::debug!(
        "Decoded spb image {}x{} with {} channels ({} bytes)",
        descriptor.width,
        descriptor.height,
        descriptor.channel_count,
        data.len()
    );
    Ok(image)
}

/// Encode an image as a complete `.spb` file.
///
/// Fails with `SizeMismatch` if the data length disagrees with the descriptor,
/// so a malformed file is never produced.
pub fn encode_image(image: &SpectralImage) -> Result<Vec<u8>> {
    let descriptor = &image.descriptor;
    let expected = descriptor.sample_count()?;
    if image.data.len() != expected {
        return Err(FormatError::value_mismatch(expected, image.data.len()));
    }

    let mut out = Vec::with_capacity(descriptor.file_len()?);
    out.extend_from_slice(&encode_header(descriptor));
    encode_payload_into(&image.data, &mut out);

    log::debug!(
        "Encoded spb image {}x{} with {} channels ({} bytes)",
        descriptor.width,
        descriptor.height,
        descriptor.channel_count,
        out.len()
    );
    Ok(out)
}
