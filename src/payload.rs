//! Payload codec: the flat little-endian `f32` array after the header.
//!
//! Values are decoded in file order. Mapping an index to a pixel and channel is
//! left to [`SpectralImage`](crate::SpectralImage).

use crate::config::TrailingBytes;
use crate::descriptor::FormatDescriptor;
use crate::error::{FormatError, Result};
use crate::{HEADER_SIZE, SAMPLE_SIZE};

/// Decode the payload for `descriptor` from `data` (the bytes following the header).
///
/// A short payload, or with `TrailingBytes::Reject` one whose length is not a
/// multiple of four, fails with `Truncated`. Surplus whole values fail with
/// `SizeMismatch` under `Reject` and are dropped under `Ignore`.
pub fn decode_payload(
    data: &[u8],
    descriptor: &FormatDescriptor,
    trailing: TrailingBytes,
) -> Result<Vec<f32>> {
    let available = data.len();
    // Dimensions past addressable memory can never be satisfied by a real buffer
    let expected = descriptor
        .payload_len()
        .map_err(|_| FormatError::truncated(HEADER_SIZE, usize::MAX, available))?;

    if available < expected {
        return Err(FormatError::truncated(HEADER_SIZE, expected, available));
    }

    if available > expected {
        match trailing {
            TrailingBytes::Reject if !available.is_multiple_of(SAMPLE_SIZE) => {
                let needed = available.next_multiple_of(SAMPLE_SIZE);
                return Err(FormatError::truncated(HEADER_SIZE, needed, available));
            }
            TrailingBytes::Reject => {
                return Err(FormatError::byte_mismatch(expected, available));
            }
            TrailingBytes::Ignore => {
                log::warn!(
                    "Ignoring {} trailing bytes after spb payload",
                    available - expected
                );
            }
        }
    }

    let values: Vec<f32> = data[..expected]
        .chunks_exact(SAMPLE_SIZE)
        .map(|chunk| f32::from_le_bytes([chunk[0], chunk[1], chunk[2], chunk[3]]))
        .collect();

    log::trace!("Decoded {} payload values", values.len());
    Ok(values)
}

/// Encode reflectance values as contiguous little-endian bytes.
pub fn encode_payload(values: &[f32]) -> Vec<u8> {
    let mut out = Vec::with_capacity(values.len() * SAMPLE_SIZE);
    encode_payload_into(values, &mut out);
    out
}

/// Append the encoded values to `out`.
pub fn encode_payload_into(values: &[f32], out: &mut Vec<u8>) {
    out.reserve(values.len() * SAMPLE_SIZE);
    for value in values {
        out.extend_from_slice(&value.to_le_bytes());
    }
}
