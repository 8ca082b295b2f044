//! Header codec: the fixed 27-byte prefix of every `.spb` file.
//!
//! | Offset | Field                 | Type    |
//! |--------|-----------------------|---------|
//! | 0      | `"SPB"`               | ASCII   |
//! | 3      | width                 | u32 LE  |
//! | 7      | height                | u32 LE  |
//! | 11     | channel_count         | u32 LE  |
//! | 15     | first_wavelength      | f32 LE  |
//! | 19     | wavelength_resolution | f32 LE  |
//! | 23     | last_wavelength       | f32 LE  |
//!
//! Resolution precedes last wavelength on the wire.

use crate::descriptor::FormatDescriptor;
use crate::error::{FormatError, Result};
use crate::{HEADER_SIZE, MAGIC};

const WIDTH: usize = 3;
const HEIGHT: usize = 7;
const CHANNEL_COUNT: usize = 11;
const FIRST_WAVELENGTH: usize = 15;
const WAVELENGTH_RESOLUTION: usize = 19;
const LAST_WAVELENGTH: usize = 23;

/// Check whether `data` starts with the `.spb` file identifier.
pub fn is_spb(data: &[u8]) -> bool {
    data.starts_with(&MAGIC)
}

/// Decode the header at the start of `data`.
///
/// Bytes past the header are not inspected. Fails with `Truncated` when fewer
/// than 27 bytes are present and with `BadMagic` when the identifier is wrong.
pub fn decode_header(data: &[u8]) -> Result<FormatDescriptor> {
    let header: &[u8; HEADER_SIZE] = data
        .get(..HEADER_SIZE)
        .and_then(|h| h.try_into().ok())
        .ok_or_else(|| FormatError::truncated(0, HEADER_SIZE, data.len()))?;

    let found = [header[0], header[1], header[2]];
    if found != MAGIC {
        return Err(FormatError::BadMagic { found });
    }

    let descriptor = FormatDescriptor {
        width: read_u32(header, WIDTH),
        height: read_u32(header, HEIGHT),
        channel_count: read_u32(header, CHANNEL_COUNT),
        first_wavelength: read_f32(header, FIRST_WAVELENGTH),
        wavelength_resolution: read_f32(header, WAVELENGTH_RESOLUTION),
        last_wavelength: read_f32(header, LAST_WAVELENGTH),
    };

    log::trace!("Decoded spb header: {:?}", descriptor);
    Ok(descriptor)
}

/// Encode a descriptor as the 27-byte header.
pub fn encode_header(descriptor: &FormatDescriptor) -> [u8; HEADER_SIZE] {
    let mut header = [0u8; HEADER_SIZE];
    header[..MAGIC.len()].copy_from_slice(&MAGIC);
    write_field(&mut header, WIDTH, descriptor.width.to_le_bytes());
    write_field(&mut header, HEIGHT, descriptor.height.to_le_bytes());
    write_field(
        &mut header,
        CHANNEL_COUNT,
        descriptor.channel_count.to_le_bytes(),
    );
    write_field(
        &mut header,
        FIRST_WAVELENGTH,
        descriptor.first_wavelength.to_le_bytes(),
    );
    write_field(
        &mut header,
        WAVELENGTH_RESOLUTION,
        descriptor.wavelength_resolution.to_le_bytes(),
    );
    write_field(
        &mut header,
        LAST_WAVELENGTH,
        descriptor.last_wavelength.to_le_bytes(),
    );
    header
}

fn field(header: &[u8; HEADER_SIZE], offset: usize) -> [u8; 4] {
    [
        header[offset],
        header[offset + 1],
        header[offset + 2],
        header[offset + 3],
    ]
}

fn read_u32(header: &[u8; HEADER_SIZE], offset: usize) -> u32 {
    u32::from_le_bytes(field(header, offset))
}

fn read_f32(header: &[u8; HEADER_SIZE], offset: usize) -> f32 {
    f32::from_le_bytes(field(header, offset))
}

fn write_field(header: &mut [u8; HEADER_SIZE], offset: usize, bytes: [u8; 4]) {
    header[offset..offset + 4].copy_from_slice(&bytes);
}
