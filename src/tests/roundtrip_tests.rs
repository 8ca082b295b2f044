//! Round-trip and rejection tests over synthetic images.

use super::init_logging;
use crate::{
    CodecOptions, FormatDescriptor, FormatError, HEADER_SIZE, SpectralImage, TrailingBytes,
    decode_header, decode_image, decode_image_with, encode_image,
};

/// Deterministic pseudo-random reflectance values in [0, 1).
fn noise(len: usize, seed: u32) -> Vec<f32> {
    let mut state = seed.wrapping_mul(2_654_435_761).max(1);
    (0..len)
        .map(|_| {
            state ^= state << 13;
            state ^= state >> 17;
            state ^= state << 5;
            (state >> 8) as f32 / (1u32 << 24) as f32
        })
        .collect()
}

fn synthetic(width: u32, height: u32, channels: u32, seed: u32) -> SpectralImage {
    let desc = FormatDescriptor::new(width, height, channels).with_wavelengths(
        400.0,
        5.0,
        400.0 + 5.0 * channels.saturating_sub(1) as f32,
    );
    let data = noise(desc.sample_count().unwrap(), seed);
    SpectralImage::new(desc, data).unwrap()
}

#[test]
fn test_round_trip_various_shapes() {
    init_logging();
    let shapes = [(1, 1, 1), (7, 3, 5), (3, 7, 1), (1, 16, 64), (32, 1, 2)];
    for (seed, &(w, h, n)) in shapes.iter().enumerate() {
        let image = synthetic(w, h, n, seed as u32 + 1);
        let bytes = encode_image(&image).unwrap();
        assert_eq!(bytes.len(), image.descriptor.file_len().unwrap());
        assert_eq!(
            decode_image(&bytes).unwrap(),
            image,
            "round trip failed for {}x{}x{}",
            w,
            h,
            n
        );
    }
}

#[test]
fn test_round_trip_preserves_float_bits() {
    let desc = FormatDescriptor::new(2, 2, 2).with_wavelengths(f32::MIN_POSITIVE, -0.0, f32::MAX);
    let data = vec![
        f32::NAN,
        -0.0,
        f32::INFINITY,
        f32::NEG_INFINITY,
        f32::MIN_POSITIVE / 2.0,
        1.5,
        -2.0,
        f32::EPSILON,
    ];
    let image = SpectralImage::new(desc, data.clone()).unwrap();
    let back = decode_image(&encode_image(&image).unwrap()).unwrap();

    let bits = |v: &[f32]| v.iter().map(|f| f.to_bits()).collect::<Vec<_>>();
    assert_eq!(bits(&back.data), bits(&data));
    assert_eq!(
        back.descriptor.wavelength_resolution.to_bits(),
        (-0.0f32).to_bits()
    );
}

#[test]
fn test_reencoding_is_byte_identical() {
    let bytes = encode_image(&synthetic(4, 5, 6, 42)).unwrap();
    let again = encode_image(&decode_image(&bytes).unwrap()).unwrap();
    assert_eq!(again, bytes);
}

#[test]
fn test_any_wrong_magic_rejected() {
    let valid = encode_image(&synthetic(2, 2, 2, 7)).unwrap();
    for magic in [*b"SPA", *b"XPB", *b"SPb", [0, 0, 0], [0xFF, 0xFF, 0xFF]] {
        let mut bytes = valid.clone();
        bytes[..3].copy_from_slice(&magic);
        assert!(matches!(
            decode_header(&bytes),
            Err(FormatError::BadMagic { found }) if found == magic
        ));
        assert!(matches!(
            decode_image(&bytes),
            Err(FormatError::BadMagic { .. })
        ));
    }
}

#[test]
fn test_every_cut_point_fails_cleanly() {
    let bytes = encode_image(&synthetic(3, 2, 2, 3)).unwrap();
    for len in 0..bytes.len() {
        let err = decode_image(&bytes[..len]).unwrap_err();
        assert!(
            matches!(err, FormatError::Truncated { .. }),
            "cut at {} gave {:?}",
            len,
            err
        );
    }
}

#[test]
fn test_size_mismatch_with_wellformed_parts() {
    // Header declares 2x2x2 but payload carries 3x2x2 whole values
    let header = synthetic(2, 2, 2, 1).descriptor;
    let mut bytes = crate::encode_header(&header).to_vec();
    crate::encode_payload_into(&noise(12, 9), &mut bytes);

    match decode_image(&bytes) {
        Err(FormatError::SizeMismatch {
            expected, actual, ..
        }) => {
            assert_eq!(expected, 32);
            assert_eq!(actual, 48);
        }
        other => panic!("expected SizeMismatch, got {:?}", other),
    }

    let lenient = CodecOptions::new().trailing_bytes(TrailingBytes::Ignore);
    let image = decode_image_with(&bytes, &lenient).unwrap();
    assert_eq!(image.data, noise(12, 9)[..8].to_vec());
}

#[test]
fn test_zero_dimensions_round_trip() {
    init_logging();
    for (w, h, n) in [(0, 0, 0), (0, 5, 3), (4, 0, 2), (4, 5, 0)] {
        let image = SpectralImage::new(FormatDescriptor::new(w, h, n), Vec::new()).unwrap();
        let bytes = encode_image(&image).unwrap();
        assert_eq!(bytes.len(), HEADER_SIZE);
        let back = decode_image(&bytes).unwrap();
        assert!(back.data.is_empty());
        assert_eq!(back.descriptor, image.descriptor);
    }
}

#[test]
fn test_decode_is_thread_safe() {
    let bytes = encode_image(&synthetic(8, 8, 4, 11)).unwrap();
    let expected = decode_image(&bytes).unwrap();

    std::thread::scope(|scope| {
        let handles: Vec<_> = (0..4)
            .map(|_| scope.spawn(|| decode_image(&bytes).unwrap()))
            .collect();
        for handle in handles {
            assert_eq!(handle.join().unwrap(), expected);
        }
    });
}

#[test]
fn test_unaddressable_dimensions_decode_as_truncated() {
    let header = FormatDescriptor::new(u32::MAX, u32::MAX, u32::MAX);
    let bytes = crate::encode_header(&header);
    match decode_image(&bytes) {
        Err(FormatError::Truncated {
            offset, available, ..
        }) => {
            assert_eq!(offset, HEADER_SIZE);
            assert_eq!(available, 0);
        }
        other => panic!("expected Truncated, got {:?}", other),
    }
}
