//! Typed representation of the `.spb` header.

use serde::{Deserialize, Serialize};

use crate::error::{FormatError, Result};
use crate::{HEADER_SIZE, SAMPLE_SIZE};

/// Decoded header of a Spectral Binary file.
///
/// Wavelengths are in nanometers. `first_wavelength <= last_wavelength` is
/// expected but not checked; the format does not enforce it.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct FormatDescriptor {
    /// Image width in pixels (slowest-varying storage dimension)
    pub width: u32,
    /// Image height in pixels
    pub height: u32,
    /// Spectral samples per pixel
    pub channel_count: u32,
    /// Wavelength of channel 0
    pub first_wavelength: f32,
    /// Spacing between consecutive channel wavelengths
    pub wavelength_resolution: f32,
    /// Wavelength of the last channel
    pub last_wavelength: f32,
}

impl FormatDescriptor {
    /// Create a descriptor with zeroed wavelength metadata.
    pub fn new(width: u32, height: u32, channel_count: u32) -> Self {
        Self {
            width,
            height,
            channel_count,
            ..Self::default()
        }
    }

    /// Set the wavelength metadata, in wire order.
    pub fn with_wavelengths(mut self, first: f32, resolution: f32, last: f32) -> Self {
        self.first_wavelength = first;
        self.wavelength_resolution = resolution;
        self.last_wavelength = last;
        self
    }

    /// Number of pixels (`width * height`).
    pub fn pixel_count(&self) -> u64 {
        u64::from(self.width) * u64::from(self.height)
    }

    /// Number of reflectance values in the payload.
    ///
    /// Fails with `TooLarge` when the product does not fit in `usize`.
    pub fn sample_count(&self) -> Result<usize> {
        (self.width as usize)
            .checked_mul(self.height as usize)
            .and_then(|n| n.checked_mul(self.channel_count as usize))
            .ok_or_else(|| self.too_large())
    }

    /// Payload length in bytes.
    pub fn payload_len(&self) -> Result<usize> {
        self.sample_count()?
            .checked_mul(SAMPLE_SIZE)
            .ok_or_else(|| self.too_large())
    }

    /// Total file length in bytes, header included.
    pub fn file_len(&self) -> Result<usize> {
        self.payload_len()?
            .checked_add(HEADER_SIZE)
            .ok_or_else(|| self.too_large())
    }

    /// Whether the image holds no reflectance values.
    pub fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0 || self.channel_count == 0
    }

    /// Wavelength of channel `channel`, derived from first wavelength and resolution.
    pub fn wavelength(&self, channel: u32) -> Option<f32> {
        if channel >= self.channel_count {
            return None;
        }
        Some(self.first_wavelength + channel as f32 * self.wavelength_resolution)
    }

    /// Wavelengths of all channels in order.
    pub fn wavelengths(&self) -> Vec<f32> {
        (0..self.channel_count)
            .filter_map(|c| self.wavelength(c))
            .collect()
    }

    /// Channel whose wavelength is nearest to `nanometers`.
    ///
    /// Values outside the covered range clamp to the first or last channel.
    /// Returns `None` for images without channels or without a positive resolution.
    pub fn channel_for_wavelength(&self, nanometers: f32) -> Option<u32> {
        if self.channel_count == 0
            || !self.first_wavelength.is_finite()
            || !self.wavelength_resolution.is_finite()
            || self.wavelength_resolution <= 0.0
            || !nanometers.is_finite()
        {
            return None;
        }

        let steps = ((nanometers - self.first_wavelength) / self.wavelength_resolution).round();
        let last = (self.channel_count - 1) as f32;
        Some(steps.clamp(0.0, last) as u32)
    }

    fn too_large(&self) -> FormatError {
        FormatError::TooLarge {
            width: self.width,
            height: self.height,
            channel_count: self.channel_count,
        }
    }
}
