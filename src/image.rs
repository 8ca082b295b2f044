//! In-memory spectral image.
//!
//! Reflectance values are stored column-major: width is the slowest-varying
//! dimension, then height, then channel. The value for pixel `(x, y)` and
//! channel `c` is at `c + channel_count * (y + height * x)`, which is a C-order
//! array of shape `(width, height, channel_count)`.

use ndarray::{Array3, ArrayView3};

use crate::descriptor::FormatDescriptor;
use crate::error::{FormatError, Result};

/// A decoded `.spb` image: header metadata plus the flat reflectance array.
#[derive(Debug, Clone, PartialEq)]
pub struct SpectralImage {
    /// Header metadata
    pub(crate) descriptor: FormatDescriptor,
    /// Reflectance values, `width * height * channel_count` long
    pub(crate) data: Vec<f32>,
}

impl SpectralImage {
    /// Create an image, checking that `data` matches the descriptor dimensions.
    pub fn new(descriptor: FormatDescriptor, data: Vec<f32>) -> Result<Self> {
        let expected = descriptor.sample_count()?;
        if data.len() != expected {
            return Err(FormatError::value_mismatch(expected, data.len()));
        }
        Ok(Self { descriptor, data })
    }

    /// Create an image with every reflectance value set to zero.
    pub fn zeros(descriptor: FormatDescriptor) -> Result<Self> {
        let len = descriptor.sample_count()?;
        Ok(Self {
            descriptor,
            data: vec![0.0; len],
        })
    }

    /// Header metadata.
    pub fn descriptor(&self) -> &FormatDescriptor {
        &self.descriptor
    }

    /// Flat reflectance values in storage order.
    pub fn data(&self) -> &[f32] {
        &self.data
    }

    /// Split into descriptor and data.
    pub fn into_parts(self) -> (FormatDescriptor, Vec<f32>) {
        (self.descriptor, self.data)
    }

    /// Flat index of pixel `(x, y)`, channel `channel`, or `None` if out of bounds.
    pub fn index(&self, x: u32, y: u32, channel: u32) -> Option<usize> {
        let d = &self.descriptor;
        if x >= d.width || y >= d.height || channel >= d.channel_count {
            return None;
        }
        let n = d.channel_count as usize;
        let h = d.height as usize;
        (x as usize)
            .checked_mul(h)?
            .checked_add(y as usize)?
            .checked_mul(n)?
            .checked_add(channel as usize)
    }

    /// Reflectance of pixel `(x, y)` in `channel`.
    pub fn get(&self, x: u32, y: u32, channel: u32) -> Option<f32> {
        self.index(x, y, channel)
            .and_then(|i| self.data.get(i).copied())
    }

    /// Overwrite one reflectance value. Returns `false` if out of bounds.
    pub fn set(&mut self, x: u32, y: u32, channel: u32, value: f32) -> bool {
        match self.index(x, y, channel).and_then(|i| self.data.get_mut(i)) {
            Some(slot) => {
                *slot = value;
                true
            }
            None => false,
        }
    }

    /// All channel values of pixel `(x, y)`.
    ///
    /// Channels are fastest-varying, so a pixel's spectrum is contiguous.
    pub fn spectrum(&self, x: u32, y: u32) -> Option<&[f32]> {
        let start = self.index(x, y, 0)?;
        let end = start + self.descriptor.channel_count as usize;
        self.data.get(start..end)
    }

    /// One channel as `width * height` values, x outer and y inner.
    pub fn band(&self, channel: u32) -> Option<Vec<f32>> {
        if channel >= self.descriptor.channel_count {
            return None;
        }
        let stride = self.descriptor.channel_count as usize;
        Some(
            self.data
                .iter()
                .skip(channel as usize)
                .step_by(stride)
                .copied()
                .collect(),
        )
    }

    /// All channels, band-major (one `Vec` per channel).
    pub fn bands(&self) -> Vec<Vec<f32>> {
        (0..self.descriptor.channel_count)
            .filter_map(|c| self.band(c))
            .collect()
    }

    /// Borrow the data as a `(width, height, channel_count)` array.
    pub fn view(&self) -> Result<ArrayView3<'_, f32>> {
        let shape = self.shape();
        ArrayView3::from_shape(shape, self.data.as_slice())
            .map_err(|e| FormatError::shape(&[shape.0, shape.1, shape.2], e.to_string()))
    }

    /// Copy the data into an owned `(width, height, channel_count)` array.
    pub fn to_array(&self) -> Result<Array3<f32>> {
        Ok(self.view()?.to_owned())
    }

    /// Build an image from a `(width, height, channel_count)` array.
    pub fn from_array(
        array: Array3<f32>,
        first_wavelength: f32,
        wavelength_resolution: f32,
        last_wavelength: f32,
    ) -> Result<Self> {
        let shape = array.shape();
        let dim = |i: usize| {
            u32::try_from(shape[i])
                .map_err(|_| FormatError::shape(shape, "dimension exceeds u32 range"))
        };
        let descriptor = FormatDescriptor::new(dim(0)?, dim(1)?, dim(2)?).with_wavelengths(
            first_wavelength,
            wavelength_resolution,
            last_wavelength,
        );

        // Logical iteration order is C order regardless of memory layout
        let data = array.iter().copied().collect();
        Self::new(descriptor, data)
    }

    fn shape(&self) -> (usize, usize, usize) {
        let d = &self.descriptor;
        (
            d.width as usize,
            d.height as usize,
            d.channel_count as usize,
        )
    }
}
