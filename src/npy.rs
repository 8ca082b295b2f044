//! NumPy `.npy` interop.
//!
//! Arrays use the `.spb` storage order directly: an `f32` array of shape
//! `(width, height, channel_count)` in C order, so no values are moved.

use std::io::{Read, Write};

use ndarray::Array3;
use ndarray_npy::{ReadNpyExt, WriteNpyExt};

use crate::error::Result;
use crate::image::SpectralImage;

/// Write the reflectance data of `image` as a 3-D `f32` `.npy` array.
pub fn write_npy<W: Write>(image: &SpectralImage, writer: W) -> Result<()> {
    image.view()?.write_npy(writer)?;
    log::debug!(
        "Exported {} values to npy",
        image.descriptor.sample_count()?
    );
    Ok(())
}

/// Read a `(width, height, channel_count)` `f32` `.npy` array as a spectral image.
///
/// NumPy files carry no wavelength metadata, so it must be supplied.
pub fn read_npy<R: Read>(
    reader: R,
    first_wavelength: f32,
    wavelength_resolution: f32,
    last_wavelength: f32,
) -> Result<SpectralImage> {
    let array = Array3::<f32>::read_npy(reader)?;
    log::debug!("Imported npy array with shape {:?}", array.shape());
    SpectralImage::from_array(
        array,
        first_wavelength,
        wavelength_resolution,
        last_wavelength,
    )
}
