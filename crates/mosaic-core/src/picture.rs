use ndarray::{Array2, Array3, Axis};

use crate::consts::{LUMINANCE_B, LUMINANCE_G, LUMINANCE_R};
use crate::error::{MosaicError, Result};

/// A dense 8-bit image.
/// Pixel data is row-major with shape = (height, width, channels);
/// the channel count is 1 (grayscale) or 3 (RGB).
#[derive(Clone, Debug, PartialEq)]
pub struct Picture {
    pub data: Array3<u8>,
}

impl Picture {
    pub fn new(data: Array3<u8>) -> Result<Self> {
        let channels = data.dim().2;
        if channels != 1 && channels != 3 {
            return Err(MosaicError::UnsupportedChannelCount(channels));
        }
        Ok(Self { data })
    }

    pub fn from_gray(plane: Array2<u8>) -> Self {
        Self {
            data: plane.insert_axis(Axis(2)),
        }
    }

    pub fn height(&self) -> usize {
        self.data.dim().0
    }

    pub fn width(&self) -> usize {
        self.data.dim().1
    }

    pub fn channels(&self) -> usize {
        self.data.dim().2
    }

    /// Luminance plane in f64, used for alignment only.
    /// Color pictures are reduced with the BT.601 weights; grayscale
    /// pictures are widened as-is.
    pub fn to_luma(&self) -> Array2<f64> {
        let (h, w, c) = self.data.dim();
        let mut plane = Array2::<f64>::zeros((h, w));

        if c == 1 {
            for row in 0..h {
                for col in 0..w {
                    plane[[row, col]] = self.data[[row, col, 0]] as f64;
                }
            }
        } else {
            for row in 0..h {
                for col in 0..w {
                    plane[[row, col]] = LUMINANCE_R * self.data[[row, col, 0]] as f64
                        + LUMINANCE_G * self.data[[row, col, 1]] as f64
                        + LUMINANCE_B * self.data[[row, col, 2]] as f64;
                }
            }
        }

        plane
    }
}

/// Sub-pixel translation of a template relative to a reference,
/// after circular-wrap correction.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Offset {
    pub dy: f64,
    pub dx: f64,
}
