use std::path::Path;

use image::{GrayImage, Luma, Rgb, RgbImage};
use ndarray::{Array2, Array3};

use crate::error::Result;
use crate::picture::Picture;

/// Load an image file into a Picture. Grayscale sources stay
/// single-channel; everything else becomes 8-bit RGB.
pub fn load_picture(path: &Path) -> Result<Picture> {
    let img = image::open(path)?;

    if img.color().has_color() {
        let rgb = img.to_rgb8();
        let (w, h) = rgb.dimensions();
        let mut data = Array3::<u8>::zeros((h as usize, w as usize, 3));
        for row in 0..h as usize {
            for col in 0..w as usize {
                let pixel = rgb.get_pixel(col as u32, row as u32);
                data[[row, col, 0]] = pixel.0[0];
                data[[row, col, 1]] = pixel.0[1];
                data[[row, col, 2]] = pixel.0[2];
            }
        }
        Picture::new(data)
    } else {
        let gray = img.to_luma8();
        let (w, h) = gray.dimensions();
        let mut plane = Array2::<u8>::zeros((h as usize, w as usize));
        for row in 0..h as usize {
            for col in 0..w as usize {
                plane[[row, col]] = gray.get_pixel(col as u32, row as u32).0[0];
            }
        }
        Ok(Picture::from_gray(plane))
    }
}

/// Save a Picture, choosing the format from the file extension.
pub fn save_picture(picture: &Picture, path: &Path) -> Result<()> {
    let h = picture.height();
    let w = picture.width();

    if picture.channels() == 1 {
        let mut img = GrayImage::new(w as u32, h as u32);
        for row in 0..h {
            for col in 0..w {
                img.put_pixel(col as u32, row as u32, Luma([picture.data[[row, col, 0]]]));
            }
        }
        img.save(path)?;
    } else {
        let mut img = RgbImage::new(w as u32, h as u32);
        for row in 0..h {
            for col in 0..w {
                img.put_pixel(
                    col as u32,
                    row as u32,
                    Rgb([
                        picture.data[[row, col, 0]],
                        picture.data[[row, col, 1]],
                        picture.data[[row, col, 2]],
                    ]),
                );
            }
        }
        img.save(path)?;
    }

    Ok(())
}
