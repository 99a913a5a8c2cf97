#![allow(dead_code)]

use ndarray::{s, Array2, Array3};

use mosaic_core::picture::Picture;

/// Small deterministic PRNG (xorshift64*) so tests are reproducible
/// without external crates.
pub struct TestRng(u64);

impl TestRng {
    pub fn new(seed: u64) -> Self {
        Self(seed | 1)
    }

    pub fn next_u64(&mut self) -> u64 {
        let mut x = self.0;
        x ^= x << 13;
        x ^= x >> 7;
        x ^= x << 17;
        self.0 = x;
        x.wrapping_mul(0x2545_F491_4F6C_DD1D)
    }

    /// Uniform in [0, 1).
    pub fn next_f64(&mut self) -> f64 {
        (self.next_u64() >> 11) as f64 / (1u64 << 53) as f64
    }

    /// Approximate standard normal (sum of 12 uniforms).
    pub fn next_gaussian(&mut self) -> f64 {
        (0..12).map(|_| self.next_f64()).sum::<f64>() - 6.0
    }
}

/// Random luminance plane with values in [28, 228).
pub fn random_plane(h: usize, w: usize, seed: u64) -> Array2<f64> {
    let mut rng = TestRng::new(seed);
    let mut plane = Array2::<f64>::zeros((h, w));
    for row in 0..h {
        for col in 0..w {
            plane[[row, col]] = (rng.next_f64() * 200.0 + 28.0).floor();
        }
    }
    plane
}

pub fn random_gray_picture(h: usize, w: usize, seed: u64) -> Picture {
    let mut rng = TestRng::new(seed);
    let mut plane = Array2::<u8>::zeros((h, w));
    for row in 0..h {
        for col in 0..w {
            plane[[row, col]] = (rng.next_f64() * 200.0 + 28.0) as u8;
        }
    }
    Picture::from_gray(plane)
}

pub fn random_color_picture(h: usize, w: usize, seed: u64) -> Picture {
    let mut rng = TestRng::new(seed);
    let mut data = Array3::<u8>::zeros((h, w, 3));
    for row in 0..h {
        for col in 0..w {
            for ch in 0..3 {
                data[[row, col, ch]] = (rng.next_f64() * 200.0 + 28.0) as u8;
            }
        }
    }
    Picture::new(data).unwrap()
}

/// Build a pair of grayscale pictures cut from one random pattern:
/// they share exactly `overlap` columns, and the right picture's rows
/// start `shift_y` rows lower in the pattern.
pub fn overlapping_pair(
    h: usize,
    w: usize,
    overlap: usize,
    shift_y: usize,
    seed: u64,
) -> (Picture, Picture) {
    let full_h = h + shift_y;
    let full_w = 2 * w - overlap;
    let mut rng = TestRng::new(seed);
    let mut pattern = Array2::<u8>::zeros((full_h, full_w));
    for row in 0..full_h {
        for col in 0..full_w {
            pattern[[row, col]] = (rng.next_f64() * 200.0 + 28.0) as u8;
        }
    }

    let left = pattern.slice(s![..h, ..w]).to_owned();
    let right = pattern
        .slice(s![shift_y..shift_y + h, w - overlap..])
        .to_owned();

    (Picture::from_gray(left), Picture::from_gray(right))
}
