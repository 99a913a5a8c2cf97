use ndarray::Array2;
use num_complex::Complex;
use rayon::prelude::*;
use rustfft::FftPlanner;

use crate::consts::{CROSS_POWER_EPSILON, PARALLEL_PIXEL_THRESHOLD};

/// 2D forward FFT: row-wise pass, then column-wise pass, with parallel
/// processing for large images.
pub fn fft2d_forward(data: &Array2<f64>) -> Array2<Complex<f64>> {
    let (h, w) = data.dim();
    let mut planner = FftPlanner::new();
    let fft_row = planner.plan_fft_forward(w);
    let fft_col = planner.plan_fft_forward(h);

    let mut result = Array2::<Complex<f64>>::zeros((h, w));
    for row in 0..h {
        for col in 0..w {
            result[[row, col]] = Complex::new(data[[row, col]], 0.0);
        }
    }

    if h * w >= PARALLEL_PIXEL_THRESHOLD {
        fft2d_forward_parallel(&mut result, &fft_row, &fft_col, h, w);
    } else {
        fft2d_forward_sequential(&mut result, &fft_row, &fft_col, h, w);
    }

    result
}

fn fft2d_forward_parallel(
    result: &mut Array2<Complex<f64>>,
    fft_row: &std::sync::Arc<dyn rustfft::Fft<f64>>,
    fft_col: &std::sync::Arc<dyn rustfft::Fft<f64>>,
    h: usize,
    w: usize,
) {
    let processed_rows: Vec<Vec<Complex<f64>>> = (0..h)
        .into_par_iter()
        .map(|row| {
            let mut row_data: Vec<Complex<f64>> = (0..w).map(|c| result[[row, c]]).collect();
            fft_row.process(&mut row_data);
            row_data
        })
        .collect();
    for (row, row_data) in processed_rows.into_iter().enumerate() {
        for (col, val) in row_data.into_iter().enumerate() {
            result[[row, col]] = val;
        }
    }

    let processed_cols: Vec<Vec<Complex<f64>>> = (0..w)
        .into_par_iter()
        .map(|col| {
            let mut col_data: Vec<Complex<f64>> = (0..h).map(|r| result[[r, col]]).collect();
            fft_col.process(&mut col_data);
            col_data
        })
        .collect();
    for (col, col_data) in processed_cols.into_iter().enumerate() {
        for (row, val) in col_data.into_iter().enumerate() {
            result[[row, col]] = val;
        }
    }
}

fn fft2d_forward_sequential(
    result: &mut Array2<Complex<f64>>,
    fft_row: &std::sync::Arc<dyn rustfft::Fft<f64>>,
    fft_col: &std::sync::Arc<dyn rustfft::Fft<f64>>,
    h: usize,
    w: usize,
) {
    for row in 0..h {
        let mut row_data: Vec<Complex<f64>> = (0..w).map(|c| result[[row, c]]).collect();
        fft_row.process(&mut row_data);
        for col in 0..w {
            result[[row, col]] = row_data[col];
        }
    }
    for col in 0..w {
        let mut col_data: Vec<Complex<f64>> = (0..h).map(|r| result[[r, col]]).collect();
        fft_col.process(&mut col_data);
        for row in 0..h {
            result[[row, col]] = col_data[row];
        }
    }
}

/// 2D inverse FFT, returning the real part normalized by `1/(h*w)`.
pub fn ifft2d_real(data: &Array2<Complex<f64>>) -> Array2<f64> {
    let (h, w) = data.dim();
    let mut planner = FftPlanner::new();
    let ifft_row = planner.plan_fft_inverse(w);
    let ifft_col = planner.plan_fft_inverse(h);

    let mut work = data.clone();

    if h * w >= PARALLEL_PIXEL_THRESHOLD {
        ifft2d_parallel(&mut work, &ifft_row, &ifft_col, h, w);
    } else {
        ifft2d_sequential(&mut work, &ifft_row, &ifft_col, h, w);
    }

    let scale = 1.0 / (h * w) as f64;
    let mut result = Array2::<f64>::zeros((h, w));
    for row in 0..h {
        for col in 0..w {
            result[[row, col]] = work[[row, col]].re * scale;
        }
    }

    result
}

fn ifft2d_parallel(
    work: &mut Array2<Complex<f64>>,
    ifft_row: &std::sync::Arc<dyn rustfft::Fft<f64>>,
    ifft_col: &std::sync::Arc<dyn rustfft::Fft<f64>>,
    h: usize,
    w: usize,
) {
    let processed_cols: Vec<Vec<Complex<f64>>> = (0..w)
        .into_par_iter()
        .map(|col| {
            let mut col_data: Vec<Complex<f64>> = (0..h).map(|r| work[[r, col]]).collect();
            ifft_col.process(&mut col_data);
            col_data
        })
        .collect();
    for (col, col_data) in processed_cols.into_iter().enumerate() {
        for (row, val) in col_data.into_iter().enumerate() {
            work[[row, col]] = val;
        }
    }

    let processed_rows: Vec<Vec<Complex<f64>>> = (0..h)
        .into_par_iter()
        .map(|row| {
            let mut row_data: Vec<Complex<f64>> = (0..w).map(|c| work[[row, c]]).collect();
            ifft_row.process(&mut row_data);
            row_data
        })
        .collect();
    for (row, row_data) in processed_rows.into_iter().enumerate() {
        for (col, val) in row_data.into_iter().enumerate() {
            work[[row, col]] = val;
        }
    }
}

fn ifft2d_sequential(
    work: &mut Array2<Complex<f64>>,
    ifft_row: &std::sync::Arc<dyn rustfft::Fft<f64>>,
    ifft_col: &std::sync::Arc<dyn rustfft::Fft<f64>>,
    h: usize,
    w: usize,
) {
    for col in 0..w {
        let mut col_data: Vec<Complex<f64>> = (0..h).map(|r| work[[r, col]]).collect();
        ifft_col.process(&mut col_data);
        for row in 0..h {
            work[[row, col]] = col_data[row];
        }
    }
    for row in 0..h {
        let mut row_data: Vec<Complex<f64>> = (0..w).map(|c| work[[row, c]]).collect();
        ifft_row.process(&mut row_data);
        for col in 0..w {
            work[[row, col]] = row_data[col];
        }
    }
}

/// Phase-only cross-power spectrum: `C = F_ref * conj(F_tmpl)`, each cell
/// divided by `max(|C|, CROSS_POWER_EPSILON)`. Zero-magnitude bins stay
/// zero rather than becoming NaN or infinite.
pub fn normalized_cross_power(
    ref_fft: &Array2<Complex<f64>>,
    tmpl_fft: &Array2<Complex<f64>>,
) -> Array2<Complex<f64>> {
    let (h, w) = ref_fft.dim();
    let mut result = Array2::<Complex<f64>>::zeros((h, w));

    for row in 0..h {
        for col in 0..w {
            let cross = ref_fft[[row, col]] * tmpl_fft[[row, col]].conj();
            let mag = cross.norm();
            let denom = if mag > 0.0 { mag } else { CROSS_POWER_EPSILON };
            result[[row, col]] = cross / denom;
        }
    }

    result
}

/// Global argmax scan over a correlation surface.
pub fn find_peak(data: &Array2<f64>) -> (usize, usize, f64) {
    let (h, w) = data.dim();
    let mut best_row = 0;
    let mut best_col = 0;
    let mut best_val = f64::NEG_INFINITY;

    for row in 0..h {
        for col in 0..w {
            if data[[row, col]] > best_val {
                best_val = data[[row, col]];
                best_row = row;
                best_col = col;
            }
        }
    }

    (best_row, best_col, best_val)
}
