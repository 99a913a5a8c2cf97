use ndarray::Array2;
use std::f64::consts::TAU;

/// Symmetric Hann curve of length `n`: `0.5 * (1 - cos(2*pi*i/(n-1)))`.
/// A curve of length 1 is `[1.0]`.
pub fn hann_curve(n: usize) -> Vec<f64> {
    if n == 1 {
        return vec![1.0];
    }
    (0..n)
        .map(|i| 0.5 * (1.0 - (TAU * i as f64 / (n as f64 - 1.0)).cos()))
        .collect()
}

/// 2-D Hann window: outer product of the row and column curves.
pub fn hann2d(h: usize, w: usize) -> Array2<f64> {
    let wy = hann_curve(h);
    let wx = hann_curve(w);
    let mut window = Array2::<f64>::zeros((h, w));
    for row in 0..h {
        for col in 0..w {
            window[[row, col]] = wy[row] * wx[col];
        }
    }
    window
}

/// Multiply `data` element-wise by the 2-D Hann window to reduce
/// spectral leakage. The curves are computed once per axis.
pub fn apply_hann(data: &Array2<f64>) -> Array2<f64> {
    let (h, w) = data.dim();
    let wy = hann_curve(h);
    let wx = hann_curve(w);
    let mut result = Array2::<f64>::zeros((h, w));
    for row in 0..h {
        for col in 0..w {
            result[[row, col]] = data[[row, col]] * wy[row] * wx[col];
        }
    }
    result
}
