use ndarray::Array2;

/// Refine the integer peak with an independent 1-D parabola fit along
/// each axis, using the classic three-point formula.
///
/// Neighbor indices wrap modulo the surface dimensions; the FFT
/// correlation surface is periodic. Returns (delta_row, delta_col) as
/// fractional offsets from the integer peak; an axis whose denominator
/// is exactly zero keeps its coarse integer value.
pub fn refine_peak(
    correlation: &Array2<f64>,
    peak_row: usize,
    peak_col: usize,
) -> (f64, f64) {
    let (h, w) = correlation.dim();

    let rm = (peak_row + h - 1) % h;
    let rp = (peak_row + 1) % h;
    let cm = (peak_col + w - 1) % w;
    let cp = (peak_col + 1) % w;

    let center = correlation[[peak_row, peak_col]];

    let above = correlation[[rm, peak_col]];
    let below = correlation[[rp, peak_col]];
    let row_den = 2.0 * (above - 2.0 * center + below);
    let delta_row = if row_den != 0.0 {
        (above - below) / row_den
    } else {
        0.0
    };

    let left = correlation[[peak_row, cm]];
    let right = correlation[[peak_row, cp]];
    let col_den = 2.0 * (left - 2.0 * center + right);
    let delta_col = if col_den != 0.0 {
        (left - right) / col_den
    } else {
        0.0
    };

    (delta_row, delta_col)
}
