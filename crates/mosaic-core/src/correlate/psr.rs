use ndarray::Array2;

use crate::consts::PSR_EXCLUSION_HALF_WIDTH;

/// Peak-to-sidelobe ratio of a correlation surface at the given peak:
/// `(peak - mean(sidelobe)) / std(sidelobe)`.
///
/// The sidelobe is every cell outside a box of half-width
/// [`PSR_EXCLUSION_HALF_WIDTH`] centered on the peak, clamped to the
/// surface bounds. A zero-variance (or empty) sidelobe yields 0.0, so
/// the result is always finite.
pub fn peak_to_sidelobe_ratio(
    correlation: &Array2<f64>,
    peak_row: usize,
    peak_col: usize,
) -> f64 {
    let (h, w) = correlation.dim();
    let r1 = peak_row.saturating_sub(PSR_EXCLUSION_HALF_WIDTH);
    let r2 = (peak_row + PSR_EXCLUSION_HALF_WIDTH + 1).min(h);
    let c1 = peak_col.saturating_sub(PSR_EXCLUSION_HALF_WIDTH);
    let c2 = (peak_col + PSR_EXCLUSION_HALF_WIDTH + 1).min(w);

    let excluded = |row: usize, col: usize| row >= r1 && row < r2 && col >= c1 && col < c2;

    let mut count = 0usize;
    let mut sum = 0.0;
    for row in 0..h {
        for col in 0..w {
            if excluded(row, col) {
                continue;
            }
            sum += correlation[[row, col]];
            count += 1;
        }
    }
    if count == 0 {
        return 0.0;
    }
    let mean = sum / count as f64;

    let mut variance = 0.0;
    for row in 0..h {
        for col in 0..w {
            if excluded(row, col) {
                continue;
            }
            let d = correlation[[row, col]] - mean;
            variance += d * d;
        }
    }
    let std = (variance / count as f64).sqrt();
    if std == 0.0 {
        return 0.0;
    }

    (correlation[[peak_row, peak_col]] - mean) / std
}
