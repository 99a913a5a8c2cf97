use ndarray::{s, Array2};

use crate::error::{MosaicError, Result};
use crate::picture::{Offset, Picture};

use super::psr::peak_to_sidelobe_ratio;
use super::spectrum::{fft2d_forward, find_peak, ifft2d_real, normalized_cross_power};
use super::subpixel::refine_peak;
use super::window::apply_hann;

/// Estimate the (dy, dx) translation that maps `template` onto `reference`
/// using FFT phase correlation.
///
/// The template may be smaller than the reference; it is zero-padded to
/// the reference size (top-left aligned) before the transform. Positive
/// `dy` means the template sits below the reference origin, positive `dx`
/// to the right.
///
/// The returned PSR is computed from the sidelobe statistics at the
/// coarse integer peak, before sub-pixel refinement. Both values are
/// finite for any input; degenerate surfaces yield PSR 0.0 and no
/// refinement.
pub fn phase_correlate(
    reference: &Array2<f64>,
    template: &Array2<f64>,
    subpixel: bool,
    apply_window: bool,
) -> Result<(Offset, f64)> {
    let (h, w) = reference.dim();
    let (th, tw) = template.dim();
    if th > h || tw > w {
        return Err(MosaicError::TemplateTooLarge {
            template_height: th,
            template_width: tw,
            reference_height: h,
            reference_width: w,
        });
    }

    let mut padded = Array2::<f64>::zeros((h, w));
    padded.slice_mut(s![..th, ..tw]).assign(template);

    let (ref_plane, tmpl_plane) = if apply_window {
        (apply_hann(reference), apply_hann(&padded))
    } else {
        (reference.clone(), padded)
    };

    let ref_fft = fft2d_forward(&ref_plane);
    let tmpl_fft = fft2d_forward(&tmpl_plane);
    let cross_power = normalized_cross_power(&ref_fft, &tmpl_fft);
    let correlation = ifft2d_real(&cross_power);

    let (peak_row, peak_col, _peak_val) = find_peak(&correlation);

    // Sidelobe statistics come from the coarse peak, before refinement.
    let psr = peak_to_sidelobe_ratio(&correlation, peak_row, peak_col);

    let (mut dy, mut dx) = if subpixel {
        let (delta_row, delta_col) = refine_peak(&correlation, peak_row, peak_col);
        (peak_row as f64 + delta_row, peak_col as f64 + delta_col)
    } else {
        (peak_row as f64, peak_col as f64)
    };

    // The FFT correlation is circular; fold coordinates past the half
    // dimension into the negative range.
    if dy > h as f64 / 2.0 {
        dy -= h as f64;
    }
    if dx > w as f64 / 2.0 {
        dx -= w as f64;
    }

    Ok((Offset { dy, dx }, psr))
}

/// Picture-level wrapper: reduce both inputs to luminance and correlate.
pub fn phase_correlate_pictures(
    reference: &Picture,
    template: &Picture,
    subpixel: bool,
    apply_window: bool,
) -> Result<(Offset, f64)> {
    phase_correlate(
        &reference.to_luma(),
        &template.to_luma(),
        subpixel,
        apply_window,
    )
}
