use ndarray::{s, Array3};

use crate::correlate::phase_correlate;
use crate::error::{MosaicError, Result};
use crate::picture::{Offset, Picture};

/// Result of stitching one image pair.
#[derive(Clone, Debug)]
pub struct Stitched {
    pub canvas: Picture,
    pub offset: Offset,
    pub psr: f64,
}

/// Stitch two horizontally overlapping images.
///
/// The rightmost `overlap` columns of `left` and the leftmost `overlap`
/// columns of `right` are phase-correlated to find the translation; the
/// composite canvas places both images at the rounded integer offset and
/// alpha-blends the transition zone. A missing `overlap_hint` defaults to
/// half the left image's width.
pub fn stitch_pair(
    left: &Picture,
    right: &Picture,
    overlap_hint: Option<usize>,
    blend_width: usize,
) -> Result<Stitched> {
    if left.channels() != right.channels() {
        return Err(MosaicError::ChannelMismatch {
            left: left.channels(),
            right: right.channels(),
        });
    }

    // Identical inputs need no alignment.
    if left.data == right.data {
        return Ok(Stitched {
            canvas: left.clone(),
            offset: Offset::default(),
            psr: 0.0,
        });
    }

    let gray_left = left.to_luma();
    let gray_right = right.to_luma();
    let (h, w) = gray_left.dim();

    let overlap = overlap_hint.unwrap_or(w / 2).min(w).min(gray_right.dim().1);

    let ref_crop = gray_left.slice(s![.., w - overlap..]).to_owned();
    let tmpl_crop = gray_right.slice(s![.., ..overlap]).to_owned();

    let (offset, psr) = phase_correlate(&ref_crop, &tmpl_crop, true, true)?;

    // Integer translation for canvas placement; sub-pixel precision only
    // informs the confidence value.
    let idy = offset.dy.round() as i64;
    let idx = offset.dx.round() as i64;

    let canvas_h = (h as i64 + idy.abs()) as usize;
    let canvas_w = (w as i64 + (w as i64 - overlap as i64) - idx) as usize;
    let channels = left.channels();
    let mut canvas = Array3::<u8>::zeros((canvas_h, canvas_w, channels));

    let y_off_left = (-idy).max(0) as usize;
    let y_off_right = idy.max(0) as usize;
    let x_off_right = w as i64 - overlap as i64 + (overlap as i64 - idx);

    // Place the left image.
    for row in 0..h {
        for col in 0..w.min(canvas_w) {
            for ch in 0..channels {
                canvas[[y_off_left + row, col, ch]] = left.data[[row, col, ch]];
            }
        }
    }

    // Place the right image column by column, alpha-blending the overlap.
    let right_h = right.height();
    let right_w = right.width();
    let blend_start = x_off_right;
    let blend_end = blend_start + blend_width.min(overlap) as i64;
    let row_count = right_h.min(canvas_h - y_off_right);

    for x in 0..right_w {
        let canvas_x = x_off_right + x as i64;
        if canvas_x < 0 || canvas_x >= canvas_w as i64 {
            continue;
        }
        let cx = canvas_x as usize;
        let alpha = blend_alpha(canvas_x, blend_start, blend_end);
        for row in 0..row_count {
            for ch in 0..channels {
                let dst = canvas[[y_off_right + row, cx, ch]] as f64;
                let src = right.data[[row, x, ch]] as f64;
                let blended = (dst * (1.0 - alpha) + src * alpha).clamp(0.0, 255.0);
                canvas[[y_off_right + row, cx, ch]] = blended as u8;
            }
        }
    }

    Ok(Stitched {
        canvas: Picture::new(canvas)?,
        offset,
        psr,
    })
}

/// Linear ramp from 0 to 1 between `start` and `end`.
fn blend_alpha(x: i64, start: i64, end: i64) -> f64 {
    if end <= start {
        return 1.0;
    }
    if x <= start {
        return 0.0;
    }
    if x >= end {
        return 1.0;
    }
    (x - start) as f64 / (end - start) as f64
}
