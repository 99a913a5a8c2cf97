mod common;

use ndarray::{s, Array2};

use common::{random_plane, TestRng};
use mosaic_core::correlate::phase_correlate;
use mosaic_core::error::MosaicError;

#[test]
fn test_identical_images_zero_offset() {
    let img = random_plane(128, 128, 11);

    let (offset, psr) = phase_correlate(&img, &img, true, true).unwrap();
    assert!(offset.dy.abs() < 0.6, "dy={}", offset.dy);
    assert!(offset.dx.abs() < 0.6, "dx={}", offset.dx);
    assert!(psr > 20.0, "psr={psr}");
}

#[test]
fn test_known_horizontal_shift_recovered() {
    let reference = random_plane(128, 256, 21);
    let shift = 40usize;
    let template = reference.slice(s![.., shift..shift + 128]).to_owned();

    let (offset, psr) = phase_correlate(&reference, &template, true, true).unwrap();
    assert!(
        (offset.dx - shift as f64).abs() < 2.0,
        "dx={} expected ~{shift}",
        offset.dx
    );
    assert!(offset.dy.abs() < 2.0, "dy={}", offset.dy);
    assert!(psr > 10.0, "psr={psr}");
}

#[test]
fn test_template_larger_than_reference() {
    let reference = Array2::<f64>::zeros((64, 64));
    let template = Array2::<f64>::zeros((128, 128));

    let err = phase_correlate(&reference, &template, true, true).unwrap_err();
    assert!(matches!(err, MosaicError::TemplateTooLarge { .. }));
}

#[test]
fn test_template_larger_in_one_axis_only() {
    let reference = Array2::<f64>::zeros((64, 64));
    let template = Array2::<f64>::zeros((32, 128));

    let err = phase_correlate(&reference, &template, true, true).unwrap_err();
    assert!(matches!(err, MosaicError::TemplateTooLarge { .. }));
}

#[test]
fn test_degenerate_inputs_stay_finite() {
    let zeros = Array2::<f64>::zeros((32, 32));
    let constant = Array2::<f64>::from_elem((32, 32), 128.0);
    let random = random_plane(32, 32, 31);

    for reference in [&zeros, &constant, &random] {
        for template in [&zeros, &constant, &random] {
            for subpixel in [false, true] {
                for window in [false, true] {
                    let (offset, psr) =
                        phase_correlate(reference, template, subpixel, window).unwrap();
                    assert!(offset.dy.is_finite(), "dy not finite");
                    assert!(offset.dx.is_finite(), "dx not finite");
                    assert!(psr.is_finite(), "psr not finite");
                }
            }
        }
    }
}

#[test]
fn test_noisy_image_still_detects() {
    let reference = random_plane(128, 128, 3);

    let mut rng = TestRng::new(99);
    let mut noisy = reference.clone();
    for value in noisy.iter_mut() {
        *value = (*value + rng.next_gaussian() * 15.0).clamp(0.0, 255.0);
    }

    let (offset, psr) = phase_correlate(&reference, &noisy, true, true).unwrap();
    assert!(offset.dy.abs() <= 2.0, "dy={}", offset.dy);
    assert!(offset.dx.abs() <= 2.0, "dx={}", offset.dx);
    assert!(psr > 5.0, "psr={psr}");
}

#[test]
fn test_window_toggle_close_for_aligned_pair() {
    let img = random_plane(128, 128, 4);

    let (with_window, _) = phase_correlate(&img, &img, true, true).unwrap();
    let (without_window, _) = phase_correlate(&img, &img, true, false).unwrap();

    assert!(
        (with_window.dy - without_window.dy).abs() < 1.0,
        "dy: {} vs {}",
        with_window.dy,
        without_window.dy
    );
    assert!(
        (with_window.dx - without_window.dx).abs() < 1.0,
        "dx: {} vs {}",
        with_window.dx,
        without_window.dx
    );
}

#[test]
fn test_integer_offsets_without_subpixel() {
    let reference = random_plane(64, 64, 5);
    let template = reference.slice(s![.., 8..40]).to_owned();

    let (offset, _) = phase_correlate(&reference, &template, false, true).unwrap();
    assert_eq!(offset.dy.fract(), 0.0, "dy={}", offset.dy);
    assert_eq!(offset.dx.fract(), 0.0, "dx={}", offset.dx);
}
