/// Minimum pixel count (h*w) to use row-level Rayon parallelism in the
/// 2-D FFT passes.
pub const PARALLEL_PIXEL_THRESHOLD: usize = 65_536;

/// Denominator floor for cross-power normalization. Zero-magnitude spectral
/// bins are divided by this instead of zero, so they stay zero.
pub const CROSS_POWER_EPSILON: f64 = 1e-10;

/// Half-width of the exclusion box around the correlation peak when
/// collecting sidelobe statistics for the PSR.
pub const PSR_EXCLUSION_HALF_WIDTH: usize = 5;

/// Default alpha-blend transition width in pixels.
pub const DEFAULT_BLEND_WIDTH: usize = 64;

/// Default minimum PSR for an alignment to count as trustworthy.
/// PSR above 20 is empirically a reliable match; above 50 is excellent.
pub const DEFAULT_PSR_THRESHOLD: f64 = 5.0;

/// ITU-R BT.601 luminance coefficient for the red channel.
pub const LUMINANCE_R: f64 = 0.299;

/// ITU-R BT.601 luminance coefficient for the green channel.
pub const LUMINANCE_G: f64 = 0.587;

/// ITU-R BT.601 luminance coefficient for the blue channel.
pub const LUMINANCE_B: f64 = 0.114;
