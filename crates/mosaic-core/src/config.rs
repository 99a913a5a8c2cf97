use serde::{Deserialize, Serialize};

use crate::consts::{DEFAULT_BLEND_WIDTH, DEFAULT_PSR_THRESHOLD};

/// Stitching parameters shared by a `PanoramaBuilder` across calls.
/// Immutable once constructed; this is the only cross-call state the
/// engine holds.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(default)]
pub struct StitcherConfig {
    /// Expected overlap width in pixels between consecutive images.
    /// `None` uses half the reference width.
    pub overlap_hint: Option<usize>,

    /// Alpha-blend transition width in pixels.
    pub blend_width: usize,

    /// Minimum PSR for an alignment to count as trustworthy. Frames below
    /// this threshold are still merged, with a warning.
    pub psr_threshold: f64,
}

impl Default for StitcherConfig {
    fn default() -> Self {
        Self {
            overlap_hint: None,
            blend_width: DEFAULT_BLEND_WIDTH,
            psr_threshold: DEFAULT_PSR_THRESHOLD,
        }
    }
}
