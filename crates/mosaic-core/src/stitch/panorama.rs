use tracing::{debug, warn};

use crate::config::StitcherConfig;
use crate::correlate::phase_correlate_pictures;
use crate::error::{MosaicError, Result};
use crate::picture::{Offset, Picture};

use super::pair::stitch_pair;

/// Outcome of a confidence-gated template search.
#[derive(Clone, Debug, PartialEq)]
pub enum TemplateMatch {
    Match { offset: Offset, psr: f64 },
    NoMatch { psr: f64 },
}

impl TemplateMatch {
    pub fn is_match(&self) -> bool {
        matches!(self, TemplateMatch::Match { .. })
    }

    pub fn psr(&self) -> f64 {
        match *self {
            TemplateMatch::Match { psr, .. } => psr,
            TemplateMatch::NoMatch { psr } => psr,
        }
    }
}

/// Incrementally stitch ordered, overlapping images into a single
/// panorama using phase-correlation alignment.
///
/// Frames whose alignment confidence falls below the configured PSR
/// threshold are still merged; the threshold only controls a warning.
#[derive(Debug, Default)]
pub struct PanoramaBuilder {
    config: StitcherConfig,
}

impl PanoramaBuilder {
    pub fn new(config: StitcherConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &StitcherConfig {
        &self.config
    }

    /// Fold the images left-to-right, using the growing panorama as the
    /// reference for each subsequent frame.
    pub fn stitch(&self, images: &[Picture]) -> Result<Picture> {
        if images.is_empty() {
            return Err(MosaicError::EmptySequence);
        }
        if images.len() == 1 {
            return Ok(images[0].clone());
        }

        let mut panorama = images[0].clone();
        for (i, image) in images.iter().enumerate().skip(1) {
            let stitched = stitch_pair(
                &panorama,
                image,
                self.config.overlap_hint,
                self.config.blend_width,
            )?;
            if stitched.psr < self.config.psr_threshold {
                warn!(
                    index = i,
                    psr = stitched.psr,
                    threshold = self.config.psr_threshold,
                    "Low-confidence alignment, merging anyway"
                );
            }
            debug!(
                index = i,
                dy = stitched.offset.dy,
                dx = stitched.offset.dx,
                psr = stitched.psr,
                "Pair stitched"
            );
            panorama = stitched.canvas;
        }

        Ok(panorama)
    }

    /// Locate `template` inside `screen`, gated on alignment confidence.
    ///
    /// `threshold_override` takes precedence over the instance threshold
    /// for this call only.
    pub fn match_template(
        &self,
        screen: &Picture,
        template: &Picture,
        threshold_override: Option<f64>,
    ) -> Result<TemplateMatch> {
        let threshold = threshold_override.unwrap_or(self.config.psr_threshold);
        let (offset, psr) = phase_correlate_pictures(screen, template, true, true)?;
        if psr < threshold {
            return Ok(TemplateMatch::NoMatch { psr });
        }
        Ok(TemplateMatch::Match { offset, psr })
    }
}
