use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;

use mosaic_core::correlate::phase_correlate_pictures;
use mosaic_core::io::image_io::load_picture;

#[derive(Args)]
pub struct OffsetArgs {
    /// Reference image
    pub reference: PathBuf,

    /// Template image (must not exceed the reference in either axis)
    pub template: PathBuf,

    /// Disable sub-pixel refinement
    #[arg(long)]
    pub no_subpixel: bool,

    /// Disable the Hann window
    #[arg(long)]
    pub no_window: bool,
}

pub fn run(args: &OffsetArgs) -> Result<()> {
    let reference = load_picture(&args.reference)
        .with_context(|| format!("Failed to load {}", args.reference.display()))?;
    let template = load_picture(&args.template)
        .with_context(|| format!("Failed to load {}", args.template.display()))?;

    let (offset, psr) =
        phase_correlate_pictures(&reference, &template, !args.no_subpixel, !args.no_window)?;

    println!("dy={:.3} dx={:.3} psr={:.2}", offset.dy, offset.dx, psr);
    Ok(())
}
