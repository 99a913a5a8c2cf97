use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use clap::Args;
use indicatif::{ProgressBar, ProgressStyle};
use tracing::debug;

use mosaic_core::config::StitcherConfig;
use mosaic_core::io::image_io::{load_picture, save_picture};
use mosaic_core::stitch::stitch_pair;

use crate::summary::print_stitch_summary;

#[derive(Args)]
pub struct StitchArgs {
    /// Input images, ordered left to right
    pub images: Vec<PathBuf>,

    /// Expected overlap between consecutive images in pixels
    /// (default: half the panorama width)
    #[arg(long)]
    pub overlap: Option<usize>,

    /// Alpha-blend transition width in pixels
    #[arg(long, default_value = "64")]
    pub blend_width: usize,

    /// Minimum PSR before a low-confidence warning is emitted
    #[arg(long, default_value = "5.0")]
    pub psr_threshold: f64,

    /// Read stitching parameters from a TOML config file instead of flags
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Output file path
    #[arg(short, long, default_value = "panorama.png")]
    pub output: PathBuf,
}

pub fn run(args: &StitchArgs) -> Result<()> {
    if args.images.is_empty() {
        bail!("No input images given");
    }

    let config = match &args.config {
        Some(path) => {
            let text = std::fs::read_to_string(path)
                .with_context(|| format!("Failed to read config {}", path.display()))?;
            toml::from_str(&text)
                .with_context(|| format!("Failed to parse config {}", path.display()))?
        }
        None => StitcherConfig {
            overlap_hint: args.overlap,
            blend_width: args.blend_width,
            psr_threshold: args.psr_threshold,
        },
    };

    print_stitch_summary(&config, args.images.len(), &args.output);

    let mut pictures = Vec::with_capacity(args.images.len());
    for path in &args.images {
        pictures.push(
            load_picture(path).with_context(|| format!("Failed to load {}", path.display()))?,
        );
    }

    let pb = ProgressBar::new((pictures.len() - 1) as u64);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("Stitching [{bar:40}] {pos}/{len}")?
            .progress_chars("=> "),
    );

    let mut panorama = pictures[0].clone();
    for (i, picture) in pictures.iter().enumerate().skip(1) {
        let stitched = stitch_pair(&panorama, picture, config.overlap_hint, config.blend_width)?;
        if stitched.psr < config.psr_threshold {
            pb.println(format!(
                "warning: low PSR {:.1} at image {} -- alignment may be inaccurate",
                stitched.psr, i
            ));
        }
        debug!(
            index = i,
            dy = stitched.offset.dy,
            dx = stitched.offset.dx,
            psr = stitched.psr,
            "Pair stitched"
        );
        panorama = stitched.canvas;
        pb.set_position(i as u64);
    }
    pb.finish();

    save_picture(&panorama, &args.output)?;
    println!(
        "Saved {}x{} panorama to {}",
        panorama.width(),
        panorama.height(),
        args.output.display()
    );
    Ok(())
}
