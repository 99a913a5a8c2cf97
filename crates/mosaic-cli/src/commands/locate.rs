use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;

use mosaic_core::config::StitcherConfig;
use mosaic_core::io::image_io::load_picture;
use mosaic_core::stitch::{PanoramaBuilder, TemplateMatch};

#[derive(Args)]
pub struct LocateArgs {
    /// Image to search in
    pub screen: PathBuf,

    /// Template to locate
    pub template: PathBuf,

    /// Minimum PSR to accept a match
    #[arg(long, default_value = "5.0")]
    pub threshold: f64,
}

pub fn run(args: &LocateArgs) -> Result<()> {
    let screen = load_picture(&args.screen)
        .with_context(|| format!("Failed to load {}", args.screen.display()))?;
    let template = load_picture(&args.template)
        .with_context(|| format!("Failed to load {}", args.template.display()))?;

    let builder = PanoramaBuilder::new(StitcherConfig {
        psr_threshold: args.threshold,
        ..Default::default()
    });

    match builder.match_template(&screen, &template, None)? {
        TemplateMatch::Match { offset, psr } => {
            println!(
                "match at dy={:.1} dx={:.1} (psr {:.1})",
                offset.dy, offset.dx, psr
            );
        }
        TemplateMatch::NoMatch { psr } => {
            println!("no match (psr {:.1} below threshold {})", psr, args.threshold);
            std::process::exit(1);
        }
    }
    Ok(())
}
