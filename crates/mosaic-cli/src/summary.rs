use std::path::Path;

use console::Style;
use mosaic_core::config::StitcherConfig;

struct Styles {
    title: Style,
    label: Style,
    value: Style,
    auto: Style,
    path: Style,
}

impl Styles {
    fn new() -> Self {
        Self {
            title: Style::new().cyan().bold(),
            label: Style::new().dim(),
            value: Style::new().bold().white(),
            auto: Style::new().dim().yellow(),
            path: Style::new().underlined(),
        }
    }
}

pub fn print_stitch_summary(config: &StitcherConfig, image_count: usize, output: &Path) {
    let s = Styles::new();

    println!();
    println!("  {}", s.title.apply_to("Mosaic Stitch"));
    println!(
        "  {}",
        s.title.apply_to(
            "\u{2550}\u{2550}\u{2550}\u{2550}\u{2550}\u{2550}\u{2550}\u{2550}\u{2550}\u{2550}\u{2550}\u{2550}\u{2550}"
        )
    );
    println!();

    println!(
        "  {:<14}{}",
        s.label.apply_to("Images"),
        s.value.apply_to(image_count)
    );
    match config.overlap_hint {
        Some(px) => println!(
            "  {:<14}{}",
            s.label.apply_to("Overlap"),
            s.value.apply_to(format!("{px} px"))
        ),
        None => println!(
            "  {:<14}{}",
            s.label.apply_to("Overlap"),
            s.auto.apply_to("auto (half width)")
        ),
    }
    println!(
        "  {:<14}{}",
        s.label.apply_to("Blend"),
        s.value.apply_to(format!("{} px", config.blend_width))
    );
    println!(
        "  {:<14}{}",
        s.label.apply_to("PSR floor"),
        s.value.apply_to(config.psr_threshold)
    );
    println!(
        "  {:<14}{}",
        s.label.apply_to("Output"),
        s.path.apply_to(output.display())
    );
    println!();
}
