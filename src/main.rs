use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use fontsheet::{Pt, RenderConfig};

/// Render sample text with every TrueType font in a directory.
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Input text for image generation
    #[arg(long, default_value = fontsheet::DEFAULT_TEXT)]
    text: String,

    /// Font size in pixels
    #[arg(long, alias = "font_size", default_value_t = 20)]
    font_size: u32,

    /// Base name for output files
    #[arg(long, alias = "output_base_name", default_value = "image")]
    output_base_name: String,

    /// Line spacing between text lines
    #[arg(long, alias = "line_spacing", default_value_t = 10)]
    line_spacing: u32,

    /// Directory scanned for .ttf files
    #[arg(long, default_value = "data/fonts")]
    fonts_dir: PathBuf,

    /// Directory the images are written to
    #[arg(long, default_value = "data/output")]
    output_dir: PathBuf,

    /// Maximum image width; text wraps 40px inside it
    #[arg(long, default_value_t = 800)]
    max_width: u32,

    /// Margin around the text block
    #[arg(long, default_value_t = 30)]
    padding: u32,

    /// Log per-font layout details
    #[arg(short, long)]
    verbose: bool,
}

impl Cli {
    fn into_config(self) -> RenderConfig {
        RenderConfig::default()
            .with_text(self.text)
            .with_font_size(Pt::from(self.font_size))
            .with_output_base_name(self.output_base_name)
            .with_line_spacing(self.line_spacing)
            .with_fonts_dir(self.fonts_dir)
            .with_output_dir(self.output_dir)
            .with_max_image_width(Pt::from(self.max_width))
            .with_padding(self.padding)
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let level = if cli.verbose {
        log::LevelFilter::Debug
    } else {
        log::LevelFilter::Info
    };
    env_logger::Builder::from_default_env()
        .filter_level(level)
        .init();

    let config = cli.into_config();
    let summary = fontsheet::render_all(&config)?;

    println!("All font renderings completed.");
    println!(
        "{} rendered, {} skipped",
        summary.rendered.len(),
        summary.skipped.len()
    );
    Ok(())
}
