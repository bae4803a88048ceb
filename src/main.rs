use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use prevalence::{PaletteService, Swatch};

/// Print the most prevalent colors of an image.
#[derive(Parser, Debug)]
#[command(name = "prevalence", version, about)]
struct Args {
    /// Path to the input image
    image: PathBuf,

    /// Requested palette size, between 2 and 20
    #[arg(short, long, allow_negative_numbers = true)]
    colors: Option<f64>,

    /// Sampling stride; whole numbers are reset to the default of 10
    #[arg(short, long, allow_negative_numbers = true)]
    quality: Option<f64>,

    /// Only print the single most prevalent color
    #[arg(long)]
    dominant: bool,

    /// Cut the palette down to the requested palette size
    #[arg(long)]
    truncate: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();
    let service: PaletteService = PaletteService::default();

    if args.dominant {
        let rgb = service.get_color(args.image, args.quality).await?;
        println!("{}", Swatch::new(rgb, 1).hex());
        return Ok(());
    }

    let mut palette = service.get_palette(args.image, args.colors, args.quality).await?;
    if args.truncate {
        palette = palette.truncated();
    }

    for swatch in palette.swatches() {
        println!("{} {}", swatch.hex(), swatch.population());
    }

    Ok(())
}
