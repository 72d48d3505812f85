use std::path::PathBuf;

use clap::Parser;
use image::ImageReader;

use atelier::SketchPipeline;
use atelier::sketch::{audio, render};

#[derive(Parser)]
#[command(name = "sketch")]
#[command(about = "Trace a raster image into pen strokes and draw them")]
struct Cli {
    /// Path to the input image
    #[arg(long, value_name = "IMAGE", default_value = "mos.png")]
    image: PathBuf,

    /// Background picture shown behind the strokes
    #[arg(long, value_name = "IMAGE", default_value = "Winter_BG.gif")]
    background: PathBuf,

    /// Audio file looped while the drawing is on screen
    #[arg(long, value_name = "AUDIO", default_value = "We_Wish_You_A_Merry_Xmas.wav")]
    audio: PathBuf,

    /// Edge binarization cutoff
    #[arg(long, default_value_t = 50)]
    cutoff: u8,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let args = Cli::parse();

    let img = ImageReader::open(&args.image)?
        .decode()
        .map_err(|e| anyhow::anyhow!("Failed to decode image: {}", e))?;
    let background = ImageReader::open(&args.background)?
        .decode()
        .map_err(|e| anyhow::anyhow!("Failed to decode background image: {}", e))?;

    let plan = SketchPipeline::new()
        .with_edge_cutoff(args.cutoff)
        .trace(&img);

    // playback keeps looping for as long as the window stays open
    let _audio = audio::play_looping(&args.audio)?;

    render::run(plan, &background).map_err(|e| anyhow::anyhow!("Window error: {e}"))?;
    Ok(())
}
