use std::{
    fs::File,
    io::Read,
    path::{Path, PathBuf},
};

use anyhow::Context;
use clap::Parser;
use log::{debug, info};

use mandelbrot_bmp::{
    bmp,
    colour::HuePolicy,
    config::{self, RenderConfig},
    render,
};

/// Render the Mandelbrot set to a 24-bit bitmap.
#[derive(Parser, Debug)]
#[command(version)]
struct Args {
    /// Real part of the image centre, strictly between -2 and 2.
    #[arg(long, default_value_t = 0.0, allow_hyphen_values = true)]
    center_x: f64,

    /// Imaginary part of the image centre, strictly between -2 and 2.
    #[arg(long, default_value_t = 0.0, allow_hyphen_values = true)]
    center_y: f64,

    /// Half the width of the rendered square, at most 2.
    #[arg(long, default_value_t = 2.0)]
    radius: f64,

    /// Iteration cap per pixel (1 to 4,294,967,294).
    #[arg(short, long, default_value_t = 255)]
    iterations: u32,

    /// Pixels per side (1 to 37,800).
    #[arg(short, long, default_value_t = 1000)]
    resolution: u32,

    /// How escape counts map onto the hue wheel.
    #[arg(long, value_enum, default_value_t = HuePolicy::Degrees)]
    palette: HuePolicy,

    #[arg(short, long, default_value = "MandelbrotSet.bmp")]
    output: PathBuf,

    /// Print the header of an existing bitmap instead of rendering.
    #[arg(long, value_name = "FILE", conflicts_with = "output")]
    inspect: Option<PathBuf>,
}

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = Args::parse();
    debug!("{:?}", args);

    if let Some(path) = &args.inspect {
        return inspect(path);
    }

    let config = RenderConfig {
        center_x: args.center_x,
        center_y: args.center_y,
        radius: args.radius,
        iterations: args.iterations,
        resolution: args.resolution,
        policy: args.palette,
    };
    config.validate().context("invalid render parameters")?;

    info!(
        "{} will take up approximately {}",
        args.output.display(),
        config::human_size(config.file_size())
    );

    render::render_file(&args.output, &config)
        .with_context(|| format!("failed to render {}", args.output.display()))?;

    Ok(())
}

fn inspect(path: &Path) -> anyhow::Result<()> {
    let mut bytes = [0; bmp::HEADER_SIZE as usize];
    File::open(path)
        .and_then(|mut file| file.read_exact(&mut bytes))
        .with_context(|| format!("failed to read the header of {}", path.display()))?;

    let header = bmp::Header::parse(&bytes)
        .with_context(|| format!("{} is not a bitmap", path.display()))?;
    println!("{:#?}", header);

    Ok(())
}
