//! Drives a whole render: escape test, colouring, and encoding, one row at a time.

use std::{
    fs::File,
    io::{BufWriter, Seek, Write},
    path::Path,
};

use log::{debug, info, trace};

use crate::{
    bmp::Encoder,
    colour::{ColourSample, Palette},
    config::RenderConfig,
    error::RenderError,
    escape::escape_time,
};

/// Render into `sink` and hand it back once every row has been written and flushed.
pub fn render_to<W: Write + Seek>(sink: W, config: &RenderConfig) -> Result<W, RenderError> {
    config.validate()?;

    let size = config.size();
    let viewport = config.viewport();
    let palette = Palette::new(config.policy, config.iterations);

    info!(
        "rendering {}x{} ({} pixels) at ({}, {}) radius {} with {} iterations",
        size.width,
        size.height,
        size.pixel_count(),
        config.center_x,
        config.center_y,
        config.radius,
        config.iterations
    );

    let mut encoder = Encoder::new(sink, size)?;
    let mut samples = vec![ColourSample::BLACK; size.width as usize];
    let mut last_percent = None;

    for row in 0..size.height {
        trace!("begin row {}", row);

        let percent = row as u64 * 100 / size.height as u64;
        if last_percent != Some(percent) {
            debug!("{}%", percent);
            last_percent = Some(percent);
        }

        for (column, sample) in (0..size.width).zip(samples.iter_mut()) {
            let c = viewport.point(column, row, size);
            *sample = palette.colour(escape_time(c, config.iterations));
        }
        encoder.write_row(&samples)?;

        trace!("end row {}", row);
    }

    let sink = encoder.finish()?;
    info!("render finished");
    Ok(sink)
}

/// Render into a newly created (or truncated) file at `path`.
pub fn render_file(path: &Path, config: &RenderConfig) -> Result<(), RenderError> {
    // Fail on bad parameters before creating anything on disk.
    config.validate()?;

    let file = File::create(path)?;
    render_to(BufWriter::new(file), config)?;

    info!("wrote {}", path.display());
    Ok(())
}
