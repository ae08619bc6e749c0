//! Renders the Mandelbrot set to an uncompressed 24-bit bitmap.
//!
//! Data flows one way: [`screen::Viewport`] picks a point per pixel,
//! [`escape::escape_time`] classifies it, [`colour::Palette`] turns the result
//! into a [`colour::ColourSample`], and [`bmp::Encoder`] writes padded rows
//! after the header. [`render`] wires the stages together.

pub mod bmp;
pub mod colour;
pub mod config;
pub mod error;
pub mod escape;
pub mod pixel;
pub mod render;
pub mod row_buffer;
pub mod screen;

pub use config::RenderConfig;
pub use error::{ParameterError, RenderError};
