//! Render parameters and their validation.

use crate::{
    bmp,
    colour::HuePolicy,
    error::ParameterError,
    pixel::Complex,
    screen::{Size, Viewport},
};

/// Largest iteration cap accepted. One below `u32::MAX`.
pub const MAX_ITERATIONS: u32 = 4_294_967_294;

/// Largest side length accepted. Keeps the file size inside the 32-bit header field.
pub const MAX_RESOLUTION: u32 = 37_800;

/// Centre coordinates must stay strictly inside this on both axes.
pub const CENTRE_LIMIT: f64 = 2.0;

pub const MAX_RADIUS: f64 = 2.0;

/// Everything a render needs. The image is always square.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RenderConfig {
    pub center_x: f64,
    pub center_y: f64,
    pub radius: f64,
    pub iterations: u32,
    pub resolution: u32,
    pub policy: HuePolicy,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            center_x: 0.0,
            center_y: 0.0,
            radius: 2.0,
            iterations: 255,
            resolution: 1000,
            policy: HuePolicy::default(),
        }
    }
}

impl RenderConfig {
    pub fn validate(&self) -> Result<(), ParameterError> {
        if !(self.center_x.abs() < CENTRE_LIMIT && self.center_y.abs() < CENTRE_LIMIT) {
            return Err(ParameterError::Centre {
                x: self.center_x,
                y: self.center_y,
            });
        }
        if !(self.radius > 0.0 && self.radius <= MAX_RADIUS) {
            return Err(ParameterError::Radius(self.radius));
        }
        if self.iterations == 0 || self.iterations > MAX_ITERATIONS {
            return Err(ParameterError::Iterations(self.iterations));
        }
        if self.resolution == 0 || self.resolution > MAX_RESOLUTION {
            return Err(ParameterError::Resolution(self.resolution));
        }
        Ok(())
    }

    pub fn size(&self) -> Size {
        Size::square(self.resolution)
    }

    pub fn viewport(&self) -> Viewport {
        Viewport::centred(Complex::new(self.center_x, self.center_y), self.radius)
    }

    /// Size of the finished file in bytes.
    pub fn file_size(&self) -> u64 {
        bmp::HEADER_SIZE as u64 + bmp::row_stride(self.resolution) as u64 * self.resolution as u64
    }
}

const PREFIXES: [&str; 9] = ["Bytes", "KB", "MB", "GB", "TB", "PB", "EB", "ZB", "YB"];

/// `bytes` with a decimal SI prefix, e.g. `"3.00 MB"`.
pub fn human_size(bytes: u64) -> String {
    let mut exponent = 0;
    let mut value = bytes as f64;
    while value >= 1000.0 && exponent < PREFIXES.len() - 1 {
        value /= 1000.0;
        exponent += 1;
    }
    format!("{:.2} {}", value, PREFIXES[exponent])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_valid() {
        RenderConfig::default().validate().unwrap();
    }

    #[test]
    fn limits_are_inclusive_where_documented() {
        let config = RenderConfig {
            center_x: 1.999,
            center_y: -1.999,
            radius: 2.0,
            iterations: MAX_ITERATIONS,
            resolution: MAX_RESOLUTION,
            ..RenderConfig::default()
        };
        config.validate().unwrap();
    }

    #[test]
    fn centre_on_the_limit_is_rejected() {
        let config = RenderConfig {
            center_x: 2.0,
            ..RenderConfig::default()
        };
        assert_eq!(
            config.validate(),
            Err(ParameterError::Centre { x: 2.0, y: 0.0 })
        );

        let config = RenderConfig {
            center_y: f64::NAN,
            ..RenderConfig::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn radius_must_be_positive_and_at_most_two() {
        for radius in [0.0, -1.0, 2.000001, f64::INFINITY] {
            let config = RenderConfig {
                radius,
                ..RenderConfig::default()
            };
            assert_eq!(config.validate(), Err(ParameterError::Radius(radius)));
        }
    }

    #[test]
    fn iteration_cap_bounds() {
        for iterations in [0, u32::MAX] {
            let config = RenderConfig {
                iterations,
                ..RenderConfig::default()
            };
            assert_eq!(
                config.validate(),
                Err(ParameterError::Iterations(iterations))
            );
        }
    }

    #[test]
    fn resolution_bounds() {
        for resolution in [0, MAX_RESOLUTION + 1] {
            let config = RenderConfig {
                resolution,
                ..RenderConfig::default()
            };
            assert_eq!(
                config.validate(),
                Err(ParameterError::Resolution(resolution))
            );
        }
    }

    #[test]
    fn largest_image_fits_the_header() {
        let config = RenderConfig {
            resolution: MAX_RESOLUTION,
            ..RenderConfig::default()
        };
        assert!(config.file_size() <= u32::MAX as u64);
        assert!(bmp::Header::for_size(config.size()).is_ok());
    }

    #[test]
    fn predicted_file_size_matches_the_header() {
        let config = RenderConfig {
            resolution: 4,
            ..RenderConfig::default()
        };
        assert_eq!(config.file_size(), 54 + 12 * 4);
        let header = bmp::Header::for_size(config.size()).unwrap();
        assert_eq!(header.file_size as u64, config.file_size());
    }

    #[test]
    fn human_sizes() {
        assert_eq!(human_size(0), "0.00 Bytes");
        assert_eq!(human_size(999), "999.00 Bytes");
        assert_eq!(human_size(3_000_054), "3.00 MB");
        assert_eq!(human_size(4_286_520_054), "4.29 GB");
        assert_eq!(human_size(u64::MAX), "18.45 EB");
    }
}
