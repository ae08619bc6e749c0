//! Image resolution and the mapping from pixel indices to the complex plane.

use crate::pixel::Complex;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Size {
    pub width: u32,
    pub height: u32,
}

impl Size {
    pub fn square(side: u32) -> Self {
        Self {
            width: side,
            height: side,
        }
    }

    pub fn pixel_count(&self) -> u64 {
        self.width as u64 * self.height as u64
    }
}

/// A closed interval on one axis of the complex plane.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Axis {
    pub start: f64,
    pub end: f64,
}

impl Axis {
    pub fn new(start: f64, end: f64) -> Self {
        Self { start, end }
    }

    pub fn centred(centre: f64, radius: f64) -> Self {
        Self {
            start: centre - radius,
            end: centre + radius,
        }
    }

    /// Position of sample `index` out of `count`.
    ///
    /// The first and last samples sit exactly on `start` and `end`. A single
    /// sample sits on the midpoint.
    pub fn sample(&self, index: u32, count: u32) -> f64 {
        debug_assert!(index < count, "sample {} out of {}", index, count);

        if count <= 1 {
            return (self.start + self.end) / 2.0;
        }

        let step = (self.end - self.start) / (count - 1) as f64;
        if index == count - 1 {
            self.end
        } else {
            self.start + index as f64 * step
        }
    }
}

/// The rectangle of the complex plane covered by an image.
///
/// Row 0 is `y.start`. The bitmap stores rows bottom-up, so `y.start` ends up
/// at the bottom of the displayed picture.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Viewport {
    pub x: Axis,
    pub y: Axis,
}

impl Viewport {
    pub fn new(x: Axis, y: Axis) -> Self {
        Self { x, y }
    }

    pub fn centred(centre: Complex, radius: f64) -> Self {
        Self {
            x: Axis::centred(centre.real, radius),
            y: Axis::centred(centre.imaginary, radius),
        }
    }

    pub fn point(&self, column: u32, row: u32, size: Size) -> Complex {
        Complex {
            real: self.x.sample(column, size.width),
            imaginary: self.y.sample(row, size.height),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn endpoints_are_exact() {
        let axis = Axis::new(-2.0, 2.0);
        assert_eq!(axis.sample(0, 4), -2.0);
        assert_eq!(axis.sample(3, 4), 2.0);
        assert_eq!(axis.sample(0, 1200), -2.0);
        assert_eq!(axis.sample(1199, 1200), 2.0);
    }

    #[test]
    fn samples_are_evenly_spaced() {
        let axis = Axis::new(0.0, 3.0);
        let samples: Vec<f64> = (0..4).map(|i| axis.sample(i, 4)).collect();
        assert_eq!(samples, vec![0.0, 1.0, 2.0, 3.0]);
    }

    #[test]
    fn single_sample_is_the_midpoint() {
        assert_eq!(Axis::new(-2.0, 2.0).sample(0, 1), 0.0);
        assert_eq!(Axis::new(-1.0, 0.0).sample(0, 1), -0.5);
    }

    #[test]
    fn corners_of_a_centred_viewport() {
        let viewport = Viewport::centred(Complex::ZERO, 2.0);
        let size = Size::square(4);

        for (column, row) in [(0, 0), (3, 0), (0, 3), (3, 3)] {
            let c = viewport.point(column, row, size);
            assert_eq!(c.real.abs(), 2.0);
            assert_eq!(c.imaginary.abs(), 2.0);
        }
        assert_eq!(viewport.point(1, 0, size).imaginary, -2.0);
    }

    #[test]
    fn off_centre_viewport() {
        let viewport = Viewport::centred(Complex::new(-0.5, 0.25), 0.5);
        assert_eq!(viewport.x, Axis::new(-1.0, 0.0));
        assert_eq!(viewport.y, Axis::new(-0.25, 0.75));
    }

    #[test]
    fn pixel_count_does_not_overflow() {
        assert_eq!(Size::square(37_800).pixel_count(), 1_428_840_000);
        let size = Size {
            width: u32::MAX,
            height: 2,
        };
        assert_eq!(size.pixel_count(), 2 * u32::MAX as u64);
    }
}
