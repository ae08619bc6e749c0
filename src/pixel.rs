/// A sample point on the complex plane.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Complex {
    pub real: f64,
    pub imaginary: f64,
}

impl Complex {
    pub const ZERO: Self = Complex {
        real: 0.0,
        imaginary: 0.0,
    };

    pub fn new(real: f64, imaginary: f64) -> Self {
        Self { real, imaginary }
    }

    /// `|z|^2`, compared against the squared escape radius to avoid a square root.
    pub fn norm_sqr(self) -> f64 {
        self.real * self.real + self.imaginary * self.imaginary
    }
}

/// Outcome of the escape-time test for a single pixel.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Escape {
    /// The iteration cap was reached without escaping.
    Member,
    /// Escaped on this iteration. Always at least 1.
    Escaped(u32),
}

impl Escape {
    pub fn escaped(self) -> bool {
        matches!(self, Escape::Escaped(_))
    }

    /// The escape iteration, or 0 for set members.
    pub fn iteration_count(self) -> u32 {
        match self {
            Escape::Member => 0,
            Escape::Escaped(count) => count,
        }
    }
}
