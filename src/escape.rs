//! Escape-time iteration.

use crate::pixel::{Complex, Escape};

/// Squared escape radius. Points with `|z|^2` above this never return.
pub const ESCAPE_RADIUS_SQR: f64 = 4.0;

/**
Iterate `z -> z^2 + c` from `z = 0` for at most `max_iterations` steps.

The counter is bumped before the threshold test, so a point that escapes on
the first step reports a count of 1. A count of 0 is reserved for
[`Escape::Member`].

Everything is `f64`. Single precision bands visibly once the view radius drops
below about `1e-6`, and even `f64` runs out eventually; deep zooms are not
supported.
*/
pub fn escape_time(c: Complex, max_iterations: u32) -> Escape {
    let mut z = Complex::ZERO;
    let mut iteration = 0;

    while iteration < max_iterations {
        iteration += 1;

        z = Complex {
            real: z.real * z.real - z.imaginary * z.imaginary + c.real,
            imaginary: 2.0 * z.real * z.imaginary + c.imaginary,
        };

        if z.norm_sqr() > ESCAPE_RADIUS_SQR {
            return Escape::Escaped(iteration);
        }
    }

    Escape::Member
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn origin_is_always_a_member() {
        for max_iterations in [1, 2, 50, 1000, 100_000] {
            assert_eq!(escape_time(Complex::ZERO, max_iterations), Escape::Member);
        }
    }

    #[test]
    fn far_points_escape_on_the_first_iteration() {
        for c in [
            Complex::new(2.0, 2.0),
            Complex::new(-2.0, -2.0),
            Complex::new(2.1, 0.0),
            Complex::new(0.0, -3.0),
            Complex::new(100.0, 100.0),
        ] {
            assert_eq!(escape_time(c, 50), Escape::Escaped(1), "{:?}", c);
        }
    }

    #[test]
    fn radius_two_is_not_past_the_threshold() {
        // |c|^2 == 4 after the first step, which is not > 4.
        // z2 = 4 - 2 = 2, z3 = 2, ... so c = -2 stays bounded forever.
        assert_eq!(escape_time(Complex::new(-2.0, 0.0), 1000), Escape::Member);

        // z1 = 2, |z1|^2 == 4 does not escape; z2 = 6 does.
        assert_eq!(escape_time(Complex::new(2.0, 0.0), 1000), Escape::Escaped(2));
        assert_eq!(escape_time(Complex::new(0.0, 2.0), 1000), Escape::Escaped(2));
    }

    #[test]
    fn cap_of_one_only_detects_immediate_escape() {
        assert_eq!(escape_time(Complex::new(0.5, 0.5), 1), Escape::Member);
        assert_eq!(escape_time(Complex::new(2.5, 0.0), 1), Escape::Escaped(1));
    }

    #[test]
    fn escape_count_never_exceeds_the_cap() {
        // c = 0.26 escapes slowly (just outside the cusp).
        let c = Complex::new(0.26, 0.0);
        let unbounded = escape_time(c, 10_000);
        let count = unbounded.iteration_count();
        assert!(count > 10, "{:?}", unbounded);

        assert_eq!(escape_time(c, count), Escape::Escaped(count));
        assert_eq!(escape_time(c, count - 1), Escape::Member);
    }

    #[test]
    fn main_cardioid_and_bulb_are_members() {
        for c in [
            Complex::new(-0.1, 0.1),
            Complex::new(-1.0, 0.0),
            Complex::new(0.25, 0.0),
            Complex::new(-0.5, 0.0),
        ] {
            assert_eq!(escape_time(c, 500), Escape::Member, "{:?}", c);
        }
    }
}
