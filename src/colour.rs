//! Colouring algorithms.

use bytemuck::{Pod, Zeroable};

use crate::pixel::Escape;

/**
One pixel as it is laid out in the file: blue, green, red.

The hue ramp writes its `(r, g, b)` triplet straight into these fields without
swapping, so a viewer shows hue 0 as blue rather than red. Rows are also
emitted without the bottom-up flip. The two shortcuts are a pair; undoing one
without the other produces a different picture from earlier renders.
*/
#[repr(C)]
#[derive(Pod, Zeroable, Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ColourSample {
    pub blue: u8,
    pub green: u8,
    pub red: u8,
}

impl ColourSample {
    /// Reserved for set members. Never produced by the hue ramp.
    pub const BLACK: Self = ColourSample {
        blue: 0,
        green: 0,
        red: 0,
    };

    pub const fn new(blue: u8, green: u8, red: u8) -> Self {
        Self { blue, green, red }
    }
}

/// How an escape count is turned into a hue angle.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum HuePolicy {
    /// `count * 360 / max_iterations`, reduced mod 360. Multiplying first keeps
    /// hues such as `1 * 360 / 6` exactly on their sextant boundary.
    #[default]
    Degrees,
    /// `count / max_iterations` scaled to 0..=255 and truncated, then read as
    /// degrees. Computed in `f32` throughout so the channels match bitmaps
    /// produced by the original generator byte for byte.
    Legacy,
}

/// Hue in degrees for an escaped pixel, or `None` for a set member.
pub fn hue_of(escape: Escape, max_iterations: u32, policy: HuePolicy) -> Option<f64> {
    debug_assert!(max_iterations > 0);

    let count = match escape {
        Escape::Member => return None,
        Escape::Escaped(count) => count,
    };

    Some(match policy {
        HuePolicy::Degrees => degrees_hue(count, max_iterations),
        HuePolicy::Legacy => legacy_hue(count, max_iterations) as f64,
    })
}

fn degrees_hue(count: u32, max_iterations: u32) -> f64 {
    (count as f64 * 360.0 / max_iterations as f64) % 360.0
}

fn legacy_hue(count: u32, max_iterations: u32) -> f32 {
    (count as f32 / max_iterations as f32 * 255.0).trunc()
}

/**
HSV to RGB at full saturation and value, so one channel is always 0 and one is
always 255.

Sextants are half-open, `[n, n + 1)`, and tested in ascending order, so a hue
on a boundary (60, 120, ...) belongs to the sextant starting there. Channel
values are truncated, not rounded.
*/
pub fn hsv_to_sample(hue: f64) -> ColourSample {
    let h = hue.rem_euclid(360.0) / 60.0;
    let x = 1.0 - ((h % 2.0) - 1.0).abs();
    sextant_sample(h, (x * 255.0) as u8)
}

/// [`hsv_to_sample`] in single precision, for [`HuePolicy::Legacy`].
///
/// Truncation makes the precision visible: hue 204 gives a partial channel of
/// 152 here and 153 in `f64`.
pub fn hsv_to_sample_f32(hue: f32) -> ColourSample {
    let h = hue.rem_euclid(360.0) / 60.0;
    let x = 1.0 - ((h % 2.0) - 1.0).abs();
    sextant_sample(h as f64, (x * 255.0) as u8)
}

fn sextant_sample(h: f64, x: u8) -> ColourSample {
    let (r, g, b) = if (0.0..1.0).contains(&h) {
        (255, x, 0)
    } else if (1.0..2.0).contains(&h) {
        (x, 255, 0)
    } else if (2.0..3.0).contains(&h) {
        (0, 255, x)
    } else if (3.0..4.0).contains(&h) {
        (0, x, 255)
    } else if (4.0..5.0).contains(&h) {
        (x, 0, 255)
    } else if (5.0..6.0).contains(&h) {
        (255, 0, x)
    } else {
        // `rem_euclid` can round up to exactly 360.
        (255, 0, 0)
    };

    // Not swapped into blue-green-red on purpose; see `ColourSample`.
    ColourSample::new(r, g, b)
}

/// Maps escape results to colours for one render.
#[derive(Clone, Copy, Debug)]
pub struct Palette {
    policy: HuePolicy,
    max_iterations: u32,
}

impl Palette {
    pub fn new(policy: HuePolicy, max_iterations: u32) -> Self {
        debug_assert!(max_iterations > 0);
        Self {
            policy,
            max_iterations,
        }
    }

    pub fn colour(&self, escape: Escape) -> ColourSample {
        let count = match escape {
            Escape::Member => return ColourSample::BLACK,
            Escape::Escaped(count) => count,
        };

        match self.policy {
            HuePolicy::Degrees => hsv_to_sample(degrees_hue(count, self.max_iterations)),
            HuePolicy::Legacy => hsv_to_sample_f32(legacy_hue(count, self.max_iterations)),
        }
    }
}
