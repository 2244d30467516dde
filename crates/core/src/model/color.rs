//! Color normalization.
//!
//! Gray, RGB and CMYK operands are converted to one canonical 0..1 RGB
//! triple as soon as they are read, so nothing downstream needs to know
//! which color space or value range the source used.

use serde::{Deserialize, Serialize};

/// Normalized RGB color, each channel nominally in 0..1.
///
/// Serializes as a three-element array `[r, g, b]`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rgb(pub f64, pub f64, pub f64);

impl Rgb {
    pub const BLACK: Rgb = Rgb(0.0, 0.0, 0.0);

    /// Normalizes RGB operands.
    ///
    /// Some producers emit 0..255 values; if any channel exceeds 1 all
    /// channels are divided by 255.
    pub fn rgb(r: f64, g: f64, b: f64) -> Self {
        let [r, g, b] = auto_range([r, g, b]);
        Rgb(r, g, b)
    }

    /// Normalizes a gray level (0 = black, 1 = white).
    pub fn gray(g: f64) -> Self {
        let [g] = auto_range([g]);
        Rgb(g, g, g)
    }

    /// Converts CMYK operands with the subtractive formula.
    pub fn cmyk(c: f64, m: f64, y: f64, k: f64) -> Self {
        let [c, m, y, k] = auto_range([c, m, y, k]);
        Rgb((1.0 - c) * (1.0 - k), (1.0 - m) * (1.0 - k), (1.0 - y) * (1.0 - k))
    }

    pub const fn channels(&self) -> [f64; 3] {
        [self.0, self.1, self.2]
    }
}

fn auto_range<const N: usize>(values: [f64; N]) -> [f64; N] {
    if values.iter().any(|&v| v > 1.0) {
        values.map(|v| v / 255.0)
    } else {
        values
    }
}

/// Equality key for grouping: each channel rounded to two decimals, halves
/// rounded up.
///
/// `None` is the key of an absent color (no fill or no stroke).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ColorKey(Option<[i64; 3]>);

impl ColorKey {
    pub fn of(color: Option<Rgb>) -> Self {
        ColorKey(color.map(|c| c.channels().map(|v| (v * 100.0 + 0.5).floor() as i64)))
    }
}

impl std::fmt::Display for ColorKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.0 {
            Some([r, g, b]) => write!(f, "{r},{g},{b}"),
            None => f.write_str("none"),
        }
    }
}
