//! Grouping parameters.
//!
//! Contains GroupParams for controlling how raw shapes are merged.

/// Default proximity threshold in millimetres.
pub const DEFAULT_GAP_MM: f64 = 1.5;

/// Parameters for proximity grouping.
///
/// Controls how close two same-styled shapes must be to become one
/// compound shape.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GroupParams {
    /// Maximum separation, in millimetres, between the bounding boxes of
    /// two same-styled shapes for them to be merged. Boxes exactly this far
    /// apart still merge.
    pub gap: f64,
}

impl Default for GroupParams {
    fn default() -> Self {
        Self { gap: DEFAULT_GAP_MM }
    }
}

impl GroupParams {
    /// Creates grouping parameters with the given gap.
    ///
    /// # Panics
    /// Panics if gap is negative or not finite.
    pub fn new(gap: f64) -> Self {
        assert!(
            gap.is_finite() && gap >= 0.0,
            "gap should be a finite, non-negative number of millimetres"
        );
        Self { gap }
    }
}
