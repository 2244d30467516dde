//! Graphics state carried by the interpreter.

use super::color::Rgb;
use crate::utils::{MATRIX_IDENTITY, Matrix};

/// Graphics state - the parameters that affect how a path is painted.
///
/// A fresh state has the identity CTM, black fill and stroke, and a line
/// width of one point.
#[derive(Debug, Clone, PartialEq)]
pub struct GraphicsState {
    /// Current transformation matrix
    pub ctm: Matrix,
    /// Non-stroking (fill) color
    pub fill_color: Option<Rgb>,
    /// Stroking color
    pub stroke_color: Option<Rgb>,
    /// Line width in source units (points)
    pub linewidth: f64,
}

impl GraphicsState {
    /// Create new graphics state with default values.
    pub const fn new() -> Self {
        Self {
            ctm: MATRIX_IDENTITY,
            fill_color: Some(Rgb::BLACK),
            stroke_color: Some(Rgb::BLACK),
            linewidth: 1.0,
        }
    }

    /// Fill color to paint with; a missing color paints solid black.
    pub fn fill_or_black(&self) -> Rgb {
        self.fill_color.unwrap_or(Rgb::BLACK)
    }

    /// Stroke color to paint with; a missing color paints solid black.
    pub fn stroke_or_black(&self) -> Rgb {
        self.stroke_color.unwrap_or(Rgb::BLACK)
    }
}

impl Default for GraphicsState {
    fn default() -> Self {
        Self::new()
    }
}
