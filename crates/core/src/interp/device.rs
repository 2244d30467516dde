//! Paint device - output interface for operator interpretation.
//!
//! The interpreter reports every painted path to a [`PaintDevice`].
//! [`ShapeCollector`] is the device used by the import pipeline: it turns
//! each paint into a [`RawShape`] and keeps them in paint order.

use crate::model::{BBox, GraphicsState, PathSegment, RawShape};
use crate::utils::pt_to_mm;

/// Paint device trait - receives painted paths from the interpreter.
pub trait PaintDevice {
    /// Paint a graphics path.
    ///
    /// `path` is already in canvas millimetres and never empty.
    fn paint_path(
        &mut self,
        graphicstate: &GraphicsState,
        stroke: bool,
        fill: bool,
        evenodd: bool,
        path: &[PathSegment],
    );
}

/// Device that collects one [`RawShape`] per paint operation.
#[derive(Debug, Default)]
pub struct ShapeCollector {
    shapes: Vec<RawShape>,
}

impl ShapeCollector {
    pub fn new() -> Self {
        Self::default()
    }

    /// Shapes collected so far, in paint order.
    pub fn shapes(&self) -> &[RawShape] {
        &self.shapes
    }

    pub fn into_shapes(self) -> Vec<RawShape> {
        self.shapes
    }
}

impl PaintDevice for ShapeCollector {
    fn paint_path(
        &mut self,
        graphicstate: &GraphicsState,
        stroke: bool,
        fill: bool,
        _evenodd: bool,
        path: &[PathSegment],
    ) {
        // A path made only of closes has no extent to place on the canvas.
        let Some(bbox) = BBox::from_segments(path) else {
            tracing::trace!("paint of a path without points skipped");
            return;
        };
        self.shapes.push(RawShape {
            segments: path.to_vec(),
            fill: fill.then(|| graphicstate.fill_or_black()),
            stroke: stroke.then(|| graphicstate.stroke_or_black()),
            stroke_width_mm: pt_to_mm(graphicstate.linewidth),
            bbox,
        });
    }
}
