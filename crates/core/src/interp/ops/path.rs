//! Path construction and painting operators.
//!
//! Handles: constructPath, moveTo, lineTo, curveTo, curveTo2, curveTo3,
//! rectangle, closePath, stroke, closeStroke, fill, eoFill, fillStroke,
//! eoFillStroke, closeFillStroke, closeEoFillStroke, endPath
//!
//! Path construction:
//! - Points are mapped through the CTM and into canvas millimetres as they
//!   are appended, so the buffered path is already in output units.
//! - constructPath carries a batch of sub-operators with one flat coordinate
//!   array; it decodes into exactly the segments the single forms produce.
//!
//! Path painting:
//! - stroke/fill/fillStroke hand the buffer to the device and clear it
//! - close variants close the subpath first
//! - endPath discards the buffer

use crate::interp::device::PaintDevice;
use crate::interp::interpreter::ShapeInterpreter;
use crate::model::{OpKind, Operand, PathSegment};

impl<'a, D: PaintDevice> ShapeInterpreter<'a, D> {
    // ========================================================================
    // Path Construction Operators
    // ========================================================================

    /// Begins a new subpath at the given point.
    ///
    /// Operator: `moveTo`
    pub fn do_move_to(&mut self, x: f64, y: f64) {
        let (px, py) = self.map_point(x, y);
        self.curpath.push(PathSegment::MoveTo(px, py));
        self.current_point = Some((px, py));
        self.subpath_start = Some((px, py));
    }

    /// Appends a straight line segment from the current point.
    ///
    /// Operator: `lineTo`
    pub fn do_line_to(&mut self, x: f64, y: f64) {
        let (px, py) = self.map_point(x, y);
        self.curpath.push(PathSegment::LineTo(px, py));
        self.current_point = Some((px, py));
    }

    /// Appends a cubic Bezier curve to the path.
    ///
    /// Operator: `curveTo`
    pub fn do_curve_to(&mut self, x1: f64, y1: f64, x2: f64, y2: f64, x3: f64, y3: f64) {
        let c1 = self.map_point(x1, y1);
        self.push_curve(c1, x2, y2, x3, y3);
    }

    /// Appends a cubic Bezier curve with the current point as first control point.
    ///
    /// Operator: `curveTo2`
    pub fn do_curve_to2(&mut self, x2: f64, y2: f64, x3: f64, y3: f64) {
        let c1 = self
            .current_point
            .unwrap_or_else(|| self.map_point(0.0, 0.0));
        self.push_curve(c1, x2, y2, x3, y3);
    }

    /// Appends a cubic Bezier curve with the endpoint as second control point.
    ///
    /// Operator: `curveTo3`
    pub fn do_curve_to3(&mut self, x1: f64, y1: f64, x3: f64, y3: f64) {
        let c1 = self.map_point(x1, y1);
        self.push_curve(c1, x3, y3, x3, y3);
    }

    fn push_curve(&mut self, c1: (f64, f64), x2: f64, y2: f64, x3: f64, y3: f64) {
        let (cx2, cy2) = self.map_point(x2, y2);
        let (ex, ey) = self.map_point(x3, y3);
        self.curpath
            .push(PathSegment::CurveTo(c1.0, c1.1, cx2, cy2, ex, ey));
        self.current_point = Some((ex, ey));
    }

    /// Closes the current subpath.
    ///
    /// Operator: `closePath`
    pub fn do_close_path(&mut self) {
        self.curpath.push(PathSegment::ClosePath);
        self.current_point = self.subpath_start;
    }

    /// Appends a rectangle to the current path as a complete subpath.
    ///
    /// Equivalent to: moveTo x y; lineTo x+w y; lineTo x+w y+h; lineTo x y+h; closePath
    ///
    /// Operator: `rectangle`
    pub fn do_rectangle(&mut self, x: f64, y: f64, w: f64, h: f64) {
        self.do_move_to(x, y);
        self.do_line_to(x + w, y);
        self.do_line_to(x + w, y + h);
        self.do_line_to(x, y + h);
        self.do_close_path();
    }

    /// Decodes a batched path-construction operator.
    ///
    /// `args[0]` lists the sub-operators and `args[1]` is the flat coordinate
    /// array they consume in order. Unknown sub-operators consume nothing;
    /// decoding stops if the coordinates run out.
    ///
    /// Operator: `constructPath`
    pub fn do_construct_path(&mut self, args: &[Operand]) {
        let (Some(sub_ops), Some(coords)) = (
            args.first().and_then(Operand::as_array),
            args.get(1).and_then(Operand::as_numbers),
        ) else {
            tracing::trace!("skipping constructPath: malformed operands");
            return;
        };

        let mut ci = 0;
        for sub_op in sub_ops {
            let Some(kind) = sub_op.as_op() else {
                continue;
            };
            let arity = match kind {
                OpKind::MoveTo | OpKind::LineTo => 2,
                OpKind::CurveTo => 6,
                OpKind::CurveTo2 | OpKind::CurveTo3 | OpKind::Rectangle => 4,
                OpKind::ClosePath => 0,
                other => {
                    tracing::trace!("skipping constructPath sub-operator {other}");
                    continue;
                }
            };
            let Some(c) = coords.get(ci..ci + arity) else {
                tracing::trace!("constructPath coordinates exhausted at {kind}");
                return;
            };
            match (kind, c) {
                (OpKind::MoveTo, &[x, y]) => self.do_move_to(x, y),
                (OpKind::LineTo, &[x, y]) => self.do_line_to(x, y),
                (OpKind::CurveTo, &[x1, y1, x2, y2, x3, y3]) => {
                    self.do_curve_to(x1, y1, x2, y2, x3, y3)
                }
                (OpKind::CurveTo2, &[x2, y2, x3, y3]) => self.do_curve_to2(x2, y2, x3, y3),
                (OpKind::CurveTo3, &[x1, y1, x3, y3]) => self.do_curve_to3(x1, y1, x3, y3),
                (OpKind::Rectangle, &[x, y, w, h]) => self.do_rectangle(x, y, w, h),
                (OpKind::ClosePath, _) => self.do_close_path(),
                _ => {}
            }
            ci += arity;
        }
    }

    // ========================================================================
    // Path Painting Operators
    // ========================================================================

    /// Helper to paint the path and clear it.
    fn paint_path(&mut self, stroke: bool, fill: bool, evenodd: bool) {
        if self.curpath.is_empty() {
            tracing::trace!("paint with empty path ignored");
        } else {
            self.device
                .paint_path(&self.graphicstate, stroke, fill, evenodd, &self.curpath);
        }
        self.curpath.clear();
        self.current_point = None;
        self.subpath_start = None;
    }

    /// Closes the subpath unless there is nothing to close.
    fn close_if_open(&mut self) {
        if !self.curpath.is_empty() {
            self.do_close_path();
        }
    }

    /// Strokes the current path.
    ///
    /// Operator: `stroke`
    pub fn do_stroke(&mut self) {
        self.paint_path(true, false, false);
    }

    /// Closes and strokes the current path.
    ///
    /// Operator: `closeStroke`
    pub fn do_close_stroke(&mut self) {
        self.close_if_open();
        self.do_stroke();
    }

    /// Fills the current path (nonzero winding, or even-odd when `evenodd`).
    ///
    /// Operators: `fill`, `eoFill`
    pub fn do_fill(&mut self, evenodd: bool) {
        self.paint_path(false, true, evenodd);
    }

    /// Fills and strokes the current path.
    ///
    /// Operators: `fillStroke`, `eoFillStroke`
    pub fn do_fill_stroke(&mut self, evenodd: bool) {
        self.paint_path(true, true, evenodd);
    }

    /// Closes, fills, and strokes the current path.
    ///
    /// Operators: `closeFillStroke`, `closeEoFillStroke`
    pub fn do_close_fill_stroke(&mut self, evenodd: bool) {
        self.close_if_open();
        self.do_fill_stroke(evenodd);
    }

    /// Ends the path without filling or stroking it.
    ///
    /// Operator: `endPath`
    pub fn do_end_path(&mut self) {
        self.curpath.clear();
        self.current_point = None;
        self.subpath_start = None;
    }
}
