//! Color operators.
//!
//! Handles: setStrokeGray, setFillGray, setStrokeRGBColor, setFillRGBColor,
//! setStrokeCMYKColor, setFillCMYKColor
//!
//! Operands are normalized to a 0..1 RGB triple on the way in; the graphics
//! state never holds anything else.

use crate::interp::device::PaintDevice;
use crate::interp::interpreter::ShapeInterpreter;
use crate::model::Rgb;

impl<'a, D: PaintDevice> ShapeInterpreter<'a, D> {
    /// Sets the gray level for stroking operations.
    ///
    /// Operator: `setStrokeGray`
    pub fn do_set_stroke_gray(&mut self, gray: f64) {
        self.graphicstate.stroke_color = Some(Rgb::gray(gray));
    }

    /// Sets the gray level for non-stroking operations.
    ///
    /// Operator: `setFillGray`
    pub fn do_set_fill_gray(&mut self, gray: f64) {
        self.graphicstate.fill_color = Some(Rgb::gray(gray));
    }

    /// Sets the RGB color for stroking operations.
    ///
    /// Operator: `setStrokeRGBColor`
    pub fn do_set_stroke_rgb(&mut self, r: f64, g: f64, b: f64) {
        self.graphicstate.stroke_color = Some(Rgb::rgb(r, g, b));
    }

    /// Sets the RGB color for non-stroking operations.
    ///
    /// Operator: `setFillRGBColor`
    pub fn do_set_fill_rgb(&mut self, r: f64, g: f64, b: f64) {
        self.graphicstate.fill_color = Some(Rgb::rgb(r, g, b));
    }

    /// Sets the CMYK color for stroking operations.
    ///
    /// Operator: `setStrokeCMYKColor`
    pub fn do_set_stroke_cmyk(&mut self, c: f64, m: f64, y: f64, k: f64) {
        self.graphicstate.stroke_color = Some(Rgb::cmyk(c, m, y, k));
    }

    /// Sets the CMYK color for non-stroking operations.
    ///
    /// Operator: `setFillCMYKColor`
    pub fn do_set_fill_cmyk(&mut self, c: f64, m: f64, y: f64, k: f64) {
        self.graphicstate.fill_color = Some(Rgb::cmyk(c, m, y, k));
    }
}
