//! Graphics state operators.
//!
//! Handles: save, restore, transform, paintFormXObjectBegin,
//! paintFormXObjectEnd, setLineWidth
//!
//! These operators manage the graphics state stack and transformation matrix.
//! A form group behaves like a save that may also concatenate the form's
//! matrix, and its end behaves like a restore.

use crate::interp::device::PaintDevice;
use crate::interp::interpreter::ShapeInterpreter;
use crate::utils::{Matrix, mult_matrix};

impl<'a, D: PaintDevice> ShapeInterpreter<'a, D> {
    /// Saves the current graphics state to the stack.
    ///
    /// Operator: `save`
    pub fn do_save(&mut self) {
        self.gstack.push(self.graphicstate.clone());
    }

    /// Restores the graphics state from the stack.
    ///
    /// An unbalanced restore leaves the current state untouched.
    ///
    /// Operator: `restore`
    pub fn do_restore(&mut self) {
        match self.gstack.pop() {
            Some(state) => self.graphicstate = state,
            None => tracing::trace!("restore with empty state stack ignored"),
        }
    }

    /// Concatenates a matrix to the current transformation matrix.
    ///
    /// Operator: `transform`
    pub fn do_transform(&mut self, matrix: Matrix) {
        self.graphicstate.ctm = mult_matrix(matrix, self.graphicstate.ctm);
    }

    /// Enters a form group: saves the state and applies the form matrix.
    ///
    /// Operator: `paintFormXObjectBegin`
    pub fn do_begin_group(&mut self, matrix: Option<Matrix>) {
        self.do_save();
        if let Some(matrix) = matrix {
            self.do_transform(matrix);
        }
    }

    /// Leaves a form group.
    ///
    /// Operator: `paintFormXObjectEnd`
    pub fn do_end_group(&mut self) {
        self.do_restore();
    }

    /// Sets the line width in the graphics state, in source units.
    ///
    /// Operator: `setLineWidth`
    pub fn do_set_line_width(&mut self, linewidth: f64) {
        self.graphicstate.linewidth = linewidth;
    }
}
