//! Operator-list interpreter.
//!
//! Walks the operator list once, maintaining the graphics state stack and the
//! current path, and reports every painted path to a [`PaintDevice`].
//! Malformed input degrades gracefully: unknown operators and operators with
//! unusable operands are skipped, an unbalanced `restore` is ignored, and a
//! paint against an empty path emits nothing.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use super::device::PaintDevice;
use crate::error::{ImportError, Result};
use crate::model::{GraphicsState, OpEntry, OpKind, Operand, PathSegment};
use crate::utils::{Matrix, Point, apply_matrix_pt, matrix_from_slice, to_mm};

/// Shared flag that asks a running import to stop.
#[derive(Debug, Clone, Default)]
pub struct CancelFlag(Arc<AtomicBool>);

impl CancelFlag {
    pub fn new() -> Self {
        Self::default()
    }

    /// Requests cancellation. Visible to every clone of the flag.
    pub fn cancel(&self) {
        self.0.store(true, Ordering::Relaxed);
    }

    pub fn is_cancelled(&self) -> bool {
        self.0.load(Ordering::Relaxed)
    }
}

/// Shape interpreter - executes operator lists against a paint device.
///
/// One interpreter owns one graphics state stack; nothing is shared between
/// instances, so independent pages can be interpreted concurrently.
pub struct ShapeInterpreter<'a, D: PaintDevice> {
    /// Output device for paint operations
    pub(crate) device: &'a mut D,
    /// Graphics state stack for save/restore and form groups
    pub(crate) gstack: Vec<GraphicsState>,
    /// Current graphics state
    pub(crate) graphicstate: GraphicsState,
    /// Current path being constructed, in canvas millimetres
    pub(crate) curpath: Vec<PathSegment>,
    /// Current point in canvas millimetres (used by curveTo2)
    pub(crate) current_point: Option<Point>,
    /// Start of the current subpath (restored by closePath)
    pub(crate) subpath_start: Option<Point>,
    /// Page height used for the vertical flip
    pub(crate) page_height_mm: f64,
    cancel: Option<CancelFlag>,
}

impl<'a, D: PaintDevice> ShapeInterpreter<'a, D> {
    /// Create a new interpreter for a page of the given height.
    pub fn new(device: &'a mut D, page_height_mm: f64) -> Self {
        Self {
            device,
            gstack: Vec::new(),
            graphicstate: GraphicsState::new(),
            curpath: Vec::new(),
            current_point: None,
            subpath_start: None,
            page_height_mm,
            cancel: None,
        }
    }

    /// Checks `flag` once per operator and stops when it is raised.
    pub fn with_cancel(mut self, flag: Option<CancelFlag>) -> Self {
        self.cancel = flag;
        self
    }

    /// Get current transformation matrix.
    pub const fn ctm(&self) -> Matrix {
        self.graphicstate.ctm
    }

    /// Get current graphics state (read-only).
    pub const fn graphicstate(&self) -> &GraphicsState {
        &self.graphicstate
    }

    /// Get current path (read-only).
    pub fn current_path(&self) -> &[PathSegment] {
        &self.curpath
    }

    /// Number of saved states on the stack.
    pub fn stack_depth(&self) -> usize {
        self.gstack.len()
    }

    /// Maps a user-space point through the CTM into canvas millimetres.
    pub(crate) fn map_point(&self, x: f64, y: f64) -> Point {
        to_mm(
            apply_matrix_pt(self.graphicstate.ctm, (x, y)),
            self.page_height_mm,
        )
    }

    /// Execute an operator list.
    ///
    /// Only cancellation produces an error; everything else in the stream
    /// is either applied or skipped.
    pub fn execute(&mut self, ops: &[OpEntry]) -> Result<()> {
        for op in ops {
            if self.cancel.as_ref().is_some_and(CancelFlag::is_cancelled) {
                return Err(ImportError::Cancelled);
            }
            self.dispatch_operator(&op.kind, &op.args);
        }
        Ok(())
    }

    fn dispatch_operator(&mut self, op: &OpKind, args: &[Operand]) {
        match op {
            // Graphics state operators
            OpKind::Save => self.do_save(),
            OpKind::Restore => self.do_restore(),
            OpKind::Transform => match Self::numbers(args).as_deref().and_then(matrix_from_slice) {
                Some(matrix) => self.do_transform(matrix),
                None => Self::malformed(op),
            },
            OpKind::PaintFormXObjectBegin => {
                let matrix = args
                    .first()
                    .and_then(Operand::as_numbers)
                    .as_deref()
                    .and_then(matrix_from_slice);
                self.do_begin_group(matrix);
            }
            OpKind::PaintFormXObjectEnd => self.do_end_group(),
            OpKind::SetLineWidth => match Self::fixed(args) {
                Some([w]) => self.do_set_line_width(w),
                None => Self::malformed(op),
            },

            // Color operators
            OpKind::SetStrokeRgbColor => match Self::fixed(args) {
                Some([r, g, b]) => self.do_set_stroke_rgb(r, g, b),
                None => Self::malformed(op),
            },
            OpKind::SetFillRgbColor => match Self::fixed(args) {
                Some([r, g, b]) => self.do_set_fill_rgb(r, g, b),
                None => Self::malformed(op),
            },
            OpKind::SetStrokeGray => match Self::fixed(args) {
                Some([g]) => self.do_set_stroke_gray(g),
                None => Self::malformed(op),
            },
            OpKind::SetFillGray => match Self::fixed(args) {
                Some([g]) => self.do_set_fill_gray(g),
                None => Self::malformed(op),
            },
            OpKind::SetStrokeCmykColor => match Self::fixed(args) {
                Some([c, m, y, k]) => self.do_set_stroke_cmyk(c, m, y, k),
                None => Self::malformed(op),
            },
            OpKind::SetFillCmykColor => match Self::fixed(args) {
                Some([c, m, y, k]) => self.do_set_fill_cmyk(c, m, y, k),
                None => Self::malformed(op),
            },

            // Path construction operators
            OpKind::ConstructPath => self.do_construct_path(args),
            OpKind::MoveTo => match Self::fixed(args) {
                Some([x, y]) => self.do_move_to(x, y),
                None => Self::malformed(op),
            },
            OpKind::LineTo => match Self::fixed(args) {
                Some([x, y]) => self.do_line_to(x, y),
                None => Self::malformed(op),
            },
            OpKind::CurveTo => match Self::fixed(args) {
                Some([x1, y1, x2, y2, x3, y3]) => self.do_curve_to(x1, y1, x2, y2, x3, y3),
                None => Self::malformed(op),
            },
            OpKind::CurveTo2 => match Self::fixed(args) {
                Some([x2, y2, x3, y3]) => self.do_curve_to2(x2, y2, x3, y3),
                None => Self::malformed(op),
            },
            OpKind::CurveTo3 => match Self::fixed(args) {
                Some([x1, y1, x3, y3]) => self.do_curve_to3(x1, y1, x3, y3),
                None => Self::malformed(op),
            },
            OpKind::Rectangle => match Self::fixed(args) {
                Some([x, y, w, h]) => self.do_rectangle(x, y, w, h),
                None => Self::malformed(op),
            },
            OpKind::ClosePath => self.do_close_path(),

            // Path painting operators
            OpKind::Stroke => self.do_stroke(),
            OpKind::CloseStroke => self.do_close_stroke(),
            OpKind::Fill | OpKind::EoFill => self.do_fill(*op == OpKind::EoFill),
            OpKind::FillStroke | OpKind::EoFillStroke => {
                self.do_fill_stroke(*op == OpKind::EoFillStroke)
            }
            OpKind::CloseFillStroke | OpKind::CloseEoFillStroke => {
                self.do_close_fill_stroke(*op == OpKind::CloseEoFillStroke)
            }
            OpKind::EndPath => self.do_end_path(),

            // Clipping only affects later painting; not modelled.
            OpKind::Clip | OpKind::EoClip => {}

            OpKind::Other(name) => tracing::trace!("skipping unsupported operator {name}"),
        }
    }

    fn malformed(op: &OpKind) {
        tracing::trace!("skipping {op}: missing or non-numeric operands");
    }

    // Helper functions to read values from the operand array

    /// All operands as numbers, if every one of them is a number.
    fn numbers(args: &[Operand]) -> Option<Vec<f64>> {
        args.iter().map(Operand::as_number).collect()
    }

    /// The first `N` operands as numbers; extra operands are ignored.
    pub(crate) fn fixed<const N: usize>(args: &[Operand]) -> Option<[f64; N]> {
        let mut out = [0.0; N];
        for (slot, arg) in out.iter_mut().zip(args.get(..N)?) {
            *slot = arg.as_number()?;
        }
        Some(out)
    }
}
