//! Operator implementations.
//!
//! Operators are grouped by category:
//! - `graphics_state` - State stack, transforms and form groups (save, restore, transform, paintFormXObjectBegin/End, setLineWidth)
//! - `color` - Gray, RGB and CMYK stroke/fill colors
//! - `path` - Path construction and painting (constructPath, moveTo, lineTo, curveTo*, rectangle, closePath, stroke, fill, fillStroke, endPath)

mod color;
mod graphics_state;
mod path;

// Note: each file defines an impl block for ShapeInterpreter,
// so no pub use is needed - the methods are automatically available on the type.
