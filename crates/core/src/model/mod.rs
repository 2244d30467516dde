//! Data model - operator input, graphics state, colors and output shapes.
//!
//! - `ops` - Operator-list vocabulary (OpKind, Operand, OpEntry, RawTextItem)
//! - `state` - Graphics state carried by the interpreter
//! - `color` - Color normalization (Rgb, ColorKey)
//! - `shapes` - Canvas geometry (PathSegment, BBox, RawShape, CompoundShape, TextItem)

pub mod color;
pub mod ops;
pub mod shapes;
pub mod state;

// Re-export main types for convenience
pub use color::{ColorKey, Rgb};
pub use ops::{OpEntry, OpKind, Operand, RawTextItem};
pub use shapes::{BBox, CompoundShape, MIN_BBOX_MM, PathSegment, RawShape, TextItem};
pub use state::GraphicsState;
