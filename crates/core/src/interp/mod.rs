//! Operator-list interpretation and device output.
//!
//! This module contains:
//! - `interpreter`: operator dispatch and the graphics state machine
//! - `device`: Paint device trait and the shape-collecting implementation
//! - `ops`: Operator implementations by category

pub mod device;
pub mod interpreter;
pub mod ops;

// Re-export main types for convenience
pub use device::{PaintDevice, ShapeCollector};
pub use interpreter::{CancelFlag, ShapeInterpreter};
