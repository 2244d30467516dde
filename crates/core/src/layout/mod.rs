//! Layout of imported content on the canvas.
//!
//! This module contains:
//! - Grouping parameters (GroupParams)
//! - Proximity grouping of raw shapes (union-find clustering)
//! - Text salvage from the text-content listing

pub mod grouping;
pub mod params;
pub mod text;

// Re-export params
pub use params::*;

pub use grouping::{UnionFind, group_shapes, ungrouped};
pub use text::{filter_text, is_genuine_text, place_text};
