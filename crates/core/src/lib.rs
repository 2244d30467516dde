//! inkport - Import a page's vector artwork as editable shapes.
//!
//! Interprets a parsed page's drawing-operator list, merges nearby
//! same-styled paths into compound shapes, and salvages genuine text items,
//! all in the canvas's millimetre coordinate system.

pub mod api;
pub mod error;
pub mod interp;
pub mod layout;
pub mod model;
pub mod utils;

// Re-export high_level at the crate root
pub use api::high_level;

pub use api::{
    ImportBuilder, ImportOptions, ImportResult, PageDocument, PageGeometry, PageSource,
    import_file, import_page, import_source, import_sources,
};
pub use error::{ImportError, Result};
pub use interp::CancelFlag;
pub use layout::GroupParams;
