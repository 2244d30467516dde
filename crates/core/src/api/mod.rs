//! High-level API module for page import.
//!
//! # Example
//!
//! ```ignore
//! use inkport_core::api::{ImportOptions, import_file};
//!
//! let result = import_file("page.json", &ImportOptions::default())?;
//! eprintln!("{}", result.summary());
//! ```

pub mod builder;
pub mod high_level;
pub mod source;

pub use builder::ImportBuilder;
pub use high_level::{
    ImportOptions, ImportResult, import_file, import_page, import_source, import_sources,
};
pub use source::{PageDocument, PageGeometry, PageSource};
