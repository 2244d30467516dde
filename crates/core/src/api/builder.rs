//! Builder pattern for page import.
//!
//! Provides a fluent API for configuring and running an import.
//!
//! # Example
//! ```ignore
//! use inkport_core::api::ImportBuilder;
//!
//! let result = ImportBuilder::new()
//!     .gap(2.0)
//!     .without_text()
//!     .import_file("page.json")?;
//! ```

use std::path::Path;

use crate::error::Result;
use crate::interp::CancelFlag;
use crate::layout::GroupParams;

use super::high_level::{ImportOptions, ImportResult, import_file, import_source};
use super::source::PageSource;

/// A builder for configuring page import.
///
/// This wraps the underlying `ImportOptions` and import functions.
#[derive(Debug, Clone, Default)]
pub struct ImportBuilder {
    options: ImportOptions,
}

impl ImportBuilder {
    /// Creates a builder with default options: grouping at 1.5 mm, text on.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the proximity gap in millimetres and enables grouping.
    ///
    /// # Arguments
    /// * `mm` - Maximum separation between merged bounding boxes.
    ///
    /// # Panics
    /// Panics if `mm` is negative or not finite.
    ///
    /// # Example
    /// ```ignore
    /// let builder = ImportBuilder::new().gap(0.8);
    /// ```
    pub fn gap(mut self, mm: f64) -> Self {
        self.options.grouping = Some(GroupParams::new(mm));
        self
    }

    /// Keeps every painted path as its own shape.
    pub fn no_grouping(mut self) -> Self {
        self.options.grouping = None;
        self
    }

    /// Skips the text-content listing.
    pub fn without_text(mut self) -> Self {
        self.options.extract_text = false;
        self
    }

    /// Sets a flag that aborts the import when raised.
    ///
    /// # Example
    /// ```ignore
    /// let flag = CancelFlag::new();
    /// let builder = ImportBuilder::new().cancel_flag(flag.clone());
    /// // elsewhere: flag.cancel();
    /// ```
    pub fn cancel_flag(mut self, flag: CancelFlag) -> Self {
        self.options.cancel = Some(flag);
        self
    }

    /// The options this builder has accumulated.
    pub fn options(&self) -> &ImportOptions {
        &self.options
    }

    /// Imports a page from `source`.
    ///
    /// # Errors
    /// Returns an error if the source cannot supply the page or the import
    /// is cancelled.
    pub fn import_source<S>(&self, source: &S) -> Result<ImportResult>
    where
        S: PageSource + Sync + ?Sized,
    {
        import_source(source, &self.options)
    }

    /// Imports a JSON page dump from disk.
    ///
    /// # Errors
    /// Returns an error if the file cannot be read or parsed.
    ///
    /// # Example
    /// ```ignore
    /// let result = ImportBuilder::new().import_file("page.json")?;
    /// eprintln!("{}", result.summary());
    /// ```
    pub fn import_file(&self, path: impl AsRef<Path>) -> Result<ImportResult> {
        import_file(path, &self.options)
    }
}

impl From<ImportOptions> for ImportBuilder {
    fn from(options: ImportOptions) -> Self {
        Self { options }
    }
}
