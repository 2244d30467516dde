//! High-level import API.
//!
//! Provides the main public API for importing a page of vector artwork:
//! - `import_page()` - Run the pipeline over an operator list and text items
//! - `import_source()` - Fetch a page from a [`PageSource`] and import it
//! - `import_sources()` - Import several independent pages in parallel
//! - `import_file()` - Import a JSON page dump from disk

use std::path::Path;

use rayon::prelude::*;
use serde::{Deserialize, Serialize};

use super::source::{PageDocument, PageGeometry, PageSource};
use crate::error::Result;
use crate::interp::{CancelFlag, ShapeCollector, ShapeInterpreter};
use crate::layout::{GroupParams, filter_text, group_shapes, ungrouped};
use crate::model::{CompoundShape, OpEntry, RawTextItem, TextItem};

/// Options for page import.
#[derive(Debug, Clone)]
pub struct ImportOptions {
    /// Proximity grouping parameters. None keeps every painted path as its
    /// own shape.
    pub grouping: Option<GroupParams>,

    /// Whether to salvage text items from the text-content listing.
    pub extract_text: bool,

    /// Checked once per operator; raising it aborts the import.
    pub cancel: Option<CancelFlag>,
}

impl Default for ImportOptions {
    fn default() -> Self {
        Self {
            grouping: Some(GroupParams::default()),
            extract_text: true,
            cancel: None,
        }
    }
}

/// Everything imported from one page.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ImportResult {
    pub page: PageGeometry,
    pub shapes: Vec<CompoundShape>,
    pub texts: Vec<TextItem>,
}

impl ImportResult {
    pub fn path_count(&self) -> usize {
        self.shapes.len()
    }

    pub fn text_count(&self) -> usize {
        self.texts.len()
    }

    /// One-line summary for the user, e.g. `Imported 12 paths, 3 text`.
    pub fn summary(&self) -> String {
        match self.text_count() {
            0 => format!("Imported {} paths", self.path_count()),
            n => format!("Imported {} paths, {} text", self.path_count(), n),
        }
    }
}

/// Import one page from its operator list and text items.
///
/// Malformed operators are skipped rather than reported; the only error is
/// [`ImportError::Cancelled`](crate::error::ImportError::Cancelled).
///
/// # Example
/// ```ignore
/// use inkport_core::high_level::{ImportOptions, import_page};
///
/// let result = import_page(&ops, &texts, geometry, &ImportOptions::default())?;
/// println!("{}", result.summary());
/// ```
pub fn import_page(
    ops: &[OpEntry],
    texts: &[RawTextItem],
    page: PageGeometry,
    options: &ImportOptions,
) -> Result<ImportResult> {
    let mut device = ShapeCollector::new();
    ShapeInterpreter::new(&mut device, page.height_mm)
        .with_cancel(options.cancel.clone())
        .execute(ops)?;
    let raw = device.into_shapes();
    let raw_count = raw.len();

    let shapes = match &options.grouping {
        Some(params) => group_shapes(&raw, params),
        None => ungrouped(raw),
    };
    let texts = if options.extract_text {
        filter_text(texts, page.height_mm)
    } else {
        Vec::new()
    };

    tracing::debug!(
        operators = ops.len(),
        raw_shapes = raw_count,
        shapes = shapes.len(),
        texts = texts.len(),
        "imported page"
    );
    Ok(ImportResult {
        page,
        shapes,
        texts,
    })
}

/// Fetch a page from `source` and import it.
///
/// The operator list and the text content are fetched concurrently; the
/// pipeline starts once both are available. Any fetch failure aborts the
/// import with no partial result.
pub fn import_source<S>(source: &S, options: &ImportOptions) -> Result<ImportResult>
where
    S: PageSource + Sync + ?Sized,
{
    let page = source.geometry()?;
    let (ops, texts) = rayon::join(|| source.operator_list(), || source.text_content());
    import_page(&ops?, &texts?, page, options)
}

/// Import independent pages in parallel, one result per source, in order.
pub fn import_sources<S>(sources: &[S], options: &ImportOptions) -> Vec<Result<ImportResult>>
where
    S: PageSource + Sync,
{
    sources
        .par_iter()
        .map(|source| import_source(source, options))
        .collect()
}

/// Import a JSON page dump (see [`PageDocument`]) from disk.
pub fn import_file(path: impl AsRef<Path>, options: &ImportOptions) -> Result<ImportResult> {
    let data = std::fs::read(path.as_ref())?;
    let doc = PageDocument::from_slice(&data)?;
    import_source(&doc, options)
}
