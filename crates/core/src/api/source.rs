//! Page sources - the seam to the external document parser.
//!
//! A [`PageSource`] supplies one page's geometry, operator list and
//! text-content listing. Any failure to supply them is a parser failure and
//! aborts the import. [`PageDocument`] is a source backed by a JSON dump of
//! the parser's output.

use serde::{Deserialize, Serialize};

use crate::error::{ImportError, Result};
use crate::model::{OpEntry, RawTextItem};
use crate::utils::pt_to_mm;

/// Page size in canvas millimetres.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageGeometry {
    pub width_mm: f64,
    pub height_mm: f64,
}

impl PageGeometry {
    /// Validates a page size already in millimetres.
    pub fn new(width_mm: f64, height_mm: f64) -> Result<Self> {
        let usable = |v: f64| v.is_finite() && v > 0.0;
        if usable(width_mm) && usable(height_mm) {
            Ok(Self {
                width_mm,
                height_mm,
            })
        } else {
            Err(ImportError::InvalidGeometry {
                width: width_mm,
                height: height_mm,
            })
        }
    }

    /// Converts a viewport measured in points.
    pub fn from_points(width_pt: f64, height_pt: f64) -> Result<Self> {
        Self::new(pt_to_mm(width_pt), pt_to_mm(height_pt))
    }
}

/// One page as supplied by the external document parser.
pub trait PageSource {
    /// Page size; fails if the parser could not produce the page.
    fn geometry(&self) -> Result<PageGeometry>;

    /// The page's operator list, in stream order.
    fn operator_list(&self) -> Result<Vec<OpEntry>>;

    /// The page's text-content listing.
    fn text_content(&self) -> Result<Vec<RawTextItem>>;
}

/// A page dumped by the external parser as JSON.
///
/// ```json
/// { "width": 595.28, "height": 841.89,
///   "operators": [{"fn": "save"}, ...],
///   "textItems": [{"str": "Hi", "transform": [12,0,0,12,72,720], "width": 14}] }
/// ```
///
/// `width`/`height` are the page viewport in points. A missing operator or
/// text listing is reported as a parser failure when requested.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageDocument {
    pub width: f64,
    pub height: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub operators: Option<Vec<OpEntry>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text_items: Option<Vec<RawTextItem>>,
}

impl PageDocument {
    pub fn new(
        width: f64,
        height: f64,
        operators: Vec<OpEntry>,
        text_items: Vec<RawTextItem>,
    ) -> Self {
        Self {
            width,
            height,
            operators: Some(operators),
            text_items: Some(text_items),
        }
    }

    /// Parses a JSON page dump.
    pub fn from_slice(data: &[u8]) -> Result<Self> {
        Ok(serde_json::from_slice(data)?)
    }
}

impl PageSource for PageDocument {
    fn geometry(&self) -> Result<PageGeometry> {
        PageGeometry::from_points(self.width, self.height)
    }

    fn operator_list(&self) -> Result<Vec<OpEntry>> {
        self.operators
            .clone()
            .ok_or_else(|| ImportError::OperatorList("page has no operator list".into()))
    }

    fn text_content(&self) -> Result<Vec<RawTextItem>> {
        self.text_items
            .clone()
            .ok_or_else(|| ImportError::TextContent("page has no text content".into()))
    }
}
