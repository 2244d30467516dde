//! Tests for the high-level import API.
//!
//! Covers page sources, parser-failure propagation, the JSON page dump,
//! the builder and the serialized form of the result.

use std::sync::atomic::{AtomicUsize, Ordering};

use inkport_core::api::{ImportBuilder, PageDocument, PageSource};
use inkport_core::high_level::{ImportOptions, import_file, import_source, import_sources};
use inkport_core::model::{
    BBox, CompoundShape, OpEntry, OpKind, PathSegment, RawTextItem, Rgb, TextItem,
};
use inkport_core::{CancelFlag, ImportError, ImportResult, PageGeometry, Result};
use serde_json::json;

fn red_square_page() -> PageDocument {
    PageDocument::new(
        283.46456692913387,
        283.46456692913387,
        vec![
            OpEntry::numbers(OpKind::SetFillRgbColor, &[1.0, 0.0, 0.0]),
            OpEntry::construct_path(vec![OpKind::Rectangle], vec![0.0, 0.0, 72.0, 72.0]),
            OpEntry::bare(OpKind::Fill),
        ],
        vec![RawTextItem::new("Caption", (12.0, 0.0, 0.0, 12.0, 0.0, 100.0), 40.0)],
    )
}

/// A source whose fetches can fail independently.
struct FlakySource {
    fail_operators: bool,
    fail_text: bool,
    fetches: AtomicUsize,
}

impl FlakySource {
    fn new(fail_operators: bool, fail_text: bool) -> Self {
        Self {
            fail_operators,
            fail_text,
            fetches: AtomicUsize::new(0),
        }
    }
}

impl PageSource for FlakySource {
    fn geometry(&self) -> Result<PageGeometry> {
        PageGeometry::new(100.0, 100.0)
    }

    fn operator_list(&self) -> Result<Vec<OpEntry>> {
        self.fetches.fetch_add(1, Ordering::SeqCst);
        if self.fail_operators {
            return Err(ImportError::OperatorList("stream is corrupt".into()));
        }
        Ok(red_square_page().operators.unwrap_or_default())
    }

    fn text_content(&self) -> Result<Vec<RawTextItem>> {
        self.fetches.fetch_add(1, Ordering::SeqCst);
        if self.fail_text {
            return Err(ImportError::TextContent("no text layer".into()));
        }
        Ok(red_square_page().text_items.unwrap_or_default())
    }
}

struct MissingPage;

impl PageSource for MissingPage {
    fn geometry(&self) -> Result<PageGeometry> {
        Err(ImportError::Page("page 1 not found".into()))
    }

    fn operator_list(&self) -> Result<Vec<OpEntry>> {
        unreachable!("operators requested for a missing page")
    }

    fn text_content(&self) -> Result<Vec<RawTextItem>> {
        unreachable!("text requested for a missing page")
    }
}

// ============================================================================
// Sources
// ============================================================================

#[test]
fn test_import_document() {
    let result = import_source(&red_square_page(), &ImportOptions::default()).unwrap();
    assert_eq!(result.path_count(), 1);
    assert_eq!(result.text_count(), 1);
    assert!((result.page.height_mm - 100.0).abs() < 1e-9);
    insta::assert_snapshot!(result.summary(), @"Imported 1 paths, 1 text");
}

#[test]
fn test_both_listings_are_fetched() {
    let source = FlakySource::new(false, false);
    let result = import_source(&source, &ImportOptions::default()).unwrap();
    assert_eq!(source.fetches.load(Ordering::SeqCst), 2);
    assert_eq!(result.path_count(), 1);
}

#[test]
fn test_operator_failure_aborts_import() {
    let err = import_source(&FlakySource::new(true, false), &ImportOptions::default()).unwrap_err();
    assert!(matches!(err, ImportError::OperatorList(_)));
    assert!(err.is_parser_failure());
}

#[test]
fn test_text_failure_aborts_import() {
    let err = import_source(&FlakySource::new(false, true), &ImportOptions::default()).unwrap_err();
    assert!(matches!(err, ImportError::TextContent(_)));
}

#[test]
fn test_missing_page_aborts_before_fetching() {
    let err = import_source(&MissingPage, &ImportOptions::default()).unwrap_err();
    assert!(matches!(err, ImportError::Page(_)));
}

#[test]
fn test_invalid_geometry_is_parser_failure() {
    let doc = PageDocument::new(0.0, 841.0, Vec::new(), Vec::new());
    let err = import_source(&doc, &ImportOptions::default()).unwrap_err();
    assert!(matches!(err, ImportError::InvalidGeometry { .. }));
    assert!(err.is_parser_failure());
}

#[test]
fn test_cancel_is_not_parser_failure() {
    let flag = CancelFlag::new();
    flag.cancel();
    let err = ImportBuilder::new()
        .cancel_flag(flag)
        .import_source(&red_square_page())
        .unwrap_err();
    assert!(matches!(err, ImportError::Cancelled));
    assert!(!err.is_parser_failure());
}

#[test]
fn test_import_sources_keeps_order() {
    let sources = vec![
        FlakySource::new(false, false),
        FlakySource::new(true, false),
        FlakySource::new(false, false),
    ];
    let results = import_sources(&sources, &ImportOptions::default());
    assert_eq!(results.len(), 3);
    assert!(results[0].is_ok());
    assert!(results[1].is_err());
    assert!(results[2].is_ok());
}

#[test]
fn test_blank_page_summary() {
    let doc = PageDocument::new(595.0, 842.0, Vec::new(), Vec::new());
    let result = import_source(&doc, &ImportOptions::default()).unwrap();
    insta::assert_snapshot!(result.summary(), @"Imported 0 paths");
}

// ============================================================================
// JSON page dumps
// ============================================================================

#[test]
fn test_page_dump_wire_form() {
    let dump = br#"{
        "width": 283.46456692913387,
        "height": 283.46456692913387,
        "operators": [
            {"fn": "setFillRGBColor", "args": [255, 0, 0]},
            {"fn": "constructPath", "args": [["moveTo", "lineTo", "lineTo", "closePath"],
                                             [0, 0, 72, 0, 72, 72]]},
            {"fn": "fill"},
            {"fn": "beginMarkedContent", "args": ["Artifact"]},
            {"fn": "restore"}
        ],
        "textItems": [{"str": "Hi", "transform": [12, 0, 0, 12, 72, 72], "width": 14}]
    }"#;
    let doc = PageDocument::from_slice(dump).unwrap();
    let result = import_source(&doc, &ImportOptions::default()).unwrap();

    assert_eq!(result.path_count(), 1);
    assert_eq!(result.shapes[0].fill, Some(Rgb(1.0, 0.0, 0.0)));
    assert_eq!(result.shapes[0].segments.len(), 4);
    assert_eq!(result.texts[0].text, "Hi");
}

#[test]
fn test_import_file() {
    let path = std::env::temp_dir().join(format!("inkport-page-{}.json", std::process::id()));
    std::fs::write(&path, serde_json::to_vec(&red_square_page()).unwrap()).unwrap();

    let result = import_file(&path, &ImportOptions::default());
    let built = ImportBuilder::new().without_text().import_file(&path);
    std::fs::remove_file(&path).unwrap();

    assert_eq!(result.unwrap().path_count(), 1);
    assert_eq!(built.unwrap().text_count(), 0);
}

#[test]
fn test_import_missing_file() {
    let err = import_file("/nonexistent/inkport/page.json", &ImportOptions::default()).unwrap_err();
    assert!(matches!(err, ImportError::Io(_)));
    assert!(err.is_parser_failure());
}

// ============================================================================
// Serialized result
// ============================================================================

fn sample_shape() -> CompoundShape {
    CompoundShape {
        segments: vec![
            PathSegment::MoveTo(1.0, 2.0),
            PathSegment::CurveTo(1.0, 3.0, 2.0, 4.0, 3.0, 4.0),
            PathSegment::ClosePath,
        ],
        fill: Some(Rgb(1.0, 0.0, 0.0)),
        stroke: None,
        stroke_width_mm: 0.5,
        bbox: BBox::new(1.0, 2.0, 2.0, 2.0),
    }
}

#[test]
fn test_shape_wire_form() {
    let value = serde_json::to_value(sample_shape()).unwrap();
    assert_eq!(
        value,
        json!({
            "segments": [
                {"o": "M", "a": [1.0, 2.0]},
                {"o": "C", "a": [1.0, 3.0, 2.0, 4.0, 3.0, 4.0]},
                {"o": "Z", "a": []}
            ],
            "fill": [1.0, 0.0, 0.0],
            "stroke": null,
            "strokeWidthMm": 0.5,
            "bbox": {"x": 1.0, "y": 2.0, "w": 2.0, "h": 2.0}
        })
    );
}

#[test]
fn test_result_round_trips() {
    let result = ImportResult {
        page: PageGeometry::new(210.0, 297.0).unwrap(),
        shapes: vec![sample_shape()],
        texts: vec![TextItem {
            text: "Caption".into(),
            x_mm: 12.5,
            y_mm: 40.0,
            font_size: 12.0,
            width_mm: 30.0,
            height_mm: 5.5,
        }],
    };
    let json = serde_json::to_string(&result).unwrap();
    let back: ImportResult = serde_json::from_str(&json).unwrap();
    assert_eq!(back, result);
}
