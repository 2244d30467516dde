//! Tests for text salvage.
//!
//! Text items made mostly of placeholder glyph codes are dropped; genuine
//! text is placed on the canvas in millimetres.

use inkport_core::high_level::{ImportOptions, import_page};
use inkport_core::layout::{filter_text, is_genuine_text};
use inkport_core::model::RawTextItem;
use inkport_core::utils::approx_eq;
use inkport_core::PageGeometry;

/// Private-use codepoint, as emitted for glyphs of subset fonts.
const GLYPH: char = '\u{e000}';

fn mixed(printable: usize, placeholders: usize) -> String {
    let mut s: String = std::iter::repeat_n('a', printable).collect();
    s.extend(std::iter::repeat_n(GLYPH, placeholders));
    s
}

fn item(text: &str, x_pt: f64, y_pt: f64) -> RawTextItem {
    RawTextItem::new(text, (10.0, 0.0, 0.0, 10.0, x_pt, y_pt), 50.0)
}

#[test]
fn test_half_printable_is_kept() {
    assert!(is_genuine_text(&mixed(50, 50)));
}

#[test]
fn test_just_under_half_is_dropped() {
    assert!(!is_genuine_text(&mixed(49, 51)));
}

#[test]
fn test_five_of_nine_kept_two_of_nine_dropped() {
    assert!(is_genuine_text(&mixed(5, 4)));
    assert!(!is_genuine_text(&mixed(2, 7)));
}

#[test]
fn test_astral_placeholder_counts_twice() {
    // U+F0000 is a supplementary private-use glyph: two UTF-16 units.
    assert!(!is_genuine_text("a\u{F0000}"));
    assert!(is_genuine_text("ab\u{F0000}"));
}

#[test]
fn test_replacement_and_controls_are_not_counted() {
    // Readable part is "ab" plus one placeholder.
    let s = format!("ab{GLYPH}\u{fffd}\u{fffd}\u{7}\u{7}");
    assert!(is_genuine_text(&s));
}

#[test]
fn test_whitespace_only_dropped() {
    let items = vec![item("   ", 0.0, 0.0), item("", 0.0, 0.0), item("\n\t", 0.0, 0.0)];
    assert!(filter_text(&items, 100.0).is_empty());
}

#[test]
fn test_filter_keeps_order_and_places_items() {
    let items = vec![
        item("Title", 72.0, 720.0),
        item(&mixed(1, 8), 0.0, 0.0),
        item("Body", 72.0, 360.0),
    ];
    let page_h = 297.0;
    let texts = filter_text(&items, page_h);

    assert_eq!(texts.len(), 2);
    assert_eq!(texts[0].text, "Title");
    assert_eq!(texts[1].text, "Body");

    assert!(approx_eq(texts[0].x_mm, 25.4, 1e-9));
    assert!(approx_eq(texts[0].y_mm, page_h - 254.0, 1e-9));
    assert!(approx_eq(texts[1].y_mm, page_h - 127.0, 1e-9));
    assert_eq!(texts[0].font_size, 10.0);
    assert!(approx_eq(texts[0].width_mm, 50.0 * 25.4 / 72.0, 1e-9));
}

#[test]
fn test_negative_scale_uses_magnitude() {
    let raw = RawTextItem::new("Mirrored", (-24.0, 0.0, 0.0, 24.0, 0.0, 0.0), 0.0);
    let texts = filter_text(&[raw], 100.0);
    assert_eq!(texts[0].font_size, 24.0);
    assert_eq!(texts[0].width_mm, 10.0);
}

#[test]
fn test_text_disabled_skips_filter() {
    let page = PageGeometry::new(210.0, 297.0).unwrap();
    let items = vec![item("Hello", 10.0, 10.0)];

    let with = import_page(&[], &items, page, &ImportOptions::default()).unwrap();
    assert_eq!(with.text_count(), 1);

    let options = ImportOptions {
        extract_text: false,
        ..ImportOptions::default()
    };
    let without = import_page(&[], &items, page, &options).unwrap();
    assert_eq!(without.text_count(), 0);
}
