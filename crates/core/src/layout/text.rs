//! Text salvage from the page's text-content listing.
//!
//! Outlined and subset fonts often surface as text items made of placeholder
//! codepoints (private-use glyph codes, replacement characters). Those runs
//! are already present as vector outlines, so only items that are mostly
//! genuine printable text are kept.

use crate::model::{RawTextItem, TextItem};
use crate::utils::{pt_to_mm, to_mm};

/// Millimetres per canvas font-size unit (one typographic point).
pub const MM_PER_FONT_UNIT: f64 = 0.3528;

/// Line height as a multiple of the font size.
pub const LINE_HEIGHT_FACTOR: f64 = 1.3;

/// Minimum width of a placed text box, in mm.
pub const MIN_TEXT_WIDTH_MM: f64 = 10.0;

/// Minimum height of a placed text box, in mm.
pub const MIN_TEXT_HEIGHT_MM: f64 = 3.0;

/// Minimum share of printable characters among readable ones.
pub const MIN_PRINTABLE_RATIO: f64 = 0.5;

/// Characters dropped before judging a run: C0 controls and U+FFFD.
fn is_unreadable(c: char) -> bool {
    matches!(c, '\u{0}'..='\u{1f}' | '\u{fffd}')
}

/// Allow-list of common printable scripts.
fn is_printable(c: char) -> bool {
    matches!(c,
        '\u{20}'..='\u{7e}'         // ASCII printable
        | '\u{a0}'..='\u{24f}'      // Latin-1 supplement, Latin extended A/B
        | '\u{400}'..='\u{4ff}'     // Cyrillic
        | '\u{4e00}'..='\u{9fff}'   // CJK unified ideographs
        | '\u{3000}'..='\u{30ff}'   // CJK punctuation, Hiragana, Katakana
        | '\u{ac00}'..='\u{d7af}'   // Hangul syllables
    )
}

/// Whether a text run is mostly genuine text.
///
/// Blank runs are rejected. Otherwise the run is kept when printable
/// characters make up at least half of its readable characters, both
/// measured in UTF-16 code units so an astral glyph weighs two.
pub fn is_genuine_text(text: &str) -> bool {
    if text.trim().is_empty() {
        return false;
    }
    let (readable, printable) = text
        .chars()
        .filter(|&c| !is_unreadable(c))
        .fold((0usize, 0usize), |(r, p), c| {
            let units = c.len_utf16();
            (r + units, if is_printable(c) { p + units } else { p })
        });
    printable as f64 >= readable as f64 * MIN_PRINTABLE_RATIO
}

/// Places one kept item on the canvas.
pub fn place_text(item: &RawTextItem, page_height_mm: f64) -> TextItem {
    let (a, _, _, _, e, f) = item.transform;
    let (x_mm, y_mm) = to_mm((e, f), page_height_mm);
    let font_size = pt_to_mm(a.abs()) / MM_PER_FONT_UNIT;
    TextItem {
        text: item.text.clone(),
        x_mm,
        y_mm,
        font_size: font_size.round().max(1.0),
        width_mm: pt_to_mm(item.width).max(MIN_TEXT_WIDTH_MM),
        height_mm: (font_size * MM_PER_FONT_UNIT * LINE_HEIGHT_FACTOR).max(MIN_TEXT_HEIGHT_MM),
    }
}

/// Filters and places the page's text items, preserving their order.
pub fn filter_text(items: &[RawTextItem], page_height_mm: f64) -> Vec<TextItem> {
    let kept: Vec<TextItem> = items
        .iter()
        .filter(|item| is_genuine_text(&item.text))
        .map(|item| place_text(item, page_height_mm))
        .collect();
    tracing::debug!(
        kept = kept.len(),
        dropped = items.len() - kept.len(),
        "filtered text items"
    );
    kept
}
