//! Output geometry: path segments, bounding boxes and painted shapes.
//!
//! All coordinates here are canvas millimetres, top-left origin.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use super::color::Rgb;
use crate::utils::Point;

/// Smallest width or height a shape's bounding box may have, in mm.
pub const MIN_BBOX_MM: f64 = 0.5;

/// Path segment for graphics operations.
///
/// Serializes as `{"o": "M", "a": [x, y]}`: `L` likewise, `C` with six
/// numbers and `Z` with an empty list. A close without `a` is also read.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "WireSegment", into = "WireSegment")]
pub enum PathSegment {
    /// Move to point (x, y)
    MoveTo(f64, f64),
    /// Line to point (x, y)
    LineTo(f64, f64),
    /// Cubic bezier curve (x1, y1, x2, y2, x3, y3)
    CurveTo(f64, f64, f64, f64, f64, f64),
    /// Close path
    ClosePath,
}

/// Segment as written to JSON: an op letter and its flat coordinates.
#[derive(Serialize, Deserialize)]
struct WireSegment {
    o: String,
    #[serde(default)]
    a: Vec<f64>,
}

impl From<PathSegment> for WireSegment {
    fn from(segment: PathSegment) -> Self {
        let (o, a) = match segment {
            PathSegment::MoveTo(x, y) => ("M", vec![x, y]),
            PathSegment::LineTo(x, y) => ("L", vec![x, y]),
            PathSegment::CurveTo(x1, y1, x2, y2, x3, y3) => ("C", vec![x1, y1, x2, y2, x3, y3]),
            PathSegment::ClosePath => ("Z", Vec::new()),
        };
        Self { o: o.to_owned(), a }
    }
}

impl TryFrom<WireSegment> for PathSegment {
    type Error = String;

    fn try_from(wire: WireSegment) -> Result<Self, Self::Error> {
        match (wire.o.as_str(), wire.a.as_slice()) {
            ("M", &[x, y]) => Ok(PathSegment::MoveTo(x, y)),
            ("L", &[x, y]) => Ok(PathSegment::LineTo(x, y)),
            ("C", &[x1, y1, x2, y2, x3, y3]) => Ok(PathSegment::CurveTo(x1, y1, x2, y2, x3, y3)),
            ("Z", []) => Ok(PathSegment::ClosePath),
            ("M" | "L" | "C" | "Z", a) => Err(format!(
                "segment {:?} takes the wrong number of coordinates ({})",
                wire.o,
                a.len()
            )),
            (o, _) => Err(format!("unknown segment op {o:?}")),
        }
    }
}

impl PathSegment {
    /// Every point the segment references, control points included.
    pub fn points(&self) -> SmallVec<[Point; 3]> {
        match *self {
            PathSegment::MoveTo(x, y) | PathSegment::LineTo(x, y) => smallvec::smallvec![(x, y)],
            PathSegment::CurveTo(x1, y1, x2, y2, x3, y3) => {
                smallvec::smallvec![(x1, y1), (x2, y2), (x3, y3)]
            }
            PathSegment::ClosePath => SmallVec::new(),
        }
    }
}

/// Axis-aligned bounding box with its origin at the top-left corner.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BBox {
    pub x: f64,
    pub y: f64,
    pub w: f64,
    pub h: f64,
}

impl BBox {
    pub const fn new(x: f64, y: f64, w: f64, h: f64) -> Self {
        Self { x, y, w, h }
    }

    /// Tight box around every point of `segments`, widened to
    /// [`MIN_BBOX_MM`] on any degenerate axis. Returns `None` when the
    /// segments reference no point at all.
    pub fn from_segments(segments: &[PathSegment]) -> Option<Self> {
        let mut min_x = f64::INFINITY;
        let mut min_y = f64::INFINITY;
        let mut max_x = f64::NEG_INFINITY;
        let mut max_y = f64::NEG_INFINITY;
        for (x, y) in segments.iter().flat_map(PathSegment::points) {
            min_x = min_x.min(x);
            min_y = min_y.min(y);
            max_x = max_x.max(x);
            max_y = max_y.max(y);
        }
        if min_x > max_x || min_y > max_y {
            return None;
        }
        Some(Self::new(min_x, min_y, max_x - min_x, max_y - min_y).widened())
    }

    /// Widens any dimension below [`MIN_BBOX_MM`], keeping the origin.
    pub fn widened(self) -> Self {
        Self {
            w: self.w.max(MIN_BBOX_MM),
            h: self.h.max(MIN_BBOX_MM),
            ..self
        }
    }

    #[inline]
    pub fn x1(&self) -> f64 {
        self.x + self.w
    }

    #[inline]
    pub fn y1(&self) -> f64 {
        self.y + self.h
    }

    /// Smallest box containing both.
    pub fn union(&self, other: &BBox) -> BBox {
        let x = self.x.min(other.x);
        let y = self.y.min(other.y);
        BBox::new(x, y, self.x1().max(other.x1()) - x, self.y1().max(other.y1()) - y)
    }

    /// Whether `self`, expanded outward by `gap` on all four sides, touches
    /// or overlaps `other`. Boxes exactly `gap` apart are near.
    pub fn is_near(&self, other: &BBox, gap: f64) -> bool {
        self.x - gap <= other.x1()
            && self.x1() + gap >= other.x
            && self.y - gap <= other.y1()
            && self.y1() + gap >= other.y
    }

    /// Whether `p` lies inside the box, allowing `epsilon` of slack.
    pub fn contains_point(&self, p: Point, epsilon: f64) -> bool {
        let (px, py) = p;
        px >= self.x - epsilon
            && px <= self.x1() + epsilon
            && py >= self.y - epsilon
            && py <= self.y1() + epsilon
    }

    /// Whether `other` lies entirely inside the box, allowing `epsilon`.
    pub fn contains(&self, other: &BBox, epsilon: f64) -> bool {
        self.contains_point((other.x, other.y), epsilon)
            && self.contains_point((other.x1(), other.y1()), epsilon)
    }
}

/// One painted path as emitted by the interpreter, before grouping.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawShape {
    pub segments: Vec<PathSegment>,
    pub fill: Option<Rgb>,
    pub stroke: Option<Rgb>,
    pub stroke_width_mm: f64,
    pub bbox: BBox,
}

/// A logical shape: one or more raw shapes sharing style and proximity.
///
/// Same layout as [`RawShape`]; `segments` concatenates the members'
/// segments in draw order and `bbox` is the union of theirs.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CompoundShape {
    pub segments: Vec<PathSegment>,
    pub fill: Option<Rgb>,
    pub stroke: Option<Rgb>,
    pub stroke_width_mm: f64,
    pub bbox: BBox,
}

impl From<RawShape> for CompoundShape {
    fn from(shape: RawShape) -> Self {
        let RawShape {
            segments,
            fill,
            stroke,
            stroke_width_mm,
            bbox,
        } = shape;
        Self {
            segments,
            fill,
            stroke,
            stroke_width_mm,
            bbox,
        }
    }
}

/// A text run salvaged from the page's text content, placed in mm.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TextItem {
    pub text: String,
    pub x_mm: f64,
    pub y_mm: f64,
    /// Font size in points, written as `fontSize`. Canvas font units are
    /// points (one unit is 0.3528 mm) and the height rule scales from them,
    /// so this is not converted to mm like the other fields.
    pub font_size: f64,
    pub width_mm: f64,
    pub height_mm: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bbox_from_segments() {
        let segs = vec![
            PathSegment::MoveTo(1.0, 2.0),
            PathSegment::CurveTo(0.0, 5.0, 4.0, 9.0, 3.0, 3.0),
            PathSegment::ClosePath,
        ];
        assert_eq!(
            BBox::from_segments(&segs),
            Some(BBox::new(0.0, 2.0, 4.0, 7.0))
        );
    }

    #[test]
    fn test_bbox_widens_degenerate_axes() {
        let segs = vec![PathSegment::MoveTo(5.0, 5.0), PathSegment::LineTo(20.0, 5.0)];
        let bbox = BBox::from_segments(&segs).unwrap();
        assert_eq!(bbox, BBox::new(5.0, 5.0, 15.0, MIN_BBOX_MM));
    }

    #[test]
    fn test_bbox_of_close_only_is_none() {
        assert_eq!(BBox::from_segments(&[PathSegment::ClosePath]), None);
    }

    #[test]
    fn test_bbox_union() {
        let a = BBox::new(0.0, 0.0, 10.0, 10.0);
        let b = BBox::new(11.0, 5.0, 10.0, 10.0);
        assert_eq!(a.union(&b), BBox::new(0.0, 0.0, 21.0, 15.0));
    }

    #[test]
    fn test_is_near_inclusive_boundary() {
        let a = BBox::new(0.0, 0.0, 10.0, 10.0);
        assert!(a.is_near(&BBox::new(11.5, 0.0, 10.0, 10.0), 1.5));
        assert!(!a.is_near(&BBox::new(11.75, 0.0, 10.0, 10.0), 1.5));
        assert!(a.is_near(&BBox::new(0.0, -11.5, 10.0, 10.0), 1.5));
    }

    #[test]
    fn test_segment_wire_format() {
        let json = serde_json::to_string(&vec![
            PathSegment::MoveTo(1.0, 2.0),
            PathSegment::ClosePath,
        ])
        .unwrap();
        assert_eq!(json, r#"[{"o":"M","a":[1.0,2.0]},{"o":"Z","a":[]}]"#);
    }

    #[test]
    fn test_segment_reads_saved_path_data() {
        let segs: Vec<PathSegment> = serde_json::from_str(
            r#"[{"o":"M","a":[0,0]},{"o":"L","a":[4,0]},{"o":"Z","a":[]},{"o":"Z"}]"#,
        )
        .unwrap();
        assert_eq!(
            segs,
            vec![
                PathSegment::MoveTo(0.0, 0.0),
                PathSegment::LineTo(4.0, 0.0),
                PathSegment::ClosePath,
                PathSegment::ClosePath,
            ]
        );
    }

    #[test]
    fn test_segment_rejects_bad_arity() {
        assert!(serde_json::from_str::<PathSegment>(r#"{"o":"M","a":[1]}"#).is_err());
        assert!(serde_json::from_str::<PathSegment>(r#"{"o":"Z","a":[1,2]}"#).is_err());
        assert!(serde_json::from_str::<PathSegment>(r#"{"o":"Q","a":[1,2]}"#).is_err());
    }

    #[test]
    fn test_text_item_font_size_stays_in_points() {
        let item = TextItem {
            text: "A".into(),
            x_mm: 0.0,
            y_mm: 0.0,
            font_size: 12.0,
            width_mm: 10.0,
            height_mm: 5.5,
        };
        let value = serde_json::to_value(&item).unwrap();
        assert_eq!(value["fontSize"], 12.0);
        assert!(value.get("fontSizeMm").is_none());
    }
}
