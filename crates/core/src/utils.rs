//! Geometry helpers: affine matrices and point/millimetre conversion.
//!
//! Source documents use PostScript points (1/72 inch) with the origin at the
//! bottom-left of the page. The canvas uses millimetres with the origin at the
//! top-left and y growing downward; [`to_mm`] performs that mapping.

/// A 2D point (x, y).
pub type Point = (f64, f64);

/// A 6-element affine transformation matrix (a, b, c, d, e, f).
/// Transforms point (x, y) to (ax + cy + e, bx + dy + f).
pub type Matrix = (f64, f64, f64, f64, f64, f64);

/// Identity transformation matrix.
pub const MATRIX_IDENTITY: Matrix = (1.0, 0.0, 0.0, 1.0, 0.0, 0.0);

/// Millimetres per PostScript point.
pub const MM_PER_PT: f64 = 25.4 / 72.0;

/// Compares two floats for approximate equality.
#[inline]
pub fn approx_eq(a: f64, b: f64, epsilon: f64) -> bool {
    (a - b).abs() < epsilon
}

/// Multiplies two matrices: result = m1 * m0.
/// This applies m1 first, then m0.
///
/// With `m1` the matrix of a new `transform` operator and `m0` the current
/// CTM, the result is the CTM for everything drawn afterwards.
pub fn mult_matrix(m1: Matrix, m0: Matrix) -> Matrix {
    let (a1, b1, c1, d1, e1, f1) = m1;
    let (a0, b0, c0, d0, e0, f0) = m0;
    (
        a0 * a1 + c0 * b1,
        b0 * a1 + d0 * b1,
        a0 * c1 + c0 * d1,
        b0 * c1 + d0 * d1,
        a0 * e1 + c0 * f1 + e0,
        b0 * e1 + d0 * f1 + f0,
    )
}

/// Applies a matrix to a point.
pub fn apply_matrix_pt(m: Matrix, v: Point) -> Point {
    let (a, b, c, d, e, f) = m;
    let (x, y) = v;
    (a * x + c * y + e, b * x + d * y + f)
}

/// Converts a length in points to millimetres.
#[inline]
pub fn pt_to_mm(v: f64) -> f64 {
    v * MM_PER_PT
}

/// Maps a page-space point (points, bottom-left origin) to canvas
/// millimetres (top-left origin).
pub fn to_mm(v: Point, page_height_mm: f64) -> Point {
    let (x, y) = v;
    (pt_to_mm(x), page_height_mm - pt_to_mm(y))
}

/// Builds a matrix from a slice of exactly six numbers.
pub fn matrix_from_slice(values: &[f64]) -> Option<Matrix> {
    match *values {
        [a, b, c, d, e, f] => Some((a, b, c, d, e, f)),
        _ => None,
    }
}
