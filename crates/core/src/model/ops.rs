//! Operator-list vocabulary supplied by the external document parser.
//!
//! A page arrives as an ordered list of [`OpEntry`] values, each an operator
//! kind plus its raw operand array, and a parallel list of
//! [`RawTextItem`]s. Wire names follow the parser's operator-list naming
//! (`save`, `constructPath`, `setFillRGBColor`, ...). Anything outside the
//! vocabulary deserializes to [`OpKind::Other`] and is skipped.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::utils::Matrix;

/// Operator kinds understood by the interpreter.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum OpKind {
    Save,
    Restore,
    Transform,
    PaintFormXObjectBegin,
    PaintFormXObjectEnd,
    SetLineWidth,
    SetStrokeRgbColor,
    SetFillRgbColor,
    SetStrokeGray,
    SetFillGray,
    SetStrokeCmykColor,
    SetFillCmykColor,
    ConstructPath,
    MoveTo,
    LineTo,
    CurveTo,
    /// Curve whose first control point is the current point
    CurveTo2,
    /// Curve whose second control point is the end point
    CurveTo3,
    ClosePath,
    Rectangle,
    Stroke,
    CloseStroke,
    Fill,
    EoFill,
    FillStroke,
    EoFillStroke,
    CloseFillStroke,
    CloseEoFillStroke,
    EndPath,
    Clip,
    EoClip,
    /// Operator outside the vocabulary
    Other(String),
}

static NAMES: [(OpKind, &str); 31] = [
    (OpKind::Save, "save"),
    (OpKind::Restore, "restore"),
    (OpKind::Transform, "transform"),
    (OpKind::PaintFormXObjectBegin, "paintFormXObjectBegin"),
    (OpKind::PaintFormXObjectEnd, "paintFormXObjectEnd"),
    (OpKind::SetLineWidth, "setLineWidth"),
    (OpKind::SetStrokeRgbColor, "setStrokeRGBColor"),
    (OpKind::SetFillRgbColor, "setFillRGBColor"),
    (OpKind::SetStrokeGray, "setStrokeGray"),
    (OpKind::SetFillGray, "setFillGray"),
    (OpKind::SetStrokeCmykColor, "setStrokeCMYKColor"),
    (OpKind::SetFillCmykColor, "setFillCMYKColor"),
    (OpKind::ConstructPath, "constructPath"),
    (OpKind::MoveTo, "moveTo"),
    (OpKind::LineTo, "lineTo"),
    (OpKind::CurveTo, "curveTo"),
    (OpKind::CurveTo2, "curveTo2"),
    (OpKind::CurveTo3, "curveTo3"),
    (OpKind::ClosePath, "closePath"),
    (OpKind::Rectangle, "rectangle"),
    (OpKind::Stroke, "stroke"),
    (OpKind::CloseStroke, "closeStroke"),
    (OpKind::Fill, "fill"),
    (OpKind::EoFill, "eoFill"),
    (OpKind::FillStroke, "fillStroke"),
    (OpKind::EoFillStroke, "eoFillStroke"),
    (OpKind::CloseFillStroke, "closeFillStroke"),
    (OpKind::CloseEoFillStroke, "closeEoFillStroke"),
    (OpKind::EndPath, "endPath"),
    (OpKind::Clip, "clip"),
    (OpKind::EoClip, "eoClip"),
];

impl OpKind {
    /// Wire name of the operator.
    pub fn name(&self) -> &str {
        match self {
            OpKind::Other(name) => name,
            known => NAMES
                .iter()
                .find(|(kind, _)| kind == known)
                .map_or("", |(_, name)| *name),
        }
    }

    /// Looks up an operator by wire name.
    pub fn from_name(name: &str) -> Self {
        NAMES
            .iter()
            .find(|(_, n)| *n == name)
            .map_or_else(|| OpKind::Other(name.to_string()), |(kind, _)| kind.clone())
    }
}

impl From<String> for OpKind {
    fn from(name: String) -> Self {
        Self::from_name(&name)
    }
}

impl From<OpKind> for String {
    fn from(kind: OpKind) -> Self {
        kind.name().to_string()
    }
}

impl fmt::Display for OpKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A raw operand value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Operand {
    Number(f64),
    /// Operator name, as found in a batched sub-operator array
    Op(OpKind),
    Array(Vec<Operand>),
    Null,
}

impl Operand {
    pub fn as_number(&self) -> Option<f64> {
        match self {
            Operand::Number(n) => Some(*n),
            _ => None,
        }
    }

    pub fn as_op(&self) -> Option<&OpKind> {
        match self {
            Operand::Op(kind) => Some(kind),
            _ => None,
        }
    }

    pub fn as_array(&self) -> Option<&[Operand]> {
        match self {
            Operand::Array(items) => Some(items),
            _ => None,
        }
    }

    /// The numeric items of an array operand; `None` if any item is not a number.
    pub fn as_numbers(&self) -> Option<Vec<f64>> {
        self.as_array()?.iter().map(Operand::as_number).collect()
    }
}

impl From<f64> for Operand {
    fn from(n: f64) -> Self {
        Operand::Number(n)
    }
}

impl From<OpKind> for Operand {
    fn from(kind: OpKind) -> Self {
        Operand::Op(kind)
    }
}

impl<T: Into<Operand>> From<Vec<T>> for Operand {
    fn from(items: Vec<T>) -> Self {
        Operand::Array(items.into_iter().map(Into::into).collect())
    }
}

/// One entry of the operator list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OpEntry {
    #[serde(rename = "fn")]
    pub kind: OpKind,
    #[serde(default)]
    pub args: Vec<Operand>,
}

impl OpEntry {
    pub fn new(kind: OpKind, args: Vec<Operand>) -> Self {
        Self { kind, args }
    }

    /// An operator without operands.
    pub fn bare(kind: OpKind) -> Self {
        Self::new(kind, Vec::new())
    }

    /// An operator whose operands are all plain numbers.
    pub fn numbers(kind: OpKind, args: &[f64]) -> Self {
        Self::new(kind, args.iter().copied().map(Operand::Number).collect())
    }

    /// A batched path-construction operator: sub-operator codes plus one
    /// flat coordinate array.
    pub fn construct_path(sub_ops: Vec<OpKind>, coords: Vec<f64>) -> Self {
        Self::new(OpKind::ConstructPath, vec![sub_ops.into(), coords.into()])
    }
}

/// One entry of the page's text-content listing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RawTextItem {
    #[serde(rename = "str")]
    pub text: String,
    /// Text-space to page-space transform, in points
    pub transform: Matrix,
    /// Advance width declared by the parser, in points
    #[serde(default)]
    pub width: f64,
}

impl RawTextItem {
    pub fn new(text: impl Into<String>, transform: Matrix, width: f64) -> Self {
        Self {
            text: text.into(),
            transform,
            width,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_op_kind_names_round_trip() {
        for (kind, name) in NAMES.iter() {
            assert_eq!(kind.name(), *name);
            assert_eq!(&OpKind::from_name(name), kind);
        }
    }

    #[test]
    fn test_unknown_op_kind() {
        let kind = OpKind::from_name("beginMarkedContent");
        assert_eq!(kind, OpKind::Other("beginMarkedContent".into()));
        assert_eq!(kind.name(), "beginMarkedContent");
    }

    #[test]
    fn test_op_entry_deserialize() {
        let json = r#"{"fn":"constructPath","args":[["moveTo","lineTo"],[0,0,10,5]]}"#;
        let entry: OpEntry = serde_json::from_str(json).unwrap();
        assert_eq!(
            entry,
            OpEntry::construct_path(
                vec![OpKind::MoveTo, OpKind::LineTo],
                vec![0.0, 0.0, 10.0, 5.0]
            )
        );
    }

    #[test]
    fn test_op_entry_missing_args() {
        let entry: OpEntry = serde_json::from_str(r#"{"fn":"save"}"#).unwrap();
        assert_eq!(entry, OpEntry::bare(OpKind::Save));
    }

    #[test]
    fn test_operand_null() {
        let entry: OpEntry =
            serde_json::from_str(r#"{"fn":"paintFormXObjectBegin","args":[null,null]}"#).unwrap();
        assert_eq!(entry.args, vec![Operand::Null, Operand::Null]);
    }
}
