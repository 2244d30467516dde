//! Proximity grouping of raw shapes into compound shapes.
//!
//! Outlined text and logos arrive as hundreds of small paints. Shapes whose
//! fill and stroke keys match and whose bounding boxes lie within `gap` of
//! each other are merged, transitively, with a union-find over shape indices.
//!
//! Each class becomes one [`CompoundShape`]: members' segments concatenated
//! in ascending index order, style from the lowest-index member, bbox the
//! union of the members'. Classes are emitted in order of their lowest-index
//! member, so a class that absorbs a late shape through transitivity is
//! drawn at the position of its earliest member.

use itertools::Itertools;
use rustc_hash::FxHashMap;

use super::params::GroupParams;
use crate::model::{ColorKey, CompoundShape, RawShape};

/// Array-backed disjoint-set forest with path compression.
#[derive(Debug, Clone)]
pub struct UnionFind {
    parent: Vec<usize>,
}

impl UnionFind {
    /// Creates `n` singleton sets `0..n`.
    pub fn new(n: usize) -> Self {
        Self {
            parent: (0..n).collect(),
        }
    }

    /// Find the representative of `x`, halving the path on the way up.
    pub fn find(&mut self, mut x: usize) -> usize {
        while self.parent[x] != x {
            self.parent[x] = self.parent[self.parent[x]];
            x = self.parent[x];
        }
        x
    }

    /// Merge the sets containing `a` and `b`.
    pub fn union(&mut self, a: usize, b: usize) {
        let root_a = self.find(a);
        let root_b = self.find(b);
        if root_a != root_b {
            self.parent[root_a] = root_b;
        }
    }

    /// Members of every set, each in ascending order, sets ordered by their
    /// smallest member.
    pub fn classes(&mut self) -> Vec<Vec<usize>> {
        let mut slot_of_root: FxHashMap<usize, usize> = FxHashMap::default();
        let mut classes: Vec<Vec<usize>> = Vec::new();
        for i in 0..self.parent.len() {
            let root = self.find(i);
            let slot = *slot_of_root.entry(root).or_insert_with(|| {
                classes.push(Vec::new());
                classes.len() - 1
            });
            classes[slot].push(i);
        }
        classes
    }
}

/// Style key under which two shapes may merge.
fn style_key(shape: &RawShape) -> (ColorKey, ColorKey) {
    (ColorKey::of(shape.fill), ColorKey::of(shape.stroke))
}

/// Groups raw shapes (in draw order) into compound shapes.
///
/// Pure function of `shapes` and `params`: identical input always yields
/// identical output. Only shapes with the same style key are compared, so
/// the pairwise scan runs per style bucket.
pub fn group_shapes(shapes: &[RawShape], params: &GroupParams) -> Vec<CompoundShape> {
    let mut buckets: FxHashMap<(ColorKey, ColorKey), Vec<usize>> = FxHashMap::default();
    for (i, shape) in shapes.iter().enumerate() {
        buckets.entry(style_key(shape)).or_default().push(i);
    }

    let mut forest = UnionFind::new(shapes.len());
    for members in buckets.values() {
        for (&i, &j) in members.iter().tuple_combinations() {
            if shapes[i].bbox.is_near(&shapes[j].bbox, params.gap) {
                forest.union(i, j);
            }
        }
    }

    let compounds: Vec<CompoundShape> = forest
        .classes()
        .into_iter()
        .map(|members| merge_members(shapes, &members))
        .collect();
    tracing::debug!(
        raw = shapes.len(),
        compound = compounds.len(),
        gap = params.gap,
        "grouped shapes"
    );
    compounds
}

/// Wraps every raw shape as its own compound shape, keeping draw order.
pub fn ungrouped(shapes: Vec<RawShape>) -> Vec<CompoundShape> {
    shapes.into_iter().map(CompoundShape::from).collect()
}

fn merge_members(shapes: &[RawShape], members: &[usize]) -> CompoundShape {
    let first = &shapes[members[0]];
    let mut segments = Vec::with_capacity(members.iter().map(|&i| shapes[i].segments.len()).sum());
    let mut bbox = first.bbox;
    for &i in members {
        segments.extend_from_slice(&shapes[i].segments);
        bbox = bbox.union(&shapes[i].bbox);
    }
    CompoundShape {
        segments,
        fill: first.fill,
        stroke: first.stroke,
        stroke_width_mm: first.stroke_width_mm,
        bbox,
    }
}
