//! Ordered, labelled coordinate lists.

use kurbo::{BezPath, Point, Rect};
use serde::{Deserialize, Serialize};

/// An ordered list of labelled points.
///
/// Insertion order is the polygon traversal order: the outline of a shape is
/// the points in order, closed back to the first one.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CoordinateSet {
    entries: Vec<(String, Point)>,
}

impl CoordinateSet {
    /// Create an empty set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a set from `(label, point)` pairs, keeping their order.
    pub fn from_pairs<L: Into<String>>(pairs: impl IntoIterator<Item = (L, Point)>) -> Self {
        let mut set = Self::new();
        for (label, point) in pairs {
            set.push(label, point);
        }
        set
    }

    /// Append a point, or overwrite it in place if the label already exists.
    pub fn push(&mut self, label: impl Into<String>, point: Point) {
        let label = label.into();
        match self.get_mut(&label) {
            Some(existing) => *existing = point,
            None => self.entries.push((label, point)),
        }
    }

    /// Look up a point by label.
    pub fn get(&self, label: &str) -> Option<Point> {
        self.entries
            .iter()
            .find(|(name, _)| name == label)
            .map(|(_, point)| *point)
    }

    /// Mutable access to a point by label.
    pub fn get_mut(&mut self, label: &str) -> Option<&mut Point> {
        self.entries
            .iter_mut()
            .find(|(name, _)| name == label)
            .map(|(_, point)| point)
    }

    /// Check if a label is present.
    pub fn contains(&self, label: &str) -> bool {
        self.get(label).is_some()
    }

    /// Number of points.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if the set has no points.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate `(label, point)` pairs in order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, Point)> {
        self.entries.iter().map(|(name, point)| (name.as_str(), *point))
    }

    /// Labels in order.
    pub fn labels(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(name, _)| name.as_str())
    }

    /// Points in order (not closed).
    pub fn points(&self) -> Vec<Point> {
        self.entries.iter().map(|(_, point)| *point).collect()
    }

    /// Points in order with the first point repeated at the end.
    pub fn closed_points(&self) -> Vec<Point> {
        let mut points = self.points();
        if let Some(first) = points.first().copied() {
            points.push(first);
        }
        points
    }

    /// A new set with `other`'s points appended (labels in `other` win).
    pub fn merged(&self, other: &CoordinateSet) -> CoordinateSet {
        let mut merged = self.clone();
        for (label, point) in other.iter() {
            merged.push(label, point);
        }
        merged
    }

    /// Bounding box of the finite points (zero rect if there are none).
    pub fn bounds(&self) -> Rect {
        let mut finite = self
            .entries
            .iter()
            .map(|(_, p)| *p)
            .filter(|p| p.x.is_finite() && p.y.is_finite());
        let Some(first) = finite.next() else {
            return Rect::ZERO;
        };
        finite.fold(Rect::from_points(first, first), |rect, p| rect.union_pt(p))
    }

    /// Closed polygon path through the points.
    pub fn to_path(&self) -> BezPath {
        let mut path = BezPath::new();
        let mut points = self.entries.iter().map(|(_, p)| *p);
        if let Some(first) = points.next() {
            path.move_to(first);
            for point in points {
                path.line_to(point);
            }
            path.close_path();
        }
        path
    }
}
