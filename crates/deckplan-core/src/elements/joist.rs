//! Framing members.

use super::{Attribute, CoordinateSet, Corner, ElementId, ElementStyle, ElementTrait, SerializableColor};
use crate::error::{LayoutError, LayoutResult};
use kurbo::Point;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Thickness of dimensional framing lumber (a 2x).
pub const JOIST_THICKNESS: f64 = 1.5;

/// Which pair of edges a joist runs between.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum JoistAxis {
    /// Runs north-south: north and south are required.
    Vertical,
    /// Runs east-west: west and east are required.
    Horizontal,
}

/// Edges supplied when placing a joist.
///
/// The long axis needs both ends. Across the joist exactly one face is given;
/// the other is one [`JOIST_THICKNESS`] away.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct JoistSpec {
    pub north: Option<f64>,
    pub south: Option<f64>,
    pub west: Option<f64>,
    pub east: Option<f64>,
}

impl JoistSpec {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn north(mut self, north: f64) -> Self {
        self.north = Some(north);
        self
    }

    pub fn south(mut self, south: f64) -> Self {
        self.south = Some(south);
        self
    }

    pub fn west(mut self, west: f64) -> Self {
        self.west = Some(west);
        self
    }

    pub fn east(mut self, east: f64) -> Self {
        self.east = Some(east);
        self
    }
}

/// Resolved edges of a joist.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct JoistEdges {
    pub north: f64,
    pub south: f64,
    pub west: f64,
    pub east: f64,
}

impl JoistEdges {
    /// Length along the long axis.
    pub fn length(&self) -> f64 {
        (self.south - self.north).max(self.east - self.west)
    }

    pub fn center(&self) -> Point {
        Point::new((self.west + self.east) / 2.0, (self.north + self.south) / 2.0)
    }
}

/// An axis-aligned framing member.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Joist {
    id: ElementId,
    name: String,
    axis: JoistAxis,
    edges: JoistEdges,
    coords: CoordinateSet,
    style: ElementStyle,
}

impl Joist {
    /// Place a joist from its supplied edges.
    ///
    /// Fails with [`LayoutError::MalformedInput`] if either end of the long
    /// axis is missing, or unless exactly one face across it is given.
    pub fn new(axis: JoistAxis, name: impl Into<String>, spec: JoistSpec) -> LayoutResult<Self> {
        let name = name.into();
        let missing = |reason: &str| LayoutError::malformed(&name, reason);

        let (north, south, west, east) = match axis {
            JoistAxis::Vertical => {
                let (Some(north), Some(south)) = (spec.north, spec.south) else {
                    return Err(missing("vertical joists need north and south"));
                };
                let (west, east) = match across(spec.west, spec.east) {
                    Across::One(low, high) => (low, high),
                    Across::Neither => return Err(missing("vertical joists need west or east")),
                    Across::Both => return Err(missing("vertical joists take west or east, not both")),
                };
                (north, south, west, east)
            }
            JoistAxis::Horizontal => {
                let (Some(west), Some(east)) = (spec.west, spec.east) else {
                    return Err(missing("horizontal joists need west and east"));
                };
                let (north, south) = match across(spec.north, spec.south) {
                    Across::One(low, high) => (low, high),
                    Across::Neither => return Err(missing("horizontal joists need north or south")),
                    Across::Both => return Err(missing("horizontal joists take north or south, not both")),
                };
                (north, south, west, east)
            }
        };

        let edges = JoistEdges { north, south, west, east };
        let coords = CoordinateSet::from_pairs([
            (Corner::NorthWest.label(), Point::new(west, north)),
            (Corner::NorthEast.label(), Point::new(east, north)),
            (Corner::SouthEast.label(), Point::new(east, south)),
            (Corner::SouthWest.label(), Point::new(west, south)),
        ]);

        Ok(Self {
            id: Uuid::new_v4(),
            name,
            axis,
            edges,
            coords,
            style: ElementStyle::filled(SerializableColor::olive()),
        })
    }

    pub fn vertical(name: impl Into<String>, spec: JoistSpec) -> LayoutResult<Self> {
        Self::new(JoistAxis::Vertical, name, spec)
    }

    pub fn horizontal(name: impl Into<String>, spec: JoistSpec) -> LayoutResult<Self> {
        Self::new(JoistAxis::Horizontal, name, spec)
    }

    pub fn axis(&self) -> JoistAxis {
        self.axis
    }

    pub fn edges(&self) -> JoistEdges {
        self.edges
    }

    pub fn north(&self) -> f64 {
        self.edges.north
    }

    pub fn south(&self) -> f64 {
        self.edges.south
    }

    pub fn west(&self) -> f64 {
        self.edges.west
    }

    pub fn east(&self) -> f64 {
        self.edges.east
    }

    pub fn length(&self) -> f64 {
        self.edges.length()
    }
}

/// Faces across a joist, as supplied.
enum Across {
    One(f64, f64),
    Neither,
    Both,
}

/// Fill in the missing face across a joist. Exactly one face may be given.
fn across(low: Option<f64>, high: Option<f64>) -> Across {
    match (low, high) {
        (Some(low), None) => Across::One(low, low + JOIST_THICKNESS),
        (None, Some(high)) => Across::One(high - JOIST_THICKNESS, high),
        (None, None) => Across::Neither,
        (Some(_), Some(_)) => Across::Both,
    }
}

impl ElementTrait for Joist {
    fn id(&self) -> ElementId {
        self.id
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn polygon(&self) -> &CoordinateSet {
        &self.coords
    }

    fn style(&self) -> &ElementStyle {
        &self.style
    }

    fn extra_points(&self) -> CoordinateSet {
        CoordinateSet::from_pairs([("Center", self.edges.center())])
    }

    fn attributes(&self) -> Vec<Attribute> {
        vec![("Length", self.edges.length())]
    }
}

/// Diagonal support under the step connector.
///
/// Runs at 45 degrees from the north framing line down to the step's east
/// boundary, following the connector's south-west edge.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AngleSupport {
    id: ElementId,
    coords: CoordinateSet,
    style: ElementStyle,
}

impl AngleSupport {
    /// `north` is the framing line the support hangs from, `east` the face it
    /// lands on, and `connector_sw` the connector board's south-west corner.
    pub fn new(north: f64, east: f64, overhang: f64, connector_sw: Point) -> Self {
        let sqrt2 = std::f64::consts::SQRT_2;

        // 45 degree line from the connector corner up to `north`, pushed east
        // so the board overhang clears the support
        let delta_north = connector_sw.y - north;
        let west = connector_sw.x - delta_north + sqrt2 * overhang;
        let south = north + (east - west);

        let thickness = sqrt2 * JOIST_THICKNESS;
        let coords = CoordinateSet::from_pairs([
            ("North West", Point::new(west, north)),
            ("North East", Point::new(west + thickness, north)),
            ("East North", Point::new(east, south - thickness)),
            ("East South", Point::new(east, south)),
        ]);

        Self {
            id: Uuid::new_v4(),
            coords,
            style: ElementStyle::filled(SerializableColor::olive()),
        }
    }
}

impl ElementTrait for AngleSupport {
    fn id(&self) -> ElementId {
        self.id
    }

    fn name(&self) -> &str {
        "Step Angle Support"
    }

    fn polygon(&self) -> &CoordinateSet {
        &self.coords
    }

    fn style(&self) -> &ElementStyle {
        &self.style
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::elements::is_simple_polygon;

    #[test]
    fn test_vertical_fills_missing_face() {
        let joist = Joist::vertical("Entry Wall Anchor Joist", JoistSpec::new().east(77.75).north(24.0).south(48.0)).unwrap();
        let edges = joist.edges();
        assert!((edges.west - 76.25).abs() < f64::EPSILON);
        assert!((edges.east - 77.75).abs() < f64::EPSILON);
        assert!((joist.length() - 24.0).abs() < f64::EPSILON);
        assert_eq!(joist.extra_points().get("Center"), Some(Point::new(77.0, 36.0)));
    }

    #[test]
    fn test_horizontal_fills_missing_face() {
        let joist = Joist::horizontal("Inner Southern Post Joist", JoistSpec::new().south(198.0).west(145.375).east(253.375)).unwrap();
        assert!((joist.north() - 196.5).abs() < f64::EPSILON);
        assert_eq!(joist.attributes(), vec![("Length", 108.0)]);
        assert!(is_simple_polygon(&joist.polygon().points()));
    }

    #[test]
    fn test_missing_long_edge_is_malformed() {
        let err = Joist::vertical("Step Joist 1", JoistSpec::new().west(10.0).north(0.0)).unwrap_err();
        assert_eq!(err, LayoutError::malformed("Step Joist 1", "vertical joists need north and south"));

        let err = Joist::horizontal("Door Anchor Joist", JoistSpec::new().north(0.0).east(10.0)).unwrap_err();
        assert!(matches!(err, LayoutError::MalformedInput { .. }));
    }

    #[test]
    fn test_missing_both_faces_is_malformed() {
        let err = Joist::vertical("Beam", JoistSpec::new().north(0.0).south(10.0)).unwrap_err();
        assert_eq!(err, LayoutError::malformed("Beam", "vertical joists need west or east"));
    }

    #[test]
    fn test_both_faces_is_malformed() {
        let spec = JoistSpec::new().north(0.0).south(10.0).west(4.0).east(5.5);
        let err = Joist::vertical("Beam", spec).unwrap_err();
        assert_eq!(err, LayoutError::malformed("Beam", "vertical joists take west or east, not both"));

        let spec = JoistSpec::new().west(0.0).east(10.0).north(4.0).south(5.5);
        let err = Joist::horizontal("Entryway Joist", spec).unwrap_err();
        assert_eq!(err, LayoutError::malformed("Entryway Joist", "horizontal joists take north or south, not both"));
    }

    #[test]
    fn test_zero_edge_is_supplied() {
        // An edge at the origin is a real edge, not a missing one
        let joist = Joist::horizontal("Origin", JoistSpec::new().north(0.0).west(0.0).east(10.0)).unwrap();
        assert!((joist.south() - JOIST_THICKNESS).abs() < f64::EPSILON);
    }

    #[test]
    fn test_angle_support_is_45_degrees() {
        let support = AngleSupport::new(192.25, 143.875, 0.75, Point::new(138.2, 193.1));
        let nw = support.polygon().get("North West").unwrap();
        let es = support.polygon().get("East South").unwrap();
        assert!(((es.y - nw.y) - (es.x - nw.x)).abs() < 1e-9);
        assert!((nw.x - (138.2 - (193.1 - 192.25) + std::f64::consts::SQRT_2 * 0.75)).abs() < 1e-9);
        assert!(is_simple_polygon(&support.polygon().points()));
        assert_eq!(support.name(), "Step Angle Support");
    }
}
