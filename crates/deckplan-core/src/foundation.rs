//! House foundation: the root of the plan's coordinate system.

use crate::elements::{CoordinateSet, ElementId, ElementStyle, ElementTrait};
use kurbo::Point;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Distance of the door wall and office wall from the plan origin.
const ORIGIN_INSET: f64 = 24.0;
/// Easting of the far end of the main wall.
const MAIN_WALL_EAST: f64 = 281.0;

/// Measured house-wall dimensions, in inches.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Measurements {
    /// Width of the entry, inside the mounted boards plus both board thicknesses.
    pub entry_width: f64,
    /// Depth of the entry from the door wall to the main wall.
    pub entry_depth: f64,
    /// Office wall from the door wall to the front corner.
    pub office_wall_length: f64,
}

impl Default for Measurements {
    fn default() -> Self {
        Self {
            // Measured inside mounted boards, assuming 1.5" boards; within 1/8"
            entry_width: 50.75 + 3.0,
            entry_depth: 24.0,
            // Main wall board to edge, plus entry depth and board thickness
            office_wall_length: 24.0 + 1.5 + 61.0,
        }
    }
}

/// Named reference points of the foundation.
///
/// Only these points are absolute; everything else in the plan is derived
/// from them. The trailing points run off-canvas and are infinite.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Foundation {
    measurements: Measurements,
    front_corner: Point,
    door_west: Point,
    door_east: Point,
    main_west: Point,
    main_east: Point,
    outline: FoundationOutline,
}

impl Foundation {
    pub const CANVAS_TOP_LEFT: &'static str = "Canvas Top Left";
    pub const TRAILING_WEST: &'static str = "Trailing West";
    pub const FRONT_CORNER: &'static str = "Front Corner";
    pub const DOOR_WEST: &'static str = "Door West";
    pub const DOOR_EAST: &'static str = "Door East";
    pub const MAIN_WEST: &'static str = "Main West";
    pub const MAIN_EAST: &'static str = "Main East";
    pub const TRAILING_EAST: &'static str = "Trailing East";

    /// Lay out the foundation from measured dimensions.
    pub fn new(measurements: Measurements) -> Self {
        let inf = f64::INFINITY;
        let front_y = ORIGIN_INSET + measurements.office_wall_length;
        let door_east_x = ORIGIN_INSET + measurements.entry_width;
        let main_y = ORIGIN_INSET + measurements.entry_depth;

        let front_corner = Point::new(ORIGIN_INSET, front_y);
        let door_west = Point::new(ORIGIN_INSET, ORIGIN_INSET);
        let door_east = Point::new(door_east_x, ORIGIN_INSET);
        let main_west = Point::new(door_east_x, main_y);
        let main_east = Point::new(MAIN_WALL_EAST, main_y);

        let coords = CoordinateSet::from_pairs([
            (Self::CANVAS_TOP_LEFT, Point::new(-inf, -inf)),
            (Self::TRAILING_WEST, Point::new(-inf, front_y)),
            (Self::FRONT_CORNER, front_corner),
            (Self::DOOR_WEST, door_west),
            (Self::DOOR_EAST, door_east),
            (Self::MAIN_WEST, main_west),
            (Self::MAIN_EAST, main_east),
            (Self::TRAILING_EAST, Point::new(MAIN_WALL_EAST, -inf)),
        ]);

        log::debug!("Foundation laid out from {:?}", measurements);

        Self {
            measurements,
            front_corner,
            door_west,
            door_east,
            main_west,
            main_east,
            outline: FoundationOutline {
                id: Uuid::new_v4(),
                coords,
                style: ElementStyle::default(),
            },
        }
    }

    pub fn measurements(&self) -> Measurements {
        self.measurements
    }

    pub fn coords(&self) -> &CoordinateSet {
        &self.outline.coords
    }

    pub fn front_corner(&self) -> Point {
        self.front_corner
    }

    pub fn door_west(&self) -> Point {
        self.door_west
    }

    pub fn door_east(&self) -> Point {
        self.door_east
    }

    pub fn main_west(&self) -> Point {
        self.main_west
    }

    pub fn main_east(&self) -> Point {
        self.main_east
    }

    /// The drawable outline element.
    pub fn outline(&self) -> &FoundationOutline {
        &self.outline
    }
}

impl Default for Foundation {
    fn default() -> Self {
        Self::new(Measurements::default())
    }
}

/// The foundation as a drawable element.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FoundationOutline {
    id: ElementId,
    coords: CoordinateSet,
    style: ElementStyle,
}

impl ElementTrait for FoundationOutline {
    fn id(&self) -> ElementId {
        self.id
    }

    fn name(&self) -> &str {
        "Foundation"
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

    #[test]
    fn test_default_measurements() {
        let m = Measurements::default();
        assert!((m.entry_width - 53.75).abs() < f64::EPSILON);
        assert!((m.entry_depth - 24.0).abs() < f64::EPSILON);
        assert!((m.office_wall_length - 86.5).abs() < f64::EPSILON);
    }

    #[test]
    fn test_reference_points() {
        let foundation = Foundation::default();
        assert_eq!(foundation.door_east(), Point::new(77.75, 24.0));
        assert_eq!(foundation.main_west(), Point::new(77.75, 48.0));
        assert_eq!(foundation.front_corner(), Point::new(24.0, 110.5));
        assert_eq!(foundation.door_west(), Point::new(24.0, 24.0));
        assert_eq!(foundation.main_east(), Point::new(281.0, 48.0));
    }

    #[test]
    fn test_outline_order_and_trailing_points() {
        let foundation = Foundation::default();
        let labels: Vec<_> = foundation.coords().labels().collect();
        assert_eq!(
            labels,
            [
                "Canvas Top Left",
                "Trailing West",
                "Front Corner",
                "Door West",
                "Door East",
                "Main West",
                "Main East",
                "Trailing East"
            ]
        );
        let trailing = foundation.coords().get(Foundation::TRAILING_EAST).unwrap();
        assert!(trailing.y.is_infinite() && trailing.y < 0.0);
        assert!((trailing.x - 281.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_outline_bounds_ignore_infinite_points() {
        let bounds = Foundation::default().outline().bounds();
        assert!((bounds.x0 - 24.0).abs() < f64::EPSILON);
        assert!((bounds.x1 - 281.0).abs() < f64::EPSILON);
        assert!((bounds.y1 - 110.5).abs() < f64::EPSILON);
    }
}
