//! Details panel: the selected element's points and measurements.
//!
//! Values are shown relative to a movable origin, in feet and fractional
//! inches rounded to the nearest sixteenth.

use crate::camera::Camera;
use crate::elements::{Element, SerializableColor};
use kurbo::{Circle, Point};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Radius of the marker drawn over a highlighted point, in pixels.
pub const HIGHLIGHT_RADIUS: f64 = 5.0;

const SIXTEENTHS_PER_INCH: u64 = 16;
const INCHES_PER_FOOT: u64 = 12;

/// A length in inches, displayed as signed feet and fractional inches.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FeetInches(pub f64);

impl fmt::Display for FeetInches {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Round once, so 11.999" carries into the next foot
        let sixteenths = (self.0.abs() * SIXTEENTHS_PER_INCH as f64).round() as u64;
        if self.0 < 0.0 && sixteenths > 0 {
            write!(f, "-")?;
        }

        let per_foot = SIXTEENTHS_PER_INCH * INCHES_PER_FOOT;
        let feet = sixteenths / per_foot;
        let inches = (sixteenths % per_foot) / SIXTEENTHS_PER_INCH;
        let mut numer = sixteenths % SIXTEENTHS_PER_INCH;
        let mut denom = SIXTEENTHS_PER_INCH;
        while numer > 0 && numer % 2 == 0 {
            numer /= 2;
            denom /= 2;
        }

        if feet > 0 {
            write!(f, "{feet}' ")?;
        }
        write!(f, "{inches}")?;
        if numer > 0 {
            write!(f, " {numer}/{denom}")?;
        }
        write!(f, "\"")
    }
}

/// One row of the coordinate table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CoordinateRow {
    pub label: String,
    /// World position, for highlighting and re-centering.
    pub point: Point,
    pub x: String,
    pub y: String,
}

/// One row of the attribute table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AttributeRow {
    pub label: String,
    pub value: String,
}

/// What the details panel shows for a selected element.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Selection {
    pub name: String,
    pub coordinates: Vec<CoordinateRow>,
    pub attributes: Vec<AttributeRow>,
}

impl Selection {
    /// Marker over a listed point, in screen space.
    pub fn highlight(&self, label: &str, camera: &Camera) -> Option<Circle> {
        self.coordinates
            .iter()
            .find(|row| row.label == label)
            .map(|row| Circle::new(camera.project(row.point), HIGHLIGHT_RADIUS))
    }
}

/// An origin axis, in screen space.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AxisLine {
    pub from: Point,
    pub to: Point,
    pub color: SerializableColor,
    pub width: f64,
}

/// Details panel state: the origin measurements are taken from.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Details {
    origin: Point,
}

impl Details {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn origin(&self) -> Point {
        self.origin
    }

    pub fn set_origin(&mut self, origin: Point) {
        self.origin = origin;
    }

    /// Re-center horizontal measurements on `x`.
    pub fn set_origin_x(&mut self, x: f64) {
        self.origin.x = x;
    }

    /// Re-center vertical measurements on `y`.
    pub fn set_origin_y(&mut self, y: f64) {
        self.origin.y = y;
    }

    /// Table contents for an element: outline points then extra points,
    /// skipping any that run off the plan.
    pub fn select(&self, element: &Element) -> Selection {
        let merged = element.polygon().merged(&element.extra_points());
        let coordinates = merged
            .iter()
            .filter(|(_, p)| p.x.is_finite() && p.y.is_finite())
            .map(|(label, point)| CoordinateRow {
                label: label.to_string(),
                point,
                x: FeetInches(point.x - self.origin.x).to_string(),
                y: FeetInches(point.y - self.origin.y).to_string(),
            })
            .collect();

        let attributes = element
            .attributes()
            .into_iter()
            .map(|(label, value)| AttributeRow {
                label: label.to_string(),
                value: FeetInches(value).to_string(),
            })
            .collect();

        log::debug!("Selected {}", element.name());

        Selection {
            name: element.name().to_string(),
            coordinates,
            attributes,
        }
    }

    /// The origin's x axis (green) and y axis (red), across the whole view.
    pub fn axis_lines(&self, camera: &Camera) -> [AxisLine; 2] {
        let inf = f64::INFINITY;
        [
            AxisLine {
                from: camera.project(Point::new(-inf, self.origin.y)),
                to: camera.project(Point::new(inf, self.origin.y)),
                color: SerializableColor::new(0, 128, 0, 255),
                width: 2.0,
            },
            AxisLine {
                from: camera.project(Point::new(self.origin.x, -inf)),
                to: camera.project(Point::new(self.origin.x, inf)),
                color: SerializableColor::new(255, 0, 0, 255),
                width: 2.0,
            },
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::elements::{Joist, JoistSpec};
    use crate::foundation::Foundation;

    #[test]
    fn test_feet_inches_format() {
        assert_eq!(FeetInches(0.0).to_string(), "0\"");
        assert_eq!(FeetInches(0.375).to_string(), "0 3/8\"");
        assert_eq!(FeetInches(5.5).to_string(), "5 1/2\"");
        assert_eq!(FeetInches(12.0).to_string(), "1' 0\"");
        assert_eq!(FeetInches(203.75).to_string(), "16' 11 3/4\"");
        assert_eq!(FeetInches(-25.125).to_string(), "-2' 1 1/8\"");
    }

    #[test]
    fn test_feet_inches_rounding_carries() {
        // Rounds up to a whole foot
        assert_eq!(FeetInches(11.99).to_string(), "1' 0\"");
        assert_eq!(FeetInches(0.03).to_string(), "0\"");
        assert_eq!(FeetInches(-0.01).to_string(), "0\"");
        assert_eq!(FeetInches(2.0625).to_string(), "2 1/16\"");
    }

    #[test]
    fn test_select_merges_extra_points() {
        let joist = Joist::horizontal("Door Anchor Joist", JoistSpec::new().north(24.0).west(25.5).east(76.25)).unwrap();
        let selection = Details::new().select(&Element::Joist(joist));
        assert_eq!(selection.name, "Door Anchor Joist");
        let labels: Vec<_> = selection.coordinates.iter().map(|r| r.label.as_str()).collect();
        assert_eq!(labels, ["North West", "North East", "South East", "South West", "Center"]);
        assert_eq!(selection.coordinates[0].x, "2' 1 1/2\"");
        assert_eq!(selection.coordinates[0].y, "2' 0\"");
        assert_eq!(
            selection.attributes,
            vec![AttributeRow {
                label: "Length".to_string(),
                value: "4' 2 3/4\"".to_string()
            }]
        );
    }

    #[test]
    fn test_select_skips_infinite_points() {
        let foundation = Foundation::default();
        let selection = Details::new().select(&Element::Foundation(foundation.outline().clone()));
        let labels: Vec<_> = selection.coordinates.iter().map(|r| r.label.as_str()).collect();
        assert_eq!(labels, ["Front Corner", "Door West", "Door East", "Main West", "Main East"]);
        assert!(selection.attributes.is_empty());
    }

    #[test]
    fn test_origin_recenters_values() {
        let joist = Joist::vertical("Entry Wall Anchor Joist", JoistSpec::new().east(77.75).north(24.0).south(48.0)).unwrap();
        let element = Element::Joist(joist);
        let mut details = Details::new();
        details.set_origin_x(77.75);
        details.set_origin_y(48.0);
        let selection = details.select(&element);
        let north_west = &selection.coordinates[0];
        assert_eq!(north_west.x, "-1 1/2\"");
        assert_eq!(north_west.y, "-2' 0\"");
        assert_eq!(details.origin(), Point::new(77.75, 48.0));
    }

    #[test]
    fn test_axis_lines_span_view() {
        let mut details = Details::new();
        details.set_origin(Point::new(50.0, 40.0));
        let camera = Camera::for_zoom_level(1);
        let [x_axis, y_axis] = details.axis_lines(&camera);
        assert_eq!(x_axis.from, Point::new(-10.0, 40.0));
        assert_eq!(x_axis.to, Point::new(310.0, 40.0));
        assert_eq!(y_axis.from, Point::new(50.0, -10.0));
        assert_eq!(y_axis.to, Point::new(50.0, 260.0));
    }

    #[test]
    fn test_highlight_marker() {
        let joist = Joist::vertical("Beam", JoistSpec::new().west(10.0).north(0.0).south(20.0)).unwrap();
        let selection = Details::new().select(&Element::Joist(joist));
        let camera = Camera::for_zoom_level(2);
        let marker = selection.highlight("Center", &camera).unwrap();
        assert_eq!(marker.center, Point::new(21.5, 20.0));
        assert!(selection.highlight("Nowhere", &camera).is_none());
    }
}
