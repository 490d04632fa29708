//! Siding trim around the house walls.

use crate::elements::{Corner, Element, Facing, InsideCorner, OutsideCorner, WallSiding};
use crate::foundation::Foundation;
use kurbo::{Point, Vec2};

/// Trim pieces, in order around the house from the office front to the east wall.
#[derive(Debug, Clone)]
pub struct Siding {
    pieces: Vec<Element>,
}

impl Siding {
    pub fn place(foundation: &Foundation) -> Self {
        let inf = f64::INFINITY;
        let outside = OutsideCorner::WIDTH;
        let inside = InsideCorner::WIDTH;

        let front = foundation.front_corner();
        let door_west = foundation.door_west();
        let door_east = foundation.door_east();
        let main_west = foundation.main_west();
        let main_east = foundation.main_east();
        let at = |p: Point, dx: f64, dy: f64| p + Vec2::new(dx, dy);

        let pieces = vec![
            Element::WallSiding(WallSiding::new(
                "Office Front Siding",
                Point::new(-inf, front.y),
                at(front, -outside, 0.0),
                Facing::South,
            )),
            Element::OutsideCorner(OutsideCorner::new("Front Corner Siding", front, Corner::SouthEast)),
            Element::WallSiding(WallSiding::new(
                "Office Wall Siding",
                at(front, 0.0, -outside),
                at(door_west, 0.0, inside),
                Facing::East,
            )),
            Element::InsideCorner(InsideCorner::new("Doorway West Corner Siding", door_west, Corner::NorthWest)),
            Element::WallSiding(WallSiding::new(
                "Door Siding",
                at(door_west, inside, 0.0),
                at(door_east, -inside, 0.0),
                Facing::South,
            )),
            Element::InsideCorner(InsideCorner::new("Doorway East Corner Siding", door_east, Corner::NorthEast)),
            Element::WallSiding(WallSiding::new(
                "Entryway Siding",
                at(door_east, 0.0, inside),
                at(main_west, 0.0, -outside),
                Facing::West,
            )),
            Element::OutsideCorner(OutsideCorner::new("Entry Corner Siding", main_west, Corner::SouthWest)),
            Element::WallSiding(WallSiding::new(
                "Front Siding",
                at(main_west, outside, 0.0),
                at(main_east, -outside, 0.0),
                Facing::South,
            )),
            Element::OutsideCorner(OutsideCorner::new("Far Corner Siding", main_east, Corner::SouthEast)),
            Element::WallSiding(WallSiding::new(
                "East Siding",
                at(main_east, 0.0, -outside),
                Point::new(main_east.x, -inf),
                Facing::East,
            )),
        ];

        Self { pieces }
    }

    pub fn pieces(&self) -> &[Element] {
        &self.pieces
    }

    pub fn into_elements(self) -> Vec<Element> {
        self.pieces
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_piece_order() {
        let siding = Siding::place(&Foundation::default());
        let names: Vec<_> = siding.pieces().iter().map(|p| p.name()).collect();
        assert_eq!(
            names,
            [
                "Office Front Siding",
                "Front Corner Siding",
                "Office Wall Siding",
                "Doorway West Corner Siding",
                "Door Siding",
                "Doorway East Corner Siding",
                "Entryway Siding",
                "Entry Corner Siding",
                "Front Siding",
                "Far Corner Siding",
                "East Siding"
            ]
        );
    }

    #[test]
    fn test_strips_meet_corner_flanges() {
        let siding = Siding::place(&Foundation::default());
        let piece = |name: &str| siding.pieces().iter().find(|p| p.name() == name).unwrap();

        // Office wall siding runs from the front corner flange to the doorway notch
        let wall = piece("Office Wall Siding").polygon();
        assert_eq!(wall.get("Inner North"), Some(Point::new(24.0, 26.0)));
        assert_eq!(wall.get("Inner South"), Some(Point::new(24.0, 105.5)));
        assert_eq!(wall.get("Outer South"), Some(Point::new(24.5, 105.5)));

        let corner = piece("Front Corner Siding").polygon();
        assert_eq!(corner.get("Inner North Flange"), wall.get("Inner South"));

        let front = piece("Front Siding").polygon();
        assert_eq!(front.get("Inner West"), Some(Point::new(82.75, 48.0)));
        assert_eq!(front.get("Inner East"), Some(Point::new(276.0, 48.0)));
    }

    #[test]
    fn test_trailing_strips_run_off_plan() {
        let siding = Siding::place(&Foundation::default());
        let office_front = siding.pieces()[0].polygon();
        assert!(office_front.get("Inner West").unwrap().x.is_infinite());
        let east = siding.pieces()[10].polygon();
        assert!(east.get("Outer North").unwrap().y.is_infinite());
        // Bounds only cover the finite points
        assert!(siding.pieces()[10].bounds().y0.is_finite());
    }
}
