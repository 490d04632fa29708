//! Siding trim pieces around the house walls.

use super::{CoordinateSet, Corner, ElementId, ElementStyle, ElementTrait, SerializableColor};
use kurbo::Point;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Which way a wall faces, outward from the house.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Facing {
    North,
    South,
    East,
    West,
}

impl Facing {
    /// Sign of the outward offset along the wall's normal axis.
    fn outward(self) -> f64 {
        match self {
            Facing::North | Facing::West => -1.0,
            Facing::South | Facing::East => 1.0,
        }
    }
}

fn trim_style() -> ElementStyle {
    ElementStyle::filled(SerializableColor::pale_goldenrod())
}

/// Flange labels, named back towards the corner they leave from.
fn flange_labels(corner: Corner) -> (&'static str, &'static str) {
    let north_south = if corner.north_sign() > 0.0 { "South Flange" } else { "North Flange" };
    let east_west = if corner.east_sign() > 0.0 { "West Flange" } else { "East Flange" };
    (north_south, east_west)
}

/// Flange directions for a corner piece: (east, north).
fn flange_directions(corner: Corner) -> (f64, f64) {
    (-corner.east_sign(), corner.north_sign())
}

macro_rules! trim_element {
    ($ty:ident) => {
        impl ElementTrait for $ty {
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
        }
    };
}

/// L-shaped trim wrapping an outside corner of the house.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutsideCorner {
    id: ElementId,
    name: String,
    coords: CoordinateSet,
    style: ElementStyle,
}

impl OutsideCorner {
    pub const THICKNESS: f64 = 1.25;
    pub const WIDTH: f64 = 5.0;

    /// Trim wrapping the wall corner at `base`, which sits at `corner` of the house.
    pub fn new(name: impl Into<String>, base: Point, corner: Corner) -> Self {
        let (east, north) = flange_directions(corner);
        let (ns_label, ew_label) = flange_labels(corner);
        let (x, y) = (base.x, base.y);
        let (e_t, n_t) = (east * Self::THICKNESS, north * Self::THICKNESS);
        let (e_w, n_w) = (east * Self::WIDTH, north * Self::WIDTH);

        let coords = CoordinateSet::from_pairs([
            ("Inner Corner".to_string(), Point::new(x, y)),
            (format!("Inner {ns_label}"), Point::new(x, y + n_w)),
            (format!("Outer {ns_label}"), Point::new(x - e_t, y + n_w)),
            ("Outer Corner".to_string(), Point::new(x - e_t, y - n_t)),
            (format!("Outer {ew_label}"), Point::new(x + e_w, y - n_t)),
            (format!("Inner {ew_label}"), Point::new(x + e_w, y)),
        ]);

        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            coords,
            style: trim_style(),
        }
    }
}

trim_element!(OutsideCorner);

/// Notched trim filling an inside corner of the house.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InsideCorner {
    id: ElementId,
    name: String,
    coords: CoordinateSet,
    style: ElementStyle,
}

impl InsideCorner {
    pub const THICKNESS: f64 = 1.0;
    pub const WIDTH: f64 = 2.0;

    pub fn new(name: impl Into<String>, base: Point, corner: Corner) -> Self {
        let (east, north) = flange_directions(corner);
        let (ns_label, ew_label) = flange_labels(corner);
        let (x, y) = (base.x, base.y);
        let (e_t, n_t) = (east * Self::THICKNESS, north * Self::THICKNESS);
        let (e_w, n_w) = (east * Self::WIDTH, north * Self::WIDTH);

        let coords = CoordinateSet::from_pairs([
            ("Inner Corner".to_string(), Point::new(x, y)),
            (format!("Inner {ns_label}"), Point::new(x, y + n_w)),
            (format!("Outer {ns_label}"), Point::new(x + e_t, y + n_w)),
            (format!("Outer {ew_label}"), Point::new(x + e_w, y + n_t)),
            (format!("Inner {ew_label}"), Point::new(x + e_w, y)),
        ]);

        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            coords,
            style: trim_style(),
        }
    }
}

trim_element!(InsideCorner);

/// A straight strip of siding along a wall.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WallSiding {
    id: ElementId,
    name: String,
    coords: CoordinateSet,
    style: ElementStyle,
}

impl WallSiding {
    pub const THICKNESS: f64 = 0.5;

    /// Siding from `from` to `to` on a wall facing `facing`.
    ///
    /// The inner face lies on the wall line through `from`. Either end may be
    /// infinite for walls that run off the plan.
    pub fn new(name: impl Into<String>, from: Point, to: Point, facing: Facing) -> Self {
        let west = from.x.min(to.x);
        let east = from.x.max(to.x);
        let north = from.y.min(to.y);
        let south = from.y.max(to.y);

        let coords = match facing {
            Facing::North | Facing::South => {
                let inner = from.y;
                let outer = inner + facing.outward() * Self::THICKNESS;
                CoordinateSet::from_pairs([
                    ("Inner West", Point::new(west, inner)),
                    ("Outer West", Point::new(west, outer)),
                    ("Outer East", Point::new(east, outer)),
                    ("Inner East", Point::new(east, inner)),
                ])
            }
            Facing::East | Facing::West => {
                let inner = from.x;
                let outer = inner + facing.outward() * Self::THICKNESS;
                CoordinateSet::from_pairs([
                    ("Inner North", Point::new(inner, north)),
                    ("Outer North", Point::new(outer, north)),
                    ("Outer South", Point::new(outer, south)),
                    ("Inner South", Point::new(inner, south)),
                ])
            }
        };

        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            coords,
            style: trim_style(),
        }
    }
}

trim_element!(WallSiding);
