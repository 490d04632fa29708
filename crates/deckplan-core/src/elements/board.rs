//! Deck boards and miter cuts.

use super::{Attribute, CoordinateSet, Corner, ElementId, ElementStyle, ElementTrait, SerializableColor};
use crate::bounds::BoardDims;
use crate::error::{LayoutError, LayoutResult};
use kurbo::Point;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Decking color line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum BoardFinish {
    /// Field boards.
    #[default]
    CoastalBluff,
    /// Border and fascia boards.
    SpicedRum,
}

impl BoardFinish {
    /// Flat fill approximating the board texture.
    pub fn style(self) -> ElementStyle {
        match self {
            BoardFinish::CoastalBluff => ElementStyle::filled(SerializableColor::new(178, 168, 150, 255)),
            BoardFinish::SpicedRum => ElementStyle::filled(SerializableColor::new(128, 72, 48, 255)),
        }
    }
}

/// Number of texture pieces needed to tile a run of `length`.
///
/// One extra piece is always added so a fractional remainder (and the random
/// texture offset) never leaves an uncovered end. Saturates at `usize::MAX`.
pub fn piece_count(length: f64, thickness: f64) -> usize {
    // `as` saturates, and NaN lands on zero
    let whole = (length / thickness).ceil().max(0.0) as usize;
    whole.saturating_add(1)
}

/// Coordinate a miter moves.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CutAxis {
    X,
    Y,
}

/// Shared state of a rectangular board.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct BoardBody {
    id: ElementId,
    name: String,
    finish: BoardFinish,
    dims: BoardDims,
    length: f64,
    coords: CoordinateSet,
    style: ElementStyle,
}

impl BoardBody {
    fn new(name: String, finish: BoardFinish, dims: BoardDims, north: f64, south: f64, west: f64, east: f64) -> Self {
        let coords = CoordinateSet::from_pairs([
            (Corner::NorthWest.label(), Point::new(west, north)),
            (Corner::NorthEast.label(), Point::new(east, north)),
            (Corner::SouthEast.label(), Point::new(east, south)),
            (Corner::SouthWest.label(), Point::new(west, south)),
        ]);
        Self {
            id: Uuid::new_v4(),
            name,
            finish,
            dims,
            length: (south - north).max(east - west),
            coords,
            style: finish.style(),
        }
    }
}

/// Boards that can take angled corner cuts.
pub trait Mitered {
    /// For a cut at `corner`: the other corner on the same end, the axis the
    /// cut moves along and the direction (+1 / -1) towards the board's middle.
    fn miter_data(corner: Corner) -> (Corner, CutAxis, f64);

    /// Thickness and spacing used for the cut.
    fn dims(&self) -> BoardDims;

    /// Display name, for error reporting.
    fn board_name(&self) -> &str;

    /// Outline coordinates, mutated in place by cuts.
    fn coords_mut(&mut self) -> &mut CoordinateSet;

    /// Cut `corner` at 45 degrees.
    fn miter(&mut self, corner: Corner) -> LayoutResult<&mut Self>
    where
        Self: Sized,
    {
        self.miter_at(corner, 45.0)
    }

    /// Cut `corner` at `angle` degrees.
    ///
    /// The cut corner moves `T·tan(angle)` plus half the board gap measured
    /// along the cut, `(S/2)/cos(angle)`; the other corner on the same end
    /// moves by the gap term only. Cuts mutate the stored corners, so later
    /// cuts see earlier ones.
    fn miter_at(&mut self, corner: Corner, angle: f64) -> LayoutResult<&mut Self>
    where
        Self: Sized,
    {
        let dims = self.dims();
        let angle_rad = angle.to_radians();
        let cut_t = dims.thickness * angle_rad.tan();
        let cut_distance = (dims.spacing / 2.0) / angle_rad.cos();

        let (point_corner, axis, direction) = Self::miter_data(corner);
        let name = self.board_name().to_string();
        let coords = self.coords_mut();
        for (target, amount) in [(corner, cut_t + cut_distance), (point_corner, cut_distance)] {
            let point = coords.get_mut(target.label()).ok_or_else(|| {
                LayoutError::malformed(&name, format!("no '{}' corner to miter", target.label()))
            })?;
            match axis {
                CutAxis::X => point.x += direction * amount,
                CutAxis::Y => point.y += direction * amount,
            }
        }
        Ok(self)
    }
}

macro_rules! board_element {
    ($ty:ident) => {
        impl $ty {
            /// Texture pieces needed along the board.
            pub fn piece_count(&self) -> usize {
                piece_count(self.body.length, self.body.dims.thickness)
            }

            /// Length along the long axis, before any cuts.
            pub fn length(&self) -> f64 {
                self.body.length
            }

            pub fn finish(&self) -> BoardFinish {
                self.body.finish
            }

            /// Look up an outline point by label.
            pub fn coord(&self, label: &str) -> Option<Point> {
                self.body.coords.get(label)
            }
        }

        impl ElementTrait for $ty {
            fn id(&self) -> ElementId {
                self.body.id
            }

            fn name(&self) -> &str {
                &self.body.name
            }

            fn polygon(&self) -> &CoordinateSet {
                &self.body.coords
            }

            fn style(&self) -> &ElementStyle {
                &self.body.style
            }

            fn attributes(&self) -> Vec<Attribute> {
                vec![("Length", self.body.length)]
            }
        }
    };
}

/// A board running north-south.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VerticalBoard {
    body: BoardBody,
}

impl VerticalBoard {
    /// Create a board with its west edge at `west`.
    pub fn new(name: impl Into<String>, finish: BoardFinish, dims: BoardDims, west: f64, north: f64, south: f64) -> Self {
        Self {
            body: BoardBody::new(name.into(), finish, dims, north, south, west, west + dims.thickness),
        }
    }

    /// Replace the outline wholesale (used by the step connector's trim).
    pub(crate) fn replace_coords(&mut self, coords: CoordinateSet) {
        self.body.coords = coords;
    }
}

board_element!(VerticalBoard);

impl Mitered for VerticalBoard {
    fn miter_data(corner: Corner) -> (Corner, CutAxis, f64) {
        match corner {
            Corner::NorthWest => (Corner::NorthEast, CutAxis::Y, 1.0),
            Corner::NorthEast => (Corner::NorthWest, CutAxis::Y, 1.0),
            Corner::SouthWest => (Corner::SouthEast, CutAxis::Y, -1.0),
            Corner::SouthEast => (Corner::SouthWest, CutAxis::Y, -1.0),
        }
    }

    fn dims(&self) -> BoardDims {
        self.body.dims
    }

    fn board_name(&self) -> &str {
        &self.body.name
    }

    fn coords_mut(&mut self) -> &mut CoordinateSet {
        &mut self.body.coords
    }
}

/// A board running east-west.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HorizontalBoard {
    body: BoardBody,
}

impl HorizontalBoard {
    /// Create a board with its north edge at `north`.
    pub fn new(name: impl Into<String>, finish: BoardFinish, dims: BoardDims, north: f64, west: f64, east: f64) -> Self {
        Self {
            body: BoardBody::new(name.into(), finish, dims, north, north + dims.thickness, west, east),
        }
    }
}

board_element!(HorizontalBoard);

impl Mitered for HorizontalBoard {
    fn miter_data(corner: Corner) -> (Corner, CutAxis, f64) {
        match corner {
            Corner::NorthWest => (Corner::SouthWest, CutAxis::X, 1.0),
            Corner::SouthWest => (Corner::NorthWest, CutAxis::X, 1.0),
            Corner::NorthEast => (Corner::SouthEast, CutAxis::X, -1.0),
            Corner::SouthEast => (Corner::NorthEast, CutAxis::X, -1.0),
        }
    }

    fn dims(&self) -> BoardDims {
        self.body.dims
    }

    fn board_name(&self) -> &str {
        &self.body.name
    }

    fn coords_mut(&mut self) -> &mut CoordinateSet {
        &mut self.body.coords
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::elements::is_simple_polygon;

    const DIMS: BoardDims = BoardDims {
        thickness: 5.5,
        spacing: 0.25,
    };

    #[test]
    fn test_vertical_board_footprint() {
        let board = VerticalBoard::new("Deck Board 1", BoardFinish::CoastalBluff, DIMS, 10.0, 20.0, 120.0);
        assert_eq!(board.coord("North West"), Some(Point::new(10.0, 20.0)));
        assert_eq!(board.coord("South East"), Some(Point::new(15.5, 120.0)));
        assert!((board.length() - 100.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_miter_45_shift() {
        let mut board = HorizontalBoard::new("Border", BoardFinish::SpicedRum, DIMS, 0.0, 0.0, 100.0);
        board.miter(Corner::NorthWest).unwrap();

        let expected = 5.5 + 0.125 * std::f64::consts::SQRT_2;
        let nw = board.coord("North West").unwrap();
        let sw = board.coord("South West").unwrap();
        assert!((nw.x - expected).abs() < 1e-9);
        assert!((nw.y - 0.0).abs() < f64::EPSILON);
        assert!((sw.x - 0.125 * std::f64::consts::SQRT_2).abs() < 1e-9);
        // Far end untouched
        assert_eq!(board.coord("North East"), Some(Point::new(100.0, 0.0)));
    }

    #[test]
    fn test_vertical_miter_moves_along_y() {
        let mut board = VerticalBoard::new("Deck Board", BoardFinish::CoastalBluff, DIMS, 0.0, 0.0, 50.0);
        board.miter(Corner::SouthEast).unwrap();
        let se = board.coord("South East").unwrap();
        let sw = board.coord("South West").unwrap();
        assert!((se.y - (50.0 - 5.5 - 0.125 * std::f64::consts::SQRT_2)).abs() < 1e-9);
        assert!((sw.y - (50.0 - 0.125 * std::f64::consts::SQRT_2)).abs() < 1e-9);
        assert!((se.x - 5.5).abs() < f64::EPSILON);
    }

    #[test]
    fn test_miters_compose_on_both_ends() {
        let mut board = HorizontalBoard::new("Main Wall Border", BoardFinish::SpicedRum, DIMS, 0.0, 0.0, 100.0);
        board.miter(Corner::NorthWest).unwrap().miter(Corner::SouthEast).unwrap();
        assert!(is_simple_polygon(&board.polygon().points()));
        let nw = board.coord("North West").unwrap();
        let se = board.coord("South East").unwrap();
        assert!(nw.x > 5.5);
        assert!(se.x < 100.0 - 5.5);
    }

    #[test]
    fn test_miters_on_shared_corner_are_cumulative() {
        let mut once = HorizontalBoard::new("A", BoardFinish::SpicedRum, DIMS, 0.0, 0.0, 100.0);
        once.miter_at(Corner::NorthWest, 45.0).unwrap();
        let after_first = once.coord("South West").unwrap().x;
        once.miter_at(Corner::SouthWest, 22.5).unwrap();
        let gap = (0.25 / 2.0) / 22.5_f64.to_radians().cos();
        let cut = 5.5 * 22.5_f64.to_radians().tan();
        let sw = once.coord("South West").unwrap().x;
        assert!((sw - (after_first + cut + gap)).abs() < 1e-9);
    }

    #[test]
    fn test_miter_missing_corner_is_malformed() {
        let mut board = VerticalBoard::new("Trimmed", BoardFinish::CoastalBluff, DIMS, 0.0, 0.0, 50.0);
        board.replace_coords(CoordinateSet::from_pairs([
            ("North West", Point::new(0.0, 0.0)),
            ("North East", Point::new(5.5, 0.0)),
            ("East Slope", Point::new(5.5, 40.0)),
        ]));
        let err = board.miter(Corner::SouthEast).unwrap_err();
        assert!(matches!(err, LayoutError::MalformedInput { .. }));
    }

    #[test]
    fn test_piece_count_covers_run() {
        for &(length, thickness) in &[(1.0, 5.5), (5.5, 5.5), (100.0, 5.5), (141.25, 5.5), (0.3, 0.1)] {
            let pieces = piece_count(length, thickness) as f64;
            assert!(pieces >= length / thickness);
            assert!(pieces * thickness >= length + thickness - 1e-9);
        }
        assert_eq!(piece_count(11.0, 5.5), 3);
    }

    #[test]
    fn test_piece_count_saturates() {
        assert_eq!(piece_count(1e300, 1e-10), usize::MAX);
        assert_eq!(piece_count(f64::INFINITY, 5.5), usize::MAX);
        assert_eq!(piece_count(5.5, 0.0), usize::MAX);
        assert_eq!(piece_count(0.0, 5.5), 1);
    }
}
