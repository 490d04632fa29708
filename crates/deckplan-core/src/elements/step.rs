//! The diagonal border board across the step corner.

use super::{Attribute, BoardFinish, CoordinateSet, Corner, ElementId, ElementStyle, ElementTrait, VerticalBoard, piece_count};
use crate::bounds::{BoardDims, Bounds};
use crate::error::{LayoutError, LayoutResult};
use kurbo::{Point, Vec2};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Miter angle where the connector meets the straight borders.
const CONNECTOR_ANGLE: f64 = 22.5;

/// A 45 degree board joining the step border to the southern border.
///
/// The outer outline is the board before the spacing gap is taken off; the
/// drawn outline sits inside it by half the gap, measured along the 22.5
/// degree cuts and split over both axes.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StepConnector {
    id: ElementId,
    dims: BoardDims,
    outer_coords: CoordinateSet,
    coords: CoordinateSet,
    length: f64,
    /// North edge of the field boards south of the step border.
    trim_south: f64,
    style: ElementStyle,
}

impl StepConnector {
    pub fn new(dims: BoardDims, bounds: &Bounds) -> Self {
        let t = dims.thickness;
        let ts = dims.pitch();
        let angle = CONNECTOR_ANGLE.to_radians();
        let cut_t = t * angle.tan();
        let cut_distance = ((dims.spacing / 2.0) / angle.cos()) / std::f64::consts::SQRT_2;

        let y_delta = bounds.y_south - ts - bounds.y_step;
        let diagonal = Vec2::new(y_delta, y_delta);

        let ne = Point::new(bounds.x_step_east + cut_t, bounds.y_south - ts - t);
        let se = Point::new(bounds.x_step_east, bounds.y_south - ts);
        let nw = ne - diagonal;
        let sw = se - diagonal;

        let outer_coords = CoordinateSet::from_pairs([
            (Corner::NorthWest.label(), nw),
            (Corner::NorthEast.label(), ne),
            (Corner::SouthEast.label(), se),
            (Corner::SouthWest.label(), sw),
        ]);

        let inset = Vec2::new(cut_distance, cut_distance);
        let coords = CoordinateSet::from_pairs([
            (Corner::NorthWest.label(), nw + inset),
            (Corner::NorthEast.label(), ne - inset),
            (Corner::SouthEast.label(), se - inset),
            (Corner::SouthWest.label(), sw + inset),
        ]);

        Self {
            id: Uuid::new_v4(),
            dims,
            outer_coords,
            coords,
            length: std::f64::consts::SQRT_2 * y_delta,
            trim_south: bounds.y_step - ts,
            style: BoardFinish::SpicedRum.style(),
        }
    }

    /// Outline before the spacing inset.
    pub fn outer_coords(&self) -> &CoordinateSet {
        &self.outer_coords
    }

    /// A corner of the outer outline.
    pub fn outer(&self, corner: Corner) -> Option<Point> {
        self.outer_coords.get(corner.label())
    }

    /// A corner of the drawn outline.
    pub fn corner(&self, corner: Corner) -> Option<Point> {
        self.coords.get(corner.label())
    }

    /// Length along the diagonal.
    pub fn length(&self) -> f64 {
        self.length
    }

    /// Texture pieces along the diagonal, with one extra for the angled ends.
    pub fn piece_count(&self) -> usize {
        piece_count(self.length, self.dims.thickness).saturating_add(1)
    }

    pub fn finish(&self) -> BoardFinish {
        BoardFinish::SpicedRum
    }

    /// Clip a field board that runs into the connector.
    ///
    /// The board's south-east corner stays; the slope points follow the
    /// connector's north-east and north-west edges out by the spacing gap,
    /// and the south-west corner pulls up to the step border.
    pub fn trim_board(&self, board: &mut VerticalBoard) -> LayoutResult<()> {
        let name = board.name().to_string();
        let corner = |c: Corner| {
            board
                .coord(c.label())
                .ok_or_else(|| LayoutError::malformed(&name, format!("no '{}' corner to trim", c.label())))
        };
        let outer = |c: Corner| {
            self.outer(c)
                .ok_or_else(|| LayoutError::malformed("Deck Step Border Angle", format!("no outer '{}' corner", c.label())))
        };

        let north_west = corner(Corner::NorthWest)?;
        let north_east = corner(Corner::NorthEast)?;
        let south_east = corner(Corner::SouthEast)?;
        let south_west = corner(Corner::SouthWest)?;

        let gap = self.dims.spacing * CONNECTOR_ANGLE.to_radians().sin();
        let east_slope = Point::new(outer(Corner::NorthEast)?.x + gap, south_east.y);
        let west_slope = Point::new(outer(Corner::NorthWest)?.x + gap, self.trim_south);

        board.replace_coords(CoordinateSet::from_pairs([
            (Corner::NorthWest.label(), north_west),
            (Corner::NorthEast.label(), north_east),
            (Corner::SouthEast.label(), south_east),
            ("East Slope", east_slope),
            ("West Slope", west_slope),
            (Corner::SouthWest.label(), Point::new(south_west.x, self.trim_south)),
        ]));
        log::debug!("{} trimmed against the step connector", name);
        Ok(())
    }
}

impl ElementTrait for StepConnector {
    fn id(&self) -> ElementId {
        self.id
    }

    fn name(&self) -> &str {
        "Deck Step Border Angle"
    }

    fn polygon(&self) -> &CoordinateSet {
        &self.coords
    }

    fn style(&self) -> &ElementStyle {
        &self.style
    }

    fn attributes(&self) -> Vec<Attribute> {
        vec![("Length", self.length)]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::elements::is_simple_polygon;

    const EPS: f64 = 1e-3;

    fn bounds() -> Bounds {
        Bounds {
            x_west: 19.375,
            x_office: 25.125,
            x_entry: 76.625,
            x_step_east: 143.125,
            x_east: 260.625,
            y_door: 25.125,
            y_main: 49.125,
            y_front: 111.625,
            y_step: 193.0,
            y_south: 203.75,
        }
    }

    fn close(p: Point, x: f64, y: f64) -> bool {
        (p.x - x).abs() < EPS && (p.y - y).abs() < EPS
    }

    #[test]
    fn test_outer_outline() {
        let connector = StepConnector::new(BoardDims::default(), &bounds());
        assert!(close(connector.outer(Corner::NorthEast).unwrap(), 145.403, 192.5));
        assert!(close(connector.outer(Corner::SouthEast).unwrap(), 143.125, 198.0));
        assert!(close(connector.outer(Corner::NorthWest).unwrap(), 140.403, 187.5));
        assert!(close(connector.outer(Corner::SouthWest).unwrap(), 138.125, 193.0));
    }

    #[test]
    fn test_inset_outline() {
        let connector = StepConnector::new(BoardDims::default(), &bounds());
        let inset = (0.125 / 22.5_f64.to_radians().cos()) / std::f64::consts::SQRT_2;
        let outer_sw = connector.outer(Corner::SouthWest).unwrap();
        let sw = connector.corner(Corner::SouthWest).unwrap();
        assert!((sw.x - outer_sw.x - inset).abs() < 1e-12);
        assert!((sw.y - outer_sw.y - inset).abs() < 1e-12);
        let outer_ne = connector.outer(Corner::NorthEast).unwrap();
        let ne = connector.corner(Corner::NorthEast).unwrap();
        assert!((outer_ne.x - ne.x - inset).abs() < 1e-12);
        assert!(is_simple_polygon(&connector.polygon().points()));
    }

    #[test]
    fn test_piece_count() {
        let connector = StepConnector::new(BoardDims::default(), &bounds());
        // Diagonal of a 5" drop
        assert!((connector.length() - 5.0 * std::f64::consts::SQRT_2).abs() < 1e-12);
        assert_eq!(connector.piece_count(), 4);
    }

    #[test]
    fn test_piece_count_saturates_for_thin_boards() {
        let dims = BoardDims {
            thickness: 1e-300,
            spacing: 0.25,
        };
        let connector = StepConnector::new(dims, &bounds());
        assert!(connector.length().is_finite());
        assert_eq!(connector.piece_count(), usize::MAX);
    }

    #[test]
    fn test_trim_board() {
        let connector = StepConnector::new(BoardDims::default(), &bounds());
        let mut board = VerticalBoard::new("Deck Board 22", BoardFinish::CoastalBluff, BoardDims::default(), 140.125, 55.125, 192.25);
        connector.trim_board(&mut board).unwrap();

        let labels: Vec<_> = board.polygon().labels().collect();
        assert_eq!(
            labels,
            ["North West", "North East", "South East", "East Slope", "West Slope", "South West"]
        );
        assert!(close(board.coord("East Slope").unwrap(), 145.499, 192.25));
        assert!(close(board.coord("West Slope").unwrap(), 140.499, 187.25));
        assert!(close(board.coord("South West").unwrap(), 140.125, 187.25));
        assert!(close(board.coord("South East").unwrap(), 145.625, 192.25));
        assert!(is_simple_polygon(&board.polygon().points()));
    }

    #[test]
    fn test_trim_needs_all_corners() {
        let connector = StepConnector::new(BoardDims::default(), &bounds());
        let mut board = VerticalBoard::new("Deck Board 22", BoardFinish::CoastalBluff, BoardDims::default(), 140.125, 55.125, 192.25);
        board.replace_coords(CoordinateSet::from_pairs([
            ("North West", Point::new(140.125, 55.125)),
            ("North East", Point::new(145.625, 55.125)),
            ("South East", Point::new(145.625, 192.25)),
        ]));
        let err = connector.trim_board(&mut board).unwrap_err();
        assert_eq!(err, LayoutError::malformed("Deck Board 22", "no 'South West' corner to trim"));
    }
}
