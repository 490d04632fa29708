//! Deck board layout.
//!
//! Field boards run north-south, placed west to east one pitch apart. Only
//! the unnamed field boards advance the cursor; named boards (borders) are
//! placed at explicit positions. Horizontal boards border the step, the
//! southern edge and the main wall.

use crate::bounds::{BoardDims, Bounds, DeckBounds};
use crate::elements::{BoardFinish, Corner, Element, HorizontalBoard, Mitered, StepConnector, VerticalBoard};
use crate::error::{LayoutError, LayoutResult};

/// Field boards between the door posts, west of the entry border.
const ENTRY_FIELD_BOARDS: usize = 7;
/// Field boards between the entry border and the board the step clips.
const BOARDS_BEFORE_STEP: usize = 12;
/// Field boards east of the clipped board, before the eastern borders.
const BOARDS_AFTER_STEP: usize = 18;

/// Walks field boards west to east.
struct BoardCursor {
    x: f64,
    next: usize,
    pitch: f64,
}

impl BoardCursor {
    fn new(x: f64, pitch: f64) -> Self {
        Self { x, next: 1, pitch }
    }

    /// Place the next field board and advance.
    fn next(&mut self, finish: BoardFinish, dims: BoardDims, north: f64, south: f64) -> VerticalBoard {
        let board = VerticalBoard::new(format!("Deck Board {}", self.next), finish, dims, self.x, north, south);
        self.next += 1;
        self.x += self.pitch;
        board
    }
}

/// Every deck board, in laying order.
#[derive(Debug, Clone)]
pub struct DeckBoards {
    boards: Vec<Element>,
    step_connector: StepConnector,
}

impl DeckBoards {
    pub fn layout(deck: &DeckBounds) -> LayoutResult<Self> {
        let bounds: Bounds = deck.bounds()?;
        let dims = deck.board_dims();
        let t = dims.thickness;
        let ts = dims.pitch();
        let field = BoardFinish::CoastalBluff;
        let border = BoardFinish::SpicedRum;

        let mut boards = Vec::new();
        let step_east = bounds.x_step_east + deck.board_overhang() - deck.step_spacing();

        // Step
        boards.push(Element::HorizontalBoard(HorizontalBoard::new(
            "Step Board 1",
            field,
            dims,
            bounds.y_south - t,
            bounds.x_west,
            step_east,
        )));

        let mut step_board_2 = HorizontalBoard::new("Step Board 2", field, dims, bounds.y_south - t - ts, bounds.x_west, step_east);
        step_board_2.miter(Corner::NorthEast)?;
        boards.push(Element::HorizontalBoard(step_board_2));

        // Step border and the connector into the southern border
        let step_connector = StepConnector::new(dims, &bounds);
        let connector_west = step_connector
            .outer(Corner::NorthWest)
            .map(|p| p.x)
            .ok_or_else(|| LayoutError::malformed("Step Border", "step connector has no north-west corner"))?;

        let mut step_border = HorizontalBoard::new("Step Border", border, dims, bounds.y_step - t, bounds.x_west, connector_west);
        step_border.miter(Corner::NorthWest)?.miter_at(Corner::SouthEast, 22.5)?;
        boards.push(Element::HorizontalBoard(step_border));

        let mut southern_2 = HorizontalBoard::new(
            "Southern Border 2",
            border,
            dims,
            bounds.y_south - t - ts,
            bounds.x_step_east,
            bounds.x_east - ts,
        );
        southern_2.miter_at(Corner::NorthWest, 22.5)?.miter(Corner::NorthEast)?;
        boards.push(Element::HorizontalBoard(southern_2));

        let mut southern_1 = HorizontalBoard::new(
            "Southern Border 1",
            border,
            dims,
            bounds.y_south - t,
            bounds.x_step_east,
            bounds.x_east,
        );
        southern_1.miter(Corner::NorthEast)?;
        boards.push(Element::HorizontalBoard(southern_1));

        // Field boards, west to east
        let mut cursor = BoardCursor::new(bounds.x_west, ts);

        let mut western_border = cursor.next(border, dims, bounds.y_front, bounds.y_step);
        western_border.miter(Corner::SouthEast)?;
        boards.push(Element::VerticalBoard(western_border));
        boards.push(Element::VerticalBoard(cursor.next(border, dims, bounds.y_door, bounds.y_step - ts)));
        for _ in 0..ENTRY_FIELD_BOARDS {
            boards.push(Element::VerticalBoard(cursor.next(field, dims, bounds.y_door, bounds.y_step - ts)));
        }

        let mut entry_border = VerticalBoard::new(
            "Entry Border Deck Board",
            border,
            dims,
            bounds.x_entry - t,
            bounds.y_door,
            bounds.y_main + t,
        );
        entry_border.miter(Corner::SouthEast)?;
        boards.push(Element::VerticalBoard(entry_border));

        let mut main_wall = HorizontalBoard::new("Main Wall Border", border, dims, bounds.y_main, bounds.x_entry - t, bounds.x_east);
        main_wall.miter(Corner::NorthWest)?.miter(Corner::SouthEast)?;
        boards.push(Element::HorizontalBoard(main_wall));

        let north = bounds.y_main + ts;
        for _ in 0..BOARDS_BEFORE_STEP {
            boards.push(Element::VerticalBoard(cursor.next(field, dims, north, bounds.y_step - ts)));
        }

        let mut clipped = cursor.next(field, dims, north, bounds.y_south - 2.0 * ts);
        step_connector.trim_board(&mut clipped)?;
        boards.push(Element::VerticalBoard(clipped));

        for _ in 0..BOARDS_AFTER_STEP {
            boards.push(Element::VerticalBoard(cursor.next(field, dims, north, bounds.y_south - 2.0 * ts)));
        }

        let mut inner_eastern = cursor.next(border, dims, north, bounds.y_south - ts);
        inner_eastern.miter(Corner::SouthWest)?;
        boards.push(Element::VerticalBoard(inner_eastern));

        let mut eastern_border = cursor.next(border, dims, bounds.y_main, bounds.y_south);
        eastern_border.miter(Corner::SouthWest)?.miter(Corner::NorthWest)?;
        boards.push(Element::VerticalBoard(eastern_border));

        log::debug!("Laid {} deck boards plus the step connector", boards.len());

        Ok(Self { boards, step_connector })
    }

    /// The diagonal connector at the step corner.
    pub fn step_connector(&self) -> &StepConnector {
        &self.step_connector
    }

    pub fn boards(&self) -> &[Element] {
        &self.boards
    }

    /// Look up a board by name.
    pub fn find(&self, name: &str) -> Option<&Element> {
        self.boards.iter().find(|board| board.name() == name)
    }

    /// All boards with the connector after the two step boards, in drawing order.
    pub fn into_elements(self) -> Vec<Element> {
        let mut elements = self.boards;
        let at = elements.len().min(2);
        elements.insert(at, Element::StepConnector(self.step_connector));
        elements
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::elements::ElementTrait;
    use crate::foundation::Foundation;
    use crate::posts::Posts;
    use kurbo::Point;

    const EPS: f64 = 1e-9;

    fn layout() -> DeckBoards {
        let foundation = Foundation::default();
        let (_, deck) = Posts::place(&foundation, &DeckBounds::new(&foundation)).unwrap();
        DeckBoards::layout(&deck).unwrap()
    }

    fn vertical<'a>(boards: &'a DeckBoards, name: &str) -> &'a VerticalBoard {
        match boards.find(name) {
            Some(Element::VerticalBoard(board)) => board,
            other => panic!("{name} is not a vertical board: {other:?}"),
        }
    }

    #[test]
    fn test_needs_resolved_bounds() {
        let foundation = Foundation::default();
        let err = DeckBoards::layout(&DeckBounds::new(&foundation)).unwrap_err();
        assert_eq!(err, LayoutError::NotReady);
    }

    #[test]
    fn test_field_boards_are_one_pitch_apart() {
        let boards = layout();
        for k in 1..=42 {
            let name = format!("Deck Board {k}");
            let nw = vertical(&boards, &name).coord("North West").unwrap();
            let expected = 19.375 + 5.75 * (k - 1) as f64;
            assert!((nw.x - expected).abs() < EPS, "{name} at {}", nw.x);
        }
        assert!(boards.find("Deck Board 43").is_none());
    }

    #[test]
    fn test_named_boards_do_not_advance() {
        let boards = layout();
        let entry = vertical(&boards, "Entry Border Deck Board");
        let board_10 = vertical(&boards, "Deck Board 10");
        let entry_nw = entry.coord("North West").unwrap();
        assert!((entry_nw.x - 71.125).abs() < EPS);
        assert!((board_10.coord("North West").unwrap().x - entry_nw.x).abs() < EPS);
    }

    #[test]
    fn test_eastern_border_reaches_deck_edge() {
        let boards = layout();
        let last = vertical(&boards, "Deck Board 42");
        assert!((last.coord("North East").unwrap().x - 260.625).abs() < EPS);
        assert_eq!(last.finish(), BoardFinish::SpicedRum);
    }

    #[test]
    fn test_board_at_step_is_trimmed() {
        let boards = layout();
        let board = vertical(&boards, "Deck Board 22");
        assert!((board.coord("North West").unwrap().x - 140.125).abs() < EPS);
        let east_slope = board.coord("East Slope").unwrap();
        let west_slope = board.coord("West Slope").unwrap();
        assert!((east_slope.x - 145.499).abs() < 1e-3);
        assert!((east_slope.y - 192.25).abs() < EPS);
        assert!((west_slope.x - 140.499).abs() < 1e-3);
        assert_eq!(board.coord("South West"), Some(Point::new(140.125, 187.25)));
    }

    #[test]
    fn test_borders_are_mitered() {
        let boards = layout();
        let Some(Element::HorizontalBoard(main_wall)) = boards.find("Main Wall Border") else {
            panic!("missing main wall border");
        };
        let nw = main_wall.coord("North West").unwrap();
        let shift = 5.5 + 0.125 * std::f64::consts::SQRT_2;
        assert!((nw.x - (71.125 + shift)).abs() < EPS);
        assert!((nw.y - 49.125).abs() < EPS);
    }

    #[test]
    fn test_drawing_order() {
        let elements = layout().into_elements();
        let names: Vec<_> = elements.iter().take(6).map(|e| e.name().to_string()).collect();
        assert_eq!(
            names,
            [
                "Step Board 1",
                "Step Board 2",
                "Deck Step Border Angle",
                "Step Border",
                "Southern Border 2",
                "Southern Border 1"
            ]
        );
        // 2 step, connector, 3 borders, 42 field, entry and main wall borders
        assert_eq!(elements.len(), 50);
    }

    #[test]
    fn test_step_connector_exposed() {
        let boards = layout();
        let connector = boards.step_connector();
        assert_eq!(connector.name(), "Deck Step Border Angle");
        let sw = connector.outer(Corner::SouthWest).unwrap();
        assert!((sw.x - 138.125).abs() < EPS);
        assert!((sw.y - 193.0).abs() < EPS);
    }
}
