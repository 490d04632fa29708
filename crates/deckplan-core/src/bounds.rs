//! Deck bounds: the working rectangle every board and joist is placed in.
//!
//! Bounds are resolved in two passes. The provisional bounds answer
//! everything that depends only on the foundation (the west and east edges,
//! the door-aligned rows). Post placement uses them to walk the eastern and
//! southern post runs, which fixes where the southern edge and the step
//! corner land. [`DeckBounds::resolve`] then produces the final bounds from
//! that [`PostBackfill`]. Reading [`DeckBounds::bounds`] before the second
//! pass is an error rather than a silent fallback to the placeholders.

use crate::error::{LayoutError, LayoutResult};
use crate::foundation::Foundation;
use kurbo::Point;
use serde::{Deserialize, Serialize};

/// Width of a deck board.
pub const BOARD_THICKNESS: f64 = 5.5;
/// Gap between neighboring deck boards.
pub const BOARD_SPACING: f64 = 0.25;
/// Clear gap between a house wall and the first post.
pub const POST_TO_HOUSE: f64 = 4.0;
/// Clear gap between neighboring posts.
pub const POST_SPACING: f64 = 33.0;
/// How far deck boards overhang the outer framing.
pub const BOARD_OVERHANG: f64 = 0.75;
/// Gap between the step boards and the deck border.
pub const STEP_SPACING: f64 = 0.25;
/// Thickness of the fascia between a post and the deck edge.
pub const FASCIA_THICKNESS: f64 = 1.5;
/// Deck boards needed to span the full deck width.
pub const BOARDS_ACROSS: f64 = 41.0;
/// Deck boards that fit between the door posts.
pub const BOARDS_IN_ENTRY: f64 = 9.0;

/// Southern edge used before post placement resolves it.
pub const PLACEHOLDER_SOUTH: f64 = 250.0;
/// Step corner easting used before post placement resolves it.
pub const PLACEHOLDER_STEP_EAST: f64 = 100.0;

/// Thickness and spacing of deck boards, as used by miter cuts.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BoardDims {
    pub thickness: f64,
    pub spacing: f64,
}

impl BoardDims {
    /// Thickness plus spacing: the on-center pitch of adjacent boards.
    pub fn pitch(&self) -> f64 {
        self.thickness + self.spacing
    }
}

impl Default for BoardDims {
    fn default() -> Self {
        Self {
            thickness: BOARD_THICKNESS,
            spacing: BOARD_SPACING,
        }
    }
}

/// Edges that only post placement can determine.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PostBackfill {
    /// Southern edge of the deck.
    pub y_south: f64,
    /// Eastern edge of the step cut.
    pub x_step_east: f64,
}

/// Snapshot of the deck's working edges.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Bounds {
    pub x_west: f64,
    pub x_office: f64,
    pub x_entry: f64,
    pub x_step_east: f64,
    pub x_east: f64,
    pub y_door: f64,
    pub y_main: f64,
    pub y_front: f64,
    pub y_step: f64,
    pub y_south: f64,
}

/// Derived deck geometry over the foundation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DeckBounds {
    front_corner: Point,
    door_west: Point,
    door_east: Point,
    main_west: Point,
    backfill: Option<PostBackfill>,
}

impl DeckBounds {
    /// Provisional bounds over a foundation.
    pub fn new(foundation: &Foundation) -> Self {
        Self {
            front_corner: foundation.front_corner(),
            door_west: foundation.door_west(),
            door_east: foundation.door_east(),
            main_west: foundation.main_west(),
            backfill: None,
        }
    }

    /// Final bounds from post placement.
    ///
    /// Resolution happens once: resolving already-resolved bounds fails and
    /// leaves the original untouched.
    pub fn resolve(&self, backfill: PostBackfill) -> LayoutResult<DeckBounds> {
        if self.backfill.is_some() {
            return Err(LayoutError::AlreadyResolved);
        }
        log::debug!(
            "Deck bounds resolved: south edge {:.3}, step east {:.3}",
            backfill.y_south,
            backfill.x_step_east
        );
        Ok(Self {
            backfill: Some(backfill),
            ..self.clone()
        })
    }

    /// Check if post placement has resolved these bounds.
    pub fn is_resolved(&self) -> bool {
        self.backfill.is_some()
    }

    pub fn board_thickness(&self) -> f64 {
        BOARD_THICKNESS
    }

    pub fn board_spacing(&self) -> f64 {
        BOARD_SPACING
    }

    pub fn board_dims(&self) -> BoardDims {
        BoardDims::default()
    }

    pub fn post_to_house(&self) -> f64 {
        POST_TO_HOUSE
    }

    pub fn post_spacing(&self) -> f64 {
        POST_SPACING
    }

    pub fn board_overhang(&self) -> f64 {
        BOARD_OVERHANG
    }

    pub fn step_spacing(&self) -> f64 {
        STEP_SPACING
    }

    /// Post face to deck edge: the fascia plus the board overhang.
    pub fn post_to_edge(&self) -> f64 {
        FASCIA_THICKNESS + BOARD_OVERHANG
    }

    /// Slack left on each side after fitting the entry boards between the
    /// door posts.
    pub fn entry_padding(&self) -> f64 {
        let width = self.door_east.x - self.door_west.x;
        let used_by_boards = BOARDS_IN_ENTRY * BOARD_THICKNESS + (BOARDS_IN_ENTRY - 1.0) * BOARD_SPACING;
        (width - used_by_boards) / 2.0
    }

    /// Clearance between the house walls and the first board row.
    ///
    /// Tied to the entry padding so the wall gap matches the gap at the door
    /// posts.
    pub fn wall_spacing(&self) -> f64 {
        self.entry_padding()
    }

    /// Bounds after post placement.
    pub fn bounds(&self) -> LayoutResult<Bounds> {
        let backfill = self.backfill.ok_or(LayoutError::NotReady)?;
        Ok(self.compute(backfill))
    }

    /// Bounds with the placeholder southern edge and step corner until post
    /// placement has run; the resolved bounds afterwards.
    ///
    /// Only the foundation-derived fields are meaningful before resolution.
    pub fn provisional_bounds(&self) -> Bounds {
        self.compute(self.backfill.unwrap_or(PostBackfill {
            y_south: PLACEHOLDER_SOUTH,
            x_step_east: PLACEHOLDER_STEP_EAST,
        }))
    }

    fn compute(&self, backfill: PostBackfill) -> Bounds {
        let t = BOARD_THICKNESS;
        let ts = BOARD_THICKNESS + BOARD_SPACING;
        let padding = self.entry_padding();
        let wall = self.wall_spacing();

        let x_west = self.front_corner.x + padding - ts;

        Bounds {
            x_west,
            x_office: x_west + ts,
            x_entry: self.door_east.x - padding,
            x_step_east: backfill.x_step_east,
            x_east: x_west + ts * BOARDS_ACROSS + t,

            y_door: self.door_east.y + wall,
            y_main: self.main_west.y + wall,
            y_front: self.front_corner.y + wall,
            // Two boards on the step, overlapped by the fascia overhang
            y_step: backfill.y_south - ts - t - STEP_SPACING + BOARD_OVERHANG,
            y_south: backfill.y_south,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f64 = 1e-9;

    fn deck() -> DeckBounds {
        DeckBounds::new(&Foundation::default())
    }

    #[test]
    fn test_entry_padding() {
        let deck = deck();
        // (53.75 - 9 * 5.5 - 8 * 0.25) / 2
        assert!((deck.entry_padding() - 1.125).abs() < EPS);
        assert!((deck.wall_spacing() - deck.entry_padding()).abs() < f64::EPSILON);

        // The wall gap sets the first rows as well as the door posts
        let foundation = Foundation::default();
        let bounds = deck.provisional_bounds();
        assert!((bounds.x_office - bounds.x_west - deck.board_dims().pitch()).abs() < EPS);
        assert!((bounds.y_door - foundation.door_east().y - deck.entry_padding()).abs() < EPS);
        assert!((bounds.y_main - foundation.main_west().y - deck.wall_spacing()).abs() < EPS);
    }

    #[test]
    fn test_entry_run_is_symmetric() {
        let deck = deck();
        let bounds = deck.provisional_bounds();
        let run = 9.0 * BOARD_THICKNESS + 8.0 * BOARD_SPACING;
        let door_west = Foundation::default().door_west().x;
        let door_east = Foundation::default().door_east().x;

        assert!((bounds.x_office - door_west - deck.entry_padding()).abs() < EPS);
        assert!((door_east - bounds.x_entry - deck.entry_padding()).abs() < EPS);
        assert!((bounds.x_entry - bounds.x_office - run).abs() < EPS);
    }

    #[test]
    fn test_foundation_derived_edges() {
        let bounds = deck().provisional_bounds();
        assert!((bounds.x_west - 19.375).abs() < EPS);
        assert!((bounds.x_office - 25.125).abs() < EPS);
        assert!((bounds.x_entry - 76.625).abs() < EPS);
        assert!((bounds.x_east - 260.625).abs() < EPS);
        assert!((bounds.y_door - 25.125).abs() < EPS);
        assert!((bounds.y_main - 49.125).abs() < EPS);
        assert!((bounds.y_front - 111.625).abs() < EPS);
    }

    #[test]
    fn test_bounds_not_ready_before_posts() {
        let deck = deck();
        assert!(!deck.is_resolved());
        assert_eq!(deck.bounds(), Err(LayoutError::NotReady));
        let provisional = deck.provisional_bounds();
        assert!((provisional.y_south - 250.0).abs() < f64::EPSILON);
        assert!((provisional.x_step_east - 100.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_resolve_once() {
        let provisional = deck();
        let resolved = provisional
            .resolve(PostBackfill {
                y_south: 203.75,
                x_step_east: 143.125,
            })
            .unwrap();

        let bounds = resolved.bounds().unwrap();
        assert!((bounds.y_south - 203.75).abs() < f64::EPSILON);
        assert!((bounds.x_step_east - 143.125).abs() < f64::EPSILON);
        assert!((resolved.provisional_bounds().y_south - 203.75).abs() < f64::EPSILON);
        // Two boards plus overhang above the southern edge
        assert!((bounds.y_step - 193.0).abs() < EPS);

        let again = resolved.resolve(PostBackfill {
            y_south: 1.0,
            x_step_east: 1.0,
        });
        assert_eq!(again, Err(LayoutError::AlreadyResolved));
        assert!((resolved.bounds().unwrap().y_south - 203.75).abs() < f64::EPSILON);

        // The provisional value is not changed by resolution
        assert!((provisional.provisional_bounds().y_south - 250.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_post_to_edge() {
        assert!((deck().post_to_edge() - 2.25).abs() < f64::EPSILON);
    }
}
