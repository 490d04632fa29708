//! Joist and beam framing under the deck.
//!
//! Members are placed against the foundation walls and the post runs, then
//! subdivided: two doubled beams split the span in thirds, inner joists run
//! between them on 16" centers, and short blocking fills the gaps between
//! perimeter posts. The step below the main deck has its own frame.
//!
//! Members whose edges later members are placed against are anchors: if one
//! is malformed the framing pass stops. Every other member is a leaf; a
//! malformed leaf is recorded in the [`BuildReport`] and skipped.

use crate::bounds::DeckBounds;
use crate::deckboards::DeckBoards;
use crate::elements::{
    AngleSupport, Corner, Element, JOIST_THICKNESS, Joist, JoistAxis, JoistEdges, JoistSpec, SUPPORT_WIDTH,
};
use crate::error::{BuildReport, LayoutError, LayoutResult};
use crate::foundation::Foundation;
use crate::posts::Posts;
use crate::view::LayerKind;

/// On-center spacing of inner joists.
const JOIST_SPACING: f64 = 16.0;
/// Joist rows on 16" centers before the step and southern border rows.
const INNER_JOIST_ROWS: usize = 9;
/// Step joists on 16" centers before the one against the east boundary.
const STEP_JOISTS: usize = 8;
/// Width of a doubled beam.
const BEAM_WIDTH: f64 = 2.0 * JOIST_THICKNESS;
/// Depth of the step frame's west boundary past the western posts.
const STEP_FRAME_RETURN: f64 = 3.5;

/// Collects members as they are placed.
struct FramingBuilder {
    members: Vec<(LayerKind, Element)>,
    report: BuildReport,
}

impl FramingBuilder {
    /// Place a member later members depend on.
    fn anchor(&mut self, layer: LayerKind, axis: JoistAxis, name: &str, spec: JoistSpec) -> LayoutResult<JoistEdges> {
        let joist = Joist::new(axis, name, spec)?;
        let edges = joist.edges();
        self.members.push((layer, Element::Joist(joist)));
        Ok(edges)
    }

    /// Place a member nothing depends on.
    fn leaf(&mut self, layer: LayerKind, axis: JoistAxis, name: impl Into<String>, spec: JoistSpec) {
        match Joist::new(axis, name, spec) {
            Ok(joist) => self.members.push((layer, Element::Joist(joist))),
            Err(err) => self.report.record(err),
        }
    }

    /// A doubled beam: two members meeting on `center`.
    fn beam(&mut self, name: &str, center: f64, north: f64, south: f64) -> LayoutResult<[JoistEdges; 2]> {
        let span = JoistSpec::new().north(north).south(south);
        Ok([
            self.anchor(LayerKind::Framing, JoistAxis::Vertical, &format!("{name} 1"), span.east(center))?,
            self.anchor(LayerKind::Framing, JoistAxis::Vertical, &format!("{name} 2"), span.west(center))?,
        ])
    }
}

/// The complete frame.
#[derive(Debug, Clone)]
pub struct Framing {
    members: Vec<(LayerKind, Element)>,
    west_beam: [JoistEdges; 2],
    east_beam: [JoistEdges; 2],
    report: BuildReport,
}

impl Framing {
    pub fn build(foundation: &Foundation, deck: &DeckBounds, boards: &DeckBoards, posts: &Posts) -> LayoutResult<Self> {
        use JoistAxis::{Horizontal, Vertical};
        use LayerKind::{Framing as Main, StepFraming as Step};

        let bounds = deck.bounds()?;
        let western = posts.western_posts();
        let eastern = posts.eastern_posts();
        let southern = posts.southern_posts();
        let spec = JoistSpec::new;

        let mut b = FramingBuilder {
            members: Vec::new(),
            report: BuildReport::new(),
        };

        // Anchors against the house
        let office_wall = b.anchor(
            Main,
            Vertical,
            "Office Wall Anchor Joist",
            spec()
                .west(foundation.front_corner().x)
                .north(foundation.door_west().y)
                .south(western.south_edge()),
        )?;
        let main_wall = b.anchor(
            Main,
            Horizontal,
            "Main Wall Anchor Joist",
            spec()
                .north(foundation.main_west().y)
                .west(office_wall.east)
                .east(eastern.east_edge()),
        )?;

        // Doorway
        let entry_wall = b.anchor(
            Main,
            Vertical,
            "Entry Wall Anchor Joist",
            spec()
                .east(foundation.door_east().x)
                .north(foundation.door_east().y)
                .south(main_wall.north),
        )?;
        let door_anchor = b.anchor(
            Main,
            Horizontal,
            "Door Anchor Joist",
            spec()
                .north(foundation.door_west().y)
                .west(office_wall.east)
                .east(entry_wall.west),
        )?;
        b.leaf(
            Main,
            Horizontal,
            "Entryway Joist",
            spec()
                .north((door_anchor.south + main_wall.north) / 2.0 - JOIST_THICKNESS / 2.0)
                .west(office_wall.east)
                .east(entry_wall.west),
        );

        // Post supports
        let outer_eastern = b.anchor(
            Main,
            Vertical,
            "Outer Eastern Post Joist",
            spec()
                .west(eastern.east_edge())
                .north(main_wall.north)
                .south(southern.south_edge()),
        )?;
        let outer_southern = b.anchor(
            Main,
            Horizontal,
            "Outer Southern Post Joist",
            spec()
                .north(southern.south_edge())
                .west(southern.west_edge())
                .east(outer_eastern.east),
        )?;
        let inner_eastern = b.anchor(
            Main,
            Vertical,
            "Inner Eastern Post Joist",
            spec()
                .east(eastern.west_edge())
                .north(main_wall.south)
                .south(outer_southern.north),
        )?;
        let inner_southern = b.anchor(
            Main,
            Horizontal,
            "Inner Southern Post Joist",
            spec()
                .south(southern.north_edge())
                .west(southern.west_edge())
                .east(inner_eastern.west),
        )?;
        let outer_western = b.anchor(
            Main,
            Vertical,
            "Outer Western Post Joist",
            spec()
                .east(western.west_edge())
                .north(foundation.front_corner().y)
                .south(western.south_edge()),
        )?;

        // Beams at the thirds of the span, rounded down to 1/8" with the
        // remainder going to the center bay
        let span = inner_eastern.west - office_wall.east - 2.0 * BEAM_WIDTH;
        let third_of_span = ((span / 3.0) * 8.0).floor() / 8.0 + BEAM_WIDTH / 2.0;

        let west_beam = b.beam(
            "Western Beam",
            office_wall.east + third_of_span,
            main_wall.south,
            western.south_edge(),
        )?;
        let east_beam = b.beam(
            "Eastern Beam",
            inner_eastern.west - third_of_span,
            main_wall.south,
            inner_southern.north,
        )?;

        // Step framework
        let step_north = b.anchor(
            Main,
            Horizontal,
            "Step North Boundary",
            spec()
                .north(western.south_edge())
                .west(outer_western.west)
                .east(east_beam[0].west),
        )?;
        let step_east = b.anchor(
            Main,
            Vertical,
            "Step East Boundary",
            spec()
                .east(southern.west_edge())
                .south(outer_southern.south)
                .north(step_north.south),
        )?;

        // Lower step framework
        let lower_north = b.anchor(
            Step,
            Horizontal,
            "Lower Step North Boundary",
            spec()
                .north(western.south_edge())
                .west(western.west_edge())
                .east(southern.west_edge()),
        )?;
        let lower_west = b.anchor(
            Step,
            Vertical,
            "Lower Step West Boundary",
            spec()
                .north(western.south_edge() - STEP_FRAME_RETURN)
                .south(southern.south_edge())
                .east(western.west_edge()),
        )?;
        let lower_east = b.anchor(
            Step,
            Vertical,
            "Lower Step East Boundary",
            spec()
                .east(southern.west_edge())
                .south(southern.south_edge())
                .north(step_north.south),
        )?;
        let lower_south = b.anchor(
            Step,
            Horizontal,
            "Lower Step South Boundary",
            spec()
                .west(lower_west.west)
                .east(lower_east.east + STEP_FRAME_RETURN)
                .north(lower_east.south),
        )?;

        let step_span = spec().north(lower_north.south).south(lower_south.north);
        for i in 0..STEP_JOISTS {
            let west = western.east_edge() + JOIST_SPACING * i as f64;
            b.leaf(Step, Vertical, format!("Step Joist {}", i + 1), step_span.west(west));
        }
        b.leaf(
            Step,
            Vertical,
            format!("Step Joist {}", STEP_JOISTS + 1),
            step_span.west(lower_east.west - JOIST_THICKNESS),
        );

        // Inner joists, one row across all three bays
        let inner_row = |b: &mut FramingBuilder, norths: [f64; 3], row: usize| {
            let bays = [
                ("West", office_wall.east, west_beam[0].west),
                ("Center", west_beam[1].east, east_beam[0].west),
                ("East", east_beam[1].east, inner_eastern.west),
            ];
            for ((bay, west, east), north) in bays.into_iter().zip(norths) {
                b.leaf(
                    Main,
                    Horizontal,
                    format!("{bay} Inner Joist {row}"),
                    spec().north(north).west(west).east(east),
                );
            }
        };

        let t = deck.board_thickness();
        let s = deck.board_spacing();
        let half_joist = JOIST_THICKNESS / 2.0;

        // First row centered under the first board seam south of the main wall border
        let first_row = bounds.y_main + t + s / 2.0 - half_joist;
        for i in 0..INNER_JOIST_ROWS {
            let north = first_row + JOIST_SPACING * i as f64;
            inner_row(&mut b, [north; 3], i + 1);
        }
        let step_border_support = bounds.y_step - t - s / 2.0 - half_joist;
        let southern_border_support = bounds.y_south - 2.0 * t - 1.5 * s - half_joist;
        inner_row(
            &mut b,
            [step_border_support, step_border_support, southern_border_support],
            INNER_JOIST_ROWS + 1,
        );

        // Extra support
        b.leaf(
            Main,
            Horizontal,
            "South Border Step-Side Support",
            spec()
                .west(step_east.east)
                .east(east_beam[0].west)
                .north(step_north.south),
        );

        let connector_sw = boards.step_connector().corner(Corner::SouthWest).ok_or_else(|| {
            LayoutError::malformed("Step Angle Support", "step connector has no south-west corner")
        })?;
        b.members.push((
            Main,
            Element::AngleSupport(AngleSupport::new(
                step_north.south,
                step_east.west,
                deck.board_overhang(),
                connector_sw,
            )),
        ));

        // Blocking between eastern posts: against each post and midway
        let post_on_center = deck.post_spacing() + SUPPORT_WIDTH;
        let east_blocking = spec().west(inner_eastern.east).east(outer_eastern.west);
        for i in 0..4 {
            let north = southern.south_edge() - (4 - i) as f64 * post_on_center;
            let south = north + deck.post_spacing();
            let idx = i * 3 + 1;
            b.leaf(Main, Horizontal, format!("East Border Support {idx}"), east_blocking.north(north));
            b.leaf(
                Main,
                Horizontal,
                format!("East Border Support {}", idx + 1),
                east_blocking.north((north + south) / 2.0 - half_joist),
            );
            b.leaf(Main, Horizontal, format!("East Border Support {}", idx + 2), east_blocking.south(south));
        }

        // Blocking between southern posts; the inner eastern joist closes the last gap
        let south_blocking = spec().north(inner_southern.south).south(outer_southern.north);
        for i in 0..3 {
            let west = eastern.east_edge() - (3 - i) as f64 * post_on_center;
            let east = west + deck.post_spacing();
            let idx = i * 3 + 1;
            b.leaf(Main, Vertical, format!("South Border Support {idx}"), south_blocking.west(west));
            b.leaf(
                Main,
                Vertical,
                format!("South Border Support {}", idx + 1),
                south_blocking.west((west + east) / 2.0 - half_joist),
            );
            if i < 2 {
                b.leaf(Main, Vertical, format!("South Border Support {}", idx + 2), south_blocking.east(east));
            }
        }

        log::debug!(
            "Framed {} members ({} skipped)",
            b.members.len(),
            b.report.errors().len()
        );

        Ok(Self {
            members: b.members,
            west_beam,
            east_beam,
            report: b.report,
        })
    }

    /// The two members of the western beam, west first.
    pub fn west_beam(&self) -> [JoistEdges; 2] {
        self.west_beam
    }

    /// The two members of the eastern beam, west first.
    pub fn east_beam(&self) -> [JoistEdges; 2] {
        self.east_beam
    }

    pub fn members(&self) -> &[(LayerKind, Element)] {
        &self.members
    }

    /// Members that were malformed and skipped.
    pub fn report(&self) -> &BuildReport {
        &self.report
    }

    /// Look up a member by name.
    pub fn find(&self, name: &str) -> Option<&Element> {
        self.members
            .iter()
            .map(|(_, member)| member)
            .find(|member| member.name() == name)
    }

    pub fn into_elements(self) -> Vec<(LayerKind, Element)> {
        self.members
    }
}
