//! Piers under the beams and the step.

use crate::elements::{Element, JOIST_THICKNESS, SUPPORT_WIDTH, Support, SupportKind};
use crate::framing::Framing;
use crate::posts::Posts;
use kurbo::Point;

/// Interior piers.
#[derive(Debug, Clone)]
pub struct Piers {
    piers: Vec<Support>,
}

impl Piers {
    /// Piers at the thirds of each beam, one at the south end of the western
    /// beam, and one under the front of the step.
    ///
    /// Both beams share the western beam's thirds so the piers line up.
    pub fn place(framing: &Framing, posts: &Posts) -> Self {
        let half = SUPPORT_WIDTH / 2.0;
        let [west_beam, _] = framing.west_beam();
        let [east_beam, _] = framing.east_beam();

        let third = ((west_beam.length() / 3.0) * 8.0).floor() / 8.0;
        let north_y = west_beam.north + third;
        let south_y = west_beam.south - third;

        let pier = |name: &str, x: f64, y: f64| Support::new(SupportKind::Pier, name, Point::new(x, y));

        let step_x = (posts.southern_posts().west_edge() + posts.western_posts().east_edge()) / 2.0;
        let step_y = posts.southern_posts().center + JOIST_THICKNESS;

        let piers = vec![
            pier("West Beam Support 1", west_beam.east, north_y),
            pier("West Beam Support 2", west_beam.east, south_y),
            pier("West Beam Support 3", west_beam.east, west_beam.south - half),
            pier("East Beam Support 1", east_beam.east, north_y),
            pier("East Beam Support 2", east_beam.east, south_y),
            pier("Step Front Support", step_x, step_y),
        ];
        log::debug!("Placed {} piers", piers.len());

        Self { piers }
    }

    pub fn piers(&self) -> &[Support] {
        &self.piers
    }

    pub fn into_elements(self) -> Vec<Element> {
        self.piers.into_iter().map(Element::Support).collect()
    }
}
