//! The assembled deck plan.
//!
//! [`Layout::build`] runs every component in dependency order: foundation,
//! posts (which resolve the deck bounds), deck boards, framing, then piers
//! and siding. The result is an immutable list of layered elements. Drawing
//! is a pure projection of that list through a [`Camera`].

use crate::bounds::{Bounds, DeckBounds};
use crate::camera::Camera;
use crate::deckboards::DeckBoards;
use crate::elements::{Element, ElementId, ElementStyle, Footing, SerializableColor, polygon_contains};
use crate::error::{BuildReport, LayoutResult};
use crate::foundation::{Foundation, Measurements};
use crate::framing::Framing;
use crate::piers::Piers;
use crate::posts::Posts;
use crate::siding::Siding;
use crate::view::{LayerKind, LayerVisibility, ViewSettings};
use kurbo::{Point, Rect, Size};
use serde::{Deserialize, Serialize};

/// An element tagged with the layer it draws on.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LayeredElement {
    pub layer: LayerKind,
    pub element: Element,
}

/// One element, projected to screen space.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RenderItem {
    pub id: ElementId,
    pub layer: LayerKind,
    pub name: String,
    /// Outline in screen pixels, open (the renderer closes it).
    pub polygon: Vec<Point>,
    /// Element style with the layer opacity applied.
    pub style: ElementStyle,
    /// Fill with the opacity folded into its alpha.
    pub fill: SerializableColor,
    /// Footing circle in screen pixels.
    pub footing: Option<Footing>,
}

/// Everything visible for one camera, back to front.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Scene {
    pub viewport: Size,
    pub items: Vec<RenderItem>,
}

/// The deck plan.
#[derive(Debug, Clone)]
pub struct Layout {
    foundation: Foundation,
    deck: DeckBounds,
    elements: Vec<LayeredElement>,
    report: BuildReport,
}

impl Layout {
    /// Build the plan from the measured house.
    pub fn build() -> LayoutResult<Self> {
        Self::from_measurements(Measurements::default())
    }

    /// Build the plan from custom measurements.
    pub fn from_measurements(measurements: Measurements) -> LayoutResult<Self> {
        let foundation = Foundation::new(measurements);
        let (posts, deck) = Posts::place(&foundation, &DeckBounds::new(&foundation))?;
        let boards = DeckBoards::layout(&deck)?;
        let framing = Framing::build(&foundation, &deck, &boards, &posts)?;
        let piers = Piers::place(&framing, &posts);
        let siding = Siding::place(&foundation);

        let mut report = BuildReport::new();
        report.merge(framing.report().clone());

        let tag = |layer: LayerKind| move |element: Element| LayeredElement { layer, element };
        let mut elements = vec![LayeredElement {
            layer: LayerKind::Foundation,
            element: Element::Foundation(foundation.outline().clone()),
        }];
        elements.extend(
            framing
                .into_elements()
                .into_iter()
                .map(|(layer, element)| LayeredElement { layer, element }),
        );
        elements.extend(boards.into_elements().into_iter().map(tag(LayerKind::DeckBoards)));
        elements.extend(posts.into_elements().into_iter().map(tag(LayerKind::Posts)));
        elements.extend(piers.into_elements().into_iter().map(tag(LayerKind::Piers)));
        elements.extend(siding.into_elements().into_iter().map(tag(LayerKind::Siding)));

        // Stable: keeps build order within a layer
        elements.sort_by_key(|layered| layered.layer);

        log::info!(
            "Built deck plan with {} elements ({} skipped)",
            elements.len(),
            report.errors().len()
        );

        Ok(Self {
            foundation,
            deck,
            elements,
            report,
        })
    }

    pub fn foundation(&self) -> &Foundation {
        &self.foundation
    }

    pub fn deck_bounds(&self) -> &DeckBounds {
        &self.deck
    }

    /// Resolved deck edges.
    pub fn bounds(&self) -> LayoutResult<Bounds> {
        self.deck.bounds()
    }

    /// Elements that were malformed and left out.
    pub fn report(&self) -> &BuildReport {
        &self.report
    }

    /// Every element, back to front.
    pub fn elements(&self) -> &[LayeredElement] {
        &self.elements
    }

    /// Elements on one layer, in drawing order.
    pub fn layer(&self, layer: LayerKind) -> impl Iterator<Item = &Element> {
        self.elements
            .iter()
            .filter(move |layered| layered.layer == layer)
            .map(|layered| &layered.element)
    }

    /// Look up an element by name.
    pub fn find(&self, name: &str) -> Option<&Element> {
        self.elements
            .iter()
            .map(|layered| &layered.element)
            .find(|element| element.name() == name)
    }

    /// Look up an element by id.
    pub fn get(&self, id: ElementId) -> Option<&Element> {
        self.elements
            .iter()
            .map(|layered| &layered.element)
            .find(|element| element.id() == id)
    }

    /// Bounding box of every finite point in the plan, in world coordinates.
    pub fn extent(&self) -> Option<Rect> {
        let mut result: Option<Rect> = None;
        for layered in &self.elements {
            let bounds = layered.element.bounds();
            if bounds.is_zero_area() {
                continue;
            }
            result = Some(match result {
                Some(r) => r.union(bounds),
                None => bounds,
            });
        }
        result
    }

    /// Project every visible element.
    pub fn render(&self, camera: &Camera, layers: &LayerVisibility) -> Scene {
        let items = self
            .visible(*layers)
            .map(|layered| {
                let element = &layered.element;
                let mut style = *element.style();
                style.opacity *= layered.layer.opacity();
                RenderItem {
                    id: element.id(),
                    layer: layered.layer,
                    name: element.name().to_string(),
                    polygon: project(camera, element),
                    style,
                    fill: style.fill_with_opacity().into(),
                    footing: element.footing().map(|footing| Footing {
                        center: camera.project(footing.center),
                        radius: camera.scale_length(footing.radius),
                    }),
                }
            })
            .collect();

        Scene {
            viewport: camera.viewport,
            items,
        }
    }

    /// Ids of visible elements under a screen point, front to back.
    pub fn elements_at_point(&self, screen_point: Point, camera: &Camera, layers: &LayerVisibility) -> Vec<ElementId> {
        self.visible(*layers)
            .rev()
            .filter(|layered| polygon_contains(&project(camera, &layered.element), screen_point))
            .map(|layered| layered.element.id())
            .collect()
    }

    /// The top-most visible element under a screen point.
    pub fn hit_test(&self, screen_point: Point, camera: &Camera, layers: &LayerVisibility) -> Option<&Element> {
        let hit = self
            .visible(*layers)
            .rev()
            .map(|layered| &layered.element)
            .find(|element| polygon_contains(&project(camera, element), screen_point));
        if let Some(element) = hit {
            log::debug!("Hit {} at {:?}", element.name(), screen_point);
        }
        hit
    }

    /// Rendered scene for the given view settings, as pretty JSON.
    pub fn to_json(&self, settings: &ViewSettings) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(&self.render(&settings.camera(), &settings.layers))
    }

    fn visible(&self, layers: LayerVisibility) -> impl DoubleEndedIterator<Item = &LayeredElement> {
        self.elements
            .iter()
            .filter(move |layered| layers.is_visible(layered.layer))
    }
}

fn project(camera: &Camera, element: &Element) -> Vec<Point> {
    element
        .polygon()
        .points()
        .into_iter()
        .map(|point| camera.project(point))
        .collect()
}
