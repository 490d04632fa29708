//! View settings: zoom level and layer toggles.

use crate::camera::Camera;
use serde::{Deserialize, Serialize};

/// Zoom level the plan opens at.
pub const DEFAULT_ZOOM_LEVEL: u32 = 3;

/// Drawing layers, back to front.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LayerKind {
    Foundation,
    Framing,
    StepFraming,
    DeckBoards,
    Posts,
    Piers,
    Siding,
}

impl LayerKind {
    /// All layers in drawing order.
    pub const ALL: [LayerKind; 7] = [
        LayerKind::Foundation,
        LayerKind::Framing,
        LayerKind::StepFraming,
        LayerKind::DeckBoards,
        LayerKind::Posts,
        LayerKind::Piers,
        LayerKind::Siding,
    ];

    /// Label for the layer toggle.
    pub fn label(self) -> &'static str {
        match self {
            LayerKind::Foundation => "Foundation",
            LayerKind::Framing => "Framing",
            LayerKind::StepFraming => "Step Framing",
            LayerKind::DeckBoards => "Deck Boards",
            LayerKind::Posts => "Posts",
            LayerKind::Piers => "Piers",
            LayerKind::Siding => "Siding",
        }
    }

    /// Layer opacity. Deck boards are see-through so the framing shows.
    pub fn opacity(self) -> f64 {
        match self {
            LayerKind::DeckBoards => 0.5,
            _ => 1.0,
        }
    }
}

/// Which layers are drawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LayerVisibility {
    #[serde(default = "visible")]
    pub foundation: bool,
    #[serde(default = "visible")]
    pub framing: bool,
    #[serde(default = "visible")]
    pub step_framing: bool,
    #[serde(default = "visible")]
    pub deck_boards: bool,
    #[serde(default = "visible")]
    pub posts: bool,
    #[serde(default = "visible")]
    pub piers: bool,
    #[serde(default = "visible")]
    pub siding: bool,
}

fn visible() -> bool {
    true
}

impl Default for LayerVisibility {
    fn default() -> Self {
        Self::all()
    }
}

impl LayerVisibility {
    /// Every layer visible.
    pub fn all() -> Self {
        Self::uniform(true)
    }

    /// Every layer hidden.
    pub fn none() -> Self {
        Self::uniform(false)
    }

    fn uniform(on: bool) -> Self {
        Self {
            foundation: on,
            framing: on,
            step_framing: on,
            deck_boards: on,
            posts: on,
            piers: on,
            siding: on,
        }
    }

    fn slot(&mut self, layer: LayerKind) -> &mut bool {
        match layer {
            LayerKind::Foundation => &mut self.foundation,
            LayerKind::Framing => &mut self.framing,
            LayerKind::StepFraming => &mut self.step_framing,
            LayerKind::DeckBoards => &mut self.deck_boards,
            LayerKind::Posts => &mut self.posts,
            LayerKind::Piers => &mut self.piers,
            LayerKind::Siding => &mut self.siding,
        }
    }

    pub fn is_visible(&self, layer: LayerKind) -> bool {
        match layer {
            LayerKind::Foundation => self.foundation,
            LayerKind::Framing => self.framing,
            LayerKind::StepFraming => self.step_framing,
            LayerKind::DeckBoards => self.deck_boards,
            LayerKind::Posts => self.posts,
            LayerKind::Piers => self.piers,
            LayerKind::Siding => self.siding,
        }
    }

    pub fn set(&mut self, layer: LayerKind, visible: bool) {
        *self.slot(layer) = visible;
    }

    /// Flip a layer, returning its new state.
    pub fn toggle(&mut self, layer: LayerKind) -> bool {
        let slot = self.slot(layer);
        *slot = !*slot;
        *slot
    }
}

/// Everything the viewer controls.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ViewSettings {
    /// Integer zoom: screen pixels per inch.
    #[serde(default = "default_zoom_level")]
    pub zoom_level: u32,
    #[serde(default)]
    pub layers: LayerVisibility,
}

fn default_zoom_level() -> u32 {
    DEFAULT_ZOOM_LEVEL
}

impl Default for ViewSettings {
    fn default() -> Self {
        Self {
            zoom_level: DEFAULT_ZOOM_LEVEL,
            layers: LayerVisibility::default(),
        }
    }
}

impl ViewSettings {
    /// Camera for the current zoom level, clamped to the camera's zoom limits.
    pub fn camera(&self) -> Camera {
        Camera::for_zoom_level(self.zoom_level)
    }
}
