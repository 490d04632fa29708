//! Deckplan Core Library
//!
//! Geometric layout engine for a single deck build: every post, board, joist,
//! pier and trim piece is derived from a few measured house dimensions.

pub mod bounds;
pub mod camera;
pub mod deckboards;
pub mod details;
pub mod elements;
pub mod error;
pub mod foundation;
pub mod framing;
pub mod layout;
pub mod piers;
pub mod posts;
pub mod siding;
pub mod view;

pub use bounds::{BoardDims, Bounds, DeckBounds, PostBackfill};
pub use camera::Camera;
pub use details::{Details, FeetInches, Selection};
pub use elements::{Element, ElementId, ElementStyle, ElementTrait};
pub use error::{BuildReport, LayoutError, LayoutResult};
pub use foundation::{Foundation, Measurements};
pub use layout::{LayeredElement, Layout, RenderItem, Scene};
pub use view::{LayerKind, LayerVisibility, ViewSettings};
