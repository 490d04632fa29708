//! Element definitions for the deck plan.
//!
//! Every drawn piece of the plan (boards, joists, posts, trim, the foundation
//! outline) is an element: a named, ordered coordinate set that closes into a
//! polygon, plus optional extra points and scalar attributes for the details
//! panel.

mod board;
mod coords;
mod joist;
mod step;
mod support;
mod trim;

pub use board::{BoardFinish, CutAxis, HorizontalBoard, Mitered, VerticalBoard, piece_count};
pub use coords::CoordinateSet;
pub use joist::{AngleSupport, JOIST_THICKNESS, Joist, JoistAxis, JoistEdges, JoistSpec};
pub use step::StepConnector;
pub use support::{FOOTING_RADIUS, Footing, SUPPORT_WIDTH, Support, SupportKind};
pub use trim::{Facing, InsideCorner, OutsideCorner, WallSiding};

use crate::foundation::FoundationOutline;
use kurbo::{BezPath, Point, Rect};
use peniko::Color;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Unique identifier for elements.
pub type ElementId = Uuid;

/// A named scalar shown in the details panel (lengths, radii).
pub type Attribute = (&'static str, f64);

/// Serializable color representation (RGBA8).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SerializableColor {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl SerializableColor {
    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    pub const fn black() -> Self {
        Self::new(0, 0, 0, 255)
    }

    pub const fn light_gray() -> Self {
        Self::new(211, 211, 211, 255)
    }

    pub const fn olive() -> Self {
        Self::new(128, 128, 0, 255)
    }

    pub const fn pale_goldenrod() -> Self {
        Self::new(238, 232, 170, 255)
    }
}

impl From<Color> for SerializableColor {
    fn from(color: Color) -> Self {
        let rgba = color.to_rgba8();
        Self {
            r: rgba.r,
            g: rgba.g,
            b: rgba.b,
            a: rgba.a,
        }
    }
}

impl From<SerializableColor> for Color {
    fn from(color: SerializableColor) -> Self {
        Color::from_rgba8(color.r, color.g, color.b, color.a)
    }
}

/// Fill and stroke for an element.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ElementStyle {
    /// Stroke color.
    pub stroke_color: SerializableColor,
    /// Stroke width in screen pixels.
    pub stroke_width: f64,
    /// Fill color.
    pub fill_color: SerializableColor,
    /// Overall opacity (0.0 = fully transparent, 1.0 = fully opaque).
    pub opacity: f64,
}

impl ElementStyle {
    /// Default outline with the given fill.
    pub const fn filled(fill_color: SerializableColor) -> Self {
        Self {
            stroke_color: SerializableColor::black(),
            stroke_width: 1.0,
            fill_color,
            opacity: 1.0,
        }
    }

    /// Get the fill color as a peniko Color.
    pub fn fill(&self) -> Color {
        self.fill_color.into()
    }

    /// Get the fill color with opacity applied.
    pub fn fill_with_opacity(&self) -> Color {
        let rgba = self.fill().to_rgba8();
        let alpha = (rgba.a as f64 * self.opacity) as u8;
        Color::from_rgba8(rgba.r, rgba.g, rgba.b, alpha)
    }
}

impl Default for ElementStyle {
    fn default() -> Self {
        Self::filled(SerializableColor::light_gray())
    }
}

/// Corners of an axis-aligned footprint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Corner {
    NorthWest,
    NorthEast,
    SouthEast,
    SouthWest,
}

impl Corner {
    /// All corners in polygon order.
    pub const ALL: [Corner; 4] = [
        Corner::NorthWest,
        Corner::NorthEast,
        Corner::SouthEast,
        Corner::SouthWest,
    ];

    /// Coordinate label for this corner.
    pub fn label(self) -> &'static str {
        match self {
            Corner::NorthWest => "North West",
            Corner::NorthEast => "North East",
            Corner::SouthEast => "South East",
            Corner::SouthWest => "South West",
        }
    }

    /// Short compass abbreviation ("NW", "SE", ...).
    pub fn abbreviation(self) -> &'static str {
        match self {
            Corner::NorthWest => "NW",
            Corner::NorthEast => "NE",
            Corner::SouthEast => "SE",
            Corner::SouthWest => "SW",
        }
    }

    /// +1 if this corner is on the north side, -1 on the south side.
    pub fn north_sign(self) -> f64 {
        match self {
            Corner::NorthWest | Corner::NorthEast => 1.0,
            Corner::SouthEast | Corner::SouthWest => -1.0,
        }
    }

    /// +1 if this corner is on the east side, -1 on the west side.
    pub fn east_sign(self) -> f64 {
        match self {
            Corner::NorthEast | Corner::SouthEast => 1.0,
            Corner::NorthWest | Corner::SouthWest => -1.0,
        }
    }
}

/// Common trait for all elements.
pub trait ElementTrait {
    /// Get the unique identifier.
    fn id(&self) -> ElementId;

    /// Display name.
    fn name(&self) -> &str;

    /// Outline coordinates in traversal order.
    fn polygon(&self) -> &CoordinateSet;

    /// Get the style.
    fn style(&self) -> &ElementStyle;

    /// Points shown in the details panel that are not part of the outline.
    fn extra_points(&self) -> CoordinateSet {
        CoordinateSet::new()
    }

    /// Scalar attributes shown in the details panel.
    fn attributes(&self) -> Vec<Attribute> {
        Vec::new()
    }

    /// Bounding box of the finite outline points, in world coordinates.
    fn bounds(&self) -> Rect {
        self.polygon().bounds()
    }

    /// Closed outline path for rendering.
    fn to_path(&self) -> BezPath {
        self.polygon().to_path()
    }
}

/// Enum wrapper for all element types.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum Element {
    Foundation(FoundationOutline),
    VerticalBoard(VerticalBoard),
    HorizontalBoard(HorizontalBoard),
    StepConnector(StepConnector),
    Joist(Joist),
    AngleSupport(AngleSupport),
    Support(Support),
    OutsideCorner(OutsideCorner),
    InsideCorner(InsideCorner),
    WallSiding(WallSiding),
}

macro_rules! dispatch {
    ($self:ident, $e:ident => $body:expr) => {
        match $self {
            Element::Foundation($e) => $body,
            Element::VerticalBoard($e) => $body,
            Element::HorizontalBoard($e) => $body,
            Element::StepConnector($e) => $body,
            Element::Joist($e) => $body,
            Element::AngleSupport($e) => $body,
            Element::Support($e) => $body,
            Element::OutsideCorner($e) => $body,
            Element::InsideCorner($e) => $body,
            Element::WallSiding($e) => $body,
        }
    };
}

impl Element {
    pub fn id(&self) -> ElementId {
        dispatch!(self, e => e.id())
    }

    pub fn name(&self) -> &str {
        dispatch!(self, e => e.name())
    }

    pub fn polygon(&self) -> &CoordinateSet {
        dispatch!(self, e => e.polygon())
    }

    pub fn style(&self) -> &ElementStyle {
        dispatch!(self, e => e.style())
    }

    pub fn extra_points(&self) -> CoordinateSet {
        dispatch!(self, e => e.extra_points())
    }

    pub fn attributes(&self) -> Vec<Attribute> {
        dispatch!(self, e => e.attributes())
    }

    pub fn bounds(&self) -> Rect {
        dispatch!(self, e => e.bounds())
    }

    pub fn to_path(&self) -> BezPath {
        dispatch!(self, e => e.to_path())
    }

    /// Footing marker, for supports that carry one.
    pub fn footing(&self) -> Option<Footing> {
        match self {
            Element::Support(s) => s.footing(),
            _ => None,
        }
    }
}

/// Check that a closed polygon does not cross itself.
///
/// Adjacent edges share a vertex and are not compared.
pub fn is_simple_polygon(points: &[Point]) -> bool {
    let n = points.len();
    if n < 3 {
        return false;
    }
    let edge = |i: usize| (points[i], points[(i + 1) % n]);
    for i in 0..n {
        for j in (i + 1)..n {
            let adjacent = j == i + 1 || (i == 0 && j == n - 1);
            if adjacent {
                continue;
            }
            let (a, b) = edge(i);
            let (c, d) = edge(j);
            if segments_intersect(a, b, c, d) {
                return false;
            }
        }
    }
    true
}

/// Even-odd point-in-polygon test over a closed outline.
pub fn polygon_contains(points: &[Point], point: Point) -> bool {
    let n = points.len();
    if n < 3 {
        return false;
    }
    let mut inside = false;
    let mut j = n - 1;
    for i in 0..n {
        let (pi, pj) = (points[i], points[j]);
        if (pi.y > point.y) != (pj.y > point.y) {
            let x_cross = (pj.x - pi.x) * (point.y - pi.y) / (pj.y - pi.y) + pi.x;
            if point.x < x_cross {
                inside = !inside;
            }
        }
        j = i;
    }
    inside
}

/// Test if two line segments (a-b) and (c-d) intersect.
fn segments_intersect(a: Point, b: Point, c: Point, d: Point) -> bool {
    let cross = |o: Point, p: Point, q: Point| -> f64 {
        (p.x - o.x) * (q.y - o.y) - (p.y - o.y) * (q.x - o.x)
    };
    let d1 = cross(c, d, a);
    let d2 = cross(c, d, b);
    let d3 = cross(a, b, c);
    let d4 = cross(a, b, d);
    if ((d1 > 0.0 && d2 < 0.0) || (d1 < 0.0 && d2 > 0.0))
        && ((d3 > 0.0 && d4 < 0.0) || (d3 < 0.0 && d4 > 0.0))
    {
        return true;
    }
    // Collinear cases: check if endpoint lies on the other segment
    let on_segment = |p: Point, q: Point, r: Point| -> bool {
        r.x >= p.x.min(q.x) && r.x <= p.x.max(q.x) && r.y >= p.y.min(q.y) && r.y <= p.y.max(q.y)
    };
    (d1.abs() < 1e-10 && on_segment(c, d, a))
        || (d2.abs() < 1e-10 && on_segment(c, d, b))
        || (d3.abs() < 1e-10 && on_segment(a, b, c))
        || (d4.abs() < 1e-10 && on_segment(a, b, d))
}
