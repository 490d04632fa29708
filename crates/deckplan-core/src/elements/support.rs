//! Square support footprints shared by posts and piers.

use super::{Attribute, CoordinateSet, Corner, ElementId, ElementStyle, ElementTrait, SerializableColor};
use kurbo::{BezPath, Circle, Point, Rect, Shape as KurboShape, Vec2};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Side of a support's square footprint (a 4x4 post).
pub const SUPPORT_WIDTH: f64 = 3.5;
/// Radius of a round footing under a post.
pub const FOOTING_RADIUS: f64 = 6.0;

/// Role a support plays.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SupportKind {
    Post,
    Pier,
}

impl SupportKind {
    /// Word used in corner labels ("NW Post Corner").
    pub fn label(self) -> &'static str {
        match self {
            SupportKind::Post => "Post",
            SupportKind::Pier => "Pier",
        }
    }
}

/// Round footing drawn under a support.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Footing {
    pub center: Point,
    pub radius: f64,
}

impl Footing {
    pub fn as_circle(&self) -> Circle {
        Circle::new(self.center, self.radius)
    }
}

/// A fixed-size square support centered on a load point.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Support {
    id: ElementId,
    name: String,
    kind: SupportKind,
    center: Point,
    coords: CoordinateSet,
    footing: Option<Footing>,
    style: ElementStyle,
}

impl Support {
    /// Create a support centered at `center`.
    pub fn new(kind: SupportKind, name: impl Into<String>, center: Point) -> Self {
        let half = SUPPORT_WIDTH / 2.0;
        let rect = Rect::new(center.x - half, center.y - half, center.x + half, center.y + half);
        let coords = CoordinateSet::from_pairs(Corner::ALL.map(|corner| {
            let x = if corner.east_sign() > 0.0 { rect.x1 } else { rect.x0 };
            let y = if corner.north_sign() > 0.0 { rect.y0 } else { rect.y1 };
            (
                format!("{} {} Corner", corner.abbreviation(), kind.label()),
                Point::new(x, y),
            )
        }));
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            kind,
            center,
            coords,
            footing: None,
            style: ElementStyle::filled(SerializableColor::olive()),
        }
    }

    /// Attach a footing pushed out from the deck along `outward`.
    ///
    /// The footing's inner edge is flush with the support's inner face.
    pub fn with_footing(mut self, outward: Vec2) -> Self {
        let direction = if outward.hypot2() > 0.0 { outward.normalize() } else { Vec2::ZERO };
        let offset = FOOTING_RADIUS - SUPPORT_WIDTH / 2.0;
        self.footing = Some(Footing {
            center: self.center + direction * offset,
            radius: FOOTING_RADIUS,
        });
        self
    }

    pub fn kind(&self) -> SupportKind {
        self.kind
    }

    pub fn center(&self) -> Point {
        self.center
    }

    pub fn footing(&self) -> Option<Footing> {
        self.footing
    }

    /// The square footprint.
    pub fn footprint(&self) -> Rect {
        self.coords.bounds()
    }
}

impl ElementTrait for Support {
    fn id(&self) -> ElementId {
        self.id
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn polygon(&self) -> &CoordinateSet {
        &self.coords
    }

    fn style(&self) -> &ElementStyle {
        &self.style
    }

    fn extra_points(&self) -> CoordinateSet {
        let mut extras = CoordinateSet::from_pairs([("Center", self.center)]);
        if let Some(footing) = self.footing {
            extras.push("Footing Center", footing.center);
        }
        extras
    }

    fn attributes(&self) -> Vec<Attribute> {
        match self.footing {
            Some(footing) => vec![("Width", SUPPORT_WIDTH), ("Footing Radius", footing.radius)],
            None => vec![("Width", SUPPORT_WIDTH)],
        }
    }

    fn to_path(&self) -> BezPath {
        let mut path = self.coords.to_path();
        if let Some(footing) = self.footing {
            path.extend(footing.as_circle().path_elements(0.1));
        }
        path
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_footprint_corners() {
        let post = Support::new(SupportKind::Post, "Eastern Post 1", Point::new(10.0, 20.0));
        let labels: Vec<_> = post.polygon().labels().collect();
        assert_eq!(
            labels,
            ["NW Post Corner", "NE Post Corner", "SE Post Corner", "SW Post Corner"]
        );
        assert_eq!(post.polygon().get("NW Post Corner"), Some(Point::new(8.25, 18.25)));
        assert_eq!(post.polygon().get("SE Post Corner"), Some(Point::new(11.75, 21.75)));
        let rect = post.footprint();
        assert!((rect.width() - SUPPORT_WIDTH).abs() < f64::EPSILON);
        assert!((rect.height() - SUPPORT_WIDTH).abs() < f64::EPSILON);
    }

    #[test]
    fn test_pier_labels() {
        let pier = Support::new(SupportKind::Pier, "Step Front Support", Point::ZERO);
        assert!(pier.polygon().contains("SW Pier Corner"));
        assert!(pier.footing().is_none());
        assert_eq!(pier.attributes(), vec![("Width", SUPPORT_WIDTH)]);
    }

    #[test]
    fn test_footing_inner_edge_is_flush() {
        let post = Support::new(SupportKind::Post, "Eastern Post 1", Point::new(100.0, 50.0))
            .with_footing(Vec2::new(1.0, 0.0));
        let footing = post.footing().unwrap();
        assert!((footing.center.x - (100.0 + FOOTING_RADIUS - 1.75)).abs() < 1e-12);
        assert!((footing.center.y - 50.0).abs() < f64::EPSILON);
        // Inner (west) edge of the footing meets the post's west face
        assert!((footing.center.x - footing.radius - post.footprint().x0).abs() < 1e-12);
        assert!(post.extra_points().contains("Footing Center"));
    }
}
