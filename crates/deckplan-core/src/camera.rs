//! Camera module for projecting the plan onto the screen.

use kurbo::{Affine, Point, Rect, Size, Vec2};
use serde::{Deserialize, Serialize};

/// Viewport size at zoom level 1, in pixels.
pub const BASE_VIEWPORT: Size = Size::new(300.0, 250.0);

/// How far past the viewport edge projected points may land.
pub const OFF_SCREEN_MARGIN: f64 = 10.0;

/// Zoom limits, in screen pixels per inch.
pub const MIN_ZOOM: f64 = 0.25;
pub const MAX_ZOOM: f64 = 20.0;

/// Camera manages the view transform for the plan.
///
/// It handles panning (translation) and zooming (scaling), converting
/// between world inches and screen pixels. Projected points are clamped to
/// the viewport plus a small margin, so the foundation's infinite trailing
/// edges land just off screen.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Camera {
    /// Current translation offset (pan)
    pub offset: Vec2,
    /// Screen pixels per world inch
    pub zoom: f64,
    /// Visible area in screen pixels
    pub viewport: Size,
    /// Minimum allowed zoom level
    pub min_zoom: f64,
    /// Maximum allowed zoom level
    pub max_zoom: f64,
}

impl Default for Camera {
    fn default() -> Self {
        Self::for_zoom_level(1)
    }
}

impl Camera {
    /// Create a new camera with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Camera for an integer zoom level; the viewport grows with the zoom.
    ///
    /// Levels outside the zoom limits are clamped to them.
    pub fn for_zoom_level(level: u32) -> Self {
        let zoom = (level.max(1) as f64).clamp(MIN_ZOOM, MAX_ZOOM);
        Self {
            offset: Vec2::ZERO,
            zoom,
            viewport: Size::new(BASE_VIEWPORT.width * zoom, BASE_VIEWPORT.height * zoom),
            min_zoom: MIN_ZOOM,
            max_zoom: MAX_ZOOM,
        }
    }

    /// Get the affine transform for rendering.
    ///
    /// This transform converts world coordinates to screen coordinates.
    pub fn transform(&self) -> Affine {
        Affine::translate(self.offset) * Affine::scale(self.zoom)
    }

    /// Get the inverse transform for input handling.
    ///
    /// This transform converts screen coordinates to world coordinates.
    pub fn inverse_transform(&self) -> Affine {
        Affine::scale(1.0 / self.zoom) * Affine::translate(-self.offset)
    }

    /// Convert a screen point to world coordinates.
    pub fn screen_to_world(&self, screen_point: Point) -> Point {
        self.inverse_transform() * screen_point
    }

    /// Convert a finite world point to screen coordinates, unclamped.
    pub fn world_to_screen(&self, world_point: Point) -> Point {
        self.transform() * world_point
    }

    /// Project a world point onto the screen, clamped to the viewport margin.
    ///
    /// Each axis is scaled on its own so an infinite coordinate on one axis
    /// never leaks into the other.
    pub fn project(&self, world_point: Point) -> Point {
        let clamp = |value: f64, max: f64| value.clamp(-OFF_SCREEN_MARGIN, max + OFF_SCREEN_MARGIN);
        Point::new(
            clamp(world_point.x * self.zoom + self.offset.x, self.viewport.width),
            clamp(world_point.y * self.zoom + self.offset.y, self.viewport.height),
        )
    }

    /// Scale a world length to screen pixels.
    pub fn scale_length(&self, length: f64) -> f64 {
        length * self.zoom
    }

    /// Pan the camera by a delta in screen coordinates.
    pub fn pan(&mut self, delta: Vec2) {
        self.offset += delta;
    }

    /// Zoom the camera, keeping the given screen point fixed.
    pub fn zoom_at(&mut self, screen_point: Point, factor: f64) {
        let new_zoom = (self.zoom * factor).clamp(self.min_zoom, self.max_zoom);
        if (new_zoom - self.zoom).abs() < f64::EPSILON {
            return;
        }

        // Convert screen point to world before zoom
        let world_point = self.screen_to_world(screen_point);

        self.zoom = new_zoom;

        // Adjust offset so world_point stays at screen_point
        let new_screen = self.world_to_screen(world_point);
        self.offset += screen_point - new_screen;
    }

    /// Fit the camera to show the given bounding box.
    pub fn fit_to_bounds(&mut self, bounds: Rect, padding: f64) {
        if bounds.is_zero_area() {
            self.offset = Vec2::ZERO;
            return;
        }

        let padded = Size::new(
            (self.viewport.width - padding * 2.0).max(1.0),
            (self.viewport.height - padding * 2.0).max(1.0),
        );

        let scale_x = padded.width / bounds.width();
        let scale_y = padded.height / bounds.height();
        self.zoom = scale_x.min(scale_y).clamp(self.min_zoom, self.max_zoom);

        // Center the bounds in the viewport
        let bounds_center = bounds.center();
        self.offset = Vec2::new(
            self.viewport.width / 2.0 - bounds_center.x * self.zoom,
            self.viewport.height / 2.0 - bounds_center.y * self.zoom,
        );
    }
}
