//! Surface geometry - the two control zones and the stick radius
//!
//! The surface is split at the horizontal middle into a left and a right
//! half, each hosting one control zone. A zone's rectangle is inset from its
//! half's edges so an initial press always keeps room to travel. The stick
//! radius (the displacement that saturates an axis) is derived from the
//! smaller surface dimension.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::GeometryError;

/// A point on the touch surface, in surface units (usually pixels).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl From<(i32, i32)> for Point {
    fn from((x, y): (i32, i32)) -> Self {
        Self { x, y }
    }
}

/// An axis-aligned rectangle with half-open edges: `left <= x < right` and
/// `top <= y < bottom`. An empty rectangle contains no point.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Rect {
    pub left: i32,
    pub top: i32,
    pub right: i32,
    pub bottom: i32,
}

impl Rect {
    pub fn new(left: i32, top: i32, right: i32, bottom: i32) -> Self {
        Self { left, top, right, bottom }
    }

    pub fn is_empty(&self) -> bool {
        self.left >= self.right || self.top >= self.bottom
    }

    /// Shrink the rectangle by `dx` on the left/right edges and `dy` on the
    /// top/bottom edges (negative values grow it).
    pub fn inset(&self, dx: i32, dy: i32) -> Self {
        Self::new(self.left + dx, self.top + dy, self.right - dx, self.bottom - dy)
    }

    pub fn contains(&self, point: Point) -> bool {
        point.x >= self.left && point.x < self.right && point.y >= self.top && point.y < self.bottom
    }
}

/// Zone layout derived from the surface dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SurfaceGeometry {
    pub width: i32,
    pub height: i32,
    /// Displacement from the press origin that saturates an axis.
    pub radius: i32,
    /// X coordinate splitting the two halves.
    pub middle: i32,
    /// Arming rectangle on the left half (vertical axis).
    pub left_zone: Rect,
    /// Arming rectangle on the right half (horizontal axis).
    pub right_zone: Rect,
}

impl SurfaceGeometry {
    /// Derive the zone layout for a surface.
    ///
    /// The radius targets a full stick diameter of half the smaller surface
    /// dimension; each zone is inset by half the radius on every side so a
    /// press near a zone edge still has travel before clamping.
    pub fn new(width: i32, height: i32) -> Result<Self, GeometryError> {
        if width <= 0 || height <= 0 {
            return Err(GeometryError::NonPositive { width, height });
        }
        let radius = width.min(height) / 4;
        if radius == 0 {
            return Err(GeometryError::RadiusTooSmall { width, height });
        }
        let middle = width / 2;
        let inset = radius / 2;
        let left_zone = Rect::new(0, 0, middle, height).inset(inset, inset);
        let right_zone = Rect::new(middle, 0, width, height).inset(inset, inset);
        debug!(width, height, radius, ?left_zone, ?right_zone, "derived zone layout");
        Ok(Self { width, height, radius, middle, left_zone, right_zone })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zone_layout_800x600() {
        let geometry = SurfaceGeometry::new(800, 600).unwrap();
        assert_eq!(geometry.radius, 150);
        assert_eq!(geometry.middle, 400);
        assert_eq!(geometry.left_zone, Rect::new(75, 75, 325, 525));
        assert_eq!(geometry.right_zone, Rect::new(475, 75, 725, 525));
    }

    #[test]
    fn test_zones_disjoint_and_within_halves() {
        for (width, height) in [(800, 600), (600, 800), (1080, 2340), (2340, 1080), (5, 5)] {
            let geometry = SurfaceGeometry::new(width, height).unwrap();
            let left = geometry.left_zone;
            let right = geometry.right_zone;

            assert!(!left.is_empty(), "{width}x{height} left zone empty");
            assert!(!right.is_empty(), "{width}x{height} right zone empty");

            // Each zone stays inside its half of the surface.
            assert!(left.left >= 0 && left.right <= geometry.middle);
            assert!(right.left >= geometry.middle && right.right <= width);
            assert!(left.top >= 0 && left.bottom <= height);
            assert!(right.top >= 0 && right.bottom <= height);

            // The halves partition the surface, so the zones cannot overlap.
            assert!(left.right <= right.left);
        }
    }

    #[test]
    fn test_boundary_column_excluded() {
        // The inset pulls both rectangles away from the split, so a press
        // exactly on the middle column lands in neither zone.
        let geometry = SurfaceGeometry::new(800, 600).unwrap();
        let boundary = Point { x: 400, y: 300 };
        assert!(!geometry.left_zone.contains(boundary));
        assert!(!geometry.right_zone.contains(boundary));
    }

    #[test]
    fn test_rejects_degenerate_dimensions() {
        assert_eq!(
            SurfaceGeometry::new(0, 600),
            Err(GeometryError::NonPositive { width: 0, height: 600 })
        );
        assert_eq!(
            SurfaceGeometry::new(800, -1),
            Err(GeometryError::NonPositive { width: 800, height: -1 })
        );
        // min(3, 1000) / 4 == 0: no usable radius.
        assert_eq!(
            SurfaceGeometry::new(3, 1000),
            Err(GeometryError::RadiusTooSmall { width: 3, height: 1000 })
        );
    }

    #[test]
    fn test_rect_contains_half_open() {
        let rect = Rect::new(10, 10, 20, 20);
        assert!(rect.contains(Point { x: 10, y: 10 }));
        assert!(rect.contains(Point { x: 19, y: 19 }));
        assert!(!rect.contains(Point { x: 20, y: 19 }));
        assert!(!rect.contains(Point { x: 19, y: 20 }));
        assert!(!rect.contains(Point { x: 9, y: 15 }));
    }

    #[test]
    fn test_empty_rect_contains_nothing() {
        let rect = Rect::new(10, 10, 10, 20);
        assert!(rect.is_empty());
        assert!(!rect.contains(Point { x: 10, y: 15 }));
    }
}
