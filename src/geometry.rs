//! Integer rectangle primitives.
//!
//! The origin of the coordinate system is in the top-left corner. Rectangles
//! are half-open, `[min.x, max.x) × [min.y, max.y)`, in local shape
//! coordinates; a shift moves them onto the shared canvas.

use {
  anyhow::{ensure, Result},
  euclid::{Box2D, Point2D, Size2D, Vector2D}
};

/// Pixel coordinate basis
#[derive(Debug, Copy, Clone)]
pub struct PixelSpace;

pub type Rect = Box2D<i32, PixelSpace>;
pub type Point = Point2D<i32, PixelSpace>;
pub type Shift = Vector2D<i32, PixelSpace>;
pub type CanvasSize = Size2D<i32, PixelSpace>;

pub fn rect(x_min: i32, y_min: i32, x_max: i32, y_max: i32) -> Rect {
  Rect::new(Point::new(x_min, y_min), Point::new(x_max, y_max))
}

/// rectangle area, in pixels
pub fn area(r: Rect) -> i64 {
  (r.max.x - r.min.x).abs() as i64 * (r.max.y - r.min.y).abs() as i64
}

/// reject a collaborator-supplied rectangle with inverted extents
pub fn validate(r: Rect) -> Result<()> {
  ensure!(
    r.min.x <= r.max.x && r.min.y <= r.max.y,
    "malformed rectangle: {:?}", r
  );
  Ok(())
}

/// Test whether `r1` shifted by `shift1` and `r2` shifted by `shift2`
/// intersect, after expanding both by `margin` pixels on every side.
/// Expanded boxes sharing an edge still count as intersecting, so the net
/// separation enforced between two shapes is `2 × margin`.
pub fn rects_intersect(r1: Rect, r2: Rect, shift1: Shift, shift2: Shift, margin: i32) -> bool {
  let r1 = r1.inflate(margin, margin).translate(shift1);
  let r2 = r2.inflate(margin, margin).translate(shift2);

  if r1.min.x > r2.max.x || r1.max.x < r2.min.x {
    return false;
  }
  if r1.min.y > r2.max.y || r1.max.y < r2.min.y {
    return false;
  }
  true
}
