//! Occupancy masks.
//!
//! A rasterizer renders a word into a binary raster; the spatial index only
//! ever sees it through the [`Mask`] trait. [`Bitmap`] is a plain in-memory
//! implementation, also used by the test suite and the demos.

use crate::geometry::{rect, CanvasSize, Rect};

/// Occupancy query over a rendered shape.
pub trait Mask {
  /// tight bounding box of ink inside `region`, or `None` if the crop is blank
  fn crop(&self, region: Rect) -> Option<Rect>;

  /// tight bounding box of the whole footprint, or `None` for a blank mask
  fn bounding_box(&self) -> Option<Rect>;
}

/// A boolean raster; `true` marks ink.
#[derive(Debug, Clone)]
pub struct Bitmap {
  size: CanvasSize,
  pixels: Vec<bool>
}

impl Bitmap {
  pub fn new(width: i32, height: i32) -> Self {
    let (width, height) = (width.max(0), height.max(0));
    Bitmap {
      size: CanvasSize::new(width, height),
      pixels: vec![false; (width * height) as usize]
    }
  }

  pub fn from_fn(width: i32, height: i32, ink: impl Fn(i32, i32) -> bool) -> Self {
    let mut bitmap = Self::new(width, height);
    for y in 0..height {
      for x in 0..width {
        bitmap.set(x, y, ink(x, y));
      }
    }
    bitmap
  }

  /// string-art constructor; any non-space character is ink
  pub fn from_rows(rows: &[&str]) -> Self {
    let width = rows.iter().map(|r| r.chars().count()).max().unwrap_or(0) as i32;
    let mut bitmap = Self::new(width, rows.len() as i32);
    for (y, row) in rows.iter().enumerate() {
      for (x, c) in row.chars().enumerate() {
        bitmap.set(x as i32, y as i32, c != ' ');
      }
    }
    bitmap
  }

  pub fn size(&self) -> CanvasSize {
    self.size
  }

  pub fn set(&mut self, x: i32, y: i32, ink: bool) {
    if x >= 0 && x < self.size.width && y >= 0 && y < self.size.height {
      self.pixels[(y * self.size.width + x) as usize] = ink;
    }
  }

  pub fn get(&self, x: i32, y: i32) -> bool {
    x >= 0 && x < self.size.width && y >= 0 && y < self.size.height
      && self.pixels[(y * self.size.width + x) as usize]
  }
}

impl Mask for Bitmap {
  fn crop(&self, region: Rect) -> Option<Rect> {
    let x0 = region.min.x.max(0);
    let y0 = region.min.y.max(0);
    let x1 = region.max.x.min(self.size.width);
    let y1 = region.max.y.min(self.size.height);

    let (mut x_min, mut y_min) = (x1, y1);
    let (mut x_max, mut y_max) = (x0, y0);
    for y in y0..y1 {
      for x in x0..x1 {
        if self.get(x, y) {
          x_min = x_min.min(x);
          y_min = y_min.min(y);
          x_max = x_max.max(x + 1);
          y_max = y_max.max(y + 1);
        }
      }
    }

    (x_min < x_max).then(|| rect(x_min, y_min, x_max, y_max))
  }

  fn bounding_box(&self) -> Option<Rect> {
    self.crop(rect(0, 0, self.size.width, self.size.height))
  }
}
