//! Debug visualizer: draws the leaf bounding-box borders of placed words.

use {
  crate::{
    geometry::{CanvasSize, Rect},
    placement::Word
  },
  image::{Rgba, RgbaImage}
};

const PALETTE: [Rgba<u8>; 6] = [
  Rgba([231, 76, 60, 255]),
  Rgba([46, 204, 113, 255]),
  Rgba([52, 152, 219, 255]),
  Rgba([241, 196, 15, 255]),
  Rgba([155, 89, 182, 255]),
  Rgba([26, 188, 156, 255])
];

/// Render every placed word's compressed-index leaves as rectangle borders,
/// one palette color per word. Unplaced words are skipped.
pub fn render_borders(words: &[Word], canvas: CanvasSize) -> RgbaImage {
  let mut image = RgbaImage::new(canvas.width.max(1) as u32, canvas.height.max(1) as u32);

  for (i, word) in words.iter().enumerate() {
    let place = match word.place {
      Some(place) => place,
      None => continue
    };
    let color = PALETTE[i % PALETTE.len()];
    for rect in word.tree.leaves() {
      border(&mut image, rect.translate(place.to_vector()), color);
    }
  }
  image
}

fn border(image: &mut RgbaImage, r: Rect, color: Rgba<u8>) {
  for x in r.min.x..r.max.x {
    put_pixel(image, x, r.min.y, color);
    put_pixel(image, x, r.max.y - 1, color);
  }
  for y in r.min.y..r.max.y {
    put_pixel(image, r.min.x, y, color);
    put_pixel(image, r.max.x - 1, y, color);
  }
}

fn put_pixel(image: &mut RgbaImage, x: i32, y: i32, color: Rgba<u8>) {
  if x >= 0 && y >= 0 && (x as u32) < image.width() && (y as u32) < image.height() {
    image.put_pixel(x as u32, y as u32, color);
  }
}
