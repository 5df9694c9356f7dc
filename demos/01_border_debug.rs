use {
  anyhow::Result,
  word_placement::{
    drawing::render_borders,
    geometry::CanvasSize,
    mask::Bitmap,
    placement::{expand_canvas, sort_by_prominence, Placer, PlacementState, Word},
    quadtree
  }
};

/// Stand-in for a text rasterizer: an elliptic blob roughly shaped like a
/// rendered word of the given font size.
fn blob(font_size: u32) -> Bitmap {
  let (w, h) = (font_size as i32 * 5, font_size as i32);
  Bitmap::from_fn(w, h, |x, y| {
    let (cx, cy) = (w as f32 / 2.0, h as f32 / 2.0);
    let (dx, dy) = ((x as f32 - cx) / cx, (y as f32 - cy) / cy);
    dx * dx + dy * dy <= 1.0
  })
}

fn main() -> Result<()> {
  let path = "out.png";
  let proposed = CanvasSize::new(1600, 900);

  let sizes: Vec<u32> = vec![90, 70, 55, 42, 35, 30, 24, 20, 16, 14, 12, 10];
  let masks: Vec<Bitmap> = sizes.iter().map(|&s| blob(s)).collect();

  let mut trees = quadtree::build_all(&masks, 5, 5)?;
  trees.iter_mut().for_each(|tree| tree.compress());

  let mut words: Vec<Word> = sizes.iter()
    .zip(masks.iter().zip(trees))
    .enumerate()
    .map(|(i, (&font_size, (mask, tree)))| {
      Word::new(format!("word{i}"), font_size, mask.size(), tree)
    })
    .collect();
  sort_by_prominence(&mut words);

  Placer::new(proposed, 2).place(&mut words);
  let canvas = expand_canvas(&mut words, proposed);

  for word in &words {
    if word.state != PlacementState::Placed {
      println!("{} ended up {:?}", word.word, word.state);
    }
  }

  render_borders(&words, canvas).save(path)?;
  println!("saved {path}");
  Ok(())
}
