//! Word placement.
//!
//! Words are placed strictly one after another, largest first; every
//! placement is tested against the full set of already placed words, so the
//! final layout carries the invariant that no two placed shapes come closer
//! than twice the stay-away margin.

use {
  crate::{
    collision,
    geometry::{CanvasSize, Point, Shift},
    quadtree::QuadTree,
    spiral::{Archimedean, Rectangular, Spiral}
  },
  rand::{Rng, SeedableRng},
  rand_pcg::Lcg128Xsl64
};


/// terminal outcome of the search for a single word
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum PlacementState {
  /// not attempted yet
  Pending,
  /// collision-free offset inside the canvas
  Placed,
  /// collision-free offset, but part of the shape sticks out of the canvas
  Fallback,
  /// the search budget expired without any collision-free offset
  Unplaced
}

/// A word to place: its rendered footprint and spatial index arrive from the
/// rasterizer; only `place` and `state` are written here, exactly once.
#[derive(Debug, Clone)]
pub struct Word {
  pub word: String,
  pub font_size: u32,
  /// rotation the rasterizer applied, degrees; 0 for horizontal
  pub angle: i32,
  /// size of the cropped word image
  pub img_size: CanvasSize,
  pub tree: QuadTree,
  /// upper-left corner on the canvas, once found
  pub place: Option<Point>,
  pub state: PlacementState
}

impl Word {
  pub fn new(word: impl Into<String>, font_size: u32, img_size: CanvasSize, tree: QuadTree) -> Self {
    Word {
      word: word.into(),
      font_size,
      angle: 0,
      img_size,
      tree,
      place: None,
      state: PlacementState::Pending
    }
  }

  pub fn with_angle(mut self, angle: i32) -> Self {
    self.angle = angle;
    self
  }
}

/// larger fonts first; the outcome of the algorithm depends on this order
pub fn sort_by_prominence(words: &mut [Word]) {
  words.sort_by(|a, b| b.font_size.cmp(&a.font_size));
}

/// Walks an outward spiral from a random seed point for each word in turn,
/// accepting the first offset that collides with nothing already placed.
pub struct Placer {
  canvas: CanvasSize,
  stay_away: i32,
  arch_param: f32,
  rect_param: i32,
  rng: Lcg128Xsl64
}

impl Placer {
  pub fn new(canvas: CanvasSize, stay_away: i32) -> Self {
    Placer {
      canvas,
      stay_away,
      arch_param: 0.2,
      rect_param: 2,
      rng: Lcg128Xsl64::from_entropy()
    }
  }

  /// fix the random source, making the run reproducible
  pub fn with_seed(mut self, seed: u64) -> Self {
    self.rng = Lcg128Xsl64::seed_from_u64(seed);
    self
  }

  /// tightness of the Archimedean spiral family
  pub fn with_arch_param(mut self, a: f32) -> Self {
    self.arch_param = a;
    self
  }

  /// leg increment of the rectangular spiral family
  pub fn with_rect_param(mut self, a: i32) -> Self {
    self.rect_param = a;
    self
  }

  /// Place every word against the ones before it. Callers pass the slice in
  /// decreasing prominence order (see [`sort_by_prominence`]); unplaced
  /// words keep `place == None` and are reported through their state, never
  /// as an error.
  pub fn place(&mut self, words: &mut [Word]) {
    for i in 0..words.len() {
      let seed = self.pick_seed(words[i].img_size);
      let spiral = self.pick_spiral();
      let (placed, rest) = words.split_at_mut(i);
      Self::place_one(&mut rest[0], placed, seed, spiral, self.canvas, self.stay_away);
    }
  }

  /// a starting position within a horizontal band around the canvas center
  fn pick_seed(&mut self, img_size: CanvasSize) -> Point {
    let (c_w, c_h) = (self.canvas.width, self.canvas.height);
    let mut x = self.rng.gen_range(3 * c_w / 10..=7 * c_w / 10);
    let mut y = (c_h >> 1) - (img_size.height >> 1);
    if x < 0 || x >= c_w {
      x = c_w >> 1;
    }
    if y < 0 || y >= c_h {
      y = c_h >> 1;
    }
    Point::new(x, y)
  }

  fn pick_spiral(&mut self) -> Spiral {
    let reverse = self.rng.gen::<bool>();
    if self.rng.gen::<bool>() {
      let a = if reverse { -self.arch_param } else { self.arch_param };
      Spiral::Archimedean(Archimedean::new(a))
    } else {
      Spiral::Rectangular(Rectangular::new(self.rect_param, reverse))
    }
  }

  fn place_one(
    word: &mut Word,
    placed: &[Word],
    seed: Point,
    spiral: Spiral,
    canvas: CanvasSize,
    stay_away: i32
  ) {
    let mut cursor = seed;
    // index of the most recently colliding neighbor, checked first
    let mut last_hit = 0;
    let mut steps: u64 = 0;
    let mut countdown: Option<u64> = None;

    for offset in spiral {
      cursor = cursor + offset;

      match countdown.as_mut() {
        Some(n) => {
          *n -= 1;
          if *n == 0 {
            break;
          }
        }
        None => steps += 1
      }

      if cursor.x < 0 || cursor.x >= canvas.width || cursor.y < 0 || cursor.y > canvas.height {
        // the cursor left the canvas; bound the rest of the search to a
        // multiple of the steps already taken
        if countdown.is_none() {
          countdown = Some(1 + 10 * steps);
        }
      }

      let mut collision = false;
      if let Some(neighbor) = placed.get(last_hit) {
        collision = Self::overlaps(word, neighbor, cursor, stay_away);
      }

      if !collision {
        for (j, neighbor) in placed.iter().enumerate() {
          if j == last_hit {
            continue;
          }
          if Self::overlaps(word, neighbor, cursor, stay_away) {
            collision = true;
            last_hit = j;
            break; // one hit rejects the offset, try the next one
          }
        }
      }

      if !collision {
        if collision::fits_inside_canvas(&word.tree, cursor.to_vector(), canvas) {
          word.place = Some(cursor);
          word.state = PlacementState::Placed;
          return;
        }
        if word.place.is_none() {
          // outside the canvas, but collision free; keep the first such
          // offset so the word is guaranteed a spot
          word.place = Some(cursor);
        }
      }
    }

    word.state = if word.place.is_some() {
      PlacementState::Fallback
    } else {
      PlacementState::Unplaced
    };
  }

  fn overlaps(word: &Word, neighbor: &Word, at: Point, stay_away: i32) -> bool {
    match neighbor.place {
      Some(place) => collision::collides(
        &word.tree,
        &neighbor.tree,
        at.to_vector(),
        place.to_vector(),
        stay_away
      ),
      None => false
    }
  }
}

/// Grow the proposed canvas to cover every placed footprint, shifting the
/// recorded offsets so none stays negative. A pure post-pass over the final
/// offsets, run once after all placements finish.
pub fn expand_canvas(words: &mut [Word], proposed: CanvasSize) -> CanvasSize {
  let (mut x_min, mut y_min) = (0, 0);
  for word in words.iter() {
    if let Some(p) = word.place {
      x_min = x_min.min(p.x);
      y_min = y_min.min(p.y);
    }
  }
  let shift = Shift::new(-x_min, -y_min);

  let (mut x_max, mut y_max) = (0, 0);
  for word in words.iter_mut() {
    if let Some(p) = word.place.as_mut() {
      *p += shift;
      x_max = x_max.max(p.x + word.img_size.width);
      y_max = y_max.max(p.y + word.img_size.height);
    }
  }
  CanvasSize::new(proposed.width.max(x_max), proposed.height.max(y_max))
}
