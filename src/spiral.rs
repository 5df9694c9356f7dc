//! Outward spiral paths on the integer lattice.
//!
//! Both families are infinite iterators of coordinates relative to their
//! starting point; the planner applies each emitted cell to a moving cursor
//! and supplies its own termination policy.

use {
  crate::geometry::Shift,
  num_traits::Float
};

/// The Archimedean spiral `r = a·φ`, snapped to the integer lattice.
/// The sign of `a` flips handedness.
#[derive(Debug, Clone)]
pub struct Archimedean<F = f32> {
  a: F,
  r: F,
  cell: (i32, i32),
  started: bool
}

impl<F: Float> Archimedean<F> {
  pub fn new(a: F) -> Self {
    Archimedean { a, r: F::zero(), cell: (0, 0), started: false }
  }
}

impl<F: Float> Iterator for Archimedean<F> {
  type Item = Shift;

  fn next(&mut self) -> Option<Shift> {
    if !self.started {
      self.started = true;
      return Some(Shift::zero());
    }
    let step = F::from(0.5).unwrap();
    loop {
      self.r = self.r + step;
      let x = self.a * self.r * self.r.cos();
      let y = self.a * self.r * self.r.sin();

      // force a move: skip radii that land on the previous cell
      let (u, v) = self.cell;
      if (x - F::from(u).unwrap()).abs() < F::one()
        && (y - F::from(v).unwrap()).abs() < F::one() {
        continue;
      }
      self.cell = (x.to_i32().unwrap(), y.to_i32().unwrap());
      return Some(Shift::new(self.cell.0, self.cell.1));
    }
  }
}

/// Rectangular spiral: unit moves through the legs {up, right, down, left},
/// the leg length starting at `a` and growing by `a` after every second leg.
/// `reverse` mirrors both coordinates, producing the opposite handedness.
#[derive(Debug, Clone)]
pub struct Rectangular {
  a: i32,
  x: i32,
  y: i32,
  leg: u8,
  remaining: i32,
  m: i32,
  reverse: bool,
  started: bool
}

impl Rectangular {
  pub fn new(a: i32, reverse: bool) -> Self {
    debug_assert!(a >= 1, "leg increment must be positive");
    Rectangular { a, x: 0, y: 0, leg: 0, remaining: a, m: a, reverse, started: false }
  }
}

impl Iterator for Rectangular {
  type Item = Shift;

  fn next(&mut self) -> Option<Shift> {
    if !self.started {
      self.started = true;
      return Some(Shift::zero());
    }
    if self.remaining == 0 {
      self.leg = (self.leg + 1) % 4;
      if self.leg == 2 || self.leg == 0 {
        self.m += self.a;
      }
      self.remaining = self.m;
    }
    self.remaining -= 1;
    match self.leg {
      0 => self.y -= 1,
      1 => self.x += 1,
      2 => self.y += 1,
      _ => self.x -= 1
    }
    Some(if self.reverse {
      Shift::new(-self.x, -self.y)
    } else {
      Shift::new(self.x, self.y)
    })
  }
}

/// either spiral family, selected at runtime by the planner
#[derive(Debug, Clone)]
pub enum Spiral {
  Archimedean(Archimedean<f32>),
  Rectangular(Rectangular)
}

impl Iterator for Spiral {
  type Item = Shift;

  fn next(&mut self) -> Option<Shift> {
    match self {
      Spiral::Archimedean(s) => s.next(),
      Spiral::Rectangular(s) => s.next()
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn both_families_start_at_the_origin() {
    assert_eq!(Archimedean::new(0.2).next(), Some(Shift::zero()));
    assert_eq!(Rectangular::new(2, false).next(), Some(Shift::zero()));
  }

  #[test]
  fn archimedean_never_repeats_a_cell_consecutively() {
    let cells: Vec<Shift> = Archimedean::new(0.2).take(500).collect();
    for pair in cells.windows(2) {
      assert_ne!(pair[0], pair[1]);
    }
  }

  #[test]
  fn archimedean_handedness_mirrors_with_the_parameter() {
    let cw: Vec<Shift> = Archimedean::new(0.2).take(100).collect();
    let ccw: Vec<Shift> = Archimedean::new(-0.2).take(100).collect();
    for (a, b) in cw.iter().zip(&ccw) {
      assert_eq!(Shift::new(-a.x, -a.y), *b);
    }
  }

  #[test]
  fn rectangular_walks_growing_legs() {
    let cells: Vec<(i32, i32)> = Rectangular::new(2, false)
      .take(13)
      .map(|s| (s.x, s.y))
      .collect();
    assert_eq!(cells, vec![
      (0, 0),
      (0, -1), (0, -2),          // up, 2
      (1, -2), (2, -2),          // right, 2
      (2, -1), (2, 0), (2, 1), (2, 2),   // down, 4
      (1, 2), (0, 2), (-1, 2), (-2, 2)   // left, 4
    ]);
  }

  #[test]
  fn rectangular_reverse_mirrors_both_coordinates() {
    let normal: Vec<Shift> = Rectangular::new(2, false).take(50).collect();
    let mirrored: Vec<Shift> = Rectangular::new(2, true).take(50).collect();
    for (a, b) in normal.iter().zip(&mirrored) {
      assert_eq!(Shift::new(-a.x, -a.y), *b);
    }
  }

  #[test]
  fn spirals_are_unbounded() {
    // the walk must eventually leave any finite window
    let far = Rectangular::new(2, false)
      .take(100_000)
      .map(|s| s.x.abs().max(s.y.abs()))
      .max()
      .unwrap();
    assert!(far > 100);

    let far = Archimedean::new(0.2)
      .take(100_000)
      .map(|s| s.x.abs().max(s.y.abs()))
      .max()
      .unwrap();
    assert!(far > 100);
  }
}
