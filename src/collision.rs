//! Hierarchical collision tests between spatial indices.
//!
//! Both walks are driven by an explicit work-list, so the recursion depth of
//! a deep tree never reaches the call stack.

use {
  crate::{
    geometry::{self, CanvasSize, Shift},
    quadtree::QuadTree
  },
  itertools::Itertools
};

/// Whether the shapes indexed by `a` and `b`, shifted onto the canvas by
/// `shift_a` and `shift_b`, come closer than `2 × margin` pixels to each
/// other. Symmetric in its arguments; an empty index collides with nothing.
pub fn collides(a: &QuadTree, b: &QuadTree, shift_a: Shift, shift_b: Shift, margin: i32) -> bool {
  let (root_a, root_b) = match (a.root(), b.root()) {
    (Some(root_a), Some(root_b)) => (root_a, root_b),
    _ => return false
  };

  let mut stack = vec![(root_a, root_b)];
  while let Some((i, j)) = stack.pop() {
    let (p1, p2) = (a.node(i), b.node(j));

    // if the parent rectangles do not collide, their children will not
    // collide either
    if !geometry::rects_intersect(p1.rect, p2.rect, shift_a, shift_b, margin) {
      continue;
    }

    match (p1.is_leaf(), p2.is_leaf()) {
      (true, true) => return true,
      (true, false) => stack.extend(p2.child_ids().map(|c| (i, c))),
      (false, true) => stack.extend(p1.child_ids().map(|c| (c, j))),
      (false, false) => stack.extend(p1.child_ids().cartesian_product(p2.child_ids()))
    }
  }

  false
}

/// Whether every leaf of `tree`, shifted by `shift`, lies within a canvas of
/// the given size. A node entirely inside prunes its whole subtree; an empty
/// index passes trivially.
pub fn fits_inside_canvas(tree: &QuadTree, shift: Shift, canvas: CanvasSize) -> bool {
  let mut stack: Vec<usize> = tree.root().into_iter().collect();
  while let Some(id) = stack.pop() {
    let node = tree.node(id);
    let r = node.rect.translate(shift);
    if r.min.x >= 0 && r.min.y >= 0 && r.max.x <= canvas.width && r.max.y <= canvas.height {
      continue;
    }
    if node.is_leaf() {
      return false;
    }
    stack.extend(node.child_ids());
  }
  true
}
