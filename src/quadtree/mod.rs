//! Quad-tree partition of an occupancy mask.
//!
//! Each node models a rectangle of the partition and owns at most 4
//! sub-rectangles. Nodes live in an arena; the child→parent relation is an
//! index into it, so the bottom-up compression walk needs no shared
//! ownership.

use {
  crate::{
    geometry::{self, Rect},
    mask::Mask
  },
  anyhow::{ensure, Result},
  std::fmt::{Debug, Formatter}
};

#[cfg(test)] mod tests;

#[derive(Clone)]
pub(crate) struct Node {
  pub rect: Rect,
  pub parent: Option<usize>,
  pub children: [Option<usize>; 4],
  /// whether the node produced the maximum legal number of children
  /// (2 or 4) during construction
  pub is_full: bool
}

impl Node {
  fn new(rect: Rect, parent: Option<usize>) -> Self {
    Node { rect, parent, children: [None; 4], is_full: false }
  }

  pub fn is_leaf(&self) -> bool {
    self.children.iter().all(Option::is_none)
  }

  pub fn child_ids(&self) -> impl Iterator<Item = usize> + Clone + '_ {
    self.children.iter().filter_map(|c| *c)
  }
}

/// Hierarchic bounding boxes of a word shape.
///
/// Immutable after [`compress`](QuadTree::compress); an absent root means
/// the mask had no ink at all, and such an index never collides with
/// anything.
#[derive(Clone)]
pub struct QuadTree {
  nodes: Vec<Node>,
  root: Option<usize>
}

impl QuadTree {
  /// the index of a blank mask
  pub fn empty() -> Self {
    QuadTree { nodes: vec![], root: None }
  }

  /// Build the partition of `mask` down to boxes of at most
  /// `min_w × min_h` pixels.
  ///
  /// A node is split at the midpoint of whichever axes still exceed their
  /// minimum: into 4 quadrants when both do, into 2 halves otherwise. A
  /// sub-rectangle becomes a child only if the mask has ink inside it.
  pub fn build(mask: &impl Mask, min_w: i32, min_h: i32) -> Result<Self> {
    ensure!(min_w >= 1 && min_h >= 1, "invalid minimum box size {}x{}", min_w, min_h);

    let bbox = match mask.bounding_box() {
      Some(bbox) => bbox,
      None => return Ok(Self::empty())
    };
    geometry::validate(bbox)?;

    let mut tree = QuadTree { nodes: vec![Node::new(bbox, None)], root: Some(0) };
    let mut stack = vec![0];

    while let Some(id) = stack.pop() {
      let r = tree.nodes[id].rect;
      let (w, h) = (r.max.x - r.min.x, r.max.y - r.min.y);
      if w <= min_w && h <= min_h {
        continue; // small enough, stays a leaf
      }

      // split point, rounded up on odd spans so the two halves
      // reconstruct the parent span exactly
      let dx = (r.min.x + r.max.x + 1) >> 1;
      let dy = (r.min.y + r.max.y + 1) >> 1;

      let quads: &[Rect] = if w > min_w && h > min_h {
        &[
          geometry::rect(r.min.x, r.min.y, dx, dy),
          geometry::rect(dx, r.min.y, r.max.x, dy),
          geometry::rect(r.min.x, dy, dx, r.max.y),
          geometry::rect(dx, dy, r.max.x, r.max.y)
        ]
      } else if w > min_w {
        &[
          geometry::rect(r.min.x, r.min.y, dx, r.max.y),
          geometry::rect(dx, r.min.y, r.max.x, r.max.y)
        ]
      } else {
        &[
          geometry::rect(r.min.x, r.min.y, r.max.x, dy),
          geometry::rect(r.min.x, dy, r.max.x, r.max.y)
        ]
      };

      let mut is_full = true;
      for (slot, &quad) in quads.iter().enumerate() {
        match mask.crop(quad) {
          Some(content) => {
            geometry::validate(content)?;
            let child = tree.nodes.len();
            tree.nodes.push(Node::new(quad, Some(id)));
            tree.nodes[id].children[slot] = Some(child);
            stack.push(child);
          }
          None => is_full = false
        }
      }
      tree.nodes[id].is_full = is_full;
    }

    Ok(tree)
  }

  /// Collapse every full node whose children are all leaves, bottom-up,
  /// until there is nothing left to remove. Structure shrinks; the covered
  /// area does not change. Idempotent.
  pub fn compress(&mut self) {
    let root = match self.root {
      Some(root) => root,
      None => return
    };

    // record the nodes level by level, root first
    let mut levels = vec![vec![root]];
    loop {
      let next: Vec<usize> = levels.last().unwrap().iter()
        .flat_map(|&id| self.nodes[id].child_ids())
        .collect();
      if next.is_empty() {
        break;
      }
      levels.push(next);
    }

    // deepest level first; leaf status is sampled before any deletion
    // at the level applies
    for level in (1..levels.len()).rev() {
      let collapse: Vec<usize> = levels[level].iter()
        .filter_map(|&id| self.nodes[id].parent)
        .filter(|&p| {
          self.nodes[p].is_full
            && self.nodes[p].child_ids().all(|c| self.nodes[c].is_leaf())
        })
        .collect();
      for p in collapse {
        self.nodes[p].children = [None; 4];
      }
    }
  }

  pub fn is_empty(&self) -> bool {
    self.root.is_none()
  }

  /// leaf rectangles; the shape is the disjoint union of these
  pub fn leaves(&self) -> Vec<Rect> {
    let mut result = vec![];
    let mut stack: Vec<usize> = self.root.into_iter().collect();
    while let Some(id) = stack.pop() {
      let node = &self.nodes[id];
      if node.is_leaf() {
        result.push(node.rect);
      } else {
        stack.extend(node.child_ids());
      }
    }
    result
  }

  /// total area of the leaf rectangles, in pixels
  pub fn area_covered(&self) -> i64 {
    self.leaves().into_iter().map(geometry::area).sum()
  }

  /// number of nodes reachable from the root
  pub fn node_count(&self) -> usize {
    let mut count = 0;
    let mut stack: Vec<usize> = self.root.into_iter().collect();
    while let Some(id) = stack.pop() {
      count += 1;
      stack.extend(self.nodes[id].child_ids());
    }
    count
  }

  /// maximum subdivision depth, 0 for a single-node tree
  pub fn depth(&self) -> u32 {
    let mut depth = 0;
    let mut stack: Vec<(usize, u32)> = self.root.into_iter().map(|id| (id, 0)).collect();
    while let Some((id, d)) = stack.pop() {
      depth = depth.max(d);
      stack.extend(self.nodes[id].child_ids().map(|c| (c, d + 1)));
    }
    depth
  }

  pub(crate) fn root(&self) -> Option<usize> {
    self.root
  }

  pub(crate) fn node(&self, id: usize) -> &Node {
    &self.nodes[id]
  }
}

/// build the indices of a whole batch of masks, in parallel
pub fn build_all<M: Mask + Sync>(masks: &[M], min_w: i32, min_h: i32) -> Result<Vec<QuadTree>> {
  use rayon::prelude::*;

  masks.par_iter()
    .map(|mask| QuadTree::build(mask, min_w, min_h))
    .collect()
}

impl Debug for QuadTree {
  fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
    use humansize::{FileSize, file_size_opts as options};

    f.debug_struct("QuadTree")
      .field("total_nodes", &self.node_count())
      .field("max_depth", &self.depth())
      .field("size", &(std::mem::size_of::<Node>() * self.nodes.len())
        .file_size(options::BINARY).unwrap())
      .finish()
  }
}
