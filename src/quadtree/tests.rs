use {
  super::*,
  crate::{
    geometry::rect,
    mask::Bitmap
  }
};

fn sorted_leaves(tree: &QuadTree) -> Vec<Rect> {
  let mut leaves = tree.leaves();
  leaves.sort_by_key(|r| (r.min.x, r.min.y, r.max.x, r.max.y));
  leaves
}

/// strict overlap of two half-open rectangles
fn overlap(r1: Rect, r2: Rect) -> bool {
  r1.min.x < r2.max.x && r2.min.x < r1.max.x &&
  r1.min.y < r2.max.y && r2.min.y < r1.max.y
}

#[test]
fn solid_square_collapses_to_a_single_box() {
  let mask = Bitmap::from_fn(10, 10, |_, _| true);
  let mut tree = QuadTree::build(&mask, 2, 2).unwrap();

  assert_eq!(tree.area_covered(), 100);
  assert!(tree.node_count() > 1);

  tree.compress();
  assert_eq!(tree.area_covered(), 100);
  assert_eq!(tree.node_count(), 1);
  assert_eq!(tree.leaves(), vec![rect(0, 0, 10, 10)]);
}

#[test]
fn construction_is_deterministic() {
  let mask = Bitmap::from_rows(&[
    "##  ####  #",
    "#    ##   #",
    "###     ###",
  ]);
  let t1 = QuadTree::build(&mask, 1, 1).unwrap();
  let t2 = QuadTree::build(&mask, 1, 1).unwrap();
  assert_eq!(sorted_leaves(&t1), sorted_leaves(&t2));
  assert_eq!(t1.area_covered(), t2.area_covered());
}

#[test]
fn small_bounding_box_yields_a_single_node() {
  let mask = Bitmap::from_fn(4, 3, |_, _| true);
  let tree = QuadTree::build(&mask, 5, 5).unwrap();
  assert_eq!(tree.node_count(), 1);
  assert_eq!(tree.depth(), 0);
  assert_eq!(tree.leaves(), vec![rect(0, 0, 4, 3)]);
}

#[test]
fn blank_mask_builds_an_empty_index() {
  let tree = QuadTree::build(&Bitmap::new(16, 16), 2, 2).unwrap();
  assert!(tree.is_empty());
  assert_eq!(tree.area_covered(), 0);
  assert_eq!(tree.node_count(), 0);
}

#[test]
fn odd_spans_split_without_gap_or_overlap() {
  let mask = Bitmap::from_fn(7, 5, |_, _| true);
  let tree = QuadTree::build(&mask, 2, 2).unwrap();

  let leaves = tree.leaves();
  assert_eq!(tree.area_covered(), 35);
  for (i, &a) in leaves.iter().enumerate() {
    for &b in &leaves[i + 1..] {
      assert!(!overlap(a, b), "leaves {:?} and {:?} overlap", a, b);
    }
  }
}

#[test]
fn children_exist_only_where_the_mask_has_ink() {
  let mask = Bitmap::from_rows(&[
    "# ",
    " #",
  ]);
  let tree = QuadTree::build(&mask, 1, 1).unwrap();
  assert_eq!(sorted_leaves(&tree), vec![rect(0, 0, 1, 1), rect(1, 1, 2, 2)]);
  assert_eq!(tree.area_covered(), 2);
}

#[test]
fn compression_preserves_covered_area() {
  let mask = Bitmap::from_rows(&[
    "####        ",
    "####        ",
    "####        ",
    "############",
    "############",
  ]);
  let mut tree = QuadTree::build(&mask, 2, 2).unwrap();
  let area = tree.area_covered();
  let nodes = tree.node_count();

  tree.compress();
  assert_eq!(tree.area_covered(), area);
  assert!(tree.node_count() < nodes);
}

#[test]
fn compression_is_idempotent() {
  let mask = Bitmap::from_rows(&[
    "#######",
    "#     #",
    "#######",
  ]);
  let mut tree = QuadTree::build(&mask, 1, 1).unwrap();
  tree.compress();
  let once = sorted_leaves(&tree);
  tree.compress();
  assert_eq!(sorted_leaves(&tree), once);
}

#[test]
fn invalid_minimum_sizes_are_rejected() {
  let mask = Bitmap::from_fn(4, 4, |_, _| true);
  assert!(QuadTree::build(&mask, 0, 2).is_err());
  assert!(QuadTree::build(&mask, 2, 0).is_err());
}

#[test]
fn malformed_mask_rectangles_fail_fast() {
  struct Inverted;
  impl Mask for Inverted {
    fn crop(&self, _: Rect) -> Option<Rect> {
      Some(rect(5, 5, 0, 0))
    }
    fn bounding_box(&self) -> Option<Rect> {
      Some(rect(5, 5, 0, 0))
    }
  }
  assert!(QuadTree::build(&Inverted, 2, 2).is_err());
}

#[test]
fn build_all_matches_sequential_construction() {
  let masks: Vec<Bitmap> = (1..6)
    .map(|i| Bitmap::from_fn(8 * i, 4 * i, |x, y| (x + y) % 3 != 0))
    .collect();
  let trees = build_all(&masks, 2, 2).unwrap();
  for (mask, tree) in masks.iter().zip(&trees) {
    let reference = QuadTree::build(mask, 2, 2).unwrap();
    assert_eq!(sorted_leaves(tree), sorted_leaves(&reference));
  }
}
