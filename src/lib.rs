//! Collision-free placement of word shapes in ℤ².
//!
//! This is the spatial core of a wordle-style layout: each word arrives as a
//! binary occupancy mask (see [`mask::Mask`]), gets approximated by a
//! hierarchy of nested rectangles ([`quadtree::QuadTree`]), and is then
//! walked along an outward spiral ([`spiral`]) until an offset is found
//! where it collides with none of the previously placed words
//! ([`collision`], [`placement::Placer`]).
//!
//! Rasterizing words into masks, ranking tokens, coloring and final image
//! compositing are left to external collaborators; the optional `drawing`
//! feature only ships a debug visualizer for the bounding-box hierarchy.
//!
//! # Basic usage
//! ```
//! use word_placement::{
//!   geometry::CanvasSize,
//!   mask::Bitmap,
//!   placement::{expand_canvas, Placer, PlacementState, Word},
//!   quadtree::QuadTree,
//! };
//!
//! # fn main() -> anyhow::Result<()> {
//! // a rasterizer normally supplies the mask; a solid block stands in here
//! let mask = Bitmap::from_fn(120, 40, |_, _| true);
//! let mut tree = QuadTree::build(&mask, 5, 5)?;
//! tree.compress();
//!
//! let proposed = CanvasSize::new(3000, 1500);
//! let mut words = vec![Word::new("labor", 40, CanvasSize::new(120, 40), tree)];
//!
//! // words are placed in the given order; pass the largest first
//! Placer::new(proposed, 2)
//!   .with_seed(0)
//!   .place(&mut words);
//!
//! let canvas = expand_canvas(&mut words, proposed);
//! assert_eq!(words[0].state, PlacementState::Placed);
//! assert!(canvas.width >= proposed.width);
//! # Ok(())
//! # }
//! ```

pub mod geometry;
pub mod mask;
pub mod quadtree;
pub mod collision;
pub mod spiral;
pub mod placement;
#[cfg(feature = "drawing")]
pub mod drawing;
