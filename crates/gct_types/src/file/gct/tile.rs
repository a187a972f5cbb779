//! Super-tile traversal order for `.GCT` planes.
//!
//! Both planes store their 8-byte blocks in 8x8 super-tile order: the image
//! is scanned as super-tiles row by row, left to right, and each super-tile
//! emits its four 4x4 sub-tiles top-left, top-right, bottom-left,
//! bottom-right. Width and height are always multiples of 8, so no partial
//! tiles exist.

use super::constants::{BLOCK_DIM, TILE_DIM};

/// Sub-tile offsets within a super-tile, in emission order.
const SUB_TILE_OFFSETS: [(usize, usize); 4] =
	[(0, 0), (BLOCK_DIM, 0), (0, BLOCK_DIM), (BLOCK_DIM, BLOCK_DIM)];

/// Iterator over the top-left texel of every 4x4 sub-tile, in on-disk
/// block order.
#[derive(Debug, Clone)]
pub(super) struct SubTiles {
	width: usize,
	height: usize,
	x: usize,
	y: usize,
	sub: usize,
}

impl Iterator for SubTiles {
	type Item = (usize, usize);

	fn next(&mut self) -> Option<Self::Item> {
		if self.y >= self.height {
			return None;
		}

		let (dx, dy) = SUB_TILE_OFFSETS[self.sub];
		let origin = (self.x + dx, self.y + dy);

		self.sub += 1;
		if self.sub == SUB_TILE_OFFSETS.len() {
			self.sub = 0;
			self.x += TILE_DIM;
			if self.x >= self.width {
				self.x = 0;
				self.y += TILE_DIM;
			}
		}

		Some(origin)
	}

	fn size_hint(&self) -> (usize, Option<usize>) {
		let total = self.width / BLOCK_DIM * (self.height / BLOCK_DIM);
		let done = (self.y / TILE_DIM * (self.width / TILE_DIM) + self.x / TILE_DIM)
			* SUB_TILE_OFFSETS.len()
			+ self.sub;
		let remaining = total - done;
		(remaining, Some(remaining))
	}
}

impl ExactSizeIterator for SubTiles {}

/// Walks the 4x4 sub-tiles of a `width` x `height` image in on-disk order.
///
/// Both dimensions must already be validated as positive multiples of 8.
pub(super) fn sub_tiles(width: usize, height: usize) -> SubTiles {
	SubTiles {
		width,
		height,
		x: 0,
		y: 0,
		sub: 0,
	}
}
