//! Benchmark helper utilities for gct-rs
//!
//! This module generates synthetic RGBA images for the benchmark suite, so
//! the benches run hermetically without any on-disk game assets.

use gct_types::file::gct::Rgba;

/// Generates a smooth diagonal gradient with a varying alpha channel
///
/// Gradients are the codec's typical workload: every tile carries a handful
/// of distinct colors, so both the principal-axis seeding and the
/// least-squares refinement run on every block.
pub fn generate_gradient_image(width: usize, height: usize) -> Vec<Rgba> {
	let mut pixels = Vec::with_capacity(width * height);
	for y in 0..height {
		for x in 0..width {
			let r = (x * 255 / (width - 1)) as u8;
			let g = (y * 255 / (height - 1)) as u8;
			let b = ((x + y) * 255 / (width + height - 2)) as u8;
			let a = (x ^ y) as u8;
			pixels.push(Rgba::new(r, g, b, a));
		}
	}
	pixels
}

/// Common benchmark sizes for synthetic test data
pub mod sizes {
	/// Tiny image: 64x64 (4,096 pixels)
	pub const TINY: (usize, usize) = (64, 64);
	/// Small image: 256x256 (65,536 pixels)
	pub const SMALL: (usize, usize) = (256, 256);
	/// Medium image: 512x512 (262,144 pixels)
	pub const MEDIUM: (usize, usize) = (512, 512);
	/// Large image: 1024x768 (786,432 pixels) - typical game asset
	pub const LARGE: (usize, usize) = (1024, 768);
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_generate_gradient_image() {
		let pixels = generate_gradient_image(64, 64);
		assert_eq!(pixels.len(), 64 * 64);
		assert_eq!(pixels[0], Rgba::new(0, 0, 0, 0));
		assert_eq!(pixels[63].r, 255);
	}

	#[test]
	fn test_sizes_constants() {
		assert_eq!(sizes::TINY, (64, 64));
		assert_eq!(sizes::SMALL, (256, 256));
		assert_eq!(sizes::MEDIUM, (512, 512));
		assert_eq!(sizes::LARGE, (1024, 768));
	}
}
