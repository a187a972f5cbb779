//! 4x4 block compressor.
//!
//! Compresses a 16-texel RGBA tile into the 8-byte two-endpoint block the
//! planes are built from, in the conventional little-endian block layout
//! (the on-disk byte order is applied afterwards, see
//! [`block::to_gct_order`](super::block::to_gct_order)).
//!
//! Endpoints are seeded from the extremes of the color distribution along
//! its principal axis, then refined by a least-squares fit against the
//! current index assignment; indices are re-matched after every endpoint
//! change and the fit is run twice. Index selection minimizes squared
//! distance in RGB space, with ties broken toward the lower index. Blocks
//! are always emitted with the first endpoint numerically largest, so the
//! endpoint ordering never flips a downstream decoder into a three-color
//! mode.
//!
//! Solid tiles (and fits that collapse to a single color) take a canonical
//! form with both endpoints equal and an all-zero index table. That keeps
//! re-encoding a decoded image byte-identical: the 565 quantizer inverts
//! the channel expansion exactly, so a canonical block survives a
//! decode/encode round trip unchanged.

use super::Rgba;
use super::block::{Color16, rgb_ramp};

/// Weight of the first endpoint in each ramp entry, in thirds.
const W1_TAB: [i32; 4] = [3, 0, 2, 1];

/// Rounding fixed-point multiply by `b`/255.
fn mul8bit(a: i32, b: i32) -> i32 {
	let t = a * b + 128;
	(t + (t >> 8)) >> 8
}

/// Quantizes an 8-bit-per-channel color to packed R5G6B5.
fn as_565(texel: Rgba) -> u16 {
	((mul8bit(texel.r as i32, 31) << 11)
		| (mul8bit(texel.g as i32, 63) << 5)
		| mul8bit(texel.b as i32, 31)) as u16
}

/// Picks the squared-distance-minimizing ramp index for every texel.
///
/// Ties go to the lower index. Texel `i` occupies bits 2i..2i+2 of the
/// returned table.
fn match_indices(texels: &[Rgba; 16], max16: u16, min16: u16) -> u32 {
	let palette = rgb_ramp(Color16(max16), Color16(min16));

	let mut mask = 0u32;
	for (i, texel) in texels.iter().enumerate() {
		let mut best = 0u32;
		let mut best_err = i32::MAX;
		for (index, entry) in palette.iter().enumerate() {
			let dr = texel.r as i32 - entry[0] as i32;
			let dg = texel.g as i32 - entry[1] as i32;
			let db = texel.b as i32 - entry[2] as i32;
			let err = dr * dr + dg * dg + db * db;
			if err < best_err {
				best_err = err;
				best = index as u32;
			}
		}
		mask |= best << (i * 2);
	}

	mask
}

/// Seeds the endpoints from the extremes along the principal axis.
fn principal_endpoints(texels: &[Rgba; 16]) -> (u16, u16) {
	let mut mins = [255i32; 3];
	let mut maxs = [0i32; 3];
	let mut sums = [0i32; 3];
	for t in texels {
		let ch = [t.r as i32, t.g as i32, t.b as i32];
		for i in 0..3 {
			mins[i] = mins[i].min(ch[i]);
			maxs[i] = maxs[i].max(ch[i]);
			sums[i] += ch[i];
		}
	}
	let mu = sums.map(|s| (s + 8) >> 4);

	// covariance matrix, upper triangle
	let mut cov = [0i32; 6];
	for t in texels {
		let r = t.r as i32 - mu[0];
		let g = t.g as i32 - mu[1];
		let b = t.b as i32 - mu[2];
		cov[0] += r * r;
		cov[1] += r * g;
		cov[2] += r * b;
		cov[3] += g * g;
		cov[4] += g * b;
		cov[5] += b * b;
	}
	let covf = cov.map(|c| c as f32 / 255.0);

	// principal axis by power iteration, seeded with the channel spread
	let mut vr = (maxs[0] - mins[0]) as f32;
	let mut vg = (maxs[1] - mins[1]) as f32;
	let mut vb = (maxs[2] - mins[2]) as f32;
	for _ in 0..4 {
		let r = vr * covf[0] + vg * covf[1] + vb * covf[2];
		let g = vr * covf[1] + vg * covf[3] + vb * covf[4];
		let b = vr * covf[2] + vg * covf[4] + vb * covf[5];
		vr = r;
		vg = g;
		vb = b;
	}

	let magn = vr.abs().max(vg.abs()).max(vb.abs());
	let (wr, wg, wb) = if magn < 4.0 {
		// distribution too flat for the iteration, weight by luminance
		(299, 587, 114)
	} else {
		(
			(vr * 512.0 / magn) as i32,
			(vg * 512.0 / magn) as i32,
			(vb * 512.0 / magn) as i32,
		)
	};

	let mut min_dot = i32::MAX;
	let mut max_dot = i32::MIN;
	let mut min_texel = texels[0];
	let mut max_texel = texels[0];
	for t in texels {
		let dot = t.r as i32 * wr + t.g as i32 * wg + t.b as i32 * wb;
		if dot < min_dot {
			min_dot = dot;
			min_texel = *t;
		}
		if dot > max_dot {
			max_dot = dot;
			max_texel = *t;
		}
	}

	(as_565(max_texel), as_565(min_texel))
}

/// Refits both endpoints to the current index assignment.
///
/// Returns whether the packed endpoints changed.
fn refine_endpoints(texels: &[Rgba; 16], max16: &mut u16, min16: &mut u16, mask: u32) -> bool {
	let old = (*max16, *min16);

	if (mask ^ (mask << 2)) < 4 {
		// every texel sits on one ramp entry; the fit is singular, so
		// collapse to the rounded average color
		let mut sums = [8i32; 3];
		for t in texels {
			sums[0] += t.r as i32;
			sums[1] += t.g as i32;
			sums[2] += t.b as i32;
		}
		let avg = Rgba::new((sums[0] >> 4) as u8, (sums[1] >> 4) as u8, (sums[2] >> 4) as u8, 0);
		*max16 = as_565(avg);
		*min16 = *max16;
	} else {
		let mut at1 = [0i32; 3];
		let mut at2 = [0i32; 3];
		let (mut xx, mut yy, mut xy) = (0i32, 0i32, 0i32);

		let mut m = mask;
		for t in texels {
			let w1 = W1_TAB[(m & 3) as usize];
			let w2 = 3 - w1;
			m >>= 2;

			xx += w1 * w1;
			yy += w2 * w2;
			xy += w1 * w2;
			at1[0] += w1 * t.r as i32;
			at1[1] += w1 * t.g as i32;
			at1[2] += w1 * t.b as i32;
			at2[0] += w2 * t.r as i32;
			at2[1] += w2 * t.g as i32;
			at2[2] += w2 * t.b as i32;
		}

		// least-squares solve for both endpoints at once, scaled straight
		// into the 5- and 6-bit channels
		let det = (xx * yy - xy * xy) as f32;
		let frb = 3.0 * 31.0 / 255.0 / det;
		let fg = frb * 63.0 / 31.0;

		let q5 = |v: f32| ((v + 0.5) as i32).clamp(0, 31) as u16;
		let q6 = |v: f32| ((v + 0.5) as i32).clamp(0, 63) as u16;

		*max16 = (q5((at1[0] * yy - at2[0] * xy) as f32 * frb) << 11)
			| (q6((at1[1] * yy - at2[1] * xy) as f32 * fg) << 5)
			| q5((at1[2] * yy - at2[2] * xy) as f32 * frb);
		*min16 = (q5((at2[0] * xx - at1[0] * xy) as f32 * frb) << 11)
			| (q6((at2[1] * xx - at1[1] * xy) as f32 * fg) << 5)
			| q5((at2[2] * xx - at1[2] * xy) as f32 * frb);
	}

	(*max16, *min16) != old
}

/// Compresses a 4x4 RGBA tile into an 8-byte block.
///
/// Only the RGB channels participate; alpha-plane tiles carry their payload
/// in the green channel. The output uses little-endian endpoints and a
/// least-significant-bits-first index table.
pub(super) fn compress_block(texels: &[Rgba; 16]) -> [u8; 8] {
	let mut max16;
	let mut min16;
	let mut mask;

	let first = texels[0];
	if texels.iter().all(|t| (t.r, t.g, t.b) == (first.r, first.g, first.b)) {
		max16 = as_565(first);
		min16 = max16;
		mask = 0;
	} else {
		let (seed_max, seed_min) = principal_endpoints(texels);
		max16 = seed_max;
		min16 = seed_min;
		mask = if max16 != min16 {
			match_indices(texels, max16, min16)
		} else {
			0
		};

		for _ in 0..2 {
			let last = mask;
			if refine_endpoints(texels, &mut max16, &mut min16, mask) {
				mask = if max16 != min16 {
					match_indices(texels, max16, min16)
				} else {
					0
				};
			}
			if mask == last {
				break;
			}
		}
	}

	if max16 < min16 {
		std::mem::swap(&mut max16, &mut min16);
		// swapping endpoints renames ramp entries 0<->1 and 2<->3
		mask ^= 0x5555_5555;
	}

	let mut out = [0u8; 8];
	out[0..2].copy_from_slice(&max16.to_le_bytes());
	out[2..4].copy_from_slice(&min16.to_le_bytes());
	out[4..8].copy_from_slice(&mask.to_le_bytes());
	out
}

#[cfg(test)]
mod tests {
	use super::*;

	/// Reconstructs the 16 texels a little-endian block decodes to.
	fn decode_le_block(block: &[u8; 8]) -> [Rgba; 16] {
		let max16 = u16::from_le_bytes([block[0], block[1]]);
		let min16 = u16::from_le_bytes([block[2], block[3]]);
		let mask = u32::from_le_bytes([block[4], block[5], block[6], block[7]]);
		let palette = rgb_ramp(Color16(max16), Color16(min16));

		let mut out = [Rgba::default(); 16];
		for (i, texel) in out.iter_mut().enumerate() {
			let [r, g, b] = palette[((mask >> (i * 2)) & 3) as usize];
			*texel = Rgba::new(r, g, b, 0);
		}
		out
	}

	fn solid(r: u8, g: u8, b: u8) -> [Rgba; 16] {
		[Rgba::new(r, g, b, 255); 16]
	}

	#[test]
	fn test_solid_white_block() {
		let block = compress_block(&solid(255, 255, 255));
		assert_eq!(block, [0xFF, 0xFF, 0xFF, 0xFF, 0, 0, 0, 0]);
	}

	#[test]
	fn test_solid_black_block() {
		let block = compress_block(&solid(0, 0, 0));
		assert_eq!(block, [0, 0, 0, 0, 0, 0, 0, 0]);
	}

	#[test]
	fn test_solid_color_error_bound() {
		let tile = solid(100, 50, 200);
		let decoded = decode_le_block(&compress_block(&tile));
		for texel in &decoded {
			assert!((texel.r as i32 - 100).abs() <= 4);
			assert!((texel.g as i32 - 50).abs() <= 2);
			assert!((texel.b as i32 - 200).abs() <= 4);
		}
	}

	#[test]
	fn test_two_color_tile_is_exact() {
		// Extremes are exactly representable in 565, so a black/white
		// tile must reconstruct without error.
		let mut tile = solid(0, 0, 0);
		for texel in tile.iter_mut().skip(8) {
			*texel = Rgba::new(255, 255, 255, 255);
		}

		let decoded = decode_le_block(&compress_block(&tile));
		for (texel, expected) in decoded.iter().zip(tile.iter()) {
			assert_eq!((texel.r, texel.g, texel.b), (expected.r, expected.g, expected.b));
		}
	}

	#[test]
	fn test_four_color_order() {
		// The first endpoint is never numerically smaller than the second.
		let mut tile = solid(10, 20, 30);
		for (i, texel) in tile.iter_mut().enumerate() {
			*texel = Rgba::new((i * 16) as u8, 255 - (i * 16) as u8, (i * 7) as u8, 255);
		}

		let block = compress_block(&tile);
		let max16 = u16::from_le_bytes([block[0], block[1]]);
		let min16 = u16::from_le_bytes([block[2], block[3]]);
		assert!(max16 >= min16);
	}

	#[test]
	fn test_gradient_error_bound() {
		let mut tile = solid(0, 0, 0);
		for row in 0..4 {
			for col in 0..4 {
				let v = (row * 4 + col) as u8 * 17;
				tile[row * 4 + col] = Rgba::new(v, v, v, 255);
			}
		}

		let decoded = decode_le_block(&compress_block(&tile));
		let mut total_err = 0i32;
		for (texel, expected) in decoded.iter().zip(tile.iter()) {
			total_err += (texel.r as i32 - expected.r as i32).abs();
		}
		// a full-range ramp is the worst case for four levels; the mean
		// error stays within half a quantization cell
		assert!(total_err / 16 <= 24, "mean error {} too high", total_err / 16);
	}

	#[test]
	fn test_reencode_is_stable() {
		// Compressing a tile the compressor itself produced must yield
		// the identical block.
		let tiles: [[Rgba; 16]; 4] = [
			solid(255, 255, 255),
			solid(93, 121, 47),
			{
				let mut t = solid(0, 0, 0);
				for (i, texel) in t.iter_mut().enumerate() {
					let v = (i as u8) * 13;
					*texel = Rgba::new(v, v.wrapping_mul(3), 255 - v, 255);
				}
				t
			},
			{
				let mut t = solid(200, 10, 10);
				for texel in t.iter_mut().skip(4) {
					*texel = Rgba::new(10, 10, 200, 255);
				}
				t
			},
		];

		for tile in &tiles {
			let block = compress_block(tile);
			let reencoded = compress_block(&decode_le_block(&block));
			assert_eq!(block, reencoded);
		}
	}
}
