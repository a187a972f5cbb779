//! `.GCT` encoder.
//!
//! Encodes RGBA images into the supported subset of GCT: a color plane
//! followed by an alpha plane, both 4 bits per pixel in super-tile block
//! order. The color plane compresses the RGB channels directly; the alpha
//! plane compresses a synthetic tile whose green channel carries the alpha
//! byte, reusing the 6 bits of green precision the block format offers.

use crate::file::GctError;

use super::{
	Header, Rgba, bc1, block,
	constants::{BLOCK_DIM, BLOCK_SIZE},
	tile,
};

/// Copies a 4x4 tile of pixels out of the image.
fn image_rect(pixels: &[Rgba], stride: usize, x: usize, y: usize, rect: &mut [Rgba; 16]) {
	for row in 0..BLOCK_DIM {
		for col in 0..BLOCK_DIM {
			rect[row * BLOCK_DIM + col] = pixels[(y + row) * stride + x + col];
		}
	}
}

/// Copies a 4x4 tile of alpha values, coded as green pixels.
fn alpha_rect(pixels: &[Rgba], stride: usize, x: usize, y: usize, rect: &mut [Rgba; 16]) {
	for row in 0..BLOCK_DIM {
		for col in 0..BLOCK_DIM {
			let alpha = pixels[(y + row) * stride + x + col].a;
			rect[row * BLOCK_DIM + col] = Rgba::new(0, alpha, 0, 0);
		}
	}
}

/// Encodes an image into a caller-provided payload buffer.
///
/// `pixels` must hold one [`Rgba`] per pixel in row-major order and
/// `output` at least [`Header::encoded_size`] bytes. The header itself is
/// not written; [`encode`] produces a complete file.
pub fn encode_into(header: &Header, pixels: &[Rgba], output: &mut [u8]) -> Result<(), GctError> {
	if pixels.len() < header.pixel_count() {
		return Err(GctError::InsufficientData {
			expected: header.pixel_count(),
			actual: pixels.len(),
		});
	}
	if output.len() < header.encoded_size() {
		return Err(GctError::InsufficientData {
			expected: header.encoded_size(),
			actual: output.len(),
		});
	}

	let width = header.width() as usize;
	let height = header.height() as usize;
	let (color_plane, alpha_plane) =
		output[..header.encoded_size()].split_at_mut(header.encoded_size() / 2);

	let mut rect = [Rgba::default(); 16];
	for (i, (x, y)) in tile::sub_tiles(width, height).enumerate() {
		image_rect(pixels, width, x, y, &mut rect);
		let mut blk = bc1::compress_block(&rect);
		block::to_gct_order(&mut blk);
		color_plane[i * BLOCK_SIZE..][..BLOCK_SIZE].copy_from_slice(&blk);

		alpha_rect(pixels, width, x, y, &mut rect);
		let mut blk = bc1::compress_block(&rect);
		block::to_gct_order(&mut blk);
		alpha_plane[i * BLOCK_SIZE..][..BLOCK_SIZE].copy_from_slice(&blk);
	}

	Ok(())
}

/// Encodes an image into a complete `.GCT` file, header included.
pub fn encode(header: &Header, pixels: &[Rgba]) -> Result<Vec<u8>, GctError> {
	let mut file = vec![0u8; Header::SIZE + header.encoded_size()];
	file[..Header::SIZE].copy_from_slice(&header.to_bytes());
	encode_into(header, pixels, &mut file[Header::SIZE..])?;

	Ok(file)
}
