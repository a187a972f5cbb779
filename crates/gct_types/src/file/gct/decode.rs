//! `.GCT` decoder.
//!
//! Decodes the supported subset of GCT textures: a color plane followed by
//! an alpha plane, both 4 bits per pixel in super-tile block order. Each
//! color block and its alpha-plane partner reconstruct one 4x4 tile; the
//! alpha value is recovered from the green channel of the alpha block's
//! ramp.

use crate::file::GctError;

use super::{File, Header, Rgba, block, constants::BLOCK_SIZE, tile};

/// Returns the decoded size in bytes of the image stored in a raw `.GCT`
/// buffer.
///
/// The buffer only needs to hold the header. Errors mirror
/// [`Header::from_bytes`]: `InvalidImage` for bad or disagreeing size
/// fields, `UnsupportedImage` for unknown flags or orientations.
pub fn decoded_size(file: &[u8]) -> Result<usize, GctError> {
	let header = Header::from_bytes(file)?;
	Ok(header.decoded_size())
}

/// Decodes a `.GCT` file into a caller-provided pixel buffer.
///
/// `output` must hold at least one [`Rgba`] per pixel; the decoded image is
/// written row-major, top to bottom. Returns the parsed header so callers
/// learn the image dimensions.
pub fn decode_into(file: &[u8], output: &mut [Rgba]) -> Result<Header, GctError> {
	let header = Header::from_bytes(file)?;

	let payload = header.encoded_size();
	if file.len() < Header::SIZE + payload {
		return Err(GctError::InsufficientData {
			expected: Header::SIZE + payload,
			actual: file.len(),
		});
	}
	if output.len() < header.pixel_count() {
		return Err(GctError::InsufficientData {
			expected: header.pixel_count(),
			actual: output.len(),
		});
	}

	let width = header.width() as usize;
	let height = header.height() as usize;
	let (color_plane, alpha_plane) = file[Header::SIZE..][..payload].split_at(payload / 2);

	for (i, (x, y)) in tile::sub_tiles(width, height).enumerate() {
		let color = &color_plane[i * BLOCK_SIZE..][..BLOCK_SIZE];
		let alpha = &alpha_plane[i * BLOCK_SIZE..][..BLOCK_SIZE];
		block::decode_block_pair(color, alpha, width, &mut output[y * width + x..]);
	}

	Ok(header)
}

/// Decodes a `.GCT` file into a freshly allocated [`File`].
pub fn decode(data: &[u8]) -> Result<File, GctError> {
	let header = Header::from_bytes(data)?;
	let mut pixels = vec![Rgba::default(); header.pixel_count()];
	decode_into(data, &mut pixels)?;

	Ok(File {
		header,
		pixels,
	})
}
