//! `.GCT` texture format support for `gct-rs`.
//!
//! ## File layout
//!
//! | Offset | Size  | Field         | Description                              |
//! |--------|-------|---------------|------------------------------------------|
//! | 0x00   | 4     | `width`       | Image width in pixels (big-endian)       |
//! | 0x04   | 4     | `height`      | Image height in pixels (big-endian)      |
//! | 0x08   | 4     | `width2`      | Duplicate of `width`                     |
//! | 0x0C   | 4     | `height2`     | Duplicate of `height`                    |
//! | 0x10   | 4     | `flags`       | Texture flags, only 0x0000000A supported |
//! | 0x14   | 4     | `orientation` | 0 = upright, only 0 supported            |
//! | 0x18   | 8     | padding       | Zero on emit, ignored on parse           |
//! | 0x20   | W·H/2 | color plane   | 8-byte blocks in super-tile order        |
//! | ...    | W·H/2 | alpha plane   | Alpha encoded as green, same layout      |
//!
//! Both planes are streams of 8-byte blocks, each covering a 4x4 texel tile:
//! two big-endian R5G6B5 endpoint colors followed by a big-endian 32-bit
//! table of 2-bit palette indices, most significant bits first. The alpha
//! plane stores the alpha channel as the green channel of a synthetic tile,
//! reusing the 6-bit green precision of the color blocks.

mod bc1;
mod block;
mod decode;
mod encode;
mod tile;


use std::{fmt::Display, io::Read};

use crate::file::GctError;

pub use decode::{decode, decode_into, decoded_size};
pub use encode::{encode, encode_into};

mod constants {
	/// Header size for `.GCT` files
	pub const HEADER_SIZE: usize = 32;

	/// Texel rows and columns covered by one block
	pub const BLOCK_DIM: usize = 4;

	/// Encoded size of one block in bytes
	pub const BLOCK_SIZE: usize = 8;

	/// Texel rows and columns covered by one super-tile (four blocks)
	pub const TILE_DIM: usize = 8;
}

/// Header flag bit 1. Meaning unknown, but set in every supported file.
pub const FLAG_UNK01: u32 = 0x0000_0002;

/// Header flag bit 3: the texture carries an alpha plane.
pub const FLAG_ALPHA: u32 = 0x0000_0008;

/// The only flag combination this codec reads or writes.
pub const SUPPORTED_FLAGS: u32 = FLAG_UNK01 | FLAG_ALPHA;

/// An 8-bit-per-channel RGBA pixel.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Rgba {
	/// Red component
	pub r: u8,
	/// Green component
	pub g: u8,
	/// Blue component
	pub b: u8,
	/// Alpha component
	pub a: u8,
}

impl Rgba {
	/// Creates a pixel from its four components.
	pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
		Self {
			r,
			g,
			b,
			a,
		}
	}
}

/// Reads a big-endian u32 field at a byte offset.
fn be_u32(data: &[u8], offset: usize) -> u32 {
	u32::from_be_bytes([data[offset], data[offset + 1], data[offset + 2], data[offset + 3]])
}

/// Reads a big-endian u32 field and reinterprets it as signed.
fn be_i32(data: &[u8], offset: usize) -> i32 {
	be_u32(data, offset) as i32
}

/// Checks that a width/height pair describes an encodable image.
///
/// A dimension is valid when it is positive and a multiple of 8, the
/// smallest super-tile.
const fn valid_image_size(width: i32, height: i32) -> bool {
	width > 7 && height > 7 && (width & 7) == 0 && (height & 7) == 0
}

/// Header structure for `.GCT` files
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Header {
	width: i32,
	height: i32,
	flags: u32,
	orientation: i32,
}

impl Header {
	/// Size of the header in bytes
	pub const SIZE: usize = constants::HEADER_SIZE;

	/// Creates a header for an image of the given size.
	///
	/// `width` and `height` must be positive multiples of 8, and `flags`
	/// must be [`SUPPORTED_FLAGS`]; anything else is rejected. The
	/// orientation is always upright.
	pub fn new(width: i32, height: i32, flags: u32) -> Result<Self, GctError> {
		if !valid_image_size(width, height) {
			return Err(GctError::InvalidSize {
				width,
				height,
			});
		}
		if flags != SUPPORTED_FLAGS {
			return Err(GctError::UnsupportedFlags(flags));
		}

		Ok(Self {
			width,
			height,
			flags,
			orientation: 0,
		})
	}

	/// Returns the image width in pixels.
	pub fn width(&self) -> i32 {
		self.width
	}

	/// Returns the image height in pixels.
	pub fn height(&self) -> i32 {
		self.height
	}

	/// Returns the texture flags.
	pub fn flags(&self) -> u32 {
		self.flags
	}

	/// Returns the orientation field (0 = upright).
	pub fn orientation(&self) -> i32 {
		self.orientation
	}

	/// Returns the number of pixels in the image.
	pub fn pixel_count(&self) -> usize {
		self.width as usize * self.height as usize
	}

	/// Returns the size of the encoded payload in bytes.
	///
	/// Both planes store 4 bits per pixel, so the payload is exactly one
	/// byte per pixel; a complete file adds [`Header::SIZE`] on top.
	pub fn encoded_size(&self) -> usize {
		self.pixel_count()
	}

	/// Returns the size of the decoded RGBA image in bytes.
	pub fn decoded_size(&self) -> usize {
		self.pixel_count() * size_of::<Rgba>()
	}

	/// Parses and validates a `.GCT` file header from the given byte slice.
	///
	/// The duplicated size fields must agree and describe a valid image,
	/// and the flags and orientation must be the supported values.
	pub fn from_bytes(data: &[u8]) -> Result<Self, GctError> {
		if data.len() < constants::HEADER_SIZE {
			return Err(GctError::InsufficientData {
				expected: constants::HEADER_SIZE,
				actual: data.len(),
			});
		}

		let width = be_i32(data, 0x00);
		let height = be_i32(data, 0x04);
		let width2 = be_i32(data, 0x08);
		let height2 = be_i32(data, 0x0C);
		let flags = be_u32(data, 0x10);
		let orientation = be_i32(data, 0x14);

		if width != width2 || height != height2 || !valid_image_size(width, height) {
			return Err(GctError::InvalidImage {
				width,
				height,
			});
		}
		if flags != SUPPORTED_FLAGS || orientation != 0 {
			return Err(GctError::UnsupportedImage {
				flags,
				orientation,
			});
		}

		Ok(Self {
			width,
			height,
			flags,
			orientation,
		})
	}

	/// Loads a `.GCT` file header from any reader
	///
	/// This allows you to peek at the header without loading the entire
	/// file, which is useful for validation or sizing output buffers before
	/// decoding the full image.
	pub fn from_reader<R: Read>(reader: &mut R) -> Result<Self, GctError> {
		let mut buffer = [0u8; constants::HEADER_SIZE];
		reader.read_exact(&mut buffer)?;
		Self::from_bytes(&buffer)
	}

	/// Converts the `Header` to bytes
	///
	/// The width and height are written twice and the padding is zeroed,
	/// matching the on-disk layout.
	pub fn to_bytes(&self) -> [u8; constants::HEADER_SIZE] {
		let mut bytes = [0u8; constants::HEADER_SIZE];

		bytes[0x00..0x04].copy_from_slice(&(self.width as u32).to_be_bytes());
		bytes[0x04..0x08].copy_from_slice(&(self.height as u32).to_be_bytes());
		bytes[0x08..0x0C].copy_from_slice(&(self.width as u32).to_be_bytes());
		bytes[0x0C..0x10].copy_from_slice(&(self.height as u32).to_be_bytes());
		bytes[0x10..0x14].copy_from_slice(&self.flags.to_be_bytes());
		bytes[0x14..0x18].copy_from_slice(&(self.orientation as u32).to_be_bytes());

		bytes
	}
}

impl Display for Header {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		write!(
			f,
			".GCT File Header:\n\
			- Width: {} pixels\n\
			- Height: {} pixels\n\
			- Flags: {:#010x}\n\
			- Orientation: {}",
			self.width, self.height, self.flags, self.orientation,
		)
	}
}

/// Representation of a decoded `.GCT` file
#[derive(Debug, Clone)]
pub struct File {
	/// Header of the `.GCT` file
	header: Header,

	/// Pixel data, row-major, top-to-bottom
	pixels: Vec<Rgba>,
}

impl File {
	/// Returns a reference to the header of the `.GCT` file
	pub fn header(&self) -> &Header {
		&self.header
	}

	/// Returns the decoded pixel data
	pub fn pixels(&self) -> &[Rgba] {
		&self.pixels
	}

	/// Returns the image width in pixels.
	pub fn width(&self) -> i32 {
		self.header.width
	}

	/// Returns the image height in pixels.
	pub fn height(&self) -> i32 {
		self.header.height
	}

	/// Decodes a `.GCT` file from a byte slice
	pub fn from_bytes(data: &[u8]) -> Result<Self, GctError> {
		decode::decode(data)
	}

	/// Decodes a `.GCT` file from any reader
	///
	/// This reads the entire file into memory before decoding; the payload
	/// is laid out in super-tile order and needs random access.
	pub fn from_reader<R: Read>(reader: &mut R) -> Result<Self, GctError> {
		let mut data = Vec::new();
		reader.read_to_end(&mut data)?;
		decode::decode(&data)
	}

	/// Opens and decodes a `.GCT` file from the specified path
	pub fn open(path: impl AsRef<std::path::Path>) -> Result<Self, GctError> {
		let data = std::fs::read(path)?;
		decode::decode(&data)
	}

	/// Re-encodes the image into a complete `.GCT` file.
	pub fn to_bytes(&self) -> Result<Vec<u8>, GctError> {
		encode::encode(&self.header, &self.pixels)
	}
}
