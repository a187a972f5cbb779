//! Error types for GCT texture parsing and encoding.

use thiserror::Error;

/// Errors that can occur when building headers, encoding, or decoding GCT textures.
#[derive(Debug, Error)]
pub enum GctError {
	/// Width or height is not a positive multiple of 8
	#[error("invalid image size: {width}x{height}")]
	InvalidSize {
		/// Requested image width
		width: i32,
		/// Requested image height
		height: i32,
	},

	/// Header flags other than the single supported combination
	#[error("unsupported image flags: {0:#010x}")]
	UnsupportedFlags(u32),

	/// Not enough input or output data to complete the operation
	#[error("insufficient data: expected at least {expected}, got {actual}")]
	InsufficientData {
		/// Minimum number of elements required
		expected: usize,
		/// Number of elements provided
		actual: usize,
	},

	/// File carries flags or an orientation this decoder does not handle
	#[error("unsupported image file: flags {flags:#010x}, orientation {orientation}")]
	UnsupportedImage {
		/// Flags field read from the file
		flags: u32,
		/// Orientation field read from the file
		orientation: i32,
	},

	/// File size fields are invalid or the duplicated pairs disagree
	#[error("invalid image file: size fields {width}x{height}")]
	InvalidImage {
		/// Width field read from the file
		width: i32,
		/// Height field read from the file
		height: i32,
	},

	/// IO error
	#[error(transparent)]
	Io(#[from] std::io::Error),
}

impl GctError {
	/// Returns the numeric error kind.
	///
	/// Kinds are positive integers; 0 is reserved for success and never
	/// produced by an error value. [`Io`](GctError::Io) errors report the
	/// same kind as [`InsufficientData`](GctError::InsufficientData), since
	/// both mean the required input never arrived.
	pub fn code(&self) -> i32 {
		match self {
			GctError::InvalidSize {
				..
			} => 1,
			GctError::UnsupportedFlags(_) => 2,
			GctError::InsufficientData {
				..
			}
			| GctError::Io(_) => 3,
			GctError::UnsupportedImage {
				..
			} => 4,
			GctError::InvalidImage {
				..
			} => 5,
		}
	}
}

/// Returns the label for a numeric error kind.
///
/// Accepts both positive and negative codes (the absolute value is used),
/// and returns `None` for codes outside the known set. Code 0 maps to
/// `"Success"`.
///
/// # Example
///
/// ```rust
/// use gct_types::file::str_error;
///
/// assert_eq!(str_error(0), Some("Success"));
/// assert_eq!(str_error(-1), Some("Invalid image size"));
/// assert_eq!(str_error(99), None);
/// ```
pub fn str_error(code: i32) -> Option<&'static str> {
	const ERROR_TABLE: [&str; 6] = [
		"Success",
		"Invalid image size",
		"Unsupported image flags",
		"Insufficient data",
		"Unsupported image file",
		"Invalid image file",
	];

	ERROR_TABLE.get(code.unsigned_abs() as usize).copied()
}
