//! Round-trip tests through the public façade.

use gct_rs::prelude::*;

fn gradient(width: i32, height: i32) -> Vec<Rgba> {
	let mut pixels = Vec::with_capacity((width * height) as usize);
	for y in 0..height {
		for x in 0..width {
			let r = (x * 255 / (width - 1)) as u8;
			let g = (y * 255 / (height - 1)) as u8;
			pixels.push(Rgba::new(r, g, 128, 255 - r));
		}
	}
	pixels
}

#[test]
fn test_file_round_trip_on_disk() {
	let header = GctHeader::new(32, 16, SUPPORTED_FLAGS).unwrap();
	let pixels = gradient(32, 16);
	let encoded = encode(&header, &pixels).unwrap();

	let path = std::env::temp_dir().join(format!("gct_rs_test_{}.gct", std::process::id()));
	std::fs::write(&path, &encoded).unwrap();

	let file = GctFile::open(&path).unwrap();
	std::fs::remove_file(&path).unwrap();

	assert_eq!(file.width(), 32);
	assert_eq!(file.height(), 16);
	assert_eq!(file.pixels().len(), 32 * 16);

	// Everything the encoder writes must survive a full disk round trip
	assert_eq!(file.to_bytes().unwrap(), encoded);
}

#[test]
fn test_caller_buffer_round_trip() {
	let header = GctHeader::new(16, 16, SUPPORTED_FLAGS).unwrap();
	let pixels = gradient(16, 16);

	let mut payload = vec![0u8; header.encoded_size()];
	encode_into(&header, &pixels, &mut payload).unwrap();

	let mut file = header.to_bytes().to_vec();
	file.extend_from_slice(&payload);

	assert_eq!(decoded_size(&file).unwrap(), header.decoded_size());

	let mut output = vec![Rgba::default(); header.pixel_count()];
	let parsed = decode_into(&file, &mut output).unwrap();
	assert_eq!(parsed, header);

	// The convenience decoder must agree with the caller-buffer path
	let decoded = decode(&file).unwrap();
	assert_eq!(decoded.pixels(), &output[..]);
}

#[test]
fn test_error_reporting_surface() {
	let err = GctHeader::new(12, 8, SUPPORTED_FLAGS).unwrap_err();
	assert!(matches!(err, GctError::InvalidSize { width: 12, height: 8 }));
	assert_eq!(str_error(err.code()), Some("Invalid image size"));
	assert_eq!(str_error(-err.code()), Some("Invalid image size"));

	let err = GctHeader::new(8, 8, FLAG_ALPHA).unwrap_err();
	assert!(matches!(err, GctError::UnsupportedFlags(_)));
	assert_eq!(str_error(err.code()), Some("Unsupported image flags"));

	assert_eq!(str_error(6), None);
	assert_eq!(FLAG_UNK01 | FLAG_ALPHA, SUPPORTED_FLAGS);
}

#[test]
fn test_header_survives_reparse() {
	let header = GctHeader::new(128, 64, SUPPORTED_FLAGS).unwrap();
	let reparsed = GctHeader::from_bytes(&header.to_bytes()).unwrap();
	assert_eq!(reparsed.width(), 128);
	assert_eq!(reparsed.height(), 64);
	assert_eq!(reparsed.flags(), SUPPORTED_FLAGS);
	assert_eq!(reparsed.orientation(), 0);
}
