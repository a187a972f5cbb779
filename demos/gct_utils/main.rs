//! GCT Texture Format CLI Utility
//!
//! A command-line tool for encoding, decoding, and verifying GCT texture files.
//!
//! # Features
//!
//! - **encode**: Convert raw RGBA or PNG images to GCT format
//! - **decode**: Convert GCT textures to raw RGBA or PNG images
//! - **info**: Print the header of a GCT file
//! - **verify**: Validate GCT encoder/decoder round-trip accuracy
//!
//! # Usage
//!
//! ```bash
//! # Encode a raw RGBA file to GCT (dimensions required for .raw input)
//! cargo run --example gct_utils encode input.raw output.gct --width 256 --height 256
//!
//! # Encode a PNG file to GCT
//! cargo run --example gct_utils encode input.png output.gct
//!
//! # Decode a GCT file to PNG
//! cargo run --example gct_utils decode input.gct output.png
//!
//! # Verify encoder/decoder correctness
//! cargo run --example gct_utils verify input.gct
//! ```

use anyhow::{Context, bail};
use clap::{Parser, Subcommand};
use gct_rs::prelude::*;
use image::RgbaImage;
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(name = "gct_utils")]
#[command(author = "gct-rs project")]
#[command(version = "1.0")]
#[command(about = "GCT texture format utility - encode, decode, and verify GCT files", long_about = None)]
struct Cli {
	#[command(subcommand)]
	command: Commands,
}

#[derive(Subcommand)]
enum Commands {
	/// Encode a raw RGBA or PNG file to GCT format
	Encode {
		/// Input image path (.raw or .png)
		#[arg(value_name = "INPUT")]
		input: PathBuf,

		/// Output GCT file path
		#[arg(value_name = "OUTPUT_GCT")]
		output: PathBuf,

		/// Image width in pixels, required for raw input
		#[arg(short = 'W', long)]
		width: Option<i32>,

		/// Image height in pixels, required for raw input
		#[arg(short = 'H', long)]
		height: Option<i32>,

		/// Show verbose output
		#[arg(short, long)]
		verbose: bool,
	},

	/// Decode a GCT file to raw RGBA or PNG format
	Decode {
		/// Input GCT file path
		#[arg(value_name = "INPUT_GCT")]
		input: PathBuf,

		/// Output image path (.raw or .png)
		#[arg(value_name = "OUTPUT")]
		output: PathBuf,

		/// Show verbose output
		#[arg(short, long)]
		verbose: bool,
	},

	/// Print the header of a GCT file
	Info {
		/// Input GCT file path
		#[arg(value_name = "INPUT_GCT")]
		input: PathBuf,
	},

	/// Verify GCT encoder/decoder round-trip accuracy
	Verify {
		/// Input GCT file path to verify
		#[arg(value_name = "INPUT_GCT")]
		input: PathBuf,

		/// Show verbose output
		#[arg(short, long)]
		verbose: bool,
	},
}

fn is_png(path: &Path) -> bool {
	path.extension().is_some_and(|ext| ext.eq_ignore_ascii_case("png"))
}

/// Load an input image as RGBA pixels plus dimensions
fn load_image(
	path: &PathBuf,
	width: Option<i32>,
	height: Option<i32>,
) -> anyhow::Result<(Vec<Rgba>, i32, i32)> {
	if is_png(path) {
		let img = image::open(path)
			.with_context(|| format!("failed to open image {}", path.display()))?
			.to_rgba8();
		let (w, h) = img.dimensions();
		let pixels = img
			.pixels()
			.map(|p| Rgba::new(p.0[0], p.0[1], p.0[2], p.0[3]))
			.collect();
		return Ok((pixels, w as i32, h as i32));
	}

	let (Some(w), Some(h)) = (width, height) else {
		bail!("raw input needs --width and --height");
	};

	let data =
		fs::read(path).with_context(|| format!("failed to read {}", path.display()))?;
	let expected = w as usize * h as usize * 4;
	if data.len() < expected {
		bail!("raw input is {} bytes, expected {}", data.len(), expected);
	}

	let pixels = data[..expected]
		.chunks_exact(4)
		.map(|p| Rgba::new(p[0], p[1], p[2], p[3]))
		.collect();
	Ok((pixels, w, h))
}

/// Save RGBA pixels as raw data or PNG
fn save_image(path: &PathBuf, pixels: &[Rgba], width: i32, height: i32) -> anyhow::Result<()> {
	let mut data = Vec::with_capacity(pixels.len() * 4);
	for pixel in pixels {
		data.extend_from_slice(&[pixel.r, pixel.g, pixel.b, pixel.a]);
	}

	if is_png(path) {
		let img = RgbaImage::from_raw(width as u32, height as u32, data)
			.context("failed to create image buffer")?;
		img.save(path).with_context(|| format!("failed to save {}", path.display()))?;
	} else {
		fs::write(path, data)
			.with_context(|| format!("failed to write {}", path.display()))?;
	}

	Ok(())
}

/// Per-channel mean absolute error between two images
fn channel_errors(a: &[Rgba], b: &[Rgba]) -> [f64; 4] {
	let mut sums = [0u64; 4];
	for (pa, pb) in a.iter().zip(b.iter()) {
		sums[0] += (pa.r as i64 - pb.r as i64).unsigned_abs();
		sums[1] += (pa.g as i64 - pb.g as i64).unsigned_abs();
		sums[2] += (pa.b as i64 - pb.b as i64).unsigned_abs();
		sums[3] += (pa.a as i64 - pb.a as i64).unsigned_abs();
	}
	sums.map(|s| s as f64 / a.len() as f64)
}

/// Handle encode command
fn handle_encode(
	input: PathBuf,
	output: PathBuf,
	width: Option<i32>,
	height: Option<i32>,
	verbose: bool,
) -> anyhow::Result<()> {
	if verbose {
		println!("🔄 Encoding image to GCT format");
		println!("   Input:  {}", input.display());
		println!("   Output: {}", output.display());
	}

	let (pixels, w, h) = load_image(&input, width, height)?;
	log::info!("loaded {}x{} image ({} pixels)", w, h, pixels.len());

	let header = GctHeader::new(w, h, SUPPORTED_FLAGS)
		.map_err(|e| anyhow::anyhow!("{e} ({})", str_error(e.code()).unwrap_or("?")))?;
	let file = encode(&header, &pixels)?;

	fs::write(&output, &file)
		.with_context(|| format!("failed to write {}", output.display()))?;

	if verbose {
		println!("✅ Encoded {} pixels into {} bytes", pixels.len(), file.len());
	}
	Ok(())
}

/// Handle decode command
fn handle_decode(input: PathBuf, output: PathBuf, verbose: bool) -> anyhow::Result<()> {
	if verbose {
		println!("🔄 Decoding GCT file");
		println!("   Input:  {}", input.display());
		println!("   Output: {}", output.display());
	}

	let file = GctFile::open(&input)
		.with_context(|| format!("failed to decode {}", input.display()))?;
	log::info!("decoded {}x{} image", file.width(), file.height());

	save_image(&output, file.pixels(), file.width(), file.height())?;

	if verbose {
		println!("✅ Decoded {}x{} image", file.width(), file.height());
	}
	Ok(())
}

/// Handle info command
fn handle_info(input: PathBuf) -> anyhow::Result<()> {
	let data =
		fs::read(&input).with_context(|| format!("failed to read {}", input.display()))?;
	let header = GctHeader::from_bytes(&data)
		.map_err(|e| anyhow::anyhow!("{e} ({})", str_error(e.code()).unwrap_or("?")))?;

	println!("{header}");
	println!("- Encoded payload: {} bytes", header.encoded_size());
	println!("- Decoded image: {} bytes", header.decoded_size());
	Ok(())
}

/// Handle verify command
fn handle_verify(input: PathBuf, verbose: bool) -> anyhow::Result<()> {
	if verbose {
		println!("🔍 Verifying GCT round-trip accuracy");
		println!("   Input: {}", input.display());
	}

	let data =
		fs::read(&input).with_context(|| format!("failed to read {}", input.display()))?;
	let decoded = GctFile::from_bytes(&data)?;
	let reencoded = decoded.to_bytes()?;

	if reencoded == data {
		println!("✅ Re-encode is bit-identical ({} bytes)", data.len());
	} else {
		println!("⚠️ Re-encode differs from the input file");
		println!("   This file was likely produced by a different encoder.");
	}

	let second = GctFile::from_bytes(&reencoded)?;
	let errors = channel_errors(decoded.pixels(), second.pixels());
	println!(
		"   Mean channel error after round-trip: r={:.2} g={:.2} b={:.2} a={:.2}",
		errors[0], errors[1], errors[2], errors[3]
	);

	Ok(())
}

fn main() -> anyhow::Result<()> {
	// Initialize logger with default level set to info if RUST_LOG is not set
	env_logger::init_from_env(env_logger::Env::default().default_filter_or("info"));

	let cli = Cli::parse();
	match cli.command {
		Commands::Encode {
			input,
			output,
			width,
			height,
			verbose,
		} => handle_encode(input, output, width, height, verbose),
		Commands::Decode {
			input,
			output,
			verbose,
		} => handle_decode(input, output, verbose),
		Commands::Info {
			input,
		} => handle_info(input),
		Commands::Verify {
			input,
			verbose,
		} => handle_verify(input, verbose),
	}
}
