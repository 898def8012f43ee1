//! Encoding of a [`PixelBuffer`] back to PNM bytes.
//!
//! The variant is chosen by the buffer's plane count; the `ascii` flag
//! selects `P2`/`P3` over `P5`/`P6`. The header is always
//! `magic\nwidth height\nmax_color\n`. ASCII output writes every sample as
//! decimal text followed by a space, with one newline per image row; binary
//! output writes exactly one raw byte per sample with no separators.

use crate::types::{PixelBuffer, PnmFormat};
use itertools::izip;

/// Encodes `buffer`, choosing the text variants when `ascii` is set.
pub fn encode(buffer: &PixelBuffer, ascii: bool) -> Vec<u8> {
	let format = PnmFormat::for_encoding(buffer.channel_count(), ascii);
	let (width, height) = (buffer.width(), buffer.height());
	log::debug!("encoding {width}x{height} buffer as {format}");

	let mut out = Vec::with_capacity(width * height * buffer.channel_count() + 16);
	out.extend_from_slice(
		format!("{format}\n{width} {height}\n{}\n", buffer.max_color()).as_bytes(),
	);

	if ascii {
		write_ascii_samples(buffer, &mut out);
	} else {
		write_binary_samples(buffer, &mut out);
	}
	out
}

fn write_ascii_samples(buffer: &PixelBuffer, out: &mut Vec<u8>) {
	let mut text = String::new();
	for y in 0..buffer.height() {
		if buffer.is_color() {
			let rows = (
				buffer.plane(0).row(y),
				buffer.plane(1).row(y),
				buffer.plane(2).row(y),
			);
			for (r, g, b) in izip!(rows.0, rows.1, rows.2) {
				text.push_str(&format!("{r} {g} {b} "));
			}
		} else {
			for v in buffer.plane(0).row(y) {
				text.push_str(&format!("{v} "));
			}
		}
		text.push('\n');
	}
	out.extend_from_slice(text.as_bytes());
}

fn write_binary_samples(buffer: &PixelBuffer, out: &mut Vec<u8>) {
	for y in 0..buffer.height() {
		if buffer.is_color() {
			let rows = (
				buffer.plane(0).row(y),
				buffer.plane(1).row(y),
				buffer.plane(2).row(y),
			);
			for (r, g, b) in izip!(rows.0, rows.1, rows.2) {
				out.extend_from_slice(&[*r as u8, *g as u8, *b as u8]);
			}
		} else {
			out.extend(buffer.plane(0).row(y).iter().map(|&v| v as u8));
		}
	}
}
