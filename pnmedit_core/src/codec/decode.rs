//! Decoding of the four PNM variants into a [`PixelBuffer`].
//!
//! All variants share the same header grammar: a two-character magic number,
//! then width, height and maximum color value as whitespace-separated
//! decimal integers, with `#` comments tolerated anywhere before the pixel
//! data. `P2`/`P3` carry whitespace-separated decimal samples, `P5`/`P6`
//! exactly one raw byte per sample.

use super::reader::ByteCursor;
use crate::error::EditError;
use crate::types::{MAX_SAMPLE_COUNT, PixelBuffer, Plane, PnmFormat};

/// Decodes `bytes` into a pixel buffer, or fails with
/// [`EditError::Decode`] without producing a partial image.
///
/// Trailing bytes beyond the expected sample count are ignored. Samples are
/// clamped to the declared maximum color value.
pub fn decode(bytes: &[u8]) -> Result<PixelBuffer, EditError> {
	let mut cursor = ByteCursor::new(bytes);

	let magic = cursor
		.take(2)
		.ok_or_else(|| EditError::Decode("file is too short for a magic number".to_string()))?;
	let format = PnmFormat::from_magic(magic)?;

	let width = read_header_value(&mut cursor, "width")?;
	let height = read_header_value(&mut cursor, "height")?;
	let max_color = read_header_value(&mut cursor, "maximum color value")?;
	if max_color > 255 {
		return Err(EditError::Decode(format!(
			"maximum color value {max_color} is out of range [1, 255]"
		)));
	}
	let max_color = max_color as u16;

	let sample_count = width
		.checked_mul(height)
		.and_then(|pixels| pixels.checked_mul(format.channel_count()))
		.filter(|&count| count <= MAX_SAMPLE_COUNT)
		.ok_or(EditError::AllocationFailure(width, height))?;
	log::debug!("decoding {format} image, {width}x{height}, {sample_count} samples");

	let planes = if format.is_ascii() {
		read_ascii_planes(&mut cursor, format, width, height, max_color)?
	} else {
		read_binary_planes(&mut cursor, format, width, height, max_color)?
	};

	PixelBuffer::new(format, max_color, planes)
}

/// Reads one positive header integer, skipping whitespace and comments.
fn read_header_value(cursor: &mut ByteCursor, name: &str) -> Result<usize, EditError> {
	cursor.skip_filler();
	let value = cursor
		.read_uint()
		.map_err(|_| cursor.format_error(&format!("expected {name}")))?;
	if value == 0 {
		return Err(cursor.format_error(&format!("{name} must be positive")));
	}
	Ok(value as usize)
}

/// `P2`/`P3`: whitespace-separated decimal samples, row-major,
/// channel-interleaved for color.
fn read_ascii_planes(
	cursor: &mut ByteCursor,
	format: PnmFormat,
	width: usize,
	height: usize,
	max_color: u16,
) -> Result<Vec<Plane>, EditError> {
	let channels = format.channel_count();
	let mut planes = vec![Plane::filled(width, height, 0); channels];
	for y in 0..height {
		for x in 0..width {
			for plane in &mut planes {
				cursor.skip_to_digit();
				let value = cursor
					.read_uint()
					.map_err(|_| cursor.format_error("not enough samples"))?;
				plane.set(x, y, value.min(u32::from(max_color)) as u16);
			}
		}
	}
	Ok(planes)
}

/// `P5`/`P6`: one raw byte per sample, row-major, channel-interleaved for
/// color. A single whitespace byte after the maximum color value is part of
/// the header framing and is consumed before the first sample.
fn read_binary_planes(
	cursor: &mut ByteCursor,
	format: PnmFormat,
	width: usize,
	height: usize,
	max_color: u16,
) -> Result<Vec<Plane>, EditError> {
	if cursor.peek().is_some_and(|byte| byte.is_ascii_whitespace()) {
		cursor.consume();
	}

	let channels = format.channel_count();
	let expected = width * height * channels;
	if cursor.remaining() < expected {
		return Err(EditError::Decode(format!(
			"binary data is too short: expected {expected} bytes, found {}",
			cursor.remaining()
		)));
	}

	let mut planes = vec![Plane::filled(width, height, 0); channels];
	for y in 0..height {
		for x in 0..width {
			for plane in &mut planes {
				let byte = cursor.consume().unwrap_or(0);
				plane.set(x, y, u16::from(byte).min(max_color));
			}
		}
	}
	Ok(planes)
}

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::rstest;

	#[test]
	fn test_decode_p2() {
		let buffer = decode(b"P2\n2 2\n255\n10 20\n30 40\n").unwrap();
		assert_eq!(buffer.format(), PnmFormat::AsciiGray);
		assert_eq!((buffer.width(), buffer.height()), (2, 2));
		assert_eq!(buffer.max_color(), 255);
		assert_eq!(buffer.plane(0).samples(), &[10, 20, 30, 40]);
	}

	#[test]
	fn test_decode_p3() {
		let buffer = decode(b"P3\n2 1\n255\n1 2 3  4 5 6\n").unwrap();
		assert_eq!(buffer.format(), PnmFormat::AsciiColor);
		assert_eq!(buffer.plane(0).samples(), &[1, 4]);
		assert_eq!(buffer.plane(1).samples(), &[2, 5]);
		assert_eq!(buffer.plane(2).samples(), &[3, 6]);
	}

	#[test]
	fn test_decode_p5() {
		let buffer = decode(b"P5\n2 2\n255\n\x0a\x14\x1e\x28").unwrap();
		assert_eq!(buffer.format(), PnmFormat::BinaryGray);
		assert_eq!(buffer.plane(0).samples(), &[10, 20, 30, 40]);
	}

	#[test]
	fn test_decode_p6() {
		let buffer = decode(b"P6\n1 2\n255\n\x01\x02\x03\x04\x05\x06").unwrap();
		assert_eq!(buffer.format(), PnmFormat::BinaryColor);
		assert_eq!(buffer.plane(0).samples(), &[1, 4]);
		assert_eq!(buffer.plane(1).samples(), &[2, 5]);
		assert_eq!(buffer.plane(2).samples(), &[3, 6]);
	}

	#[test]
	fn test_decode_header_comments() {
		let buffer = decode(b"P2 # magic\n# another comment\n 2 # width\n2\n# depth next\n255\n0 1 2 3").unwrap();
		assert_eq!((buffer.width(), buffer.height()), (2, 2));
		assert_eq!(buffer.plane(0).samples(), &[0, 1, 2, 3]);
	}

	#[test]
	fn test_decode_binary_whitespace_byte_is_framing() {
		// the first sample after the header is 0x20, not consumed as a
		// separator: only one whitespace byte belongs to the header
		let buffer = decode(b"P5\n1 2\n255\n\x20\x21").unwrap();
		assert_eq!(buffer.plane(0).samples(), &[0x20, 0x21]);
	}

	#[test]
	fn test_decode_clamps_to_max_color() {
		let ascii = decode(b"P2\n2 1\n100\n50 200\n").unwrap();
		assert_eq!(ascii.plane(0).samples(), &[50, 100]);

		let binary = decode(b"P5\n2 1\n100\n\x32\xc8").unwrap();
		assert_eq!(binary.plane(0).samples(), &[50, 100]);
	}

	#[test]
	fn test_decode_ignores_trailing_bytes() {
		let buffer = decode(b"P5\n1 1\n255\n\x07extra bytes").unwrap();
		assert_eq!(buffer.plane(0).samples(), &[7]);
	}

	#[rstest]
	#[case::bad_magic(b"P9\n1 1\n255\n0".as_slice())]
	#[case::empty(b"".as_slice())]
	#[case::missing_header(b"P2\n2".as_slice())]
	#[case::zero_width(b"P2\n0 2\n255\n".as_slice())]
	#[case::zero_height(b"P2\n2 0\n255\n".as_slice())]
	#[case::zero_max_color(b"P2\n2 2\n0\n0 0 0 0".as_slice())]
	#[case::huge_max_color(b"P2\n2 2\n70000\n0 0 0 0".as_slice())]
	#[case::non_numeric(b"P2\nab cd\n255\n".as_slice())]
	#[case::ascii_too_few_samples(b"P2\n2 2\n255\n1 2 3".as_slice())]
	#[case::binary_too_few_samples(b"P5\n2 2\n255\n\x01\x02\x03".as_slice())]
	fn test_decode_errors(#[case] bytes: &[u8]) {
		assert!(matches!(decode(bytes), Err(EditError::Decode(_))));
	}

	#[test]
	fn test_decode_rejects_absurd_dimensions() {
		assert_eq!(
			decode(b"P6\n99999999 99999999\n255\n"),
			Err(EditError::AllocationFailure(99_999_999, 99_999_999))
		);
	}
}
