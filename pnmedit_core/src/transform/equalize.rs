//! Histogram equalization of grayscale images.

use super::histogram::frequency_table;
use crate::error::{ColorMode, EditError};
use crate::types::PixelBuffer;

/// Spreads the gray values over the full `[0, 255]` range.
///
/// The frequency table is built over the whole image (the selection is
/// ignored) and fixed for the entire pass: every pixel with value `v`
/// becomes `round(clamp(255 * cdf(v) / area, 0, 255))` where `cdf(v)` is
/// the number of pixels with value `<= v`.
pub fn equalize(buffer: &mut PixelBuffer) -> Result<(), EditError> {
	if buffer.is_color() {
		return Err(EditError::ColorMismatch(ColorMode::Grayscale));
	}

	let frequency = frequency_table(buffer);
	let area = (buffer.width() * buffer.height()) as f64;

	let mut lookup = [0u16; 256];
	let mut cumulative = 0u64;
	for (value, slot) in lookup.iter_mut().enumerate() {
		cumulative += frequency[value];
		*slot = (255.0 * (cumulative as f64) / area).clamp(0.0, 255.0).round() as u16;
	}

	for sample in buffer.plane_mut(0).samples_mut() {
		*sample = lookup[usize::from(*sample)];
	}
	Ok(())
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::codec::decode;

	#[test]
	fn test_equalize_white_image_is_unchanged() {
		let mut buffer = decode(b"P2\n2 2\n255\n255 255 255 255\n").unwrap();
		let before = buffer.clone();
		equalize(&mut buffer).unwrap();
		assert_eq!(buffer, before);
	}

	#[test]
	fn test_equalize_uniform_image_stays_uniform() {
		// cdf(v) == area for every pixel of a uniform image, so all
		// pixels map to 255 together
		let mut buffer = decode(b"P2\n2 2\n255\n77 77 77 77\n").unwrap();
		equalize(&mut buffer).unwrap();
		assert_eq!(buffer.plane(0).samples(), &[255, 255, 255, 255]);
	}

	#[test]
	fn test_equalize_spreads_two_levels() {
		let mut buffer = decode(b"P2\n2 2\n255\n10 10 20 20\n").unwrap();
		equalize(&mut buffer).unwrap();
		// cdf(10) = 2/4, cdf(20) = 4/4
		assert_eq!(buffer.plane(0).samples(), &[128, 128, 255, 255]);
	}

	#[test]
	fn test_equalize_snapshot_semantics() {
		// remapped values must not feed back into the frequency table
		let mut buffer = decode(b"P2\n4 1\n255\n0 64 128 255\n").unwrap();
		equalize(&mut buffer).unwrap();
		assert_eq!(buffer.plane(0).samples(), &[64, 128, 191, 255]);
	}

	#[test]
	fn test_equalize_rejects_color() {
		let mut buffer = decode(b"P3\n1 1\n255\n1 2 3\n").unwrap();
		assert_eq!(
			equalize(&mut buffer),
			Err(EditError::ColorMismatch(ColorMode::Grayscale))
		);
	}
}
