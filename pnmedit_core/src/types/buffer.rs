//! The in-memory pixel representation: flat row-major [`Plane`]s owned by a
//! [`PixelBuffer`].
//!
//! A grayscale buffer has one plane, a color buffer has three (red, green,
//! blue). Samples are stored as `u16` in `[0, max_color]` with
//! `max_color <= 255`.

use crate::error::EditError;
use crate::types::PnmFormat;

/// Upper bound on `width * height * channels`. Decoding anything larger is
/// reported as an allocation failure instead of being attempted.
pub const MAX_SAMPLE_COUNT: usize = 1 << 28;

/// One channel of samples, row-major (`index = y * width + x`).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Plane {
	width: usize,
	height: usize,
	data: Vec<u16>,
}

impl Plane {
	/// A `width x height` plane with every sample set to `value`.
	pub fn filled(width: usize, height: usize, value: u16) -> Self {
		Plane {
			width,
			height,
			data: vec![value; width * height],
		}
	}

	/// Wraps an existing row-major sample vector.
	pub fn from_vec(width: usize, height: usize, data: Vec<u16>) -> Self {
		debug_assert_eq!(data.len(), width * height);
		Plane { width, height, data }
	}

	pub fn width(&self) -> usize {
		self.width
	}

	pub fn height(&self) -> usize {
		self.height
	}

	/// Sample at column `x`, row `y`.
	#[inline]
	pub fn get(&self, x: usize, y: usize) -> u16 {
		self.data[y * self.width + x]
	}

	#[inline]
	pub fn set(&mut self, x: usize, y: usize, value: u16) {
		self.data[y * self.width + x] = value;
	}

	/// Row `y` as a slice of `width` samples.
	#[inline]
	pub fn row(&self, y: usize) -> &[u16] {
		&self.data[y * self.width..(y + 1) * self.width]
	}

	/// All samples in row-major order.
	pub fn samples(&self) -> &[u16] {
		&self.data
	}

	pub fn samples_mut(&mut self) -> &mut [u16] {
		&mut self.data
	}
}

/// A decoded PNM image: format metadata plus one or three sample planes.
///
/// Invariants, checked on construction: `width > 0`, `height > 0`,
/// `max_color` in `[1, 255]`, plane count matching the format, and all
/// planes sharing the same dimensions.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PixelBuffer {
	format: PnmFormat,
	max_color: u16,
	planes: Vec<Plane>,
}

impl PixelBuffer {
	pub fn new(format: PnmFormat, max_color: u16, planes: Vec<Plane>) -> Result<Self, EditError> {
		if planes.len() != format.channel_count() {
			return Err(EditError::Decode(format!(
				"{} images need {} planes, got {}",
				format,
				format.channel_count(),
				planes.len()
			)));
		}
		if !(1..=255).contains(&max_color) {
			return Err(EditError::Decode(format!(
				"maximum color value {max_color} is out of range [1, 255]"
			)));
		}
		let (width, height) = (planes[0].width(), planes[0].height());
		if width == 0 || height == 0 {
			return Err(EditError::Decode(format!(
				"image dimensions {width}x{height} must be positive"
			)));
		}
		if planes.iter().any(|p| p.width() != width || p.height() != height) {
			return Err(EditError::Decode("planes differ in size".to_string()));
		}
		Ok(PixelBuffer {
			format,
			max_color,
			planes,
		})
	}

	pub fn format(&self) -> PnmFormat {
		self.format
	}

	pub fn width(&self) -> usize {
		self.planes[0].width()
	}

	pub fn height(&self) -> usize {
		self.planes[0].height()
	}

	pub fn max_color(&self) -> u16 {
		self.max_color
	}

	pub fn channel_count(&self) -> usize {
		self.planes.len()
	}

	pub fn is_color(&self) -> bool {
		self.channel_count() == 3
	}

	pub fn is_grayscale(&self) -> bool {
		self.channel_count() == 1
	}

	pub fn plane(&self, channel: usize) -> &Plane {
		&self.planes[channel]
	}

	pub fn plane_mut(&mut self, channel: usize) -> &mut Plane {
		&mut self.planes[channel]
	}

	pub fn planes(&self) -> &[Plane] {
		&self.planes
	}

	/// Swaps in a new set of planes, e.g. after a crop or a whole-image
	/// rotation. The plane count must stay unchanged.
	pub fn replace_planes(&mut self, planes: Vec<Plane>) {
		debug_assert_eq!(planes.len(), self.planes.len());
		self.planes = planes;
	}

	/// Sample of channel `channel` at column `x`, row `y`.
	#[inline]
	pub fn sample(&self, channel: usize, x: usize, y: usize) -> u16 {
		self.planes[channel].get(x, y)
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	fn gray_buffer(width: usize, height: usize) -> PixelBuffer {
		PixelBuffer::new(PnmFormat::AsciiGray, 255, vec![Plane::filled(width, height, 7)]).unwrap()
	}

	#[test]
	fn test_plane_indexing() {
		let mut plane = Plane::filled(3, 2, 0);
		plane.set(2, 1, 42);
		assert_eq!(plane.get(2, 1), 42);
		assert_eq!(plane.row(1), &[0, 0, 42]);
		assert_eq!(plane.samples(), &[0, 0, 0, 0, 0, 42]);
	}

	#[test]
	fn test_new_valid() {
		let buffer = gray_buffer(4, 3);
		assert_eq!(buffer.width(), 4);
		assert_eq!(buffer.height(), 3);
		assert_eq!(buffer.max_color(), 255);
		assert!(buffer.is_grayscale());
		assert!(!buffer.is_color());
	}

	#[test]
	fn test_new_rejects_plane_count_mismatch() {
		let result = PixelBuffer::new(PnmFormat::AsciiColor, 255, vec![Plane::filled(2, 2, 0)]);
		assert!(result.is_err());
	}

	#[test]
	fn test_new_rejects_max_color_out_of_range() {
		assert!(PixelBuffer::new(PnmFormat::AsciiGray, 0, vec![Plane::filled(2, 2, 0)]).is_err());
		assert!(PixelBuffer::new(PnmFormat::AsciiGray, 256, vec![Plane::filled(2, 2, 0)]).is_err());
	}

	#[test]
	fn test_new_rejects_empty_plane() {
		assert!(PixelBuffer::new(PnmFormat::AsciiGray, 255, vec![Plane::filled(0, 2, 0)]).is_err());
	}

	#[test]
	fn test_new_rejects_differing_planes() {
		let planes = vec![
			Plane::filled(2, 2, 0),
			Plane::filled(2, 2, 0),
			Plane::filled(2, 3, 0),
		];
		assert!(PixelBuffer::new(PnmFormat::AsciiColor, 255, planes).is_err());
	}
}
