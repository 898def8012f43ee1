//! The editing session: one optional image buffer plus the active
//! selection, exposing the command API consumed by the REPL.
//!
//! Every command validates its inputs before mutating anything, so a failed
//! command always leaves the session exactly as it was.

use crate::codec;
use crate::error::{ColorMode, EditError};
use crate::transform::{self, Filter};
use crate::types::{PixelBuffer, Selection};

/// Holds the current image, if any, and the selection targeting it.
///
/// # Examples
/// ```
/// use pnmedit_core::Session;
///
/// let mut session = Session::new();
/// assert!(!session.has_image());
///
/// session.load(b"P2\n2 2\n255\n10 20\n30 40\n").unwrap();
/// session.rotate(90).unwrap();
/// let bytes = session.save(true).unwrap();
/// assert_eq!(bytes, b"P2\n2 2\n255\n30 10 \n40 20 \n");
/// ```
#[derive(Debug, Default)]
pub struct Session {
	buffer: Option<PixelBuffer>,
	selection: Option<Selection>,
}

impl Session {
	pub fn new() -> Self {
		Session::default()
	}

	/// `true` once an image has been loaded.
	pub fn has_image(&self) -> bool {
		self.buffer.is_some()
	}

	pub fn buffer(&self) -> Option<&PixelBuffer> {
		self.buffer.as_ref()
	}

	pub fn selection(&self) -> Option<Selection> {
		self.selection
	}

	/// Drops the current image and selection.
	pub fn clear(&mut self) {
		self.buffer = None;
		self.selection = None;
	}

	/// Decodes `bytes` and installs the result as the current image, with
	/// the whole image selected. On failure the previous image stays.
	pub fn load(&mut self, bytes: &[u8]) -> Result<(), EditError> {
		let buffer = codec::decode(bytes)?;
		log::debug!(
			"installed {} image, {}x{}, max color {}",
			buffer.format(),
			buffer.width(),
			buffer.height(),
			buffer.max_color()
		);
		self.selection = Some(Selection::full(buffer.width(), buffer.height()));
		self.buffer = Some(buffer);
		Ok(())
	}

	/// Encodes the current image, as text when `ascii` is set.
	pub fn save(&self, ascii: bool) -> Result<Vec<u8>, EditError> {
		let buffer = self.buffer.as_ref().ok_or(EditError::NoImage)?;
		Ok(codec::encode(buffer, ascii))
	}

	/// Replaces the selection with the validated rectangle.
	pub fn select(&mut self, x1: i64, y1: i64, x2: i64, y2: i64) -> Result<Selection, EditError> {
		let buffer = self.buffer.as_ref().ok_or(EditError::NoImage)?;
		let selection = Selection::try_new(x1, y1, x2, y2, buffer.width(), buffer.height())?;
		self.selection = Some(selection);
		Ok(selection)
	}

	/// Selects the whole image.
	pub fn select_all(&mut self) -> Result<Selection, EditError> {
		let buffer = self.buffer.as_ref().ok_or(EditError::NoImage)?;
		let selection = Selection::full(buffer.width(), buffer.height());
		self.selection = Some(selection);
		Ok(selection)
	}

	/// Crops the image to the current selection.
	pub fn crop(&mut self) -> Result<(), EditError> {
		let (buffer, selection) = self.parts_mut()?;
		let full = transform::crop(buffer, selection);
		*selection = full;
		Ok(())
	}

	/// Rotates the selection (or the whole image) by `angle` degrees.
	pub fn rotate(&mut self, angle: i32) -> Result<(), EditError> {
		let (buffer, selection) = self.parts_mut()?;
		*selection = transform::rotate(buffer, selection, angle)?;
		Ok(())
	}

	/// Runs the named convolution filter over the current selection.
	///
	/// The color requirement is checked before the filter name, so an
	/// unknown filter on a grayscale image reports the color mismatch.
	pub fn apply(&mut self, filter: &str) -> Result<(), EditError> {
		let (buffer, selection) = self.parts_mut()?;
		if !buffer.is_color() {
			return Err(EditError::ColorMismatch(ColorMode::Color));
		}
		let filter = Filter::parse_str(filter)?;
		transform::apply(buffer, selection, filter)
	}

	/// Star counts for a histogram with `y_bins` rows and at most
	/// `x_stars` stars per row.
	pub fn histogram(&self, x_stars: u32, y_bins: u32) -> Result<Vec<u32>, EditError> {
		let buffer = self.buffer.as_ref().ok_or(EditError::NoImage)?;
		transform::histogram(buffer, x_stars, y_bins)
	}

	/// Equalizes the gray values of the whole image.
	pub fn equalize(&mut self) -> Result<(), EditError> {
		let buffer = self.buffer.as_mut().ok_or(EditError::NoImage)?;
		transform::equalize(buffer)
	}

	fn parts_mut(&mut self) -> Result<(&mut PixelBuffer, &mut Selection), EditError> {
		match (&mut self.buffer, &mut self.selection) {
			(Some(buffer), Some(selection)) => Ok((buffer, selection)),
			_ => Err(EditError::NoImage),
		}
	}
}
