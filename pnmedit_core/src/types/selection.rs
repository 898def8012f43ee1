//! The rectangular sub-region targeted by crop, rotate and apply.

use crate::error::EditError;

/// A rectangle `(x1, y1)`-`(x2, y2)` within the bounds of the current
/// buffer, with `x1 < x2` and `y1 < y2`. `x2`/`y2` are exclusive, so the
/// whole image is `(0, 0, width, height)`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Selection {
	pub x1: usize,
	pub y1: usize,
	pub x2: usize,
	pub y2: usize,
}

impl Selection {
	/// The whole-image rectangle.
	pub fn full(width: usize, height: usize) -> Self {
		Selection {
			x1: 0,
			y1: 0,
			x2: width,
			y2: height,
		}
	}

	/// Validates user-supplied coordinates against an image of
	/// `width x height` pixels.
	///
	/// Negative values are rejected as [`EditError::InvalidArguments`].
	/// The x-pair and y-pair are each swapped into ascending order
	/// independently; a degenerate (`x1 == x2` or `y1 == y2`) or
	/// out-of-bounds rectangle is an [`EditError::InvalidRange`].
	pub fn try_new(
		x1: i64,
		y1: i64,
		x2: i64,
		y2: i64,
		width: usize,
		height: usize,
	) -> Result<Self, EditError> {
		if [x1, y1, x2, y2].iter().any(|&c| c < 0) {
			return Err(EditError::InvalidArguments(
				"selection coordinates must be non-negative".to_string(),
			));
		}
		let (x1, x2) = (x1.min(x2) as usize, x1.max(x2) as usize);
		let (y1, y2) = (y1.min(y2) as usize, y1.max(y2) as usize);
		if x1 == x2 || y1 == y2 || x2 > width || y2 > height {
			return Err(EditError::InvalidRange);
		}
		Ok(Selection { x1, y1, x2, y2 })
	}

	pub fn width(&self) -> usize {
		self.x2 - self.x1
	}

	pub fn height(&self) -> usize {
		self.y2 - self.y1
	}

	/// `true` if the selection covers an image of `width x height` pixels
	/// entirely.
	pub fn is_full(&self, width: usize, height: usize) -> bool {
		self.x1 == 0 && self.y1 == 0 && self.x2 == width && self.y2 == height
	}

	pub fn is_square(&self) -> bool {
		self.width() == self.height()
	}
}
