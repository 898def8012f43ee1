//! Rotation by multiples of 90 degrees, for the whole image or a square
//! sub-selection.
//!
//! A whole-image rotation swaps width and height and resets the selection;
//! a sub-selection rotation rewrites only the selected square in place. The
//! traversal reads the pre-rotation copy column by column and writes it row
//! by row, so that +90 is a clockwise visual rotation. 180 degrees is
//! performed as two successive 90-degree passes for output compatibility
//! with the quarter-turn path.

use crate::error::EditError;
use crate::types::{PixelBuffer, Plane, Selection};

/// Rotates by `angle` degrees and returns the selection to use afterwards.
///
/// `angle` must be a multiple of 90 in `[-360, 360]`; 0 and ±360 are
/// no-ops. Rotating a sub-selection requires it to be square.
pub fn rotate(
	buffer: &mut PixelBuffer,
	selection: &Selection,
	angle: i32,
) -> Result<Selection, EditError> {
	if !(-360..=360).contains(&angle) || angle % 90 != 0 {
		return Err(EditError::InvalidArguments(format!(
			"unsupported rotation angle {angle}"
		)));
	}
	if matches!(angle, 0 | 360 | -360) {
		return Ok(*selection);
	}

	if selection.is_full(buffer.width(), buffer.height()) {
		if angle.abs() == 180 {
			rotate_full(buffer, 90);
			rotate_full(buffer, 90);
		} else {
			rotate_full(buffer, angle);
		}
		Ok(Selection::full(buffer.width(), buffer.height()))
	} else {
		if !selection.is_square() {
			return Err(EditError::SelectionNotSquare);
		}
		if angle.abs() == 180 {
			rotate_region(buffer, selection, 90);
			rotate_region(buffer, selection, 90);
		} else {
			rotate_region(buffer, selection, angle);
		}
		// square region: the selection rectangle is unchanged
		Ok(*selection)
	}
}

/// Quarter-turn of the whole image; the new planes are `height x width`.
fn rotate_full(buffer: &mut PixelBuffer, angle: i32) {
	let (width, height) = (buffer.width(), buffer.height());
	let planes = buffer
		.planes()
		.iter()
		.map(|src| {
			let mut dst = Plane::filled(height, width, 0);
			for row in 0..width {
				for col in 0..height {
					dst.set(col, row, source_sample(src, width, height, angle, col, row));
				}
			}
			dst
		})
		.collect();
	buffer.replace_planes(planes);
}

/// Quarter-turn of the square selection, rewritten in place.
fn rotate_region(buffer: &mut PixelBuffer, selection: &Selection, angle: i32) {
	let side = selection.width();
	for channel in 0..buffer.channel_count() {
		let mut copy = Plane::filled(side, side, 0);
		for y in 0..side {
			for x in 0..side {
				copy.set(x, y, buffer.sample(channel, selection.x1 + x, selection.y1 + y));
			}
		}
		let plane = buffer.plane_mut(channel);
		for row in 0..side {
			for col in 0..side {
				let value = source_sample(&copy, side, side, angle, col, row);
				plane.set(selection.x1 + col, selection.y1 + row, value);
			}
		}
	}
}

/// Source sample for destination position (`col`, `row`) when rotating a
/// `width x height` plane. For +90/-270 destination row `j` is source
/// column `j` read bottom-to-top; for -90/+270 destination row `j` is
/// source column `width-1-j` read top-to-bottom.
#[inline]
fn source_sample(src: &Plane, width: usize, height: usize, angle: i32, col: usize, row: usize) -> u16 {
	if angle == 90 || angle == -270 {
		src.get(row, height - 1 - col)
	} else {
		src.get(width - 1 - row, col)
	}
}
