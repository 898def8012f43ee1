//! Per-channel 3x3 convolution filters for color images.
//!
//! Filters recolor every pixel strictly inside the current selection whose
//! full 3x3 neighborhood lies inside the whole image: image border pixels
//! are never centers, so the selection bounds are clamped inward by one
//! pixel against the image edges (not against the selection's own edges). A
//! selection that stops short of the image border therefore reads neighbor
//! values from outside the selection.

use crate::error::{ColorMode, EditError};
use crate::types::{PixelBuffer, Selection};

/// The four supported convolution filters.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Filter {
	Edge,
	Sharpen,
	Blur,
	GaussianBlur,
}

impl Filter {
	/// Parses the filter name as given on the command line (exact,
	/// uppercase).
	pub fn parse_str(name: &str) -> Result<Self, EditError> {
		match name {
			"EDGE" => Ok(Filter::Edge),
			"SHARPEN" => Ok(Filter::Sharpen),
			"BLUR" => Ok(Filter::Blur),
			"GAUSSIAN_BLUR" => Ok(Filter::GaussianBlur),
			_ => Err(EditError::InvalidArguments(format!("unknown filter {name:?}"))),
		}
	}

	fn kernel(self) -> [[f64; 3]; 3] {
		match self {
			Filter::Edge => [[-1.0, -1.0, -1.0], [-1.0, 8.0, -1.0], [-1.0, -1.0, -1.0]],
			Filter::Sharpen => [[0.0, -1.0, 0.0], [-1.0, 5.0, -1.0], [0.0, -1.0, 0.0]],
			Filter::Blur => [[1.0, 1.0, 1.0], [1.0, 1.0, 1.0], [1.0, 1.0, 1.0]],
			Filter::GaussianBlur => [[1.0, 2.0, 1.0], [2.0, 4.0, 2.0], [1.0, 2.0, 1.0]],
		}
	}

	fn divisor(self) -> f64 {
		match self {
			Filter::Blur => 9.0,
			Filter::GaussianBlur => 16.0,
			Filter::Edge | Filter::Sharpen => 1.0,
		}
	}
}

/// Convolves every eligible pixel of the selection with the filter kernel,
/// independently per channel. All reads come from a pre-apply snapshot;
/// results are divided by the kernel divisor, clamped to `[0, 255]` and
/// rounded half away from zero.
pub fn apply(
	buffer: &mut PixelBuffer,
	selection: &Selection,
	filter: Filter,
) -> Result<(), EditError> {
	if !buffer.is_color() {
		return Err(EditError::ColorMismatch(ColorMode::Color));
	}

	let x_start = selection.x1.max(1);
	let x_end = selection.x2.min(buffer.width() - 1);
	let y_start = selection.y1.max(1);
	let y_end = selection.y2.min(buffer.height() - 1);

	let kernel = filter.kernel();
	let divisor = filter.divisor();
	let snapshot = buffer.planes().to_vec();

	for (channel, src) in snapshot.iter().enumerate() {
		let plane = buffer.plane_mut(channel);
		for y in y_start..y_end {
			for x in x_start..x_end {
				let mut sum = 0.0;
				for (ky, kernel_row) in kernel.iter().enumerate() {
					let row = src.row(y + ky - 1);
					for (kx, weight) in kernel_row.iter().enumerate() {
						sum += weight * f64::from(row[x + kx - 1]);
					}
				}
				let value = (sum / divisor).clamp(0.0, 255.0).round();
				plane.set(x, y, value as u16);
			}
		}
	}
	Ok(())
}
