//! Crop the buffer to the current selection.

use crate::types::{PixelBuffer, Plane, Selection};

/// Replaces the buffer's planes with exactly the pixels inside `selection`
/// and returns the new whole-image selection.
pub fn crop(buffer: &mut PixelBuffer, selection: &Selection) -> Selection {
	let (width, height) = (selection.width(), selection.height());
	let planes = buffer
		.planes()
		.iter()
		.map(|plane| {
			let mut data = Vec::with_capacity(width * height);
			for y in selection.y1..selection.y2 {
				data.extend_from_slice(&plane.row(y)[selection.x1..selection.x2]);
			}
			Plane::from_vec(width, height, data)
		})
		.collect();
	buffer.replace_planes(planes);
	Selection::full(width, height)
}
