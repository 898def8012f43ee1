//! Star histogram over the gray values of the whole image.

use crate::error::{ColorMode, EditError};
use crate::types::PixelBuffer;

/// 256-bucket frequency table over the first plane of the whole image (the
/// selection is ignored).
pub(crate) fn frequency_table(buffer: &PixelBuffer) -> [u64; 256] {
	let mut frequency = [0u64; 256];
	for &sample in buffer.plane(0).samples() {
		frequency[usize::from(sample)] += 1;
	}
	frequency
}

/// Star counts for a histogram of `y_bins` rows scaled to at most
/// `x_stars` stars.
///
/// The 256 buckets are merged into `y_bins` contiguous groups of
/// `256 / y_bins` consecutive values; each group yields
/// `floor(group_frequency / max_group_frequency * x_stars)` stars.
/// `y_bins` must be a power of two in `[2, 256]`; requires a grayscale
/// buffer.
pub fn histogram(buffer: &PixelBuffer, x_stars: u32, y_bins: u32) -> Result<Vec<u32>, EditError> {
	if !(2..=256).contains(&y_bins) || !y_bins.is_power_of_two() {
		return Err(EditError::InvalidArguments(format!(
			"bin count {y_bins} must be a power of two in [2, 256]"
		)));
	}
	if buffer.is_color() {
		return Err(EditError::ColorMismatch(ColorMode::Grayscale));
	}

	let frequency = frequency_table(buffer);
	let group_size = 256 / y_bins as usize;
	let groups: Vec<u64> = frequency
		.chunks(group_size)
		.map(|chunk| chunk.iter().sum())
		.collect();
	let max_frequency = groups.iter().copied().max().unwrap_or(1).max(1);

	Ok(groups
		.iter()
		.map(|&group| ((group as f64 / max_frequency as f64) * f64::from(x_stars)).floor() as u32)
		.collect())
}
