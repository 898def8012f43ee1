//! The `PnmFormat` enum identifies the four PNM variants handled by the codec.
//!
//! Each variant corresponds to a two-character magic number: `P2` (ASCII
//! grayscale), `P3` (ASCII color), `P5` (binary grayscale) and `P6` (binary
//! color).

use crate::error::EditError;
use std::fmt::{Display, Formatter};

/// The four PNM variants.
///
/// # Examples
/// ```
/// use pnmedit_core::PnmFormat;
///
/// let format = PnmFormat::from_magic(b"P6").unwrap();
/// assert_eq!(format, PnmFormat::BinaryColor);
/// assert_eq!(format.channel_count(), 3);
/// assert!(!format.is_ascii());
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PnmFormat {
	/// `P2`: whitespace-separated decimal samples, one plane.
	AsciiGray,
	/// `P3`: whitespace-separated decimal samples, three planes.
	AsciiColor,
	/// `P5`: one raw byte per sample, one plane.
	BinaryGray,
	/// `P6`: one raw byte per sample, three planes.
	BinaryColor,
}

impl PnmFormat {
	/// Identifies the format from its two-character magic number.
	pub fn from_magic(magic: &[u8]) -> Result<Self, EditError> {
		match magic {
			b"P2" => Ok(PnmFormat::AsciiGray),
			b"P3" => Ok(PnmFormat::AsciiColor),
			b"P5" => Ok(PnmFormat::BinaryGray),
			b"P6" => Ok(PnmFormat::BinaryColor),
			_ => Err(EditError::Decode(format!(
				"unknown magic number {:?}",
				String::from_utf8_lossy(magic)
			))),
		}
	}

	/// Picks the variant the encoder writes for a buffer with
	/// `channel_count` planes. `ascii` selects `P2`/`P3` over `P5`/`P6`.
	pub fn for_encoding(channel_count: usize, ascii: bool) -> Self {
		match (channel_count, ascii) {
			(1, true) => PnmFormat::AsciiGray,
			(1, false) => PnmFormat::BinaryGray,
			(_, true) => PnmFormat::AsciiColor,
			(_, false) => PnmFormat::BinaryColor,
		}
	}

	/// The two-character magic number.
	pub fn magic(self) -> &'static str {
		match self {
			PnmFormat::AsciiGray => "P2",
			PnmFormat::AsciiColor => "P3",
			PnmFormat::BinaryGray => "P5",
			PnmFormat::BinaryColor => "P6",
		}
	}

	/// Number of sample planes: 1 for grayscale, 3 for color.
	pub fn channel_count(self) -> usize {
		match self {
			PnmFormat::AsciiGray | PnmFormat::BinaryGray => 1,
			PnmFormat::AsciiColor | PnmFormat::BinaryColor => 3,
		}
	}

	/// `true` for the text variants `P2`/`P3`.
	pub fn is_ascii(self) -> bool {
		matches!(self, PnmFormat::AsciiGray | PnmFormat::AsciiColor)
	}
}

impl Display for PnmFormat {
	fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
		f.write_str(self.magic())
	}
}
