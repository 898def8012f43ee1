//! A byte-level cursor over raw image bytes with single-byte lookahead.
//!
//! The decoder walks the PNM header and the ASCII sample section with this
//! cursor: peek at the next byte without consuming it, skip whitespace and
//! `#` comments, and collect decimal tokens. Errors carry the absolute byte
//! position to make malformed files easy to diagnose.

use crate::error::EditError;

pub struct ByteCursor<'a> {
	bytes: &'a [u8],
	position: usize,
}

impl<'a> ByteCursor<'a> {
	pub fn new(bytes: &'a [u8]) -> Self {
		ByteCursor { bytes, position: 0 }
	}

	/// The next byte without consuming it, or `None` at the end.
	#[inline]
	pub fn peek(&self) -> Option<u8> {
		self.bytes.get(self.position).copied()
	}

	/// Consumes and returns the next byte.
	#[inline]
	pub fn consume(&mut self) -> Option<u8> {
		let byte = self.peek();
		if byte.is_some() {
			self.position += 1;
		}
		byte
	}

	/// Consumes the next `count` bytes as a slice, or `None` if fewer
	/// remain.
	pub fn take(&mut self, count: usize) -> Option<&'a [u8]> {
		let end = self.position.checked_add(count)?;
		let slice = self.bytes.get(self.position..end)?;
		self.position = end;
		Some(slice)
	}

	/// Number of unconsumed bytes.
	pub fn remaining(&self) -> usize {
		self.bytes.len() - self.position
	}

	/// Skips whitespace runs and `#` comments (which extend to the end of
	/// the line). Used between header tokens.
	pub fn skip_filler(&mut self) {
		while let Some(byte) = self.peek() {
			if byte == b'#' {
				while let Some(byte) = self.consume() {
					if byte == b'\n' {
						break;
					}
				}
			} else if byte.is_ascii_whitespace() {
				self.position += 1;
			} else {
				break;
			}
		}
	}

	/// Skips forward to the next ASCII digit. Used between samples in the
	/// `P2`/`P3` data section, where any non-digit byte is a separator.
	pub fn skip_to_digit(&mut self) {
		while let Some(byte) = self.peek() {
			if byte.is_ascii_digit() {
				break;
			}
			self.position += 1;
		}
	}

	/// Reads a run of ASCII digits as an unsigned decimal integer. The byte
	/// terminating the run is left unconsumed.
	pub fn read_uint(&mut self) -> Result<u32, EditError> {
		let mut value: u32 = 0;
		let mut digits = 0;
		while let Some(byte) = self.peek() {
			if !byte.is_ascii_digit() {
				break;
			}
			value = value
				.saturating_mul(10)
				.saturating_add(u32::from(byte - b'0'));
			digits += 1;
			self.position += 1;
		}
		if digits == 0 {
			return Err(self.format_error("expected a decimal integer"));
		}
		Ok(value)
	}

	/// A decode error annotated with the current byte position.
	pub fn format_error(&self, msg: &str) -> EditError {
		EditError::Decode(format!("{msg} at byte {}", self.position))
	}
}
