//! Typed errors for the image buffer engine.
//!
//! Every session command either succeeds or fails with one of these variants
//! while leaving the session untouched. The presentation layer maps each
//! variant to the status line shown to the user.

use std::fmt::{Display, Formatter};
use thiserror::Error;

/// The pixel layout an operation requires on a [`ColorMismatch`](EditError::ColorMismatch).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ColorMode {
	Grayscale,
	Color,
}

impl Display for ColorMode {
	fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
		f.write_str(match self {
			ColorMode::Grayscale => "grayscale",
			ColorMode::Color => "color",
		})
	}
}

/// Errors reported by codec and session operations.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum EditError {
	/// The command needs a loaded image and none is present.
	#[error("no image loaded")]
	NoImage,

	/// The input bytes are not a well-formed PNM file.
	#[error("failed to decode image: {0}")]
	Decode(String),

	/// A command parameter is outside the command's grammar.
	#[error("invalid argument: {0}")]
	InvalidArguments(String),

	/// Selection coordinates are well-formed but not a valid rectangle
	/// within the image bounds.
	#[error("invalid set of coordinates")]
	InvalidRange,

	/// Rotation of a sub-selection that is not square.
	#[error("the selection must be square")]
	SelectionNotSquare,

	/// The operation is restricted to the other pixel layout.
	#[error("a {0} image is required")]
	ColorMismatch(ColorMode),

	/// The image dimensions exceed what the engine is willing to allocate.
	#[error("an image of {0}x{1} pixels is too large")]
	AllocationFailure(usize, usize),
}
