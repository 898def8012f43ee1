//! The image buffer engine behind the `pnmedit` interactive editor.
//!
//! Decodes and encodes the four PNM variants (`P2`/`P3`/`P5`/`P6`), keeps
//! the decoded pixel planes in memory together with a rectangular
//! selection, and runs the geometric and photometric transforms: crop,
//! rotate, 3x3 convolution filters, histogram and equalization.
//!
//! The [`Session`] type is the entry point: it owns the current image and
//! selection and exposes one method per editor command.

pub mod codec;
pub mod error;
pub mod session;
pub mod transform;
pub mod types;

pub use crate::error::{ColorMode, EditError};
pub use crate::session::Session;
pub use crate::transform::Filter;
pub use crate::types::{PixelBuffer, Plane, PnmFormat, Selection};
