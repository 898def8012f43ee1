//! Core data types: pixel planes, the image buffer, the PNM format tag and
//! the active selection rectangle.

mod buffer;
mod format;
mod selection;

pub use buffer::{MAX_SAMPLE_COUNT, PixelBuffer, Plane};
pub use format::PnmFormat;
pub use selection::Selection;
