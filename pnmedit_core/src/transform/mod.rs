//! Stateless transforms over a [`PixelBuffer`](crate::PixelBuffer) and the
//! active selection.

mod apply;
mod crop;
mod equalize;
mod histogram;
mod rotate;

pub use apply::{Filter, apply};
pub use crop::crop;
pub use equalize::equalize;
pub use histogram::histogram;
pub use rotate::rotate;
