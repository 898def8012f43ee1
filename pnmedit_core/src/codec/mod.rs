//! PNM decoder and encoder.
//!
//! The byte grammar is the compatibility surface of this crate: binary
//! output must be byte-identical and ASCII output numerically identical
//! across round trips.

mod decode;
mod encode;
mod reader;

pub use decode::decode;
pub use encode::encode;
