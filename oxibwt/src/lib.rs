//! # OxiBWT
//!
//! Pure Rust Burrows-Wheeler compression front end.
//!
//! The crate implements the two reversible transforms that precede
//! entropy coding in block-sorting compressors such as BZip2:
//!
//! 1. Burrows-Wheeler Transform (BWT) - sorts the cyclic rotations of a
//!    block so repeated substrings collapse into byte runs
//! 2. Move-to-Front Transform (MTF) - turns that local repetition into
//!    a stream of small integers
//!
//! No entropy coder is included: [`compress`] output is the MTF byte
//! stream, ready to hand to a Huffman or arithmetic coding stage.
//!
//! All transforms are pure buffer-in/buffer-out functions. The serialized
//! BWT form is a 4-byte big-endian row index followed by the last column
//! of the sorted rotation matrix; MTF adds no framing at all. An empty
//! input maps to an empty output at every stage, header included.
//!
//! ## Example
//!
//! ```rust
//! let original = b"abracadabra!";
//!
//! let compressed = oxibwt::compress(original);
//! let expanded = oxibwt::decompress(&compressed).unwrap();
//!
//! assert_eq!(expanded, original);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![forbid(unsafe_code)]

pub mod bwt;
mod error;
pub mod mtf;
pub mod suffix;

pub use error::{BwtError, Result};
pub use suffix::CircularSuffixes;

/// Run the forward pipeline: BWT, then MTF over the serialized form.
pub fn compress(data: &[u8]) -> Vec<u8> {
    mtf::transform(&bwt::encode(data))
}

/// Run the inverse pipeline: inverse MTF, then inverse BWT.
pub fn decompress(data: &[u8]) -> Result<Vec<u8>> {
    bwt::decode(&mtf::inverse_transform(data))
}
