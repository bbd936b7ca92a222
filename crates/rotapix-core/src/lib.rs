//! Rotapix Core - grayscale raster processing
//!
//! This crate provides the processing half of Rotapix: the in-memory raster
//! model, a plain (ASCII) PGM codec, and the arbitrary-angle rotation
//! transform used by the command-line driver.

pub mod codec;
pub mod transform;

pub use codec::{decode_pgm, encode_pgm, read_pgm, write_pgm, CodecError, RasterImage};
pub use transform::{rotate, rotated_bounds};
