//! Plain grayscale raster (PGM) encoding and decoding.
//!
//! This module provides functionality for:
//! - Decoding plain (ASCII) `P2` PGM text into a [`RasterImage`]
//! - Encoding a [`RasterImage`] back to plain PGM text
//! - Reading and writing PGM files on disk
//!
//! # Architecture
//!
//! `decode_pgm` and `encode_pgm` work on in-memory text so the format logic
//! can be tested without touching the filesystem; `read_pgm` and `write_pgm`
//! are thin path-based wrappers around them.

mod pgm;
mod types;

pub use pgm::{decode_pgm, encode_pgm, read_pgm, write_pgm};
pub use types::{CodecError, RasterImage};
