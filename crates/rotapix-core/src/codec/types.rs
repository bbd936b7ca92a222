//! Core types for raster images.

use thiserror::Error;

/// Errors for reading and writing plain PGM rasters.
#[derive(Debug, Error)]
pub enum CodecError {
    /// The file does not start with the plain-grayscale format tag.
    #[error("not a plain PGM raster: expected tag \"P2\", found {found:?}")]
    BadMagic {
        /// The tag that was actually present.
        found: String,
    },

    /// A header field (width, height, maximum value) is missing or malformed.
    #[error("malformed PGM header: {0}")]
    BadHeader(String),

    /// A pixel token could not be parsed as a non-negative integer.
    #[error("invalid sample value {token:?}")]
    BadSample {
        /// The offending token.
        token: String,
    },

    /// The pixel data ended before `width * height` samples were read.
    #[error("truncated pixel data: expected {expected} samples, found {actual}")]
    Truncated {
        /// Samples the header promised.
        expected: usize,
        /// Samples actually present.
        actual: usize,
    },

    /// I/O error while reading or writing a raster file.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// A grayscale raster: a 2D grid of intensity samples with explicit
/// width and height.
///
/// Samples are stored in a single contiguous row-major buffer, indexed as
/// `row * width + col`. The buffer length always equals `width * height`;
/// zero-sized rasters are representable and hold an empty buffer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RasterImage {
    /// Grid width in pixels.
    pub width: u32,
    /// Grid height in pixels.
    pub height: u32,
    /// Row-major intensity samples. Length is `width * height`.
    pub samples: Vec<u16>,
}

impl RasterImage {
    /// Create a raster from an existing sample buffer.
    pub fn new(width: u32, height: u32, samples: Vec<u16>) -> Self {
        debug_assert_eq!(
            samples.len(),
            width as usize * height as usize,
            "Sample buffer size mismatch"
        );
        Self {
            width,
            height,
            samples,
        }
    }

    /// Create a raster filled with the zero background value.
    pub fn zeroed(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            samples: vec![0; width as usize * height as usize],
        }
    }

    /// Get the sample at column `x`, row `y`.
    ///
    /// Panics if the coordinates are outside the grid.
    #[inline]
    pub fn sample(&self, x: u32, y: u32) -> u16 {
        self.samples[y as usize * self.width as usize + x as usize]
    }

    /// Get the total number of pixels.
    pub fn pixel_count(&self) -> usize {
        self.width as usize * self.height as usize
    }

    /// Iterate over the rows of the grid, top to bottom.
    pub fn rows(&self) -> std::slice::ChunksExact<'_, u16> {
        // A chunk size of zero would panic; a zero-width raster has no rows
        // to yield either way.
        self.samples.chunks_exact(self.width.max(1) as usize)
    }

    /// Check if this is an empty raster.
    pub fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }
}
