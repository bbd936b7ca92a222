//! Plain (ASCII) PGM parsing and serialization.
//!
//! The accepted format is the textual `P2` variant of PGM:
//!
//! ```text
//! P2
//! <width> <height>
//! <maxValue>
//! <width * height samples, any whitespace-separated layout, row-major>
//! ```
//!
//! The declared maximum value is consumed but not enforced on read, so a
//! file whose samples exceed it still decodes. Writing always declares a
//! maximum of 255 and emits one grid row per line, each value followed by a
//! single space.

use std::fmt::Write as _;
use std::fs;
use std::path::Path;

use super::types::{CodecError, RasterImage};

/// Format tag for plain (ASCII) grayscale PGM.
const PGM_MAGIC: &str = "P2";

/// Maximum sample value declared on write.
const WRITE_MAX_VALUE: u16 = 255;

/// Decode plain PGM text into a raster.
///
/// Fails with a format error on a wrong tag, a malformed header, a
/// non-numeric sample, or pixel data shorter than the header promises.
/// The tag and header are validated before the sample grid is allocated.
/// Tokens past `width * height` samples are ignored.
pub fn decode_pgm(text: &str) -> Result<RasterImage, CodecError> {
    let mut tokens = text.split_ascii_whitespace();

    let magic = tokens
        .next()
        .ok_or_else(|| CodecError::BadHeader("empty input".to_string()))?;
    if magic != PGM_MAGIC {
        return Err(CodecError::BadMagic {
            found: magic.to_string(),
        });
    }

    let width = next_header_field(&mut tokens, "width")?;
    let height = next_header_field(&mut tokens, "height")?;
    // Consumed but not enforced: samples above this value survive a read.
    let _max_value: u32 = next_header_field(&mut tokens, "maximum sample value")?;

    let expected = width as usize * height as usize;
    let mut samples = Vec::with_capacity(expected);
    for _ in 0..expected {
        let token = tokens.next().ok_or_else(|| CodecError::Truncated {
            expected,
            actual: samples.len(),
        })?;
        let value = token.parse::<u16>().map_err(|_| CodecError::BadSample {
            token: token.to_string(),
        })?;
        samples.push(value);
    }

    Ok(RasterImage::new(width, height, samples))
}

fn next_header_field<'a, T: std::str::FromStr>(
    tokens: &mut impl Iterator<Item = &'a str>,
    field: &str,
) -> Result<T, CodecError> {
    let token = tokens
        .next()
        .ok_or_else(|| CodecError::BadHeader(format!("missing {field}")))?;
    token
        .parse()
        .map_err(|_| CodecError::BadHeader(format!("invalid {field} {token:?}")))
}

/// Encode a raster as plain PGM text.
///
/// Emits the `P2` tag, `width height`, the literal maximum value 255, then
/// one grid row per line with every value followed by a single space
/// (including a trailing space before each newline).
pub fn encode_pgm(image: &RasterImage) -> String {
    let mut out = String::new();
    // Writing into a String cannot fail.
    let _ = writeln!(out, "{PGM_MAGIC}");
    let _ = writeln!(out, "{} {}", image.width, image.height);
    let _ = writeln!(out, "{WRITE_MAX_VALUE}");
    for row in image.rows() {
        for value in row {
            let _ = write!(out, "{value} ");
        }
        out.push('\n');
    }
    out
}

/// Read and decode a plain PGM file.
pub fn read_pgm<P: AsRef<Path>>(path: P) -> Result<RasterImage, CodecError> {
    let text = fs::read_to_string(path)?;
    decode_pgm(&text)
}

/// Encode a raster and write it to `path`, overwriting any existing file.
///
/// A failure mid-write may leave a partial file behind; there are no
/// transactional write semantics.
pub fn write_pgm<P: AsRef<Path>>(path: P, image: &RasterImage) -> Result<(), CodecError> {
    fs::write(path, encode_pgm(image))?;
    Ok(())
}


// ============================================================================
// Property-Based Tests
// ============================================================================
