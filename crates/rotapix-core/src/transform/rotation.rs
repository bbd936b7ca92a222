//! Arbitrary-angle raster rotation with nearest-pixel sampling.
//!
//! # Algorithm
//!
//! The rotation uses forward (scatter) mapping: every source pixel is
//! rotated about the grid center and written to the nearest destination
//! cell. For rotation by angle θ (negated internally), each source offset
//! `(x, y)` lands at:
//!
//! ```text
//! dst_x = round(x * cos(θ) - y * sin(θ) + dst_cx)
//! dst_y = round(x * sin(θ) + y * cos(θ) + dst_cy)
//! ```
//!
//! Scatter mapping has two observable consequences that gather-style
//! resampling would not share: destination cells no source pixel reaches
//! keep the zero background, and cells reached by more than one source
//! pixel resolve last-write-wins in row-major source order.

use crate::codec::RasterImage;

/// Compute the dimensions of the bounding box for a rotated raster.
///
/// When a raster is rotated, the corners extend beyond the original bounds.
/// This function calculates the axis-aligned box that holds the rotated
/// rectangle, truncating the final size toward zero. Truncation can
/// undershoot the exact geometric bound by one pixel; the resampling loop
/// bounds-checks against exactly this size, so the two stay in agreement.
///
/// Both the rotation itself and any caller reporting output dimensions must
/// go through this function rather than re-deriving the formula.
///
/// # Example
///
/// ```
/// use rotapix_core::transform::rotated_bounds;
///
/// // 90-degree rotation swaps dimensions
/// assert_eq!(rotated_bounds(100, 50, 90.0), (50, 100));
///
/// // 45 degrees grows the canvas, truncating 14.142... down
/// assert_eq!(rotated_bounds(10, 10, 45.0), (14, 14));
/// ```
pub fn rotated_bounds(width: u32, height: u32, angle_degrees: f64) -> (u32, u32) {
    let theta = -angle_degrees.to_radians();
    let (sin, cos) = theta.sin_cos();

    let w = f64::from(width);
    let h = f64::from(height);

    let out_width = ((w * cos).abs() + (h * sin).abs()) as u32;
    let out_height = ((h * cos).abs() + (w * sin).abs()) as u32;

    (out_width, out_height)
}

/// Rotate a raster by an arbitrary angle about its center.
///
/// The output canvas is sized by [`rotated_bounds`] and zero-filled before
/// resampling, so `0` is the background value for any cell the scatter loop
/// never writes. Source pixels whose rotated position rounds outside the
/// canvas are discarded; with the truncated box this only happens at the
/// very edge, and it is handled rather than treated as an error.
///
/// A zero-area source (or a zero-area box for a degenerate source) produces
/// a well-formed empty raster; there is no failure path.
pub fn rotate(source: &RasterImage, angle_degrees: f64) -> RasterImage {
    let theta = -angle_degrees.to_radians();
    let (sin, cos) = theta.sin_cos();

    let (out_width, out_height) = rotated_bounds(source.width, source.height, angle_degrees);

    // Integer centers: even dimensions put the pivot half a pixel toward
    // the top-left corner, which shows up in the output placement.
    let src_cx = i64::from(source.width / 2);
    let src_cy = i64::from(source.height / 2);
    let out_cx = i64::from(out_width / 2);
    let out_cy = i64::from(out_height / 2);

    let mut output = RasterImage::zeroed(out_width, out_height);

    for row in 0..source.height {
        for col in 0..source.width {
            // Offsets relative to the source center.
            let x = (i64::from(col) - src_cx) as f64;
            let y = (i64::from(row) - src_cy) as f64;

            let new_x = x * cos - y * sin;
            let new_y = x * sin + y * cos;

            // Nearest destination cell, rounding halves away from zero.
            let dest_x = (new_x + out_cx as f64).round() as i64;
            let dest_y = (new_y + out_cy as f64).round() as i64;

            if dest_x >= 0
                && dest_x < i64::from(out_width)
                && dest_y >= 0
                && dest_y < i64::from(out_height)
            {
                let index = dest_y as usize * out_width as usize + dest_x as usize;
                output.samples[index] = source.sample(col, row);
            }
        }
    }

    output
}

#[cfg(test)]
mod tests {
    use super::*;

    /// 3x3 raster holding the distinct values 1..=9 in row-major order.
    fn numbered_3x3() -> RasterImage {
        RasterImage::new(3, 3, (1..=9).collect())
    }

    #[test]
    fn test_zero_angle_is_identity() {
        let img = RasterImage::new(4, 3, (0..12).map(|v| v * 9).collect());
        let rotated = rotate(&img, 0.0);

        assert_eq!(rotated, img);
    }

    #[test]
    fn test_90_degree_bounds_swap() {
        assert_eq!(rotated_bounds(100, 50, 90.0), (50, 100));
        assert_eq!(rotated_bounds(100, 50, -90.0), (50, 100));
    }

    #[test]
    fn test_45_degree_bounds_truncate() {
        // The exact diagonal is 14.142...; the box truncates, never rounds.
        assert_eq!(rotated_bounds(10, 10, 45.0), (14, 14));
        assert_eq!(rotated_bounds(100, 100, 45.0), (141, 141));
    }

    #[test]
    fn test_bounds_symmetric_in_sign() {
        assert_eq!(rotated_bounds(100, 80, 30.0), rotated_bounds(100, 80, -30.0));
    }

    #[test]
    fn test_full_turn_matches_zero_angle() {
        let img = RasterImage::new(5, 4, (0..20).collect());

        assert_eq!(rotate(&img, 360.0), rotate(&img, 0.0));
        assert_eq!(rotated_bounds(100, 50, 720.0), (100, 50));
    }

    #[test]
    fn test_180_degree_grid_exact() {
        // Each offset (x, y) maps to (-x, -y), so the grid is flipped both
        // ways and value 1 lands diagonally opposite its origin.
        let rotated = rotate(&numbered_3x3(), 180.0);

        assert_eq!(rotated.width, 3);
        assert_eq!(rotated.height, 3);
        assert_eq!(rotated.samples, vec![9, 8, 7, 6, 5, 4, 3, 2, 1]);
    }

    #[test]
    fn test_90_degree_grid_exact() {
        // Positive angles rotate counter-clockwise: the right edge of the
        // source becomes the top row of the output.
        let rotated = rotate(&numbered_3x3(), 90.0);

        assert_eq!(rotated.width, 3);
        assert_eq!(rotated.height, 3);
        assert_eq!(rotated.samples, vec![3, 6, 9, 2, 5, 8, 1, 4, 7]);
    }

    #[test]
    fn test_single_pixel_any_angle() {
        let img = RasterImage::new(1, 1, vec![42]);

        for angle in [0.0, 17.0, 45.0, 90.0, 133.7, 180.0, -270.0, 359.0] {
            let rotated = rotate(&img, angle);
            assert_eq!(
                (rotated.width, rotated.height),
                (1, 1),
                "angle {angle} should keep a single pixel"
            );
            assert_eq!(rotated.samples, vec![42]);
        }
    }

    #[test]
    fn test_unwritten_cells_keep_background() {
        // A 45-degree rotation leaves the canvas corners outside the
        // rotated square, so they must stay at the zero background.
        let img = RasterImage::new(10, 10, vec![255; 100]);
        let rotated = rotate(&img, 45.0);

        assert_eq!((rotated.width, rotated.height), (14, 14));
        assert_eq!(rotated.sample(0, 0), 0);
        assert_eq!(rotated.sample(13, 0), 0);
        assert_eq!(rotated.sample(0, 13), 0);
        assert_eq!(rotated.sample(13, 13), 0);
    }

    #[test]
    fn test_scatter_never_invents_values() {
        // Forward mapping can drop or collide source pixels, but every
        // written cell must hold a source value.
        let img = RasterImage::new(10, 10, vec![255; 100]);
        let rotated = rotate(&img, 45.0);

        let written = rotated.samples.iter().filter(|&&v| v == 255).count();
        assert!(written > 0);
        assert!(written <= img.pixel_count());
        assert!(rotated.samples.iter().all(|&v| v == 0 || v == 255));
    }

    #[test]
    fn test_round_trip_restores_dimensions() {
        // Rotating back is not lossless pixel-wise; only the dimensions are
        // required to return for the axis-swapping case.
        let img = RasterImage::new(7, 4, (0..28).collect());

        let there = rotate(&img, 90.0);
        let back = rotate(&there, -90.0);

        assert_eq!((back.width, back.height), (img.width, img.height));
    }

    #[test]
    fn test_empty_raster() {
        let img = RasterImage::new(0, 0, vec![]);
        let rotated = rotate(&img, 37.0);

        assert!(rotated.is_empty());
        assert!(rotated.samples.is_empty());
    }
}

// ============================================================================
// Property-Based Tests
// ============================================================================
