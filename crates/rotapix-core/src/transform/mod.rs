//! Geometric transform operations.
//!
//! # Coordinate System
//!
//! - Rotation angles are in degrees; any sign and magnitude is accepted
//! - Origin is the top-left corner, row index increases downward
//! - The output canvas is the axis-aligned bounding box of the rotated
//!   source rectangle, so content is never clipped by the original frame

mod rotation;

pub use rotation::{rotate, rotated_bounds};
