//! Pure calculation functions for image dimensions.
//!
//! All functions here are pure and testable without any I/O or images.

use super::orientation::Orientation;
use super::params::TargetGeometry;

/// Calculate the output canvas for a source image.
///
/// The longer source edge maps to `max_dimension`; the shorter edge is scaled
/// by the same ratio and truncated toward zero. Square images take the
/// portrait branch, which gives `(max, max)` either way.
///
/// Sizing uses the **raw** stored dimensions, before any orientation
/// correction. A 2000×1000 photo tagged "rotate 90° CW" still gets a
/// 1024×512 canvas.
///
/// # Examples
/// ```
/// # use orient_resize::imaging::calculate_target_dimensions;
/// assert_eq!(calculate_target_dimensions((2000, 1000), 1024).size(), (1024, 512));
/// assert_eq!(calculate_target_dimensions((1000, 2000), 1024).size(), (512, 1024));
/// assert_eq!(calculate_target_dimensions((3, 1), 1024).size(), (1024, 341));
/// ```
pub fn calculate_target_dimensions(source: (u32, u32), max_dimension: u32) -> TargetGeometry {
    let (src_w, src_h) = source;
    let max = u64::from(max_dimension);

    if src_w > src_h {
        // Landscape: width is the long edge
        let h = max * u64::from(src_h) / u64::from(src_w);
        TargetGeometry::new(max_dimension, h as u32)
    } else {
        // Portrait or square: height is the long edge
        let w = max * u64::from(src_w) / u64::from(src_h.max(1));
        TargetGeometry::new(w as u32, max_dimension)
    }
}

/// Size of the rectangle the source is resampled into before the
/// orientation transform places it on the canvas.
///
/// For quarter-turn orientations the rectangle is the canvas with its axes
/// swapped, so the rotated content covers the canvas exactly.
pub fn calculate_draw_dimensions(target: TargetGeometry, orientation: Orientation) -> (u32, u32) {
    if orientation.swaps_axes() {
        (target.height, target.width)
    } else {
        (target.width, target.height)
    }
}
