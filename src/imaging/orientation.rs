//! EXIF orientation tag.
//!
//! Cameras record how the raw sensor rows must be rotated or mirrored for
//! upright display as a small integer (1–8) in the EXIF `Orientation` field
//! (tag `0x0112`). This module maps those integers onto a closed enum.
//!
//! | EXIF | Variant | Correction |
//! |---|---|---|
//! | 1 | [`Upright`](Orientation::Upright) | none |
//! | 2 | [`FlipHorizontal`](Orientation::FlipHorizontal) | mirror about the vertical axis |
//! | 3 | [`Rotate180`](Orientation::Rotate180) | rotate 180° |
//! | 4 | [`FlipVertical`](Orientation::FlipVertical) | mirror about the horizontal axis |
//! | 5 | [`Transpose`](Orientation::Transpose) | mirror + rotate 90° CW |
//! | 6 | [`Rotate90Cw`](Orientation::Rotate90Cw) | rotate 90° CW |
//! | 7 | [`Transverse`](Orientation::Transverse) | rotate 90° CW + mirror |
//! | 8 | [`Rotate90Ccw`](Orientation::Rotate90Ccw) | rotate 90° CCW |
//!
//! The tag itself is read by the `image` decoders, which report it as
//! [`image::metadata::Orientation`]. Unknown or missing values resolve to
//! [`Orientation::Upright`]; a bad tag never fails the pipeline.

use image::metadata::Orientation as DecodedOrientation;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Orientation {
    #[default]
    Upright,
    FlipHorizontal,
    Rotate180,
    FlipVertical,
    Transpose,
    Rotate90Cw,
    Transverse,
    Rotate90Ccw,
}

impl Orientation {
    /// All eight orientations in EXIF order (1..=8).
    pub const ALL: [Orientation; 8] = [
        Orientation::Upright,
        Orientation::FlipHorizontal,
        Orientation::Rotate180,
        Orientation::FlipVertical,
        Orientation::Transpose,
        Orientation::Rotate90Cw,
        Orientation::Transverse,
        Orientation::Rotate90Ccw,
    ];

    /// Whether the correction includes a quarter turn, so the stored rows
    /// become columns on screen.
    pub fn swaps_axes(self) -> bool {
        matches!(
            self,
            Self::Transpose | Self::Rotate90Cw | Self::Transverse | Self::Rotate90Ccw
        )
    }

    /// Short kebab-case label used in CLI output.
    pub fn label(self) -> &'static str {
        match self {
            Self::Upright => "upright",
            Self::FlipHorizontal => "flip-horizontal",
            Self::Rotate180 => "rotate-180",
            Self::FlipVertical => "flip-vertical",
            Self::Transpose => "transpose",
            Self::Rotate90Cw => "rotate-90-cw",
            Self::Transverse => "transverse",
            Self::Rotate90Ccw => "rotate-90-ccw",
        }
    }
}

impl From<DecodedOrientation> for Orientation {
    fn from(value: DecodedOrientation) -> Self {
        match value {
            DecodedOrientation::NoTransforms => Self::Upright,
            DecodedOrientation::FlipHorizontal => Self::FlipHorizontal,
            DecodedOrientation::Rotate180 => Self::Rotate180,
            DecodedOrientation::FlipVertical => Self::FlipVertical,
            DecodedOrientation::Rotate90FlipH => Self::Transpose,
            DecodedOrientation::Rotate90 => Self::Rotate90Cw,
            DecodedOrientation::Rotate270FlipH => Self::Transverse,
            DecodedOrientation::Rotate270 => Self::Rotate90Ccw,
        }
    }
}

impl fmt::Display for Orientation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
