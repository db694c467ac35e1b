//! Parameter types for image operations.
//!
//! These structs describe *what* to do, not *how* to do it. They are the
//! interface between the high-level [`operations`](super::operations) module
//! (which plans each resize) and the [`backend`](super::backend) (which does
//! the actual pixel work). This separation allows swapping backends (e.g. for
//! testing with a mock) without changing operation logic.
//!
//! ## Types
//!
//! - [`Quality`]: Lossy encoding quality (1–100, default 90). Clamped on construction.
//! - [`OutputFormat`]: PNG for lossless-preserving sources, JPEG for the rest.
//! - [`TargetGeometry`]: Output canvas size.
//! - [`RenderParams`]: Canvas, draw rectangle and orientation transform for the renderer.
//! - [`EncodeParams`]: Output path, format and quality for the encoder.

use super::transform::AffineTransform;
use image::ImageFormat;
use std::path::PathBuf;

/// Quality setting for lossy image encoding (1-100).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Quality(pub u32);

impl Quality {
    pub fn new(value: u32) -> Self {
        Self(value.clamp(1, 100))
    }

    pub fn value(self) -> u32 {
        self.0
    }
}

impl Default for Quality {
    fn default() -> Self {
        Self(90)
    }
}

/// Container written by the encoder.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Png,
    Jpeg,
}

impl OutputFormat {
    /// PNG for sources that are already lossless-preserving (PNG, TIFF, GIF),
    /// JPEG for everything else.
    pub fn for_source(format: ImageFormat) -> Self {
        match format {
            ImageFormat::Png | ImageFormat::Tiff | ImageFormat::Gif => Self::Png,
            _ => Self::Jpeg,
        }
    }

    pub fn extension(self) -> &'static str {
        match self {
            Self::Png => "png",
            Self::Jpeg => "jpg",
        }
    }
}

/// Output canvas dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TargetGeometry {
    pub width: u32,
    pub height: u32,
}

impl TargetGeometry {
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    pub fn size(self) -> (u32, u32) {
        (self.width, self.height)
    }

    pub fn is_empty(self) -> bool {
        self.width == 0 || self.height == 0
    }
}

/// Parameters for drawing a source image onto its canvas.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderParams {
    pub canvas: TargetGeometry,
    /// Size the source is resampled to before `transform` is applied.
    pub draw_width: u32,
    pub draw_height: u32,
    /// Maps the draw rectangle onto the canvas.
    pub transform: AffineTransform,
}

/// Parameters for writing a rendered canvas to disk.
#[derive(Debug, Clone, PartialEq)]
pub struct EncodeParams {
    pub output: PathBuf,
    pub format: OutputFormat,
    /// Only used for JPEG.
    pub quality: Quality,
}
