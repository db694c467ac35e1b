//! Image processing backend trait and shared types.
//!
//! The [`ImageBackend`] trait defines the three pixel-touching stages of the
//! pipeline: load, render, and encode. Sizing and orientation math happen in
//! [`operations`](super::operations) and never touch pixels.
//!
//! The production implementation is
//! [`RustBackend`](super::rust_backend::RustBackend), pure Rust and statically
//! linked into the binary.

use super::orientation::Orientation;
use super::params::{EncodeParams, RenderParams};
use image::{DynamicImage, ImageFormat};
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Failure of a single pipeline step. The message names the step.
#[derive(Error, Debug)]
pub enum BackendError {
    #[error("Failed to load image {}: {message}", path.display())]
    Decode { path: PathBuf, message: String },
    #[error("Failed to create graphics context: {0}")]
    Render(String),
    #[error("Failed to create image destination {}: {source}", path.display())]
    CreateDestination {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("Failed to save image {}: {message}", path.display())]
    Encode { path: PathBuf, message: String },
}

/// Pixel dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Dimensions {
    pub width: u32,
    pub height: u32,
}

/// A decoded input file.
///
/// Created by [`ImageBackend::load`], read-only afterwards, dropped once the
/// canvas has been rendered.
#[derive(Debug, Clone)]
pub struct SourceImage {
    pub pixels: DynamicImage,
    pub format: ImageFormat,
    /// Upright when the file carries no readable orientation.
    pub orientation: Orientation,
    /// Embedded colour profile, if the decoder exposed one.
    pub icc_profile: Option<Vec<u8>>,
}

impl SourceImage {
    pub fn dimensions(&self) -> Dimensions {
        Dimensions {
            width: self.pixels.width(),
            height: self.pixels.height(),
        }
    }

    pub fn bits_per_component(&self) -> u16 {
        let color = self.pixels.color();
        color.bits_per_pixel() / u16::from(color.channel_count())
    }
}

/// A canvas of exactly the target size, ready for encoding.
#[derive(Debug, Clone)]
pub struct RenderedImage {
    pub pixels: DynamicImage,
    pub icc_profile: Option<Vec<u8>>,
}

impl RenderedImage {
    pub fn dimensions(&self) -> Dimensions {
        Dimensions {
            width: self.pixels.width(),
            height: self.pixels.height(),
        }
    }
}

/// Trait for image processing backends.
///
/// Every backend implements all three stages so the rest of the codebase is
/// backend-agnostic.
pub trait ImageBackend {
    /// Decode `path` and read its orientation. `format` is the format the
    /// file extension names; content sniffing may override it.
    fn load(&self, path: &Path, format: ImageFormat) -> Result<SourceImage, BackendError>;

    /// Draw `source` onto a fresh canvas through the orientation transform.
    fn render(
        &self,
        source: &SourceImage,
        params: &RenderParams,
    ) -> Result<RenderedImage, BackendError>;

    /// Write the canvas to disk.
    fn encode(&self, image: &RenderedImage, params: &EncodeParams) -> Result<(), BackendError>;
}
