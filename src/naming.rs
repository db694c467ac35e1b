//! File naming on both sides of the pipeline.
//!
//! ## Input
//!
//! A folder entry is an image when its extension names a format whose
//! decoder is compiled in. Everything else (text files, sidecars, formats we
//! cannot read) is skipped without comment.
//!
//! ## Output
//!
//! The output keeps the input's base name and takes the extension of the
//! chosen encoder, whatever the original extension was:
//! - `IMG_0001.JPEG` → `IMG_0001.jpg`
//! - `scan.tiff` → `scan.png`
//! - `archive.2024.gif` → `archive.2024.png`

use crate::imaging::OutputFormat;
use image::ImageFormat;
use std::path::{Path, PathBuf};

/// The image format named by `path`'s extension, if we can decode it.
///
/// Matching is case-insensitive.
pub fn recognized_format(path: &Path) -> Option<ImageFormat> {
    let ext = path.extension()?.to_str()?.to_ascii_lowercase();
    ImageFormat::from_extension(ext).filter(|format| format.reading_enabled())
}

/// `output_dir/<base name>.<png|jpg>`.
pub fn output_path(source: &Path, output_dir: &Path, format: OutputFormat) -> PathBuf {
    let stem = source.file_stem().unwrap_or(source.as_os_str());
    let mut name = stem.to_os_string();
    name.push(".");
    name.push(format.extension());
    output_dir.join(name)
}
