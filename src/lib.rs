//! # Orient Resize
//!
//! Batch resizer for a folder of photos. Every image directly inside the
//! folder is scaled so its longer stored edge is 1024 pixels, has its EXIF
//! orientation baked into the pixels, and is written to `<folder>/Resized/`.
//!
//! # Architecture: Five-Step Pipeline
//!
//! Each file runs through the same steps, one file at a time:
//!
//! ```text
//! Load       file        →  pixels + orientation + ICC profile
//! Size       raw dims    →  canvas (long edge = 1024)
//! Transform  orientation →  affine map from oriented draw rect onto canvas
//! Render     pixels      →  canvas pixels (Lanczos3 resample + exact remap)
//! Encode     canvas      →  Resized/<stem>.png | Resized/<stem>.jpg
//! ```
//!
//! Sizing and transform derivation are pure functions of the source
//! dimensions and orientation, so they are unit tested without pixels. The
//! pixel steps sit behind [`imaging::ImageBackend`], which lets the folder
//! loop be tested against a recording mock.
//!
//! # Module Map
//!
//! | Module | Role |
//! |--------|------|
//! | [`process`] | The folder loop: list, skip non-images, create `Resized/`, resize each image |
//! | [`imaging`] | Orientation, geometry, and the pure-Rust load/render/encode backend |
//! | [`naming`] | Which files are images, and what their outputs are called |
//! | [`config`] | Fixed run settings (1024px, JPEG quality 90, `Resized`) |
//! | [`output`] | CLI output formatting for progress, summary and errors |
//!
//! # Design Decisions
//!
//! ## Sizing From Stored Dimensions
//!
//! The canvas is computed from the pixel grid as stored in the file, not as
//! it will be displayed. A landscape-stored photo tagged "rotate 90" gets a
//! landscape canvas, and the rotated content is fitted into it. Outputs
//! therefore have predictable dimensions from the file header alone.
//!
//! ## Two Output Formats
//!
//! PNG, TIFF and GIF sources are usually graphics or scans where lossless
//! matters, so they are written as PNG. Everything else is a photo and is
//! written as JPEG at quality 90.
//!
//! ## Fail Fast
//!
//! The first file that cannot be loaded, rendered or saved stops the run with
//! a non-zero exit code. Files that are not images are skipped silently.

pub mod config;
pub mod imaging;
pub mod naming;
pub mod output;
pub mod process;

#[cfg(test)]
pub(crate) mod test_helpers;
