//! Run configuration.
//!
//! There is no config file. The values below are fixed for every run; the
//! struct exists so tests and library callers can vary them.
//!
//! ```text
//! max_dimension   = 1024       # longer output edge, in pixels
//! quality         = 90         # JPEG quality (1-100)
//! output_dir_name = "Resized"  # created inside the input folder
//! ```

use crate::imaging::{Quality, ResizeOptions};
use std::path::{Path, PathBuf};

/// Longer edge of every output image.
pub const MAX_DIMENSION: u32 = 1024;

/// Name of the output folder created inside the input folder.
pub const OUTPUT_DIR_NAME: &str = "Resized";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResizeConfig {
    pub max_dimension: u32,
    pub quality: Quality,
    pub output_dir_name: String,
}

impl Default for ResizeConfig {
    fn default() -> Self {
        Self {
            max_dimension: MAX_DIMENSION,
            quality: Quality::default(),
            output_dir_name: OUTPUT_DIR_NAME.to_string(),
        }
    }
}

impl ResizeConfig {
    /// Per-image options for [`resize_image`](crate::imaging::operations::resize_image).
    pub fn resize_options(&self) -> ResizeOptions {
        ResizeOptions {
            max_dimension: self.max_dimension,
            quality: self.quality,
        }
    }

    pub fn output_dir(&self, input_folder: &Path) -> PathBuf {
        input_folder.join(&self.output_dir_name)
    }
}
