//! Image processing in pure Rust, statically linked.
//!
//! | Operation | Crate / function |
//! |---|---|
//! | **Load** | `image::ImageReader` + decoder EXIF/ICC accessors |
//! | **Orientation** | `ImageDecoder::orientation` (EXIF tag `0x0112`, TIFF IFD0) |
//! | **Size** | integer math, long edge → `max_dimension` |
//! | **Transform** | fixed 8-case affine table |
//! | **Render** | Lanczos3 resample + exact orientation remap |
//! | **Encode** | PNG for PNG/TIFF/GIF sources, JPEG otherwise |
//!
//! The module is split into:
//! - **Calculations** / **Transform**: Pure functions for canvas and geometry math (unit testable)
//! - **Parameters**: Data structures describing render and encode steps
//! - **Backend**: [`ImageBackend`] trait + [`RustBackend`]
//! - **Operations**: High-level functions combining calculations + backend

pub mod backend;
mod calculations;
pub mod operations;
pub mod orientation;
mod params;
pub mod rust_backend;
pub mod transform;

pub use backend::{BackendError, Dimensions, ImageBackend, RenderedImage, SourceImage};
pub use calculations::{calculate_draw_dimensions, calculate_target_dimensions};
pub use operations::{ResizeOptions, ResizePlan, ResizedImage, plan_resize, resize_image};
pub use orientation::Orientation;
pub use params::{EncodeParams, OutputFormat, Quality, RenderParams, TargetGeometry};
pub use rust_backend::RustBackend;
pub use transform::{AffineTransform, orientation_transform};
