//! High-level image operations.
//!
//! These functions combine calculations with backend execution. They take
//! options, compute parameters, and call the backend. One call to
//! [`resize_image`] walks a single file through the whole pipeline:
//!
//! ```text
//! load → size → transform → render → encode
//! ```
//!
//! Sizing and transform derivation live in [`plan_resize`], which is pure.

use super::backend::{BackendError, Dimensions, ImageBackend, SourceImage};
use super::calculations::{calculate_draw_dimensions, calculate_target_dimensions};
use super::orientation::Orientation;
use super::params::{EncodeParams, OutputFormat, Quality, RenderParams, TargetGeometry};
use super::transform::orientation_transform;
use crate::naming::output_path;
use image::ImageFormat;
use std::path::{Path, PathBuf};

/// Result type for image operations.
pub type Result<T> = std::result::Result<T, BackendError>;

/// Options for a single resize.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResizeOptions {
    /// Length of the longer output edge.
    pub max_dimension: u32,
    /// JPEG quality; ignored for PNG output.
    pub quality: Quality,
}

impl Default for ResizeOptions {
    fn default() -> Self {
        Self {
            max_dimension: 1024,
            quality: Quality::default(),
        }
    }
}

/// Everything the backend needs after loading, derived without pixels.
#[derive(Debug, Clone, PartialEq)]
pub struct ResizePlan {
    pub render: RenderParams,
    pub encode: EncodeParams,
}

/// Plan the render and encode steps for a loaded source.
pub fn plan_resize(
    source_path: &Path,
    source: Dimensions,
    orientation: Orientation,
    format: ImageFormat,
    output_dir: &Path,
    options: &ResizeOptions,
) -> ResizePlan {
    let canvas =
        calculate_target_dimensions((source.width, source.height), options.max_dimension);
    let (draw_width, draw_height) = calculate_draw_dimensions(canvas, orientation);
    let output_format = OutputFormat::for_source(format);

    ResizePlan {
        render: RenderParams {
            canvas,
            draw_width,
            draw_height,
            transform: orientation_transform(orientation, canvas),
        },
        encode: EncodeParams {
            output: output_path(source_path, output_dir, output_format),
            format: output_format,
            quality: options.quality,
        },
    }
}

fn plan_for(
    source_path: &Path,
    source: &SourceImage,
    output_dir: &Path,
    options: &ResizeOptions,
) -> ResizePlan {
    plan_resize(
        source_path,
        source.dimensions(),
        source.orientation,
        source.format,
        output_dir,
        options,
    )
}

/// Outcome of one successful resize.
#[derive(Debug, Clone, PartialEq)]
pub struct ResizedImage {
    pub source: PathBuf,
    pub output: PathBuf,
    pub canvas: TargetGeometry,
    pub orientation: Orientation,
    pub format: OutputFormat,
}

/// Load, resize, orient and re-encode one image into `output_dir`.
///
/// `format` is the format named by the file extension. The source pixels
/// are dropped as soon as the canvas is rendered; the canvas is dropped once
/// encoded.
pub fn resize_image(
    backend: &impl ImageBackend,
    source_path: &Path,
    format: ImageFormat,
    output_dir: &Path,
    options: &ResizeOptions,
) -> Result<ResizedImage> {
    let source = backend.load(source_path, format)?;
    let plan = plan_for(source_path, &source, output_dir, options);
    let orientation = source.orientation;

    let rendered = backend.render(&source, &plan.render)?;
    drop(source);

    backend.encode(&rendered, &plan.encode)?;

    Ok(ResizedImage {
        source: source_path.to_path_buf(),
        output: plan.encode.output,
        canvas: plan.render.canvas,
        orientation,
        format: plan.encode.format,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::imaging::backend::tests::{MockBackend, MockSource, RecordedOp};
    use crate::imaging::transform::AffineTransform;

    fn dims(width: u32, height: u32) -> Dimensions {
        Dimensions { width, height }
    }

    // =========================================================================
    // plan_resize
    // =========================================================================

    #[test]
    fn plan_landscape_jpeg() {
        let plan = plan_resize(
            Path::new("/in/x.jpg"),
            dims(2000, 1000),
            Orientation::Upright,
            ImageFormat::Jpeg,
            Path::new("/in/Resized"),
            &ResizeOptions::default(),
        );

        assert_eq!(plan.render.canvas.size(), (1024, 512));
        assert_eq!((plan.render.draw_width, plan.render.draw_height), (1024, 512));
        assert!(plan.render.transform.is_identity());
        assert_eq!(plan.encode.output, PathBuf::from("/in/Resized/x.jpg"));
        assert_eq!(plan.encode.format, OutputFormat::Jpeg);
        assert_eq!(plan.encode.quality, Quality::new(90));
    }

    #[test]
    fn plan_portrait_png() {
        let plan = plan_resize(
            Path::new("/in/x.png"),
            dims(1000, 2000),
            Orientation::Upright,
            ImageFormat::Png,
            Path::new("/in/Resized"),
            &ResizeOptions::default(),
        );

        assert_eq!(plan.render.canvas.size(), (512, 1024));
        assert_eq!(plan.encode.output, PathBuf::from("/in/Resized/x.png"));
        assert_eq!(plan.encode.format, OutputFormat::Png);
    }

    #[test]
    fn plan_rotated_jpeg_sizes_from_raw_dimensions() {
        let plan = plan_resize(
            Path::new("/in/x.jpg"),
            dims(2000, 1000),
            Orientation::Rotate90Cw,
            ImageFormat::Jpeg,
            Path::new("/in/Resized"),
            &ResizeOptions::default(),
        );

        assert_eq!(plan.render.canvas.size(), (1024, 512));
        assert_eq!((plan.render.draw_width, plan.render.draw_height), (512, 1024));
        assert_eq!(
            plan.render.transform,
            AffineTransform::IDENTITY
                .translated(1024.0, 0.0)
                .rotated(std::f64::consts::FRAC_PI_2)
        );
    }

    #[test]
    fn plan_tiff_and_gif_become_png() {
        for (name, format) in [("scan.tiff", ImageFormat::Tiff), ("anim.gif", ImageFormat::Gif)] {
            let plan = plan_resize(
                &Path::new("/in").join(name),
                dims(10, 10),
                Orientation::Upright,
                format,
                Path::new("/out"),
                &ResizeOptions::default(),
            );
            assert_eq!(plan.encode.format, OutputFormat::Png);
            assert_eq!(plan.encode.output.extension().unwrap(), "png");
        }
    }

    #[test]
    fn plan_bmp_becomes_jpeg() {
        let plan = plan_resize(
            Path::new("/in/old.BMP"),
            dims(10, 20),
            Orientation::Upright,
            ImageFormat::Bmp,
            Path::new("/out"),
            &ResizeOptions::default(),
        );
        assert_eq!(plan.encode.output, PathBuf::from("/out/old.jpg"));
    }

    #[test]
    fn plan_respects_custom_max_dimension() {
        let options = ResizeOptions {
            max_dimension: 100,
            quality: Quality::new(70),
        };
        let plan = plan_resize(
            Path::new("/in/x.jpg"),
            dims(400, 300),
            Orientation::Upright,
            ImageFormat::Jpeg,
            Path::new("/out"),
            &options,
        );
        assert_eq!(plan.render.canvas.size(), (100, 75));
        assert_eq!(plan.encode.quality.value(), 70);
    }

    // =========================================================================
    // resize_image
    // =========================================================================

    #[test]
    fn resize_runs_load_render_encode_in_order() {
        let backend = MockBackend::with_sources(vec![MockSource {
            width: 2000,
            height: 1000,
            orientation: Orientation::Rotate90Cw,
        }]);

        let resized = resize_image(
            &backend,
            Path::new("/in/x.jpg"),
            ImageFormat::Jpeg,
            Path::new("/in/Resized"),
            &ResizeOptions::default(),
        )
        .unwrap();

        assert_eq!(resized.output, PathBuf::from("/in/Resized/x.jpg"));
        assert_eq!(resized.canvas.size(), (1024, 512));
        assert_eq!(resized.orientation, Orientation::Rotate90Cw);

        let ops = backend.get_operations();
        assert_eq!(ops.len(), 3);
        assert!(matches!(&ops[0], RecordedOp::Load { path, .. } if path == "/in/x.jpg"));
        assert!(matches!(
            &ops[1],
            RecordedOp::Render { canvas, draw: (512, 1024), .. } if canvas.size() == (1024, 512)
        ));
        assert!(matches!(
            &ops[2],
            RecordedOp::Encode { output, format: OutputFormat::Jpeg, width: 1024, height: 512, .. }
                if output == "/in/Resized/x.jpg"
        ));
    }

    #[test]
    fn decode_failure_stops_before_render() {
        let backend = MockBackend::new();
        let err = resize_image(
            &backend,
            Path::new("/in/broken.jpg"),
            ImageFormat::Jpeg,
            Path::new("/out"),
            &ResizeOptions::default(),
        )
        .unwrap_err();

        assert!(matches!(err, BackendError::Decode { .. }));
        assert_eq!(backend.get_operations().len(), 1);
    }

    #[test]
    fn zero_sized_canvas_stops_before_encode() {
        let backend = MockBackend::with_sources(vec![MockBackend::upright(3000, 2)]);
        let err = resize_image(
            &backend,
            Path::new("/in/strip.png"),
            ImageFormat::Png,
            Path::new("/out"),
            &ResizeOptions::default(),
        )
        .unwrap_err();

        assert!(matches!(err, BackendError::Render(_)));
        let ops = backend.get_operations();
        assert!(!ops.iter().any(|op| matches!(op, RecordedOp::Encode { .. })));
    }

    #[test]
    fn encode_failure_is_reported() {
        let backend = MockBackend {
            fail_encode: true,
            ..MockBackend::with_sources(vec![MockBackend::upright(100, 100)])
        };
        let err = resize_image(
            &backend,
            Path::new("/in/x.png"),
            ImageFormat::Png,
            Path::new("/out"),
            &ResizeOptions::default(),
        )
        .unwrap_err();
        assert!(err.to_string().starts_with("Failed to save image /out/x.png"));
    }
}
