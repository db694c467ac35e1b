//! Pure Rust image processing backend.
//!
//! Everything is statically linked into the binary.
//!
//! ## Crate mapping
//!
//! | Operation | Crate / function |
//! |---|---|
//! | Decode (JPEG, PNG, TIFF, GIF, BMP, WebP, …) | `image` crate (pure Rust decoders) |
//! | Orientation | `ImageDecoder::orientation` (EXIF chunk, or IFD0 for TIFF) |
//! | Colour profile | `ImageDecoder::icc_profile` → `ImageEncoder::set_icc_profile` |
//! | Resample | `DynamicImage::resize_exact` with `Lanczos3` filter |
//! | Orientation remap | inverse affine lookup at pixel centres (exact for the 8 EXIF cases) |
//! | Encode → PNG | `image::codecs::png::PngEncoder` |
//! | Encode → JPEG | `image::codecs::jpeg::JpegEncoder` |

use super::backend::{BackendError, ImageBackend, RenderedImage, SourceImage};
use super::orientation::Orientation;
use super::params::{EncodeParams, OutputFormat, RenderParams, TargetGeometry};
use super::transform::AffineTransform;
use image::codecs::jpeg::JpegEncoder;
use image::codecs::png::PngEncoder;
use image::error::UnsupportedError;
use image::imageops::FilterType;
use image::{
    DynamicImage, GenericImageView, ImageBuffer, ImageDecoder, ImageEncoder, ImageFormat,
    ImageReader, Pixel,
};
use std::borrow::Cow;
use std::fmt::Display;
use std::io::{BufWriter, Write};
use std::path::Path;

/// Pure Rust backend using the `image` crate ecosystem.
///
/// See the [module docs](self) for the crate-to-operation mapping.
pub struct RustBackend;

impl RustBackend {
    pub fn new() -> Self {
        Self
    }
}

impl Default for RustBackend {
    fn default() -> Self {
        Self::new()
    }
}

fn decode_error(path: &Path, err: impl Display) -> BackendError {
    BackendError::Decode {
        path: path.to_path_buf(),
        message: err.to_string(),
    }
}

/// Copy `src` onto a `canvas`-sized buffer, sampling at `inverse(x+½, y+½)`.
///
/// The orientation transforms are axis-aligned with integer extents, so every
/// canvas pixel centre lands on a source pixel centre; no interpolation is
/// needed at this step.
fn remap<P: Pixel>(
    src: &ImageBuffer<P, Vec<P::Subpixel>>,
    inverse: &AffineTransform,
    canvas: TargetGeometry,
) -> ImageBuffer<P, Vec<P::Subpixel>> {
    let (src_w, src_h) = src.dimensions();
    ImageBuffer::from_fn(canvas.width, canvas.height, |x, y| {
        let (sx, sy) = inverse.apply(f64::from(x) + 0.5, f64::from(y) + 0.5);
        let sx = (sx.floor().max(0.0) as u32).min(src_w - 1);
        let sy = (sy.floor().max(0.0) as u32).min(src_h - 1);
        *src.get_pixel(sx, sy)
    })
}

/// Apply [`remap`] while keeping the pixel layout. Float layouts fall back to RGBA8.
fn remap_dynamic(
    img: &DynamicImage,
    inverse: &AffineTransform,
    canvas: TargetGeometry,
) -> DynamicImage {
    match img {
        DynamicImage::ImageLuma8(b) => DynamicImage::ImageLuma8(remap(b, inverse, canvas)),
        DynamicImage::ImageLumaA8(b) => DynamicImage::ImageLumaA8(remap(b, inverse, canvas)),
        DynamicImage::ImageRgb8(b) => DynamicImage::ImageRgb8(remap(b, inverse, canvas)),
        DynamicImage::ImageRgba8(b) => DynamicImage::ImageRgba8(remap(b, inverse, canvas)),
        DynamicImage::ImageLuma16(b) => DynamicImage::ImageLuma16(remap(b, inverse, canvas)),
        DynamicImage::ImageLumaA16(b) => DynamicImage::ImageLumaA16(remap(b, inverse, canvas)),
        DynamicImage::ImageRgb16(b) => DynamicImage::ImageRgb16(remap(b, inverse, canvas)),
        DynamicImage::ImageRgba16(b) => DynamicImage::ImageRgba16(remap(b, inverse, canvas)),
        other => DynamicImage::ImageRgba8(remap(&other.to_rgba8(), inverse, canvas)),
    }
}

/// Embed the source profile if the encoder supports it; otherwise the output
/// is plain sRGB.
fn attach_icc_profile(encoder: &mut impl ImageEncoder, icc_profile: Option<&Vec<u8>>) {
    let Some(icc) = icc_profile else {
        return;
    };
    match encoder.set_icc_profile(icc.clone()) {
        Ok(()) => {}
        // This encoder cannot embed a profile, so the output stays untagged
        Err(UnsupportedError { .. }) => {}
    }
}

/// Encode as PNG. 8- and 16-bit layouts pass through; float layouts become RGBA16.
fn write_png(image: &RenderedImage, writer: impl Write) -> image::ImageResult<()> {
    let pixels = match &image.pixels {
        DynamicImage::ImageRgb32F(_) | DynamicImage::ImageRgba32F(_) => {
            Cow::Owned(DynamicImage::ImageRgba16(image.pixels.to_rgba16()))
        }
        other => Cow::Borrowed(other),
    };
    let mut encoder = PngEncoder::new(writer);
    attach_icc_profile(&mut encoder, image.icc_profile.as_ref());
    pixels.write_with_encoder(encoder)
}

/// Encode as JPEG. Baseline JPEG is 8-bit grey or RGB: alpha is dropped and
/// 16-bit layouts are reduced.
fn write_jpeg(image: &RenderedImage, writer: impl Write, quality: u32) -> image::ImageResult<()> {
    let pixels = match &image.pixels {
        DynamicImage::ImageLuma8(_) | DynamicImage::ImageRgb8(_) => Cow::Borrowed(&image.pixels),
        DynamicImage::ImageLumaA8(_)
        | DynamicImage::ImageLuma16(_)
        | DynamicImage::ImageLumaA16(_) => {
            Cow::Owned(DynamicImage::ImageLuma8(image.pixels.to_luma8()))
        }
        other => Cow::Owned(DynamicImage::ImageRgb8(other.to_rgb8())),
    };
    let mut encoder = JpegEncoder::new_with_quality(writer, quality.clamp(1, 100) as u8);
    attach_icc_profile(&mut encoder, image.icc_profile.as_ref());
    pixels.write_with_encoder(encoder)
}

impl ImageBackend for RustBackend {
    fn load(&self, path: &Path, format: ImageFormat) -> Result<SourceImage, BackendError> {
        let mut reader = ImageReader::open(path).map_err(|e| decode_error(path, e))?;
        reader.set_format(format);
        let reader = reader
            .with_guessed_format()
            .map_err(|e| decode_error(path, e))?;
        let format = reader.format().unwrap_or(format);

        let mut decoder = reader.into_decoder().map_err(|e| decode_error(path, e))?;
        // Missing or unreadable metadata is not an error
        let orientation = decoder
            .orientation()
            .map(Orientation::from)
            .unwrap_or_default();
        let icc_profile = decoder.icc_profile().ok().flatten();
        let pixels = DynamicImage::from_decoder(decoder).map_err(|e| decode_error(path, e))?;

        Ok(SourceImage {
            pixels,
            format,
            orientation,
            icc_profile,
        })
    }

    fn render(
        &self,
        source: &SourceImage,
        params: &RenderParams,
    ) -> Result<RenderedImage, BackendError> {
        let canvas = params.canvas;
        if canvas.is_empty() || params.draw_width == 0 || params.draw_height == 0 {
            return Err(BackendError::Render(format!(
                "zero-sized canvas {}x{}",
                canvas.width, canvas.height
            )));
        }
        let inverse = params.transform.invert().ok_or_else(|| {
            BackendError::Render("orientation transform is not invertible".to_string())
        })?;

        let drawn = if source.pixels.dimensions() == (params.draw_width, params.draw_height) {
            Cow::Borrowed(&source.pixels)
        } else {
            Cow::Owned(source.pixels.resize_exact(
                params.draw_width,
                params.draw_height,
                FilterType::Lanczos3,
            ))
        };

        let pixels = if params.transform.is_identity() && drawn.dimensions() == canvas.size() {
            drawn.into_owned()
        } else {
            remap_dynamic(&drawn, &inverse, canvas)
        };

        Ok(RenderedImage {
            pixels,
            icc_profile: source.icc_profile.clone(),
        })
    }

    fn encode(&self, image: &RenderedImage, params: &EncodeParams) -> Result<(), BackendError> {
        let encode_error = |err: &dyn Display| BackendError::Encode {
            path: params.output.clone(),
            message: err.to_string(),
        };

        let file = std::fs::File::create(&params.output).map_err(|source| {
            BackendError::CreateDestination {
                path: params.output.clone(),
                source,
            }
        })?;
        let mut writer = BufWriter::new(file);

        match params.format {
            OutputFormat::Png => write_png(image, &mut writer),
            OutputFormat::Jpeg => write_jpeg(image, &mut writer, params.quality.value()),
        }
        .map_err(|e| encode_error(&e))?;

        writer.flush().map_err(|e| encode_error(&e))
    }
}
