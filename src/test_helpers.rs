//! Shared test utilities for the orient-resize test suite.
//!
//! Synthetic image writers (plain and EXIF-tagged JPEG/PNG), an EXIF blob
//! builder, and pixel helpers. Everything is generated in-test so no binary
//! fixtures live in the repo.
//!
//! # Usage
//!
//! ```rust
//! use crate::test_helpers::*;
//!
//! let tmp = TempDir::new().unwrap();
//! let path = tmp.path().join("rotated.jpg");
//! write_jpeg_with_exif(&path, 64, 32, &exif_with_orientation(6, false));
//! ```

use image::{ImageEncoder, Rgb, RgbImage};
use std::path::Path;

// =========================================================================
// Pixel helpers
// =========================================================================

/// Four flat colours, one per quadrant: red, green / blue, white.
pub fn quadrant_color(x: u32, y: u32, width: u32, height: u32) -> Rgb<u8> {
    match (x < width / 2, y < height / 2) {
        (true, true) => Rgb([255, 0, 0]),
        (false, true) => Rgb([0, 255, 0]),
        (true, false) => Rgb([0, 0, 255]),
        (false, false) => Rgb([255, 255, 255]),
    }
}

fn gradient(width: u32, height: u32) -> RgbImage {
    RgbImage::from_fn(width, height, |x, y| {
        Rgb([(x % 256) as u8, (y % 256) as u8, 128])
    })
}

// =========================================================================
// Plain image writers
// =========================================================================

fn encode_jpeg(img: &RgbImage) -> Vec<u8> {
    let mut bytes = Vec::new();
    image::codecs::jpeg::JpegEncoder::new(&mut bytes)
        .write_image(
            img.as_raw(),
            img.width(),
            img.height(),
            image::ExtendedColorType::Rgb8,
        )
        .unwrap();
    bytes
}

fn encode_png(img: &RgbImage) -> Vec<u8> {
    let mut bytes = Vec::new();
    image::codecs::png::PngEncoder::new(&mut bytes)
        .write_image(
            img.as_raw(),
            img.width(),
            img.height(),
            image::ExtendedColorType::Rgb8,
        )
        .unwrap();
    bytes
}

/// Create a small valid JPEG file with the given dimensions.
pub fn create_test_jpeg(path: &Path, width: u32, height: u32) {
    std::fs::write(path, encode_jpeg(&gradient(width, height))).unwrap();
}

/// Create a small valid PNG file with the given dimensions.
pub fn create_test_png(path: &Path, width: u32, height: u32) {
    std::fs::write(path, encode_png(&gradient(width, height))).unwrap();
}

// =========================================================================
// EXIF
// =========================================================================

/// A TIFF-structured EXIF blob whose IFD0 holds a single Orientation entry.
pub fn exif_with_orientation(value: u16, big_endian: bool) -> Vec<u8> {
    let u16_bytes = |v: u16| {
        if big_endian {
            v.to_be_bytes()
        } else {
            v.to_le_bytes()
        }
    };
    let u32_bytes = |v: u32| {
        if big_endian {
            v.to_be_bytes()
        } else {
            v.to_le_bytes()
        }
    };

    let mut blob = Vec::new();
    blob.extend_from_slice(if big_endian { b"MM" } else { b"II" });
    blob.extend_from_slice(&u16_bytes(42));
    blob.extend_from_slice(&u32_bytes(8)); // IFD0 offset
    blob.extend_from_slice(&u16_bytes(1)); // entry count
    blob.extend_from_slice(&u16_bytes(0x0112)); // Orientation
    blob.extend_from_slice(&u16_bytes(3)); // SHORT
    blob.extend_from_slice(&u32_bytes(1)); // count
    blob.extend_from_slice(&u16_bytes(value));
    blob.extend_from_slice(&[0, 0]); // value padding
    blob.extend_from_slice(&u32_bytes(0)); // no next IFD
    blob
}

/// Write a JPEG whose APP1 segment carries `exif`.
pub fn write_jpeg_with_exif(path: &Path, width: u32, height: u32, exif: &[u8]) {
    let jpeg = encode_jpeg(&gradient(width, height));
    assert_eq!(&jpeg[..2], &[0xFF, 0xD8], "missing SOI");

    let payload_len = 2 + 6 + exif.len();
    let mut out = Vec::with_capacity(jpeg.len() + payload_len + 2);
    out.extend_from_slice(&jpeg[..2]);
    out.extend_from_slice(&[0xFF, 0xE1]);
    out.extend_from_slice(&(payload_len as u16).to_be_bytes());
    out.extend_from_slice(b"Exif\0\0");
    out.extend_from_slice(exif);
    out.extend_from_slice(&jpeg[2..]);
    std::fs::write(path, out).unwrap();
}

/// Write a PNG with an `eXIf` chunk right after IHDR.
pub fn write_png_with_exif(path: &Path, width: u32, height: u32, exif: &[u8]) {
    let png = encode_png(&gradient(width, height));
    // 8-byte signature + IHDR (4 len + 4 type + 13 data + 4 crc)
    let ihdr_end = 8 + 25;
    assert_eq!(&png[12..16], b"IHDR");

    let mut chunk = Vec::with_capacity(exif.len() + 12);
    chunk.extend_from_slice(&(exif.len() as u32).to_be_bytes());
    chunk.extend_from_slice(b"eXIf");
    chunk.extend_from_slice(exif);
    let crc = crc32(&chunk[4..]);
    chunk.extend_from_slice(&crc.to_be_bytes());

    let mut out = Vec::with_capacity(png.len() + chunk.len());
    out.extend_from_slice(&png[..ihdr_end]);
    out.extend_from_slice(&chunk);
    out.extend_from_slice(&png[ihdr_end..]);
    std::fs::write(path, out).unwrap();
}

/// CRC-32 (ISO 3309) as used by PNG chunks.
fn crc32(data: &[u8]) -> u32 {
    let mut crc = 0xFFFF_FFFFu32;
    for &byte in data {
        crc ^= u32::from(byte);
        for _ in 0..8 {
            crc = if crc & 1 != 0 {
                (crc >> 1) ^ 0xEDB8_8320
            } else {
                crc >> 1
            };
        }
    }
    !crc
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn crc32_matches_known_vector() {
        assert_eq!(crc32(b"123456789"), 0xCBF4_3926);
    }
}
