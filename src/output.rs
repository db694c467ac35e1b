//! CLI output formatting.
//!
//! Each line leads with the file's positional index and name, with the
//! result shown as indented context underneath. Skipped entries print
//! nothing.
//!
//! ```text
//! Resizing 3 images → /photos/trip/Resized
//! 001 beach.jpg → Resized/beach.jpg
//!     1024x683 jpg
//! 002 IMG_0042.JPG → Resized/IMG_0042.jpg
//!     1024x768 jpg, rotate-90-cw
//! 003 scan.tiff → Resized/scan.png
//!     724x1024 png
//!
//! Resized 3 images → /photos/trip/Resized
//! ```
//!
//! # Architecture
//!
//! Each kind of output has a `format_*` function (returns `Vec<String>` or
//! `String`) for testability and a `print_*` wrapper that does the writing.
//! Format functions are pure.

use crate::imaging::{Orientation, ResizedImage};
use crate::process::{ProcessError, ProcessEvent, ProcessResult};
use std::path::Path;

/// Format a 1-based positional index as 3-digit zero-padded.
fn format_index(pos: usize) -> String {
    format!("{:0>3}", pos)
}

/// Return indentation string: 4 spaces per depth level.
fn indent(depth: usize) -> String {
    "    ".repeat(depth)
}

fn file_name(path: &Path) -> String {
    path.file_name()
        .map(|f| f.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}

/// The last two components of `path`, e.g. `Resized/x.jpg`.
fn short_output(path: &Path) -> String {
    match path.parent().and_then(|p| p.file_name()) {
        Some(dir) => format!("{}/{}", dir.to_string_lossy(), file_name(path)),
        None => file_name(path),
    }
}

fn plural(count: usize) -> &'static str {
    if count == 1 { "image" } else { "images" }
}

fn image_lines(index: usize, image: &ResizedImage) -> Vec<String> {
    let (width, height) = image.canvas.size();
    let mut detail = format!("{}x{} {}", width, height, image.format.extension());
    if image.orientation != Orientation::Upright {
        detail.push_str(&format!(", {}", image.orientation));
    }
    vec![
        format!(
            "{} {} → {}",
            format_index(index),
            file_name(&image.source),
            short_output(&image.output)
        ),
        format!("{}{}", indent(1), detail),
    ]
}

/// Format a single progress event as display lines.
pub fn format_process_event(event: &ProcessEvent) -> Vec<String> {
    match event {
        ProcessEvent::Started {
            output_dir,
            image_count,
        } => vec![format!(
            "Resizing {} {} → {}",
            image_count,
            plural(*image_count),
            output_dir.display()
        )],
        ProcessEvent::ImageResized { index, image } => image_lines(*index, image),
    }
}

pub fn print_process_event(event: &ProcessEvent) {
    for line in format_process_event(event) {
        println!("{}", line);
    }
}

/// One-line summary printed after a successful run.
pub fn format_summary(result: &ProcessResult) -> String {
    let count = result.resized.len();
    format!(
        "Resized {} {} → {}",
        count,
        plural(count),
        result.output_dir.display()
    )
}

pub fn print_summary(result: &ProcessResult) {
    println!();
    println!("{}", format_summary(result));
}

/// One-line diagnostic for a fatal error.
pub fn format_error(err: &ProcessError) -> String {
    format!("error: {}", err)
}

pub fn print_error(err: &ProcessError) {
    eprintln!("{}", format_error(err));
}
