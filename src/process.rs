//! Folder processing.
//!
//! Resizes every image directly inside one folder into `<folder>/Resized/`.
//!
//! ## Flow
//!
//! ```text
//! list entries (sorted, non-recursive)
//! create Resized/ (an existing folder is fine)
//! for each entry:
//!     not a file, or extension not a decodable image → skip
//!     load → size → transform → render → encode
//! ```
//!
//! ## Failure Policy
//!
//! Skipping is silent. Any other failure aborts the whole run at the file
//! where it happened: there is no retry and no per-file isolation, so files
//! after the failing one are never touched.
//!
//! ## Resources
//!
//! Files are processed one at a time on the calling thread. Each file's
//! decoded and rendered buffers are dropped before the next file is opened.

use crate::config::ResizeConfig;
use crate::imaging::{BackendError, ImageBackend, ResizedImage, RustBackend, resize_image};
use crate::naming::recognized_format;
use image::ImageFormat;
use std::path::{Path, PathBuf};
use std::sync::mpsc::Sender;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ProcessError {
    #[error("Error reading contents of folder {}: {source}", path.display())]
    ReadFolder {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("Failed to create output folder {}: {source}", path.display())]
    CreateOutputFolder {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error(transparent)]
    Imaging(#[from] BackendError),
}

/// Progress reported while the folder is processed.
#[derive(Debug, Clone, PartialEq)]
pub enum ProcessEvent {
    /// Output folder is ready; `image_count` images will be processed.
    Started {
        output_dir: PathBuf,
        image_count: usize,
    },
    ImageResized {
        /// 1-based position among the images.
        index: usize,
        image: ResizedImage,
    },
}

/// Classification of one folder entry.
#[derive(Debug, Clone, PartialEq)]
pub enum Entry {
    Image { path: PathBuf, format: ImageFormat },
    Skipped(PathBuf),
}

/// Result of a completed run.
#[derive(Debug)]
pub struct ProcessResult {
    pub output_dir: PathBuf,
    pub resized: Vec<ResizedImage>,
    pub skipped: Vec<PathBuf>,
}

/// List the folder's direct entries in path order.
pub fn list_entries(folder: &Path) -> Result<Vec<PathBuf>, ProcessError> {
    let read_error = |source| ProcessError::ReadFolder {
        path: folder.to_path_buf(),
        source,
    };
    let mut entries = std::fs::read_dir(folder)
        .map_err(read_error)?
        .map(|entry| entry.map(|e| e.path()))
        .collect::<Result<Vec<_>, _>>()
        .map_err(read_error)?;
    entries.sort();
    Ok(entries)
}

/// Decide whether an entry goes through the pipeline.
pub fn classify(path: &Path) -> Entry {
    match recognized_format(path) {
        Some(format) if path.is_file() => Entry::Image {
            path: path.to_path_buf(),
            format,
        },
        _ => Entry::Skipped(path.to_path_buf()),
    }
}

/// Create the output folder. It already existing is not an error.
pub fn ensure_output_dir(path: &Path) -> Result<(), ProcessError> {
    match std::fs::create_dir(path) {
        Ok(()) => Ok(()),
        Err(e) if e.kind() == std::io::ErrorKind::AlreadyExists => Ok(()),
        Err(source) => Err(ProcessError::CreateOutputFolder {
            path: path.to_path_buf(),
            source,
        }),
    }
}

pub fn process(
    folder: &Path,
    config: &ResizeConfig,
    events: Option<Sender<ProcessEvent>>,
) -> Result<ProcessResult, ProcessError> {
    let backend = RustBackend::new();
    process_with_backend(&backend, folder, config, events)
}

/// Process a folder using a specific backend (allows testing with mock).
pub fn process_with_backend(
    backend: &impl ImageBackend,
    folder: &Path,
    config: &ResizeConfig,
    events: Option<Sender<ProcessEvent>>,
) -> Result<ProcessResult, ProcessError> {
    let entries = list_entries(folder)?;
    let output_dir = config.output_dir(folder);
    ensure_output_dir(&output_dir)?;

    let mut images = Vec::new();
    let mut skipped = Vec::new();
    for entry in entries.iter().map(|p| classify(p)) {
        match entry {
            Entry::Image { path, format } => images.push((path, format)),
            Entry::Skipped(path) => skipped.push(path),
        }
    }

    let emit = |event: ProcessEvent| {
        if let Some(tx) = &events {
            // A gone receiver only means nobody is printing
            tx.send(event).ok();
        }
    };

    emit(ProcessEvent::Started {
        output_dir: output_dir.clone(),
        image_count: images.len(),
    });

    let options = config.resize_options();
    let mut resized = Vec::with_capacity(images.len());
    for (index, (path, format)) in images.iter().enumerate() {
        let image = resize_image(backend, path, *format, &output_dir, &options)?;
        emit(ProcessEvent::ImageResized {
            index: index + 1,
            image: image.clone(),
        });
        resized.push(image);
    }

    Ok(ProcessResult {
        output_dir,
        resized,
        skipped,
    })
}
