use clap::Parser;
use orient_resize::{config, output, process};
use std::path::PathBuf;
use std::process::ExitCode;

#[derive(Parser)]
#[command(name = "orient-resize")]
#[command(about = "Resize every image in a folder to 1024px, upright")]
#[command(long_about = "\
Resize every image in a folder to 1024px, upright

Each image directly inside FOLDER is scaled so its longer stored edge is
1024 pixels, has its EXIF orientation applied to the pixels, and is written
to FOLDER/Resized/ under the same base name.

  photos/
  ├── beach.jpg        → Resized/beach.jpg
  ├── IMG_0042.JPG     → Resized/IMG_0042.jpg   (rotation applied)
  ├── scan.tiff        → Resized/scan.png
  ├── logo.png         → Resized/logo.png
  └── notes.txt          (skipped)

PNG, TIFF and GIF sources are written as PNG; everything else as JPEG.
The first image that fails to load, render or save stops the run.")]
#[command(version)]
struct Cli {
    /// Folder containing the images to resize
    folder: PathBuf,
}

fn main() -> ExitCode {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => {
            e.print().ok();
            // --help and --version land here too
            return if e.use_stderr() {
                ExitCode::FAILURE
            } else {
                ExitCode::SUCCESS
            };
        }
    };

    let config = config::ResizeConfig::default();
    let (tx, rx) = std::sync::mpsc::channel();
    let printer = std::thread::spawn(move || {
        for event in rx {
            output::print_process_event(&event);
        }
    });
    let result = process::process(&cli.folder, &config, Some(tx));
    printer.join().ok();

    match result {
        Ok(result) => {
            output::print_summary(&result);
            ExitCode::SUCCESS
        }
        Err(err) => {
            output::print_error(&err);
            ExitCode::FAILURE
        }
    }
}
