//! Rotate command implementation

use std::path::Path;
use std::process::ExitCode;

use super::{EXIT_ERROR, EXIT_INVALID_ARGS, EXIT_SUCCESS};
use crate::codec::{ImageCodec, PngCodec};
use crate::config::{self, CliOverrides, JobFile};
use crate::processor;

/// Execute the rotate command: merge configuration, load the strip, run the
/// transform and write the destination. The destination file is only
/// written after the whole transform has succeeded.
pub fn run_rotate(config_path: Option<&Path>, cli: CliOverrides) -> ExitCode {
    let file = match config_path {
        Some(path) => match JobFile::load(path) {
            Ok(file) => Some(file),
            Err(e) => {
                eprintln!("Error: {}", e);
                return ExitCode::from(EXIT_ERROR);
            }
        },
        None => None,
    };

    let resolved = match config::resolve(file, &cli) {
        Ok(resolved) => resolved,
        Err(e) => {
            eprintln!("Error: {}", e);
            return ExitCode::from(EXIT_INVALID_ARGS);
        }
    };

    let codec = PngCodec;
    let strip = match codec.load(&resolved.source) {
        Ok(strip) => strip,
        Err(e) => {
            eprintln!("Error: {}", e);
            return ExitCode::from(EXIT_ERROR);
        }
    };

    let destination = match processor::process(&strip, &resolved.job) {
        Ok(destination) => destination,
        Err(e) => {
            eprintln!("Error: {}", e);
            return ExitCode::from(EXIT_ERROR);
        }
    };

    if let Err(e) = codec.save(&resolved.dest, &destination) {
        eprintln!("Error: {}", e);
        return ExitCode::from(EXIT_ERROR);
    }

    // process() already validated, so this only reports
    let cells = processor::destination_dims(strip.width(), strip.height(), &resolved.job)
        .map(|(_, _, slots)| slots)
        .unwrap_or(0);
    println!(
        "Rotated: {} ({}x{}, {} cells)",
        resolved.dest.display(),
        destination.width(),
        destination.height(),
        cells
    );

    ExitCode::from(EXIT_SUCCESS)
}
