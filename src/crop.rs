//! Cropping a single splash screen out of the source image.

use std::fs::create_dir_all;
use std::path::Path;

use image::imageops::FilterType;
use image::ImageFormat::Png;

use crate::error::Error;
use crate::platform::SplashSpec;
use crate::settings::Settings;

/// Crop the source image to one spec and write it as a PNG.
///
/// The destination is `<settings.destination>/<spec.name>`; any missing
/// directories are created first. Re-running overwrites the same file.
pub fn generate_splash(settings: &Settings, spec: &SplashSpec) -> Result<(), Error> {
    let destination = settings.destination.join(spec.name);

    if let Some(dir) = destination.parent() {
        ensure_dir(dir)?;
    }

    let source = image::open(&settings.source).map_err(|source| Error::Crop {
        name: spec.name,
        source,
    })?;

    // Cover semantics: scale to fill the target box, then crop the
    // centre to exactly width x height.
    let cropped = source.resize_to_fill(spec.width, spec.height, FilterType::Lanczos3);

    cropped
        .save_with_format(&destination, Png)
        .map_err(|source| Error::Crop {
            name: spec.name,
            source,
        })
}

/// Create a directory and any missing parents; a no-op if present.
fn ensure_dir(dir: &Path) -> Result<(), Error> {
    create_dir_all(dir).map_err(|source| Error::CreateDir {
        path: dir.to_path_buf(),
        source,
    })
}
