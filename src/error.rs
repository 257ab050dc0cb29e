use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Everything that can go wrong during a generation run.
#[derive(Debug, Error)]
pub enum Error {
    /// The source image is absent; nothing is generated.
    #[error("{} does not exist in the root folder", .0.display())]
    MissingSource(PathBuf),

    /// The destination directory could not be created.
    #[error("could not create {}: {source}", .path.display())]
    CreateDir {
        /// Directory that could not be created.
        path: PathBuf,
        /// Underlying filesystem error.
        #[source]
        source: io::Error,
    },

    /// Cropping or writing a single splash screen failed.
    #[error("could not crop {name}: {source}")]
    Crop {
        /// File name of the failed splash screen.
        name: &'static str,
        /// Underlying image error.
        #[source]
        source: image::ImageError,
    },

    /// At least one crop in the run failed.
    #[error("{failed} of {total} splash screens failed")]
    Incomplete {
        /// Number of crops that failed.
        failed: usize,
        /// Number of crops attempted.
        total: usize,
    },
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_missing_source_names_the_path() {
        let err = Error::MissingSource(PathBuf::from("splash.png"));
        assert_eq!(
            err.to_string(),
            "splash.png does not exist in the root folder"
        );
    }

    #[test]
    fn test_incomplete_reports_counts() {
        let err = Error::Incomplete {
            failed: 3,
            total: 17,
        };
        assert_eq!(err.to_string(), "3 of 17 splash screens failed");
    }
}
