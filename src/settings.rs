use std::path::PathBuf;

/// Fixed inputs for one generation run.
///
/// Built once at process start and passed by reference; nothing
/// mutates it afterwards.
#[derive(Debug, Clone)]
pub struct Settings {
    /// Source image to crop from.
    pub source: PathBuf,
    /// Directory the splash screens are written into.
    pub destination: PathBuf,
}

/// Default source image path, relative to the working directory.
pub const DEFAULT_SOURCE: &str = "splash.png";

/// Default destination directory for generated splash screens.
pub const DEFAULT_DESTINATION: &str = "resources/launch_screens";

impl Default for Settings {
    fn default() -> Self {
        Settings {
            source: PathBuf::from(DEFAULT_SOURCE),
            destination: PathBuf::from(DEFAULT_DESTINATION),
        }
    }
}
