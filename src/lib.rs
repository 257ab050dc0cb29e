//! Mobile splash screen generator.
//!
//! Crops a single source image into every launch screen variant the
//! selected platform expects and writes them under the destination
//! directory.

#![warn(missing_docs)]

pub mod crop;
pub mod display;
mod error;
mod platform;
mod settings;

use tokio::task::JoinSet;

pub use crate::error::Error;
pub use crate::platform::{Platform, SplashSpec, ANDROID_SPLASHES, IOS_SPLASHES};
pub use crate::settings::{Settings, DEFAULT_DESTINATION, DEFAULT_SOURCE};

/// Check the source image, then generate every splash for the platform.
pub async fn generate(settings: &Settings, platform: Platform) -> Result<(), Error> {
    check_source(settings)?;

    display::header(&format!("Generating splash screen for {}", platform));
    crop_all(settings, platform.splashes()).await
}

/// Verify the source image is present before any output is attempted.
fn check_source(settings: &Settings) -> Result<(), Error> {
    display::header("Checking splash");

    if settings.source.exists() {
        display::success(&format!("{} exists", settings.source.display()));
        Ok(())
    } else {
        Err(Error::MissingSource(settings.source.clone()))
    }
}

/// Crop every spec concurrently and wait for all of them to settle.
///
/// Each crop runs as an independent blocking task; a failing crop never
/// halts its siblings. The run only succeeds when every crop succeeded,
/// otherwise the failures are counted up into [`Error::Incomplete`].
async fn crop_all(settings: &Settings, specs: Vec<SplashSpec>) -> Result<(), Error> {
    let mut tasks = JoinSet::new();
    for spec in specs {
        let settings = settings.clone();
        tasks.spawn_blocking(move || (spec, crop::generate_splash(&settings, &spec)));
    }

    let total = tasks.len();
    let mut failed = 0;

    while let Some(joined) = tasks.join_next().await {
        match joined {
            Ok((spec, Ok(()))) => display::success(&format!("{} created", spec.name)),
            Ok((_, Err(err))) => {
                display::error(&err.to_string());
                failed += 1;
            }
            Err(err) => {
                display::error(&format!("crop task failed: {}", err));
                failed += 1;
            }
        }
    }

    if failed == 0 {
        Ok(())
    } else {
        Err(Error::Incomplete { failed, total })
    }
}
