use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;

use splashgen::{display, generate, Platform, Settings, DEFAULT_DESTINATION, DEFAULT_SOURCE};

/// Generate iOS and Android splash screens from a single source image.
#[derive(Debug, Parser)]
#[command(name = "splashgen")]
struct Args {
    /// Platform to generate for; both platforms when omitted
    #[arg(value_enum)]
    platform: Option<Platform>,

    /// Source image to crop from
    #[arg(short, long, default_value = DEFAULT_SOURCE)]
    source: PathBuf,

    /// Directory to write the splash screens into
    #[arg(short, long, default_value = DEFAULT_DESTINATION)]
    output: PathBuf,
}

#[tokio::main]
async fn main() -> ExitCode {
    let args = Args::parse();

    display::header("Checking arguments");
    let platform = match args.platform {
        Some(platform) => {
            display::success(&format!("Selected {}", platform));
            platform
        }
        None => {
            display::success("Selected all platforms");
            Platform::All
        }
    };

    let settings = Settings {
        source: args.source,
        destination: args.output,
    };

    match generate(&settings, platform).await {
        Ok(()) => {
            println!();
            ExitCode::SUCCESS
        }
        Err(err) => {
            display::error(&err.to_string());
            ExitCode::FAILURE
        }
    }
}
