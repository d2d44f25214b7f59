// SPDX-License-Identifier: GPL-3.0-only

use clap::{Parser, Subcommand};
use photobooth::constants::synthetic::{DEFAULT_HEIGHT, DEFAULT_WIDTH};
use photobooth::{EffectKind, EncodingFormat, EncodingQuality, Facing, FrameShape, SessionConfig};
use std::path::PathBuf;

mod cli;

#[derive(Parser)]
#[command(name = "photobooth")]
#[command(about = "Countdown photobooth capture engine")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run a capture session with the synthetic test camera
    Run {
        /// Number of photos to capture (1-12)
        #[arg(short, long, default_value = "4")]
        photos: u32,

        /// Countdown seconds before each capture; 0 captures immediately
        #[arg(short, long, default_value = "3", allow_negative_numbers = true)]
        timer: i64,

        /// Pixel effect to apply
        #[arg(short, long, default_value = "none")]
        effect: EffectKind,

        /// Frame shape to apply
        #[arg(short, long, default_value = "none")]
        shape: FrameShape,

        /// Camera facing
        #[arg(long, default_value = "front")]
        facing: Facing,

        /// Photo format
        #[arg(short, long, default_value = "jpeg")]
        format: EncodingFormat,

        /// JPEG quality tier
        #[arg(short, long, default_value = "high")]
        quality: EncodingQuality,

        /// Seed for the particle effect (reproducible output)
        #[arg(long)]
        seed: Option<u64>,

        /// Synthetic camera width
        #[arg(long, default_value_t = DEFAULT_WIDTH)]
        width: u32,

        /// Synthetic camera height
        #[arg(long, default_value_t = DEFAULT_HEIGHT)]
        height: u32,

        /// Output directory (default: ./photos/DATE)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// List available effects and shapes
    Effects,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize logging
    // Set RUST_LOG environment variable to control log level
    // Examples: RUST_LOG=debug, RUST_LOG=photobooth=debug, RUST_LOG=info
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .with_target(true)
        .with_level(true)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Run {
            photos,
            timer,
            effect,
            shape,
            facing,
            format,
            quality,
            seed,
            width,
            height,
            output,
        } => {
            let config = SessionConfig {
                photo_count: photos,
                // A negative timer means no countdown
                timer_seconds: timer.max(0) as u32,
                effect,
                shape,
                facing,
                format,
                quality,
                particle_seed: seed,
            };
            cli::run_session(config, width, height, output).await
        }
        Commands::Effects => cli::list_effects(),
    }
}
