// SPDX-License-Identifier: GPL-3.0-only

//! CLI commands for photobooth operations
//!
//! This module provides command-line functionality for:
//! - Listing available effects and shapes
//! - Running a complete capture session against the synthetic camera

use chrono::Local;
use photobooth::constants::timing::COUNTDOWN_TICK;
use photobooth::source::synthetic::SyntheticAdapter;
use photobooth::{
    CaptureSession, CountdownTicker, EffectKind, FrameShape, PhotoEncoder, SessionConfig,
    SessionEvent, SessionState,
};
use std::path::{Path, PathBuf};

/// List all available effects and shapes
pub fn list_effects() -> Result<(), Box<dyn std::error::Error>> {
    println!("Available effects:");
    println!();
    for effect in EffectKind::ALL {
        let note = if effect.is_deterministic() {
            ""
        } else {
            " (randomized)"
        };
        println!("  {}{}", effect.display_name(), note);
    }

    println!();
    println!("Available shapes:");
    println!();
    for shape in FrameShape::ALL {
        println!("  {}", shape.display_name());
    }

    Ok(())
}

/// Run a full capture session with the synthetic test-pattern camera
/// and save the resulting photos
pub async fn run_session(
    config: SessionConfig,
    width: u32,
    height: u32,
    output: Option<PathBuf>,
) -> Result<(), Box<dyn std::error::Error>> {
    let adapter = SyntheticAdapter::new(width, height);
    let mut session = CaptureSession::new(config, Box::new(adapter));
    session.start()?;

    let config = session.config().clone();
    println!(
        "Capturing {} photo(s): effect {}, shape {}, {}s timer",
        config.photo_count, config.effect, config.shape, config.timer_seconds
    );

    while session.state() != SessionState::Complete {
        report(&session.trigger().await?);

        if matches!(session.state(), SessionState::Countdown { .. }) {
            let mut ticker = CountdownTicker::start(COUNTDOWN_TICK);
            while matches!(session.state(), SessionState::Countdown { .. }) {
                if ticker.tick().await.is_none() {
                    break;
                }
                report(&session.tick().await?);
            }
            ticker.cancel();
        }
    }

    let output_dir = output.unwrap_or_else(default_photo_dir);
    save_photos(&session, &output_dir).await?;
    Ok(())
}

fn report(events: &[SessionEvent]) {
    for event in events {
        match event {
            SessionEvent::CountdownTick { remaining } if *remaining > 0 => {
                println!("  {}...", remaining);
            }
            SessionEvent::CountdownTick { .. } => {}
            SessionEvent::PhotoCaptured { index, total } => {
                println!("  Photo {}/{} captured", index, total);
            }
            SessionEvent::SessionComplete => println!("Session complete"),
            SessionEvent::TriggerIgnored => println!("  Capture already in progress"),
        }
    }
}

async fn save_photos(
    session: &CaptureSession,
    output_dir: &Path,
) -> Result<(), Box<dyn std::error::Error>> {
    let config = session.config();
    let encoder = PhotoEncoder::with_format(config.format, config.quality);

    for photo in session.photos() {
        let path = encoder.save(&photo.data, output_dir, photo.index).await?;
        println!("Saved: {}", path.display());
    }
    Ok(())
}

fn default_photo_dir() -> PathBuf {
    let date = Local::now().format("%Y-%m-%d");
    PathBuf::from("photos").join(date.to_string())
}
