// SPDX-License-Identifier: GPL-3.0-only

//! Session configuration
//!
//! Serializable settings for one photobooth session. Out-of-range
//! values are clamped rather than rejected, so a stale or hand-edited
//! config never prevents a session from starting.

use crate::constants::session::{
    DEFAULT_PHOTO_COUNT, DEFAULT_TIMER_SECONDS, MAX_PHOTO_COUNT, MIN_PHOTO_COUNT,
};
use crate::effects::EffectKind;
use crate::pipeline::{EncodingFormat, EncodingQuality};
use crate::shapes::FrameShape;
use crate::source::Facing;
use serde::{Deserialize, Serialize};

/// Settings for one capture session
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SessionConfig {
    /// Number of photos to capture (clamped to 1..=12)
    pub photo_count: u32,
    /// Countdown length in seconds; 0 captures immediately
    pub timer_seconds: u32,
    /// Pixel effect applied to every capture
    pub effect: EffectKind,
    /// Frame shape applied after the effect
    pub shape: FrameShape,
    /// Which camera to acquire
    pub facing: Facing,
    /// Photo encoding format
    pub format: EncodingFormat,
    /// JPEG quality tier; ignored for PNG
    pub quality: EncodingQuality,
    /// Fixed seed for the particle effect; `None` seeds from entropy
    pub particle_seed: Option<u64>,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            photo_count: DEFAULT_PHOTO_COUNT,
            timer_seconds: DEFAULT_TIMER_SECONDS,
            effect: EffectKind::default(),
            shape: FrameShape::default(),
            facing: Facing::default(),
            format: EncodingFormat::default(),
            quality: EncodingQuality::default(),
            particle_seed: None,
        }
    }
}

impl SessionConfig {
    /// Return a copy with all fields forced into their valid ranges
    pub fn clamped(mut self) -> Self {
        self.photo_count = self.photo_count.clamp(MIN_PHOTO_COUNT, MAX_PHOTO_COUNT);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = SessionConfig::default();
        assert_eq!(config.photo_count, 4);
        assert_eq!(config.timer_seconds, 3);
        assert_eq!(config.effect, EffectKind::None);
        assert_eq!(config.shape, FrameShape::None);
        assert_eq!(config.format, EncodingFormat::Jpeg);
    }

    #[test]
    fn test_clamp_photo_count() {
        let low = SessionConfig {
            photo_count: 0,
            ..Default::default()
        }
        .clamped();
        assert_eq!(low.photo_count, 1);

        let high = SessionConfig {
            photo_count: 99,
            ..Default::default()
        }
        .clamped();
        assert_eq!(high.photo_count, 12);
    }

    #[test]
    fn test_serde_roundtrip() {
        let config = SessionConfig {
            photo_count: 6,
            timer_seconds: 5,
            effect: EffectKind::Cyberpunk,
            shape: FrameShape::Heart,
            facing: Facing::Back,
            format: EncodingFormat::Png,
            quality: EncodingQuality::Maximum,
            particle_seed: Some(7),
        };
        let json = serde_json::to_string(&config).unwrap();
        let back: SessionConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(back, config);
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let config: SessionConfig =
            serde_json::from_str(r#"{"photo_count": 2, "effect": "grayscale"}"#).unwrap();
        assert_eq!(config.photo_count, 2);
        assert_eq!(config.effect, EffectKind::Grayscale);
        assert_eq!(config.timer_seconds, 3);
        assert_eq!(config.shape, FrameShape::None);
    }
}
