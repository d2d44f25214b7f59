// SPDX-License-Identifier: GPL-3.0-only

//! Pixel effect engine
//!
//! Effects are per-pixel color transforms applied to a captured frame
//! before the shape overlay. Every filter except [`EffectKind::Particle`]
//! is a pure function of the input pixels: no neighbour reads, output
//! channels clamped to `[0, 255]`, frame dimensions unchanged. The
//! particle overlay draws randomized specks and is therefore only
//! reproducible when the engine is seeded.

pub mod filters;
pub mod particle;

use crate::frame::Frame;
use rand::rngs::StdRng;
use rand::SeedableRng;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Available pixel effects
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, clap::ValueEnum,
)]
#[serde(rename_all = "kebab-case")]
pub enum EffectKind {
    /// No effect (identity)
    #[default]
    None,
    /// Sepia tone via the classic vintage color matrix
    Vintage,
    /// Channel-mean grayscale
    Grayscale,
    /// Warm tint (red/green lift)
    Warm,
    /// Cool tint (blue lift)
    Cool,
    /// Saturation boost with highlight glow
    Neon,
    /// Scan-line attenuation with a blue shift
    Hologram,
    /// High-contrast magenta/blue grade with shadow tint
    Cyberpunk,
    /// Randomized bright specks (seedable, non-deterministic otherwise)
    Particle,
    /// Faded luminance-based sepia
    Retro,
}

impl EffectKind {
    /// All effect variants for UI/CLI iteration
    pub const ALL: [EffectKind; 10] = [
        EffectKind::None,
        EffectKind::Vintage,
        EffectKind::Grayscale,
        EffectKind::Warm,
        EffectKind::Cool,
        EffectKind::Neon,
        EffectKind::Hologram,
        EffectKind::Cyberpunk,
        EffectKind::Particle,
        EffectKind::Retro,
    ];

    /// Get display name for the effect
    pub fn display_name(&self) -> &'static str {
        match self {
            EffectKind::None => "None",
            EffectKind::Vintage => "Vintage",
            EffectKind::Grayscale => "Grayscale",
            EffectKind::Warm => "Warm",
            EffectKind::Cool => "Cool",
            EffectKind::Neon => "Neon",
            EffectKind::Hologram => "Hologram",
            EffectKind::Cyberpunk => "Cyberpunk",
            EffectKind::Particle => "Particle",
            EffectKind::Retro => "Retro",
        }
    }

    /// True for effects that are a pure function of the input pixels.
    /// Only the particle overlay draws from a random source.
    pub fn is_deterministic(&self) -> bool {
        !matches!(self, EffectKind::Particle)
    }
}

impl std::fmt::Display for EffectKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

/// Applies effects to frames, owning the random source for the
/// particle overlay
pub struct EffectEngine {
    rng: StdRng,
}

impl EffectEngine {
    /// Create an engine with an entropy-seeded random source
    pub fn new() -> Self {
        Self {
            rng: StdRng::from_entropy(),
        }
    }

    /// Create an engine with a fixed seed, making the particle effect
    /// reproducible
    pub fn with_seed(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Apply an effect to the frame in place
    pub fn apply(&mut self, frame: &mut Frame, kind: EffectKind) {
        debug!(
            effect = %kind,
            width = frame.width(),
            height = frame.height(),
            "Applying effect"
        );
        match kind {
            EffectKind::None => {}
            EffectKind::Vintage => filters::vintage(frame),
            EffectKind::Grayscale => filters::grayscale(frame),
            EffectKind::Warm => filters::warm(frame),
            EffectKind::Cool => filters::cool(frame),
            EffectKind::Neon => filters::neon(frame),
            EffectKind::Hologram => filters::hologram(frame),
            EffectKind::Cyberpunk => filters::cyberpunk(frame),
            EffectKind::Particle => particle::apply(frame, &mut self.rng),
            EffectKind::Retro => filters::retro(frame),
        }
    }
}

impl Default for EffectEngine {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_none_is_identity() {
        let mut frame = Frame::filled(8, 8, [12, 34, 56, 255]);
        let original = frame.clone();
        EffectEngine::with_seed(0).apply(&mut frame, EffectKind::None);
        assert_eq!(frame, original);
    }

    #[test]
    fn test_all_effects_preserve_dimensions() {
        for kind in EffectKind::ALL {
            let mut frame = Frame::filled(6, 5, [100, 150, 200, 255]);
            EffectEngine::with_seed(7).apply(&mut frame, kind);
            assert_eq!(frame.width(), 6, "{kind} changed width");
            assert_eq!(frame.height(), 5, "{kind} changed height");
        }
    }

    #[test]
    fn test_only_particle_is_nondeterministic() {
        for kind in EffectKind::ALL {
            assert_eq!(kind.is_deterministic(), kind != EffectKind::Particle);
        }
    }
}
