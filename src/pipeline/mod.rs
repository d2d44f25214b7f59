// SPDX-License-Identifier: GPL-3.0-only

//! Photo capture pipeline
//!
//! Turns a raw frame into a finished [`CapturedPhoto`]:
//!
//! ```text
//! Camera Source → Effect → Shape Overlay → Encoding → Session Store
//! ```
//!
//! The effect always runs before the shape overlay, so borders and clip
//! paths are never recolored by the filter.

pub mod encoding;

pub use encoding::{EncodingFormat, EncodingQuality, PhotoEncoder};

use crate::effects::{EffectEngine, EffectKind};
use crate::errors::PhotoError;
use crate::frame::Frame;
use crate::session::store::CapturedPhoto;
use crate::shapes::{self, FrameShape};
use tracing::debug;

/// Complete frame-to-photo pipeline
pub struct PhotoPipeline {
    effects: EffectEngine,
    encoder: PhotoEncoder,
}

impl PhotoPipeline {
    /// Create a pipeline. A `particle_seed` makes the particle effect
    /// reproducible; pass `None` for entropy seeding.
    pub fn new(format: EncodingFormat, quality: EncodingQuality, particle_seed: Option<u64>) -> Self {
        let effects = match particle_seed {
            Some(seed) => EffectEngine::with_seed(seed),
            None => EffectEngine::new(),
        };
        Self {
            effects,
            encoder: PhotoEncoder::with_format(format, quality),
        }
    }

    pub fn encoder(&self) -> &PhotoEncoder {
        &self.encoder
    }

    /// Process one captured frame into a finished photo
    pub async fn process(
        &mut self,
        mut frame: Frame,
        effect: EffectKind,
        shape: FrameShape,
        index: u32,
    ) -> Result<CapturedPhoto, PhotoError> {
        debug!(index, %effect, %shape, "Processing captured frame");

        let (width, height) = (frame.width(), frame.height());
        self.effects.apply(&mut frame, effect);
        shapes::apply_shape(&mut frame, shape);

        let data = self.encoder.encode(frame).await?;
        Ok(CapturedPhoto {
            index,
            width,
            height,
            format: self.encoder.format(),
            data,
        })
    }
}

impl Default for PhotoPipeline {
    fn default() -> Self {
        Self::new(EncodingFormat::Jpeg, EncodingQuality::High, None)
    }
}
