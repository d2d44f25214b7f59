// SPDX-License-Identifier: GPL-3.0-only

//! Photobooth capture engine
//!
//! A camera photobooth core: a countdown-driven capture session that
//! runs raster frames through a pixel effect, a frame shape overlay,
//! and an image encoder, collecting the results into an ordered
//! session store.
//!
//! The crate is UI-agnostic. A frontend drives [`CaptureSession`] with
//! triggers and countdown ticks and renders the [`SessionEvent`]s it
//! emits; camera hardware sits behind the [`source::CameraAdapter`]
//! trait.

pub mod config;
pub mod constants;
pub mod effects;
pub mod errors;
pub mod frame;
pub mod pipeline;
pub mod session;
pub mod shapes;
pub mod source;

pub use config::SessionConfig;
pub use effects::{EffectEngine, EffectKind};
pub use errors::{CaptureError, CaptureResult, PhotoError};
pub use frame::Frame;
pub use pipeline::{EncodingFormat, EncodingQuality, PhotoEncoder, PhotoPipeline};
pub use session::{
    CaptureSession, CapturedPhoto, CountdownTicker, SessionEvent, SessionState, SessionStore,
};
pub use shapes::FrameShape;
pub use source::{CameraAdapter, Facing, FrameSource, SourceError};
