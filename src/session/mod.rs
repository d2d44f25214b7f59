// SPDX-License-Identifier: GPL-3.0-only

//! Capture session state machine
//!
//! Orchestrates one photobooth session:
//!
//! ```text
//! Idle → Countdown → Capturing → (AwaitingNext | Complete)
//! ```
//!
//! with reset back to `Idle` from any state. A single busy flag
//! debounces re-entrant capture triggers: a trigger received while a
//! countdown or capture is in flight is dropped, never queued, so the
//! store can never be double-appended. The countdown and photo encoding
//! are the only suspension points; all pixel work is synchronous.

pub mod countdown;
pub mod store;

pub use countdown::CountdownTicker;
pub use store::{CapturedPhoto, SessionStore};

use crate::config::SessionConfig;
use crate::effects::EffectKind;
use crate::errors::CaptureResult;
use crate::pipeline::PhotoPipeline;
use crate::shapes::FrameShape;
use crate::source::{CameraAdapter, FrameSource, SourceError};
use tracing::{debug, info, warn};

/// Session lifecycle states
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    /// No capture in progress
    Idle,
    /// Counting down to a capture
    Countdown { remaining: u32 },
    /// Acquiring and processing a frame
    Capturing,
    /// Photo stored, more captures remain
    AwaitingNext,
    /// All photos captured; terminal until reset
    Complete,
}

/// Events published to the external UI
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionEvent {
    /// Countdown progress; `remaining` counts down to 0
    CountdownTick { remaining: u32 },
    /// A photo was appended to the session
    PhotoCaptured { index: u32, total: u32 },
    /// The session reached its configured photo count
    SessionComplete,
    /// A trigger raced an in-flight capture and was dropped
    TriggerIgnored,
}

/// One photobooth session: configuration, state, store, and the
/// acquired camera source
pub struct CaptureSession {
    config: SessionConfig,
    state: SessionState,
    store: SessionStore,
    pipeline: PhotoPipeline,
    adapter: Box<dyn CameraAdapter>,
    source: Option<Box<dyn FrameSource>>,
    busy: bool,
}

impl CaptureSession {
    /// Create a session in `Idle` with no camera acquired. The config
    /// is clamped to valid bounds.
    pub fn new(config: SessionConfig, adapter: Box<dyn CameraAdapter>) -> Self {
        let config = config.clamped();
        let pipeline = PhotoPipeline::new(config.format, config.quality, config.particle_seed);
        Self {
            config,
            state: SessionState::Idle,
            store: SessionStore::new(),
            pipeline,
            adapter,
            source: None,
            busy: false,
        }
    }

    /// Start the session: clear any previous photos and acquire the
    /// camera for the configured facing
    pub fn start(&mut self) -> CaptureResult<()> {
        info!(
            photo_count = self.config.photo_count,
            timer_seconds = self.config.timer_seconds,
            effect = %self.config.effect,
            shape = %self.config.shape,
            facing = %self.config.facing,
            "Starting session"
        );
        self.store.clear();
        self.state = SessionState::Idle;
        self.busy = false;
        self.source = Some(self.adapter.acquire(self.config.facing)?);
        Ok(())
    }

    pub fn state(&self) -> SessionState {
        self.state
    }

    pub fn config(&self) -> &SessionConfig {
        &self.config
    }

    /// Photos captured so far, in capture order
    pub fn photos(&self) -> &[CapturedPhoto] {
        self.store.photos()
    }

    /// Owned snapshot of the session for display/export
    pub fn snapshot(&self) -> Vec<CapturedPhoto> {
        self.store.snapshot()
    }

    /// Switch the effect for future captures. Already-captured photos
    /// are immutable and keep their effect.
    pub fn select_effect(&mut self, effect: EffectKind) {
        debug!(%effect, "Effect selected");
        self.config.effect = effect;
    }

    /// Switch the shape overlay for future captures
    pub fn select_shape(&mut self, shape: FrameShape) {
        debug!(%shape, "Shape selected");
        self.config.shape = shape;
    }

    /// Capture trigger. Starts the countdown when a timer is
    /// configured, otherwise captures immediately. Dropped while a
    /// countdown or capture is in flight, and after completion.
    pub async fn trigger(&mut self) -> CaptureResult<Vec<SessionEvent>> {
        if self.busy {
            debug!(state = ?self.state, "Trigger ignored: capture in flight");
            return Ok(vec![SessionEvent::TriggerIgnored]);
        }
        if self.state == SessionState::Complete {
            debug!("Trigger ignored: session complete");
            return Ok(vec![SessionEvent::TriggerIgnored]);
        }
        if self.source.is_none() {
            return Err(SourceError::DeviceUnavailable("session not started".into()).into());
        }

        if self.config.timer_seconds > 0 {
            let remaining = self.config.timer_seconds;
            self.busy = true;
            self.state = SessionState::Countdown { remaining };
            info!(remaining, "Countdown started");
            return Ok(vec![SessionEvent::CountdownTick { remaining }]);
        }

        self.capture().await
    }

    /// Advance the countdown by one tick. Ticks arriving outside the
    /// countdown state are stale (for example after a reset) and are
    /// ignored.
    pub async fn tick(&mut self) -> CaptureResult<Vec<SessionEvent>> {
        let SessionState::Countdown { remaining } = self.state else {
            debug!(state = ?self.state, "Stale countdown tick ignored");
            return Ok(vec![]);
        };

        let remaining = remaining.saturating_sub(1);
        if remaining > 0 {
            self.state = SessionState::Countdown { remaining };
            return Ok(vec![SessionEvent::CountdownTick { remaining }]);
        }

        // Publish the final 0 tick, then capture
        let mut events = vec![SessionEvent::CountdownTick { remaining: 0 }];
        events.extend(self.capture().await?);
        Ok(events)
    }

    /// Stop-then-start camera switch. Device unavailability is
    /// recoverable: the session keeps its state and the user may switch
    /// again or reset.
    pub fn switch_facing(&mut self) -> CaptureResult<()> {
        self.config.facing = self.config.facing.toggled();
        info!(facing = %self.config.facing, "Switching camera");

        if let Some(mut source) = self.source.take() {
            source.release();
        }
        match self.adapter.acquire(self.config.facing) {
            Ok(source) => {
                self.source = Some(source);
                Ok(())
            }
            Err(e) => {
                warn!(error = %e, "Camera switch failed");
                Err(e.into())
            }
        }
    }

    /// Return to `Idle` from any state: clears the store, cancels any
    /// countdown, and releases the camera
    pub fn reset(&mut self) {
        info!(photos = self.store.count(), "Session reset");
        self.busy = false;
        self.state = SessionState::Idle;
        self.store.clear();
        if let Some(mut source) = self.source.take() {
            source.release();
        }
    }

    /// Acquire exactly one frame, run the photo pipeline, and append
    /// the result. A failure leaves the store unchanged and returns the
    /// session to `AwaitingNext`/`Idle` so the user can retry.
    async fn capture(&mut self) -> CaptureResult<Vec<SessionEvent>> {
        self.busy = true;
        self.state = SessionState::Capturing;

        let result = self.capture_inner().await;
        self.busy = false;

        match result {
            Ok(events) => Ok(events),
            Err(e) => {
                warn!(error = %e, "Capture attempt failed");
                self.state = if self.store.is_empty() {
                    SessionState::Idle
                } else {
                    SessionState::AwaitingNext
                };
                Err(e)
            }
        }
    }

    async fn capture_inner(&mut self) -> CaptureResult<Vec<SessionEvent>> {
        let source = self
            .source
            .as_mut()
            .ok_or_else(|| SourceError::DeviceUnavailable("session not started".into()))?;
        let frame = source.current_frame()?;

        let index = self.store.count() + 1;
        let photo = self
            .pipeline
            .process(frame, self.config.effect, self.config.shape, index)
            .await?;
        self.store.append(photo);

        let total = self.config.photo_count;
        info!(index, total, "Photo captured");

        let mut events = vec![SessionEvent::PhotoCaptured { index, total }];
        if self.store.count() >= total {
            self.state = SessionState::Complete;
            info!(photos = self.store.count(), "Session complete");
            events.push(SessionEvent::SessionComplete);
        } else {
            self.state = SessionState::AwaitingNext;
        }
        Ok(events)
    }
}
