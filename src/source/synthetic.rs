// SPDX-License-Identifier: GPL-3.0-only

//! Synthetic test-pattern source
//!
//! Generates frames without camera hardware, for the CLI demo and for
//! tests. Each frame is a color gradient with a moving bar so that
//! consecutive captures are visibly distinct; the back facing inverts
//! the gradient so camera switching is observable too.

use super::{CameraAdapter, Facing, FrameSource, SourceResult};
use crate::frame::Frame;
use tracing::info;

/// Adapter producing [`SyntheticSource`] streams
pub struct SyntheticAdapter {
    width: u32,
    height: u32,
}

impl SyntheticAdapter {
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }
}

impl Default for SyntheticAdapter {
    fn default() -> Self {
        Self::new(
            crate::constants::synthetic::DEFAULT_WIDTH,
            crate::constants::synthetic::DEFAULT_HEIGHT,
        )
    }
}

impl CameraAdapter for SyntheticAdapter {
    fn acquire(&self, facing: Facing) -> SourceResult<Box<dyn FrameSource>> {
        info!(
            %facing,
            width = self.width,
            height = self.height,
            "Starting synthetic source"
        );
        Ok(Box::new(SyntheticSource {
            width: self.width,
            height: self.height,
            facing,
            frame_index: 0,
        }))
    }
}

/// Test-pattern stream
pub struct SyntheticSource {
    width: u32,
    height: u32,
    facing: Facing,
    frame_index: u64,
}

impl FrameSource for SyntheticSource {
    fn current_frame(&mut self) -> SourceResult<Frame> {
        let mut frame = Frame::new(self.width, self.height);
        let bar_x = if self.width > 0 {
            (self.frame_index * 37) % self.width as u64
        } else {
            0
        };

        for y in 0..self.height {
            for x in 0..self.width {
                let gx = (x as u64 * 255 / self.width.max(1) as u64) as u8;
                let gy = (y as u64 * 255 / self.height.max(1) as u64) as u8;
                let mut px = match self.facing {
                    Facing::Front => [gx, gy, 128, 255],
                    Facing::Back => [255 - gx, 128, gy, 255],
                };
                if x as u64 == bar_x {
                    px = [255, 255, 255, 255];
                }
                frame.set_pixel(x, y, px);
            }
        }

        self.frame_index += 1;
        Ok(frame)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_frames_are_distinct() {
        let adapter = SyntheticAdapter::new(64, 48);
        let mut source = adapter.acquire(Facing::Front).unwrap();
        let a = source.current_frame().unwrap();
        let b = source.current_frame().unwrap();
        assert_eq!(a.width(), 64);
        assert_eq!(a.height(), 48);
        assert_ne!(a, b);
    }

    #[test]
    fn test_facing_changes_pattern() {
        let adapter = SyntheticAdapter::new(32, 32);
        let front = adapter
            .acquire(Facing::Front)
            .unwrap()
            .current_frame()
            .unwrap();
        let back = adapter
            .acquire(Facing::Back)
            .unwrap()
            .current_frame()
            .unwrap();
        assert_ne!(front, back);
    }
}
