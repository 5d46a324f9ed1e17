//! Ball trail ring buffer
//!
//! Each ball remembers its last [`TRAIL_LENGTH`] positions. Every tick the
//! newest sample is written at full opacity and all live samples fade and
//! shrink linearly, so a slot reaches zero alpha exactly when the ring comes
//! back around to overwrite it.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::consts::TRAIL_LENGTH;

/// Smallest size a fading sample shrinks to
pub const MIN_TRAIL_SIZE: f32 = 1.0;

/// One remembered ball position
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TrailSample {
    pub position: Vec2,
    pub alpha: f32,
    pub size: f32,
}

impl TrailSample {
    /// Quadratic fade used when drawing
    #[inline]
    pub fn eased_alpha(&self) -> f32 {
        self.alpha * self.alpha
    }

    #[inline]
    pub fn is_visible(&self) -> bool {
        self.alpha > 0.0
    }
}

/// Fixed-size fading trail
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Trail {
    samples: [TrailSample; TRAIL_LENGTH],
    /// Slot the next sample is written to
    index: usize,
}

impl Trail {
    /// Empty (fully transparent) trail parked at `position`
    pub fn new(position: Vec2, radius: f32) -> Self {
        Self {
            samples: [TrailSample {
                position,
                alpha: 0.0,
                size: radius,
            }; TRAIL_LENGTH],
            index: 0,
        }
    }

    /// Forget every sample
    pub fn reset(&mut self, position: Vec2, radius: f32) {
        *self = Self::new(position, radius);
    }

    /// Record the ball's current position and fade everything one step
    pub fn advance(&mut self, position: Vec2, radius: f32) {
        self.samples[self.index] = TrailSample {
            position,
            alpha: 1.0,
            size: radius,
        };
        self.index = (self.index + 1) % TRAIL_LENGTH;

        let alpha_step = 1.0 / TRAIL_LENGTH as f32;
        let size_step = radius / TRAIL_LENGTH as f32;
        for sample in self.samples.iter_mut().filter(|s| s.alpha > 0.0) {
            sample.alpha = (sample.alpha - alpha_step).max(0.0);
            sample.size = (sample.size - size_step).max(MIN_TRAIL_SIZE);
        }
    }

    /// Samples in slot order
    pub fn samples(&self) -> &[TrailSample; TRAIL_LENGTH] {
        &self.samples
    }

    pub fn write_index(&self) -> usize {
        self.index
    }

    /// Samples from oldest to newest (draw order)
    pub fn iter_oldest_first(&self) -> impl Iterator<Item = &TrailSample> {
        (0..TRAIL_LENGTH).map(move |i| &self.samples[(self.index + i) % TRAIL_LENGTH])
    }
}
