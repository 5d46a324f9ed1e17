//! Read-only view of the game for renderers and tooling

use glam::Vec2;
use serde::Serialize;

use super::collision::Rect;
use super::state::GameState;
use super::trail::TrailSample;

/// A ball with its fading trail
#[derive(Debug, Clone, Serialize)]
pub struct BallView {
    pub position: Vec2,
    pub radius: f32,
    /// Oldest sample first
    pub trail: Vec<TrailSample>,
}

/// One grid cell; inactive blocks are kept so indices stay stable
#[derive(Debug, Clone, Serialize)]
pub struct BlockView {
    pub rect: Rect,
    pub active: bool,
}

/// A falling power-up
#[derive(Debug, Clone, Serialize)]
pub struct PowerUpView {
    pub position: Vec2,
    pub radius: f32,
}

/// Everything a frame needs to draw, copied out of [`GameState`]
#[derive(Debug, Clone, Serialize)]
pub struct Snapshot {
    pub balls: Vec<BallView>,
    pub paddle: Rect,
    pub blocks: Vec<BlockView>,
    pub power_ups: Vec<PowerUpView>,
    pub score: u64,
    pub lives: u8,
    pub level: u32,
    pub active_balls: usize,
    pub paused: bool,
    pub game_over: bool,
}

impl GameState {
    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            balls: self
                .balls
                .iter_active()
                .map(|b| BallView {
                    position: b.position,
                    radius: b.radius,
                    trail: b.trail.iter_oldest_first().copied().collect(),
                })
                .collect(),
            paddle: self.paddle.rect,
            blocks: self
                .blocks
                .iter()
                .map(|b| BlockView {
                    rect: b.rect,
                    active: b.active,
                })
                .collect(),
            power_ups: self
                .power_ups
                .iter_active()
                .map(|p| PowerUpView {
                    position: p.position,
                    radius: p.radius,
                })
                .collect(),
            score: self.score,
            lives: self.lives,
            level: self.level,
            active_balls: self.active_ball_count(),
            paused: self.is_paused(),
            game_over: self.is_game_over(),
        }
    }
}
