//! Game state and core simulation types
//!
//! All mutable gameplay data lives in [`GameState`]. Renderers borrow it
//! between ticks; only [`tick`](super::tick) and the level/reset helpers
//! below mutate it.

use glam::Vec2;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::collision::Rect;
use super::pool::{Pool, Slot};
use super::trail::Trail;
use crate::consts::*;
use crate::error::SimError;
use crate::settings::ResizePolicy;
use crate::{rotate_degrees, scale};

/// Current phase of gameplay
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// Active gameplay
    Playing,
    /// Game is paused
    Paused,
    /// Out of lives; only a restart leaves this phase
    GameOver,
}

/// A validated screen size in pixels
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Screen {
    width: i32,
    height: i32,
}

impl Screen {
    /// Reject zero or negative dimensions
    pub fn new(width: i32, height: i32) -> Result<Self, SimError> {
        if width <= 0 || height <= 0 {
            return Err(SimError::InvalidScreen { width, height });
        }
        Ok(Self { width, height })
    }

    /// The 800x600 design resolution
    pub fn base() -> Self {
        Self {
            width: BASE_WIDTH as i32,
            height: BASE_HEIGHT as i32,
        }
    }

    #[inline]
    pub fn width(&self) -> f32 {
        self.width as f32
    }

    #[inline]
    pub fn height(&self) -> f32 {
        self.height as f32
    }

    #[inline]
    pub fn center(&self) -> Vec2 {
        Vec2::new(self.width() / 2.0, self.height() / 2.0)
    }

    /// Scale a horizontal design value to this screen
    #[inline]
    pub fn scale_x(&self, value: f32) -> f32 {
        scale(value, BASE_WIDTH, self.width())
    }

    /// Scale a vertical design value to this screen
    #[inline]
    pub fn scale_y(&self, value: f32) -> f32 {
        scale(value, BASE_HEIGHT, self.height())
    }
}

/// A ball entity
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Ball {
    pub position: Vec2,
    pub velocity: Vec2,
    pub radius: f32,
    pub active: bool,
    /// Fading trail for rendering
    pub trail: Trail,
}

impl Ball {
    /// An inactive ball parked at the screen centre
    pub fn parked(screen: &Screen) -> Self {
        let position = screen.center();
        let radius = screen.scale_x(BALL_RADIUS);
        Self {
            position,
            velocity: Vec2::ZERO,
            radius,
            active: false,
            trail: Trail::new(position, radius),
        }
    }

    /// Clear trail (on respawn/duplication)
    pub fn reset_trail(&mut self) {
        self.trail.reset(self.position, self.radius);
    }
}

impl Slot for Ball {
    fn is_active(&self) -> bool {
        self.active
    }

    fn set_active(&mut self, active: bool) {
        self.active = active;
    }
}

/// The player's paddle
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Paddle {
    pub rect: Rect,
    /// Horizontal distance moved per tick while a direction is held
    pub speed: f32,
    pub active: bool,
}

impl Paddle {
    /// Paddle centred near the bottom of the screen
    pub fn new(screen: &Screen) -> Self {
        let width = screen.scale_x(PADDLE_WIDTH);
        let height = screen.scale_y(PADDLE_HEIGHT);
        Self {
            rect: Rect::new(
                screen.width() / 2.0 - width / 2.0,
                screen.height() - screen.scale_y(PADDLE_BOTTOM_OFFSET),
                width,
                height,
            ),
            speed: screen.scale_x(PADDLE_SPEED),
            active: true,
        }
    }

    /// Apply held directions and keep the paddle on screen
    pub fn steer(&mut self, left: bool, right: bool, screen_width: f32) {
        if left {
            self.rect.x -= self.speed;
        }
        if right {
            self.rect.x += self.speed;
        }
        self.clamp_to(screen_width);
    }

    pub fn clamp_to(&mut self, screen_width: f32) {
        let max_x = (screen_width - self.rect.width).max(0.0);
        self.rect.x = self.rect.x.clamp(0.0, max_x);
    }
}

/// A destructible block
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Block {
    pub rect: Rect,
    pub active: bool,
}

impl Slot for Block {
    fn is_active(&self) -> bool {
        self.active
    }

    fn set_active(&mut self, active: bool) {
        self.active = active;
    }
}

/// A falling pickup that doubles the balls when caught
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PowerUp {
    pub position: Vec2,
    pub velocity: Vec2,
    pub radius: f32,
    pub active: bool,
}

impl PowerUp {
    fn parked() -> Self {
        Self {
            position: Vec2::ZERO,
            velocity: Vec2::ZERO,
            radius: 0.0,
            active: false,
        }
    }
}

impl Slot for PowerUp {
    fn is_active(&self) -> bool {
        self.active
    }

    fn set_active(&mut self, active: bool) {
        self.active = active;
    }
}

/// Complete game state
#[derive(Debug, Clone)]
pub struct GameState {
    pub screen: Screen,
    pub score: u64,
    pub lives: u8,
    pub phase: GamePhase,
    /// Current level (1-based), incremented on every clear
    pub level: u32,
    /// Simulation tick counter (only advances while playing)
    pub time_ticks: u64,
    pub paddle: Paddle,
    pub balls: Pool<Ball>,
    pub blocks: Pool<Block>,
    pub power_ups: Pool<PowerUp>,
    /// Drop chance for power-ups is zero when disabled (single-ball variant)
    pub power_ups_enabled: bool,
    pub resize_policy: ResizePolicy,
    pub rng: Pcg32,
}

impl GameState {
    /// Create a new game seeded for reproducibility
    pub fn new(screen: Screen, seed: u64) -> Self {
        Self::with_rng(screen, Pcg32::seed_from_u64(seed), ResizePolicy::default())
    }

    /// Create a new game with an injected random source
    pub fn with_rng(screen: Screen, rng: Pcg32, resize_policy: ResizePolicy) -> Self {
        let mut state = Self {
            screen,
            score: 0,
            lives: STARTING_LIVES,
            phase: GamePhase::Playing,
            level: 1,
            time_ticks: 0,
            paddle: Paddle::new(&screen),
            balls: Pool::new(MAX_BALLS, |_| Ball::parked(&screen)),
            blocks: Pool::from_slots(Vec::new()),
            power_ups: Pool::new(MAX_POWER_UPS, |_| PowerUp::parked()),
            power_ups_enabled: true,
            resize_policy,
            rng,
        };
        state.init_level(screen);
        state
    }

    /// Full reset: fresh score and lives, then a new level
    pub fn init_level(&mut self, screen: Screen) {
        self.screen = screen;
        self.score = 0;
        self.lives = STARTING_LIVES;
        self.phase = GamePhase::Playing;
        self.level = 1;
        self.time_ticks = 0;
        self.regenerate_level();
        log::info!(
            "New game at {}x{} ({} blocks)",
            self.screen.width,
            self.screen.height,
            self.blocks.capacity()
        );
    }

    /// Rebuild blocks, ball and paddle; score and lives are untouched
    pub fn regenerate_level(&mut self) {
        self.blocks = build_block_grid(&self.screen, BLOCK_ROWS, BLOCK_COLS);
        self.paddle = Paddle::new(&self.screen);
        self.power_ups.deactivate_all();
        self.reset_ball();
    }

    /// Base serve velocity scaled to the current screen
    pub fn serve_velocity(&self) -> Vec2 {
        Vec2::new(
            self.screen.scale_x(BALL_SPEED),
            self.screen.scale_y(BALL_SPEED),
        )
    }

    /// Re-centre a single ball after a life is lost
    pub fn reset_ball(&mut self) {
        let velocity = self.serve_velocity();
        self.balls.deactivate_all();
        self.power_ups.deactivate_all();

        let mut ball = Ball::parked(&self.screen);
        ball.velocity = velocity;
        ball.active = true;
        self.balls[0] = ball;
    }

    /// Take a life after the last ball is lost. Returns true on game over.
    pub fn lose_life(&mut self) -> bool {
        self.lives = self.lives.saturating_sub(1);
        if self.lives == 0 {
            self.phase = GamePhase::GameOver;
            log::info!(
                "Game over: score {} on level {} after {} ticks",
                self.score,
                self.level,
                self.time_ticks
            );
            true
        } else {
            log::debug!("Life lost, {} remaining", self.lives);
            self.reset_ball();
            false
        }
    }

    /// Reward a cleared grid and start the next level
    pub fn complete_level(&mut self) {
        for ball in self.balls.iter_active_mut() {
            ball.velocity *= LEVEL_CLEAR_SPEEDUP;
        }
        self.score += LEVEL_CLEAR_BONUS;
        self.level += 1;
        log::info!(
            "Level cleared! Starting level {} (score {})",
            self.level,
            self.score
        );
        self.regenerate_level();
    }

    /// Place a power-up in the first free slot. Returns false when the pool is full.
    pub fn spawn_power_up(&mut self, position: Vec2) -> bool {
        let Some(slot) = self.power_ups.first_free() else {
            log::debug!("Power-up pool full, drop discarded");
            return false;
        };
        self.power_ups[slot] = PowerUp {
            position,
            velocity: Vec2::new(0.0, self.screen.scale_y(POWER_UP_FALL_SPEED)),
            radius: self.screen.scale_x(POWER_UP_RADIUS),
            active: true,
        };
        log::debug!("Power-up spawned in slot {slot} at {position}");
        true
    }

    /// Double the active balls (up to pool capacity), spreading the copies
    pub fn double_balls(&mut self) {
        let collected: Vec<Ball> = self.balls.iter_active().cloned().collect();
        if collected.is_empty() {
            return;
        }

        let to_fill = (collected.len() * 2).min(self.balls.capacity());
        self.balls.deactivate_all();

        for i in 0..to_fill {
            let mut ball = collected[i % collected.len()].clone();
            if i >= collected.len() {
                let angle = self
                    .rng
                    .random_range(-DUPLICATE_SPREAD_DEGREES..=DUPLICATE_SPREAD_DEGREES);
                ball.velocity = rotate_degrees(ball.velocity, angle);
            }
            ball.reset_trail();
            ball.active = true;
            self.balls[i] = ball;
        }
        log::debug!("Balls doubled: {} -> {}", collected.len(), to_fill);
    }

    /// React to a new screen size according to the resize policy
    pub fn on_resize(&mut self, screen: Screen) {
        if screen == self.screen {
            return;
        }
        log::info!(
            "Resize {}x{} -> {}x{} ({})",
            self.screen.width,
            self.screen.height,
            screen.width,
            screen.height,
            self.resize_policy.as_str()
        );
        match self.resize_policy {
            ResizePolicy::Reinit => self.init_level(screen),
            ResizePolicy::Rescale => self.rescale(screen),
        }
    }

    /// Re-derive every scaled quantity in place
    fn rescale(&mut self, screen: Screen) {
        let sx = screen.width() / self.screen.width();
        let sy = screen.height() / self.screen.height();
        let axes = Vec2::new(sx, sy);

        for ball in self.balls.iter_mut() {
            ball.position *= axes;
            ball.velocity *= axes;
            ball.radius *= sx;
            ball.reset_trail();
        }
        for block in self.blocks.iter_mut() {
            block.rect = block.rect.scaled(sx, sy);
        }
        for power_up in self.power_ups.iter_mut() {
            power_up.position *= axes;
            power_up.velocity *= axes;
            power_up.radius *= sx;
        }
        self.paddle.rect = self.paddle.rect.scaled(sx, sy);
        self.paddle.speed *= sx;
        self.screen = screen;
        self.paddle.clamp_to(screen.width());
    }

    /// Switch between the multi-ball game and the plain single-ball game
    pub fn set_power_ups_enabled(&mut self, enabled: bool) {
        self.power_ups_enabled = enabled;
        if !enabled {
            self.power_ups.deactivate_all();
        }
    }

    pub fn is_paused(&self) -> bool {
        self.phase == GamePhase::Paused
    }

    pub fn is_game_over(&self) -> bool {
        self.phase == GamePhase::GameOver
    }

    pub fn active_ball_count(&self) -> usize {
        self.balls.active_count()
    }

    pub fn active_block_count(&self) -> usize {
        self.blocks.active_count()
    }
}

/// Lay out a fresh, fully active block grid for `screen`
pub fn build_block_grid(screen: &Screen, rows: usize, cols: usize) -> Pool<Block> {
    let width = screen.scale_x(BLOCK_WIDTH);
    let height = screen.scale_y(BLOCK_HEIGHT);
    let gap_x = screen.scale_x(BLOCK_GAP_X);
    let gap_y = screen.scale_y(BLOCK_GAP_Y);
    let top = screen.scale_y(BLOCK_TOP_MARGIN);

    let mut blocks = Vec::with_capacity(rows * cols);
    for row in 0..rows {
        for col in 0..cols {
            blocks.push(Block {
                rect: Rect::new(
                    col as f32 * (width + gap_x) + gap_x,
                    row as f32 * (height + gap_y) + top,
                    width,
                    height,
                ),
                active: true,
            });
        }
    }
    Pool::from_slots(blocks)
}
