//! Fixed-step simulation tick
//!
//! One call advances the game by exactly one frame. Velocities are in pixels
//! per tick, so there is no delta time anywhere in here.

use rand::Rng;

use super::collision::circle_rect_overlap;
use super::state::{GamePhase, GameState};
use crate::consts::*;

/// Input sampled once per tick
#[derive(Debug, Clone, Copy, Default)]
pub struct TickInput {
    /// Toggle between playing and paused
    pub pause_toggle: bool,
    /// Start a fresh game
    pub restart: bool,
    /// Hand control back to the launcher
    pub menu_exit: bool,
    pub move_left: bool,
    pub move_right: bool,
    /// Idle/demo mode - the paddle steers itself
    pub idle_mode: bool,
}

/// What the caller should do after a tick
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickOutcome {
    Continue,
    ExitToMenu,
}

/// Advance the game state by one fixed step
pub fn tick(state: &mut GameState, input: &TickInput) -> TickOutcome {
    if input.pause_toggle {
        match state.phase {
            GamePhase::Playing => state.phase = GamePhase::Paused,
            GamePhase::Paused => state.phase = GamePhase::Playing,
            GamePhase::GameOver => {}
        }
    }

    if input.restart {
        log::info!("Restarting");
        let screen = state.screen;
        state.init_level(screen);
    }

    if input.menu_exit {
        return TickOutcome::ExitToMenu;
    }

    // Don't tick if paused or game over
    if state.phase != GamePhase::Playing {
        return TickOutcome::Continue;
    }

    state.time_ticks += 1;

    let (left, right) = if input.idle_mode {
        autopilot(state)
    } else {
        (input.move_left, input.move_right)
    };
    let screen_width = state.screen.width();
    state.paddle.steer(left, right, screen_width);

    advance_balls(state);
    if state.phase == GamePhase::GameOver {
        return TickOutcome::Continue;
    }
    advance_power_ups(state);

    TickOutcome::Continue
}

/// Move every active ball and resolve its contacts, in slot order
fn advance_balls(state: &mut GameState) {
    let width = state.screen.width();
    let height = state.screen.height();
    let base_speed_x = state.screen.scale_x(BALL_SPEED);

    for idx in 0..state.balls.capacity() {
        if !state.balls[idx].active {
            continue;
        }

        let ball = &mut state.balls[idx];
        ball.trail.advance(ball.position, ball.radius);
        ball.position += ball.velocity;

        // Side and top walls
        let r = ball.radius;
        if (ball.position.x >= width - r && ball.velocity.x > 0.0)
            || (ball.position.x <= r && ball.velocity.x < 0.0)
        {
            ball.velocity.x = -ball.velocity.x;
        }
        if ball.position.y <= r && ball.velocity.y < 0.0 {
            ball.velocity.y = -ball.velocity.y;
        }

        // No bottom wall: leaving the playfield loses the ball
        if ball.position.y >= height + r {
            ball.active = false;
            log::trace!("Ball {idx} left the playfield");
            if !state.balls.any_active() && state.lose_life() {
                return;
            }
            continue;
        }

        // Paddle steers the ball by where it was struck
        let paddle = state.paddle.rect;
        if ball.velocity.y > 0.0 && circle_rect_overlap(ball.position, r, &paddle) {
            ball.velocity.y = -ball.velocity.y;
            let hit = ((ball.position.x - paddle.x) / paddle.width).clamp(0.0, 1.0);
            ball.velocity.x = (hit - 0.5) * base_speed_x * 2.0;
        }

        // First active block in row-major order wins
        let position = ball.position;
        let Some(hit) = state
            .blocks
            .iter()
            .position(|b| b.active && circle_rect_overlap(position, r, &b.rect))
        else {
            continue;
        };

        state.blocks[hit].active = false;
        state.balls[idx].velocity.y = -state.balls[idx].velocity.y;
        state.score += BLOCK_SCORE;

        if state.power_ups_enabled && state.rng.random_range(0..100) < POWER_UP_DROP_CHANCE {
            let center = state.blocks[hit].rect.center();
            state.spawn_power_up(center);
        }

        if !state.blocks.any_active() {
            state.complete_level();
        }
    }
}

/// Drop power-ups and resolve paddle catches, in slot order
fn advance_power_ups(state: &mut GameState) {
    let height = state.screen.height();
    let paddle = state.paddle.rect;

    for idx in 0..state.power_ups.capacity() {
        let power_up = &mut state.power_ups[idx];
        if !power_up.active {
            continue;
        }

        power_up.position += power_up.velocity;

        if circle_rect_overlap(power_up.position, power_up.radius, &paddle) {
            power_up.active = false;
            state.score += POWER_UP_SCORE;
            log::debug!("Power-up caught, score {}", state.score);
            state.double_balls();
        } else if power_up.position.y > height + power_up.radius {
            power_up.active = false;
        }
    }
}

/// Pick paddle directions for demo play
///
/// Tracks the lowest ball that is falling; with none falling, goes after the
/// lowest power-up. Returns (left, right).
fn autopilot(state: &GameState) -> (bool, bool) {
    let lowest_ball = state
        .balls
        .iter_active()
        .filter(|b| b.velocity.y > 0.0)
        .max_by(|a, b| a.position.y.total_cmp(&b.position.y))
        .map(|b| b.position.x);

    let target = lowest_ball.or_else(|| {
        state
            .power_ups
            .iter_active()
            .max_by(|a, b| a.position.y.total_cmp(&b.position.y))
            .map(|p| p.position.x)
    });

    let Some(target) = target else {
        return (false, false);
    };

    let center = state.paddle.rect.center().x;
    let dead_zone = state.paddle.speed / 2.0;
    (center > target + dead_zone, center < target - dead_zone)
}
