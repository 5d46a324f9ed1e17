//! End-to-end gameplay scenarios driven through the public API

use block_crusher::consts::*;
use block_crusher::sim::{GamePhase, GameState, Screen, TickInput, tick};
use glam::Vec2;
use proptest::prelude::*;

fn new_game() -> GameState {
    GameState::new(Screen::new(800, 600).unwrap(), 2024)
}

fn idle() -> TickInput {
    TickInput::default()
}

/// Put the only ball just above the bottom edge, falling
fn drop_ball(state: &mut GameState) {
    state.balls[0].position = Vec2::new(400.0, 605.0);
    state.balls[0].velocity = Vec2::new(0.0, 5.0);
}

#[test]
fn scenario_a_fresh_level() {
    let state = new_game();
    assert_eq!(state.active_ball_count(), 1);
    assert_eq!(state.balls[0].position, Vec2::new(400.0, 300.0));
    assert_eq!(state.active_block_count(), 50);
    assert_eq!(state.score, 0);
    assert_eq!(state.lives, 3);
    assert!(!state.is_paused());
    assert!(!state.is_game_over());
}

#[test]
fn scenario_b_break_first_block() {
    let mut state = new_game();
    // Block (0, 0) spans x 8..78, y 70..90; approach from below
    state.balls[0].position = Vec2::new(40.0, 100.0);
    state.balls[0].velocity = Vec2::new(0.0, -5.0);
    tick(&mut state, &idle());

    assert!(!state.blocks[0].active);
    assert_eq!(state.score, 10);
    assert!(state.blocks.iter().skip(1).all(|b| b.active));
    assert_eq!(state.active_block_count(), 49);
}

#[test]
fn scenario_c_power_up_catch_doubles_single_ball() {
    let mut state = new_game();
    assert_eq!(state.active_ball_count(), 1);
    let paddle = state.paddle.rect;
    state.spawn_power_up(Vec2::new(paddle.center().x, paddle.y - 6.0));

    tick(&mut state, &idle());
    assert_eq!(state.active_ball_count(), 2);
    assert_eq!(state.score, 50);
}

#[test]
fn scenario_d_three_falls_end_the_game() {
    let mut state = new_game();
    for expected_lives in [2, 1] {
        drop_ball(&mut state);
        tick(&mut state, &idle());
        assert_eq!(state.lives, expected_lives);
        assert_eq!(state.phase, GamePhase::Playing);
    }

    drop_ball(&mut state);
    tick(&mut state, &idle());
    assert_eq!(state.lives, 0);
    assert!(state.is_game_over());

    // Terminal until restart
    for _ in 0..10 {
        tick(&mut state, &idle());
    }
    assert!(state.is_game_over());

    let restart = TickInput {
        restart: true,
        ..Default::default()
    };
    tick(&mut state, &restart);
    assert!(!state.is_game_over());
    assert_eq!(state.lives, 3);
}

#[test]
fn life_loss_respawns_one_ball_at_centre_same_tick() {
    let mut state = new_game();
    drop_ball(&mut state);
    tick(&mut state, &idle());

    assert_eq!(state.lives, 2);
    assert_eq!(state.active_ball_count(), 1);
    assert_eq!(state.balls[0].position, Vec2::new(400.0, 300.0));
}

#[test]
fn losing_one_of_two_balls_keeps_lives() {
    let mut state = new_game();
    state.double_balls();
    state.balls[1].position = Vec2::new(400.0, 605.0);
    state.balls[1].velocity = Vec2::new(0.0, 5.0);
    tick(&mut state, &idle());

    assert_eq!(state.lives, 3);
    assert_eq!(state.active_ball_count(), 1);
}

#[test]
fn clearing_last_block_regenerates_level() {
    let mut state = new_game();
    state.set_power_ups_enabled(false);
    for i in 0..49 {
        state.blocks[i].active = false;
    }
    state.score = 490;

    // Block (4, 9) spans x 710..780, y 182..202
    state.balls[0].position = Vec2::new(745.0, 212.0);
    state.balls[0].velocity = Vec2::new(0.0, -5.0);
    tick(&mut state, &idle());

    assert_eq!(state.active_block_count(), BLOCK_ROWS * BLOCK_COLS);
    assert_eq!(state.score, 490 + BLOCK_SCORE + LEVEL_CLEAR_BONUS);
    assert_eq!(state.lives, 3);
    assert_eq!(state.level, 2);
    assert_eq!(state.active_ball_count(), 1);
    assert_eq!(state.balls[0].position, Vec2::new(400.0, 300.0));
    assert_eq!(state.balls[0].velocity, Vec2::new(5.0, 5.0));
}

#[test]
fn each_block_hit_removes_exactly_one_block() {
    let mut state = new_game();
    state.set_power_ups_enabled(false);
    let mut hits = 0;
    let input = TickInput {
        idle_mode: true,
        ..Default::default()
    };

    for _ in 0..3000 {
        let blocks_before = state.active_block_count();
        let score_before = state.score;
        tick(&mut state, &input);
        if state.level > 1 || state.is_game_over() {
            break;
        }
        let broken = blocks_before - state.active_block_count();
        assert!(broken <= 1);
        assert_eq!(state.score - score_before, broken as u64 * BLOCK_SCORE);
        hits += broken;
    }
    assert!(hits > 0);
}

#[test]
fn paused_game_does_not_advance() {
    let mut state = new_game();
    let pause = TickInput {
        pause_toggle: true,
        ..Default::default()
    };
    tick(&mut state, &pause);
    assert!(state.is_paused());

    let before = state.snapshot();
    for _ in 0..30 {
        tick(&mut state, &idle());
    }
    let after = state.snapshot();
    assert_eq!(before.balls[0].position, after.balls[0].position);
    assert_eq!(state.time_ticks, 0);
}

#[test]
fn rescale_mid_game_keeps_progress() {
    let mut state = new_game();
    for _ in 0..40 {
        tick(&mut state, &idle());
    }
    state.blocks[10].active = false;
    state.score = 10;

    state.on_resize(Screen::new(1024, 768).unwrap());
    assert_eq!(state.score, 10);
    assert_eq!(state.active_block_count(), 49);
    assert!(state.paddle.rect.right() <= 1024.0);

    // Keeps playing at the new size
    tick(&mut state, &idle());
    assert_eq!(state.lives, 3);
}

#[derive(Debug, Clone)]
enum BallOp {
    Double,
    Lose(usize),
}

fn ball_op() -> impl Strategy<Value = BallOp> {
    prop_oneof![
        3 => Just(BallOp::Double),
        1 => (0..MAX_BALLS).prop_map(BallOp::Lose),
    ]
}

proptest! {
    #[test]
    fn prop_double_balls_never_exceeds_capacity(ops in prop::collection::vec(ball_op(), 1..40)) {
        let mut state = new_game();
        for op in ops {
            let before = state.active_ball_count();
            match op {
                BallOp::Double => {
                    state.double_balls();
                    prop_assert_eq!(state.active_ball_count(), (before * 2).min(MAX_BALLS));
                }
                BallOp::Lose(slot) => state.balls[slot].active = false,
            }
            prop_assert!(state.active_ball_count() <= MAX_BALLS);
        }
    }
}
