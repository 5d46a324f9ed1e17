//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Fixed step per call, no delta time
//! - Injected, seeded RNG only
//! - Stable iteration order (by pool slot)
//! - No rendering or platform dependencies

pub mod collision;
pub mod pool;
pub mod snapshot;
pub mod state;
pub mod tick;
pub mod trail;

pub use collision::{Rect, circle_rect_overlap};
pub use pool::{Pool, Slot};
pub use snapshot::{BallView, BlockView, PowerUpView, Snapshot};
pub use state::{Ball, Block, GamePhase, GameState, Paddle, PowerUp, Screen, build_block_grid};
pub use tick::{TickInput, TickOutcome, tick};
pub use trail::{Trail, TrailSample};
