//! Multi-game launcher shell
//!
//! A tiny state machine that owns the screen size, shows a main menu and
//! hosts one running game at a time. Drawing and key polling belong to the
//! platform layer; it hands this shell one [`MenuInput`] and one
//! [`TickInput`] per frame.

use rand::SeedableRng;
use rand_pcg::Pcg32;

use crate::error::{SettingsError, SimError};
use crate::settings::{ResizePolicy, Settings};
use crate::sim::{GameState, Screen, TickInput, TickOutcome, tick};

/// Which screen the launcher is showing
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Selection {
    MainMenu,
    BlockCrusher,
}

/// Main menu keys sampled for a frame
#[derive(Debug, Clone, Copy, Default)]
pub struct MenuInput {
    pub select_block_crusher: bool,
    pub exit: bool,
}

/// Menu shell that owns at most one running game
pub struct Launcher {
    selection: Selection,
    running: bool,
    screen: Screen,
    seed: u64,
    games_started: u64,
    resize_policy: ResizePolicy,
    game: Option<GameState>,
}

impl Launcher {
    pub fn new(settings: &Settings) -> Result<Self, SettingsError> {
        let screen = settings.screen()?;
        let seed = settings.effective_seed();
        log::info!("Launcher ready at {}x{}, seed {seed}", screen.width(), screen.height());
        Ok(Self {
            selection: Selection::MainMenu,
            running: true,
            screen,
            seed,
            games_started: 0,
            resize_policy: settings.resize_policy,
            game: None,
        })
    }

    /// Run one frame: menu handling or one game tick
    pub fn frame(&mut self, menu: &MenuInput, input: &TickInput) {
        if !self.running {
            return;
        }

        match self.selection {
            Selection::MainMenu => {
                if menu.select_block_crusher {
                    self.start_block_crusher();
                } else if menu.exit {
                    log::info!("Exit selected");
                    self.running = false;
                }
            }
            Selection::BlockCrusher => {
                let Some(game) = self.game.as_mut() else {
                    self.selection = Selection::MainMenu;
                    return;
                };
                if tick(game, input) == TickOutcome::ExitToMenu {
                    log::info!("Back to main menu (score {})", game.score);
                    self.game = None;
                    self.selection = Selection::MainMenu;
                }
            }
        }
    }

    fn start_block_crusher(&mut self) {
        let seed = self.seed.wrapping_add(self.games_started);
        self.games_started += 1;
        log::info!("Starting Block Crusher (seed {seed})");
        self.game = Some(GameState::with_rng(
            self.screen,
            Pcg32::seed_from_u64(seed),
            self.resize_policy,
        ));
        self.selection = Selection::BlockCrusher;
    }

    /// Report a new window size
    pub fn resize(&mut self, width: i32, height: i32) -> Result<(), SimError> {
        let screen = Screen::new(width, height)?;
        self.screen = screen;
        if let Some(game) = self.game.as_mut() {
            game.on_resize(screen);
        }
        Ok(())
    }

    /// Stop the launcher from the platform side (window closed)
    pub fn shutdown(&mut self) {
        self.running = false;
        self.game = None;
    }

    pub fn selection(&self) -> Selection {
        self.selection
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    pub fn screen(&self) -> Screen {
        self.screen
    }

    /// The running game, if one is selected
    pub fn game(&self) -> Option<&GameState> {
        self.game.as_ref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn launcher() -> Launcher {
        let settings = Settings {
            seed: Some(5),
            ..Default::default()
        };
        Launcher::new(&settings).unwrap()
    }

    fn select() -> MenuInput {
        MenuInput {
            select_block_crusher: true,
            ..Default::default()
        }
    }

    #[test]
    fn test_starts_in_menu() {
        let launcher = launcher();
        assert_eq!(launcher.selection(), Selection::MainMenu);
        assert!(launcher.is_running());
        assert!(launcher.game().is_none());
    }

    #[test]
    fn test_select_then_exit_to_menu() {
        let mut launcher = launcher();
        launcher.frame(&select(), &TickInput::default());
        assert_eq!(launcher.selection(), Selection::BlockCrusher);
        assert_eq!(launcher.game().map(|g| g.active_block_count()), Some(50));

        launcher.frame(&MenuInput::default(), &TickInput::default());
        assert_eq!(launcher.game().map(|g| g.time_ticks), Some(1));

        let exit = TickInput {
            menu_exit: true,
            ..Default::default()
        };
        launcher.frame(&MenuInput::default(), &exit);
        assert_eq!(launcher.selection(), Selection::MainMenu);
        assert!(launcher.game().is_none());
    }

    #[test]
    fn test_exit_stops_running() {
        let mut launcher = launcher();
        let exit = MenuInput {
            exit: true,
            ..Default::default()
        };
        launcher.frame(&exit, &TickInput::default());
        assert!(!launcher.is_running());

        // Further frames do nothing
        launcher.frame(&select(), &TickInput::default());
        assert_eq!(launcher.selection(), Selection::MainMenu);
    }

    #[test]
    fn test_resize_forwards_to_game() {
        let mut launcher = launcher();
        launcher.frame(&select(), &TickInput::default());
        launcher.resize(1600, 1200).unwrap();

        let game = launcher.game().unwrap();
        assert_eq!(game.screen, Screen::new(1600, 1200).unwrap());
        assert_eq!(game.paddle.rect.width, 240.0);
    }

    #[test]
    fn test_resize_rejects_degenerate_size() {
        let mut launcher = launcher();
        assert_eq!(
            launcher.resize(0, 0),
            Err(SimError::InvalidScreen {
                width: 0,
                height: 0
            })
        );
        assert_eq!(launcher.screen(), Screen::base());
    }

    #[test]
    fn test_shutdown() {
        let mut launcher = launcher();
        launcher.frame(&select(), &TickInput::default());
        launcher.shutdown();
        assert!(!launcher.is_running());
        assert!(launcher.game().is_none());
    }
}
