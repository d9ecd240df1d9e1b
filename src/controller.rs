//! Glue between discrete player commands and the simulation.

use std::io;

use rand::Rng;

use crate::compute;
use crate::config::GameConfig;
use crate::entities::GameState;
use crate::error::GameError;
use crate::scores::ScoreFile;

/// Everything the input layer can ask for.  No payloads.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum Command {
    #[default]
    None,
    MoveLeft,
    MoveRight,
    Shoot,
    Pause,
    Quit,
}

/// Owns the game state and its random source for the lifetime of a run.
pub struct Controller<R: Rng> {
    state: GameState,
    rng: R,
    running: bool,
}

impl<R: Rng> Controller<R> {
    pub fn new(config: GameConfig, mut rng: R) -> Result<Self, GameError> {
        let state = compute::init_state(config, &mut rng)?;
        Ok(Controller {
            state,
            rng,
            running: true,
        })
    }

    /// Apply one command.  Returns `false` for commands that do nothing.
    /// `Quit` only stops the outer loop; the game state is left untouched.
    pub fn execute(&mut self, cmd: Command) -> bool {
        match cmd {
            Command::MoveLeft => compute::move_player_left(&mut self.state),
            Command::MoveRight => compute::move_player_right(&mut self.state),
            Command::Shoot => compute::player_shoot(&mut self.state),
            Command::Pause => compute::toggle_pause(&mut self.state),
            Command::Quit => self.running = false,
            Command::None => return false,
        }
        true
    }

    /// Advance one frame.
    pub fn update(&mut self) {
        compute::update(&mut self.state, &mut self.rng);
    }

    pub fn set_level(&mut self, level: u32) {
        compute::set_level(&mut self.state, level, &mut self.rng);
    }

    pub fn reset(&mut self) {
        compute::reset(&mut self.state, &mut self.rng);
    }

    /// Record the finished game's score, then start over.  The game is reset
    /// even when the score could not be written.
    pub fn play_again(&mut self, scores: &ScoreFile) -> io::Result<()> {
        let saved = scores.append(self.state.player.score);
        self.reset();
        saved
    }

    /// Read-only view for renderers.
    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    pub fn set_running(&mut self, running: bool) {
        self.running = running;
    }

    pub fn is_over(&self) -> bool {
        compute::is_over(&self.state)
    }

    pub fn is_won(&self) -> bool {
        compute::is_won(&self.state)
    }
}
