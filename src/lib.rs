//! Fixed-timestep Space Invaders simulation.
//!
//! - `entities`: the state model (pure data)
//! - `compute`: commands, per-frame update, level progression
//! - `collision`: rectangle overlap and the collision passes
//! - `controller`: command dispatch around an owned `GameState`
//! - `config`: tunable constants, optionally loaded from TOML
//! - `scores`: flat-file score log

pub mod collision;
pub mod compute;
pub mod config;
pub mod controller;
pub mod entities;
pub mod error;
pub mod scores;

pub use config::GameConfig;
pub use controller::{Command, Controller};
pub use entities::GameState;
pub use error::GameError;
