//! Tunable game constants.
//!
//! Every number the simulation reads lives in `GameConfig`.  The defaults
//! reproduce the classic 80×24 board; a TOML file may override any subset.

use std::path::Path;

use serde::Deserialize;

use crate::error::GameError;

#[derive(Clone, Copy, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    // ── Board ────────────────────────────────────────────────────────────────
    pub board_width: i32,
    pub board_height: i32,

    // ── Player ───────────────────────────────────────────────────────────────
    pub player_width: i32,
    pub player_height: i32,
    pub player_speed: i32,
    pub initial_lives: u32,

    // ── Enemy squad ──────────────────────────────────────────────────────────
    pub enemy_width: i32,
    pub enemy_height: i32,
    pub max_enemies: usize,
    pub initial_enemies: usize,
    pub enemy_rows: usize,
    pub enemy_cols: usize,
    pub enemy_start_x: i32,
    pub enemy_start_y: i32,
    pub enemy_spacing_x: i32,
    pub enemy_spacing_y: i32,
    pub enemy_move_down: i32,
    /// Frames between horizontal steps are `enemy_base_cadence - speed_tier`.
    pub enemy_base_cadence: u32,
    /// Alive count at or below which the squad moves at tier 2.
    pub enemy_speed_threshold: usize,
    /// Alive count at or below which the squad moves at tier 3.
    pub enemy_fastest_threshold: usize,

    // ── Projectiles ──────────────────────────────────────────────────────────
    pub max_projectiles: usize,
    pub max_enemy_projectiles: usize,
    pub enemy_projectile_speed: i32,
    /// Frames between enemy shots.
    pub enemy_fire_rate: u32,
    pub enemy_fire_attempts: usize,

    // ── Shields ──────────────────────────────────────────────────────────────
    pub shield_count: usize,
    pub shield_width: i32,
    pub shield_height: i32,
    pub shield_health: u32,
    pub shield_hitbox_width: i32,
    pub shield_hitbox_height: i32,
    /// Shields sit `shield_row_offset` rows above the bottom edge ...
    pub shield_row_offset: i32,
    /// ... raised by a random `0..shield_row_jitter` extra rows.
    pub shield_row_jitter: i32,

    // ── Scoring & progression ────────────────────────────────────────────────
    pub points_per_enemy: u32,
    pub points_level_bonus: u32,
    pub max_level: u32,

    // ── Loop ─────────────────────────────────────────────────────────────────
    pub target_fps: u32,
}

impl Default for GameConfig {
    fn default() -> Self {
        GameConfig {
            board_width: 80,
            board_height: 24,

            player_width: 3,
            player_height: 1,
            player_speed: 2,
            initial_lives: 3,

            enemy_width: 3,
            enemy_height: 1,
            max_enemies: 55,
            initial_enemies: 30,
            enemy_rows: 5,
            enemy_cols: 6,
            enemy_start_x: 2,
            enemy_start_y: 2,
            enemy_spacing_x: 12,
            enemy_spacing_y: 3,
            enemy_move_down: 1,
            enemy_base_cadence: 10,
            enemy_speed_threshold: 10,
            enemy_fastest_threshold: 5,

            max_projectiles: 100,
            max_enemy_projectiles: 30,
            enemy_projectile_speed: 1,
            enemy_fire_rate: 50,
            enemy_fire_attempts: 5,

            shield_count: 4,
            shield_width: 4,
            shield_height: 1,
            shield_health: 3,
            shield_hitbox_width: 6,
            shield_hitbox_height: 2,
            shield_row_offset: 15,
            shield_row_jitter: 5,

            points_per_enemy: 10,
            points_level_bonus: 100,
            max_level: 10,

            target_fps: 60,
        }
    }
}

impl GameConfig {
    /// Parse a (possibly partial) TOML document on top of the defaults.
    pub fn from_toml_str(text: &str) -> Result<Self, GameError> {
        let config: GameConfig = toml::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self, GameError> {
        let text = std::fs::read_to_string(path)?;
        Self::from_toml_str(&text)
    }

    /// Row the player ship sits on.
    pub fn player_row(&self) -> i32 {
        self.board_height - 2
    }

    /// Enemies at or below this row end the game.
    pub fn invasion_row(&self) -> i32 {
        self.board_height - 2
    }

    /// Reject settings the simulation cannot run with.
    pub fn validate(&self) -> Result<(), GameError> {
        fn check(ok: bool, msg: &str) -> Result<(), GameError> {
            if ok {
                Ok(())
            } else {
                Err(GameError::InvalidConfig(msg.to_string()))
            }
        }

        check(
            self.board_width > 0 && self.board_height > 2,
            "board must be at least 1×3",
        )?;
        check(
            self.player_width > 0
                && self.player_height > 0
                && self.player_width <= self.board_width,
            "player ship must fit inside the board",
        )?;
        check(self.player_speed > 0, "player speed must be positive")?;
        check(
            self.enemy_width > 0 && self.enemy_height > 0 && self.enemy_width < self.board_width,
            "enemy must have a size and be narrower than the board",
        )?;
        check(
            self.initial_enemies <= self.max_enemies,
            "initial enemy count exceeds squad capacity",
        )?;
        check(
            self.enemy_fastest_threshold <= self.enemy_speed_threshold,
            "fastest threshold must not exceed the speed threshold",
        )?;
        check(
            self.enemy_base_cadence > 3,
            "enemy base cadence must leave room for three speed tiers",
        )?;
        check(
            self.enemy_projectile_speed > 0,
            "enemy projectile speed must be positive",
        )?;
        check(self.enemy_fire_rate > 0, "enemy fire rate must be positive")?;
        check(
            self.shield_width > 0
                && self.shield_height > 0
                && self.shield_hitbox_width > 0
                && self.shield_hitbox_height > 0
                && self.shield_width <= self.board_width,
            "shield must fit inside the board",
        )?;
        check(self.shield_row_jitter >= 0, "shield jitter must not be negative")?;
        check(self.max_level > 0, "max level must be at least 1")?;
        check(self.target_fps > 0, "target fps must be positive")?;
        Ok(())
    }
}
