//! All game entity types — pure data, no logic.

use crate::config::GameConfig;

// ── Player ────────────────────────────────────────────────────────────────────

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Player {
    pub x: i32,
    pub y: i32,
    /// Remaining lives.  Zero is terminal.
    pub lives: u32,
    pub score: u32,
}

// ── Enemies ───────────────────────────────────────────────────────────────────

/// One slot of the enemy squad.  Destroyed enemies stay in their slot with
/// `active == false` so indices are stable for the whole frame.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Enemy {
    pub x: i32,
    pub y: i32,
    pub active: bool,
    pub health: u32,
}

/// Horizontal travel of the squad.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum Direction {
    Left,
    #[default]
    Right,
}

impl Direction {
    pub fn dx(self) -> i32 {
        match self {
            Direction::Left => -1,
            Direction::Right => 1,
        }
    }

    pub fn reversed(self) -> Direction {
        match self {
            Direction::Left => Direction::Right,
            Direction::Right => Direction::Left,
        }
    }
}

// ── Projectiles ───────────────────────────────────────────────────────────────

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Projectile {
    pub x: i32,
    pub y: i32,
    pub active: bool,
}

// ── Shields ───────────────────────────────────────────────────────────────────

/// A single block of a shield.  `health == 0` means destroyed for good.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ShieldBlock {
    pub x: i32,
    pub y: i32,
    pub health: u32,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Shield {
    pub blocks: Vec<ShieldBlock>,
}

// ── Master game state ─────────────────────────────────────────────────────────

/// The entire simulation state.  Renderers get `&GameState` between ticks
/// and must not mutate it; only `compute` and `collision` write to it.
#[derive(Clone, Debug)]
pub struct GameState {
    pub config: GameConfig,
    pub player: Player,
    /// Fixed squad: `enemies.len()` is the enemy count for the level.
    pub enemies: Vec<Enemy>,
    /// Always equals the number of `enemies` with `active == true`.
    pub alive_enemy_count: usize,
    /// Player-fired shots, never longer than `config.max_projectiles`.
    pub projectiles: Vec<Projectile>,
    /// Enemy-fired shots, never longer than `config.max_enemy_projectiles`.
    pub enemy_projectiles: Vec<Projectile>,
    pub shields: Vec<Shield>,
    /// 1-based.
    pub level: u32,
    pub frame: u64,
    pub enemy_fire_timer: u32,
    pub enemy_move_counter: u32,
    pub enemy_direction: Direction,
    pub paused: bool,
    pub game_over: bool,
    pub player_won: bool,
}

impl GameState {
    pub fn enemy_count(&self) -> usize {
        self.enemies.len()
    }
}
