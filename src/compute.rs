//! Game-logic operations.
//!
//! Every public function takes the `GameState` by mutable reference and
//! updates it in place.  Randomness (shield placement, choice of enemy
//! shooter) only comes through the injected `rng`, so a seeded RNG makes a
//! whole game reproducible.

use log::{debug, info};
use rand::Rng;

use crate::collision::resolve_collisions;
use crate::config::GameConfig;
use crate::entities::{Direction, Enemy, GameState, Player, Projectile, Shield, ShieldBlock};
use crate::error::GameError;

// ── Constructors ─────────────────────────────────────────────────────────────

/// Build a level‑1 game.  Fails if the config is unusable or the entity
/// pools cannot be allocated.
pub fn init_state(config: GameConfig, rng: &mut impl Rng) -> Result<GameState, GameError> {
    config.validate()?;

    let mut enemies = Vec::new();
    enemies.try_reserve_exact(config.max_enemies)?;
    let mut projectiles = Vec::new();
    projectiles.try_reserve_exact(config.max_projectiles)?;
    let mut enemy_projectiles = Vec::new();
    enemy_projectiles.try_reserve_exact(config.max_enemy_projectiles)?;
    let mut shields = Vec::new();
    shields.try_reserve_exact(config.shield_count)?;

    let mut state = GameState {
        config,
        player: spawn_player(&config),
        enemies,
        alive_enemy_count: 0,
        projectiles,
        enemy_projectiles,
        shields,
        level: 1,
        frame: 0,
        enemy_fire_timer: 0,
        enemy_move_counter: 0,
        enemy_direction: Direction::Right,
        paused: false,
        game_over: false,
        player_won: false,
    };
    init_enemies(&mut state);
    init_shields(&mut state, rng);
    Ok(state)
}

/// Start over from level 1 with a fresh player, keeping the config.
pub fn reset(state: &mut GameState, rng: &mut impl Rng) {
    state.player = spawn_player(&state.config);
    state.level = 1;
    state.frame = 0;
    state.enemy_fire_timer = 0;
    state.paused = false;
    state.game_over = false;
    state.player_won = false;
    rebuild_level(state, rng);
    info!("game reset");
}

fn spawn_player(config: &GameConfig) -> Player {
    Player {
        x: config.board_width / 2 - config.player_width / 2,
        y: config.player_row(),
        lives: config.initial_lives,
        score: 0,
    }
}

/// Lay the squad out row by row from the top-left corner.  The grid may
/// hold more slots than `initial_enemies`; the extra slots stay empty.
fn init_enemies(state: &mut GameState) {
    let c = state.config;
    let wanted = c.initial_enemies.min(c.max_enemies);

    state.enemies.clear();
    'grid: for row in 0..c.enemy_rows {
        for col in 0..c.enemy_cols {
            if state.enemies.len() >= wanted {
                break 'grid;
            }
            state.enemies.push(Enemy {
                x: c.enemy_start_x + col as i32 * c.enemy_spacing_x,
                y: c.enemy_start_y + row as i32 * c.enemy_spacing_y,
                active: true,
                health: 1,
            });
        }
    }
    state.alive_enemy_count = state.enemies.len();
    state.enemy_direction = Direction::Right;
    state.enemy_move_counter = 0;
}

/// Drop each shield at a random column, with a little vertical jitter, and
/// fill its whole `shield_width × shield_height` block grid.
fn init_shields(state: &mut GameState, rng: &mut impl Rng) {
    let c = state.config;

    state.shields.clear();
    for _ in 0..c.shield_count {
        let sx = rng.gen_range(0..=c.board_width - c.shield_width);
        let jitter = if c.shield_row_jitter > 0 {
            rng.gen_range(0..c.shield_row_jitter)
        } else {
            0
        };
        let sy = c.board_height - c.shield_row_offset - jitter;

        let blocks = (0..c.shield_height)
            .flat_map(move |by| {
                (0..c.shield_width).map(move |bx| ShieldBlock {
                    x: sx + bx,
                    y: sy + by,
                    health: c.shield_health,
                })
            })
            .collect();
        state.shields.push(Shield { blocks });
    }
}

fn rebuild_level(state: &mut GameState, rng: &mut impl Rng) {
    state.projectiles.clear();
    state.enemy_projectiles.clear();
    init_enemies(state);
    init_shields(state, rng);
}

// ── Input-driven state transitions ──────────────────────────────────────────

fn accepts_input(state: &GameState) -> bool {
    !state.paused && !state.game_over
}

pub fn move_player_left(state: &mut GameState) {
    if !accepts_input(state) {
        return;
    }
    state.player.x = (state.player.x - state.config.player_speed).max(0);
}

pub fn move_player_right(state: &mut GameState) {
    if !accepts_input(state) {
        return;
    }
    let max_x = state.config.board_width - state.config.player_width;
    state.player.x = (state.player.x + state.config.player_speed).min(max_x);
}

/// Fire from the ship's muzzle.  Silently dropped when the pool is full.
pub fn player_shoot(state: &mut GameState) {
    if !accepts_input(state) || state.projectiles.len() >= state.config.max_projectiles {
        return;
    }
    let shot = Projectile {
        x: state.player.x + state.config.player_width / 2,
        y: state.player.y - 1,
        active: true,
    };
    debug!("player shot at ({},{})", shot.x, shot.y);
    state.projectiles.push(shot);
}

pub fn toggle_pause(state: &mut GameState) {
    if !state.game_over {
        state.paused = !state.paused;
    }
}

// ── Per-frame update ────────────────────────────────────────────────────────

/// Advance the simulation by one frame.  Does nothing while paused or after
/// the game has ended.
pub fn update(state: &mut GameState, rng: &mut impl Rng) {
    if state.paused || state.game_over {
        return;
    }

    state.frame += 1;

    update_enemies(state, rng);
    advance_player_projectiles(state);
    advance_enemy_projectiles(state);
    resolve_collisions(state);

    if state.game_over {
        info!("game over at level {} with {} points", state.level, state.player.score);
    }

    // ── Level complete ───────────────────────────────────────────────────────
    if state.alive_enemy_count == 0 {
        next_level(state, rng);
    }
}

/// Speed tier for the given number of survivors: 1, 2 or 3.
pub fn enemy_speed_tier(alive: usize, config: &GameConfig) -> u32 {
    if alive <= config.enemy_fastest_threshold {
        3
    } else if alive <= config.enemy_speed_threshold {
        2
    } else {
        1
    }
}

fn update_enemies(state: &mut GameState, rng: &mut impl Rng) {
    let c = state.config;

    // ── Horizontal step on a tier-dependent cadence ─────────────────────────
    let cadence = c.enemy_base_cadence - enemy_speed_tier(state.alive_enemy_count, &c);
    state.enemy_move_counter += 1;
    if state.enemy_move_counter >= cadence {
        state.enemy_move_counter = 0;

        let dx = state.enemy_direction.dx();
        let mut hit_edge = false;
        for enemy in state.enemies.iter_mut().filter(|e| e.active) {
            enemy.x += dx;
            if enemy.x <= 0 || enemy.x + c.enemy_width >= c.board_width {
                hit_edge = true;
            }
        }

        if hit_edge {
            state.enemy_direction = state.enemy_direction.reversed();
            for enemy in state.enemies.iter_mut().filter(|e| e.active) {
                enemy.y += c.enemy_move_down;
                if enemy.y >= c.invasion_row() {
                    state.game_over = true;
                }
            }
        }
    }

    // ── Fire control ─────────────────────────────────────────────────────────
    state.enemy_fire_timer += 1;
    if state.enemy_fire_timer >= c.enemy_fire_rate {
        state.enemy_fire_timer = 0;
        if state.alive_enemy_count > 0 {
            enemy_fire(state, rng);
        }
    }
}

/// Probe forward from a random slot for an active shooter.  Gives up after
/// `enemy_fire_attempts` slots; a miss or a full pool is not an error.
fn enemy_fire(state: &mut GameState, rng: &mut impl Rng) {
    let count = state.enemies.len();
    if count == 0 {
        return;
    }

    let mut idx = rng.gen_range(0..count);
    for _ in 0..state.config.enemy_fire_attempts {
        idx = (idx + 1) % count;
        let enemy = &state.enemies[idx];
        if !enemy.active {
            continue;
        }
        if state.enemy_projectiles.len() < state.config.max_enemy_projectiles {
            let shot = Projectile {
                x: enemy.x + state.config.enemy_width / 2,
                y: enemy.y + 1,
                active: true,
            };
            debug!(
                "enemy shot at ({},{}) from enemy at ({},{})",
                shot.x, shot.y, enemy.x, enemy.y
            );
            state.enemy_projectiles.push(shot);
        }
        return;
    }
}

/// Player shots climb exactly one row per frame so they cannot skip over a
/// one-row enemy.
fn advance_player_projectiles(state: &mut GameState) {
    for shot in state.projectiles.iter_mut().filter(|p| p.active) {
        shot.y -= 1;
        if shot.y < 0 {
            shot.active = false;
        }
    }
    state.projectiles.retain(|p| p.active);
}

fn advance_enemy_projectiles(state: &mut GameState) {
    let speed = state.config.enemy_projectile_speed;
    let bottom = state.config.board_height;
    for shot in state.enemy_projectiles.iter_mut().filter(|p| p.active) {
        shot.y += speed;
        if shot.y >= bottom {
            shot.active = false;
        }
    }
    state.enemy_projectiles.retain(|p| p.active);
}

// ── Level progression ───────────────────────────────────────────────────────

/// Award the level bonus and move on.  Past `max_level` the player has won
/// and nothing is respawned.
pub fn next_level(state: &mut GameState, rng: &mut impl Rng) {
    state.level = state.level.saturating_add(1);
    state.player.score = state.player.score.saturating_add(state.config.points_level_bonus);

    if state.level > state.config.max_level || state.level == u32::MAX {
        state.player_won = true;
        state.game_over = true;
        info!("all levels cleared, final score {}", state.player.score);
        return;
    }

    rebuild_level(state, rng);
    info!("level {} started", state.level);
}

/// Jump straight to `level` at game start, crediting the bonus for every
/// skipped level.  Levels below 1 are ignored.
pub fn set_level(state: &mut GameState, level: u32, rng: &mut impl Rng) {
    if level < 1 {
        return;
    }
    state.level = level;
    let bonus = state.config.points_level_bonus.saturating_mul(level - 1);
    state.player.score = state.player.score.saturating_add(bonus);
    rebuild_level(state, rng);
    info!("starting at level {}", level);
}

// ── Terminal queries ────────────────────────────────────────────────────────

/// Both the flag and the lives counter are checked; either one ends the game.
pub fn is_over(state: &GameState) -> bool {
    state.game_over || state.player.lives == 0
}

pub fn is_won(state: &GameState) -> bool {
    state.player_won
}
