//! Axis-aligned rectangle overlap and the four per-frame collision passes.
//!
//! Passes run in a fixed order against the already-advanced positions:
//! player shots × enemies, player shots × shields, enemy shots × player,
//! enemy shots × shields.  Each pass only sees entities still active after
//! the previous ones.

use log::debug;

use crate::entities::{GameState, Projectile, Shield};

/// An axis-aligned box on the board grid.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Rect {
    pub x: i32,
    pub y: i32,
    pub w: i32,
    pub h: i32,
}

impl Rect {
    pub const fn new(x: i32, y: i32, w: i32, h: i32) -> Self {
        Rect { x, y, w, h }
    }

    /// Strict overlap: boxes that only share an edge do not collide.
    pub fn overlaps(&self, other: &Rect) -> bool {
        self.x < other.x + other.w
            && self.x + self.w > other.x
            && self.y < other.y + other.h
            && self.y + self.h > other.y
    }
}

fn projectile_rect(p: &Projectile) -> Rect {
    Rect::new(p.x, p.y, 1, 1)
}

/// Run all four passes for the current frame.
pub fn resolve_collisions(state: &mut GameState) {
    player_shots_vs_enemies(state);
    let (hw, hh) = (state.config.shield_hitbox_width, state.config.shield_hitbox_height);
    shots_vs_shields(&mut state.projectiles, &mut state.shields, hw, hh);
    enemy_shots_vs_player(state);
    shots_vs_shields(&mut state.enemy_projectiles, &mut state.shields, hw, hh);
}

// ── Player shots ↔ enemies ────────────────────────────────────────────────────

fn player_shots_vs_enemies(state: &mut GameState) {
    let (ew, eh) = (state.config.enemy_width, state.config.enemy_height);

    for shot in state.projectiles.iter_mut().filter(|p| p.active) {
        let shot_box = projectile_rect(shot);
        let hit = state
            .enemies
            .iter_mut()
            .filter(|e| e.active)
            .find(|e| shot_box.overlaps(&Rect::new(e.x, e.y, ew, eh)));

        if let Some(enemy) = hit {
            debug!(
                "hit: shot ({},{}) destroyed enemy at ({},{})",
                shot.x, shot.y, enemy.x, enemy.y
            );
            shot.active = false;
            enemy.active = false;
            state.alive_enemy_count = state.alive_enemy_count.saturating_sub(1);
            state.player.score = state.player.score.saturating_add(state.config.points_per_enemy);
        }
    }
}

// ── Any shots ↔ shield blocks ─────────────────────────────────────────────────

/// Shared by both factions: a shot is absorbed by the first live block whose
/// (enlarged) hit-box it touches, and that block loses one point of health.
fn shots_vs_shields(shots: &mut [Projectile], shields: &mut [Shield], hit_w: i32, hit_h: i32) {
    for shot in shots.iter_mut().filter(|p| p.active) {
        let shot_box = projectile_rect(shot);
        let block = shields
            .iter_mut()
            .flat_map(|s| s.blocks.iter_mut())
            .filter(|b| b.health > 0)
            .find(|b| shot_box.overlaps(&Rect::new(b.x, b.y, hit_w, hit_h)));

        if let Some(block) = block {
            shot.active = false;
            block.health -= 1;
        }
    }
}

// ── Enemy shots ↔ player ──────────────────────────────────────────────────────

fn enemy_shots_vs_player(state: &mut GameState) {
    let player_box = Rect::new(
        state.player.x,
        state.player.y,
        state.config.player_width,
        state.config.player_height,
    );

    for shot in state.enemy_projectiles.iter_mut().filter(|p| p.active) {
        if !projectile_rect(shot).overlaps(&player_box) {
            continue;
        }
        shot.active = false;
        state.player.lives = state.player.lives.saturating_sub(1);
        debug!(
            "player hit at ({},{}), {} lives left",
            state.player.x, state.player.y, state.player.lives
        );
        if state.player.lives == 0 {
            state.game_over = true;
        }
    }
}
