//! Rendering layer — all terminal I/O lives here.
//!
//! Each function receives a mutable writer and an immutable view of the
//! game state.  No game logic is performed; this module only translates
//! state into terminal commands.
//!
//! Screen layout (terminal rows):
//!   0                 HUD
//!   1                 top border
//!   2 ..= H+1         board rows 0 ..= H-1
//!   H+2               bottom border
//!   H+3               controls hint

use std::io::Write;

use crossterm::{
    cursor,
    style::{self, Attribute, Color, Print},
    terminal,
    QueueableCommand,
};
use space_invaders::compute::{is_over, is_won};
use space_invaders::entities::GameState;

// ── Colour palette ────────────────────────────────────────────────────────────

const C_BORDER: Color = Color::White;
const C_HUD_SCORE: Color = Color::Yellow;
const C_HUD_LEVEL: Color = Color::Cyan;
const C_HUD_LIVES: Color = Color::Red;
const C_PLAYER: Color = Color::Green;
const C_ENEMY: Color = Color::Red;
const C_SHOT_PLAYER: Color = Color::Cyan;
const C_SHOT_ENEMY: Color = Color::Magenta;
const C_SHIELD: Color = Color::Yellow;
const C_HINT: Color = Color::DarkGrey;

const CHAR_PLAYER: char = '^';
const CHAR_ENEMY: char = '#';
const CHAR_SHOT_PLAYER: char = '|';
const CHAR_SHOT_ENEMY: char = 'v';
const CHAR_SHIELD: char = '#';

/// Terminal size needed to show the whole board.
pub fn required_size(state: &GameState) -> (u16, u16) {
    let w = state.config.board_width + 2;
    let h = state.config.board_height + 4;
    (w.max(0) as u16, h.max(0) as u16)
}

/// Terminal cell for a board cell, or `None` when it lies off the board.
fn cell(state: &GameState, x: i32, y: i32) -> Option<(u16, u16)> {
    let c = &state.config;
    if x < 0 || y < 0 || x >= c.board_width || y >= c.board_height {
        return None;
    }
    Some(((x + 1) as u16, (y + 2) as u16))
}

fn put<W: Write>(out: &mut W, state: &GameState, x: i32, y: i32, ch: char) -> std::io::Result<()> {
    if let Some((col, row)) = cell(state, x, y) {
        out.queue(cursor::MoveTo(col, row))?;
        out.queue(Print(ch))?;
    }
    Ok(())
}

// ── Public entry point ────────────────────────────────────────────────────────

/// Render one complete frame.
pub fn render<W: Write>(out: &mut W, state: &GameState) -> std::io::Result<()> {
    out.queue(terminal::Clear(terminal::ClearType::All))?;

    draw_border(out, state)?;
    draw_hud(out, state)?;
    draw_shields(out, state)?;
    draw_enemies(out, state)?;
    draw_projectiles(out, state)?;
    draw_player(out, state)?;
    draw_controls_hint(out, state)?;

    if is_over(state) {
        draw_game_over(out, state)?;
    } else if state.paused {
        draw_paused(out, state)?;
    }

    // Park cursor in a harmless spot and flush
    let (_, h) = required_size(state);
    out.queue(style::ResetColor)?;
    out.queue(cursor::MoveTo(0, h.saturating_sub(1)))?;
    out.flush()?;
    Ok(())
}

// ── Border ────────────────────────────────────────────────────────────────────

fn draw_border<W: Write>(out: &mut W, state: &GameState) -> std::io::Result<()> {
    let w = state.config.board_width.max(0) as usize;
    let bottom = (state.config.board_height + 2) as u16;

    out.queue(style::SetForegroundColor(C_BORDER))?;

    out.queue(cursor::MoveTo(0, 1))?;
    out.queue(Print(format!("┌{}┐", "─".repeat(w))))?;

    out.queue(cursor::MoveTo(0, bottom))?;
    out.queue(Print(format!("└{}┘", "─".repeat(w))))?;

    for row in 2..bottom {
        out.queue(cursor::MoveTo(0, row))?;
        out.queue(Print("│"))?;
        out.queue(cursor::MoveTo(w as u16 + 1, row))?;
        out.queue(Print("│"))?;
    }

    Ok(())
}

// ── HUD (row 0) ───────────────────────────────────────────────────────────────

fn draw_hud<W: Write>(out: &mut W, state: &GameState) -> std::io::Result<()> {
    out.queue(cursor::MoveTo(1, 0))?;
    out.queue(style::SetForegroundColor(C_HUD_SCORE))?;
    out.queue(Print(format!("Score:{:>6}", state.player.score)))?;

    let level_str = format!("[ LEVEL {} ]", state.level);
    let (w, _) = required_size(state);
    let lx = (w / 2).saturating_sub(level_str.len() as u16 / 2);
    out.queue(cursor::MoveTo(lx, 0))?;
    out.queue(style::SetForegroundColor(C_HUD_LEVEL))?;
    out.queue(Print(&level_str))?;

    let lives_str = format!("Lives:{}", "♥".repeat(state.player.lives as usize));
    let rx = w.saturating_sub(lives_str.chars().count() as u16 + 1);
    out.queue(cursor::MoveTo(rx, 0))?;
    out.queue(style::SetForegroundColor(C_HUD_LIVES))?;
    out.queue(Print(&lives_str))?;

    Ok(())
}

// ── Entities ──────────────────────────────────────────────────────────────────

fn draw_player<W: Write>(out: &mut W, state: &GameState) -> std::io::Result<()> {
    let p = &state.player;
    out.queue(style::SetForegroundColor(C_PLAYER))?;
    for dx in 0..state.config.player_width {
        let ch = if dx == state.config.player_width / 2 { CHAR_PLAYER } else { '=' };
        put(out, state, p.x + dx, p.y, ch)?;
    }
    Ok(())
}

fn draw_enemies<W: Write>(out: &mut W, state: &GameState) -> std::io::Result<()> {
    out.queue(style::SetForegroundColor(C_ENEMY))?;
    for enemy in state.enemies.iter().filter(|e| e.active) {
        for dx in 0..state.config.enemy_width {
            put(out, state, enemy.x + dx, enemy.y, CHAR_ENEMY)?;
        }
    }
    Ok(())
}

fn draw_projectiles<W: Write>(out: &mut W, state: &GameState) -> std::io::Result<()> {
    out.queue(style::SetForegroundColor(C_SHOT_PLAYER))?;
    for shot in state.projectiles.iter().filter(|p| p.active) {
        put(out, state, shot.x, shot.y, CHAR_SHOT_PLAYER)?;
    }
    out.queue(style::SetForegroundColor(C_SHOT_ENEMY))?;
    for shot in state.enemy_projectiles.iter().filter(|p| p.active) {
        put(out, state, shot.x, shot.y, CHAR_SHOT_ENEMY)?;
    }
    Ok(())
}

/// Damaged blocks are drawn dim; destroyed ones are not drawn at all.
fn draw_shields<W: Write>(out: &mut W, state: &GameState) -> std::io::Result<()> {
    out.queue(style::SetForegroundColor(C_SHIELD))?;
    let full = state.config.shield_health;
    for block in state.shields.iter().flat_map(|s| s.blocks.iter()) {
        if block.health == 0 {
            continue;
        }
        let dim = block.health < full;
        if dim {
            out.queue(style::SetAttribute(Attribute::Dim))?;
        }
        put(out, state, block.x, block.y, CHAR_SHIELD)?;
        if dim {
            out.queue(style::SetAttribute(Attribute::NormalIntensity))?;
        }
    }
    Ok(())
}

// ── Controls hint (last row) ──────────────────────────────────────────────────

fn draw_controls_hint<W: Write>(out: &mut W, state: &GameState) -> std::io::Result<()> {
    out.queue(cursor::MoveTo(1, (state.config.board_height + 3) as u16))?;
    out.queue(style::SetForegroundColor(C_HINT))?;
    out.queue(Print("← → / A D : Move   SPACE : Shoot   P : Pause   Q : Quit"))?;
    Ok(())
}

// ── Overlays ──────────────────────────────────────────────────────────────────

fn draw_centered<W: Write>(
    out: &mut W,
    state: &GameState,
    lines: &[(String, Color)],
) -> std::io::Result<()> {
    let (w, h) = required_size(state);
    let cx = w / 2;
    let start_row = (h / 2).saturating_sub(lines.len() as u16 / 2);

    for (i, (msg, color)) in lines.iter().enumerate() {
        let col = cx.saturating_sub(msg.chars().count() as u16 / 2);
        out.queue(cursor::MoveTo(col, start_row + i as u16))?;
        out.queue(style::SetForegroundColor(*color))?;
        out.queue(Print(msg))?;
    }
    Ok(())
}

fn draw_paused<W: Write>(out: &mut W, state: &GameState) -> std::io::Result<()> {
    draw_centered(
        out,
        state,
        &[
            ("╔════════════════════╗".to_string(), Color::Yellow),
            ("║      PAUSED        ║".to_string(), Color::Yellow),
            ("╚════════════════════╝".to_string(), Color::Yellow),
            ("P - Resume  Q - Quit".to_string(), Color::White),
        ],
    )
}

fn draw_game_over<W: Write>(out: &mut W, state: &GameState) -> std::io::Result<()> {
    let (title, color) = if is_won(state) {
        ("║      YOU  WIN!     ║", Color::Green)
    } else {
        ("║    GAME  OVER      ║", Color::Red)
    };
    draw_centered(
        out,
        state,
        &[
            ("╔════════════════════╗".to_string(), color),
            (title.to_string(), color),
            ("╚════════════════════╝".to_string(), color),
            (format!("Final Score: {:>6}", state.player.score), Color::Yellow),
            ("R - Play Again  Q - Quit".to_string(), Color::White),
        ],
    )
}
