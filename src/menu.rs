//! Start screen.  The selected level is plain state owned by the caller.

use std::io::Write;
use std::sync::mpsc;

use crossterm::{
    cursor,
    event::{Event, KeyCode, KeyEvent, KeyEventKind},
    style::{self, Color, Print},
    terminal,
    QueueableCommand,
};

pub enum MenuResult {
    Start(u32),
    Quit,
}

/// Level picker shown on the start screen.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MenuState {
    pub level: u32,
    pub max_level: u32,
}

impl MenuState {
    pub fn new(level: u32, max_level: u32) -> Self {
        MenuState {
            level: level.clamp(1, max_level.max(1)),
            max_level: max_level.max(1),
        }
    }

    /// React to one key.  `Some` ends the menu.
    pub fn handle_key(&mut self, code: KeyCode) -> Option<MenuResult> {
        match code {
            KeyCode::Left | KeyCode::Char('a') | KeyCode::Char('A') => {
                self.level = self.level.saturating_sub(1).max(1);
                None
            }
            KeyCode::Right | KeyCode::Char('d') | KeyCode::Char('D') => {
                self.level = (self.level + 1).min(self.max_level);
                None
            }
            KeyCode::Char(' ') | KeyCode::Enter => Some(MenuResult::Start(self.level)),
            KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => Some(MenuResult::Quit),
            _ => None,
        }
    }
}

fn draw<W: Write>(out: &mut W, menu: &MenuState, best: Option<u32>) -> std::io::Result<()> {
    out.queue(terminal::Clear(terminal::ClearType::All))?;

    let (width, height) = terminal::size()?;
    let cx = width / 2;
    let cy = height / 2;

    let mut line = |row: u16, text: &str, color: Color| -> std::io::Result<()> {
        out.queue(cursor::MoveTo(
            cx.saturating_sub(text.chars().count() as u16 / 2),
            row,
        ))?;
        out.queue(style::SetForegroundColor(color))?;
        out.queue(Print(text))?;
        Ok(())
    };

    line(cy.saturating_sub(6), "  SPACE INVADERS  ", Color::Green)?;
    if let Some(best) = best {
        line(cy.saturating_sub(5), &format!("Best Score: {}", best), Color::Yellow)?;
    }

    line(cy.saturating_sub(3), "Controls:", Color::White)?;
    line(cy.saturating_sub(2), "A/LEFT  - Move Left ", Color::White)?;
    line(cy.saturating_sub(1), "D/RIGHT - Move Right", Color::White)?;
    line(cy, "SPACE   - Shoot     ", Color::White)?;
    line(cy + 1, "P       - Pause     ", Color::White)?;
    line(cy + 2, "Q/ESC   - Quit      ", Color::White)?;

    line(
        cy + 4,
        &format!("Start Level: [{:>2}]  (Use LEFT/RIGHT)", menu.level),
        Color::White,
    )?;
    line(
        height.saturating_sub(2),
        "LEFT/RIGHT to change level, SPACE to start",
        Color::Cyan,
    )?;

    out.queue(style::ResetColor)?;
    out.flush()
}

/// Block until the player starts a game or quits.
pub fn show_menu<W: Write>(
    out: &mut W,
    rx: &mpsc::Receiver<Event>,
    mut menu: MenuState,
    best: Option<u32>,
) -> std::io::Result<MenuResult> {
    draw(out, &menu, best)?;

    loop {
        let event = match rx.recv() {
            Ok(event) => event,
            // input thread gone: nothing more can arrive
            Err(_) => return Ok(MenuResult::Quit),
        };
        if let Event::Key(KeyEvent {
            code,
            kind: KeyEventKind::Press,
            ..
        }) = event
        {
            if let Some(result) = menu.handle_key(code) {
                return Ok(result);
            }
            draw(out, &menu, best)?;
        } else if let Event::Resize(..) = event {
            draw(out, &menu, best)?;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_clamps_into_range() {
        assert_eq!(MenuState::new(0, 10).level, 1);
        assert_eq!(MenuState::new(42, 10).level, 10);
        assert_eq!(MenuState::new(5, 10).level, 5);
    }

    #[test]
    fn left_right_change_level_within_bounds() {
        let mut menu = MenuState::new(1, 3);
        assert!(menu.handle_key(KeyCode::Left).is_none());
        assert_eq!(menu.level, 1);
        menu.handle_key(KeyCode::Right);
        menu.handle_key(KeyCode::Char('d'));
        menu.handle_key(KeyCode::Right);
        assert_eq!(menu.level, 3);
        menu.handle_key(KeyCode::Char('a'));
        assert_eq!(menu.level, 2);
    }

    #[test]
    fn space_starts_at_selected_level() {
        let mut menu = MenuState::new(4, 10);
        assert!(matches!(
            menu.handle_key(KeyCode::Char(' ')),
            Some(MenuResult::Start(4))
        ));
    }

    #[test]
    fn q_quits() {
        let mut menu = MenuState::new(1, 10);
        assert!(matches!(
            menu.handle_key(KeyCode::Char('q')),
            Some(MenuResult::Quit)
        ));
    }
}
