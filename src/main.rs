mod display;
mod input;
mod menu;

use std::fs::File;
use std::io::{stdout, BufWriter, Write};
use std::path::{Path, PathBuf};
use std::sync::mpsc;
use std::thread;
use std::time::{Duration, Instant};

use anyhow::{bail, Context, Result};
use clap::Parser;
use crossterm::{
    cursor,
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind},
    terminal, ExecutableCommand,
};
use log::{info, warn};
use rand::rngs::StdRng;
use rand::SeedableRng;

use menu::{MenuResult, MenuState};
use space_invaders::scores::{ScoreFile, DEFAULT_SCORES_FILE};
use space_invaders::{Command, Controller, GameConfig};

#[derive(Parser, Debug)]
#[command(name = "space_invaders", about = "Terminal Space Invaders")]
struct Args {
    /// Level to start at
    #[arg(
        short = 'L',
        long,
        env = "START_LEVEL",
        default_value_t = 1,
        value_parser = clap::value_parser!(u32).range(1..)
    )]
    level: u32,

    /// TOML file overriding the default game constants
    #[arg(long)]
    config: Option<PathBuf>,

    /// Score log, one score per line
    #[arg(long, default_value = DEFAULT_SCORES_FILE)]
    scores: PathBuf,

    /// Seed for a reproducible game
    #[arg(long)]
    seed: Option<u64>,

    /// Write log output here instead of stderr
    #[arg(long)]
    log_file: Option<PathBuf>,
}

type Game = Controller<StdRng>;

// ── Logging ───────────────────────────────────────────────────────────────────

/// The terminal is in raw/alternate-screen mode while playing, so logs are
/// only useful when sent to a file.
fn init_logging(log_file: Option<&Path>) -> Result<()> {
    let mut builder =
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn"));
    if let Some(path) = log_file {
        let file = File::create(path)
            .with_context(|| format!("cannot create log file {}", path.display()))?;
        builder.target(env_logger::Target::Pipe(Box::new(file)));
    }
    builder.init();
    Ok(())
}

// ── Game loop ─────────────────────────────────────────────────────────────────

/// Runs until the player quits.  Every tick drains all pending key presses
/// into commands, advances one frame and redraws.
fn game_loop<W: Write>(
    out: &mut W,
    game: &mut Game,
    rx: &mpsc::Receiver<Event>,
    scores: &ScoreFile,
) -> Result<()> {
    let frame = Duration::from_secs(1) / game.state().config.target_fps;

    while game.is_running() {
        let frame_start = Instant::now();

        while let Ok(event) = rx.try_recv() {
            let Event::Key(KeyEvent {
                code,
                kind: KeyEventKind::Press,
                modifiers,
                ..
            }) = event
            else {
                continue;
            };

            let cmd = input::command_for_key(code, modifiers);
            if game.is_over() {
                // only quit / restart are meaningful now
                match (cmd, code) {
                    (Command::Quit, _) => {
                        game.execute(Command::Quit);
                    }
                    (_, KeyCode::Char('r') | KeyCode::Char('R')) => {
                        if let Err(e) = game.play_again(scores) {
                            warn!("cannot write {}: {}", scores.path().display(), e);
                        }
                    }
                    _ => {}
                }
                continue;
            }
            game.execute(cmd);
        }

        game.update();
        display::render(out, game.state())?;

        let elapsed = frame_start.elapsed();
        if elapsed < frame {
            thread::sleep(frame - elapsed);
        }
    }
    Ok(())
}

fn run<W: Write>(
    out: &mut W,
    game: &mut Game,
    rx: &mpsc::Receiver<Event>,
    scores: &ScoreFile,
    start_level: u32,
    best: Option<u32>,
) -> Result<()> {
    let menu = MenuState::new(start_level, game.state().config.max_level);
    match menu::show_menu(out, rx, menu, best)? {
        MenuResult::Quit => return Ok(()),
        MenuResult::Start(level) => {
            if level > 1 {
                game.set_level(level);
            }
        }
    }
    game_loop(out, game, rx, scores)
}

/// A game failure outranks a failed save; the save error is only logged.
fn first_failure(result: Result<()>, saved: Result<()>) -> Result<()> {
    match (result, saved) {
        (Err(e), Err(save_err)) => {
            warn!("{:#}", save_err);
            Err(e)
        }
        (result, saved) => result.and(saved),
    }
}

// ── Entry point ───────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    let args = Args::parse();
    init_logging(args.log_file.as_deref())?;

    let config = match &args.config {
        Some(path) => GameConfig::load(path)
            .with_context(|| format!("cannot load config {}", path.display()))?,
        None => GameConfig::default(),
    };
    let rng = match args.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };
    let mut game = Controller::new(config, rng).context("failed to initialize game state")?;

    let scores = ScoreFile::new(&args.scores);
    if let Err(e) = scores.open() {
        warn!("cannot open {}: {}", scores.path().display(), e);
    }
    let best = scores.best().unwrap_or_else(|e| {
        warn!("cannot read {}: {}", scores.path().display(), e);
        None
    });

    let (need_w, need_h) = display::required_size(game.state());
    let (width, height) = terminal::size().context("cannot query terminal size")?;
    if width < need_w || height < need_h {
        bail!(
            "terminal too small: need {}x{}, have {}x{}",
            need_w,
            need_h,
            width,
            height
        );
    }

    let mut out = BufWriter::new(stdout());
    terminal::enable_raw_mode()?;
    out.execute(terminal::EnterAlternateScreen)?;
    out.execute(cursor::Hide)?;

    // Dedicate a thread exclusively to blocking event reads, sending them
    // through a channel so the game loop never has to block on I/O.
    let (tx, rx) = mpsc::channel::<Event>();
    thread::spawn(move || {
        while let Ok(ev) = event::read() {
            if tx.send(ev).is_err() {
                break; // receiver dropped → program exiting
            }
        }
    });

    let result = run(&mut out, &mut game, &rx, &scores, args.level, best);

    // Always restore the terminal
    let _ = out.execute(cursor::Show);
    let _ = out.execute(terminal::LeaveAlternateScreen);
    let _ = terminal::disable_raw_mode();

    let score = game.state().player.score;
    info!("exiting with score {}", score);
    let saved = scores
        .append(score)
        .with_context(|| format!("cannot write {}", scores.path().display()));

    first_failure(result, saved)
}
