use space_invaders::scores::ScoreFile;
use space_invaders::{Command, Controller, GameConfig};

use rand::rngs::StdRng;
use rand::SeedableRng;

fn make_controller() -> Controller<StdRng> {
    Controller::new(GameConfig::default(), StdRng::seed_from_u64(42)).unwrap()
}

#[test]
fn starts_running() {
    let c = make_controller();
    assert!(c.is_running());
    assert!(!c.is_over());
    assert_eq!(c.state().level, 1);
}

#[test]
fn movement_commands_move_the_player() {
    let mut c = make_controller();
    assert!(c.execute(Command::MoveLeft));
    assert_eq!(c.state().player.x, 37);
    assert!(c.execute(Command::MoveRight));
    assert!(c.execute(Command::MoveRight));
    assert_eq!(c.state().player.x, 41);
}

#[test]
fn shoot_command_fires() {
    let mut c = make_controller();
    c.execute(Command::Shoot);
    assert_eq!(c.state().projectiles.len(), 1);
}

#[test]
fn none_is_not_processed() {
    let mut c = make_controller();
    assert!(!c.execute(Command::None));
    assert!(c.is_running());
}

#[test]
fn quit_stops_loop_without_touching_state() {
    let mut c = make_controller();
    c.execute(Command::Shoot);
    let before = c.state().clone();
    assert!(c.execute(Command::Quit));
    assert!(!c.is_running());
    assert_eq!(c.state().projectiles, before.projectiles);
    assert_eq!(c.state().player, before.player);
    assert!(!c.state().game_over);
}

#[test]
fn pause_blocks_commands_until_resumed() {
    let mut c = make_controller();
    c.execute(Command::Pause);
    c.execute(Command::MoveLeft);
    c.execute(Command::Shoot);
    c.update();
    assert_eq!(c.state().player.x, 39);
    assert!(c.state().projectiles.is_empty());
    assert_eq!(c.state().frame, 0);

    c.execute(Command::Pause);
    c.execute(Command::MoveLeft);
    c.update();
    assert_eq!(c.state().player.x, 37);
    assert_eq!(c.state().frame, 1);
}

#[test]
fn update_advances_one_frame() {
    let mut c = make_controller();
    for _ in 0..5 {
        c.update();
    }
    assert_eq!(c.state().frame, 5);
}

#[test]
fn set_level_and_reset() {
    let mut c = make_controller();
    c.set_level(3);
    assert_eq!(c.state().level, 3);
    assert_eq!(c.state().player.score, 200);
    c.reset();
    assert_eq!(c.state().level, 1);
    assert_eq!(c.state().player.score, 0);
}

#[test]
fn set_running_restarts_loop() {
    let mut c = make_controller();
    c.execute(Command::Quit);
    c.set_running(true);
    assert!(c.is_running());
}

#[test]
fn invalid_config_fails_construction() {
    let config = GameConfig { board_width: 0, ..GameConfig::default() };
    assert!(Controller::new(config, StdRng::seed_from_u64(1)).is_err());
}

#[test]
fn win_is_reported() {
    let config = GameConfig {
        max_level: 1,
        initial_enemies: 1,
        enemy_start_y: 18,
        ..GameConfig::default()
    };
    let mut c = Controller::new(config, StdRng::seed_from_u64(3)).unwrap();
    // the single enemy spans x 2..5 on row 18; line the muzzle up under it
    for _ in 0..19 {
        c.execute(Command::MoveLeft);
    }
    assert_eq!(c.state().player.x, 1);
    c.execute(Command::Shoot); // muzzle at (2, 21)
    for _ in 0..3 {
        c.update();
    }
    assert!(c.is_won());
    assert!(c.is_over());
    assert_eq!(c.state().player.score, 10 + 100);
}

#[test]
fn play_again_records_the_finished_score() {
    let path = std::env::temp_dir().join(format!(
        "space_invaders_play_again_{}.txt",
        std::process::id()
    ));
    let _ = std::fs::remove_file(&path);
    let scores = ScoreFile::new(&path);

    let mut c = make_controller();
    c.set_level(3); // 200 points of level bonus
    c.play_again(&scores).unwrap();
    assert_eq!(c.state().level, 1);
    assert_eq!(c.state().player.score, 0);

    // quitting straight away adds nothing, the earlier game is kept
    scores.append(c.state().player.score).unwrap();
    assert_eq!(std::fs::read_to_string(&path).unwrap(), "200\n");
    let _ = std::fs::remove_file(&path);
}

#[test]
fn play_again_resets_even_if_the_score_cannot_be_written() {
    // a directory cannot be opened for appending
    let scores = ScoreFile::new(std::env::temp_dir());
    let mut c = make_controller();
    c.set_level(2);
    assert!(c.play_again(&scores).is_err());
    assert_eq!(c.state().level, 1);
    assert_eq!(c.state().player.score, 0);
}
