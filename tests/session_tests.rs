//! Session tests: mode transitions and demo isolation, end to end.

use voxtris::session::{NullScoreStore, Session};
use voxtris::types::{GameAction, Mode, SessionEvent, LOADING_DURATION_MS, TICK_MS};

fn session() -> Session {
    Session::new(7, Box::new(NullScoreStore))
}

fn drive_to_playing(s: &mut Session) {
    s.handle(SessionEvent::SkipLoading);
    s.handle(SessionEvent::Start);
    assert_eq!(s.mode(), Mode::Playing);
}

#[test]
fn test_full_mode_walk() {
    let mut s = session();
    assert_eq!(s.mode(), Mode::Loading);

    // Loading ends on its own after the splash duration.
    let ticks = LOADING_DURATION_MS / TICK_MS + 1;
    for _ in 0..ticks {
        s.tick(TICK_MS);
    }
    assert_eq!(s.mode(), Mode::MainMenu);

    s.handle(SessionEvent::Start);
    assert_eq!(s.mode(), Mode::Playing);
    s.handle(SessionEvent::PauseToggle);
    assert_eq!(s.mode(), Mode::Paused);
    s.handle(SessionEvent::PauseToggle);
    assert_eq!(s.mode(), Mode::Playing);
    s.handle(SessionEvent::Back);
    assert_eq!(s.mode(), Mode::MainMenu);
}

#[test]
fn test_spurious_events_are_ignored() {
    let mut s = session();

    // None of these apply while Loading.
    s.handle(SessionEvent::Start);
    s.handle(SessionEvent::PauseToggle);
    s.handle(SessionEvent::Restart);
    s.handle(SessionEvent::Back);
    s.handle(SessionEvent::Action(GameAction::HardDrop));
    assert_eq!(s.mode(), Mode::Loading);

    // Restart applies only to the game-over screen.
    s.handle(SessionEvent::SkipLoading);
    s.handle(SessionEvent::Restart);
    assert_eq!(s.mode(), Mode::MainMenu);
}

#[test]
fn test_demo_runs_only_in_menu_and_stays_isolated() {
    let mut s = session();
    s.handle(SessionEvent::SkipLoading);

    // The demo makes visible progress while the menu idles.
    let before = s.demo_game().score();
    for _ in 0..4_000 {
        s.tick(TICK_MS);
    }
    let after = s.demo_game().score();
    assert!(after >= before);
    assert!(s.demo_game().current().is_some() || s.demo_game().game_over());

    // The player's game was untouched the entire time.
    assert!(s.game().current().is_none());
    assert_eq!(s.game().score(), 0);

    // And playing does not advance the demo.
    s.handle(SessionEvent::Start);
    let demo_score = s.demo_game().score();
    for _ in 0..200 {
        s.tick(TICK_MS);
    }
    assert_eq!(s.demo_game().score(), demo_score);
}

#[test]
fn test_game_over_and_restart_cycle() {
    let mut s = session();
    drive_to_playing(&mut s);

    for _ in 0..2_000 {
        s.handle(SessionEvent::Action(GameAction::HardDrop));
        if s.mode() == Mode::GameOver {
            break;
        }
    }
    assert_eq!(s.mode(), Mode::GameOver);
    let final_score = s.game().score();
    assert!(final_score > 0);

    // The first score of a run always makes the empty table.
    assert!(s.new_high_score());
    assert_eq!(s.scores().entries()[0].score, final_score);

    // Game-over is inert under time and gameplay input.
    s.tick(10_000);
    s.handle(SessionEvent::Action(GameAction::HardDrop));
    assert_eq!(s.mode(), Mode::GameOver);
    assert_eq!(s.game().score(), final_score);

    s.handle(SessionEvent::Restart);
    assert_eq!(s.mode(), Mode::Playing);
    assert_eq!(s.game().score(), 0);
    assert!(!s.new_high_score());
}

#[test]
fn test_actions_reach_game_only_while_playing() {
    let mut s = session();
    drive_to_playing(&mut s);
    let x0 = s.game().current().map(|p| p.x).unwrap();

    s.handle(SessionEvent::Action(GameAction::Move { dx: 1, dz: 0 }));
    assert_eq!(s.game().current().map(|p| p.x), Some(x0 + 1));

    s.handle(SessionEvent::PauseToggle);
    s.handle(SessionEvent::Action(GameAction::Move { dx: 1, dz: 0 }));
    assert_eq!(s.game().current().map(|p| p.x), Some(x0 + 1));
}
