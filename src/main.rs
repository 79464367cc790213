//! Terminal voxel-blocks runner (default binary).
//!
//! Drives the session state machine on a fixed 16 ms tick, using crossterm
//! for input and a custom framebuffer-based renderer.

use std::time::{Duration, Instant};

use anyhow::Result;
use crossterm::event::{self, Event, KeyCode, KeyEventKind};

use voxtris::core::snapshot::GameSnapshot;
use voxtris::input::{handle_key_event, should_quit};
use voxtris::session::{JsonScoreStore, Session};
use voxtris::term::{Frame, FrameBuffer, GameView, TerminalRenderer, ViewYaw, Viewport};
use voxtris::types::{Mode, TICK_MS};

const HIGHSCORE_FILE: &str = "highscores.json";

fn main() -> Result<()> {
    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term);

    // Always try to restore terminal state.
    let _ = term.exit();
    result
}

fn run(term: &mut TerminalRenderer) -> Result<()> {
    let seed = voxtris::session::unix_timestamp() as u32;
    let mut session = Session::new(seed, Box::new(JsonScoreStore::new(HIGHSCORE_FILE)));

    let view = GameView::default();
    let mut yaw = ViewYaw::default();
    let mut snap = GameSnapshot::default();
    let mut fb = FrameBuffer::new(0, 0);

    let mut last_tick = Instant::now();
    let tick_duration = Duration::from_millis(TICK_MS as u64);

    loop {
        // Render. The menu shows the autoplay demo; every other mode shows
        // the player's game.
        let source = match session.mode() {
            Mode::MainMenu => session.demo_game(),
            _ => session.game(),
        };
        source.snapshot_into(&mut snap);

        let frame = Frame {
            snapshot: &snap,
            mode: session.mode(),
            yaw,
            scores: session.scores().top(5),
            new_high_score: session.new_high_score(),
            loading_percent: session.loading_percent(),
        };
        let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
        view.render_into(&frame, Viewport::new(w, h), &mut fb);
        term.present(&mut fb)?;

        // Input with timeout until next tick.
        let timeout = tick_duration
            .checked_sub(last_tick.elapsed())
            .unwrap_or_else(|| Duration::from_secs(0));

        if event::poll(timeout)? {
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => {
                    if should_quit(key) {
                        return Ok(());
                    }
                    match key.code {
                        KeyCode::Char('[') => yaw = yaw.turned_ccw(),
                        KeyCode::Char(']') => yaw = yaw.turned_cw(),
                        _ => {
                            if let Some(ev) = handle_key_event(key, session.mode(), yaw.degrees()) {
                                session.handle(ev);
                            }
                        }
                    }
                }
                Event::Resize(_, _) => term.invalidate(),
                _ => {}
            }
        }

        // Tick.
        if last_tick.elapsed() >= tick_duration {
            last_tick = Instant::now();
            session.tick(TICK_MS);
            // Feedback hook point (sound, flashes). Unused for now.
            let _ = session.game_mut().take_events();
        }
    }
}
