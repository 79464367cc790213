//! Key mapping from terminal events to session events.
//!
//! The mapping is mode-aware: the same key can mean different things in
//! different modes (S starts a game from the menu but strafes while
//! playing; R restarts from the game-over screen but rotates in play).

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use voxtris_types::{Axis, GameAction, Mode, SessionEvent, Spin};

use crate::camera::{camera_relative_delta, MoveDir};

/// Map keyboard input to a session event for the current mode and camera
/// yaw. Keys with no meaning in the current mode map to `None`.
pub fn handle_key_event(key: KeyEvent, mode: Mode, yaw_deg: f32) -> Option<SessionEvent> {
    match mode {
        Mode::Loading => match key.code {
            KeyCode::Enter | KeyCode::Char(' ') => Some(SessionEvent::SkipLoading),
            _ => None,
        },
        Mode::MainMenu => match key.code {
            KeyCode::Enter | KeyCode::Char('s') | KeyCode::Char('S') => Some(SessionEvent::Start),
            _ => None,
        },
        Mode::Playing => playing_key(key, yaw_deg),
        Mode::Paused => match key.code {
            KeyCode::Char('p') | KeyCode::Char('P') => Some(SessionEvent::PauseToggle),
            KeyCode::Esc => Some(SessionEvent::Back),
            _ => None,
        },
        Mode::GameOver => match key.code {
            KeyCode::Char('r') | KeyCode::Char('R') | KeyCode::Enter => {
                Some(SessionEvent::Restart)
            }
            KeyCode::Esc => Some(SessionEvent::Back),
            _ => None,
        },
    }
}

fn playing_key(key: KeyEvent, yaw_deg: f32) -> Option<SessionEvent> {
    let move_dir = match key.code {
        KeyCode::Up | KeyCode::Char('w') | KeyCode::Char('W') => Some(MoveDir::Forward),
        KeyCode::Down | KeyCode::Char('s') | KeyCode::Char('S') => Some(MoveDir::Backward),
        KeyCode::Left | KeyCode::Char('a') | KeyCode::Char('A') => Some(MoveDir::Left),
        KeyCode::Right | KeyCode::Char('d') | KeyCode::Char('D') => Some(MoveDir::Right),
        _ => None,
    };
    if let Some(dir) = move_dir {
        let (dx, dz) = camera_relative_delta(yaw_deg, dir);
        return Some(SessionEvent::Action(GameAction::Move { dx, dz }));
    }

    match key.code {
        // Rotation: Q/E turn about the vertical axis, R/F about the
        // horizontal ones.
        KeyCode::Char('q') | KeyCode::Char('Q') => Some(SessionEvent::Action(GameAction::Rotate {
            axis: Axis::Y,
            spin: Spin::Ccw,
        })),
        KeyCode::Char('e') | KeyCode::Char('E') => Some(SessionEvent::Action(GameAction::Rotate {
            axis: Axis::Y,
            spin: Spin::Cw,
        })),
        KeyCode::Char('r') | KeyCode::Char('R') => Some(SessionEvent::Action(GameAction::Rotate {
            axis: Axis::X,
            spin: Spin::Ccw,
        })),
        KeyCode::Char('f') | KeyCode::Char('F') => Some(SessionEvent::Action(GameAction::Rotate {
            axis: Axis::Z,
            spin: Spin::Ccw,
        })),

        KeyCode::Char(' ') => Some(SessionEvent::Action(GameAction::HardDrop)),
        KeyCode::Char('p') | KeyCode::Char('P') => Some(SessionEvent::PauseToggle),
        KeyCode::Esc => Some(SessionEvent::Back),

        _ => None,
    }
}

/// Check if key should quit the application, regardless of mode.
pub fn should_quit(key: KeyEvent) -> bool {
    matches!(key.code, KeyCode::Char('x') | KeyCode::Char('X'))
        || (key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

    #[test]
    fn test_movement_keys_follow_camera() {
        assert_eq!(
            handle_key_event(KeyEvent::from(KeyCode::Char('a')), Mode::Playing, 0.0),
            Some(SessionEvent::Action(GameAction::Move { dx: -1, dz: 0 }))
        );
        assert_eq!(
            handle_key_event(KeyEvent::from(KeyCode::Char('w')), Mode::Playing, 0.0),
            Some(SessionEvent::Action(GameAction::Move { dx: 0, dz: -1 }))
        );
        // A quarter orbit swings "left" onto the z axis.
        assert_eq!(
            handle_key_event(KeyEvent::from(KeyCode::Char('a')), Mode::Playing, 90.0),
            Some(SessionEvent::Action(GameAction::Move { dx: 0, dz: 1 }))
        );
    }

    #[test]
    fn test_rotation_keys() {
        assert_eq!(
            handle_key_event(KeyEvent::from(KeyCode::Char('q')), Mode::Playing, 0.0),
            Some(SessionEvent::Action(GameAction::Rotate {
                axis: Axis::Y,
                spin: Spin::Ccw,
            }))
        );
        assert_eq!(
            handle_key_event(KeyEvent::from(KeyCode::Char('E')), Mode::Playing, 0.0),
            Some(SessionEvent::Action(GameAction::Rotate {
                axis: Axis::Y,
                spin: Spin::Cw,
            }))
        );
        assert_eq!(
            handle_key_event(KeyEvent::from(KeyCode::Char('r')), Mode::Playing, 0.0),
            Some(SessionEvent::Action(GameAction::Rotate {
                axis: Axis::X,
                spin: Spin::Ccw,
            }))
        );
        assert_eq!(
            handle_key_event(KeyEvent::from(KeyCode::Char('f')), Mode::Playing, 0.0),
            Some(SessionEvent::Action(GameAction::Rotate {
                axis: Axis::Z,
                spin: Spin::Ccw,
            }))
        );
    }

    #[test]
    fn test_keys_are_mode_aware() {
        // S starts from the menu but strafes while playing.
        assert_eq!(
            handle_key_event(KeyEvent::from(KeyCode::Char('s')), Mode::MainMenu, 0.0),
            Some(SessionEvent::Start)
        );
        assert_eq!(
            handle_key_event(KeyEvent::from(KeyCode::Char('s')), Mode::Playing, 0.0),
            Some(SessionEvent::Action(GameAction::Move { dx: 0, dz: 1 }))
        );

        // R restarts from the game-over screen but rotates in play.
        assert_eq!(
            handle_key_event(KeyEvent::from(KeyCode::Char('r')), Mode::GameOver, 0.0),
            Some(SessionEvent::Restart)
        );

        // Gameplay keys mean nothing on the loading screen.
        assert_eq!(
            handle_key_event(KeyEvent::from(KeyCode::Char(' ')), Mode::Loading, 0.0),
            Some(SessionEvent::SkipLoading)
        );
        assert_eq!(
            handle_key_event(KeyEvent::from(KeyCode::Char('q')), Mode::Loading, 0.0),
            None
        );
    }

    #[test]
    fn test_pause_and_back() {
        assert_eq!(
            handle_key_event(KeyEvent::from(KeyCode::Char('p')), Mode::Playing, 0.0),
            Some(SessionEvent::PauseToggle)
        );
        assert_eq!(
            handle_key_event(KeyEvent::from(KeyCode::Char('p')), Mode::Paused, 0.0),
            Some(SessionEvent::PauseToggle)
        );
        assert_eq!(
            handle_key_event(KeyEvent::from(KeyCode::Esc), Mode::Paused, 0.0),
            Some(SessionEvent::Back)
        );
    }

    #[test]
    fn test_hard_drop() {
        assert_eq!(
            handle_key_event(KeyEvent::from(KeyCode::Char(' ')), Mode::Playing, 0.0),
            Some(SessionEvent::Action(GameAction::HardDrop))
        );
    }

    #[test]
    fn test_quit_keys() {
        assert!(should_quit(KeyEvent::from(KeyCode::Char('x'))));
        assert!(should_quit(KeyEvent::new(
            KeyCode::Char('c'),
            KeyModifiers::CONTROL
        )));
        assert!(!should_quit(KeyEvent::from(KeyCode::Char('w'))));
    }
}
