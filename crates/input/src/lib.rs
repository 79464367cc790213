//! Terminal input module.
//!
//! This module is intentionally independent of any UI framework. It maps
//! `crossterm` key events into session events, resolving screen-relative
//! movement keys against the current camera yaw so steering stays intuitive
//! while the view orbits.

pub mod camera;
pub mod map;

pub use voxtris_types as types;

pub use camera::{camera_relative_delta, MoveDir};
pub use map::{handle_key_event, should_quit};
