//! Application flow around the core engine.
//!
//! The core crate knows nothing about menus, pausing, demos, or score
//! tables; this crate supplies those:
//!
//! - [`session`]: the Loading/MainMenu/Playing/Paused/GameOver state machine
//! - [`demo`]: the self-piloting game shown behind the main menu
//! - [`highscore`]: the bounded, sorted score table
//! - [`store`]: score persistence (JSON file, or nothing)

pub mod demo;
pub mod highscore;
pub mod session;
pub mod store;

pub use demo::Demo;
pub use highscore::HighScoreBoard;
pub use session::Session;
pub use store::{unix_timestamp, JsonScoreStore, NullScoreStore, ScoreStore};
