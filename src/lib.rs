//! Voxtris (workspace facade crate).
//!
//! This package keeps the `voxtris::{core,session,term,input,types}` public
//! API stable while the implementation lives in dedicated crates under
//! `crates/`.

pub use voxtris_core as core;
pub use voxtris_input as input;
pub use voxtris_session as session;
pub use voxtris_term as term;
pub use voxtris_types as types;
