//! Countries leaderboard HTTP API
//!
//! Router, handlers and error mapping. The binary in `main.rs` only parses the
//! CLI, opens the database and serves [`api::router`].

pub mod api;

pub use api::{router, AppState};

pub const APP_VERSION: &str = concat!(env!("CARGO_PKG_VERSION"), "-", env!("GIT_HASH"));
