//! Repository implementations for database operations

pub mod entry;
pub mod leaderboard;

pub use entry::*;
pub use leaderboard::*;
