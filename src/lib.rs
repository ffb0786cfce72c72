//! NHL game-log proxy
//!
//! A thin proxy over the NHL web API: fetches a player's per-game
//! statistics for a season, projects them to a caller-selected field
//! subset, limits to the N most recent games, optionally reverses the
//! display order, and optionally rolls the selection up into a single
//! aggregate record.

pub mod aggregate;
pub mod config;
pub mod error;
pub mod fields;
pub mod handlers;
pub mod server;
pub mod state;
pub mod transform;
pub mod upstream;
