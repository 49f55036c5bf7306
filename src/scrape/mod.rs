// src/scrape/mod.rs
mod rate_limit;
mod scrape;

pub use rate_limit::CooldownGate;
pub use scrape::{collect_player_shots, collect_players, collect_team_shots, collect_teams};
