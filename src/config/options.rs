// src/config/options.rs
use std::path::PathBuf;
use std::time::Duration;

use super::consts::*;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PageKind {
    Teams,
    Players,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum EntitySelector {
    All,
    Ids(Vec<String>),
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ScrapeOptions {
    pub page: PageKind,             // team schedules vs player shooting pages
    pub entities: EntitySelector,   // subset of team/player codes
    pub season: String,             // opaque tag used to build request URLs
    pub out_dir: PathBuf,           // per-entity array files land here
    pub cooldown_every: u32,        // pause after this many requests
    pub cooldown_secs: u64,         // length of the pause
    pub timeout_secs: u64,          // per-request socket timeout
}

impl Default for ScrapeOptions {
    fn default() -> Self {
        Self {
            page: PageKind::Teams,
            entities: EntitySelector::All,
            season: s!("2024"),
            out_dir: PathBuf::from(DEFAULT_OUT_DIR),
            cooldown_every: COOLDOWN_EVERY,
            cooldown_secs: COOLDOWN_SECS,
            timeout_secs: NET_TIMEOUT_SECS,
        }
    }
}

impl ScrapeOptions {
    pub fn cooldown(&self) -> Duration {
        Duration::from_secs(self.cooldown_secs)
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}
