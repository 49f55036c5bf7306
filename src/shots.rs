// src/shots.rs

use crate::config::consts::{HOOP_X_PX, HOOP_Y_PX, PX_PER_FT};
use crate::stats::InvalidStatError;

/// One field-goal attempt, as parsed from a single shot marker.
/// Pixel frame: origin top-left, y increasing downward.
#[derive(Clone, Debug, PartialEq)]
pub struct ShotEvent {
    pub x: f64,
    pub y: f64,
    pub made: bool,
    pub distance_ft: Option<f64>,
    pub source_id: String,
}

/// Selection among made/missed/all shots for a given analysis.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum OutcomeFilter {
    Made,
    Missed,
    All,
}

impl std::str::FromStr for OutcomeFilter {
    type Err = InvalidStatError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "made" => Ok(OutcomeFilter::Made),
            "missed" => Ok(OutcomeFilter::Missed),
            "all" => Ok(OutcomeFilter::All),
            other => Err(InvalidStatError(other.to_string())),
        }
    }
}

/// Per-entity shot aggregate, split by outcome. Append-only; events keep
/// their arrival order within each bucket. No deduplication: the source
/// guarantees one page per match/player-season.
#[derive(Clone, Debug, Default)]
pub struct ShotCollection {
    entity: String,
    made: Vec<ShotEvent>,
    missed: Vec<ShotEvent>,
}

impl ShotCollection {
    pub fn new(entity: impl Into<String>) -> Self {
        Self { entity: entity.into(), made: Vec::new(), missed: Vec::new() }
    }

    pub fn entity(&self) -> &str {
        &self.entity
    }

    pub fn push(&mut self, event: ShotEvent) {
        if event.made {
            self.made.push(event);
        } else {
            self.missed.push(event);
        }
    }

    pub fn extend<I: IntoIterator<Item = ShotEvent>>(&mut self, batch: I) {
        for event in batch {
            self.push(event);
        }
    }

    pub fn made(&self) -> &[ShotEvent] {
        &self.made
    }

    pub fn missed(&self) -> &[ShotEvent] {
        &self.missed
    }

    pub fn len(&self) -> usize {
        self.made.len() + self.missed.len()
    }

    pub fn is_empty(&self) -> bool {
        self.made.is_empty() && self.missed.is_empty()
    }

    fn events(&self, filter: OutcomeFilter) -> impl Iterator<Item = &ShotEvent> {
        let (made, missed) = match filter {
            OutcomeFilter::Made => (self.made.as_slice(), &[][..]),
            OutcomeFilter::Missed => (&[][..], self.missed.as_slice()),
            OutcomeFilter::All => (self.made.as_slice(), self.missed.as_slice()),
        };
        made.iter().chain(missed.iter())
    }

    /// Pooled `(x[], y[])` coordinate arrays for the chosen outcome.
    pub fn points(&self, filter: OutcomeFilter) -> (Vec<f64>, Vec<f64>) {
        let mut xs = Vec::new();
        let mut ys = Vec::new();
        for ev in self.events(filter) {
            xs.push(ev.x);
            ys.push(ev.y);
        }
        (xs, ys)
    }

    /// Shot distances in whole feet for the chosen outcome. Events without
    /// a tooltip distance fall back to pixel geometry.
    pub fn distances(&self, filter: OutcomeFilter) -> Vec<i64> {
        self.events(filter)
            .map(|ev| {
                ev.distance_ft
                    .unwrap_or_else(|| derive_distance_ft(ev.x, ev.y))
                    .round() as i64
            })
            .collect()
    }
}

/// Shot distance from raw pixel geometry: Euclidean distance to the hoop,
/// scaled to feet. Fallback for markers whose tooltip carries no distance.
pub fn derive_distance_ft(x: f64, y: f64) -> f64 {
    let dx = x - HOOP_X_PX;
    let dy = y - HOOP_Y_PX;
    (dx * dx + dy * dy).sqrt() / PX_PER_FT
}
