// src/stats/histogram.rs

use thiserror::Error;

use crate::shots::{OutcomeFilter, ShotCollection};

/// Caller asked for a stat this module doesn't know.
#[derive(Debug, Error, PartialEq, Eq)]
#[error("\"{0}\" is not a valid stat (made, missed, all, made-percentage)")]
pub struct InvalidStatError(pub String);

#[derive(Debug, Error, PartialEq, Eq)]
pub enum HistogramError {
    #[error("empty distance sequence")]
    Empty,

    #[error(transparent)]
    InvalidStat(#[from] InvalidStatError),
}

/// Which distance distribution to build.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Stat {
    Made,
    Missed,
    All,
    MadePercentage,
}

impl std::str::FromStr for Stat {
    type Err = InvalidStatError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "made" => Ok(Stat::Made),
            "missed" => Ok(Stat::Missed),
            "all" => Ok(Stat::All),
            "made-percentage" => Ok(Stat::MadePercentage),
            other => Err(InvalidStatError(other.to_string())),
        }
    }
}

/// Integer-binned count distribution over shot distances. Unit-width bins;
/// the number of bins is data-dependent, spanning the observed range.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DistanceHistogram {
    pub bin_edges: Vec<i64>,
    pub counts: Vec<u64>,
}

impl DistanceHistogram {
    pub fn from_distances(distances: &[i64]) -> Result<Self, HistogramError> {
        let min = *distances.iter().min().ok_or(HistogramError::Empty)?;
        let max = *distances.iter().max().ok_or(HistogramError::Empty)?;

        // Edges min..=max+1, so the max distance lands in the final bin.
        let bin_edges: Vec<i64> = (min..=max + 1).collect();
        let mut counts = vec![0u64; (max - min + 1) as usize];
        for &d in distances {
            counts[(d - min) as usize] += 1;
        }

        Ok(Self { bin_edges, counts })
    }

    /// Left edge of each bin, i.e. the distance each count belongs to.
    pub fn distances(&self) -> &[i64] {
        &self.bin_edges[..self.bin_edges.len() - 1]
    }

    pub fn total(&self) -> u64 {
        self.counts.iter().sum()
    }
}

/// A plottable distance series: one value per whole-foot distance.
#[derive(Clone, Debug, PartialEq)]
pub struct DistanceSeries {
    pub distances: Vec<i64>,
    pub values: Vec<f64>,
}

/// Build the distance series for one entity and stat selector.
pub fn series(collection: &ShotCollection, stat: Stat) -> Result<DistanceSeries, HistogramError> {
    match stat {
        Stat::Made => counts_series(&collection.distances(OutcomeFilter::Made)),
        Stat::Missed => counts_series(&collection.distances(OutcomeFilter::Missed)),
        Stat::All => counts_series(&collection.distances(OutcomeFilter::All)),
        Stat::MadePercentage => made_percentage(collection),
    }
}

fn counts_series(distances: &[i64]) -> Result<DistanceSeries, HistogramError> {
    let hist = DistanceHistogram::from_distances(distances)?;
    Ok(DistanceSeries {
        distances: hist.distances().to_vec(),
        values: hist.counts.iter().map(|&c| c as f64).collect(),
    })
}

/// Per-bin `made / (made + missed)`, with the ratio pinned to 0 when both
/// counts are 0. The shorter side is right-padded (+1 ft per slot, zero
/// count) so both series line up.
fn made_percentage(collection: &ShotCollection) -> Result<DistanceSeries, HistogramError> {
    let made = DistanceHistogram::from_distances(&collection.distances(OutcomeFilter::Made))?;
    let missed = DistanceHistogram::from_distances(&collection.distances(OutcomeFilter::Missed))?;

    let mut made_dists = made.distances().to_vec();
    let mut made_counts = made.counts.clone();
    let mut missed_counts = missed.counts.clone();

    while made_counts.len() < missed_counts.len() {
        let next = made_dists.last().copied().unwrap_or(0) + 1;
        made_dists.push(next);
        made_counts.push(0);
    }
    while missed_counts.len() < made_counts.len() {
        missed_counts.push(0);
    }

    let values = made_counts
        .iter()
        .zip(missed_counts.iter())
        .map(|(&m, &x)| {
            let attempts = m + x;
            if attempts == 0 {
                0.0
            } else {
                m as f64 / attempts as f64
            }
        })
        .collect();

    Ok(DistanceSeries { distances: made_dists, values })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shots::ShotEvent;

    fn collection(made: &[i64], missed: &[i64]) -> ShotCollection {
        let mut col = ShotCollection::new("BOS");
        for &d in made {
            col.push(ShotEvent {
                x: 0.0, y: 0.0, made: true, distance_ft: Some(d as f64), source_id: s!("m"),
            });
        }
        for &d in missed {
            col.push(ShotEvent {
                x: 0.0, y: 0.0, made: false, distance_ft: Some(d as f64), source_id: s!("m"),
            });
        }
        col
    }

    #[test]
    fn counts_cover_every_input() {
        let hist = DistanceHistogram::from_distances(&[3, 7, 7, 21, 0, 14]).unwrap();
        assert_eq!(hist.total(), 6);
        assert_eq!(hist.counts.len(), hist.bin_edges.len() - 1);
    }

    #[test]
    fn unit_bins_span_observed_range() {
        // Three shots at 5 ft, one each at 12 and 20; everything else 0.
        let hist = DistanceHistogram::from_distances(&[5, 5, 5, 12, 20]).unwrap();
        assert_eq!(hist.distances()[0], 5);
        assert_eq!(hist.counts[0], 3);
        assert_eq!(hist.counts[12 - 5], 1);
        assert_eq!(hist.counts[20 - 5], 1);
        let rest: u64 = hist
            .counts
            .iter()
            .enumerate()
            .filter(|(i, _)| ![0, 7, 15].contains(i))
            .map(|(_, &c)| c)
            .sum();
        assert_eq!(rest, 0);
    }

    #[test]
    fn empty_input_fails_loudly() {
        assert_eq!(
            DistanceHistogram::from_distances(&[]).unwrap_err(),
            HistogramError::Empty
        );
    }

    #[test]
    fn stat_parsing() {
        assert_eq!("made-percentage".parse::<Stat>().unwrap(), Stat::MadePercentage);
        let err = "points".parse::<Stat>().unwrap_err();
        assert_eq!(err, InvalidStatError(s!("points")));
    }

    #[test]
    fn made_percentage_pads_shorter_side() {
        // made spans 5..=6, missed spans 5..=9: made gets padded to match.
        let col = collection(&[5, 6], &[5, 7, 9]);
        let out = series(&col, Stat::MadePercentage).unwrap();
        assert_eq!(out.distances, vec![5, 6, 7, 8, 9]);
        assert_eq!(out.values[0], 0.5); // 1 made, 1 missed at 5 ft
        assert_eq!(out.values[1], 1.0); // 1 made, 0 missed at 6 ft
    }

    #[test]
    fn made_percentage_zero_over_zero_is_zero() {
        // 8 ft has no attempts at all: ratio must be exactly 0, not NaN.
        let col = collection(&[5, 9], &[5, 9]);
        let out = series(&col, Stat::MadePercentage).unwrap();
        let idx = out.distances.iter().position(|&d| d == 8).unwrap();
        assert_eq!(out.values[idx], 0.0);
        assert!(out.values.iter().all(|v| v.is_finite()));
    }

    #[test]
    fn all_pools_both_outcomes() {
        let col = collection(&[5], &[5, 6]);
        let out = series(&col, Stat::All).unwrap();
        assert_eq!(out.distances, vec![5, 6]);
        assert_eq!(out.values, vec![2.0, 1.0]);
    }
}
