// src/stats/mod.rs
//
// Pure functions over aggregated shot data. Safe to call per entity in
// parallel as long as each call reads an immutable collection snapshot.

pub mod density;
pub mod histogram;

pub use density::{
    estimate_density, normalize, normalize_points, DegenerateRangeError, DensityFitError,
    DensityGrid, KdeOptions,
};
pub use histogram::{series, DistanceHistogram, DistanceSeries, HistogramError, InvalidStatError, Stat};
