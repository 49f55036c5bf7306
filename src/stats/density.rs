// src/stats/density.rs

use std::f64::consts::PI;

use thiserror::Error;

use crate::config::consts::{
    COURT_X_MAX, COURT_X_MIN, COURT_Y_MAX, COURT_Y_MIN, GRID_RES, KDE_BANDWIDTH,
};

/// Degenerate point set: a density surface can't be fit.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum DensityFitError {
    #[error("need at least 2 distinct points, got {0}")]
    TooFewPoints(usize),

    #[error("zero variance on the {0} axis")]
    ZeroVariance(&'static str),

    #[error("grid resolution {0} too small")]
    GridTooSmall(usize),
}

/// Zero-width normalization range (hi == lo).
#[derive(Debug, Error, PartialEq, Eq)]
#[error("degenerate range: lo == hi")]
pub struct DegenerateRangeError;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct KdeOptions {
    pub bandwidth: f64,
    pub grid_res: usize,
    pub x_min: f64,
    pub x_max: f64,
    pub y_min: f64,
    pub y_max: f64,
}

impl Default for KdeOptions {
    fn default() -> Self {
        Self {
            bandwidth: KDE_BANDWIDTH,
            grid_res: GRID_RES,
            x_min: COURT_X_MIN,
            x_max: COURT_X_MAX,
            y_min: COURT_Y_MIN,
            y_max: COURT_Y_MAX,
        }
    }
}

/// Square-rooted density estimate over a fixed court grid.
/// `z[i][j]` belongs to `(x_grid[j], y_grid[i])`.
#[derive(Clone, Debug, PartialEq)]
pub struct DensityGrid {
    pub x_grid: Vec<f64>,
    pub y_grid: Vec<f64>,
    pub z: Vec<Vec<f64>>,
}

/// Fit an Epanechnikov kernel density model to `(xs, ys)` and evaluate it
/// on the fixed evaluation box — not the data's own extent, so the visual
/// frame stays stable across entities.
///
/// Values are the square root of the density (the downstream color scale
/// expects the variance-stabilized values; this is part of the contract).
pub fn estimate_density(
    xs: &[f64],
    ys: &[f64],
    opts: &KdeOptions,
) -> Result<DensityGrid, DensityFitError> {
    if opts.grid_res < 2 {
        return Err(DensityFitError::GridTooSmall(opts.grid_res));
    }

    let n = xs.len().min(ys.len());
    let distinct = distinct_points(&xs[..n], &ys[..n]);
    if distinct < 2 {
        return Err(DensityFitError::TooFewPoints(distinct));
    }
    if xs[..n].iter().all(|&v| v == xs[0]) {
        return Err(DensityFitError::ZeroVariance("x"));
    }
    if ys[..n].iter().all(|&v| v == ys[0]) {
        return Err(DensityFitError::ZeroVariance("y"));
    }

    let x_grid = linspace(opts.x_min, opts.x_max, opts.grid_res);
    let y_grid = linspace(opts.y_min, opts.y_max, opts.grid_res);

    // Normalized 2D Epanechnikov kernel: K(r) = 2/(pi h^2) (1 - r^2/h^2)
    // inside the bandwidth disc, 0 outside. Density = mean over samples.
    let h2 = opts.bandwidth * opts.bandwidth;
    let norm = 2.0 / (PI * h2);

    let mut z = vec![vec![0.0f64; opts.grid_res]; opts.grid_res];
    for (i, &gy) in y_grid.iter().enumerate() {
        for (j, &gx) in x_grid.iter().enumerate() {
            let mut acc = 0.0;
            for k in 0..n {
                let dx = gx - xs[k];
                let dy = gy - ys[k];
                let r2 = dx * dx + dy * dy;
                if r2 < h2 {
                    acc += 1.0 - r2 / h2;
                }
            }
            z[i][j] = (acc * norm / n as f64).sqrt();
        }
    }

    Ok(DensityGrid { x_grid, y_grid, z })
}

/// Linear remap of `v` from `[lo, hi]` onto `[new_lo, new_hi]`.
pub fn normalize(
    v: f64,
    lo: f64,
    hi: f64,
    new_lo: f64,
    new_hi: f64,
) -> Result<f64, DegenerateRangeError> {
    if hi == lo {
        return Err(DegenerateRangeError);
    }
    Ok((v - lo) / (hi - lo) * (new_hi - new_lo) + new_lo)
}

/// Per-axis min-max normalization for scatter rendering: x onto `[0, w]`,
/// y onto `[0, h]`, each axis scaled independently from its observed range.
pub fn normalize_points(
    xs: &[f64],
    ys: &[f64],
    w: f64,
    h: f64,
) -> Result<(Vec<f64>, Vec<f64>), DegenerateRangeError> {
    let (x_lo, x_hi) = min_max(xs).ok_or(DegenerateRangeError)?;
    let (y_lo, y_hi) = min_max(ys).ok_or(DegenerateRangeError)?;

    let map = |vals: &[f64], lo: f64, hi: f64, top: f64| {
        vals.iter()
            .map(|&v| normalize(v, lo, hi, 0.0, top))
            .collect::<Result<Vec<f64>, _>>()
    };

    Ok((map(xs, x_lo, x_hi, w)?, map(ys, y_lo, y_hi, h)?))
}

/* ---------------- helpers ---------------- */

fn linspace(lo: f64, hi: f64, n: usize) -> Vec<f64> {
    let step = (hi - lo) / (n - 1) as f64;
    (0..n)
        .map(|i| if i == n - 1 { hi } else { lo + step * i as f64 })
        .collect()
}

fn distinct_points(xs: &[f64], ys: &[f64]) -> usize {
    let mut seen: Vec<(f64, f64)> = Vec::new();
    for (&x, &y) in xs.iter().zip(ys.iter()) {
        if !seen.iter().any(|&(sx, sy)| sx == x && sy == y) {
            seen.push((x, y));
        }
    }
    seen.len()
}

fn min_max(vals: &[f64]) -> Option<(f64, f64)> {
    let first = *vals.first()?;
    let mut lo = first;
    let mut hi = first;
    for &v in &vals[1..] {
        if v < lo { lo = v }
        if v > hi { hi = v }
    }
    Some((lo, hi))
}
