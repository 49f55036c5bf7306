// src/store.rs
//
// Flat per-entity numeric arrays on disk: one directory per entity, one
// CSV file per array pair. This is the only persistence the pipeline has.

use std::{
    error::Error,
    fs,
    io::{self, BufWriter, Write},
    path::{Path, PathBuf},
};

use crate::config::consts::{DISTS_MADE_FILE, DISTS_MISSED_FILE};
use crate::shots::{OutcomeFilter, ShotCollection, ShotEvent};
use crate::stats::{series, DistanceSeries, HistogramError, Stat};

pub fn entity_dir(root: &Path, entity: &str) -> io::Result<PathBuf> {
    let dir = root.join(entity);
    fs::create_dir_all(&dir)?;
    Ok(dir)
}

/// Write one `(x[], y[])` pair as `x,y` rows under the entity's directory.
pub fn save_points(
    root: &Path,
    entity: &str,
    name: &str,
    xs: &[f64],
    ys: &[f64],
) -> io::Result<PathBuf> {
    let path = entity_dir(root, entity)?.join(join!(name, ".csv"));
    let mut w = BufWriter::new(fs::File::create(&path)?);
    for (x, y) in xs.iter().zip(ys.iter()) {
        writeln!(w, "{x},{y}")?;
    }
    w.flush()?;
    Ok(path)
}

/// Persist one page's events as made/missed coordinate files, mirroring
/// the per-match array pairs the rendering layer reads back.
pub fn save_shot_arrays(
    root: &Path,
    entity: &str,
    tag: Option<&str>,
    events: &[ShotEvent],
) -> io::Result<(PathBuf, PathBuf)> {
    let stem = |base: &str| match tag {
        Some(t) => format!("{base}_{t}"),
        None => s!(base),
    };

    let split = |made: bool| -> (Vec<f64>, Vec<f64>) {
        events
            .iter()
            .filter(|e| e.made == made)
            .map(|e| (e.x, e.y))
            .unzip()
    };

    let (mx, my) = split(true);
    let (sx, sy) = split(false);
    let made = save_points(root, entity, &stem("made"), &mx, &my)?;
    let missed = save_points(root, entity, &stem("missed"), &sx, &sy)?;
    Ok((made, missed))
}

/// Persist the entity's made/missed distance distributions. An outcome
/// with no distances yet simply isn't written.
pub fn save_dist_series(root: &Path, col: &ShotCollection) -> Result<(), Box<dyn Error>> {
    for (stat, file) in [(Stat::Made, DISTS_MADE_FILE), (Stat::Missed, DISTS_MISSED_FILE)] {
        match series(col, stat) {
            Ok(s) => {
                let path = entity_dir(root, col.entity())?.join(file);
                write_series(&path, &s)?;
            }
            Err(HistogramError::Empty) => {
                logd!("{}: no {:?} distances to save", col.entity(), stat);
            }
            Err(e) => return Err(e.into()),
        }
    }
    Ok(())
}

fn write_series(path: &Path, s: &DistanceSeries) -> io::Result<()> {
    let mut w = BufWriter::new(fs::File::create(path)?);
    for (d, v) in s.distances.iter().zip(s.values.iter()) {
        writeln!(w, "{d},{v}")?;
    }
    w.flush()
}

/* ---------------- loading (rendering-layer side) ---------------- */

pub fn load_points(path: &Path) -> Result<(Vec<f64>, Vec<f64>), Box<dyn Error>> {
    let text = fs::read_to_string(path)?;
    let mut xs = Vec::new();
    let mut ys = Vec::new();
    for line in text.lines() {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        let mut parts = line.splitn(2, ',');
        let x = parts.next().ok_or("malformed point row")?;
        let y = parts.next().ok_or("malformed point row")?;
        xs.push(x.trim().parse::<f64>()?);
        ys.push(y.trim().parse::<f64>()?);
    }
    Ok((xs, ys))
}

/// Pool every stored coordinate file for one entity and outcome filter,
/// the way the chart consumers scan an entity directory.
pub fn load_entity_points(
    root: &Path,
    entity: &str,
    filter: OutcomeFilter,
) -> Result<(Vec<f64>, Vec<f64>), Box<dyn Error>> {
    let dir = root.join(entity);
    let mut xs = Vec::new();
    let mut ys = Vec::new();

    let mut names: Vec<PathBuf> = fs::read_dir(&dir)?
        .filter_map(|e| e.ok().map(|e| e.path()))
        .collect();
    names.sort();

    for path in names {
        if !path.is_file() || path.extension().and_then(|s| s.to_str()) != Some("csv") {
            continue;
        }
        let stem = path
            .file_stem()
            .and_then(|s| s.to_str())
            .unwrap_or("");
        if stem.starts_with("dists") {
            continue;
        }
        let wanted = match filter {
            OutcomeFilter::Made => stem.starts_with("made"),
            OutcomeFilter::Missed => stem.starts_with("missed"),
            OutcomeFilter::All => true,
        };
        if !wanted {
            continue;
        }
        let (mut px, mut py) = load_points(&path)?;
        xs.append(&mut px);
        ys.append(&mut py);
    }
    Ok((xs, ys))
}

pub fn load_dist_series(path: &Path) -> Result<DistanceSeries, Box<dyn Error>> {
    let text = fs::read_to_string(path)?;
    let mut distances = Vec::new();
    let mut values = Vec::new();
    for line in text.lines() {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        let mut parts = line.splitn(2, ',');
        let d = parts.next().ok_or("malformed series row")?;
        let v = parts.next().ok_or("malformed series row")?;
        distances.push(d.trim().parse::<i64>()?);
        values.push(v.trim().parse::<f64>()?);
    }
    Ok(DistanceSeries { distances, values })
}
