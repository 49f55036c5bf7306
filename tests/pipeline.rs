// tests/pipeline.rs
//
// Parse -> aggregate -> stats/store, end to end on synthetic pages.

use std::fs;
use std::path::PathBuf;

use shot_scrape::config::consts::{CANVAS_H, CANVAS_W};
use shot_scrape::shots::{OutcomeFilter, ShotCollection};
use shot_scrape::specs::shot_chart::{parse_doc, Category};
use shot_scrape::stats::{estimate_density, normalize_points, series, KdeOptions, Stat};
use shot_scrape::store;

fn temp_root(tag: &str) -> PathBuf {
    let dir = std::env::temp_dir().join(format!("shot_scrape_{tag}_{}", std::process::id()));
    let _ = fs::remove_dir_all(&dir);
    fs::create_dir_all(&dir).unwrap();
    dir
}

fn page(markers: &[(i64, i64, bool, i64)]) -> String {
    let mut body = String::from(r#"<div id="shots-home">"#);
    for &(x, y, made, dist) in markers {
        let outcome = if made { "make" } else { "miss" };
        body.push_str(&format!(
            r#"<div class="tooltip {outcome}" style="top:{y}px;left:{x}px;">
               q<br>shot from {dist} ft<br>score</div>"#
        ));
    }
    body.push_str("</div>");
    body
}

#[test]
fn events_fold_into_per_outcome_collections() {
    let doc_a = page(&[(45, 120, true, 5), (310, 80, false, 26)]);
    let doc_b = page(&[(100, 90, true, 8)]);

    let mut col = ShotCollection::new("BOS");
    for (doc, id) in [(doc_a, "m1"), (doc_b, "m2")] {
        let out = parse_doc(&doc, Category::Match, id, true).unwrap();
        col.extend(out.events);
    }

    assert_eq!(col.made().len(), 2);
    assert_eq!(col.missed().len(), 1);
    // arrival order preserved across batches
    assert_eq!(col.made()[0].source_id, "m1");
    assert_eq!(col.made()[1].source_id, "m2");
}

#[test]
fn histogram_scenario_from_parsed_distances() {
    let doc = page(&[
        (10, 10, true, 5),
        (20, 20, true, 5),
        (30, 30, true, 5),
        (40, 40, true, 12),
        (50, 50, true, 20),
    ]);
    let mut col = ShotCollection::new("BOS");
    col.extend(parse_doc(&doc, Category::Match, "m1", true).unwrap().events);

    let out = series(&col, Stat::Made).unwrap();
    assert_eq!(out.distances.first(), Some(&5));
    assert_eq!(out.distances.last(), Some(&20));
    assert_eq!(out.values[0], 3.0);
    let total: f64 = out.values.iter().sum();
    assert_eq!(total, 5.0);
}

#[test]
fn density_grid_from_aggregated_points() {
    let markers: Vec<(i64, i64, bool, i64)> = (0..40)
        .map(|i| (40 + i * 9, 30 + (i * 13) % 350, i % 3 != 0, 5 + i % 25))
        .collect();
    let doc = page(&markers);
    let mut col = ShotCollection::new("BOS");
    col.extend(parse_doc(&doc, Category::Match, "m1", true).unwrap().events);

    let opts = KdeOptions::default();
    let (xs, ys) = col.points(OutcomeFilter::All);
    let grid = estimate_density(&xs, &ys, &opts).unwrap();
    assert_eq!(grid.z.len(), opts.grid_res);
    assert!(grid.z.iter().flatten().all(|v| v.is_finite() && *v >= 0.0));

    // scatter path: same points mapped onto the canvas
    let (nx, ny) = normalize_points(&xs, &ys, CANVAS_W, CANVAS_H).unwrap();
    assert!(nx.iter().all(|&v| (0.0..=CANVAS_W).contains(&v)));
    assert!(ny.iter().all(|&v| (0.0..=CANVAS_H).contains(&v)));
}

#[test]
fn store_round_trips_points_and_series() {
    let root = temp_root("roundtrip");
    let doc = page(&[(45, 120, true, 5), (310, 80, false, 26), (12, 33, true, 2)]);
    let mut col = ShotCollection::new("BOS");
    let events = parse_doc(&doc, Category::Match, "m1", true).unwrap().events;

    store::save_shot_arrays(&root, "BOS", Some("m1"), &events).unwrap();
    col.extend(events);
    store::save_dist_series(&root, &col).unwrap();

    let (mx, my) = store::load_entity_points(&root, "BOS", OutcomeFilter::Made).unwrap();
    assert_eq!(mx, vec![45.0, 12.0]);
    assert_eq!(my, vec![120.0, 33.0]);

    let (ax, _) = store::load_entity_points(&root, "BOS", OutcomeFilter::All).unwrap();
    assert_eq!(ax.len(), 3);

    let made = store::load_dist_series(&root.join("BOS").join("dists.csv")).unwrap();
    assert_eq!(made.distances.first(), Some(&2));
    let total: f64 = made.values.iter().sum();
    assert_eq!(total, 2.0);

    let missed = store::load_dist_series(&root.join("BOS").join("dists_missed.csv")).unwrap();
    assert_eq!(missed.distances, vec![26]);

    let _ = fs::remove_dir_all(&root);
}

#[test]
fn dist_files_are_excluded_from_point_scans() {
    let root = temp_root("excludes");
    let doc = page(&[(1, 2, true, 3), (4, 5, false, 6)]);
    let mut col = ShotCollection::new("NYK");
    let events = parse_doc(&doc, Category::Match, "m1", true).unwrap().events;
    store::save_shot_arrays(&root, "NYK", Some("m1"), &events).unwrap();
    col.extend(events);
    store::save_dist_series(&root, &col).unwrap();

    // dists.csv rows must not leak into the coordinate pool
    let (xs, ys) = store::load_entity_points(&root, "NYK", OutcomeFilter::All).unwrap();
    assert_eq!(xs.len(), 2);
    assert_eq!(ys.len(), 2);

    let _ = fs::remove_dir_all(&root);
}
