// benches/shot_chart.rs
use criterion::{black_box, criterion_group, criterion_main, Criterion};

use shot_scrape::specs::shot_chart::{parse_doc, Category};
use shot_scrape::stats::{estimate_density, KdeOptions};

/// Synthetic match page with `n` markers, shaped like the live markup.
fn sample_page(n: usize) -> String {
    let mut body = String::from(r#"<html><body><div id="shots-home">"#);
    for i in 0..n {
        let x = 20 + (i * 7) % 460;
        let y = 10 + (i * 11) % 420;
        let outcome = if i % 2 == 0 { "make" } else { "miss" };
        let dist = 1 + (i * 3) % 30;
        body.push_str(&format!(
            r#"<div class="tooltip {outcome}" style="top:{y}px;left:{x}px;">1st Qtr, 10:00 remaining<br>Somebody made 2-pointer from {dist} ft<br>Tied 0-0</div>"#
        ));
    }
    body.push_str("</div></body></html>");
    body
}

fn bench_parse(c: &mut Criterion) {
    let doc = sample_page(500);

    c.bench_function("parse_match_500_markers", |b| {
        b.iter(|| {
            let page = parse_doc(black_box(&doc), Category::Match, "m1", true).unwrap();
            black_box(page.events.len())
        })
    });
}

fn bench_density(c: &mut Criterion) {
    let xs: Vec<f64> = (0..300).map(|i| (20 + (i * 7) % 460) as f64).collect();
    let ys: Vec<f64> = (0..300).map(|i| (10 + (i * 11) % 420) as f64).collect();
    let opts = KdeOptions::default();

    c.bench_function("density_300_points_200_grid", |b| {
        b.iter(|| {
            let grid = estimate_density(black_box(&xs), black_box(&ys), &opts).unwrap();
            black_box(grid.z[100][100])
        })
    });
}

criterion_group!(benches, bench_parse, bench_density);
criterion_main!(benches);
