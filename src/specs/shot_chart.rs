// src/specs/shot_chart.rs

use crate::core::html::{
    attr_value, inner_after_open_tag, next_balanced_block_ci, split_br,
    strip_comment_delims, strip_tags,
};
use crate::core::sanitize::normalize_entities;
use crate::shots::ShotEvent;

use super::ParseError;

/// Which shot-chart layout to expect. Match pages and player pages hold
/// the markers in different containers and lay their tooltip text out
/// differently.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Category {
    Match,
    Player,
}

impl Category {
    fn name(self) -> &'static str {
        match self {
            Category::Match => "match",
            Category::Player => "player",
        }
    }

    /// Index of the tooltip line that carries "... from N ft".
    fn tooltip_line(self) -> usize {
        match self {
            Category::Match => 1,
            Category::Player => 2,
        }
    }
}

/// One parsed page: events in marker order, plus a warning per marker
/// that had to be skipped.
#[derive(Debug)]
pub struct ShotChartPage {
    pub events: Vec<ShotEvent>,
    pub warnings: Vec<String>,
}

/// Parse one page's shot-chart markup.
///
/// `want_distance` selects the histogram path: tooltip distances are
/// extracted and a marker without a usable one is skipped (with a
/// warning). A malformed marker never aborts the rest of the page;
/// a missing container does, since no events can be produced.
pub fn parse_doc(
    doc: &str,
    category: Category,
    source_id: &str,
    want_distance: bool,
) -> Result<ShotChartPage, ParseError> {
    let t = std::time::Instant::now();

    let owned;
    let doc = match category {
        Category::Match => doc,
        Category::Player => {
            // Player charts are wrapped in HTML comments on the live site.
            owned = strip_comment_delims(doc);
            owned.as_str()
        }
    };

    let (cs, ce) = find_container(doc, category)
        .ok_or(ParseError::ContainerMissing { category: category.name() })?;
    let container = &doc[cs..ce];

    let mut events = Vec::new();
    let mut warnings = Vec::new();

    let mut pos = container.find('>').map(|i| i + 1).unwrap_or(0);
    while let Some((ms, me)) = next_balanced_block_ci(container, "div", pos) {
        let marker = &container[ms..me];
        pos = me;

        let class = attr_value(marker, "class").unwrap_or("");
        if !class.starts_with("tooltip") {
            continue;
        }

        match parse_marker(marker, class, category, source_id, want_distance) {
            Ok(event) => events.push(event),
            Err(why) => warnings.push(format!("{source_id}: skipped marker: {why}")),
        }
    }

    logd!(
        "{}: parsed {} shot markers ({} skipped) in {:?}",
        source_id,
        events.len(),
        warnings.len(),
        t.elapsed()
    );

    Ok(ShotChartPage { events, warnings })
}

/* ---------------- helpers ---------------- */

fn find_container(doc: &str, category: Category) -> Option<(usize, usize)> {
    let mut pos = 0usize;
    while let Some((s, e)) = next_balanced_block_ci(doc, "div", pos) {
        let opener = &doc[s..e];
        let hit = match category {
            // Match pages: <div id="shots-...">
            Category::Match => attr_value(opener, "id")
                .map(|id| id.starts_with("shots-"))
                .unwrap_or(false),
            // Player pages: <div class="shot-area ...">
            Category::Player => attr_value(opener, "class")
                .map(|c| c.split_whitespace().any(|t| t == "shot-area"))
                .unwrap_or(false),
        };
        if hit {
            return Some((s, e));
        }
        // descend instead of skipping the whole block; the container may
        // be nested inside wrappers
        pos = s + 4;
    }
    None
}

fn parse_marker(
    marker: &str,
    class: &str,
    category: Category,
    source_id: &str,
    want_distance: bool,
) -> Result<ShotEvent, String> {
    let style = attr_value(marker, "style").ok_or("no style attribute")?;
    let (x, y) = parse_position(style)?;

    let made = !class.split_whitespace().any(|t| t == "miss");

    let distance_ft = if want_distance {
        Some(parse_tooltip_distance(marker, category)? as f64)
    } else {
        None
    };

    Ok(ShotEvent { x: x as f64, y: y as f64, made, distance_ft, source_id: s!(source_id) })
}

/// Pixel position from the inline style: `top:<N>px` and `left:<N>px`
/// as two semicolon-separated declarations, in either order.
fn parse_position(style: &str) -> Result<(i64, i64), String> {
    let mut top: Option<i64> = None;
    let mut left: Option<i64> = None;

    for decl in style.split(';') {
        let mut parts = decl.splitn(2, ':');
        let key = parts.next().unwrap_or("").trim().to_ascii_lowercase();
        let val = parts.next().unwrap_or("").trim();
        if key != "top" && key != "left" {
            continue;
        }
        let px: i64 = val
            .trim_end_matches("px")
            .trim()
            .parse()
            .map_err(|_| format!("non-numeric {key} in style {style:?}"))?;
        if key == "top" { top = Some(px) } else { left = Some(px) }
    }

    match (left, top) {
        (Some(x), Some(y)) => Ok((x, y)),
        _ => Err(format!("style {style:?} missing top/left")),
    }
}

/// Distance in feet from the tooltip text. Lines are separated by <br>;
/// the distance is the second-to-last word of the category's line
/// ("Jayson Tatum made 3-pointer from 26 ft").
fn parse_tooltip_distance(marker: &str, category: Category) -> Result<i64, String> {
    let inner = inner_after_open_tag(marker);
    let lines = split_br(&inner);
    let idx = category.tooltip_line();

    let line = lines
        .get(idx)
        .map(|l| strip_tags(normalize_entities(l)))
        .ok_or_else(|| format!("tooltip line {idx} out of range ({} lines)", lines.len()))?;

    let words: Vec<&str> = line.split_whitespace().collect();
    if words.len() < 2 {
        return Err(format!("tooltip line {line:?} too short"));
    }
    let token = words[words.len() - 2];
    token
        .parse()
        .map_err(|_| format!("non-numeric distance {token:?} in {line:?}"))
}

#[cfg(test)]
mod tests {
    use super::*;

    const MATCH_PAGE: &str = r#"
        <html><body>
        <div class="shotchart">
          <div id="shots-BOS">
            <div class="tooltip make" style="top:120px;left:45px">
              Q1, 10:00 remaining<br>Jayson Tatum made 2-pointer from 5 ft<br>BOS leads 2-0
            </div>
            <div class="tooltip miss" style="left:300px;top:88px">
              Q2, 3:42 remaining<br>Derrick White missed 3-pointer from 26 ft<br>BOS trails 40-41
            </div>
            <div class="legend">not a marker</div>
          </div>
        </div>
        </body></html>
    "#;

    #[test]
    fn parses_match_markers() {
        let page = parse_doc(MATCH_PAGE, Category::Match, "m1", false).unwrap();
        assert_eq!(page.events.len(), 2);
        assert!(page.warnings.is_empty());

        let first = &page.events[0];
        assert_eq!((first.x, first.y), (45.0, 120.0));
        assert!(first.made);
        assert_eq!(first.distance_ft, None);

        // declaration order reversed on the second marker
        let second = &page.events[1];
        assert_eq!((second.x, second.y), (300.0, 88.0));
        assert!(!second.made);
    }

    #[test]
    fn match_tooltip_distance_on_line_one() {
        let page = parse_doc(MATCH_PAGE, Category::Match, "m1", true).unwrap();
        assert_eq!(page.events[0].distance_ft, Some(5.0));
        assert_eq!(page.events[1].distance_ft, Some(26.0));
    }

    #[test]
    fn player_chart_hidden_in_comments() {
        let doc = r#"
            <html><body><!--
            <div class="shot-area">
              <div class="tooltip make" style="top:60px;left:200px">
                Oct 25, vs LAL<br>1st Qtr, 8:15 remaining<br>made 2-pointer from 15 ft
              </div>
            </div>
            --></body></html>
        "#;
        let page = parse_doc(doc, Category::Player, "curryst01", true).unwrap();
        assert_eq!(page.events.len(), 1);
        assert_eq!(page.events[0].distance_ft, Some(15.0));
    }

    #[test]
    fn missing_container_is_fatal() {
        let err = parse_doc("<html><div class=x></div></html>", Category::Match, "m1", false)
            .unwrap_err();
        assert!(matches!(err, ParseError::ContainerMissing { category: "match" }));
    }

    #[test]
    fn malformed_marker_skipped_with_warning() {
        let doc = r#"
            <div id="shots-X">
              <div class="tooltip make" style="top:abcpx;left:45px">x<br>from 5 ft<br>y</div>
              <div class="tooltip miss" style="top:10px;left:20px">x<br>missed from 8 ft<br>y</div>
            </div>
        "#;
        let page = parse_doc(doc, Category::Match, "m1", false).unwrap();
        assert_eq!(page.events.len(), 1);
        assert_eq!(page.warnings.len(), 1);
        assert!(page.warnings[0].contains("non-numeric"));
    }

    #[test]
    fn distance_required_skips_short_tooltips() {
        let doc = r#"
            <div id="shots-X">
              <div class="tooltip make" style="top:10px;left:20px">only one line</div>
            </div>
        "#;
        let page = parse_doc(doc, Category::Match, "m1", true).unwrap();
        assert!(page.events.is_empty());
        assert_eq!(page.warnings.len(), 1);
        assert!(page.warnings[0].contains("out of range"));
    }
}
