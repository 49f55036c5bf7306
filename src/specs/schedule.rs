// src/specs/schedule.rs

use crate::core::html::{attr_value, next_balanced_block_ci, strip_comment_delims, to_lower};

use super::ParseError;

/// Extract the ordered match ids from a team's season schedule page.
///
/// Game rows carry a `<th scope="row">` cell; the box-score link is the
/// row's second `<a href>`, and the match id is the last path segment
/// minus its `.html` suffix.
pub fn parse_doc(doc: &str) -> Result<Vec<String>, ParseError> {
    let doc = strip_comment_delims(doc);

    let (ts, te) =
        next_balanced_block_ci(&doc, "table", 0).ok_or(ParseError::ScheduleMissing)?;
    let table = &doc[ts..te];

    let mut ids = Vec::new();

    let mut pos = 0usize;
    while let Some((tr_s, tr_e)) = next_balanced_block_ci(table, "tr", pos) {
        let tr = &table[tr_s..tr_e];
        pos = tr_e;

        let lc = to_lower(tr);
        let is_game = lc.contains(r#"<th scope="row""#) || lc.contains("<th scope=row");
        if !is_game {
            continue;
        }

        if let Some(id) = row_match_id(tr) {
            ids.push(id);
        }
    }

    Ok(ids)
}

/// Second <a href> of the row, e.g. "/boxscores/202310240DEN.html".
fn row_match_id(tr: &str) -> Option<String> {
    let href = anchor_hrefs(tr).nth(1)?;
    let segment = href.rsplit('/').next()?;
    let id = segment.split('.').next()?;
    if id.is_empty() { None } else { Some(id.to_string()) }
}

fn anchor_hrefs(tr: &str) -> impl Iterator<Item = &str> {
    let lc = to_lower(tr);
    let mut pos = 0usize;
    std::iter::from_fn(move || {
        loop {
            let rel = lc[pos..].find("<a")?;
            let start = pos + rel;
            pos = start + 2;
            // "<a " only; not <abbr> etc.
            if !matches!(lc.as_bytes().get(start + 2), Some(b) if b.is_ascii_whitespace()) {
                continue;
            }
            if let Some(href) = attr_value(&tr[start..], "href") {
                return Some(href);
            }
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extracts_match_ids_in_order() {
        let doc = r#"
            <html><body><!--
            <table class="stats_table">
              <tr><th>G</th><th>Date</th></tr>
              <tr>
                <th scope="row">1</th>
                <td><a href="/teams/BOS/2024.html">Boston</a></td>
                <td><a href="/boxscores/202310250NYK.html">Box Score</a></td>
              </tr>
              <tr>
                <th scope="row">2</th>
                <td><a href="/teams/BOS/2024.html">Boston</a></td>
                <td><a href="/boxscores/202310270MIA.html">Box Score</a></td>
              </tr>
              <tr><td>not a game row</td></tr>
            </table>
            --></body></html>
        "#;
        let ids = parse_doc(doc).unwrap();
        assert_eq!(ids, vec!["202310250NYK", "202310270MIA"]);
    }

    #[test]
    fn future_game_rows_without_boxscore_are_skipped() {
        let doc = r#"
            <table>
              <tr>
                <th scope="row">1</th>
                <td><a href="/teams/BOS/2024.html">Boston</a></td>
                <td></td>
              </tr>
            </table>
        "#;
        assert!(parse_doc(doc).unwrap().is_empty());
    }

    #[test]
    fn missing_table_is_fatal() {
        assert!(matches!(
            parse_doc("<html><p>no schedule</p></html>"),
            Err(ParseError::ScheduleMissing)
        ));
    }
}
