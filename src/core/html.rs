// src/core/html.rs

pub fn to_lower(s: &str) -> String {
    s.chars()
        .map(|c| {
            if c.is_ascii() {
                c.to_ascii_lowercase()
            } else {
                c
            }
        })
        .collect()
}

/// Find the next `<tag …>…</tag>` block starting at/after `from`,
/// counting nested openers of the same tag. Returns byte offsets of the
/// whole block. Case-insensitive; `tag` is the bare name ("div", "table").
pub fn next_balanced_block_ci(s: &str, tag: &str, from: usize) -> Option<(usize, usize)> {
    let lc = to_lower(s);
    let open = format!("<{}", to_lower(tag));
    let close = format!("</{}>", to_lower(tag));

    // Opener must be followed by whitespace, '>' or '/' ("<div" != "<divider").
    let is_opener_at = |i: usize| -> bool {
        matches!(
            lc.as_bytes().get(i + open.len()),
            Some(b' ') | Some(b'\t') | Some(b'\n') | Some(b'\r') | Some(b'>') | Some(b'/')
        )
    };

    let mut start = from;
    loop {
        let rel = lc.get(start..)?.find(&open)?;
        start += rel;
        if is_opener_at(start) {
            break;
        }
        start += open.len();
    }

    let mut depth = 1usize;
    let mut pos = start + open.len();
    while depth > 0 {
        let next_open = lc[pos..].find(&open).map(|i| pos + i);
        let next_close = lc[pos..].find(&close).map(|i| pos + i)?;

        match next_open {
            Some(o) if o < next_close && is_opener_at(o) => {
                depth += 1;
                pos = o + open.len();
            }
            Some(o) if o < next_close => {
                // lookalike tag; skip past it
                pos = o + open.len();
            }
            _ => {
                depth -= 1;
                pos = next_close + close.len();
            }
        }
    }
    Some((start, pos))
}

pub fn inner_after_open_tag(block: &str) -> String {
    if let Some(oe) = block.find('>') {
        if let Some(cs) = block.rfind('<') {
            if cs > oe {
                return block[oe + 1..cs].to_string();
            }
        }
    }
    s!()
}

/// Value of an attribute in a tag opener. Tolerates single quotes,
/// double quotes and unquoted values.
pub fn attr_value<'a>(opener: &'a str, name: &str) -> Option<&'a str> {
    let end = opener.find('>').unwrap_or(opener.len());
    let head = &opener[..end];
    let lc = to_lower(head); // ascii-only lowering keeps byte offsets stable
    let pat = format!("{}=", to_lower(name));

    let mut search = 0usize;
    while let Some(rel) = lc[search..].find(&pat) {
        let i = search + rel;
        let at_boundary = i > 0 && lc.as_bytes()[i - 1].is_ascii_whitespace();
        if !at_boundary {
            search = i + pat.len();
            continue;
        }
        let val = &head[i + pat.len()..];
        let out = match val.as_bytes().first() {
            Some(b'"') => val[1..].split('"').next().unwrap_or(""),
            Some(b'\'') => val[1..].split('\'').next().unwrap_or(""),
            _ => val.split_whitespace().next().unwrap_or(""),
        };
        return Some(out);
    }
    None
}

/// The live site hides some charts inside HTML comments; deleting the
/// delimiters (not the content) exposes them to the block scanner.
pub fn strip_comment_delims(s: &str) -> String {
    s.replace("<!--", "").replace("-->", "")
}

/// Split inner HTML on `<br>` / `<br/>` / `<br />` into text lines.
pub fn split_br(s: &str) -> Vec<String> {
    let lc = to_lower(s);
    let mut lines = Vec::new();
    let mut pos = 0usize;
    while let Some(rel) = lc[pos..].find("<br") {
        let start = pos + rel;
        lines.push(s[pos..start].to_string());
        pos = lc[start..]
            .find('>')
            .map(|i| start + i + 1)
            .unwrap_or(lc.len());
    }
    lines.push(s[pos..].to_string());
    lines
}

pub fn strip_tags<S: AsRef<str>>(s: S) -> String {
    let s = s.as_ref();

    let mut out = String::with_capacity(s.len());
    let mut in_tag = false;

    for ch in s.chars() {
        match ch {
            '<' => in_tag = true,
            '>' => in_tag = false,
            _ if !in_tag => out.push(ch),
            _ => {}
        }
    }
    super::sanitize::normalize_ws(&out)
}
