//! Flattens the backend's HTML-bearing responses to plain text.
//!
//! The backend answers with small HTML fragments: paragraphs, bold runs,
//! and result tables. Rather than trusting and injecting that markup, the
//! transcript renders a flattened text form: block-level tags become line
//! breaks, table cells are joined with spacing, everything else is
//! stripped, entities are decoded. The same text goes to the clipboard on
//! copy.

/// Flatten an HTML fragment to display text.
///
/// Plain text passes through untouched (aside from entity decoding), so bot
/// messages generated locally don't need escaping.
pub fn flatten(markup: &str) -> String {
    let mut out = String::with_capacity(markup.len());
    let mut chars = markup.char_indices().peekable();

    while let Some((i, c)) = chars.next() {
        match c {
            '<' => {
                let rest = &markup[i + 1..];
                match rest.find('>') {
                    Some(end) => {
                        apply_tag(&rest[..end], &mut out);
                        // Consume up to and including '>'
                        while let Some(&(j, _)) = chars.peek() {
                            if j > i + end + 1 {
                                break;
                            }
                            chars.next();
                        }
                    }
                    // Unterminated tag: drop the rest, matching what a
                    // browser would (not) render
                    None => break,
                }
            }
            '&' => {
                let rest = &markup[i..];
                let (text, consumed) = decode_entity(rest);
                out.push_str(text);
                for _ in 0..consumed - 1 {
                    chars.next();
                }
            }
            _ => out.push(c),
        }
    }

    collapse_blank_lines(&out)
}

/// Translate one tag into its text effect.
fn apply_tag(tag: &str, out: &mut String) {
    // Handles "<br>", "<br/>", "<br />" and attribute-carrying tags alike
    let name = tag
        .trim_start_matches('/')
        .split([' ', '\t', '\n'])
        .next()
        .unwrap_or("")
        .trim_end_matches('/')
        .to_lowercase();
    let closing = tag.starts_with('/');

    match name.as_str() {
        // <br> and closing block tags break the line
        "br" => out.push('\n'),
        "p" | "tr" | "div" | "table" | "thead" | "tbody" => {
            if closing && !out.is_empty() && !out.ends_with('\n') {
                out.push('\n');
            }
        }
        // Cell boundaries become spacing within the row
        "td" | "th" => {
            if closing && !out.is_empty() && !out.ends_with('\n') {
                out.push_str("  ");
            }
        }
        // Inline tags (<b>, <strong>, <span>, ...) vanish
        _ => {}
    }
}

/// Decode a leading entity; returns the replacement and bytes consumed.
fn decode_entity(s: &str) -> (&'static str, usize) {
    const ENTITIES: [(&str, &str); 6] = [
        ("&amp;", "&"),
        ("&lt;", "<"),
        ("&gt;", ">"),
        ("&quot;", "\""),
        ("&#39;", "'"),
        ("&nbsp;", " "),
    ];

    for (entity, text) in ENTITIES {
        if s.starts_with(entity) {
            return (text, entity.len());
        }
    }
    ("&", 1)
}

/// Trim trailing whitespace per line, drop leading/trailing blank lines,
/// and collapse runs of blank lines to one.
fn collapse_blank_lines(text: &str) -> String {
    let mut lines: Vec<&str> = Vec::new();
    let mut last_blank = false;

    for line in text.lines() {
        let line = line.trim_end();
        if line.is_empty() {
            if !last_blank && !lines.is_empty() {
                lines.push("");
            }
            last_blank = true;
        } else {
            lines.push(line);
            last_blank = false;
        }
    }

    while lines.last() == Some(&"") {
        lines.pop();
    }

    lines.join("\n")
}
