//! Message body formatting.
//!
//! Every renderer applies the same transformation: line breaks become
//! visual breaks, and any bare HTTP(S) URL becomes a link. A link token
//! starts at an `http://` or `https://` occurrence (mid-word occurrences
//! count) and extends to the next whitespace character.

/// One visual piece of a formatted message body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Segment {
    /// Literal text.
    Text(String),
    /// Line break.
    Break,
    /// HTTP(S) link, rendered as an anchor.
    Link(String),
}

/// Split `body` into renderable segments.
///
/// An empty body yields a single empty [`Segment::Text`] so it still
/// renders as a blank line.
pub fn segments(body: &str) -> Vec<Segment> {
    let mut out = Vec::new();
    for (i, line) in body.split('\n').enumerate() {
        if i > 0 {
            out.push(Segment::Break);
        }
        push_line(line, &mut out);
    }
    if out.is_empty() {
        out.push(Segment::Text(String::new()));
    }
    out
}

/// Byte offset of the first URL scheme in `line`, if any.
fn find_scheme(line: &str) -> Option<usize> {
    match (line.find("http://"), line.find("https://")) {
        (Some(a), Some(b)) => Some(a.min(b)),
        (a, b) => a.or(b),
    }
}

fn push_line(line: &str, out: &mut Vec<Segment>) {
    let mut rest = line;
    while let Some(start) = find_scheme(rest) {
        if start > 0 {
            out.push(Segment::Text(rest[..start].to_string()));
        }
        let tail = &rest[start..];
        let end = tail.find(char::is_whitespace).unwrap_or(tail.len());
        out.push(Segment::Link(tail[..end].to_string()));
        rest = &tail[end..];
    }
    if !rest.is_empty() {
        out.push(Segment::Text(rest.to_string()));
    }
}
