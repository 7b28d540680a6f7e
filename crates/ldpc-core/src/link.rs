//! HTTP `Link:` header parsing.
//!
//! Handles the subset of RFC 5988 syntax an LDP server emits:
//! `<uri>; rel="relation"`, with multiple comma-separated values per header
//! line. Unparseable entries are skipped rather than failing the response.

use crate::transport::HttpResponse;

/// Type URI an LDP server asserts for plain resources.
pub const LDP_RESOURCE: &str = "http://www.w3.org/ns/ldp#Resource";

/// A single link relation: `rel` plus target URI.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Link {
    pub rel: String,
    pub target: String,
}

/// All link relations declared by a response.
#[derive(Debug, Clone, Default)]
pub struct Links(Vec<Link>);

impl Links {
    /// Collect link relations from every `Link:` header of the response.
    pub fn from_response(response: &HttpResponse) -> Links {
        let mut links = Vec::new();
        for value in response.headers_named("Link") {
            parse_header_value(value, &mut links);
        }
        Links(links)
    }

    /// True when some link declares `rel` pointing at `target`.
    pub fn has_link(&self, rel: &str, target: &str) -> bool {
        self.0.iter().any(|l| l.rel == rel && l.target == target)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Link> {
        self.0.iter()
    }
}

/// Parse one header value, appending every well-formed entry to `out`.
fn parse_header_value(value: &str, out: &mut Vec<Link>) {
    for entry in split_entries(value) {
        if let Some(link) = parse_entry(entry) {
            out.push(link);
        }
    }
}

/// Split on top-level commas; commas inside `<...>` belong to the URI.
fn split_entries(value: &str) -> Vec<&str> {
    let mut entries = Vec::new();
    let mut depth = 0usize;
    let mut start = 0usize;
    for (i, c) in value.char_indices() {
        match c {
            '<' => depth += 1,
            '>' => depth = depth.saturating_sub(1),
            ',' if depth == 0 => {
                entries.push(&value[start..i]);
                start = i + 1;
            }
            _ => {}
        }
    }
    entries.push(&value[start..]);
    entries
}

/// Parse a single `<uri>; rel="type"` entry. Entries without a target URI
/// or a rel parameter are skipped.
fn parse_entry(entry: &str) -> Option<Link> {
    let entry = entry.trim();
    let rest = entry.strip_prefix('<')?;
    let (target, params) = rest.split_once('>')?;

    let rel = params.split(';').find_map(|param| {
        let (name, value) = param.split_once('=')?;
        if name.trim().eq_ignore_ascii_case("rel") {
            Some(value.trim().trim_matches('"').to_string())
        } else {
            None
        }
    })?;

    Some(Link {
        rel,
        target: target.trim().to_string(),
    })
}
