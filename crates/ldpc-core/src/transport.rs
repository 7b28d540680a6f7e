//! Blocking HTTP GET over libcurl.
//!
//! A single synchronous request per call: the command layer builds the
//! Accept header, this module performs the transfer and hands back status,
//! headers, and the entity body as text. Status interpretation belongs to
//! the command, so any HTTP status is a successful `HttpResponse` here;
//! only transport-level failures (DNS, timeout, refused) become errors.

use anyhow::{Context, Result};
use std::str;
use std::time::Duration;

use crate::config::ClientConfig;

/// Response of a single GET: status, headers of the final hop, body text.
#[derive(Debug, Clone)]
pub struct HttpResponse {
    /// HTTP status code of the final response (after redirects).
    pub status: u32,
    /// Header name/value pairs of the final response, in arrival order.
    pub headers: Vec<(String, String)>,
    /// Entity body decoded as text, if the response carried one.
    pub body: Option<String>,
    /// Effective `Content-Type` reported by libcurl, if any.
    pub content_type: Option<String>,
}

impl HttpResponse {
    /// First header matching `name`, case-insensitive.
    pub fn first_header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(n, _)| n.eq_ignore_ascii_case(name))
            .map(|(_, v)| v.as_str())
    }

    /// All values of the header matching `name`, case-insensitive.
    pub fn headers_named<'a>(&'a self, name: &'a str) -> impl Iterator<Item = &'a str> {
        self.headers
            .iter()
            .filter(move |(n, _)| n.eq_ignore_ascii_case(name))
            .map(|(_, v)| v.as_str())
    }
}

/// Performs a GET request with the given Accept value.
///
/// Follows redirects; only the final response's headers are kept so that
/// header lookups never see an intermediate hop's metadata. Blocks the
/// calling thread for the duration of the transfer.
pub fn get(location: &str, accept: &str, cfg: &ClientConfig) -> Result<HttpResponse> {
    url::Url::parse(location).with_context(|| format!("invalid resource location: {location}"))?;

    let mut header_lines: Vec<String> = Vec::new();
    let mut body_bytes: Vec<u8> = Vec::new();

    let mut easy = curl::easy::Easy::new();
    easy.url(location).context("invalid URL")?;
    easy.get(true)?;
    easy.follow_location(true)?;
    easy.max_redirections(cfg.max_redirects)?;
    easy.connect_timeout(Duration::from_secs(cfg.connect_timeout_secs))?;
    easy.timeout(Duration::from_secs(cfg.timeout_secs))?;

    let mut list = curl::easy::List::new();
    list.append(&format!("Accept: {}", accept.trim()))?;
    easy.http_headers(list)?;

    {
        let mut transfer = easy.transfer();
        transfer.header_function(|data| {
            if let Ok(s) = str::from_utf8(data) {
                let s = s.trim_end();
                if s.starts_with("HTTP/") {
                    // New status line: a redirect hop. Drop what came before.
                    header_lines.clear();
                } else if !s.is_empty() {
                    header_lines.push(s.to_string());
                }
            }
            true
        })?;
        transfer.write_function(|data| {
            body_bytes.extend_from_slice(data);
            Ok(data.len())
        })?;
        transfer.perform().context("GET request failed")?;
    }

    let status = easy.response_code().context("no response code")?;
    let content_type = easy
        .content_type()
        .context("no content type info")?
        .map(str::to_string);

    let body = if body_bytes.is_empty() {
        None
    } else {
        Some(String::from_utf8_lossy(&body_bytes).into_owned())
    };

    Ok(HttpResponse {
        status,
        headers: parse_header_lines(&header_lines),
        body,
        content_type,
    })
}

/// Split raw `Name: value` header lines into name/value pairs.
fn parse_header_lines(lines: &[String]) -> Vec<(String, String)> {
    lines
        .iter()
        .filter_map(|line| {
            let (name, value) = line.split_once(':')?;
            Some((name.trim().to_string(), value.trim().to_string()))
        })
        .collect()
}
