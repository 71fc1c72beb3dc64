//! Rendering of a single search result.

use chrono::{DateTime, NaiveDate, NaiveDateTime};
use dockdockgo_search::SearchResult;
use std::fmt::Write;

/// Format an ISO-8601 timestamp or date as `YYYY-MM-DD`.
///
/// Accepts RFC 3339 timestamps, timestamps without an offset, and bare
/// dates. Anything else is returned unchanged.
pub fn format_published_date(raw: &str) -> String {
    let raw = raw.trim();
    let date = DateTime::parse_from_rfc3339(raw)
        .map(|dt| dt.date_naive())
        .or_else(|_| {
            NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f").map(|dt| dt.date())
        })
        .or_else(|_| NaiveDate::parse_from_str(raw, "%Y-%m-%d"));
    match date {
        Ok(date) => date.format("%Y-%m-%d").to_string(),
        Err(_) => raw.to_owned(),
    }
}

/// Render one result as a text block.
///
/// ```text
/// awesome-compose  [92%]
///   Sample Docker Compose files
///   https://github.com/docker/awesome-compose  (2024-03-01)
/// ```
pub fn render_result(result: &SearchResult) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{}  [{}%]", result.title, result.score_percent());
    if !result.description.is_empty() {
        let _ = writeln!(out, "  {}", result.description);
    }
    let _ = write!(out, "  {}", result.url);
    if let Some(published) = result.published_at.as_deref() {
        let _ = write!(out, "  ({})", format_published_date(published));
    }
    out.push('\n');
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn result(published_at: Option<&str>) -> SearchResult {
        SearchResult {
            id: "r1".into(),
            title: "awesome-compose".into(),
            description: "Sample Docker Compose files".into(),
            url: "https://github.com/docker/awesome-compose".into(),
            score: 0.92,
            published_at: published_at.map(String::from),
        }
    }

    #[test]
    fn formats_rfc3339() {
        assert_eq!(format_published_date("2024-03-01T12:00:00Z"), "2024-03-01");
        assert_eq!(
            format_published_date("2024-03-01T23:30:00+09:00"),
            "2024-03-01"
        );
    }

    #[test]
    fn formats_naive_timestamp_and_date() {
        assert_eq!(format_published_date("2024-03-01T12:00:00.123"), "2024-03-01");
        assert_eq!(format_published_date("2024-03-01"), "2024-03-01");
    }

    #[test]
    fn unknown_format_passes_through() {
        assert_eq!(format_published_date("last tuesday"), "last tuesday");
    }

    #[test]
    fn renders_title_badge_and_url() {
        let text = render_result(&result(None));
        assert!(text.starts_with("awesome-compose  [92%]\n"));
        assert!(text.contains("  Sample Docker Compose files\n"));
        assert!(text.ends_with("https://github.com/docker/awesome-compose\n"));
    }

    #[test]
    fn renders_published_date() {
        let text = render_result(&result(Some("2024-03-01T12:00:00Z")));
        assert!(text.contains("(2024-03-01)"));
    }

    #[test]
    fn skips_empty_description() {
        let mut r = result(None);
        r.description.clear();
        let text = render_result(&r);
        assert_eq!(text.lines().count(), 2);
    }
}
