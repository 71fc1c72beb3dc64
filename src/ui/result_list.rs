//! Rendering of the result list in each view state.

use super::result_item::render_result;
use crate::search::ViewState;
use dockdockgo_search::SearchResponse;
use std::fmt::Write;

/// Placeholder rows shown while a request is in flight.
const LOADING_ROWS: usize = 3;

const IDLE_PROMPT: &str = "Start searching\n  Enter a keyword and press Enter to search.\n";

/// Render the whole result area for `state`.
pub fn render_state(state: &ViewState) -> String {
    match state {
        ViewState::Loading { .. } => {
            let mut out = String::new();
            for _ in 0..LOADING_ROWS {
                out.push_str("  ........\n");
            }
            out
        }
        ViewState::Failure(message) => format!("Error\n  {message}\n"),
        ViewState::Idle => IDLE_PROMPT.to_owned(),
        ViewState::Success(response) if response.results.is_empty() => {
            "No results found\n  Try searching with different keywords.\n".to_owned()
        }
        ViewState::Success(response) => render_response(response),
    }
}

fn render_response(response: &SearchResponse) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "Results for \"{}\": {}", response.query, response.total);
    for result in &response.results {
        out.push('\n');
        out.push_str(&render_result(result));
    }
    if let Some(line) = render_pagination(response) {
        out.push('\n');
        out.push_str(&line);
        out.push('\n');
    }
    out
}

/// The pagination line, or `None` when everything fits on one page.
pub fn render_pagination(response: &SearchResponse) -> Option<String> {
    let pages = response.total_pages();
    if pages <= 1 {
        return None;
    }
    let mut line = format!("Page {} of {pages}", response.page);
    match (response.has_previous_page(), response.has_next_page()) {
        (true, true) => line.push_str("  (:prev / :next)"),
        (true, false) => line.push_str("  (:prev)"),
        (false, true) => line.push_str("  (:next)"),
        (false, false) => {}
    }
    Some(line)
}

#[cfg(test)]
mod tests {
    use super::*;
    use dockdockgo_search::{SearchQuery, SearchResult};

    fn response(total: u64, page: u32, count: usize) -> SearchResponse {
        SearchResponse {
            results: (0..count)
                .map(|i| SearchResult {
                    id: i.to_string(),
                    title: format!("Result {i}"),
                    description: format!("Description {i}"),
                    url: format!("https://example.com/{i}"),
                    score: 0.5,
                    published_at: None,
                })
                .collect(),
            total,
            page,
            limit: 10,
            query: "compose".into(),
        }
    }

    #[test]
    fn loading_shows_placeholder_rows() {
        let text = render_state(&ViewState::Loading {
            query: SearchQuery::new("rust"),
        });
        assert_eq!(text.lines().count(), LOADING_ROWS);
    }

    #[test]
    fn failure_shows_message() {
        let text = render_state(&ViewState::Failure("no results".into()));
        assert!(text.starts_with("Error\n"));
        assert!(text.contains("no results"));
    }

    #[test]
    fn idle_prompts_for_query() {
        assert!(render_state(&ViewState::Idle).starts_with("Start searching"));
    }

    #[test]
    fn empty_results_show_hint() {
        let text = render_state(&ViewState::Success(response(0, 1, 0)));
        assert!(text.starts_with("No results found"));
    }

    #[test]
    fn results_show_header_and_items() {
        let text = render_state(&ViewState::Success(response(2, 1, 2)));
        assert!(text.starts_with("Results for \"compose\": 2\n"));
        assert!(text.contains("Result 0  [50%]"));
        assert!(text.contains("Result 1  [50%]"));
        assert!(!text.contains("Page "));
    }

    #[test]
    fn pagination_shown_for_multiple_pages() {
        let text = render_state(&ViewState::Success(response(25, 1, 10)));
        assert!(text.contains("Page 1 of 3  (:next)"));
    }

    #[test]
    fn pagination_hints_follow_position() {
        assert_eq!(
            render_pagination(&response(25, 2, 10)).as_deref(),
            Some("Page 2 of 3  (:prev / :next)")
        );
        assert_eq!(
            render_pagination(&response(25, 3, 5)).as_deref(),
            Some("Page 3 of 3  (:prev)")
        );
        assert_eq!(render_pagination(&response(10, 1, 10)), None);
    }
}
