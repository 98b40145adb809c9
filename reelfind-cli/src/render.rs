//! Text rendering of search views

use colored::Colorize;
use reelfind_core::{InputKind, SearchMode, SearchView};

pub const PAGE_HEADING: &str = "Movie Recommendation Search";
pub const RESULTS_HEADING: &str = "Results:";
pub const LOADING: &str = "Loading results...";
pub const SUGGESTIONS_NOTICE: &str = "No exact match found, here are some suggestions:";
pub const NO_RESULTS: &str = "No results found.";

/// Banner shown when the interactive prompt starts
pub fn render_banner(base_url: &str) -> String {
    format!("{}\n{} {}", PAGE_HEADING.bold(), "Searching".green(), base_url)
}

/// Render the results panel for a view.
pub fn render_view(view: &SearchView) -> String {
    let mut out = vec![RESULTS_HEADING.bold().to_string()];

    if view.loading {
        out.push(LOADING.dimmed().to_string());
    } else if view.results.is_empty() {
        out.push(NO_RESULTS.dimmed().to_string());
    } else {
        if !view.exact_match {
            out.push(SUGGESTIONS_NOTICE.red().to_string());
        }
        for row in &view.results {
            out.push(format!("  • {}", row));
        }
    }

    out.join("\n")
}

/// Mode selector listing: name, label and input kind
pub fn render_modes(current: Option<SearchMode>) -> String {
    SearchMode::all()
        .iter()
        .map(|mode| {
            let marker = if Some(*mode) == current { "*" } else { " " };
            format!(
                "{} {:<9} {} ({})",
                marker,
                mode.as_str().cyan(),
                mode.label(),
                mode.input()
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Input prompt for the interactive loop
pub fn render_prompt(mode: SearchMode) -> String {
    match mode.input() {
        InputKind::Text => format!("[{}] {}> ", mode, mode.placeholder()),
        InputKind::Number { min, max, step } => {
            format!("[{}] {} ({}-{}, step {})> ", mode, mode.placeholder(), min, max, step)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use reelfind_core::SearchResult;

    fn view(loading: bool, exact_match: bool, rows: &[&str]) -> SearchView {
        colored::control::set_override(false);
        SearchView {
            mode: SearchMode::Title,
            value: "Matrx".to_string(),
            loading,
            exact_match,
            results: SearchResult::new(rows.iter().map(|s| s.to_string()).collect()),
        }
    }

    #[test]
    fn test_loading_hides_results() {
        let out = render_view(&view(true, false, &["The Matrix"]));
        assert_eq!(out, "Results:\nLoading results...");
    }

    #[test]
    fn test_empty_results() {
        let out = render_view(&view(false, true, &[]));
        assert_eq!(out, "Results:\nNo results found.");
    }

    #[test]
    fn test_suggestions_notice() {
        let out = render_view(&view(false, false, &["The Matrix", "Matrix Reloaded"]));
        assert_eq!(
            out,
            "Results:\nNo exact match found, here are some suggestions:\n  • The Matrix\n  • Matrix Reloaded"
        );
    }

    #[test]
    fn test_exact_results_in_order() {
        let out = render_view(&view(false, true, &["b", "a"]));
        assert_eq!(out, "Results:\n  • b\n  • a");
    }

    #[test]
    fn test_banner_leads_with_page_heading() {
        colored::control::set_override(false);
        let out = render_banner("http://127.0.0.1:5000");
        assert_eq!(
            out,
            "Movie Recommendation Search\nSearching http://127.0.0.1:5000"
        );
    }

    #[test]
    fn test_prompts() {
        colored::control::set_override(false);
        assert_eq!(render_prompt(SearchMode::Title), "[title] Enter title> ");
        assert_eq!(
            render_prompt(SearchMode::Rating),
            "[rating] Enter rating (0-10, step 0.1)> "
        );
    }

    #[test]
    fn test_modes_listing_marks_current() {
        colored::control::set_override(false);
        let out = render_modes(Some(SearchMode::Budget));
        let lines: Vec<&str> = out.lines().collect();
        assert_eq!(lines.len(), 5);
        assert!(lines[2].starts_with("* budget"));
        assert!(lines[1].contains("number in [0, 10], step 0.1"));
    }
}
