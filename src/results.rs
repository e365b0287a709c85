/// Result list building and display truncation helpers

use crate::domain::Category;
use crate::storage::Snapshot;
use url::Url;

const ELLIPSIS: &str = "...";

/// Characters of the raw string kept when a URL cannot be parsed
pub const RAW_URL_DISPLAY_LEN: usize = 30;

/// One row of the rendered bookmark list
#[derive(Debug, Clone, PartialEq)]
pub struct ResultEntry {
    pub category: Category,
    pub url: String,
    pub description: String,
}

/// Build the ordered list of bookmarks to show.
///
/// A non-empty query searches every category (URL and description,
/// case-insensitive) and ignores `selected`. An empty query lists the
/// selected category, or all of them when nothing is selected. Output is
/// ordered by category, then by save order.
pub fn build_results(
    snapshot: &Snapshot,
    selected: Option<Category>,
    query: &str,
) -> Vec<ResultEntry> {
    let needle = query.to_lowercase();
    let searching = !query.is_empty();

    snapshot
        .iter()
        .filter(|(category, _)| searching || selected.map_or(true, |s| s == *category))
        .flat_map(|(category, bookmarks)| {
            bookmarks.iter().map(move |b| (category, b))
        })
        .filter(|(_, b)| {
            !searching
                || b.description.to_lowercase().contains(&needle)
                || b.url.to_lowercase().contains(&needle)
        })
        .map(|(category, b)| ResultEntry {
            category,
            url: b.url.clone(),
            description: b.description.clone(),
        })
        .collect()
}

/// Short form of a URL: `host/first-segment/...`
///
/// Examples:
/// - https://chat.mistral.ai/c/abc/def → chat.mistral.ai/c/...
/// - https://claude.ai/chat/42 → claude.ai/chat
/// - https://claude.ai/ → claude.ai/
///
/// Anything unparsable is cut to its first 30 characters plus an ellipsis.
pub fn truncate_url(url: &str) -> String {
    let host_and_segments = Url::parse(url).ok().and_then(|parsed| {
        let host = parsed.host_str()?.to_string();
        let segments: Vec<String> = parsed
            .path_segments()
            .map(|s| s.filter(|seg| !seg.is_empty()).map(str::to_string).collect())
            .unwrap_or_default();
        Some((host, segments))
    });

    match host_and_segments {
        Some((host, segments)) => match segments.first() {
            None => format!("{}/", host),
            Some(first) if segments.len() > 1 => format!("{}/{}/{}", host, first, ELLIPSIS),
            Some(first) => format!("{}/{}", host, first),
        },
        None => {
            let head: String = url.chars().take(RAW_URL_DISPLAY_LEN).collect();
            format!("{}{}", head, ELLIPSIS)
        }
    }
}

/// Cut `text` to `max_len` characters, adding an ellipsis when something was removed
pub fn truncate_text(text: &str, max_len: usize) -> String {
    if text.is_empty() {
        return String::new();
    }
    if text.chars().count() <= max_len {
        return text.to_string();
    }

    let head: String = text.chars().take(max_len).collect();
    format!("{}{}", head, ELLIPSIS)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bookmark::Bookmark;

    fn sample_snapshot() -> Snapshot {
        let mut snapshot = Snapshot::new();
        snapshot.set_bookmarks(
            Category::Claude,
            vec![Bookmark::new("https://claude.ai/c/2", "poem draft")],
        );
        snapshot.set_bookmarks(
            Category::ChatGpt,
            vec![Bookmark::new("https://chatgpt.com/c/1", "math help")],
        );
        snapshot
    }

    fn urls(results: &[ResultEntry]) -> Vec<&str> {
        results.iter().map(|r| r.url.as_str()).collect()
    }

    #[test]
    fn test_search_matches_description() {
        let results = build_results(&sample_snapshot(), None, "math");

        assert_eq!(urls(&results), vec!["https://chatgpt.com/c/1"]);
        assert_eq!(results[0].category, Category::ChatGpt);
        assert_eq!(results[0].description, "math help");
    }

    #[test]
    fn test_browse_all_in_category_order() {
        let results = build_results(&sample_snapshot(), None, "");

        assert_eq!(urls(&results), vec!["https://chatgpt.com/c/1", "https://claude.ai/c/2"]);
    }

    #[test]
    fn test_browse_selected_category_only() {
        let results = build_results(&sample_snapshot(), Some(Category::Claude), "");

        assert_eq!(urls(&results), vec!["https://claude.ai/c/2"]);
    }

    #[test]
    fn test_browse_empty_selected_category() {
        let results = build_results(&sample_snapshot(), Some(Category::Gemini), "");

        assert!(results.is_empty());
    }

    #[test]
    fn test_search_ignores_selected_category() {
        let results = build_results(&sample_snapshot(), Some(Category::Claude), "math");

        assert_eq!(urls(&results), vec!["https://chatgpt.com/c/1"]);
    }

    #[test]
    fn test_search_is_case_insensitive() {
        assert_eq!(build_results(&sample_snapshot(), None, "POEM").len(), 1);
        assert_eq!(build_results(&sample_snapshot(), None, "Claude.AI").len(), 1);
    }

    #[test]
    fn test_search_matches_url() {
        let results = build_results(&sample_snapshot(), None, "chatgpt.com/c");

        assert_eq!(urls(&results), vec!["https://chatgpt.com/c/1"]);
    }

    #[test]
    fn test_search_no_match() {
        assert!(build_results(&sample_snapshot(), None, "recipe").is_empty());
    }

    #[test]
    fn test_search_keeps_category_then_insertion_order() {
        let mut snapshot = Snapshot::new();
        snapshot.set_bookmarks(
            Category::Gemini,
            vec![Bookmark::new("https://gemini.google.com/app/1", "rust notes")],
        );
        snapshot.set_bookmarks(
            Category::ChatGpt,
            vec![
                Bookmark::new("https://chatgpt.com/c/b", "rust lifetimes"),
                Bookmark::new("https://chatgpt.com/c/x", "cooking"),
                Bookmark::new("https://chatgpt.com/c/a", "Rust traits"),
            ],
        );

        let results = build_results(&snapshot, None, "rust");

        assert_eq!(
            urls(&results),
            vec!["https://chatgpt.com/c/b", "https://chatgpt.com/c/a", "https://gemini.google.com/app/1"]
        );
    }

    #[test]
    fn test_truncate_url_multiple_segments() {
        assert_eq!(truncate_url("https://chat.mistral.ai/c/abc/def"), "chat.mistral.ai/c/...");
    }

    #[test]
    fn test_truncate_url_root() {
        assert_eq!(truncate_url("https://claude.ai/"), "claude.ai/");
        assert_eq!(truncate_url("https://claude.ai"), "claude.ai/");
    }

    #[test]
    fn test_truncate_url_single_segment() {
        assert_eq!(truncate_url("https://claude.ai/new"), "claude.ai/new");
        assert_eq!(truncate_url("https://claude.ai/new?q=1#frag"), "claude.ai/new");
    }

    #[test]
    fn test_truncate_url_unparsable() {
        assert_eq!(truncate_url("not a url"), "not a url...");
        assert_eq!(
            truncate_url("this is definitely not a parsable url at all"),
            "this is definitely not a parsa..."
        );
    }

    #[test]
    fn test_truncate_text() {
        assert_eq!(truncate_text("hello world", 5), "hello...");
        assert_eq!(truncate_text("hi", 5), "hi");
        assert_eq!(truncate_text("hello", 5), "hello");
        assert_eq!(truncate_text("", 5), "");
    }

    #[test]
    fn test_truncate_text_counts_characters() {
        assert_eq!(truncate_text("héllo wörld", 7), "héllo w...");
    }
}
