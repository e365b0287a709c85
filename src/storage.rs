/// In-memory bookmark snapshot and the pure save/delete transitions over it

use crate::bookmark::Bookmark;
use crate::domain::Category;
use std::collections::BTreeMap;

/// Every category's bookmark list as last loaded or written.
///
/// Categories with nothing stored read as empty. Iteration always follows
/// the fixed category order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Snapshot {
    lists: BTreeMap<Category, Vec<Bookmark>>,
}

impl Snapshot {
    pub fn new() -> Self {
        Snapshot {
            lists: BTreeMap::new(),
        }
    }

    pub fn bookmarks(&self, category: Category) -> &[Bookmark] {
        self.lists.get(&category).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn set_bookmarks(&mut self, category: Category, bookmarks: Vec<Bookmark>) {
        self.lists.insert(category, bookmarks);
    }

    /// Copy of this snapshot with one category replaced
    pub fn with_bookmarks(&self, category: Category, bookmarks: Vec<Bookmark>) -> Snapshot {
        let mut next = self.clone();
        next.set_bookmarks(category, bookmarks);
        next
    }

    pub fn contains(&self, category: Category, url: &str) -> bool {
        self.bookmarks(category).iter().any(|b| b.url == url)
    }

    pub fn count(&self, category: Category) -> usize {
        self.bookmarks(category).len()
    }

    pub fn total(&self) -> usize {
        Category::ALL.iter().map(|c| self.count(*c)).sum()
    }

    pub fn iter(&self) -> impl Iterator<Item = (Category, &[Bookmark])> + '_ {
        Category::ALL.into_iter().map(move |c| (c, self.bookmarks(c)))
    }
}

/// A category list that must be persisted before the snapshot may change
#[derive(Debug, Clone, PartialEq)]
pub struct PendingWrite {
    pub category: Category,
    pub bookmarks: Vec<Bookmark>,
}

impl PendingWrite {
    pub fn storage_key(&self) -> &'static str {
        self.category.storage_key()
    }
}

/// Append a bookmark unless the URL is already saved in that category.
///
/// A duplicate URL is silently ignored; the first description wins.
pub fn plan_save(
    snapshot: &Snapshot,
    category: Category,
    url: &str,
    description: &str,
) -> Option<PendingWrite> {
    if snapshot.contains(category, url) {
        return None;
    }

    let mut bookmarks = snapshot.bookmarks(category).to_vec();
    bookmarks.push(Bookmark::new(url, description));

    Some(PendingWrite {
        category,
        bookmarks,
    })
}

/// Drop the bookmark with this URL. The resulting list is written even when
/// nothing matched, so repeating a delete is harmless.
pub fn plan_delete(snapshot: &Snapshot, category: Category, url: &str) -> PendingWrite {
    let bookmarks = snapshot
        .bookmarks(category)
        .iter()
        .filter(|b| b.url != url)
        .cloned()
        .collect();

    PendingWrite {
        category,
        bookmarks,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn snapshot_with(category: Category, urls: &[&str]) -> Snapshot {
        let mut snapshot = Snapshot::new();
        snapshot.set_bookmarks(
            category,
            urls.iter().map(|u| Bookmark::new(*u, "")).collect(),
        );
        snapshot
    }

    #[test]
    fn test_snapshot_new_is_empty() {
        let snapshot = Snapshot::new();

        assert_eq!(snapshot.total(), 0);
        for category in Category::ALL {
            assert!(snapshot.bookmarks(category).is_empty());
        }
    }

    #[test]
    fn test_iter_follows_category_order() {
        let mut snapshot = Snapshot::new();
        snapshot.set_bookmarks(Category::Gemini, vec![Bookmark::new("https://gemini.google.com/app/1", "")]);
        snapshot.set_bookmarks(Category::ChatGpt, vec![Bookmark::new("https://chatgpt.com/c/1", "")]);

        let order: Vec<Category> = snapshot.iter().map(|(c, _)| c).collect();

        assert_eq!(order, Category::ALL.to_vec());
        assert_eq!(snapshot.total(), 2);
    }

    #[test]
    fn test_plan_save_appends_in_order() {
        let snapshot = snapshot_with(Category::Claude, &["https://claude.ai/chat/1"]);

        let write = plan_save(&snapshot, Category::Claude, "https://claude.ai/chat/2", "second").unwrap();

        assert_eq!(write.category, Category::Claude);
        assert_eq!(write.storage_key(), "claude_bookmarks");
        assert_eq!(write.bookmarks.len(), 2);
        assert_eq!(write.bookmarks[0].url, "https://claude.ai/chat/1");
        assert_eq!(write.bookmarks[1], Bookmark::new("https://claude.ai/chat/2", "second"));
    }

    #[test]
    fn test_plan_save_does_not_touch_snapshot() {
        let snapshot = snapshot_with(Category::Claude, &["https://claude.ai/chat/1"]);

        let _ = plan_save(&snapshot, Category::Claude, "https://claude.ai/chat/2", "");

        assert_eq!(snapshot.count(Category::Claude), 1);
    }

    #[test]
    fn test_plan_save_duplicate_is_none() {
        let snapshot = snapshot_with(Category::ChatGpt, &["https://chatgpt.com/c/1"]);

        assert_eq!(plan_save(&snapshot, Category::ChatGpt, "https://chatgpt.com/c/1", "again"), None);
    }

    #[test]
    fn test_plan_save_same_url_other_category() {
        let snapshot = snapshot_with(Category::ChatGpt, &["https://chatgpt.com/c/1"]);

        let write = plan_save(&snapshot, Category::Claude, "https://chatgpt.com/c/1", "").unwrap();

        assert_eq!(write.bookmarks.len(), 1);
    }

    #[test]
    fn test_plan_delete_removes_match() {
        let snapshot = snapshot_with(
            Category::Mistral,
            &["https://chat.mistral.ai/chat/1", "https://chat.mistral.ai/chat/2", "https://chat.mistral.ai/chat/3"],
        );

        let write = plan_delete(&snapshot, Category::Mistral, "https://chat.mistral.ai/chat/2");

        let urls: Vec<&str> = write.bookmarks.iter().map(|b| b.url.as_str()).collect();
        assert_eq!(urls, vec!["https://chat.mistral.ai/chat/1", "https://chat.mistral.ai/chat/3"]);
    }

    #[test]
    fn test_plan_delete_absent_url_is_unchanged() {
        let snapshot = snapshot_with(Category::Mistral, &["https://chat.mistral.ai/chat/1"]);

        let write = plan_delete(&snapshot, Category::Mistral, "https://chat.mistral.ai/chat/9");

        assert_eq!(write.bookmarks, snapshot.bookmarks(Category::Mistral).to_vec());
    }

    #[test]
    fn test_plan_delete_last_entry_leaves_empty_list() {
        let snapshot = snapshot_with(Category::Gemini, &["https://gemini.google.com/app/1"]);

        let write = plan_delete(&snapshot, Category::Gemini, "https://gemini.google.com/app/1");

        assert!(write.bookmarks.is_empty());
    }

    #[test]
    fn test_with_bookmarks_returns_copy() {
        let snapshot = Snapshot::new();

        let next = snapshot.with_bookmarks(Category::Claude, vec![Bookmark::new("https://claude.ai/", "")]);

        assert_eq!(snapshot.total(), 0);
        assert_eq!(next.total(), 1);
        assert!(next.contains(Category::Claude, "https://claude.ai/"));
        assert!(!next.contains(Category::ChatGpt, "https://claude.ai/"));
    }
}
