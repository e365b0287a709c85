/// Popup UI state and its transitions, independent of any rendering

use crate::bookmark::Bookmark;
use crate::domain::{classify, Category};
use crate::results::{build_results, ResultEntry};
use crate::storage::Snapshot;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct PopupState {
    /// URL of the focused tab, if the host let us read it
    pub current_url: Option<String>,
    pub snapshot: Snapshot,
    /// Set once the initial load from storage has finished
    pub loaded: bool,
    pub selected_category: Option<Category>,
    pub search_query: String,
    /// Description typed for the current tab, not yet saved
    pub description: String,
    pub hovered_url: Option<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum PopupEvent {
    CurrentUrlResolved(Option<String>),
    SnapshotLoaded(Snapshot),
    /// A save was persisted; carries the category's new list
    BookmarkSaved {
        category: Category,
        bookmarks: Vec<Bookmark>,
    },
    /// A delete was persisted; carries the category's new list
    BookmarkDeleted {
        category: Category,
        bookmarks: Vec<Bookmark>,
    },
    /// `None` means "All". Picking the already-selected category also means "All".
    CategorySelected(Option<Category>),
    SearchChanged(String),
    DescriptionChanged(String),
    Hovered(Option<String>),
}

impl PopupState {
    pub fn apply(&self, event: PopupEvent) -> PopupState {
        let mut next = self.clone();

        match event {
            PopupEvent::CurrentUrlResolved(url) => {
                next.current_url = url.filter(|u| !u.is_empty());
            }
            PopupEvent::SnapshotLoaded(snapshot) => {
                next.snapshot = snapshot;
                next.loaded = true;
            }
            PopupEvent::BookmarkSaved {
                category,
                bookmarks,
            } => {
                next.snapshot.set_bookmarks(category, bookmarks);
                next.description.clear();
            }
            PopupEvent::BookmarkDeleted {
                category,
                bookmarks,
            } => {
                next.snapshot.set_bookmarks(category, bookmarks);
                let hover_removed = next
                    .hovered_url
                    .as_deref()
                    .is_some_and(|url| {
                        self.snapshot.contains(category, url) && !next.snapshot.contains(category, url)
                    });
                if hover_removed {
                    next.hovered_url = None;
                }
            }
            PopupEvent::CategorySelected(category) => {
                next.selected_category = if category == self.selected_category {
                    None
                } else {
                    category
                };
                next.search_query.clear();
            }
            PopupEvent::SearchChanged(query) => {
                if !query.is_empty() {
                    next.selected_category = None;
                }
                next.search_query = query;
            }
            PopupEvent::DescriptionChanged(text) => {
                next.description = text;
            }
            PopupEvent::Hovered(url) => {
                next.hovered_url = url;
            }
        }

        next
    }

    /// Category of the current tab, if it is a supported chat site
    pub fn current_category(&self) -> Option<Category> {
        self.current_url.as_deref().and_then(classify)
    }

    pub fn is_current_saved(&self) -> bool {
        match (self.current_url.as_deref(), self.current_category()) {
            (Some(url), Some(category)) => self.snapshot.contains(category, url),
            _ => false,
        }
    }

    pub fn can_save(&self) -> bool {
        self.loaded && self.current_category().is_some() && !self.is_current_saved()
    }

    pub fn is_searching(&self) -> bool {
        !self.search_query.is_empty()
    }

    pub fn results(&self) -> Vec<ResultEntry> {
        build_results(&self.snapshot, self.selected_category, &self.search_query)
    }
}
