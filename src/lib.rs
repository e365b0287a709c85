/// Chat Marks - Chrome Extension for bookmarking AI chat conversations
/// Built with Rust + WASM + Yew

mod bookmark;
mod chrome;
mod domain;
mod error;
mod results;
mod state;
mod storage;
mod store;
pub mod ui;

use wasm_bindgen::prelude::*;

pub use bookmark::Bookmark;
pub use domain::{classify, Category};
pub use error::PopupError;
pub use results::{build_results, ResultEntry};
pub use state::{PopupEvent, PopupState};
pub use storage::{plan_delete, plan_save, PendingWrite, Snapshot};
pub use store::{BookmarkStore, KeyValueStore, MemoryStore};

// Set up panic hook for better error messages in the browser console
#[wasm_bindgen(start)]
pub fn main() {
    console_error_panic_hook::set_once();
    wasm_logger::init(wasm_logger::Config::new(log::Level::Info));
}

// Re-export the classifier for JavaScript access
#[wasm_bindgen]
pub fn classify_url(url: &str) -> String {
    domain::classify(url)
        .map(|category| category.storage_key().to_string())
        .unwrap_or_else(|| "unsupported".to_string())
}

#[wasm_bindgen]
pub fn truncate_url(url: &str) -> String {
    results::truncate_url(url)
}

// Start the Yew app for the popup
#[wasm_bindgen]
pub fn start_popup() {
    yew::Renderer::<ui::popup::App>::new().render();
}
