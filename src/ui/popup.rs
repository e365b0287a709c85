/// Popup UI for Chat Marks extension

use std::rc::Rc;
use yew::prelude::*;
use wasm_bindgen_futures::spawn_local;
use web_sys::HtmlInputElement;
use patternfly_yew::prelude::*;
use log::{debug, info};
use crate::chrome::{active_tab_url, ChromeStorage};
use crate::domain::Category;
use crate::results::truncate_url;
use crate::state::{PopupEvent, PopupState};
use crate::store::BookmarkStore;
use crate::ui::components::{BookmarkRow, CategoryFilter};

impl Reducible for PopupState {
    type Action = PopupEvent;

    fn reduce(self: Rc<Self>, action: PopupEvent) -> Rc<Self> {
        Rc::new(self.apply(action))
    }
}

fn bookmark_store() -> BookmarkStore<ChromeStorage> {
    BookmarkStore::new(ChromeStorage)
}

#[function_component(App)]
pub fn app() -> Html {
    let state = use_reducer(PopupState::default);

    // Resolve the current tab and load every category on mount
    {
        let state = state.clone();
        use_effect_with((), move |_| {
            spawn_local(async move {
                let url = active_tab_url().await;
                debug!("Active tab: {:?}", url);
                state.dispatch(PopupEvent::CurrentUrlResolved(url));

                let snapshot = bookmark_store().load_all().await;
                info!("Loaded {} bookmarks", snapshot.total());
                state.dispatch(PopupEvent::SnapshotLoaded(snapshot));
            });
            || ()
        });
    }

    // Save current tab handler
    let on_save = {
        let state = state.clone();

        Callback::from(move |_: MouseEvent| {
            let (Some(url), Some(category)) = (state.current_url.clone(), state.current_category()) else {
                return;
            };
            let snapshot = state.snapshot.clone();
            let description = state.description.trim().to_string();
            let state = state.clone();

            spawn_local(async move {
                if let Some(bookmarks) = bookmark_store().save(&snapshot, category, &url, &description).await {
                    info!("Saved {} under {}", url, category.display_name());
                    state.dispatch(PopupEvent::BookmarkSaved { category, bookmarks });
                }
            });
        })
    };

    // Delete bookmark handler
    let on_delete = {
        let state = state.clone();

        Callback::from(move |(category, url): (Category, String)| {
            let snapshot = state.snapshot.clone();
            let state = state.clone();

            spawn_local(async move {
                if let Some(bookmarks) = bookmark_store().delete(&snapshot, category, &url).await {
                    info!("Deleted {} from {}", url, category.display_name());
                    state.dispatch(PopupEvent::BookmarkDeleted { category, bookmarks });
                }
            });
        })
    };

    let on_select = {
        let state = state.clone();
        Callback::from(move |category: Option<Category>| {
            state.dispatch(PopupEvent::CategorySelected(category));
        })
    };

    let on_search_input = {
        let state = state.clone();
        Callback::from(move |e: InputEvent| {
            if let Some(input) = e.target_dyn_into::<HtmlInputElement>() {
                state.dispatch(PopupEvent::SearchChanged(input.value()));
            }
        })
    };

    let on_description_input = {
        let state = state.clone();
        Callback::from(move |e: InputEvent| {
            if let Some(input) = e.target_dyn_into::<HtmlInputElement>() {
                state.dispatch(PopupEvent::DescriptionChanged(input.value()));
            }
        })
    };

    let on_hover = {
        let state = state.clone();
        Callback::from(move |url: Option<String>| {
            state.dispatch(PopupEvent::Hovered(url));
        })
    };

    let results = state.results();
    let counts: Vec<(Category, usize)> = state
        .snapshot
        .iter()
        .map(|(category, bookmarks)| (category, bookmarks.len()))
        .collect();

    html! {
        <div class="padding-20">
            <h1 class="popup-title">{"Chat Marks"}</h1>

            // Current tab
            if let Some(url) = state.current_url.clone() {
                <div class="current-tab">
                    <p class="current-url" title={url.clone()}>{truncate_url(&url)}</p>
                    {match state.current_category() {
                        Some(category) if state.is_current_saved() => html! {
                            <p class="saved-hint">{format!("Already saved in {}", category.display_name())}</p>
                        },
                        Some(category) => html! {
                            <div class="flex-column-gap">
                                <input
                                    type="text"
                                    placeholder="Describe this conversation..."
                                    value={state.description.clone()}
                                    oninput={on_description_input}
                                    class="description-input"
                                />
                                <Button onclick={on_save} disabled={!state.can_save()} variant={ButtonVariant::Primary} block={true}>
                                    {format!("Save to {}", category.display_name())}
                                </Button>
                            </div>
                        },
                        None => html! {
                            <p class="unsupported-hint">
                                {"Open a ChatGPT, Claude, Le Chat or Gemini conversation to bookmark it."}
                            </p>
                        },
                    }}
                </div>
            }

            // Search bar
            <div class="search-container">
                <input
                    type="text"
                    placeholder="Search descriptions or URLs..."
                    value={state.search_query.clone()}
                    oninput={on_search_input}
                    class="search-input"
                />
            </div>

            <CategoryFilter
                counts={counts}
                selected={state.selected_category}
                on_select={on_select}
            />

            // Bookmark list
            if !state.loaded {
                <div class="loading-text-center">
                    <Spinner />
                    <p class="loading-text">{"Loading bookmarks..."}</p>
                </div>
            } else if results.is_empty() {
                <div class="empty-state">
                    if state.is_searching() {
                        <p>{"No bookmarks match your search."}</p>
                    } else {
                        <p>{"No bookmarks yet."}</p>
                    }
                </div>
            } else {
                <div class="bookmarks-list">
                    {for results.into_iter().map(|entry| {
                        let hovered = state.hovered_url.as_deref() == Some(entry.url.as_str());
                        let key = format!("{}|{}", entry.category.storage_key(), entry.url);
                        html! {
                            <BookmarkRow
                                key={key}
                                entry={entry}
                                hovered={hovered}
                                on_delete={on_delete.clone()}
                                on_hover={on_hover.clone()}
                            />
                        }
                    })}
                </div>
            }

            <p class="footer-popup">
                {format!("{} bookmarks • Chat Marks v0.1.0", state.snapshot.total())}
            </p>
        </div>
    }
}
