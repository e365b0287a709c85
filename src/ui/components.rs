/// Reusable UI components

use yew::prelude::*;
use patternfly_yew::prelude::*;
use crate::domain::Category;
use crate::results::{truncate_text, truncate_url, ResultEntry};

/// Descriptions longer than this are cut in result rows
const DESCRIPTION_DISPLAY_LEN: usize = 60;

#[derive(Properties, PartialEq)]
pub struct CategoryFilterProps {
    pub counts: Vec<(Category, usize)>,
    pub selected: Option<Category>,
    pub on_select: Callback<Option<Category>>,
}

/// "All" plus one tab per category, each with its bookmark count
#[function_component(CategoryFilter)]
pub fn category_filter(props: &CategoryFilterProps) -> Html {
    let total: usize = props.counts.iter().map(|(_, n)| n).sum();

    let item_class = |current: bool| {
        if current { "pf-v5-c-tabs__item pf-m-current" } else { "pf-v5-c-tabs__item" }
    };

    html! {
        <div class="pf-v5-c-tabs tabs-nav">
            <ul class="pf-v5-c-tabs__list">
                <li class={item_class(props.selected.is_none())}>
                    <button
                        class="pf-v5-c-tabs__link"
                        onclick={props.on_select.reform(|_| None)}
                    >
                        <span class="pf-v5-c-tabs__item-text">{format!("All ({})", total)}</span>
                    </button>
                </li>
                {for props.counts.iter().map(|(category, count)| {
                    let category = *category;
                    html! {
                        <li key={category.storage_key()} class={item_class(props.selected == Some(category))}>
                            <button
                                class="pf-v5-c-tabs__link"
                                onclick={props.on_select.reform(move |_| Some(category))}
                            >
                                <span class="pf-v5-c-tabs__item-text">
                                    {format!("{} ({})", category.display_name(), count)}
                                </span>
                            </button>
                        </li>
                    }
                })}
            </ul>
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct BookmarkRowProps {
    pub entry: ResultEntry,
    pub hovered: bool,
    pub on_delete: Callback<(Category, String)>,
    pub on_hover: Callback<Option<String>>,
}

#[function_component(BookmarkRow)]
pub fn bookmark_row(props: &BookmarkRowProps) -> Html {
    let entry = &props.entry;

    let on_enter = {
        let url = entry.url.clone();
        props.on_hover.reform(move |_: MouseEvent| Some(url.clone()))
    };
    let on_leave = props.on_hover.reform(|_: MouseEvent| None);
    let on_delete = {
        let category = entry.category;
        let url = entry.url.clone();
        props.on_delete.reform(move |_| (category, url.clone()))
    };

    html! {
        <div class="bookmark-item" onmouseenter={on_enter} onmouseleave={on_leave}>
            <div class="bookmark-content">
                <span class="bookmark-category">{entry.category.display_name()}</span>
                if !entry.description.is_empty() {
                    <div class="bookmark-description">
                        {truncate_text(&entry.description, DESCRIPTION_DISPLAY_LEN)}
                    </div>
                }
                <a class="bookmark-url" href={entry.url.clone()} target="_blank" rel="noopener noreferrer">
                    {truncate_url(&entry.url)}
                </a>
                if props.hovered {
                    <div class="bookmark-full-url">{&entry.url}</div>
                }
            </div>
            <div class="bookmark-actions">
                <Button
                    onclick={on_delete}
                    variant={ButtonVariant::Danger}
                    size={ButtonSize::Small}
                >
                    {"✗"}
                </Button>
            </div>
        </div>
    }
}
