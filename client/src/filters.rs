use leptos::mount::mount_to;
use leptos::prelude::*;
use std::any::Any;

use poimap_shared::{FilterAction, FilterState, category_class};

use crate::app::dispatch;

/// Mount one toggle per load-time category into the filter container,
/// replacing whatever markup it held.
pub(crate) fn mount_filters(
    target: &web_sys::HtmlElement,
    categories: Vec<String>,
    filter: RwSignal<FilterState>,
) -> Box<dyn Any> {
    target.set_inner_html("");
    let handle = mount_to(target.clone(), move || {
        view! { <CategoryFilters categories=categories filter=filter /> }
    });
    Box::new(handle)
}

#[component]
fn CategoryFilters(categories: Vec<String>, filter: RwSignal<FilterState>) -> impl IntoView {
    categories
        .into_iter()
        .map(|category| view! { <CategoryToggle category=category filter=filter /> })
        .collect_view()
}

/// Active state is read from the filter, so a reset flips every toggle back on.
#[component]
fn CategoryToggle(category: String, filter: RwSignal<FilterState>) -> impl IntoView {
    let active = Memo::new({
        let category = category.clone();
        move |_| filter.with(|state| state.is_active(&category))
    });
    let class = format!("filter-btn {}", category_class(&category));
    let toggled = category.clone();
    let data_category = category.clone();

    view! {
        <button
            type="button"
            class=class
            class:is-active=move || active.get()
            data-category=data_category
            aria-pressed=move || if active.get() { "true" } else { "false" }
            on:click=move |_| dispatch(FilterAction::ToggleCategory(toggled.clone()))
        >
            {category}
        </button>
    }
}
