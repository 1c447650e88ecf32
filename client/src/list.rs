use leptos::mount::mount_to;
use leptos::prelude::*;
use std::any::Any;

use poimap_shared::{ListRow, ListView};

use crate::app::focus_poi;
use crate::config;

pub(crate) fn mount_list(target: &web_sys::HtmlElement, list: RwSignal<ListView>) -> Box<dyn Any> {
    target.set_inner_html("");
    let handle = mount_to(target.clone(), move || view! { <PoiList list=list /> });
    Box::new(handle)
}

/// Rows of the latest render pass, or the single "no results" row.
#[component]
fn PoiList(list: RwSignal<ListView>) -> impl IntoView {
    view! {
        {move || match list.get() {
            ListView::Empty => view! {
                <li class="empty-state">{config::MSG_NO_RESULTS}</li>
            }
            .into_any(),
            ListView::Rows(rows) => rows
                .into_iter()
                .map(|row| view! { <PoiRow row=row /> })
                .collect_view()
                .into_any(),
        }}
    }
}

#[component]
fn PoiRow(row: ListRow) -> impl IntoView {
    let ListRow {
        id,
        name,
        category,
        category_class,
        desc,
        aria_label,
        lat,
        lon,
    } = row;
    let badge_class = format!("badge {category_class}");

    view! {
        <li>
            <button
                type="button"
                class="poi-item"
                aria-label=aria_label
                on:click=move |_| focus_poi(&id, lat, lon)
            >
                <span class="poi-title">{name}</span>
                <span class=badge_class>{category}</span>
                <span class="poi-desc">{desc}</span>
            </button>
        </li>
    }
}
