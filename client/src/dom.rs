use wasm_bindgen::JsCast;
use web_sys::{Document, Element, HtmlElement, HtmlFormElement, HtmlInputElement};

use crate::config;

/// Everything the map feature needs from the page. Missing any one of them
/// means the feature stays off.
pub struct MapElements {
    pub map: Element,
    pub status: Element,
    pub count: Element,
    pub list: HtmlElement,
    pub filters: HtmlElement,
    pub search: HtmlInputElement,
    pub reset: Element,
    pub fit: Element,
}

impl MapElements {
    pub fn lookup(document: &Document) -> Option<Self> {
        let by_id = |id: &str| document.get_element_by_id(id);
        Some(Self {
            map: by_id(config::MAP_ID)?,
            status: by_id(config::STATUS_ID)?,
            count: by_id(config::COUNT_ID)?,
            list: by_id(config::LIST_ID)?.dyn_into().ok()?,
            filters: by_id(config::FILTERS_ID)?.dyn_into().ok()?,
            search: by_id(config::SEARCH_ID)?.dyn_into().ok()?,
            reset: by_id(config::RESET_ID)?,
            fit: by_id(config::FIT_ID)?,
        })
    }
}

pub struct ContactElements {
    pub form: HtmlFormElement,
    pub status: Element,
}

impl ContactElements {
    pub fn lookup(document: &Document) -> Option<Self> {
        Some(Self {
            form: document
                .get_element_by_id(config::FORM_ID)?
                .dyn_into()
                .ok()?,
            status: document.get_element_by_id(config::FORM_STATUS_ID)?,
        })
    }
}

/// Set a status line's text and its error styling.
pub fn set_status(el: &Element, text: &str, is_error: bool) {
    el.set_text_content(Some(text));
    let _ = el.class_list().toggle_with_force(config::CLASS_ERROR, is_error);
}
