mod app;
mod config;
mod contact;
mod dom;
mod filters;
mod leaflet;
mod list;
mod loader;
mod timers;

fn main() {
    console_error_panic_hook::set_once();
    let Some(window) = web_sys::window() else {
        return;
    };
    let Some(document) = window.document() else {
        return;
    };

    // Each feature needs its own elements; one missing never blocks the other.
    if let Some(elements) = dom::MapElements::lookup(&document) {
        app::init_map(elements);
    }
    if let Some(elements) = dom::ContactElements::lookup(&document) {
        contact::init_contact_form(elements);
    }
}
