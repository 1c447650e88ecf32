use std::any::Any;
use std::cell::RefCell;
use std::rc::Rc;

use gloo_timers::callback::Timeout;
use leptos::prelude::*;
use leptos::reactive::owner::Owner;
use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use wasm_bindgen_futures::spawn_local;

use poimap_shared::{
    Debouncer, FilterAction, FilterState, InitialView, ListView, MarkerIndex, ParsedPois, Poi,
    PoiId, render_pass,
};

use crate::config;
use crate::dom::{self, MapElements};
use crate::filters::mount_filters;
use crate::leaflet::{self, MapView, Marker, MarkerGroup};
use crate::list::mount_list;
use crate::loader::{self, LoadError};
use crate::timers::BrowserTimers;

/// Reactive state read by the mounted filter and list views.
#[derive(Clone, Copy)]
struct ViewSignals {
    filter: RwSignal<FilterState>,
    list: RwSignal<ListView>,
}

/// Everything that exists only after a successful fetch.
struct Loaded {
    pois: Vec<Poi>,
    filter: FilterState,
    markers: MarkerIndex<Marker>,
    view: InitialView,
    signals: ViewSignals,
    _owner: Owner,
    _mounts: Vec<Box<dyn Any>>,
}

struct MapFeature {
    map: MapView,
    layer: MarkerGroup,
    elements: MapElements,
    data: Option<Loaded>,
}

type EventHandler = Closure<dyn Fn(web_sys::Event)>;

struct ControlBindings {
    bound: Vec<(web_sys::EventTarget, &'static str, EventHandler)>,
}

impl ControlBindings {
    fn unbind(self) {
        for (target, event, handler) in self.bound {
            let _ = target
                .remove_event_listener_with_callback(event, handler.as_ref().unchecked_ref());
        }
    }
}

thread_local! {
    static MAP_FEATURE: RefCell<Option<MapFeature>> = const { RefCell::new(None) };
    static CONTROL_BINDINGS: RefCell<Option<ControlBindings>> = const { RefCell::new(None) };
}

/// Start the map feature: build the map, wire the controls and fetch the POIs.
pub fn init_map(elements: MapElements) {
    if !leaflet::is_available() {
        web_sys::console::warn_1(&"Leaflet is not loaded; map feature disabled".into());
        dom::set_status(&elements.status, config::MSG_NO_LIBRARY, false);
        return;
    }
    let (map, layer) = match leaflet::create_map(config::MAP_ID) {
        Ok(parts) => parts,
        Err(e) => {
            web_sys::console::warn_1(&format!("Map init failed: {e}").into());
            dom::set_status(&elements.status, config::MSG_NO_LIBRARY, false);
            return;
        }
    };

    let data_url = config::data_url(&elements.map);
    bind_controls(&elements);
    dom::set_status(&elements.status, config::MSG_LOADING, false);
    MAP_FEATURE.with(|slot| {
        *slot.borrow_mut() = Some(MapFeature {
            map,
            layer,
            elements,
            data: None,
        });
    });

    spawn_local(async move {
        match loader::fetch_pois(&data_url).await {
            Ok(parsed) => on_loaded(parsed),
            Err(e) => on_load_failed(&data_url, &e),
        }
    });
}

fn on_load_failed(url: &str, error: &LoadError) {
    web_sys::console::warn_1(&format!("POI fetch failed ({url}): {error}").into());
    MAP_FEATURE.with(|slot| {
        if let Some(feature) = slot.borrow().as_ref() {
            dom::set_status(&feature.elements.status, config::MSG_LOAD_FAILED, true);
        }
    });
}

fn on_loaded(parsed: ParsedPois) {
    let ParsedPois { pois, skipped } = parsed;
    if skipped > 0 {
        web_sys::console::warn_1(&format!("Skipped {skipped} malformed POI entries").into());
    }
    let view = InitialView::for_pois(&pois);

    MAP_FEATURE.with(|slot| {
        let mut slot = slot.borrow_mut();
        let Some(feature) = slot.as_mut() else {
            return;
        };

        let filter = FilterState::at_load(&pois, &feature.elements.search.value());
        web_sys::console::info_1(
            &format!(
                "pois_loaded={} categories={}",
                pois.len(),
                filter.categories().len()
            )
            .into(),
        );
        let owner = Owner::new();
        let signals = owner.with(|| ViewSignals {
            filter: RwSignal::new(filter.clone()),
            list: RwSignal::new(ListView::Empty),
        });

        let filters_mount = mount_filters(
            &feature.elements.filters,
            filter.categories().to_vec(),
            signals.filter,
        );
        match view {
            InitialView::Fit(bounds) => feature.map.fit_bounds(&bounds),
            InitialView::Default => feature
                .map
                .set_view(config::DEFAULT_CENTER, config::DEFAULT_ZOOM, false),
        }
        dom::set_status(&feature.elements.status, "", false);

        // Markers first: list rows resolve their marker from this pass's index.
        let pass = render_pass(&pois, &filter, &mut feature.layer);
        feature
            .elements
            .count
            .set_text_content(Some(&pass.count_label));
        signals.list.set(pass.list);
        let list_mount = mount_list(&feature.elements.list, signals.list);

        feature.data = Some(Loaded {
            pois,
            filter,
            markers: pass.markers,
            view,
            signals,
            _owner: owner,
            _mounts: vec![filters_mount, list_mount],
        });
    });

    // The container may not have its final size at first paint.
    Timeout::new(config::INVALIDATE_SIZE_DELAY_MS, || {
        MAP_FEATURE.with(|slot| {
            if let Some(feature) = slot.borrow().as_ref() {
                feature.map.invalidate_size();
            }
        });
    })
    .forget();
}

/// Apply a filter action and re-render markers, list and count.
/// No-op until the POIs have loaded.
pub(crate) fn dispatch(action: FilterAction) {
    let update = MAP_FEATURE.with(|slot| {
        let mut slot = slot.borrow_mut();
        let feature = slot.as_mut()?;
        let data = feature.data.as_mut()?;

        data.filter = std::mem::take(&mut data.filter).reduce(action);
        let pass = render_pass(&data.pois, &data.filter, &mut feature.layer);
        data.markers = pass.markers;
        feature
            .elements
            .count
            .set_text_content(Some(&pass.count_label));
        Some((data.signals, data.filter.clone(), pass.list))
    });

    // Signals are written outside the borrow; their effects may read the feature.
    let Some((signals, filter, list)) = update else {
        return;
    };
    signals.list.set(list);
    signals.filter.set(filter);
}

/// Center the map on a listed POI and open its popup.
pub(crate) fn focus_poi(id: &PoiId, lat: f64, lon: f64) {
    MAP_FEATURE.with(|slot| {
        let slot = slot.borrow();
        let Some(feature) = slot.as_ref() else {
            return;
        };
        feature.map.set_view((lat, lon), config::FOCUS_ZOOM, true);
        if let Some(marker) = feature.data.as_ref().and_then(|data| data.markers.get(id)) {
            marker.open_popup();
        }
    });
}

/// Re-frame the map on every loaded POI. No-op when nothing was loaded.
fn fit_all() {
    MAP_FEATURE.with(|slot| {
        let slot = slot.borrow();
        let Some(feature) = slot.as_ref() else {
            return;
        };
        if let Some(bounds) = feature.data.as_ref().and_then(|data| data.view.fit_target()) {
            feature.map.fit_bounds(&bounds);
        }
    });
}

fn bind_controls(elements: &MapElements) {
    CONTROL_BINDINGS.with(|slot| {
        if let Some(old) = slot.borrow_mut().take() {
            old.unbind();
        }
    });

    let debouncer = Rc::new(Debouncer::new(
        BrowserTimers,
        config::SEARCH_DEBOUNCE_MS,
        |term: String| dispatch(FilterAction::SetSearch(term)),
    ));

    let on_search: EventHandler = Closure::new({
        let debouncer = Rc::clone(&debouncer);
        move |e: web_sys::Event| {
            let value = e
                .target()
                .and_then(|t| t.dyn_into::<web_sys::HtmlInputElement>().ok())
                .map(|input| input.value())
                .unwrap_or_default();
            debouncer.call(value);
        }
    });

    let on_reset: EventHandler = Closure::new({
        let search = elements.search.clone();
        move |_: web_sys::Event| {
            // A search still waiting out its quiet period must not undo the reset.
            debouncer.cancel();
            search.set_value("");
            dispatch(FilterAction::Reset);
        }
    });

    let on_fit: EventHandler = Closure::new(move |_: web_sys::Event| fit_all());

    let mut bindings = ControlBindings { bound: Vec::new() };
    for (target, event, handler) in [
        (web_sys::EventTarget::from(elements.search.clone()), "input", on_search),
        (web_sys::EventTarget::from(elements.reset.clone()), "click", on_reset),
        (web_sys::EventTarget::from(elements.fit.clone()), "click", on_fit),
    ] {
        if target
            .add_event_listener_with_callback(event, handler.as_ref().unchecked_ref())
            .is_ok()
        {
            bindings.bound.push((target, event, handler));
        }
    }
    CONTROL_BINDINGS.with(|slot| {
        *slot.borrow_mut() = Some(bindings);
    });
}
