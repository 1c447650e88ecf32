//! Thin binding over the Leaflet global `L`. Only the handful of calls the POI
//! map uses are declared here.

use js_sys::Reflect;
use serde::Serialize;
use wasm_bindgen::prelude::*;

use poimap_shared::{Bounds, MarkerLayer, Poi};

use crate::config;

#[wasm_bindgen]
extern "C" {
    type LeafletMap;

    #[wasm_bindgen(catch, js_namespace = L, js_name = map)]
    fn l_map(container_id: &str, options: &JsValue) -> Result<LeafletMap, JsValue>;

    #[wasm_bindgen(method, js_name = fitBounds)]
    fn fit_bounds(this: &LeafletMap, bounds: &JsValue, options: &JsValue);

    #[wasm_bindgen(method, js_name = setView)]
    fn set_view(this: &LeafletMap, center: &JsValue, zoom: f64, options: &JsValue);

    #[wasm_bindgen(method, js_name = invalidateSize)]
    fn invalidate_size(this: &LeafletMap);

    type TileLayer;

    #[wasm_bindgen(js_namespace = L, js_name = tileLayer)]
    fn l_tile_layer(url_template: &str, options: &JsValue) -> TileLayer;

    #[wasm_bindgen(method, js_name = addTo)]
    fn add_to(this: &TileLayer, map: &LeafletMap);

    type LayerGroup;

    #[wasm_bindgen(js_namespace = L, js_name = layerGroup)]
    fn l_layer_group() -> LayerGroup;

    #[wasm_bindgen(method, js_name = addTo)]
    fn add_to(this: &LayerGroup, map: &LeafletMap);

    #[wasm_bindgen(method, js_name = clearLayers)]
    fn clear_layers(this: &LayerGroup);

    #[derive(Clone)]
    pub type Marker;

    #[wasm_bindgen(js_namespace = L, js_name = marker)]
    fn l_marker(lat_lng: &JsValue, options: &JsValue) -> Marker;

    #[wasm_bindgen(method, js_name = bindPopup)]
    fn bind_popup(this: &Marker, content: &str, options: &JsValue);

    #[wasm_bindgen(method, js_name = openPopup)]
    pub fn open_popup(this: &Marker);

    #[wasm_bindgen(method, js_name = addTo)]
    fn add_to(this: &Marker, group: &LayerGroup);
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct MapOptions {
    zoom_control: bool,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct TileLayerOptions {
    max_zoom: u8,
    attribution: &'static str,
}

#[derive(Serialize)]
struct MarkerOptions<'a> {
    title: &'a str,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct PopupOptions {
    max_width: u32,
}

#[derive(Serialize)]
struct FitOptions {
    padding: [f64; 2],
}

#[derive(Serialize)]
struct ViewOptions {
    animate: bool,
}

fn to_js<T: Serialize>(value: &T) -> JsValue {
    serde_wasm_bindgen::to_value(value).unwrap_or(JsValue::UNDEFINED)
}

/// `true` when the page loaded Leaflet before us.
pub fn is_available() -> bool {
    let Some(window) = web_sys::window() else {
        return false;
    };
    Reflect::get(window.as_ref(), &JsValue::from_str("L"))
        .map(|l| !l.is_undefined() && !l.is_null())
        .unwrap_or(false)
}

pub struct MapView {
    map: LeafletMap,
}

impl MapView {
    pub fn fit_bounds(&self, bounds: &Bounds) {
        self.map.fit_bounds(
            &to_js(&bounds.corners()),
            &to_js(&FitOptions {
                padding: config::FIT_PADDING_PX,
            }),
        );
    }

    pub fn set_view(&self, (lat, lon): (f64, f64), zoom: f64, animate: bool) {
        self.map
            .set_view(&to_js(&[lat, lon]), zoom, &to_js(&ViewOptions { animate }));
    }

    pub fn invalidate_size(&self) {
        self.map.invalidate_size();
    }
}

/// The layer group holding POI markers.
pub struct MarkerGroup {
    group: LayerGroup,
}

impl MarkerLayer for MarkerGroup {
    type Marker = Marker;

    fn clear(&mut self) {
        self.group.clear_layers();
    }

    fn add_marker(&mut self, poi: &Poi, popup_html: &str) -> Marker {
        let marker = l_marker(
            &to_js(&[poi.lat, poi.lon]),
            &to_js(&MarkerOptions { title: &poi.name }),
        );
        marker.bind_popup(
            popup_html,
            &to_js(&PopupOptions {
                max_width: config::POPUP_MAX_WIDTH,
            }),
        );
        marker.add_to(&self.group);
        marker
    }
}

/// Create the map in `container_id` with the OSM tile layer and an empty
/// marker group.
pub fn create_map(container_id: &str) -> Result<(MapView, MarkerGroup), String> {
    let map = l_map(container_id, &to_js(&MapOptions { zoom_control: true }))
        .map_err(|e| format!("L.map failed: {e:?}"))?;
    l_tile_layer(
        config::TILE_URL,
        &to_js(&TileLayerOptions {
            max_zoom: config::TILE_MAX_ZOOM,
            attribution: config::TILE_ATTRIBUTION,
        }),
    )
    .add_to(&map);
    let group = l_layer_group();
    group.add_to(&map);
    Ok((MapView { map }, MarkerGroup { group }))
}
