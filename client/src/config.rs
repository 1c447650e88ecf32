pub const DEFAULT_DATA_URL: &str = "data/pois.sample.json";
/// Attribute on the map element that overrides [`DEFAULT_DATA_URL`].
pub const DATA_URL_ATTR: &str = "data-pois-url";

pub const SEARCH_DEBOUNCE_MS: u32 = 200;
pub const INVALIDATE_SIZE_DELAY_MS: u32 = 150;

pub const TILE_URL: &str = "https://{s}.tile.openstreetmap.org/{z}/{x}/{y}.png";
pub const TILE_ATTRIBUTION: &str = "&copy; OpenStreetMap";
pub const TILE_MAX_ZOOM: u8 = 19;

pub const FIT_PADDING_PX: [f64; 2] = [30.0, 30.0];
pub const DEFAULT_CENTER: (f64, f64) = (45.83, 11.86);
pub const DEFAULT_ZOOM: f64 = 11.0;
pub const FOCUS_ZOOM: f64 = 15.0;
pub const POPUP_MAX_WIDTH: u32 = 260;

// Element ids
pub const MAP_ID: &str = "map";
pub const STATUS_ID: &str = "mapStatus";
pub const COUNT_ID: &str = "poiCount";
pub const LIST_ID: &str = "poiList";
pub const FILTERS_ID: &str = "categoryFilters";
pub const SEARCH_ID: &str = "poiSearch";
pub const RESET_ID: &str = "resetFilters";
pub const FIT_ID: &str = "fitBounds";
pub const FORM_ID: &str = "contactForm";
pub const FORM_STATUS_ID: &str = "formStatus";

pub const CLASS_ERROR: &str = "is-error";

pub const MSG_LOADING: &str = "Caricamento punti di interesse...";
pub const MSG_LOAD_FAILED: &str = "Impossibile caricare i dati.";
pub const MSG_NO_LIBRARY: &str = "Impossibile inizializzare la mappa.";
pub const MSG_NO_RESULTS: &str = "Nessun risultato con i filtri attivi.";

pub fn data_url(map: &web_sys::Element) -> String {
    resolve_data_url(map.get_attribute(DATA_URL_ATTR))
}

fn resolve_data_url(attr: Option<String>) -> String {
    attr.map(|value| value.trim().to_string())
        .filter(|value| !value.is_empty())
        .unwrap_or_else(|| DEFAULT_DATA_URL.to_string())
}

#[cfg(test)]
mod tests {
    use super::{DEFAULT_DATA_URL, resolve_data_url};

    #[test]
    fn missing_attribute_uses_default() {
        assert_eq!(resolve_data_url(None), DEFAULT_DATA_URL);
    }

    #[test]
    fn blank_attribute_uses_default() {
        assert_eq!(resolve_data_url(Some("   ".into())), DEFAULT_DATA_URL);
    }

    #[test]
    fn attribute_overrides_default() {
        assert_eq!(
            resolve_data_url(Some(" /static/pois.json ".into())),
            "/static/pois.json"
        );
    }
}
