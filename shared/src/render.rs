//! One render pass: visible set → markers → list → count.
//!
//! The marker index of a pass is produced before its list view so list rows can
//! only ever resolve markers created for the same visible set.

use std::collections::HashMap;

use crate::filter::FilterState;
use crate::markup::{self, popup_html};
use crate::poi::{Poi, PoiId};

/// Marker container of the map collaborator.
pub trait MarkerLayer {
    type Marker: Clone;

    fn clear(&mut self);
    fn add_marker(&mut self, poi: &Poi, popup_html: &str) -> Self::Marker;
}

/// Markers created by the latest render pass, keyed by POI id.
#[derive(Debug, Clone)]
pub struct MarkerIndex<M>(HashMap<PoiId, M>);

impl<M> Default for MarkerIndex<M> {
    fn default() -> Self {
        Self(HashMap::new())
    }
}

impl<M> MarkerIndex<M> {
    pub fn get(&self, id: &PoiId) -> Option<&M> {
        self.0.get(id)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// One clickable list row.
#[derive(Debug, Clone, PartialEq)]
pub struct ListRow {
    pub id: PoiId,
    pub name: String,
    pub category: String,
    pub category_class: String,
    pub desc: String,
    pub aria_label: String,
    pub lat: f64,
    pub lon: f64,
}

impl ListRow {
    pub fn from_poi(poi: &Poi) -> Self {
        Self {
            id: poi.id.clone(),
            name: poi.name.clone(),
            category: poi.category.clone(),
            category_class: markup::category_class(&poi.category),
            desc: poi.desc.clone(),
            aria_label: markup::row_label(poi),
            lat: poi.lat,
            lon: poi.lon,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum ListView {
    Rows(Vec<ListRow>),
    /// Single placeholder row shown when nothing matches.
    Empty,
}

pub struct RenderPass<M> {
    pub markers: MarkerIndex<M>,
    pub list: ListView,
    pub visible: usize,
    pub total: usize,
    pub count_label: String,
}

pub fn render_pass<L: MarkerLayer>(
    pois: &[Poi],
    filter: &FilterState,
    layer: &mut L,
) -> RenderPass<L::Marker> {
    let visible = filter.visible(pois);

    layer.clear();
    let mut markers = HashMap::with_capacity(visible.len());
    for poi in &visible {
        let marker = layer.add_marker(poi, &popup_html(poi));
        markers.insert(poi.id.clone(), marker);
    }

    let list = if visible.is_empty() {
        ListView::Empty
    } else {
        ListView::Rows(visible.iter().map(|poi| ListRow::from_poi(poi)).collect())
    };

    RenderPass {
        markers: MarkerIndex(markers),
        list,
        visible: visible.len(),
        total: pois.len(),
        count_label: markup::count_label(visible.len(), pois.len()),
    }
}
