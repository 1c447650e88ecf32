use std::collections::BTreeSet;

use crate::poi::Poi;

/// Distinct categories of `pois`, sorted ascending.
pub fn categories(pois: &[Poi]) -> Vec<String> {
    pois.iter()
        .map(|poi| poi.category.clone())
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect()
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FilterAction {
    ToggleCategory(String),
    SetSearch(String),
    Reset,
}

/// Category inclusion set plus search term.
///
/// `all` is captured once at load time; `Reset` restores `active` from it, never
/// from what happens to be visible.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterState {
    all: Vec<String>,
    active: BTreeSet<String>,
    search: String,
}

impl FilterState {
    /// Every category active, empty search.
    pub fn new(all: Vec<String>) -> Self {
        let active = all.iter().cloned().collect();
        Self {
            all,
            active,
            search: String::new(),
        }
    }

    pub fn from_pois(pois: &[Poi]) -> Self {
        Self::new(categories(pois))
    }

    /// Load-time state that keeps whatever was typed into the search box while
    /// the data was still in flight.
    pub fn at_load(pois: &[Poi], pending_search: &str) -> Self {
        Self::from_pois(pois).reduce(FilterAction::SetSearch(pending_search.to_string()))
    }

    pub fn reduce(mut self, action: FilterAction) -> Self {
        match action {
            FilterAction::ToggleCategory(category) => {
                if !self.active.remove(&category) {
                    self.active.insert(category);
                }
            }
            FilterAction::SetSearch(term) => self.search = term,
            FilterAction::Reset => {
                self.active = self.all.iter().cloned().collect();
                self.search.clear();
            }
        }
        self
    }

    pub fn categories(&self) -> &[String] {
        &self.all
    }

    pub fn is_active(&self, category: &str) -> bool {
        self.active.contains(category)
    }

    pub fn active(&self) -> &BTreeSet<String> {
        &self.active
    }

    pub fn search(&self) -> &str {
        &self.search
    }

    /// An empty active set matches nothing.
    pub fn matches(&self, poi: &Poi) -> bool {
        if !self.active.contains(&poi.category) {
            return false;
        }
        let term = self.search.trim().to_lowercase();
        term.is_empty() || poi.haystack().contains(&term)
    }

    /// Matching POIs in load order.
    pub fn visible<'a>(&self, pois: &'a [Poi]) -> Vec<&'a Poi> {
        pois.iter().filter(|poi| self.matches(poi)).collect()
    }
}
