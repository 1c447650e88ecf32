use crate::poi::Poi;

/// Geographic bounding box in degrees.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bounds {
    pub south: f64,
    pub west: f64,
    pub north: f64,
    pub east: f64,
}

impl Bounds {
    /// Box covering every `(lat, lon)`; `None` when there are no points.
    pub fn from_points<I>(points: I) -> Option<Self>
    where
        I: IntoIterator<Item = (f64, f64)>,
    {
        let mut points = points.into_iter();
        let (lat, lon) = points.next()?;
        let mut bounds = Self {
            south: lat,
            west: lon,
            north: lat,
            east: lon,
        };
        for (lat, lon) in points {
            bounds.extend(lat, lon);
        }
        Some(bounds)
    }

    pub fn extend(&mut self, lat: f64, lon: f64) {
        self.south = self.south.min(lat);
        self.north = self.north.max(lat);
        self.west = self.west.min(lon);
        self.east = self.east.max(lon);
    }

    /// `[[south, west], [north, east]]`, the corner-pair form map libraries accept.
    pub const fn corners(&self) -> [[f64; 2]; 2] {
        [[self.south, self.west], [self.north, self.east]]
    }
}

/// How the map is framed once the data has loaded.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InitialView {
    /// Fit every loaded POI.
    Fit(Bounds),
    /// Nothing to fit; keep the configured center and zoom.
    Default,
}

impl InitialView {
    pub fn for_pois(pois: &[Poi]) -> Self {
        match Bounds::from_points(pois.iter().map(Poi::coords)) {
            Some(bounds) => InitialView::Fit(bounds),
            None => InitialView::Default,
        }
    }

    /// Box a manual "fit all" should frame. `None` leaves the map untouched.
    pub const fn fit_target(&self) -> Option<Bounds> {
        match self {
            InitialView::Fit(bounds) => Some(*bounds),
            InitialView::Default => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{Bounds, InitialView};
    use crate::poi::{Poi, PoiId};

    fn at(id: i64, lat: f64, lon: f64) -> Poi {
        Poi {
            id: PoiId::Number(id),
            name: format!("poi {id}"),
            category: "Arte".into(),
            desc: String::new(),
            lat,
            lon,
            url: None,
        }
    }

    #[test]
    fn empty_has_no_bounds() {
        assert_eq!(Bounds::from_points(std::iter::empty()), None);
    }

    #[test]
    fn single_point_is_degenerate_box() {
        let b = Bounds::from_points([(45.83, 11.86)]).unwrap();
        assert_eq!(b.corners(), [[45.83, 11.86], [45.83, 11.86]]);
    }

    #[test]
    fn covers_all_points() {
        let points = [(45.9, 11.7), (45.6, 12.1), (45.75, 11.95), (46.0, 11.8)];
        let b = Bounds::from_points(points).unwrap();
        assert_eq!(b.south, 45.6);
        assert_eq!(b.north, 46.0);
        assert_eq!(b.west, 11.7);
        assert_eq!(b.east, 12.1);
        assert!(points.iter().all(|&(lat, lon)| {
            (b.south..=b.north).contains(&lat) && (b.west..=b.east).contains(&lon)
        }));
    }

    #[test]
    fn handles_negative_coordinates() {
        let b = Bounds::from_points([(-33.9, 151.2), (-34.1, 150.9)]).unwrap();
        assert_eq!(b.corners(), [[-34.1, 150.9], [-33.9, 151.2]]);
    }

    #[test]
    fn no_pois_keeps_default_view_and_fit_does_nothing() {
        let view = InitialView::for_pois(&[]);
        assert_eq!(view, InitialView::Default);
        assert_eq!(view.fit_target(), None);
    }

    #[test]
    fn loaded_pois_are_fitted() {
        let pois = [at(1, 45.84, 11.86), at(2, 45.81, 11.90)];
        let view = InitialView::for_pois(&pois);
        let expected = Bounds {
            south: 45.81,
            west: 11.86,
            north: 45.84,
            east: 11.90,
        };
        assert_eq!(view, InitialView::Fit(expected));
        assert_eq!(view.fit_target(), Some(expected));
    }
}
