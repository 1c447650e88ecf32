use serde::Deserialize;

/// POI identity as it appears in the data file (numeric or string).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Deserialize)]
#[serde(untagged)]
pub enum PoiId {
    Number(i64),
    Text(String),
}

/// A point of interest loaded from the static data file.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Poi {
    pub id: PoiId,
    pub name: String,
    pub category: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub desc: String,
    pub lat: f64,
    pub lon: f64,
    #[serde(default)]
    pub url: Option<String>,
}

fn null_as_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: serde::Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

impl Poi {
    /// Lowercased `name + " " + desc`, the text the search term is matched against.
    pub fn haystack(&self) -> String {
        format!("{} {}", self.name, self.desc).to_lowercase()
    }

    pub const fn coords(&self) -> (f64, f64) {
        (self.lat, self.lon)
    }

    /// External link, ignoring empty strings.
    pub fn link(&self) -> Option<&str> {
        self.url.as_deref().filter(|url| !url.is_empty())
    }
}

/// Result of coercing a fetched JSON body into POIs.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ParsedPois {
    pub pois: Vec<Poi>,
    /// Array elements that did not deserialize as a POI.
    pub skipped: usize,
}

/// Coerce an arbitrary JSON value into a POI collection.
///
/// Anything other than an array yields an empty collection. Array elements that
/// are not valid POIs are dropped and counted in [`ParsedPois::skipped`].
pub fn parse_pois(value: serde_json::Value) -> ParsedPois {
    let serde_json::Value::Array(items) = value else {
        return ParsedPois::default();
    };

    let mut parsed = ParsedPois {
        pois: Vec::with_capacity(items.len()),
        skipped: 0,
    };
    for item in items {
        match serde_json::from_value::<Poi>(item) {
            Ok(poi) => parsed.pois.push(poi),
            Err(_) => parsed.skipped += 1,
        }
    }
    parsed
}
