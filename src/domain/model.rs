/// Raw profile response body: row 0 is column names, row 1 is values for
/// the queried area. Both rows have the same length.
pub type CensusTable = Vec<Vec<String>>;

/// Sentinel shown for stats whose column is missing from the record.
pub const NOT_AVAILABLE: &str = "N/A";

/// Ordered column-name to value mapping for one ZCTA.
///
/// Backed by a pair list rather than a hash map so iteration order stays
/// the header order of the source table.
#[derive(Debug, Clone, Default)]
pub struct CensusRecord {
    fields: Vec<(String, String)>,
}

impl CensusRecord {
    pub fn from_pairs(fields: Vec<(String, String)>) -> Self {
        Self { fields }
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.fields
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.fields.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

/// Latitude/longitude in floating-point degrees.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Coordinates {
    pub latitude: f64,
    pub longitude: f64,
}

impl Coordinates {
    /// Geographic center of the contiguous US, substituted when geocoding fails.
    pub const FALLBACK: Coordinates = Coordinates {
        latitude: 39.8283,
        longitude: -98.5795,
    };
}

/// The four headline stats picked out of a `CensusRecord` by fixed key lookup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyStats {
    pub population: String,
    pub households: String,
    pub avg_household_size: String,
    pub bachelors_or_higher_pct: String,
}

/// View state for the most recent successful search.
#[derive(Debug, Clone)]
pub struct SearchResult {
    pub zip: String,
    pub record: CensusRecord,
    pub stats: KeyStats,
    pub coordinates: Coordinates,
}
