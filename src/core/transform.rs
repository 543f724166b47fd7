use crate::core::{CensusRecord, CensusTable, KeyStats, NOT_AVAILABLE};

/// ACS data profile column ids the stat grid is built from.
pub mod column_keys {
    /// Total population estimate.
    pub const POPULATION: &str = "DP02_0001E";

    /// Total households. The upstream dashboard queries the same column
    /// id for population and households; reproduced as-is rather than
    /// guessing at a different column.
    pub const HOUSEHOLDS: &str = "DP02_0001E";

    /// Average household size.
    pub const AVG_HOUSEHOLD_SIZE: &str = "DP02_0016E";

    /// Percent with a bachelor's degree or higher.
    pub const BACHELORS_OR_HIGHER_PCT: &str = "DP02_0068PE";
}

/// Pairs the header row with the first data row positionally. Returns
/// `None` when the table has no data row.
pub fn table_to_record(table: &CensusTable) -> Option<CensusRecord> {
    if table.len() < 2 {
        return None;
    }
    let pairs = table[0]
        .iter()
        .cloned()
        .zip(table[1].iter().cloned())
        .collect();
    Some(CensusRecord::from_pairs(pairs))
}

/// Looks up the four fixed stat columns, substituting "N/A" for any that
/// are missing from the record.
pub fn extract_key_stats(record: &CensusRecord) -> KeyStats {
    let lookup = |key: &str| record.get(key).unwrap_or(NOT_AVAILABLE).to_string();

    KeyStats {
        population: lookup(column_keys::POPULATION),
        households: lookup(column_keys::HOUSEHOLDS),
        avg_household_size: lookup(column_keys::AVG_HOUSEHOLD_SIZE),
        bachelors_or_higher_pct: lookup(column_keys::BACHELORS_OR_HIGHER_PCT),
    }
}
