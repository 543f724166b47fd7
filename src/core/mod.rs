pub mod dashboard;
pub mod search;
pub mod transform;

pub use crate::domain::model::{
    CensusRecord, CensusTable, Coordinates, KeyStats, SearchResult, NOT_AVAILABLE,
};
pub use crate::domain::ports::{ConfigProvider, SearchService};
pub use crate::utils::error::Result;
