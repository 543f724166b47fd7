pub mod config;
pub mod core;
pub mod display;
pub mod domain;
pub mod utils;

pub use config::CliConfig;
pub use core::{dashboard::Dashboard, search::SearchController};
pub use utils::error::{DashboardError, Result};
