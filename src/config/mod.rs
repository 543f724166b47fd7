use crate::domain::ports::ConfigProvider;
use crate::utils::error::Result;
use crate::utils::validation::{validate_non_empty_string, validate_url, Validate};
use clap::Parser;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, Parser)]
#[command(name = "zipscope")]
#[command(about = "Terminal dashboard for US Census ZCTA demographic profiles")]
pub struct CliConfig {
    /// Zip code to look up; omit to get an interactive prompt
    pub zip: Option<String>,

    #[arg(long, help = "Census Bureau API key")]
    pub api_key: String,

    #[arg(long, default_value = "https://api.census.gov/data")]
    pub profile_endpoint: String,

    #[arg(long, default_value = "https://api.zippopotam.us/us")]
    pub geocode_endpoint: String,

    #[arg(long, default_value = "2022")]
    pub year: u16,

    #[arg(long, default_value = "acs/acs5/profile")]
    pub dataset: String,

    #[arg(long, default_value = "DP02")]
    pub table_group: String,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,
}

impl ConfigProvider for CliConfig {
    fn profile_endpoint(&self) -> &str {
        &self.profile_endpoint
    }

    fn geocode_endpoint(&self) -> &str {
        &self.geocode_endpoint
    }

    fn year(&self) -> u16 {
        self.year
    }

    fn dataset(&self) -> &str {
        &self.dataset
    }

    fn table_group(&self) -> &str {
        &self.table_group
    }

    fn api_key(&self) -> &str {
        &self.api_key
    }
}

impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        validate_url("profile_endpoint", &self.profile_endpoint)?;
        validate_url("geocode_endpoint", &self.geocode_endpoint)?;
        validate_non_empty_string("api_key", &self.api_key)?;
        validate_non_empty_string("dataset", &self.dataset)?;
        validate_non_empty_string("table_group", &self.table_group)?;
        Ok(())
    }
}
