use crate::core::transform::{extract_key_stats, table_to_record};
use crate::core::{CensusTable, ConfigProvider, Coordinates, SearchResult, SearchService};
use crate::utils::error::{DashboardError, Result};
use crate::utils::validation::{validate_non_empty_string, validate_zip_code};
use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;

#[derive(Debug, Deserialize)]
struct GeocodeResponse {
    places: Vec<GeocodePlace>,
}

#[derive(Debug, Deserialize)]
struct GeocodePlace {
    latitude: String,
    longitude: String,
}

/// Runs one search: profile fetch first, then a best-effort geocode.
pub struct SearchController<C: ConfigProvider> {
    config: C,
    client: Client,
}

impl<C: ConfigProvider> SearchController<C> {
    pub fn new(config: C) -> Self {
        Self {
            config,
            client: Client::new(),
        }
    }

    fn profile_url(&self, zip: &str) -> String {
        format!(
            "{}/{}/{}?get=group({})&for=zip%20code%20tabulation%20area:{}&key={}",
            self.config.profile_endpoint(),
            self.config.year(),
            self.config.dataset(),
            self.config.table_group(),
            zip,
            self.config.api_key(),
        )
    }

    async fn fetch_profile(&self, zip: &str) -> Result<CensusTable> {
        // The URL carries the API key, so log the parameters instead.
        tracing::debug!(
            "requesting {} {} profile for ZCTA {}",
            self.config.year(),
            self.config.table_group(),
            zip
        );
        let response = self.client.get(self.profile_url(zip)).send().await?;

        let status = response.status();
        tracing::debug!("profile response status: {}", status);
        if !status.is_success() {
            return Err(DashboardError::Fetch {
                message: format!("census API returned {} for ZCTA {}", status, zip),
            });
        }

        let body = response.text().await?;
        let table: CensusTable = serde_json::from_str(&body)?;
        Ok(table)
    }

    /// Geocoding is best-effort: any failure falls back to a fixed
    /// coordinate pair and never fails the search.
    async fn fetch_coordinates(&self, zip: &str) -> Coordinates {
        match self.try_fetch_coordinates(zip).await {
            Ok(coordinates) => coordinates,
            Err(e) => {
                tracing::debug!("geocoding failed for {}: {}; using fallback", zip, e);
                Coordinates::FALLBACK
            }
        }
    }

    async fn try_fetch_coordinates(&self, zip: &str) -> Result<Coordinates> {
        let url = format!("{}/{}", self.config.geocode_endpoint(), zip);
        let response = self.client.get(&url).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(DashboardError::Fetch {
                message: format!("geocoder returned {} for {}", status, zip),
            });
        }

        let body: GeocodeResponse = response.json().await?;
        let place = body.places.first().ok_or_else(|| DashboardError::Fetch {
            message: format!("geocode response had no places for {}", zip),
        })?;

        let latitude = place.latitude.parse().map_err(|_| DashboardError::Fetch {
            message: format!("unparseable latitude '{}'", place.latitude),
        })?;
        let longitude = place.longitude.parse().map_err(|_| DashboardError::Fetch {
            message: format!("unparseable longitude '{}'", place.longitude),
        })?;
        Ok(Coordinates {
            latitude,
            longitude,
        })
    }
}

#[async_trait]
impl<C: ConfigProvider> SearchService for SearchController<C> {
    async fn search(&self, zip: &str) -> Result<SearchResult> {
        // Validate before any network call is issued.
        validate_zip_code("zip", zip)?;
        validate_non_empty_string("api_key", self.config.api_key())?;

        let table = self.fetch_profile(zip).await?;
        let record = table_to_record(&table).ok_or_else(|| DashboardError::Fetch {
            message: format!("no data row in profile response for ZCTA {}", zip),
        })?;
        let stats = extract_key_stats(&record);

        let coordinates = self.fetch_coordinates(zip).await;

        Ok(SearchResult {
            zip: zip.to_string(),
            record,
            stats,
            coordinates,
        })
    }
}
