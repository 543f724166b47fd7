use crate::core::{SearchResult, SearchService};
use crate::display;
use crate::utils::error::Result;
use std::io::{self, BufRead, Write};

/// View-controller for the terminal dashboard.
///
/// Owns the most recent successful search; a failed search leaves that
/// state untouched.
pub struct Dashboard<S: SearchService> {
    service: S,
    current: Option<SearchResult>,
}

impl<S: SearchService> Dashboard<S> {
    pub fn new(service: S) -> Self {
        Self {
            service,
            current: None,
        }
    }

    pub fn current(&self) -> Option<&SearchResult> {
        self.current.as_ref()
    }

    /// Runs one search and re-renders on success. On failure the error is
    /// returned and the previous results stay on screen.
    pub async fn submit(&mut self, zip: &str) -> Result<()> {
        let result = self.service.search(zip).await?;
        display::render(&result);
        self.current = Some(result);
        Ok(())
    }

    /// One-shot mode: a single search whose error propagates to the caller.
    pub async fn run_once(&mut self, zip: &str) -> Result<()> {
        self.submit(zip).await
    }

    /// Interactive mode: one search per submitted line. A blank line or
    /// EOF exits. Each search is awaited before the next prompt, so only
    /// one search is ever in flight.
    pub async fn run_interactive(&mut self) -> Result<()> {
        println!("Enter a zip code to look up (blank line to quit).");
        let stdin = io::stdin();
        loop {
            print!("zip> ");
            io::stdout().flush()?;

            let mut line = String::new();
            if stdin.lock().read_line(&mut line)? == 0 {
                break;
            }
            let zip = line.trim();
            if zip.is_empty() {
                break;
            }

            if let Err(e) = self.submit(zip).await {
                display::render_error(&e);
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{CensusRecord, Coordinates, KeyStats};
    use crate::utils::error::DashboardError;
    use async_trait::async_trait;

    /// Succeeds for any zip except "00000", which fails with a fetch error.
    struct ScriptedService;

    fn result_for(zip: &str) -> SearchResult {
        let record =
            CensusRecord::from_pairs(vec![("DP02_0001E".to_string(), "1000".to_string())]);
        SearchResult {
            zip: zip.to_string(),
            stats: crate::core::transform::extract_key_stats(&record),
            record,
            coordinates: Coordinates::FALLBACK,
        }
    }

    #[async_trait]
    impl SearchService for ScriptedService {
        async fn search(&self, zip: &str) -> Result<SearchResult> {
            if zip == "00000" {
                return Err(DashboardError::Fetch {
                    message: "census API returned 500".to_string(),
                });
            }
            Ok(result_for(zip))
        }
    }

    #[tokio::test]
    async fn test_submit_updates_current() {
        let mut dashboard = Dashboard::new(ScriptedService);

        dashboard.submit("10001").await.unwrap();

        let current = dashboard.current().unwrap();
        assert_eq!(current.zip, "10001");
        assert_eq!(
            current.stats,
            KeyStats {
                population: "1000".to_string(),
                households: "1000".to_string(),
                avg_household_size: "N/A".to_string(),
                bachelors_or_higher_pct: "N/A".to_string(),
            }
        );
    }

    #[tokio::test]
    async fn test_failed_submit_keeps_previous_results() {
        let mut dashboard = Dashboard::new(ScriptedService);
        dashboard.submit("10001").await.unwrap();

        let err = dashboard.submit("00000").await.unwrap_err();

        assert!(matches!(err, DashboardError::Fetch { .. }));
        assert_eq!(dashboard.current().unwrap().zip, "10001");
    }

    #[tokio::test]
    async fn test_failed_first_submit_leaves_no_results() {
        let mut dashboard = Dashboard::new(ScriptedService);

        assert!(dashboard.submit("00000").await.is_err());

        assert!(dashboard.current().is_none());
    }
}
