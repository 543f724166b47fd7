use crate::utils::error::{DashboardError, Result};
use regex::Regex;
use std::sync::OnceLock;
use url::Url;

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

pub fn validate_url(field_name: &str, url_str: &str) -> Result<()> {
    if url_str.is_empty() {
        return Err(DashboardError::Validation {
            field: field_name.to_string(),
            reason: "URL cannot be empty".to_string(),
        });
    }

    match Url::parse(url_str) {
        Ok(url) => match url.scheme() {
            "http" | "https" => Ok(()),
            scheme => Err(DashboardError::Validation {
                field: field_name.to_string(),
                reason: format!("Unsupported URL scheme: {}", scheme),
            }),
        },
        Err(e) => Err(DashboardError::Validation {
            field: field_name.to_string(),
            reason: format!("Invalid URL format: {}", e),
        }),
    }
}

pub fn validate_non_empty_string(field_name: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(DashboardError::Validation {
            field: field_name.to_string(),
            reason: "Value cannot be empty or whitespace-only".to_string(),
        });
    }
    Ok(())
}

fn zip_pattern() -> &'static Regex {
    static ZIP_PATTERN: OnceLock<Regex> = OnceLock::new();
    ZIP_PATTERN.get_or_init(|| Regex::new(r"^[0-9]{5}$").expect("valid zip code pattern"))
}

/// Zip codes must be exactly five ASCII digits, which is what the Census
/// API accepts as a ZCTA id.
pub fn validate_zip_code(field_name: &str, zip: &str) -> Result<()> {
    validate_non_empty_string(field_name, zip)?;

    if !zip_pattern().is_match(zip) {
        return Err(DashboardError::Validation {
            field: field_name.to_string(),
            reason: format!("'{}' is not a five-digit zip code", zip),
        });
    }
    Ok(())
}
