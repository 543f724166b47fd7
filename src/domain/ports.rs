use crate::domain::model::SearchResult;
use crate::utils::error::Result;
use async_trait::async_trait;

pub trait ConfigProvider: Send + Sync {
    fn profile_endpoint(&self) -> &str;
    fn geocode_endpoint(&self) -> &str;
    fn year(&self) -> u16;
    fn dataset(&self) -> &str;
    fn table_group(&self) -> &str;
    fn api_key(&self) -> &str;
}

#[async_trait]
pub trait SearchService: Send + Sync {
    async fn search(&self, zip: &str) -> Result<SearchResult>;
}
