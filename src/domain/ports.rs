use crate::domain::model::{Projection, Variant};
use crate::utils::error::Result;
use async_trait::async_trait;

/// Where the spreadsheet export comes from.
#[async_trait]
pub trait TableSource: Send + Sync {
    async fn fetch(&self) -> Result<Vec<u8>>;

    /// Human-readable location, used in logs and the health endpoint.
    fn describe(&self) -> String;
}

pub trait ConfigProvider: Send + Sync {
    fn data_source(&self) -> &str;
    fn variant(&self) -> Variant;
    fn bind_addr(&self) -> &str;
    fn scale_by_area(&self) -> bool;
    fn projection(&self) -> Projection;
    fn fetch_timeout_seconds(&self) -> u64;
}
