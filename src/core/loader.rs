use crate::core::table::PriceTable;
use crate::core::{TableSource, Variant};
use crate::utils::error::Result;
use chrono::{DateTime, Utc};
use std::time::Instant;

/// A table plus where and when it was loaded.
#[derive(Debug, Clone)]
pub struct LoadedTable {
    pub table: PriceTable,
    pub source: String,
    pub loaded_at: DateTime<Utc>,
}

pub struct TableLoader<S: TableSource> {
    source: S,
    variant: Variant,
}

impl<S: TableSource> TableLoader<S> {
    pub fn new(source: S, variant: Variant) -> Self {
        Self { source, variant }
    }

    pub async fn load(&self) -> Result<LoadedTable> {
        let started = Instant::now();
        let location = self.source.describe();

        tracing::info!("📥 Loading {} price table from {}", self.variant, location);
        let bytes = self.source.fetch().await?;
        tracing::debug!("Fetched {} bytes", bytes.len());

        let table = PriceTable::from_csv_bytes(self.variant, &bytes)?;
        tracing::info!(
            "✅ Loaded {} records in {:?}",
            table.len(),
            started.elapsed()
        );

        Ok(LoadedTable {
            table,
            source: location,
            loaded_at: Utc::now(),
        })
    }
}
