use crate::adapters::DataSource;
use crate::app::routes;
use crate::core::estimator::EstimatorSettings;
use crate::core::loader::{LoadedTable, TableLoader};
use crate::core::table::{FormOptions, PriceTable};
use crate::core::ConfigProvider;
use crate::utils::error::Result;
use crate::utils::validation::Validate;
use axum::Router;
use chrono::{DateTime, Utc};
use std::sync::Arc;
use std::time::Duration;
use tower_http::trace::TraceLayer;

/// Read-only state shared by every handler.
pub struct AppState {
    pub table: PriceTable,
    pub settings: EstimatorSettings,
    pub options: FormOptions,
    pub source: String,
    pub loaded_at: DateTime<Utc>,
}

impl AppState {
    pub fn new(loaded: LoadedTable, settings: EstimatorSettings) -> Self {
        let options = loaded.table.form_options();
        Self {
            table: loaded.table,
            settings,
            options,
            source: loaded.source,
            loaded_at: loaded.loaded_at,
        }
    }
}

pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .merge(routes::pages::router())
        .merge(routes::api::router())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Loads the table once, then serves until the process is stopped.
pub async fn run<C: ConfigProvider + Validate>(config: &C) -> Result<()> {
    config.validate()?;

    let timeout = Duration::from_secs(config.fetch_timeout_seconds());
    let source = DataSource::from_location(config.data_source(), timeout)?;
    let loaded = TableLoader::new(source, config.variant()).load().await?;

    let settings = EstimatorSettings::from_config(config);
    tracing::info!(
        "Projection: {:?}, scale by area: {}",
        settings.projection,
        settings.scale_by_area
    );

    let state = Arc::new(AppState::new(loaded, settings));
    serve(state, config.bind_addr()).await
}

pub async fn serve(state: Arc<AppState>, bind: &str) -> Result<()> {
    let listener = tokio::net::TcpListener::bind(bind).await?;
    tracing::info!("🚀 Listening on http://{}", listener.local_addr()?);
    axum::serve(listener, router(state)).await?;
    Ok(())
}
