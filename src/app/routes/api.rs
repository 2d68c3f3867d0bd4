use std::sync::Arc;

use axum::extract::{Query, State};
use axum::response::{IntoResponse, Json};
use axum::routing::get;
use axum::Router;
use serde::Serialize;
use serde_json::json;

use crate::app::server::AppState;
use crate::core::estimator::{EstimateInput, Estimator};
use crate::core::format::EstimateText;
use crate::domain::model::Estimate;

pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/api/estimate", get(api_estimate))
        .route("/api/options", get(api_options))
        .route("/api/health", get(api_health))
}

#[derive(Debug, Serialize)]
struct EstimateResponse {
    #[serde(flatten)]
    text: EstimateText,
    current: Option<f64>,
    future: Option<f64>,
}

async fn api_estimate(
    State(state): State<Arc<AppState>>,
    Query(input): Query<EstimateInput>,
) -> impl IntoResponse {
    let estimate = Estimator::new(&state.table, state.settings).estimate(&input);
    let (current, future) = match &estimate {
        Estimate::Quote(quote) => (Some(quote.current), Some(quote.future)),
        _ => (None, None),
    };

    Json(EstimateResponse {
        text: EstimateText::from_estimate(&estimate),
        current,
        future,
    })
}

async fn api_options(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    Json(state.options.clone())
}

async fn api_health(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    Json(json!({
        "records": state.table.len(),
        "variant": state.table.variant(),
        "source": state.source,
        "loaded_at": state.loaded_at,
    }))
}
