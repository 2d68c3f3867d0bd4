use std::sync::Arc;

use askama::Template;
use axum::extract::{Form, State};
use axum::http::StatusCode;
use axum::response::{Html, IntoResponse, Response};
use axum::routing::{get, post};
use axum::Router;

use crate::app::server::AppState;
use crate::core::estimator::{EstimateInput, Estimator};
use crate::core::format::EstimateText;
use crate::domain::model::Variant;

pub const DEFAULT_AREA: &str = "1455";
pub const DEFAULT_DISTANCE: &str = "949";
pub const DEFAULT_ROOMS: &str = "1";

pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/", get(index))
        .route("/estimate", post(submit))
}

pub struct SelectOption {
    pub value: String,
    pub selected: bool,
}

pub struct ResultView {
    pub headline: String,
    pub has_projection: bool,
    pub future_price: String,
    pub growth: String,
    pub color: &'static str,
}

#[derive(Template)]
#[template(path = "index.html")]
struct IndexTemplate {
    neighborhood_label: &'static str,
    rooms_label: &'static str,
    zoned: bool,
    show_area: bool,
    neighborhoods: Vec<SelectOption>,
    zones: Vec<SelectOption>,
    property_types: Vec<SelectOption>,
    area: String,
    distance: String,
    rooms: String,
    result: Option<ResultView>,
}

fn select_options(values: &[String], current: Option<&str>) -> Vec<SelectOption> {
    values
        .iter()
        .map(|value| SelectOption {
            value: value.clone(),
            selected: Some(value.as_str()) == current,
        })
        .collect()
}

fn result_view(text: EstimateText) -> ResultView {
    ResultView {
        headline: text.headline,
        has_projection: text.projection.is_some(),
        future_price: text.future_price.unwrap_or_default(),
        growth: text.growth.unwrap_or_default(),
        color: text.band.map(|b| b.as_str()).unwrap_or("green"),
    }
}

fn render_form(state: &AppState, input: &EstimateInput, result: Option<ResultView>) -> Response {
    let variant = state.settings.variant;
    let options = &state.options;

    // 預設選第一個
    let neighborhood = input
        .neighborhood
        .clone()
        .or_else(|| options.neighborhoods.first().cloned());
    let zone = input.zone.clone().or_else(|| options.zones.first().cloned());
    let property_type = input
        .property_type
        .clone()
        .or_else(|| options.property_types.first().cloned());

    let template = IndexTemplate {
        neighborhood_label: variant.neighborhood_label(),
        rooms_label: variant.rooms_label(),
        zoned: variant == Variant::Zoned,
        show_area: state.settings.area_required(),
        neighborhoods: select_options(&options.neighborhoods, neighborhood.as_deref()),
        zones: select_options(&options.zones, zone.as_deref()),
        property_types: select_options(&options.property_types, property_type.as_deref()),
        area: input.area.clone().unwrap_or_else(|| DEFAULT_AREA.to_string()),
        distance: input
            .distance
            .clone()
            .unwrap_or_else(|| DEFAULT_DISTANCE.to_string()),
        rooms: input.rooms.clone().unwrap_or_else(|| DEFAULT_ROOMS.to_string()),
        result,
    };

    match template.render() {
        Ok(html) => Html(html).into_response(),
        Err(e) => {
            tracing::error!("❌ Failed to render form: {}", e);
            (StatusCode::INTERNAL_SERVER_ERROR, "failed to render page").into_response()
        }
    }
}

async fn index(State(state): State<Arc<AppState>>) -> Response {
    render_form(&state, &EstimateInput::default(), None)
}

async fn submit(State(state): State<Arc<AppState>>, Form(input): Form<EstimateInput>) -> Response {
    let estimate = Estimator::new(&state.table, state.settings).estimate(&input);
    let view = result_view(EstimateText::from_estimate(&estimate));
    render_form(&state, &input, Some(view))
}
