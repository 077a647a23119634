use axum::Json;
use axum::Router;
use axum::http::{StatusCode, header};
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post};
use rand::SeedableRng;
use rand::rngs::StdRng;
use serde::{Deserialize, Serialize};
use tower_http::cors::{Any, CorsLayer};
use tracing::debug;
use tripmap_core::{
    Day, DayPlan, FOCUS_ZOOM, FitOptions, PlaceIdentifier, Viewport, plan_days,
    to_feature_collection,
};

use crate::error::AppError;

const DEFAULT_WIDTH: f64 = 1024.0;
const DEFAULT_HEIGHT: f64 = 768.0;

#[derive(Debug, Deserialize)]
pub struct PlanRequest {
    pub days: Vec<Day>,
    /// Makes colors past the palette reproducible.
    #[serde(default)]
    pub seed: Option<u64>,
    /// Center the viewport on this place instead of fitting all places.
    #[serde(default)]
    pub focus: Option<PlaceIdentifier>,
    #[serde(default)]
    pub width: Option<f64>,
    #[serde(default)]
    pub height: Option<f64>,
}

impl PlanRequest {
    fn plan(&self) -> Result<DayPlan, AppError> {
        let plan = match self.seed {
            Some(seed) => plan_days(&self.days, &mut StdRng::seed_from_u64(seed))?,
            None => plan_days(&self.days, &mut rand::rng())?,
        };
        debug!(
            "planned {} places and {} routes",
            plan.places.len(),
            plan.routes.len()
        );
        Ok(plan)
    }
}

#[derive(Debug, Serialize)]
pub struct PlanResponse {
    #[serde(flatten)]
    pub plan: DayPlan,
    pub viewport: Viewport,
}

pub fn create_router() -> Router {
    Router::new()
        .route("/plan", post(plan))
        .route("/plan/geojson", post(plan_geojson))
        .route("/health", get(health))
        .layer(CorsLayer::new().allow_origin(Any))
}

async fn plan(Json(request): Json<PlanRequest>) -> Result<Json<PlanResponse>, AppError> {
    let plan = request.plan()?;
    let focused = request
        .focus
        .as_ref()
        .and_then(|id| plan.find_place(id))
        .map(|place| Viewport::focus(place, FOCUS_ZOOM));
    let viewport = focused.unwrap_or_else(|| {
        Viewport::fit(
            &plan.places,
            request.width.unwrap_or(DEFAULT_WIDTH),
            request.height.unwrap_or(DEFAULT_HEIGHT),
            FitOptions::default(),
        )
    });

    Ok(Json(PlanResponse { plan, viewport }))
}

async fn plan_geojson(Json(request): Json<PlanRequest>) -> Result<Response, AppError> {
    let plan = request.plan()?;
    let body = serde_json::to_string(&to_feature_collection(&plan))?;

    Ok((
        StatusCode::OK,
        [(header::CONTENT_TYPE, "application/geo+json")],
        body,
    )
        .into_response())
}

async fn health() -> &'static str {
    "OK"
}
