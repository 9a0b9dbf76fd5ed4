//! Timeline routes
//!
//! "now" is captured once at request ingress and passed down explicitly;
//! the engine below this layer never reads an ambient clock.

use std::sync::Arc;

use axum::extract::{Path, Query, State};
use axum::routing::get;
use axum::{Json, Router};
use chrono::Utc;
use serde::Deserialize;
use studyline_core::{MonthGrid, TimelineSlice};
use studyline_domain::{DEFAULT_UPCOMING_LIMIT, MAX_UPCOMING_LIMIT};
use tracing::info;

use crate::context::AppContext;
use crate::error::ApiError;

/// Build the application router.
pub fn router(ctx: Arc<AppContext>) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/learners/{learner_id}/timeline/month/{year}/{month}", get(month_view))
        .route("/learners/{learner_id}/timeline/upcoming", get(upcoming))
        .route("/learners/{learner_id}/timeline/overdue", get(overdue))
        .with_state(ctx)
}

async fn health() -> &'static str {
    "ok"
}

async fn month_view(
    State(ctx): State<Arc<AppContext>>,
    Path((learner_id, year, month)): Path<(String, i32, u32)>,
) -> Result<Json<MonthGrid>, ApiError> {
    let now = Utc::now();
    info!(%learner_id, year, month, "month view requested");
    let grid = ctx.timeline.month_view(&learner_id, year, month, now).await?;
    Ok(Json(grid))
}

#[derive(Debug, Deserialize)]
struct UpcomingParams {
    limit: Option<usize>,
}

async fn upcoming(
    State(ctx): State<Arc<AppContext>>,
    Path(learner_id): Path<String>,
    Query(params): Query<UpcomingParams>,
) -> Result<Json<TimelineSlice>, ApiError> {
    let now = Utc::now();
    let limit = clamp_limit(params.limit);
    info!(%learner_id, limit, "upcoming view requested");
    let slice = ctx.timeline.upcoming(&learner_id, now, Some(limit)).await?;
    Ok(Json(slice))
}

async fn overdue(
    State(ctx): State<Arc<AppContext>>,
    Path(learner_id): Path<String>,
) -> Result<Json<TimelineSlice>, ApiError> {
    let now = Utc::now();
    info!(%learner_id, "overdue view requested");
    let slice = ctx.timeline.overdue(&learner_id, now).await?;
    Ok(Json(slice))
}

fn clamp_limit(limit: Option<usize>) -> usize {
    limit.unwrap_or(DEFAULT_UPCOMING_LIMIT).clamp(1, MAX_UPCOMING_LIMIT)
}
