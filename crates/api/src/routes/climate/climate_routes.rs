use axum::{
    extract::{Path, Query, State},
    Json,
};
use log::debug;
use serde::Deserialize;
use std::sync::Arc;
use time::Date;
use utoipa::IntoParams;

use crate::{flatten, resolve, routes::ApiError, AppState, Scalar};

/// Optional overrides for the trailing-year window
#[derive(Clone, Debug, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct WindowParams {
    /// Start date, YYYY-MM-DD (defaults to one year before the last observation)
    pub start: Option<String>,
    /// End date, YYYY-MM-DD (defaults to the last observation)
    pub end: Option<String>,
}

#[utoipa::path(
    get,
    path = "/api/v1.0/precipitation",
    params(WindowParams),
    responses(
        (status = OK, description = "Flattened [date, prcp, date, prcp, ...] for the trailing year", body = Vec<Scalar>),
        (status = BAD_REQUEST, description = "Malformed date or inverted range", body = crate::routes::ErrorBody)
    ))]
pub async fn precipitation(
    State(state): State<Arc<AppState>>,
    Query(params): Query<WindowParams>,
) -> Result<Json<Vec<Scalar>>, ApiError> {
    let window = state.trailing_year;
    let range = resolve(
        params.start.as_deref(),
        params.end.as_deref(),
        window.start(),
        window.end(),
    )?;
    debug!("precipitation over {}", range);

    let rows = state.engine.precipitation_by_date(&range);
    Ok(Json(flatten(&rows)))
}

#[utoipa::path(
    get,
    path = "/api/v1.0/stations",
    responses(
        (status = OK, description = "Flattened [station, name, station, name, ...]", body = Vec<Scalar>)
    ))]
pub async fn stations(State(state): State<Arc<AppState>>) -> Json<Vec<Scalar>> {
    Json(flatten(&state.engine.station_list()))
}

#[utoipa::path(
    get,
    path = "/api/v1.0/tobs",
    params(WindowParams),
    responses(
        (status = OK, description = "Flattened [date, station, tobs, ...] for the trailing year", body = Vec<Scalar>),
        (status = BAD_REQUEST, description = "Malformed date or inverted range", body = crate::routes::ErrorBody)
    ))]
pub async fn tobs(
    State(state): State<Arc<AppState>>,
    Query(params): Query<WindowParams>,
) -> Result<Json<Vec<Scalar>>, ApiError> {
    let window = state.trailing_year;
    let range = resolve(
        params.start.as_deref(),
        params.end.as_deref(),
        window.start(),
        window.end(),
    )?;
    debug!("temperature observations over {}", range);

    let rows = state.engine.temperature_observations(&range);
    Ok(Json(flatten(&rows)))
}

#[utoipa::path(
    get,
    path = "/api/v1.0/{start}",
    params(
        ("start" = String, Path, description = "Start date, YYYY-MM-DD"),
    ),
    responses(
        (status = OK, description = "[min, avg, max] from start onwards, or [] when there is no data", body = Vec<Scalar>),
        (status = BAD_REQUEST, description = "Malformed start date", body = crate::routes::ErrorBody)
    ))]
pub async fn start_temp(
    State(state): State<Arc<AppState>>,
    Path(start): Path<String>,
) -> Result<Json<Vec<Scalar>>, ApiError> {
    let range = resolve(Some(start.as_str()), None, Date::MIN, None)?;
    debug!("temperature stats over {}", range);

    let stats = state.engine.temperature_stats(&range);
    Ok(Json(flatten(stats.as_ref())))
}

#[utoipa::path(
    get,
    path = "/api/v1.0/{start}/{end}",
    params(
        ("start" = String, Path, description = "Start date, YYYY-MM-DD"),
        ("end" = String, Path, description = "End date (inclusive), YYYY-MM-DD"),
    ),
    responses(
        (status = OK, description = "[min, avg, max] between the two dates, or [] when there is no data", body = Vec<Scalar>),
        (status = BAD_REQUEST, description = "Malformed date or start after end", body = crate::routes::ErrorBody)
    ))]
pub async fn temp_range(
    State(state): State<Arc<AppState>>,
    Path((start, end)): Path<(String, String)>,
) -> Result<Json<Vec<Scalar>>, ApiError> {
    let range = resolve(Some(start.as_str()), Some(end.as_str()), Date::MIN, None)?;
    debug!("temperature stats over {}", range);

    let stats = state.engine.temperature_stats(&range);
    Ok(Json(flatten(stats.as_ref())))
}
