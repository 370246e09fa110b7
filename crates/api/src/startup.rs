use crate::{
    db, index_handler, precipitation, routes, start_temp, stations, temp_range, tobs,
    trailing_year, DateRange, ObservationStore, QueryEngine,
};
use anyhow::anyhow;
use axum::{
    body::Body,
    extract::Request,
    middleware::{self, Next},
    response::IntoResponse,
    routing::get,
    Router,
};
use hyper::{
    header::{ACCEPT, CONTENT_TYPE},
    Method,
};
use log::{info, warn};
use std::sync::Arc;
use time::Date;
use tower_http::cors::{Any, CorsLayer};
use utoipa::OpenApi;
use utoipa_scalar::{Scalar, Servable};

#[derive(Clone)]
pub struct AppState {
    pub remote_url: String,
    pub engine: QueryEngine,
    /// Default window for the precipitation and tobs routes
    pub trailing_year: DateRange,
}

impl AppState {
    pub fn new(remote_url: String, store: Arc<dyn ObservationStore>) -> Self {
        let trailing_year = match store.last_observation_date() {
            Some(last) => trailing_year(last),
            None => {
                warn!("observation store is empty, trailing year covers nothing");
                DateRange::starting_at(Date::MIN)
            }
        };

        Self {
            remote_url,
            engine: QueryEngine::new(store),
            trailing_year,
        }
    }
}

#[derive(OpenApi)]
#[openapi(
    paths(
        routes::climate::climate_routes::precipitation,
        routes::climate::climate_routes::stations,
        routes::climate::climate_routes::tobs,
        routes::climate::climate_routes::start_temp,
        routes::climate::climate_routes::temp_range,
    ),
    components(
        schemas(
            crate::Scalar,
            routes::ErrorBody,
            db::Station,
        )
    ),
    tags(
        (name = "climate api", description = "a read-only api over historical station precipitation and temperature observations")
    )
)]
struct ApiDoc;

pub async fn build_app_state(
    remote_url: String,
    database: String,
) -> Result<AppState, anyhow::Error> {
    let store = db::load_store(&database)
        .await
        .map_err(|e| anyhow!("{}: {}", e.kind(), e))?;

    let state = AppState::new(remote_url, Arc::new(store));
    info!("Trailing year window: {}", state.trailing_year);
    Ok(state)
}

pub fn app(app_state: AppState) -> Router {
    let api_docs = ApiDoc::openapi();
    let cors = CorsLayer::new()
        .allow_methods([Method::GET, Method::OPTIONS])
        .allow_headers([ACCEPT, CONTENT_TYPE])
        .allow_origin(Any);

    Router::new()
        .route("/", get(index_handler))
        .route("/api/v1.0/precipitation", get(precipitation))
        .route("/api/v1.0/stations", get(stations))
        .route("/api/v1.0/tobs", get(tobs))
        // paths served by the first revision of the api
        .route("/api/v1.0/start_temp/{start}", get(start_temp))
        .route("/api/v1.0/temp_range/{start}/{end}", get(temp_range))
        .route("/api/v1.0/{start}", get(start_temp))
        .route("/api/v1.0/{start}/{end}", get(temp_range))
        .with_state(Arc::new(app_state))
        .layer(middleware::from_fn(log_request))
        .merge(Scalar::with_url("/docs", api_docs))
        .layer(cors)
}

async fn log_request(request: Request<Body>, next: Next) -> impl IntoResponse {
    let now = time::OffsetDateTime::now_utc();
    let path = request
        .uri()
        .path_and_query()
        .map(|p| p.as_str())
        .unwrap_or_default()
        .to_owned();
    info!(target: "http_request", "new request, {} {}", request.method().as_str(), path);

    let response = next.run(request).await;
    let response_time = time::OffsetDateTime::now_utc() - now;
    info!(target: "http_response", "response, code: {}, path: {}, time: {}", response.status().as_str(), path, response_time);

    response
}
