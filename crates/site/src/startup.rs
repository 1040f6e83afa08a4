use crate::{
    dom::{ClientReveal, RevealPlan},
    events_fragment_handler, index_handler,
    schedule::{source_for, EventListLoader},
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
use log::info;
use std::{sync::Arc, time::Duration};
use tower_http::services::ServeDir;

#[derive(Clone)]
pub struct AppState {
    pub static_dir: String,
    pub twitter_handle: String,
    pub loader: Arc<EventListLoader>,
}

/// Everything the server needs to know about where the schedule lives and
/// how its cards appear
#[derive(Debug, Clone)]
pub struct ScheduleSettings {
    pub location: String,
    pub timeout: Option<Duration>,
    pub container_id: String,
    pub reveal: RevealPlan,
}

pub fn build_app_state(
    static_dir: String,
    twitter_handle: String,
    schedule: ScheduleSettings,
) -> Result<AppState, anyhow::Error> {
    let source = source_for(&schedule.location, schedule.timeout)
        .map_err(|e| anyhow!("error setting up schedule source: {}", e))?;

    // Cards are revealed by the browser once the fragment is swapped in
    let loader = EventListLoader::new(source)
        .with_container_id(&schedule.container_id)
        .with_reveal(Arc::new(ClientReveal))
        .with_reveal_plan(schedule.reveal);

    Ok(AppState {
        static_dir,
        twitter_handle,
        loader: Arc::new(loader),
    })
}

pub fn app(app_state: AppState) -> Router {
    let serve_static = ServeDir::new(&app_state.static_dir);

    Router::new()
        .route("/", get(index_handler))
        // HTMX fragment routes
        .route("/fragments/events", get(events_fragment_handler))
        .with_state(Arc::new(app_state))
        .layer(middleware::from_fn(log_request))
        .nest_service("/static", serve_static)
}

async fn log_request(request: Request<Body>, next: Next) -> impl IntoResponse {
    let now = time::OffsetDateTime::now_utc();
    let path = request
        .uri()
        .path_and_query()
        .map(|p| p.as_str())
        .unwrap_or_default()
        .to_string();
    info!(target: "http_request", "new request, {} {}", request.method().as_str(), path);

    let response = next.run(request).await;
    let response_time = time::OffsetDateTime::now_utc() - now;
    info!(target: "http_response", "response, code: {}, time: {}", response.status().as_str(), response_time);

    response
}
