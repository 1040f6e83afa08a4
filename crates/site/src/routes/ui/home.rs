use std::sync::Arc;

use axum::{extract::State, response::Html};

use crate::{templates::home_page, AppState};

/// Handler for the landing page (GET /)
pub async fn index_handler(State(state): State<Arc<AppState>>) -> Html<String> {
    let loader = &state.loader;
    Html(
        home_page(
            loader.container_id(),
            loader.reveal_plan(),
            &state.twitter_handle,
        )
        .into_string(),
    )
}
