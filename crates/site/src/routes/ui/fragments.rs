use std::sync::Arc;

use axum::{extract::State, response::Html};

use crate::{dom::Page, AppState};

/// Handler for the schedule fragment (GET /fragments/events)
///
/// Always answers 200: load failures are rendered as the error block.
pub async fn events_fragment_handler(State(state): State<Arc<AppState>>) -> Html<String> {
    let container_id = state.loader.container_id();
    let page = Page::new().with_element(container_id, "");

    state.loader.load(&page).await;

    Html(page.inner_html(container_id).unwrap_or_default())
}
