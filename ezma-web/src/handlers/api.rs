//! JSON API handlers for external clients

use axum::extract::{Path, Query, State};
use axum::response::Json;
use ezma_core::{LibraryId, LibraryView};

use crate::pages::LibraryPageQuery;
use crate::server::AppState;

/// Returns the resolved library page view as JSON.
///
/// Same resolution as the HTML page, including fallback data. The
/// `library_source` and `books_source` fields tell clients which parts
/// came from the catalog.
pub async fn api_library(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Query(params): Query<LibraryPageQuery>,
) -> Json<LibraryView> {
    let id = LibraryId::new(id);
    Json(state.catalog.load_view(&id, params.q.as_deref()).await)
}
