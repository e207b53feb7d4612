//! Versioned hadith endpoints

pub mod hadiths;

use axum::{routing::get, Router};

use super::state::AppState;

/// Create v1 API router
pub fn create_v1_router() -> Router<AppState> {
    Router::new()
        .route("/hadiths/{hadith_id}", get(hadiths::get_hadith))
        .route("/hadiths/{hadith_id}/related", get(hadiths::get_related))
}
