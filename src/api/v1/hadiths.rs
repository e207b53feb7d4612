//! Hadith endpoint handlers

use axum::{
    extract::{Path, State},
    Json,
};
use tracing::debug;

use crate::api::state::AppState;
use crate::api::types::{ApiError, DataResponse, LocaleParams, Query};
use crate::domain::hadith::{normalize_locale, Hadith, HadithId};

/// GET /v1/hadiths/{hadith_id}
pub async fn get_hadith(
    State(state): State<AppState>,
    Path(hadith_id): Path<String>,
    Query(params): Query<LocaleParams>,
) -> Result<Json<DataResponse<Hadith>>, ApiError> {
    let (id, locale) = parse_request(&state, &hadith_id, params)?;
    debug!(hadith_id = %id, locale = %locale, "Getting hadith");

    let hadith = fetch_subject(&state, id, &locale).await?;

    Ok(Json(DataResponse::new(hadith)))
}

/// GET /v1/hadiths/{hadith_id}/related
///
/// Recommendations are best effort: upstream trouble while resolving them
/// yields an empty list, only a failure to load the subject is an error.
pub async fn get_related(
    State(state): State<AppState>,
    Path(hadith_id): Path<String>,
    Query(params): Query<LocaleParams>,
) -> Result<Json<DataResponse<Vec<Hadith>>>, ApiError> {
    let (id, locale) = parse_request(&state, &hadith_id, params)?;
    debug!(hadith_id = %id, locale = %locale, "Resolving related hadiths");

    let subject = fetch_subject(&state, id, &locale).await?;
    let related = state.resolver.get_related(&subject, &locale).await;

    Ok(Json(DataResponse::new(related)))
}

fn parse_request(
    state: &AppState,
    hadith_id: &str,
    params: LocaleParams,
) -> Result<(HadithId, String), ApiError> {
    let id: HadithId = hadith_id.parse()?;
    let locale = normalize_locale(params.locale.as_deref().unwrap_or(&state.default_locale))?;

    Ok((id, locale))
}

async fn fetch_subject(state: &AppState, id: HadithId, locale: &str) -> Result<Hadith, ApiError> {
    state
        .hadith_api
        .get_hadith(id, locale)
        .await?
        .ok_or_else(|| {
            ApiError::not_found(format!("Hadith {} not found", id)).with_code("not_found")
        })
}
