use std::sync::Arc;

use axum::{
    Json,
    extract::{FromRequest, State},
    response::Html,
};
use tracing::{debug, warn};

use crate::{
    AppState,
    error::{AppError, AppResult},
    models::{MovieCreate, MoviePublic, SummaryRequest, SummaryResponse},
    summary, templates,
};

/// JSON body extractor whose rejections render as [`AppError`].
#[derive(FromRequest)]
#[from_request(via(axum::Json), rejection(AppError))]
pub struct ApiJson<T>(pub T);

pub async fn index(State(state): State<Arc<AppState>>) -> Html<String> {
    Html(templates::dashboard_page(&state.config.api_url))
}

pub async fn create_movie(
    State(state): State<Arc<AppState>>,
    ApiJson(input): ApiJson<MovieCreate>,
) -> AppResult<Json<MoviePublic>> {
    let movie = state.store.create_movie(input).await?;
    Ok(Json(movie))
}

pub async fn random_movie(State(state): State<Arc<AppState>>) -> AppResult<Json<MoviePublic>> {
    let movie = state
        .store
        .random_movie()
        .await?
        .ok_or_else(|| AppError::NotFound("No movies found in database".to_string()))?;

    debug!(movie_id = movie.id, "picked random movie");
    Ok(Json(movie))
}

pub async fn generate_summary(
    State(state): State<Arc<AppState>>,
    ApiJson(req): ApiJson<SummaryRequest>,
) -> AppResult<Json<SummaryResponse>> {
    let movie = state
        .store
        .find_movie(req.movie_id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Movie with ID {} not found", req.movie_id)))?;

    let prompt = summary::build_prompt(&movie);
    debug!(movie_id = movie.id, actors = movie.actors.len(), "requesting summary");

    let summary_text = state.summarizer.complete(&prompt).await.inspect_err(|err| {
        warn!(movie_id = movie.id, error = %err, "summary provider failed");
    })?;

    Ok(Json(SummaryResponse { summary_text }))
}
