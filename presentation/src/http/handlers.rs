//! Route handlers

use super::AppState;
use super::error::ApiError;
use axum::{
    Json,
    extract::{State, rejection::JsonRejection},
};
use scripture_domain::{AnswerResult, ComparativeResult, Question, SourceTag};
use serde::Deserialize;
use tracing::{error, warn};

/// Body of every `/ask/*` request
#[derive(Debug, Deserialize)]
pub struct AskRequest {
    #[serde(default)]
    pub question: Option<String>,
}

/// Validate the payload into a [`Question`].
///
/// Malformed JSON, a missing or null field and a blank string all count
/// as a missing question.
fn question_from(
    route: &str,
    payload: Result<Json<AskRequest>, JsonRejection>,
) -> Result<Question, ApiError> {
    let request = payload.map_err(|rejection| {
        warn!(route, error = %rejection, "Rejected request body");
        ApiError::MissingQuestion
    })?;
    request
        .0
        .question
        .and_then(Question::try_new)
        .ok_or(ApiError::MissingQuestion)
}

async fn ask_single(
    state: AppState,
    route: &str,
    source: SourceTag,
    payload: Result<Json<AskRequest>, JsonRejection>,
) -> Result<Json<AnswerResult>, ApiError> {
    let question = question_from(route, payload)?;
    let result = state
        .use_case
        .answer_single_source(question, source)
        .await
        .inspect_err(|e| error!(route, error = %e, "Request failed"))?;
    Ok(Json(result))
}

pub async fn ask_gita(
    State(state): State<AppState>,
    payload: Result<Json<AskRequest>, JsonRejection>,
) -> Result<Json<AnswerResult>, ApiError> {
    ask_single(state, "/ask/gita", SourceTag::Gita, payload).await
}

pub async fn ask_quran(
    State(state): State<AppState>,
    payload: Result<Json<AskRequest>, JsonRejection>,
) -> Result<Json<AnswerResult>, ApiError> {
    ask_single(state, "/ask/quran", SourceTag::Quran, payload).await
}

pub async fn ask_bible(
    State(state): State<AppState>,
    payload: Result<Json<AskRequest>, JsonRejection>,
) -> Result<Json<AnswerResult>, ApiError> {
    ask_single(state, "/ask/bible", SourceTag::Bible, payload).await
}

pub async fn ask_all(
    State(state): State<AppState>,
    payload: Result<Json<AskRequest>, JsonRejection>,
) -> Result<Json<ComparativeResult>, ApiError> {
    let route = "/ask/all";
    let question = question_from(route, payload)?;
    let result = state
        .use_case
        .answer_comparative(question)
        .await
        .inspect_err(|e| error!(route, error = %e, "Request failed"))?;
    Ok(Json(result))
}

/// Liveness probe
pub async fn hi() -> &'static str {
    "hi!!!!"
}
