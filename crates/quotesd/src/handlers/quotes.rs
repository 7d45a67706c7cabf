//! Quote list/create handlers.
//!
//! These handlers use the repository trait object for database access.

use anyhow::anyhow;
use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};

use quotes_core::quote::{NewQuote, Quote};

use crate::{handlers::AppError, state::AppState};

/// List all quotes (GET /api/quotes).
///
/// Returns every row in storage order as a JSON array. An empty table
/// yields an empty array.
#[axum::debug_handler]
pub async fn list_quotes(State(state): State<AppState>) -> Result<Json<Vec<Quote>>, AppError> {
    let quotes = state.quote_repo.list_quotes().await?;

    Ok(Json(quotes))
}

/// Create a new quote (POST /api/quotes).
///
/// Both the `quote` and `author` keys are read unconditionally: a body
/// missing either key fails through [`AppError`] as a server error. An
/// explicit `"author": null` is accepted and stored as NULL.
#[axum::debug_handler]
pub async fn add_quote(
    State(state): State<AppState>,
    Json(body): Json<serde_json::Value>,
) -> Result<impl IntoResponse, AppError> {
    let quote = body
        .get("quote")
        .and_then(|v| v.as_str())
        .ok_or_else(|| anyhow!("missing required field: quote"))?;
    let author = body
        .get("author")
        .ok_or_else(|| anyhow!("missing required field: author"))?
        .as_str()
        .map(str::to_owned);

    let created = state
        .quote_repo
        .add_quote(NewQuote::new(quote, author))
        .await?;

    Ok((StatusCode::CREATED, Json(created)))
}
