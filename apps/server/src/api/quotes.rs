use std::sync::Arc;

use crate::{
    error::ApiResult,
    main_lib::AppState,
    models::{CreateQuote, Quote, QuoteQuery},
};
use axum::{
    extract::{rejection::JsonRejection, Query, State},
    http::{header, StatusCode},
    routing::get,
    Json, Router,
};

#[utoipa::path(
    get,
    path = "/quotes",
    params(("category" = Option<String>, Query, description = "Exact category name; empty or \"all\" lists every quote")),
    responses((status = 200, body = [Quote]))
)]
pub async fn list_quotes(
    State(state): State<Arc<AppState>>,
    Query(query): Query<QuoteQuery>,
) -> ApiResult<Json<Vec<Quote>>> {
    let quotes = state.quote_service.get_quotes(query.category.as_deref())?;
    Ok(Json(quotes.into_iter().map(Quote::from).collect()))
}

#[utoipa::path(
    post,
    path = "/quotes",
    request_body = CreateQuote,
    responses(
        (status = 201, body = Quote),
        (status = 400, description = "Malformed body, missing text/category or unknown category", body = String, content_type = "text/plain")
    )
)]
pub async fn create_quote(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<CreateQuote>, JsonRejection>,
) -> ApiResult<(StatusCode, [(header::HeaderName, String); 1], Json<Quote>)> {
    let Json(payload) = payload?;
    let created = state.quote_service.create_quote(payload.into()).await?;
    tracing::info!("Created quote {} in category '{}'", created.id, created.category);
    let location = format!("/quotes?id={}", created.id);
    Ok((
        StatusCode::CREATED,
        [(header::LOCATION, location)],
        Json(Quote::from(created)),
    ))
}

pub fn router() -> Router<Arc<AppState>> {
    Router::new().route("/quotes", get(list_quotes).post(create_quote))
}
