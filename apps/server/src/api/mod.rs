mod health;
mod quotes;

use std::sync::Arc;

use crate::{
    config::Config,
    main_lib::AppState,
    models::{CreateQuote, Quote},
};
use axum::{
    http::{HeaderValue, StatusCode},
    routing::get,
    Json, Router,
};
use tower_http::{
    cors::{Any, CorsLayer},
    request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer},
    timeout::TimeoutLayer,
    trace::TraceLayer,
};
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    paths(health::healthz, health::readyz, quotes::list_quotes, quotes::create_quote),
    components(schemas(Quote, CreateQuote))
)]
pub struct ApiDoc;

async fn openapi_json() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}

fn cors_layer(config: &Config) -> CorsLayer {
    if config.cors_allow.iter().any(|o| o == "*") {
        return CorsLayer::new().allow_origin(Any);
    }
    let origins = config
        .cors_allow
        .iter()
        .filter_map(|o| match o.parse::<HeaderValue>() {
            Ok(origin) => Some(origin),
            Err(_) => {
                tracing::warn!("Ignoring invalid CORS origin '{}'", o);
                None
            }
        })
        .collect::<Vec<_>>();
    CorsLayer::new().allow_origin(origins)
}

/// Requests that outlive the configured timeout get a 408.
fn timeout_layer(config: &Config) -> TimeoutLayer {
    TimeoutLayer::with_status_code(StatusCode::REQUEST_TIMEOUT, config.request_timeout)
}

pub fn app_router(state: Arc<AppState>, config: &Config) -> Router {
    Router::new()
        .merge(health::router())
        .merge(quotes::router())
        .route("/openapi.json", get(openapi_json))
        .with_state(state)
        .layer(cors_layer(config))
        .layer(SetRequestIdLayer::x_request_id(MakeRequestUuid))
        .layer(PropagateRequestIdLayer::x_request_id())
        .layer(timeout_layer(config))
        .layer(TraceLayer::new_for_http())
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{body::Body, http::Request};
    use std::time::Duration;
    use tower::ServiceExt;

    #[tokio::test]
    async fn test_slow_request_times_out_with_408() {
        let config = Config {
            request_timeout: Duration::from_millis(20),
            ..Config::default()
        };
        let app: Router = Router::new()
            .route(
                "/slow",
                get(|| async {
                    tokio::time::sleep(Duration::from_millis(500)).await;
                    "late"
                }),
            )
            .layer(timeout_layer(&config));

        let response = app
            .oneshot(Request::builder().uri("/slow").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::REQUEST_TIMEOUT);
    }
}
