use super::services::Services;
use crate::{api, docs::ApiDoc, middleware};
use axum::{
    error_handling::HandleErrorLayer,
    http::{header, HeaderName, Method},
    middleware as axum_middleware,
    response::IntoResponse,
    routing::get,
    BoxError, Extension, Json, Router,
};
use std::time::Duration;
use tower::ServiceBuilder;
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};
use utils::AppError;
use utoipa::OpenApi;

/// 浏览器预检结果的缓存时间
const CORS_MAX_AGE: Duration = Duration::from_secs(86400);

pub struct AppRouter;

impl AppRouter {
    pub fn new(services: Services, http_timeout_secs: u64) -> Router {
        Router::new()
            .route("/", get(api::home).fallback(api::method_fallback))
            .nest("/api", api::app())
            // API 文档 (OpenAPI JSON)
            .route("/api-docs/openapi.json", get(openapi_json).fallback(api::method_fallback))
            .fallback(Self::handle_404)
            .layer(axum_middleware::from_fn(middleware::request_logger))
            .layer(
                ServiceBuilder::new()
                    .layer(Extension(services))
                    .layer(TraceLayer::new_for_http())
                    .layer(HandleErrorLayer::new(move |err: BoxError| async move {
                        Self::handle_timeout_error(err, http_timeout_secs)
                    }))
                    .timeout(Duration::from_secs(http_timeout_secs)),
            )
            .layer(Self::cors())
    }

    /// 允许任意来源的浏览器访问
    pub fn cors() -> CorsLayer {
        CorsLayer::new()
            .allow_origin(Any)
            .allow_methods([Method::GET, Method::POST, Method::PUT, Method::DELETE, Method::OPTIONS])
            .allow_headers([
                header::CONTENT_TYPE,
                header::AUTHORIZATION,
                HeaderName::from_static("x-requested-with"),
            ])
            .expose_headers([header::CONTENT_LENGTH, header::CONTENT_TYPE])
            .max_age(CORS_MAX_AGE)
    }

    async fn handle_404() -> impl IntoResponse {
        AppError::NotFound("The requested resource does not exist on this server!".to_string())
    }

    fn handle_timeout_error(err: BoxError, http_timeout_secs: u64) -> AppError {
        if err.is::<tower::timeout::error::Elapsed>() {
            AppError::RequestTimeout(format!(
                "Request took longer than the configured {} second timeout",
                http_timeout_secs
            ))
        } else {
            AppError::InternalServerErrorWithContext(format!("Unhandled internal error: {}", err))
        }
    }
}

async fn openapi_json() -> impl IntoResponse {
    Json(ApiDoc::openapi())
}
