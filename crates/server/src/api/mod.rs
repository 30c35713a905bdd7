pub mod line_controller;
pub mod position_controller;

use crate::{dtos::static_dto::ServiceInfo, services::Services};
use axum::{
    http::{Method, StatusCode},
    response::{IntoResponse, Response},
    routing::Router,
    Extension, Json,
};
use chrono::Utc;
use std::collections::BTreeMap;
use utils::{AppError, AppResult};

/// 服务元信息
///
/// 返回服务状态、版本、当前共享位置的公交数量以及可用接口列表
#[utoipa::path(
    get,
    path = "/",
    responses(
        (status = 200, description = "服务运行正常", body = ServiceInfo)
    ),
    tag = "系统状态"
)]
pub async fn home(Extension(services): Extension<Services>) -> AppResult<Json<ServiceInfo>> {
    let endpoints = BTreeMap::from([
        ("post_position".to_string(), "POST /api/position".to_string()),
        ("get_position".to_string(), "GET /api/position/{busNumber}".to_string()),
        ("stop_sharing".to_string(), "POST /api/stopSharing".to_string()),
        ("get_line".to_string(), "GET /api/line/{code}".to_string()),
        ("openapi".to_string(), "GET /api-docs/openapi.json".to_string()),
    ]);

    Ok(Json(ServiceInfo {
        message: "Real-time bus tracking API".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        status: "active".to_string(),
        active_buses: services.position.active_buses().await?,
        lines_loaded: services.line.line_count().await,
        server_time: Utc::now().timestamp_millis(),
        endpoints,
    }))
}

/// 路径存在但方法不匹配时的兜底处理
///
/// 正常情况下 OPTIONS 已被 CORS 层拦截，没经过 CORS 层的 OPTIONS 在这里直接返回 200。
pub async fn method_fallback(method: Method) -> Response {
    if method == Method::OPTIONS {
        return StatusCode::OK.into_response();
    }

    AppError::MethodNotAllowed(format!("Method {} is not allowed on this endpoint.", method)).into_response()
}

pub fn app() -> Router {
    Router::new()
        .merge(position_controller::PositionController::app())
        .merge(line_controller::LineController::app())
}
