use crate::{
    api::method_fallback,
    dtos::position_dto::{MessageResponse, PositionRequest, StopSharingRequest},
    extractors::validation_extractor::ValidationExtractor,
    services::Services,
};
use axum::{
    extract::Path,
    routing::{get, post},
    Extension, Json, Router,
};
use registry::position::model::Position;
use utils::{AppError, AppResult};

/// 上报/更新公交位置
///
/// 时间戳由服务端在收到请求时生成，请求体中的任何时间字段都会被忽略。
#[utoipa::path(
    post,
    path = "/api/position",
    tag = "position",
    request_body = PositionRequest,
    responses(
        (status = 200, description = "位置已记录", body = MessageResponse),
        (status = 400, description = "busNumber 为空、坐标非法或请求体无法解析")
    )
)]
pub async fn save_position(
    Extension(services): Extension<Services>,
    ValidationExtractor(req): ValidationExtractor<PositionRequest>,
) -> AppResult<Json<MessageResponse>> {
    services
        .position
        .update_position(&req.bus_number, req.latitude, req.longitude)
        .await?;

    Ok(Json(MessageResponse::new("Position recorded")))
}

/// 查询公交最新位置
#[utoipa::path(
    get,
    path = "/api/position/{bus_number}",
    tag = "position",
    params(
        ("bus_number" = String, Path, description = "公交编号")
    ),
    responses(
        (status = 200, description = "最新位置", body = Position),
        (status = 400, description = "公交编号为空"),
        (status = 404, description = "该公交没有共享位置")
    )
)]
pub async fn get_position(
    Extension(services): Extension<Services>,
    Path(bus_number): Path<String>,
) -> AppResult<Json<Position>> {
    let position = services.position.get_position(&bus_number).await?;

    Ok(Json(position))
}

/// `/api/position/` 没有公交编号
pub async fn missing_bus_number() -> AppError {
    AppError::BadRequest("Bus number is required.".to_string())
}

/// 停止共享位置
#[utoipa::path(
    post,
    path = "/api/stopSharing",
    tag = "position",
    request_body = StopSharingRequest,
    responses(
        (status = 200, description = "已停止共享", body = MessageResponse),
        (status = 400, description = "busNumber 为空或请求体无法解析"),
        (status = 404, description = "该公交没有共享位置")
    )
)]
pub async fn stop_sharing(
    Extension(services): Extension<Services>,
    ValidationExtractor(req): ValidationExtractor<StopSharingRequest>,
) -> AppResult<Json<MessageResponse>> {
    services.position.stop_sharing(&req.bus_number).await?;

    Ok(Json(MessageResponse::new(format!("Sharing stopped for bus {}", req.bus_number))))
}

pub struct PositionController;
impl PositionController {
    pub fn app() -> Router {
        Router::new()
            .route("/position", post(save_position).fallback(method_fallback))
            .route("/position/", get(missing_bus_number).fallback(method_fallback))
            .route("/position/:bus_number", get(get_position).fallback(method_fallback))
            .route("/stopSharing", post(stop_sharing).fallback(method_fallback))
    }
}
