use crate::{api::method_fallback, services::Services};
use axum::{extract::Path, routing::get, Extension, Json, Router};
use registry::line::model::LineFeature;
use utils::AppResult;

/// 按线路编号获取线路走向 (GeoJSON Feature)
#[utoipa::path(
    get,
    path = "/api/line/{code}",
    tag = "line",
    params(
        ("code" = String, Path, description = "线路编号（整数）")
    ),
    responses(
        (status = 200, description = "GeoJSON Feature"),
        (status = 400, description = "线路编号不是整数"),
        (status = 404, description = "线路不存在")
    )
)]
pub async fn get_line(
    Extension(services): Extension<Services>,
    Path(code): Path<String>,
) -> AppResult<Json<LineFeature>> {
    let line = services.line.get_line(&code).await?;

    Ok(Json(line))
}

pub struct LineController;
impl LineController {
    pub fn app() -> Router {
        Router::new().route("/line/:code", get(get_line).fallback(method_fallback))
    }
}
