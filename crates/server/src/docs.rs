use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Bus Tracker API",
        description = "公交实时位置共享服务 API 文档",
        version = "1.0.0"
    ),
    paths(
        crate::api::home,
        crate::api::position_controller::save_position,
        crate::api::position_controller::get_position,
        crate::api::position_controller::stop_sharing,
        crate::api::line_controller::get_line,
    ),
    components(
        schemas(
            registry::position::model::Position,
            crate::dtos::position_dto::PositionRequest,
            crate::dtos::position_dto::StopSharingRequest,
            crate::dtos::position_dto::MessageResponse,
            crate::dtos::static_dto::ServiceInfo,
        )
    ),
    tags(
        (name = "系统状态", description = "服务状态与元信息"),
        (name = "position", description = "公交位置上报、查询与停止共享"),
        (name = "line", description = "公交线路走向")
    )
)]
pub struct ApiDoc;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_openapi_lists_position_endpoints() {
        let doc = ApiDoc::openapi();
        let paths = &doc.paths.paths;

        assert!(paths.contains_key("/api/position"));
        assert!(paths.contains_key("/api/position/{bus_number}"));
        assert!(paths.contains_key("/api/stopSharing"));
        assert!(paths.contains_key("/api/line/{code}"));
    }
}
