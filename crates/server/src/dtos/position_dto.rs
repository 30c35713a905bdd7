use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

/// 公交设备上报位置
#[derive(Clone, Serialize, Deserialize, Debug, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PositionRequest {
    /// 公交编号
    #[validate(length(min = 1, message = "busNumber must not be empty"))]
    pub bus_number: String,
    pub latitude: f64,
    pub longitude: f64,
}

/// 公交设备停止共享位置
#[derive(Clone, Serialize, Deserialize, Debug, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct StopSharingRequest {
    #[validate(length(min = 1, message = "busNumber must not be empty"))]
    pub bus_number: String,
}

#[derive(Clone, Serialize, Deserialize, Debug, PartialEq, ToSchema)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self { message: message.into() }
    }
}
