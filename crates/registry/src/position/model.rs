use chrono::Utc;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// 公交最新位置
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Position {
    /// 纬度
    pub latitude: f64,
    /// 经度
    pub longitude: f64,
    /// 服务端收到上报时的毫秒时间戳，不信任客户端时间
    #[serde(rename = "timestamp")]
    pub recorded_at_millis: i64,
}

impl Position {
    /// 以当前服务端时间打戳
    pub fn recorded_now(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
            recorded_at_millis: Utc::now().timestamp_millis(),
        }
    }
}
