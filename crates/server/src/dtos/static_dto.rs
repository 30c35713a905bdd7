use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use utoipa::ToSchema;

/// 服务元信息 (GET /)
#[derive(Debug, Serialize, Deserialize, Clone, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ServiceInfo {
    pub message: String,
    pub version: String,
    pub status: String,
    /// 当前正在共享位置的公交数量
    pub active_buses: usize,
    /// 已加载的线路数量
    pub lines_loaded: usize,
    /// 服务端毫秒时间戳，客户端可据此判断位置是否过期
    pub server_time: i64,
    pub endpoints: BTreeMap<String, String>,
}
