////////////////////////////////////////////////////////////////////////
//
// 1. 每个Domain(Entity)单独一个文件夹
// 2. 每个Domain由两部分组成:
//    - model: 定义Schema
//    - repository: 内存表上的实际操作
//
// 所有状态只存在于进程内存中，重启即清空。
//
//////////////////////////////////////////////////////////////////////

use anyhow::Context;
use std::{
    collections::HashMap,
    sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard},
};
use tracing::info;
use utils::{AppConfig, AppError, AppResult};

pub mod line;
pub mod position;

use line::model::LineFeature;
use position::model::Position;

type PositionTable = HashMap<String, Position>;

/// 进程级注册表：公交实时位置 + 只读的线路目录
///
/// 位置表由一把 `RwLock` 保护，外部只能通过各 repository trait 访问。
#[derive(Clone, Debug, Default)]
pub struct Registry {
    positions: Arc<RwLock<PositionTable>>,
    lines: Arc<Vec<LineFeature>>,
}

impl Registry {
    pub fn new(config: &AppConfig) -> anyhow::Result<Self> {
        let lines = match &config.lines_geojson {
            Some(path) => line::loader::load_lines(path)
                .with_context(|| format!("🔴 Failed to load line catalog from {}", path.display()))?,
            None => {
                info!("🗺️ 未配置 LINES_GEOJSON，线路目录为空");
                Vec::new()
            }
        };

        Ok(Self::with_lines(lines))
    }

    pub fn with_lines(lines: Vec<LineFeature>) -> Self {
        info!("🧠 Registry initialized with {} line(s)", lines.len());
        Self {
            positions: Arc::new(RwLock::new(HashMap::new())),
            lines: Arc::new(lines),
        }
    }

    pub(crate) fn read_positions(&self) -> AppResult<RwLockReadGuard<'_, PositionTable>> {
        self.positions
            .read()
            .map_err(|e| AppError::InternalServerErrorWithContext(format!("position table lock poisoned: {e}")))
    }

    pub(crate) fn write_positions(&self) -> AppResult<RwLockWriteGuard<'_, PositionTable>> {
        self.positions
            .write()
            .map_err(|e| AppError::InternalServerErrorWithContext(format!("position table lock poisoned: {e}")))
    }

    pub(crate) fn lines(&self) -> &[LineFeature] {
        &self.lines
    }
}

/// 公交编号只要求非空
pub(crate) fn ensure_bus_id(bus_id: &str) -> AppResult<()> {
    if bus_id.is_empty() {
        return Err(AppError::BadRequest("Bus number is required.".to_string()));
    }
    Ok(())
}
