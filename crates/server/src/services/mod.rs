////////////////////////////////////////////////////////////////////////
//
// Service 层：包装 registry 中的各个 repository，供 controller 使用
//
//////////////////////////////////////////////////////////////////////

pub mod line_service;
pub mod position_service;

use line_service::{DynLineService, LineService};
use position_service::{DynPositionService, PositionService};
use registry::{line::repository::DynLineRepository, position::repository::DynPositionRepository, Registry};
use std::sync::Arc;
use tracing::info;

#[derive(Clone)]
pub struct Services {
    pub position: DynPositionService,
    pub line: DynLineService,
}

impl Services {
    pub fn new(registry: Registry) -> Self {
        let registry = Arc::new(registry);
        let position_repository: DynPositionRepository = registry.clone();
        let line_repository: DynLineRepository = registry;

        let position = Arc::new(PositionService::new(position_repository)) as DynPositionService;
        let line = Arc::new(LineService::new(line_repository)) as DynLineService;

        info!("🧠 Services initialized");
        Self { position, line }
    }
}
