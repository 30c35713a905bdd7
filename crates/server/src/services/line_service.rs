use async_trait::async_trait;
use registry::line::{model::LineFeature, repository::DynLineRepository};
use std::sync::Arc;
use tracing::debug;
use utils::{AppError, AppResult};

pub type DynLineService = Arc<dyn LineServiceTrait + Send + Sync>;

#[async_trait]
pub trait LineServiceTrait {
    /// 按线路编号查询，编号必须是整数
    async fn get_line(&self, code: &str) -> AppResult<LineFeature>;
    async fn line_count(&self) -> usize;
}

#[derive(Clone)]
pub struct LineService {
    repository: DynLineRepository,
}

impl LineService {
    pub fn new(repository: DynLineRepository) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl LineServiceTrait for LineService {
    async fn get_line(&self, code: &str) -> AppResult<LineFeature> {
        let code: i64 = code
            .parse()
            .map_err(|_| AppError::BadRequest(format!("Invalid line code: {}", code)))?;

        let line = self.repository.find_line(code).await?;
        debug!("🗺️ 查询线路 {}", code);
        Ok(line)
    }

    async fn line_count(&self) -> usize {
        self.repository.count_lines().await
    }
}
