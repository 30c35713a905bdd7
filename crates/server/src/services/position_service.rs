use async_trait::async_trait;
use registry::position::{model::Position, repository::DynPositionRepository};
use std::sync::Arc;
use tracing::{debug, info};
use utils::AppResult;

pub type DynPositionService = Arc<dyn PositionServiceTrait + Send + Sync>;

#[async_trait]
pub trait PositionServiceTrait {
    async fn update_position(&self, bus_number: &str, latitude: f64, longitude: f64) -> AppResult<Position>;
    async fn get_position(&self, bus_number: &str) -> AppResult<Position>;
    async fn stop_sharing(&self, bus_number: &str) -> AppResult<()>;
    async fn active_buses(&self) -> AppResult<usize>;
}

#[derive(Clone)]
pub struct PositionService {
    repository: DynPositionRepository,
}

impl PositionService {
    pub fn new(repository: DynPositionRepository) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl PositionServiceTrait for PositionService {
    async fn update_position(&self, bus_number: &str, latitude: f64, longitude: f64) -> AppResult<Position> {
        let position = self.repository.upsert_position(bus_number, latitude, longitude).await?;

        info!(
            "✅ 已记录公交 {} 的位置: lat={}, lng={}",
            bus_number, position.latitude, position.longitude
        );
        Ok(position)
    }

    async fn get_position(&self, bus_number: &str) -> AppResult<Position> {
        let position = self.repository.get_position(bus_number).await?;

        debug!("📡 查询公交 {} 的位置", bus_number);
        Ok(position)
    }

    async fn stop_sharing(&self, bus_number: &str) -> AppResult<()> {
        self.repository.remove_position(bus_number).await?;

        info!("🛑 公交 {} 已停止共享位置", bus_number);
        Ok(())
    }

    async fn active_buses(&self) -> AppResult<usize> {
        self.repository.count_positions().await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use registry::Registry;
    use utils::AppError;

    fn service() -> PositionService {
        PositionService::new(Arc::new(Registry::default()))
    }

    #[tokio::test]
    async fn test_share_then_stop_sharing() {
        let service = service();

        service.update_position("42", 48.85, 2.35).await.unwrap();
        assert_eq!(service.active_buses().await.unwrap(), 1);

        service.stop_sharing("42").await.unwrap();
        assert_eq!(service.active_buses().await.unwrap(), 0);
        assert!(matches!(service.get_position("42").await.unwrap_err(), AppError::NotFound(_)));
    }

    #[tokio::test]
    async fn test_stop_sharing_unknown_bus() {
        let err = service().stop_sharing("404").await.unwrap_err();
        assert!(matches!(err, AppError::NotFound(_)));
    }
}
