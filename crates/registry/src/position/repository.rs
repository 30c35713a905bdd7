use crate::{ensure_bus_id, position::model::Position, Registry};
use async_trait::async_trait;
use std::sync::Arc;
use utils::{AppError, AppResult};

pub type DynPositionRepository = Arc<dyn PositionRepositoryTrait + Send + Sync>;

// 主要用于Service中，表示提供了该Trait功能
//
// 每个操作都在同一把锁内完成一次 map 操作，持锁期间不会 await。
#[async_trait]
pub trait PositionRepositoryTrait {
    /// 写入/覆盖公交位置，时间戳由服务端生成
    async fn upsert_position(&self, bus_id: &str, latitude: f64, longitude: f64) -> AppResult<Position>;

    async fn get_position(&self, bus_id: &str) -> AppResult<Position>;

    /// 停止共享：删除该公交的位置，返回被删除的记录
    async fn remove_position(&self, bus_id: &str) -> AppResult<Position>;

    /// 当前正在共享位置的公交数量
    async fn count_positions(&self) -> AppResult<usize>;
}

#[async_trait]
impl PositionRepositoryTrait for Registry {
    async fn upsert_position(&self, bus_id: &str, latitude: f64, longitude: f64) -> AppResult<Position> {
        ensure_bus_id(bus_id)?;
        if !latitude.is_finite() || !longitude.is_finite() {
            return Err(AppError::BadRequest(format!(
                "Coordinates must be finite numbers, got latitude={latitude}, longitude={longitude}."
            )));
        }

        let mut positions = self.write_positions()?;
        // 时间戳在持锁后生成，保证同一 key 上的时间戳随提交顺序单调
        let position = Position::recorded_now(latitude, longitude);
        positions.insert(bus_id.to_string(), position);

        Ok(position)
    }

    async fn get_position(&self, bus_id: &str) -> AppResult<Position> {
        ensure_bus_id(bus_id)?;

        let positions = self.read_positions()?;
        positions
            .get(bus_id)
            .copied()
            .ok_or_else(|| AppError::NotFound(format!("Bus {} not found.", bus_id)))
    }

    async fn remove_position(&self, bus_id: &str) -> AppResult<Position> {
        ensure_bus_id(bus_id)?;

        let mut positions = self.write_positions()?;
        positions
            .remove(bus_id)
            .ok_or_else(|| AppError::NotFound(format!("Bus {} not found.", bus_id)))
    }

    async fn count_positions(&self) -> AppResult<usize> {
        Ok(self.read_positions()?.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn registry() -> Registry {
        Registry::with_lines(Vec::new())
    }

    #[tokio::test]
    async fn test_upsert_then_get_returns_coordinates() {
        let registry = registry();
        let before = Utc::now().timestamp_millis();

        registry.upsert_position("42", 48.85, 2.35).await.unwrap();
        let position = registry.get_position("42").await.unwrap();

        assert_eq!(position.latitude, 48.85);
        assert_eq!(position.longitude, 2.35);
        assert!(position.recorded_at_millis >= before);
    }

    #[tokio::test]
    async fn test_get_unknown_bus_is_not_found() {
        let registry = registry();

        let err = registry.get_position("99").await.unwrap_err();
        assert!(matches!(err, AppError::NotFound(_)));
    }

    #[tokio::test]
    async fn test_empty_bus_id_is_invalid_input() {
        let registry = registry();

        assert!(matches!(
            registry.upsert_position("", 1.0, 2.0).await.unwrap_err(),
            AppError::BadRequest(_)
        ));
        assert!(matches!(registry.get_position("").await.unwrap_err(), AppError::BadRequest(_)));
        assert!(matches!(registry.remove_position("").await.unwrap_err(), AppError::BadRequest(_)));
        assert_eq!(registry.count_positions().await.unwrap(), 0);
    }

    #[tokio::test]
    async fn test_non_finite_coordinates_rejected() {
        let registry = registry();

        for (lat, lon) in [(f64::NAN, 0.0), (0.0, f64::INFINITY), (f64::NEG_INFINITY, 1.0)] {
            let err = registry.upsert_position("7", lat, lon).await.unwrap_err();
            assert!(matches!(err, AppError::BadRequest(_)));
        }
        assert!(registry.get_position("7").await.is_err());
    }

    #[tokio::test]
    async fn test_remove_then_get_is_not_found() {
        let registry = registry();
        registry.upsert_position("42", 48.85, 2.35).await.unwrap();

        let removed = registry.remove_position("42").await.unwrap();
        assert_eq!(removed.latitude, 48.85);

        assert!(matches!(registry.get_position("42").await.unwrap_err(), AppError::NotFound(_)));
        assert!(matches!(registry.remove_position("42").await.unwrap_err(), AppError::NotFound(_)));
    }

    #[tokio::test]
    async fn test_remove_unknown_bus_is_not_found() {
        let registry = registry();

        let err = registry.remove_position("nope").await.unwrap_err();
        assert!(matches!(err, AppError::NotFound(_)));
    }

    #[tokio::test]
    async fn test_repeated_upsert_keeps_coordinates() {
        let registry = registry();

        let first = registry.upsert_position("5", 10.0, 20.0).await.unwrap();
        let second = registry.upsert_position("5", 10.0, 20.0).await.unwrap();
        let stored = registry.get_position("5").await.unwrap();

        assert_eq!(stored, second);
        assert_eq!((stored.latitude, stored.longitude), (10.0, 20.0));
        assert!(second.recorded_at_millis >= first.recorded_at_millis);
        assert_eq!(registry.count_positions().await.unwrap(), 1);
    }

    #[tokio::test]
    async fn test_keys_are_independent() {
        let registry = registry();
        registry.upsert_position("1", 1.0, 1.0).await.unwrap();
        registry.upsert_position("2", 2.0, 2.0).await.unwrap();

        registry.remove_position("1").await.unwrap();

        assert_eq!(registry.get_position("2").await.unwrap().latitude, 2.0);
        assert_eq!(registry.count_positions().await.unwrap(), 1);
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn test_concurrent_upserts_leave_one_submitted_position() {
        let registry = registry();
        let submitted: Vec<(f64, f64)> = (0..64).map(|i| (i as f64, -(i as f64))).collect();

        let handles: Vec<_> = submitted
            .iter()
            .copied()
            .map(|(lat, lon)| {
                let registry = registry.clone();
                tokio::spawn(async move { registry.upsert_position("shared", lat, lon).await })
            })
            .collect();

        for handle in handles {
            handle.await.unwrap().unwrap();
        }

        let stored = registry.get_position("shared").await.unwrap();
        assert!(submitted.contains(&(stored.latitude, stored.longitude)));
        assert_eq!(registry.count_positions().await.unwrap(), 1);
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn test_concurrent_upserts_to_different_keys() {
        let registry = registry();

        let handles: Vec<_> = (0..32)
            .map(|i| {
                let registry = registry.clone();
                tokio::spawn(async move { registry.upsert_position(&format!("bus-{i}"), i as f64, 0.0).await })
            })
            .collect();

        for handle in handles {
            handle.await.unwrap().unwrap();
        }

        assert_eq!(registry.count_positions().await.unwrap(), 32);
        assert_eq!(registry.get_position("bus-17").await.unwrap().latitude, 17.0);
    }
}
