use crate::{line::model::LineFeature, Registry};
use async_trait::async_trait;
use std::sync::Arc;
use utils::{AppError, AppResult};

pub type DynLineRepository = Arc<dyn LineRepositoryTrait + Send + Sync>;

#[async_trait]
pub trait LineRepositoryTrait {
    async fn find_line(&self, code: i64) -> AppResult<LineFeature>;

    async fn count_lines(&self) -> usize;
}

#[async_trait]
impl LineRepositoryTrait for Registry {
    async fn find_line(&self, code: i64) -> AppResult<LineFeature> {
        self.lines()
            .iter()
            .find(|feature| feature.code() == Some(code))
            .cloned()
            .ok_or_else(|| AppError::NotFound(format!("Line {} not found.", code)))
    }

    async fn count_lines(&self) -> usize {
        self.lines().len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::line::loader::parse_lines;

    fn registry() -> Registry {
        let lines = parse_lines(
            r#"{"type": "FeatureCollection", "features": [
                {"type": "Feature", "geometry": null, "properties": {"code": 4, "name": "A"}},
                {"type": "Feature", "geometry": null, "properties": {"code": 4, "name": "B"}},
                {"type": "Feature", "geometry": null}
            ]}"#,
        )
        .unwrap();
        Registry::with_lines(lines)
    }

    #[tokio::test]
    async fn test_find_line_returns_first_match() {
        let line = registry().find_line(4).await.unwrap();
        assert_eq!(line.properties.unwrap()["name"], "A");
    }

    #[tokio::test]
    async fn test_unknown_line_is_not_found() {
        let err = registry().find_line(99).await.unwrap_err();
        assert!(matches!(err, AppError::NotFound(_)));
    }

    #[tokio::test]
    async fn test_count_lines() {
        assert_eq!(registry().count_lines().await, 3);
        assert_eq!(Registry::default().count_lines().await, 0);
    }
}
