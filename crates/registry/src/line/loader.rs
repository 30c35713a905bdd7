use crate::line::model::{LineCollection, LineFeature};
use anyhow::{bail, Context, Result};
use std::path::Path;
use tracing::info;

/// 启动时加载线路目录，只接受 FeatureCollection
pub fn load_lines(path: &Path) -> Result<Vec<LineFeature>> {
    let content =
        std::fs::read_to_string(path).with_context(|| format!("cannot read {}", path.display()))?;
    let lines = parse_lines(&content)?;

    info!("🗺️ 已加载 {} 条线路: {}", lines.len(), path.display());
    Ok(lines)
}

pub fn parse_lines(content: &str) -> Result<Vec<LineFeature>> {
    let collection: LineCollection = serde_json::from_str(content).context("invalid GeoJSON")?;

    if collection.kind != "FeatureCollection" {
        bail!("expected a FeatureCollection, got {}", collection.kind);
    }

    Ok(collection.features)
}
