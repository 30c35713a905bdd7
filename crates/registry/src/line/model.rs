use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// GeoJSON Feature，描述一条公交线路的走向
///
/// `properties.code` 为线路编号（整数）。其他字段原样透传给前端。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LineFeature {
    #[serde(rename = "type")]
    pub kind: String,
    #[serde(default)]
    pub geometry: Value,
    /// GeoJSON 要求 properties 成员必须存在，缺失时输出 null
    #[serde(default)]
    pub properties: Option<Map<String, Value>>,
    #[serde(flatten)]
    pub foreign_members: Map<String, Value>,
}

impl LineFeature {
    /// 线路编号；缺失或不是整数时返回 None
    pub fn code(&self) -> Option<i64> {
        self.properties.as_ref()?.get("code")?.as_i64()
    }
}

/// GeoJSON FeatureCollection
#[derive(Debug, Clone, Deserialize)]
pub struct LineCollection {
    #[serde(rename = "type")]
    pub kind: String,
    pub features: Vec<LineFeature>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_code_reads_integer_property() {
        let feature: LineFeature = serde_json::from_value(json!({
            "type": "Feature",
            "geometry": {"type": "LineString", "coordinates": [[2.35, 48.85], [2.36, 48.86]]},
            "properties": {"code": 12, "name": "Ligne 12"}
        }))
        .unwrap();

        assert_eq!(feature.code(), Some(12));
    }

    #[test]
    fn test_code_missing_or_not_integer() {
        let no_props: LineFeature =
            serde_json::from_value(json!({"type": "Feature", "geometry": null})).unwrap();
        let text_code: LineFeature = serde_json::from_value(json!({
            "type": "Feature",
            "geometry": null,
            "properties": {"code": "12"}
        }))
        .unwrap();

        assert_eq!(no_props.code(), None);
        assert_eq!(text_code.code(), None);
    }

    #[test]
    fn test_foreign_members_round_trip() {
        let raw = json!({
            "type": "Feature",
            "id": "line-3",
            "geometry": null,
            "properties": {"code": 3}
        });

        let feature: LineFeature = serde_json::from_value(raw.clone()).unwrap();
        assert_eq!(serde_json::to_value(&feature).unwrap(), raw);
    }

    #[test]
    fn test_null_properties_are_kept_on_output() {
        let feature: LineFeature =
            serde_json::from_value(json!({"type": "Feature", "geometry": null, "properties": null})).unwrap();
        let value = serde_json::to_value(&feature).unwrap();

        assert!(feature.properties.is_none());
        assert_eq!(value.get("properties"), Some(&Value::Null));

        let missing: LineFeature = serde_json::from_value(json!({"type": "Feature", "geometry": null})).unwrap();
        assert_eq!(serde_json::to_value(&missing).unwrap()["properties"], Value::Null);
    }
}
