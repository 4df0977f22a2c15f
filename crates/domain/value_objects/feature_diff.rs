use serde_json::Value;
use tracing::debug;

use crate::domain::value_objects::plan_form::PlanFeature;

/// Key names the backend has been observed to use for a feature id and its
/// text, probed in order.
const ID_KEYS: [&str; 4] = ["id", "featureId", "feature_id", "ID"];
const TEXT_KEYS: [&str; 4] = ["text", "description", "Description", "FeatureDescription"];

/// Adapts one raw feature from a loaded plan into the canonical shape.
///
/// Bare strings carry no identifier, so they come back with `id = None` and
/// `is_new = false`: readable, but never addressable by id for update or
/// delete. Applied only at plan-load time, never to rows created in the
/// session.
pub fn parse_feature_from_api(raw: &Value) -> PlanFeature {
    if let Some(text) = raw.as_str() {
        return PlanFeature {
            id: None,
            text: text.to_string(),
            is_deleted: false,
            is_new: false,
        };
    }

    let id = ID_KEYS.iter().find_map(|key| feature_id_value(raw, key));
    let text = TEXT_KEYS
        .iter()
        .find_map(|key| feature_text_value(raw, key))
        .unwrap_or_default();

    PlanFeature {
        id,
        text,
        is_deleted: false,
        is_new: false,
    }
}

fn feature_id_value(raw: &Value, key: &str) -> Option<i64> {
    let value = raw.get(key)?;
    value
        .as_i64()
        .or_else(|| value.as_str().and_then(|s| s.parse().ok()))
}

fn feature_text_value(raw: &Value, key: &str) -> Option<String> {
    let text = raw.get(key)?.as_str()?;
    if text.is_empty() {
        return None;
    }
    Some(text.to_string())
}

/// The add/update/delete partition computed from the working feature list.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FeatureDiff {
    pub new_features: Vec<PlanFeature>,
    pub deleted_features: Vec<PlanFeature>,
    pub updated_features: Vec<PlanFeature>,
}

/// Partitions the working list into the three save buckets.
///
/// The predicates are mutually exclusive; a row matching none of them (a
/// locally-new row that was deleted before ever saving, or a persisted row
/// whose text was cleared) is dropped from the payload entirely.
pub fn categorize_features(features: &[PlanFeature]) -> FeatureDiff {
    let new_features = features
        .iter()
        .filter(|f| !f.is_deleted && f.id.is_none() && !f.text.trim().is_empty())
        .cloned()
        .collect::<Vec<_>>();

    let deleted_features = features
        .iter()
        .filter(|f| f.is_deleted && f.id.is_some())
        .cloned()
        .collect::<Vec<_>>();

    let updated_features = features
        .iter()
        .filter(|f| !f.is_deleted && f.id.is_some() && !f.text.trim().is_empty())
        .cloned()
        .collect::<Vec<_>>();

    let categorized = new_features.len() + deleted_features.len() + updated_features.len();
    if categorized < features.len() {
        debug!(
            dropped = features.len() - categorized,
            "feature_diff: rows excluded from every save bucket"
        );
    }

    FeatureDiff {
        new_features,
        deleted_features,
        updated_features,
    }
}
