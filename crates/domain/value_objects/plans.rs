use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::domain::value_objects::{
    feature_diff::{self, FeatureDiff},
    plan_form::{PlanFeature, PlanFormData},
};

/// Wire contract of the plan save endpoint. Field names follow the backend
/// exactly; do not rename.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SavePlanRequest {
    #[serde(rename = "planID")]
    pub plan_id: i64,
    #[serde(rename = "PlanTitle")]
    pub plan_title: String,
    #[serde(rename = "PlanSubtitle")]
    pub plan_subtitle: String,
    #[serde(rename = "PlanDescription")]
    pub plan_description: String,
    #[serde(rename = "IsPopular")]
    pub is_popular: bool,
    #[serde(rename = "AmountPerMonth")]
    pub amount_per_month: f64,
    #[serde(rename = "AmountPerYear")]
    pub amount_per_year: f64,
    #[serde(rename = "addedFeatures")]
    pub added_features: Vec<String>,
    #[serde(rename = "deletedFeatureIds")]
    pub deleted_feature_ids: Vec<i64>,
    #[serde(rename = "updatedFeatures")]
    pub updated_features: Vec<UpdatedFeature>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UpdatedFeature {
    #[serde(rename = "featureId")]
    pub feature_id: i64,
    #[serde(rename = "Description")]
    pub description: String,
}

impl SavePlanRequest {
    /// Builds the save payload from a validated form and its categorized
    /// diff. `existing_plan_id` is `None` when creating; the backend treats
    /// plan id 0 as "create new".
    pub fn assemble(
        existing_plan_id: Option<i64>,
        form: &PlanFormData,
        diff: &FeatureDiff,
    ) -> Self {
        Self {
            plan_id: existing_plan_id.unwrap_or(0),
            plan_title: form.name.clone(),
            plan_subtitle: form.subtitle.clone(),
            plan_description: form.description.clone(),
            is_popular: form.is_popular,
            amount_per_month: form.monthly_price,
            amount_per_year: form.annual_price,
            added_features: diff.new_features.iter().map(|f| f.text.clone()).collect(),
            deleted_feature_ids: diff.deleted_features.iter().filter_map(|f| f.id).collect(),
            updated_features: diff
                .updated_features
                .iter()
                .filter_map(|f| {
                    f.id.map(|feature_id| UpdatedFeature {
                        feature_id,
                        description: f.text.clone(),
                    })
                })
                .collect(),
        }
    }
}

/// A plan as the portal understands it after adapting whichever field names
/// the backend used on this response.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlanModel {
    pub id: Option<i64>,
    pub name: String,
    pub subtitle: String,
    pub description: String,
    pub monthly_price: f64,
    pub annual_price: f64,
    pub is_popular: bool,
    pub is_active: bool,
    pub features: Vec<PlanFeature>,
}

const NAME_KEYS: [&str; 3] = ["name", "planTitle", "PlanTitle"];
const SUBTITLE_KEYS: [&str; 3] = ["subtitle", "planSubTitle", "PlanSubTitle"];
const DESCRIPTION_KEYS: [&str; 3] = ["description", "planDescription", "PlanDescription"];
const MONTHLY_KEYS: [&str; 2] = ["monthlyPrice", "AmountPerMonth"];
const ANNUAL_KEYS: [&str; 3] = ["annualPrice", "yearlyPrice", "AmountPerYear"];
const POPULAR_KEYS: [&str; 2] = ["isPopular", "IsPopular"];
const ACTIVE_KEYS: [&str; 3] = ["isActive", "IsActive", "is_active"];

/// Adapts a raw plan object into [`PlanModel`], probing the same key
/// variants the backend has produced over time. Features go through
/// [`feature_diff::parse_feature_from_api`].
pub fn parse_plan_from_api(raw: &Value) -> PlanModel {
    let features = raw
        .get("features")
        .and_then(Value::as_array)
        .map(|entries| {
            entries
                .iter()
                .map(feature_diff::parse_feature_from_api)
                .collect()
        })
        .unwrap_or_default();

    PlanModel {
        id: raw.get("id").and_then(Value::as_i64),
        name: first_string(raw, &NAME_KEYS),
        subtitle: first_string(raw, &SUBTITLE_KEYS),
        description: first_string(raw, &DESCRIPTION_KEYS),
        monthly_price: first_number(raw, &MONTHLY_KEYS),
        annual_price: first_number(raw, &ANNUAL_KEYS),
        is_popular: first_bool(raw, &POPULAR_KEYS, false),
        is_active: first_bool(raw, &ACTIVE_KEYS, true),
        features,
    }
}

impl From<PlanModel> for PlanFormData {
    fn from(plan: PlanModel) -> Self {
        Self {
            name: plan.name,
            subtitle: plan.subtitle,
            description: plan.description,
            monthly_price: plan.monthly_price,
            annual_price: plan.annual_price,
            is_popular: plan.is_popular,
            features: plan.features,
        }
    }
}

fn first_string(raw: &Value, keys: &[&str]) -> String {
    keys.iter()
        .find_map(|key| {
            let text = raw.get(key)?.as_str()?;
            if text.is_empty() {
                return None;
            }
            Some(text.to_string())
        })
        .unwrap_or_default()
}

fn first_number(raw: &Value, keys: &[&str]) -> f64 {
    keys.iter()
        .find_map(|key| {
            let value = raw.get(key)?;
            value
                .as_f64()
                .or_else(|| value.as_str().and_then(|s| s.parse().ok()))
        })
        .unwrap_or(0.0)
}

fn first_bool(raw: &Value, keys: &[&str], default: bool) -> bool {
    keys.iter()
        .find_map(|key| raw.get(key)?.as_bool())
        .unwrap_or(default)
}
