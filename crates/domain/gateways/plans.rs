use anyhow::Result;
use async_trait::async_trait;
use mockall::automock;
use serde_json::Value;

use crate::domain::value_objects::plans::SavePlanRequest;

/// Plan operations on the external billing API. Raw responses come back as
/// JSON values because the backend's field names vary; adapting them is the
/// caller's job.
#[async_trait]
#[automock]
pub trait PlanGateway {
    async fn fetch_plan(&self, plan_id: i64) -> Result<Option<Value>>;
    async fn list_plans(&self) -> Result<Vec<Value>>;
    async fn save_plan(&self, request: SavePlanRequest) -> Result<()>;
    async fn delete_plan(&self, plan_id: i64) -> Result<()>;
    async fn update_plan_status(&self, plan_id: i64, is_active: bool) -> Result<()>;
    async fn count_plan_subscribers(&self, plan_id: i64) -> Result<i64>;
}
