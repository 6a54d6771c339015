//! Shared query parameter types for API handlers.

use serde::Deserialize;

/// Optional `?workId=` filter on list endpoints of work-scoped entities.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkFilterParams {
    pub work_id: Option<String>,
}
