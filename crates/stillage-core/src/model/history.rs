// ── Container history domain type ──

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::Keyed;

/// An append-only log entry describing an action taken on a container's
/// contents. Created by backend actions; strictly read-only here.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HistoryRecord {
    pub id: i64,
    pub container_id: i64,
    pub product_id: Option<i64>,
    pub action_type: String,
    pub action_date: Option<DateTime<Utc>>,
    pub notes: Option<String>,
    pub created_at: Option<DateTime<Utc>>,
    pub updated_at: Option<DateTime<Utc>>,
}

impl Keyed for HistoryRecord {
    fn key(&self) -> i64 {
        self.id
    }
}
