use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// Portfolio header record supplied by the data-access layer.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct Portfolio {
    pub id: String,
    pub user_id: String,
    pub name: String,
    pub base_currency: String,
    pub created_at: Option<NaiveDateTime>,
}
