use super::common::EntityStatus;
use super::Resource;
use crate::client::validation::{Validate, Violations};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Campaign {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ad_account_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<EntityStatus>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub objective: Option<String>,
    #[serde(
        default,
        with = "crate::codec::date::optional",
        skip_serializing_if = "Option::is_none"
    )]
    pub start_time: Option<DateTime<Utc>>,
    #[serde(
        default,
        with = "crate::codec::date::optional",
        skip_serializing_if = "Option::is_none"
    )]
    pub end_time: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub daily_budget_micro: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lifetime_spend_cap_micro: Option<u64>,
    #[serde(
        default,
        with = "crate::codec::date::optional",
        skip_serializing_if = "Option::is_none"
    )]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(
        default,
        with = "crate::codec::date::optional",
        skip_serializing_if = "Option::is_none"
    )]
    pub updated_at: Option<DateTime<Utc>>,
}

impl Resource for Campaign {
    const COLLECTION: &'static str = "campaigns";
    const ENTITY: &'static str = "campaign";
    const LABEL: &'static str = "campaign";

    fn id(&self) -> Option<&str> {
        self.id.as_deref()
    }
}

impl Validate for Campaign {
    fn violations(&self) -> Vec<String> {
        let mut v = Violations::new();
        v.require_text(&self.ad_account_id, "The ad account ID is required")
            .require_text(&self.name, "The campaign name is required")
            .require(&self.status, "The campaign status is required")
            .require(&self.start_time, "The campaign start time is required");
        v.into_vec()
    }
}
