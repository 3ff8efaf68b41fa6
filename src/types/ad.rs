use super::common::{AdType, EntityStatus};
use super::Resource;
use crate::client::validation::{Validate, Violations};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Ad {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ad_squad_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub creative_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, rename = "type", skip_serializing_if = "Option::is_none")]
    pub ad_type: Option<AdType>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<EntityStatus>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub review_status: Option<String>,
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

impl Resource for Ad {
    const COLLECTION: &'static str = "ads";
    const ENTITY: &'static str = "ad";
    const LABEL: &'static str = "ad";

    fn id(&self) -> Option<&str> {
        self.id.as_deref()
    }
}

impl Validate for Ad {
    fn violations(&self) -> Vec<String> {
        let mut v = Violations::new();
        v.require_text(&self.ad_squad_id, "The ad squad ID is required")
            .require_text(&self.creative_id, "The creative ID is required")
            .require_text(&self.name, "The ad name is required")
            .require(&self.ad_type, "The ad type is required")
            .require(&self.status, "The ad status is required");
        v.into_vec()
    }
}
