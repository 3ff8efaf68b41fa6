use super::common::CreativeType;
use super::Resource;
use crate::client::validation::{Validate, Violations};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Creative {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ad_account_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, rename = "type", skip_serializing_if = "Option::is_none")]
    pub creative_type: Option<CreativeType>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub headline: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub brand_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub shareable: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub call_to_action: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub top_snap_media_id: Option<String>,
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

impl Resource for Creative {
    const COLLECTION: &'static str = "creatives";
    const ENTITY: &'static str = "creative";
    const LABEL: &'static str = "creative";

    fn id(&self) -> Option<&str> {
        self.id.as_deref()
    }
}

impl Validate for Creative {
    fn violations(&self) -> Vec<String> {
        let mut v = Violations::new();
        v.require_text(&self.ad_account_id, "The ad account ID is required")
            .require_text(&self.name, "The creative name is required")
            .require(&self.creative_type, "The creative type is required");
        v.into_vec()
    }
}
