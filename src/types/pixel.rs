use super::common::EntityStatus;
use super::Resource;
use crate::client::validation::{Validate, Violations};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Pixel {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ad_account_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<EntityStatus>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub effective_status: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pixel_javascript: Option<String>,
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

impl Resource for Pixel {
    const COLLECTION: &'static str = "pixels";
    const ENTITY: &'static str = "pixel";
    const LABEL: &'static str = "pixel";

    fn id(&self) -> Option<&str> {
        self.id.as_deref()
    }
}

// Pixels are only ever updated, so the id is checked by the update rules.
impl Validate for Pixel {
    fn violations(&self) -> Vec<String> {
        let mut v = Violations::new();
        v.require_text(&self.ad_account_id, "The ad account ID is required");
        v.into_vec()
    }
}
