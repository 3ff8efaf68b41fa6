use super::common::MediaType;
use super::Resource;
use crate::client::validation::{Validate, Violations};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Media {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ad_account_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, rename = "type", skip_serializing_if = "Option::is_none")]
    pub media_type: Option<MediaType>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub media_status: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub file_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub download_link: Option<String>,
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

impl Resource for Media {
    const COLLECTION: &'static str = "media";
    const ENTITY: &'static str = "media";
    const LABEL: &'static str = "media";

    fn id(&self) -> Option<&str> {
        self.id.as_deref()
    }
}

impl Validate for Media {
    fn violations(&self) -> Vec<String> {
        let mut v = Violations::new();
        v.require_text(&self.ad_account_id, "The ad account ID is required")
            .require_text(&self.name, "The media name is required")
            .require(&self.media_type, "The media type is required");
        v.into_vec()
    }
}

/// `result` member of a media upload response.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MediaUploadResult {
    #[serde(default)]
    pub file_name: Option<String>,
    #[serde(default)]
    pub download_link: Option<String>,
    #[serde(default)]
    pub duration_in_seconds: Option<f64>,
}
