use super::common::{SegmentSourceType, UserSchema};
use super::Resource;
use crate::client::validation::{Validate, Violations};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AudienceSegment {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ad_account_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub organization_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source_type: Option<SegmentSourceType>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub retention_in_days: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub approximate_number_users: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub upload_status: Option<String>,
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

impl Resource for AudienceSegment {
    const COLLECTION: &'static str = "segments";
    const ENTITY: &'static str = "segment";
    const LABEL: &'static str = "segment";

    fn id(&self) -> Option<&str> {
        self.id.as_deref()
    }
}

impl Validate for AudienceSegment {
    fn violations(&self) -> Vec<String> {
        let mut v = Violations::new();
        v.require_text(&self.ad_account_id, "The ad account ID is required")
            .require_text(&self.name, "The segment name is required")
            .require(&self.source_type, "The segment source type is required")
            .require(&self.retention_in_days, "The segment retention in days is required");
        v.into_vec()
    }
}

/// A batch of hashed identifiers added to or removed from a segment.
///
/// Each row of `data` holds one value per entry of `schema`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SegmentUsers {
    #[serde(default)]
    pub schema: Vec<UserSchema>,
    #[serde(default)]
    pub data: Vec<Vec<String>>,
}

impl SegmentUsers {
    pub fn new(schema: UserSchema, hashes: impl IntoIterator<Item = String>) -> Self {
        Self {
            schema: vec![schema],
            data: hashes.into_iter().map(|h| vec![h]).collect(),
        }
    }
}

impl Resource for SegmentUsers {
    const COLLECTION: &'static str = "users";
    const ENTITY: &'static str = "user";
    const LABEL: &'static str = "segment users";

    fn id(&self) -> Option<&str> {
        None
    }
}

impl Validate for SegmentUsers {
    fn violations(&self) -> Vec<String> {
        let mut v = Violations::new();
        v.require_some(&self.schema, "The user schema is required")
            .require_some(&self.data, "At least one user identifier is required");
        v.into_vec()
    }
}

/// Per-batch outcome of a segment user upload or removal.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SegmentUploadResult {
    #[serde(default)]
    pub number_uploaded_users: Option<u64>,
}

impl Resource for SegmentUploadResult {
    const COLLECTION: &'static str = "users";
    const ENTITY: &'static str = "user";
    const LABEL: &'static str = "segment upload result";

    fn id(&self) -> Option<&str> {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn users_serialize_one_hash_per_row() {
        let users = SegmentUsers::new(UserSchema::EmailSha256, vec!["h1".to_string(), "h2".to_string()]);
        let json = serde_json::to_value(&users).unwrap();
        assert_eq!(json["schema"][0], "EMAIL_SHA256");
        assert_eq!(json["data"][1][0], "h2");
        assert!(users.violations().is_empty());
    }

    #[test]
    fn empty_upload_reports_schema_and_data() {
        assert_eq!(SegmentUsers::default().violations().len(), 2);
    }
}
