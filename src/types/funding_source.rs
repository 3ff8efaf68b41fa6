use super::Resource;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Funding sources are read-only through this API. `type` and `status` are
/// kept as text since the set of payment instruments keeps growing.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FundingSource {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(default, rename = "type", skip_serializing_if = "Option::is_none")]
    pub source_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub currency: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total_budget_micro: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub budget_spent_micro: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub available_credit_micro: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub card_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_4: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub expiration_month: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub expiration_year: Option<String>,
    #[serde(
        default,
        with = "crate::codec::date::optional",
        skip_serializing_if = "Option::is_none"
    )]
    pub start_date: Option<DateTime<Utc>>,
    #[serde(
        default,
        with = "crate::codec::date::optional",
        skip_serializing_if = "Option::is_none"
    )]
    pub end_date: Option<DateTime<Utc>>,
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

impl Resource for FundingSource {
    const COLLECTION: &'static str = "fundingsources";
    const ENTITY: &'static str = "fundingsource";
    const LABEL: &'static str = "funding source";

    fn id(&self) -> Option<&str> {
        self.id.as_deref()
    }
}
