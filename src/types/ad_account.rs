use super::common::{AdAccountType, EntityStatus};
use super::Resource;
use crate::client::validation::{Validate, Violations};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AdAccount {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub organization_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, rename = "type", skip_serializing_if = "Option::is_none")]
    pub account_type: Option<AdAccountType>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<EntityStatus>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub funding_source_ids: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub currency: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timezone: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub advertiser: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub brand_name: Option<String>,
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

impl Resource for AdAccount {
    const COLLECTION: &'static str = "adaccounts";
    const ENTITY: &'static str = "adaccount";
    const LABEL: &'static str = "ad account";

    fn id(&self) -> Option<&str> {
        self.id.as_deref()
    }
}

impl Validate for AdAccount {
    fn violations(&self) -> Vec<String> {
        let mut v = Violations::new();
        v.require_text(&self.organization_id, "The organization ID is required")
            .require_text(&self.name, "The ad account name is required")
            .require(&self.account_type, "The ad account type is required")
            .require_text(&self.currency, "The ad account currency is required")
            .require_text(&self.timezone, "The ad account timezone is required")
            .require_some(
                &self.funding_source_ids,
                "At least one funding source ID is required",
            );
        v.into_vec()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn complete_account_is_valid() {
        let account = AdAccount {
            organization_id: Some("org".into()),
            name: Some("Hooli".into()),
            account_type: Some(AdAccountType::Partner),
            currency: Some("USD".into()),
            timezone: Some("America/Los_Angeles".into()),
            funding_source_ids: vec!["fs".into()],
            ..Default::default()
        };
        assert!(account.violations().is_empty());
        let json = serde_json::to_value(&account).unwrap();
        assert_eq!(json["type"], "PARTNER");
        assert!(json.get("id").is_none());
    }

    #[test]
    fn funding_sources_are_required() {
        let v = AdAccount::default().violations();
        assert!(v.contains(&"At least one funding source ID is required".to_string()));
        assert_eq!(v.len(), 6);
    }
}
