use super::common::{AdSquadType, BillingEvent, EntityStatus, Placement};
use super::Resource;
use crate::client::validation::{Validate, Violations};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GeoTarget {
    pub country_code: String,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Audience targeting of an ad squad.
///
/// Only geos are typed; every other targeting section (demographics,
/// devices, segments, ...) is carried through untouched in `extra`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Targeting {
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub geos: Vec<GeoTarget>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AdSquad {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub campaign_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, rename = "type", skip_serializing_if = "Option::is_none")]
    pub squad_type: Option<AdSquadType>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub placement: Option<Placement>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<EntityStatus>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub targeting: Option<Targeting>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub billing_event: Option<BillingEvent>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bid_micro: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub auto_bid: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub daily_budget_micro: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lifetime_budget_micro: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub optimization_goal: Option<String>,
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

impl Resource for AdSquad {
    const COLLECTION: &'static str = "adsquads";
    const ENTITY: &'static str = "adsquad";
    const LABEL: &'static str = "ad squad";

    fn id(&self) -> Option<&str> {
        self.id.as_deref()
    }
}

impl Validate for AdSquad {
    fn violations(&self) -> Vec<String> {
        let mut v = Violations::new();
        v.require_text(&self.campaign_id, "The campaign ID is required")
            .require_text(&self.name, "The ad squad name is required")
            .require(&self.squad_type, "The ad squad type is required")
            .require(&self.status, "The ad squad status is required")
            .require(&self.targeting, "The ad squad targeting is required")
            .require(&self.placement, "The ad squad placement is required")
            .require(&self.billing_event, "The ad squad billing event is required");
        v.into_vec()
    }
}
