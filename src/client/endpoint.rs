//! URL templates of the marketing API, relative to the configured base URL.
//!
//! Placeholders are replaced by plain string substitution. Values are not
//! percent-encoded; ids issued by the API never need it.

pub const ME_ORGANIZATIONS: &str = "/me/organizations";
pub const ORGANIZATION: &str = "/organizations/{organization_id}";

pub const ORGANIZATION_AD_ACCOUNTS: &str = "/organizations/{organization_id}/adaccounts";
pub const AD_ACCOUNT: &str = "/adaccounts/{ad_account_id}";

pub const AD_ACCOUNT_CAMPAIGNS: &str = "/adaccounts/{ad_account_id}/campaigns";
pub const CAMPAIGN: &str = "/campaigns/{campaign_id}";

pub const CAMPAIGN_AD_SQUADS: &str = "/campaigns/{campaign_id}/adsquads";
pub const AD_ACCOUNT_AD_SQUADS: &str = "/adaccounts/{ad_account_id}/adsquads";
pub const AD_SQUAD: &str = "/adsquads/{ad_squad_id}";

pub const AD_SQUAD_ADS: &str = "/adsquads/{ad_squad_id}/ads";
pub const AD_ACCOUNT_ADS: &str = "/adaccounts/{ad_account_id}/ads";
pub const AD: &str = "/ads/{ad_id}";

pub const AD_ACCOUNT_CREATIVES: &str = "/adaccounts/{ad_account_id}/creatives";
pub const CREATIVE: &str = "/creatives/{creative_id}";

pub const AD_ACCOUNT_MEDIA: &str = "/adaccounts/{ad_account_id}/media";
pub const MEDIA: &str = "/media/{media_id}";
pub const MEDIA_UPLOAD: &str = "/media/{media_id}/upload";

pub const ORGANIZATION_FUNDING_SOURCES: &str = "/organizations/{organization_id}/fundingsources";
pub const FUNDING_SOURCE: &str = "/fundingsources/{funding_source_id}";

pub const AD_ACCOUNT_PIXELS: &str = "/adaccounts/{ad_account_id}/pixels";
pub const PIXEL: &str = "/pixels/{pixel_id}";

pub const AD_ACCOUNT_SEGMENTS: &str = "/adaccounts/{ad_account_id}/segments";
pub const SEGMENT: &str = "/segments/{segment_id}";
pub const SEGMENT_USERS: &str = "/segments/{segment_id}/users";
pub const SEGMENT_ALL_USERS: &str = "/segments/{segment_id}/all_users";

/// Replace each `{name}` in `template` with its value.
pub fn substitute(template: &str, params: &[(&str, &str)]) -> String {
    params.iter().fold(template.to_string(), |path, (name, value)| {
        path.replace(&format!("{{{}}}", name), value)
    })
}

/// Absolute URL of `template` under `base_url`.
pub fn resolve(base_url: &str, template: &str, params: &[(&str, &str)]) -> String {
    format!(
        "{}{}",
        base_url.trim_end_matches('/'),
        substitute(template, params)
    )
}
