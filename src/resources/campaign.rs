use crate::client::endpoint::{AD_ACCOUNT_CAMPAIGNS, CAMPAIGN};
use crate::client::ResourceClient;
use crate::types::Campaign;
use crate::Result;

impl ResourceClient<'_, Campaign> {
    pub fn list_by_ad_account(&self, ad_account_id: &str) -> Result<Vec<Campaign>> {
        self.list_at(AD_ACCOUNT_CAMPAIGNS, &[("ad_account_id", ad_account_id)])
    }

    pub fn get(&self, campaign_id: &str) -> Result<Option<Campaign>> {
        self.fetch_at(CAMPAIGN, &[("campaign_id", campaign_id)])
    }

    /// Create a campaign under its `ad_account_id`.
    pub fn create(&self, campaign: &Campaign) -> Result<Option<Campaign>> {
        let ad_account_id = campaign.ad_account_id.as_deref().unwrap_or_default();
        self.create_at(
            AD_ACCOUNT_CAMPAIGNS,
            &[("ad_account_id", ad_account_id)],
            campaign,
        )
    }

    pub fn update(&self, campaign: &Campaign) -> Result<Option<Campaign>> {
        let ad_account_id = campaign.ad_account_id.as_deref().unwrap_or_default();
        self.update_at(
            AD_ACCOUNT_CAMPAIGNS,
            &[("ad_account_id", ad_account_id)],
            campaign,
        )
    }

    pub fn delete(&self, campaign_id: &str) -> Result<()> {
        self.delete_at(CAMPAIGN, &[("campaign_id", campaign_id)])
    }
}
