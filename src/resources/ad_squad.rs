use crate::client::endpoint::{AD_ACCOUNT_AD_SQUADS, AD_SQUAD, CAMPAIGN_AD_SQUADS};
use crate::client::ResourceClient;
use crate::types::AdSquad;
use crate::Result;

impl ResourceClient<'_, AdSquad> {
    pub fn list_by_campaign(&self, campaign_id: &str) -> Result<Vec<AdSquad>> {
        self.list_at(CAMPAIGN_AD_SQUADS, &[("campaign_id", campaign_id)])
    }

    pub fn list_by_ad_account(&self, ad_account_id: &str) -> Result<Vec<AdSquad>> {
        self.list_at(AD_ACCOUNT_AD_SQUADS, &[("ad_account_id", ad_account_id)])
    }

    pub fn get(&self, ad_squad_id: &str) -> Result<Option<AdSquad>> {
        self.fetch_at(AD_SQUAD, &[("ad_squad_id", ad_squad_id)])
    }

    pub fn create(&self, ad_squad: &AdSquad) -> Result<Option<AdSquad>> {
        let campaign_id = ad_squad.campaign_id.as_deref().unwrap_or_default();
        self.create_at(CAMPAIGN_AD_SQUADS, &[("campaign_id", campaign_id)], ad_squad)
    }

    pub fn update(&self, ad_squad: &AdSquad) -> Result<Option<AdSquad>> {
        let campaign_id = ad_squad.campaign_id.as_deref().unwrap_or_default();
        self.update_at(CAMPAIGN_AD_SQUADS, &[("campaign_id", campaign_id)], ad_squad)
    }

    pub fn delete(&self, ad_squad_id: &str) -> Result<()> {
        self.delete_at(AD_SQUAD, &[("ad_squad_id", ad_squad_id)])
    }
}
