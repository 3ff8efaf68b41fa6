use crate::client::endpoint::{AD, AD_ACCOUNT_ADS, AD_SQUAD_ADS};
use crate::client::ResourceClient;
use crate::types::Ad;
use crate::Result;

impl ResourceClient<'_, Ad> {
    pub fn list_by_ad_squad(&self, ad_squad_id: &str) -> Result<Vec<Ad>> {
        self.list_at(AD_SQUAD_ADS, &[("ad_squad_id", ad_squad_id)])
    }

    pub fn list_by_ad_account(&self, ad_account_id: &str) -> Result<Vec<Ad>> {
        self.list_at(AD_ACCOUNT_ADS, &[("ad_account_id", ad_account_id)])
    }

    pub fn get(&self, ad_id: &str) -> Result<Option<Ad>> {
        self.fetch_at(AD, &[("ad_id", ad_id)])
    }

    pub fn create(&self, ad: &Ad) -> Result<Option<Ad>> {
        let ad_squad_id = ad.ad_squad_id.as_deref().unwrap_or_default();
        self.create_at(AD_SQUAD_ADS, &[("ad_squad_id", ad_squad_id)], ad)
    }

    pub fn update(&self, ad: &Ad) -> Result<Option<Ad>> {
        let ad_squad_id = ad.ad_squad_id.as_deref().unwrap_or_default();
        self.update_at(AD_SQUAD_ADS, &[("ad_squad_id", ad_squad_id)], ad)
    }

    pub fn delete(&self, ad_id: &str) -> Result<()> {
        self.delete_at(AD, &[("ad_id", ad_id)])
    }
}
