use crate::client::endpoint::{AD_ACCOUNT_CREATIVES, CREATIVE};
use crate::client::ResourceClient;
use crate::types::Creative;
use crate::Result;

impl ResourceClient<'_, Creative> {
    pub fn list_by_ad_account(&self, ad_account_id: &str) -> Result<Vec<Creative>> {
        self.list_at(AD_ACCOUNT_CREATIVES, &[("ad_account_id", ad_account_id)])
    }

    pub fn get(&self, creative_id: &str) -> Result<Option<Creative>> {
        self.fetch_at(CREATIVE, &[("creative_id", creative_id)])
    }

    pub fn create(&self, creative: &Creative) -> Result<Option<Creative>> {
        let ad_account_id = creative.ad_account_id.as_deref().unwrap_or_default();
        self.create_at(
            AD_ACCOUNT_CREATIVES,
            &[("ad_account_id", ad_account_id)],
            creative,
        )
    }

    pub fn update(&self, creative: &Creative) -> Result<Option<Creative>> {
        let ad_account_id = creative.ad_account_id.as_deref().unwrap_or_default();
        self.update_at(
            AD_ACCOUNT_CREATIVES,
            &[("ad_account_id", ad_account_id)],
            creative,
        )
    }
}
