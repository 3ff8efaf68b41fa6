use crate::client::endpoint::{AD_ACCOUNT, ORGANIZATION_AD_ACCOUNTS};
use crate::client::ResourceClient;
use crate::types::AdAccount;
use crate::Result;

impl ResourceClient<'_, AdAccount> {
    pub fn list_by_organization(&self, organization_id: &str) -> Result<Vec<AdAccount>> {
        self.list_at(ORGANIZATION_AD_ACCOUNTS, &[("organization_id", organization_id)])
    }

    pub fn get(&self, ad_account_id: &str) -> Result<Option<AdAccount>> {
        self.fetch_at(AD_ACCOUNT, &[("ad_account_id", ad_account_id)])
    }

    pub fn create(&self, account: &AdAccount) -> Result<Option<AdAccount>> {
        let organization_id = account.organization_id.as_deref().unwrap_or_default();
        self.create_at(
            ORGANIZATION_AD_ACCOUNTS,
            &[("organization_id", organization_id)],
            account,
        )
    }

    pub fn update(&self, account: &AdAccount) -> Result<Option<AdAccount>> {
        let organization_id = account.organization_id.as_deref().unwrap_or_default();
        self.update_at(
            ORGANIZATION_AD_ACCOUNTS,
            &[("organization_id", organization_id)],
            account,
        )
    }
}
