use crate::client::endpoint::{ME_ORGANIZATIONS, ORGANIZATION};
use crate::client::ResourceClient;
use crate::types::Organization;
use crate::Result;

impl ResourceClient<'_, Organization> {
    /// Organizations the token's user belongs to.
    pub fn list_mine(&self) -> Result<Vec<Organization>> {
        self.list_at(ME_ORGANIZATIONS, &[])
    }

    pub fn get(&self, organization_id: &str) -> Result<Option<Organization>> {
        self.fetch_at(ORGANIZATION, &[("organization_id", organization_id)])
    }
}
