use crate::client::endpoint::{FUNDING_SOURCE, ORGANIZATION_FUNDING_SOURCES};
use crate::client::ResourceClient;
use crate::types::FundingSource;
use crate::Result;

impl ResourceClient<'_, FundingSource> {
    pub fn list_by_organization(&self, organization_id: &str) -> Result<Vec<FundingSource>> {
        self.list_at(
            ORGANIZATION_FUNDING_SOURCES,
            &[("organization_id", organization_id)],
        )
    }

    pub fn get(&self, funding_source_id: &str) -> Result<Option<FundingSource>> {
        self.fetch_at(FUNDING_SOURCE, &[("funding_source_id", funding_source_id)])
    }
}
