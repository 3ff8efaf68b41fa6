use crate::client::endpoint::{AD_ACCOUNT_SEGMENTS, SEGMENT, SEGMENT_ALL_USERS, SEGMENT_USERS};
use crate::client::resource::Batch;
use crate::client::validation::validate;
use crate::client::ResourceClient;
use crate::transport::{build_delete_with_body, build_post};
use crate::types::{AudienceSegment, SegmentUploadResult, SegmentUsers};
use crate::Result;

impl ResourceClient<'_, AudienceSegment> {
    pub fn list_by_ad_account(&self, ad_account_id: &str) -> Result<Vec<AudienceSegment>> {
        self.list_at(AD_ACCOUNT_SEGMENTS, &[("ad_account_id", ad_account_id)])
    }

    pub fn get(&self, segment_id: &str) -> Result<Option<AudienceSegment>> {
        self.fetch_at(SEGMENT, &[("segment_id", segment_id)])
    }

    pub fn create(&self, segment: &AudienceSegment) -> Result<Option<AudienceSegment>> {
        let ad_account_id = segment.ad_account_id.as_deref().unwrap_or_default();
        self.create_at(
            AD_ACCOUNT_SEGMENTS,
            &[("ad_account_id", ad_account_id)],
            segment,
        )
    }

    pub fn update(&self, segment: &AudienceSegment) -> Result<Option<AudienceSegment>> {
        let ad_account_id = segment.ad_account_id.as_deref().unwrap_or_default();
        self.update_at(
            AD_ACCOUNT_SEGMENTS,
            &[("ad_account_id", ad_account_id)],
            segment,
        )
    }

    pub fn delete(&self, segment_id: &str) -> Result<()> {
        self.delete_at(SEGMENT, &[("segment_id", segment_id)])
    }

    /// Add hashed identifiers to a segment.
    pub fn add_users(
        &self,
        segment_id: &str,
        users: &SegmentUsers,
    ) -> Result<Option<SegmentUploadResult>> {
        let (token, url) = self.prepare(SEGMENT_USERS, &[("segment_id", segment_id)])?;
        validate(users)?;
        let request = build_post(&url, Some(token), &Batch(std::slice::from_ref(users)))?;
        Ok(self.send::<SegmentUploadResult>(&request)?.into_iter().next())
    }

    /// Remove hashed identifiers from a segment. The API takes the same
    /// payload as [`Self::add_users`], sent with DELETE.
    pub fn remove_users(
        &self,
        segment_id: &str,
        users: &SegmentUsers,
    ) -> Result<Option<SegmentUploadResult>> {
        let (token, url) = self.prepare(SEGMENT_USERS, &[("segment_id", segment_id)])?;
        validate(users)?;
        let request =
            build_delete_with_body(&url, Some(token), &Batch(std::slice::from_ref(users)))?;
        Ok(self.send::<SegmentUploadResult>(&request)?.into_iter().next())
    }

    /// Empty a segment.
    pub fn remove_all_users(&self, segment_id: &str) -> Result<()> {
        self.delete_at(SEGMENT_ALL_USERS, &[("segment_id", segment_id)])
    }
}
