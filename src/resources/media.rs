use crate::client::endpoint::{AD_ACCOUNT_MEDIA, MEDIA, MEDIA_UPLOAD};
use crate::client::ResourceClient;
use crate::codec::decode;
use crate::transport::{build_multipart_upload, UploadFile};
use crate::types::{Media, MediaUploadResult};
use crate::Result;
use serde::Deserialize;
use tracing::debug;

#[derive(Debug, Default, Deserialize)]
struct UploadResponse {
    #[serde(default)]
    result: Option<MediaUploadResult>,
}

impl ResourceClient<'_, Media> {
    pub fn list_by_ad_account(&self, ad_account_id: &str) -> Result<Vec<Media>> {
        self.list_at(AD_ACCOUNT_MEDIA, &[("ad_account_id", ad_account_id)])
    }

    pub fn get(&self, media_id: &str) -> Result<Option<Media>> {
        self.fetch_at(MEDIA, &[("media_id", media_id)])
    }

    /// Create the media entity. Its content is sent afterwards with [`Self::upload`].
    pub fn create(&self, media: &Media) -> Result<Option<Media>> {
        let ad_account_id = media.ad_account_id.as_deref().unwrap_or_default();
        self.create_at(AD_ACCOUNT_MEDIA, &[("ad_account_id", ad_account_id)], media)
    }

    /// Upload the file backing a media entity as `multipart/form-data`.
    pub fn upload(&self, media_id: &str, file: UploadFile) -> Result<Option<MediaUploadResult>> {
        let (token, url) = self.prepare(MEDIA_UPLOAD, &[("media_id", media_id)])?;
        debug!(
            media_id,
            file_name = file.file_name.as_str(),
            bytes = file.bytes.len(),
            "uploading media"
        );
        let request = build_multipart_upload(&url, Some(token), Some(file), &[])?;
        let response = self.client().execute(&request)?;
        Ok(decode::<UploadResponse>(&response)?.and_then(|r| r.result))
    }
}
