use crate::client::endpoint::{AD_ACCOUNT_PIXELS, PIXEL};
use crate::client::ResourceClient;
use crate::types::Pixel;
use crate::Result;

impl ResourceClient<'_, Pixel> {
    /// An ad account has at most one pixel.
    pub fn get_by_ad_account(&self, ad_account_id: &str) -> Result<Option<Pixel>> {
        self.fetch_at(AD_ACCOUNT_PIXELS, &[("ad_account_id", ad_account_id)])
    }

    pub fn get(&self, pixel_id: &str) -> Result<Option<Pixel>> {
        self.fetch_at(PIXEL, &[("pixel_id", pixel_id)])
    }

    pub fn update(&self, pixel: &Pixel) -> Result<Option<Pixel>> {
        let ad_account_id = pixel.ad_account_id.as_deref().unwrap_or_default();
        self.update_at(AD_ACCOUNT_PIXELS, &[("ad_account_id", ad_account_id)], pixel)
    }
}
