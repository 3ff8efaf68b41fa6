//! 资源类型：广告 API 各资源的领域对象与枚举词汇。
//!
//! # Types Module
//!
//! Domain objects exchanged with the marketing API. Every field the server
//! may omit is optional, and decoding ignores fields this crate does not
//! know about yet.
//!
//! ## Key Types
//!
//! | Type | Collection key | Entity key |
//! |------|----------------|------------|
//! | [`Organization`] | `organizations` | `organization` |
//! | [`AdAccount`] | `adaccounts` | `adaccount` |
//! | [`Campaign`] | `campaigns` | `campaign` |
//! | [`AdSquad`] | `adsquads` | `adsquad` |
//! | [`Ad`] | `ads` | `ad` |
//! | [`Creative`] | `creatives` | `creative` |
//! | [`Media`] | `media` | `media` |
//! | [`FundingSource`] | `fundingsources` | `fundingsource` |
//! | [`Pixel`] | `pixels` | `pixel` |
//! | [`AudienceSegment`] | `segments` | `segment` |

pub mod ad;
pub mod ad_account;
pub mod ad_squad;
pub mod campaign;
pub mod common;
pub mod creative;
pub mod funding_source;
pub mod media;
pub mod organization;
pub mod pixel;
pub mod segment;

pub use ad::Ad;
pub use ad_account::AdAccount;
pub use ad_squad::{AdSquad, GeoTarget, Targeting};
pub use campaign::Campaign;
pub use common::{
    AdAccountType, AdSquadType, AdType, BillingEvent, CreativeType, EntityStatus, MediaType,
    Placement, SegmentSourceType, UserSchema,
};
pub use creative::Creative;
pub use funding_source::FundingSource;
pub use media::{Media, MediaUploadResult};
pub use organization::Organization;
pub use pixel::Pixel;
pub use segment::{AudienceSegment, SegmentUploadResult, SegmentUsers};

use serde::de::DeserializeOwned;
use serde::Serialize;

/// A resource addressable through the generic request pipeline.
///
/// `COLLECTION` names the array in request and response bodies, `ENTITY` the
/// member wrapping each item inside a response entry. `LABEL` is the
/// human-readable name used in validation messages.
pub trait Resource: Serialize + DeserializeOwned {
    const COLLECTION: &'static str;
    const ENTITY: &'static str;
    const LABEL: &'static str;

    fn id(&self) -> Option<&str>;
}
