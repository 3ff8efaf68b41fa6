//! # snapads-rust
//!
//! 面向 Snap 营销 API 的阻塞式 Rust 客户端：所有资源共用一条经过认证的请求/响应流水线。
//!
//! Blocking client for the Snap Marketing API. Every resource (organizations,
//! ad accounts, campaigns, ad squads, ads, creatives, media, funding sources,
//! pixels, audience segments) goes through one request/response pipeline.
//!
//! ## Overview
//!
//! A call runs in four steps:
//!
//! 1. **Validate**: the bearer token is checked first, then path parameters
//!    and required payload fields. Failures never reach the network.
//! 2. **Build**: the URL template is filled in and an [`AuthenticatedRequest`]
//!    is constructed (JSON, multipart or form body).
//! 3. **Execute**: the [`Transport`] performs the request once. There are no
//!    retries.
//! 4. **Decode**: statuses >= 300 are classified into [`Error::Response`];
//!    otherwise the body is decoded, ignoring unknown fields, and the entities
//!    are projected out of the response wrapper.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use snapads_rust::SnapClient;
//!
//! fn main() -> snapads_rust::Result<()> {
//!     let client = SnapClient::builder()
//!         .access_token("your-access-token")
//!         .build()?;
//!
//!     for org in client.organizations().list_mine()? {
//!         println!("{:?} {:?}", org.id, org.name);
//!         for account in client.ad_accounts().list_by_organization(org.id.as_deref().unwrap_or(""))? {
//!             println!("  {:?}", account.name);
//!         }
//!     }
//!     Ok(())
//! }
//! ```
//!
//! ## Module Organization
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`client`] | [`SnapClient`], its builder and the generic resource pipeline |
//! | [`types`] | Domain objects and enum vocabularies |
//! | [`transport`] | Request construction and the blocking HTTP transport |
//! | [`codec`] | Date codec and tolerant response decoding |
//! | [`error_code`] | HTTP status classification |
//! | [`config`] | Configuration from defaults, YAML and environment |
//! | [`auth`] | OAuth authorization-code flow |

pub mod auth;
pub mod client;
pub mod codec;
pub mod config;
pub mod error;
pub mod error_code;
mod resources;
pub mod transport;
pub mod types;

// Re-export main types for convenience
pub use auth::{OAuthClient, TokenResponse};
pub use client::{ResourceClient, SnapClient, SnapClientBuilder, Validate};
pub use config::{OAuthConfig, SdkConfig};
pub use error::{Error, ErrorContext};
pub use error_code::{classify, ResponseError, StatusKind};
pub use transport::{
    AuthenticatedRequest, HttpTransport, ResponseEnvelope, Transport, TransportError, UploadFile,
};
pub use types::{
    Ad, AdAccount, AdAccountType, AdSquad, AdSquadType, AdType, AudienceSegment, BillingEvent,
    Campaign, Creative, CreativeType, EntityStatus, FundingSource, GeoTarget, Media, MediaType,
    MediaUploadResult, Organization, Pixel, Placement, Resource, SegmentSourceType,
    SegmentUploadResult, SegmentUsers, Targeting, UserSchema,
};

/// Result type alias for the library
pub type Result<T> = std::result::Result<T, Error>;
