//! Per-resource operations.
//!
//! Each file adds inherent methods to [`crate::ResourceClient`] for one
//! resource type. They only name endpoints and path parameters; the pipeline
//! itself lives in [`crate::client::resource`].

mod ad;
mod ad_account;
mod ad_squad;
mod campaign;
mod creative;
mod funding_source;
mod media;
mod organization;
mod pixel;
mod segment;
