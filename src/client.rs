//! 客户端：配置、共享传输与各资源的访问入口。
//!
//! Client surface.
//!
//! [`SnapClient`] owns configuration and transport; resource accessors hand
//! out [`ResourceClient`] views that run the shared request pipeline.

pub mod builder;
pub mod core;
pub mod endpoint;
pub mod resource;
pub mod validation;

pub use builder::SnapClientBuilder;
pub use core::SnapClient;
pub use resource::ResourceClient;
pub use validation::{Validate, Violations};
