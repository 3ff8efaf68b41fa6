//! 通用资源客户端：校验 → 构造请求 → 执行 → 解码，所有资源共用一条流水线。
//!
//! Generic resource pipeline.
//!
//! Every resource operation runs the same steps: check the token, check path
//! parameters and payload, build the request, execute it, then project the
//! entities out of the response wrapper. Per-resource operations live in
//! the `resources` module as inherent impls on [`ResourceClient`].

use super::core::SnapClient;
use super::validation::{require_params, validate, validate_token, validate_update, Validate};
use crate::codec::{decode, ResponseWrapper};
use crate::transport::{build_delete, build_get, build_post, build_put, AuthenticatedRequest};
use crate::types::Resource;
use crate::Result;
use serde::ser::SerializeMap;
use serde::{Serialize, Serializer};
use std::marker::PhantomData;

/// Request body wrapping items under their collection key:
/// `{"campaigns": [{...}]}`.
pub(crate) struct Batch<'a, T>(pub &'a [T]);

impl<T: Resource> Serialize for Batch<'_, T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(1))?;
        map.serialize_entry(T::COLLECTION, self.0)?;
        map.end()
    }
}

/// Operations on one resource type, borrowed from a [`SnapClient`].
pub struct ResourceClient<'c, T> {
    client: &'c SnapClient,
    _resource: PhantomData<fn() -> T>,
}

impl<'c, T> Clone for ResourceClient<'c, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<'c, T> Copy for ResourceClient<'c, T> {}

impl<'c, T: Resource> ResourceClient<'c, T> {
    pub(crate) fn new(client: &'c SnapClient) -> Self {
        Self {
            client,
            _resource: PhantomData,
        }
    }

    pub(crate) fn client(&self) -> &'c SnapClient {
        self.client
    }

    /// Token first, then path parameters; yields the token and the resolved URL.
    pub(crate) fn prepare(
        &self,
        template: &str,
        params: &[(&str, &str)],
    ) -> Result<(&'c str, String)> {
        let token = validate_token(self.client.access_token())?;
        require_params(params, T::COLLECTION)?;
        Ok((token, self.client.url(template, params)))
    }

    /// Execute and project entities of resource `U` out of the response.
    pub(crate) fn send<U: Resource>(&self, request: &AuthenticatedRequest) -> Result<Vec<U>> {
        let response = self.client.execute(request)?;
        match decode::<ResponseWrapper>(&response)? {
            Some(wrapper) => wrapper.into_entities(U::COLLECTION, U::ENTITY),
            None => Ok(Vec::new()),
        }
    }

    pub(crate) fn list_at(&self, template: &str, params: &[(&str, &str)]) -> Result<Vec<T>> {
        let (token, url) = self.prepare(template, params)?;
        let request = build_get(&url, Some(token))?;
        self.send::<T>(&request)
    }

    pub(crate) fn fetch_at(&self, template: &str, params: &[(&str, &str)]) -> Result<Option<T>> {
        Ok(self.list_at(template, params)?.into_iter().next())
    }

    pub(crate) fn delete_at(&self, template: &str, params: &[(&str, &str)]) -> Result<()> {
        let (token, url) = self.prepare(template, params)?;
        let request = build_delete(&url, Some(token))?;
        self.client.execute(&request)?;
        Ok(())
    }
}

impl<'c, T: Resource + Validate> ResourceClient<'c, T> {
    /// POST one item to a collection endpoint.
    ///
    /// The payload is checked before path parameters: those are usually taken
    /// from the payload itself, and its violations name them already.
    pub(crate) fn create_at(
        &self,
        template: &str,
        params: &[(&str, &str)],
        item: &T,
    ) -> Result<Option<T>> {
        validate_token(self.client.access_token())?;
        validate(item)?;
        let (token, url) = self.prepare(template, params)?;
        let request = build_post(&url, Some(token), &Batch(std::slice::from_ref(item)))?;
        Ok(self.send::<T>(&request)?.into_iter().next())
    }

    /// PUT one item to a collection endpoint. The item id is required.
    pub(crate) fn update_at(
        &self,
        template: &str,
        params: &[(&str, &str)],
        item: &T,
    ) -> Result<Option<T>> {
        validate_token(self.client.access_token())?;
        validate_update(item)?;
        let (token, url) = self.prepare(template, params)?;
        let request = build_put(&url, Some(token), &Batch(std::slice::from_ref(item)))?;
        Ok(self.send::<T>(&request)?.into_iter().next())
    }
}
