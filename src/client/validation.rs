//! 调用前校验：令牌检查与必填字段检查，失败时不会触达网络。
//!
//! Pre-flight validation.
//!
//! The token is checked first, then path parameters, then the payload. Every
//! failing field of a payload is reported in one error.

use crate::types::Resource;
use crate::{Error, ErrorContext, Result};

/// Required-field rules of a domain object.
pub trait Validate {
    /// Messages for every missing field. Empty when the object is valid.
    fn violations(&self) -> Vec<String>;
}

/// Collects violation messages while a validator walks an object.
#[derive(Debug, Default)]
pub struct Violations {
    list: Vec<String>,
}

impl Violations {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn require_text(&mut self, value: &Option<String>, message: &str) -> &mut Self {
        if value.as_deref().map(str::trim).unwrap_or("").is_empty() {
            self.list.push(message.to_string());
        }
        self
    }

    pub fn require<T>(&mut self, value: &Option<T>, message: &str) -> &mut Self {
        if value.is_none() {
            self.list.push(message.to_string());
        }
        self
    }

    pub fn require_some<T>(&mut self, values: &[T], message: &str) -> &mut Self {
        if values.is_empty() {
            self.list.push(message.to_string());
        }
        self
    }

    pub fn into_vec(self) -> Vec<String> {
        self.list
    }
}

pub(crate) fn validate_token(token: Option<&str>) -> Result<&str> {
    match token.map(str::trim) {
        Some(token) if !token.is_empty() => Ok(token),
        _ => Err(Error::auth("The OAuth access token is required")),
    }
}

/// "ad_account_id" -> "ad account ID"
fn param_label(name: &str) -> String {
    let spaced = name.replace(['_', '-'], " ");
    match spaced.strip_suffix(" id") {
        Some(stem) => format!("{} ID", stem),
        None => spaced,
    }
}

/// Every path parameter must be non-blank.
pub(crate) fn require_params(params: &[(&str, &str)], source: &str) -> Result<()> {
    let violations: Vec<String> = params
        .iter()
        .filter(|(_, value)| value.trim().is_empty())
        .map(|(name, _)| format!("The {} is required", param_label(name)))
        .collect();
    if violations.is_empty() {
        Ok(())
    } else {
        Err(Error::argument(
            violations,
            ErrorContext::new()
                .with_field_path("path")
                .with_source(source.to_string()),
        ))
    }
}

/// Validate a payload about to be created.
pub fn validate<T: Resource + Validate>(item: &T) -> Result<()> {
    finish::<T>(item.violations())
}

/// Validate a payload about to be updated; the id is required on top of the create rules.
pub fn validate_update<T: Resource + Validate>(item: &T) -> Result<()> {
    let mut violations = Vec::new();
    if item.id().map(str::trim).unwrap_or("").is_empty() {
        violations.push(format!("The {} ID is required", T::LABEL));
    }
    violations.extend(item.violations());
    finish::<T>(violations)
}

fn finish<T: Resource>(violations: Vec<String>) -> Result<()> {
    if violations.is_empty() {
        return Ok(());
    }
    Err(Error::argument(
        violations,
        ErrorContext::new()
            .with_field_path(T::ENTITY)
            .with_source(format!("{}_validator", T::ENTITY)),
    ))
}
