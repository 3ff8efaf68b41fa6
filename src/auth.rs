//! OAuth 2.0 authorization-code flow against the accounts service.
//!
//! The token endpoint is the only unauthenticated call in the crate; its
//! responses go through the same status classification as every other call.

use crate::client::SnapClient;
use crate::codec::decode;
use crate::config::OAuthConfig;
use crate::transport::build_form_post;
use crate::{Error, ErrorContext, Result};
use serde::{Deserialize, Serialize};
use tracing::debug;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenResponse {
    pub access_token: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub refresh_token: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub token_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub expires_in: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub scope: Option<String>,
}

pub struct OAuthClient<'c> {
    client: &'c SnapClient,
    credentials: &'c OAuthConfig,
}

impl<'c> OAuthClient<'c> {
    pub(crate) fn new(client: &'c SnapClient) -> Result<Self> {
        let credentials = client.config().oauth.as_ref().ok_or_else(|| {
            Error::configuration_with_context(
                "OAuth client credentials are not configured",
                ErrorContext::new()
                    .with_field_path("config.oauth")
                    .with_details("set SNAPADS_CLIENT_ID, SNAPADS_CLIENT_SECRET and SNAPADS_REDIRECT_URI")
                    .with_source("oauth"),
            )
        })?;
        Ok(Self {
            client,
            credentials,
        })
    }

    /// URL the user is sent to in order to grant access.
    pub fn authorization_url(&self, state: &str) -> Result<String> {
        let c = self.credentials;
        let url = url::Url::parse_with_params(
            &c.authorize_url,
            &[
                ("client_id", c.client_id.as_str()),
                ("redirect_uri", c.redirect_uri.as_str()),
                ("response_type", "code"),
                ("scope", c.scope.as_str()),
                ("state", state),
            ],
        )
        .map_err(|e| {
            Error::configuration_with_context(
                format!("invalid authorize URL: {}", e),
                ErrorContext::new().with_field_path("config.oauth.authorize_url"),
            )
        })?;
        Ok(url.into())
    }

    /// Trade an authorization code for tokens.
    pub fn exchange_code(&self, code: &str) -> Result<TokenResponse> {
        let code = required(code, "The authorization code is required")?;
        let c = self.credentials;
        self.request_token(&[
            ("grant_type", "authorization_code"),
            ("client_id", c.client_id.as_str()),
            ("client_secret", c.client_secret.as_str()),
            ("code", code),
            ("redirect_uri", c.redirect_uri.as_str()),
        ])
    }

    pub fn refresh(&self, refresh_token: &str) -> Result<TokenResponse> {
        let refresh_token = required(refresh_token, "The refresh token is required")?;
        let c = self.credentials;
        self.request_token(&[
            ("grant_type", "refresh_token"),
            ("client_id", c.client_id.as_str()),
            ("client_secret", c.client_secret.as_str()),
            ("refresh_token", refresh_token),
        ])
    }

    fn request_token(&self, fields: &[(&str, &str)]) -> Result<TokenResponse> {
        let grant_type = fields.first().map(|(_, v)| *v).unwrap_or_default();
        debug!(grant_type, token_url = self.credentials.token_url.as_str(), "requesting token");
        let request = build_form_post(&self.credentials.token_url, fields);
        let response = self.client.execute(&request)?;
        decode::<TokenResponse>(&response)?
            .ok_or_else(|| Error::decoding("empty token response"))
    }
}

fn required<'a>(value: &'a str, message: &str) -> Result<&'a str> {
    let value = value.trim();
    if value.is_empty() {
        Err(Error::argument(
            vec![message.to_string()],
            ErrorContext::new().with_source("oauth"),
        ))
    } else {
        Ok(value)
    }
}
