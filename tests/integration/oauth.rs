use crate::mock_server::MockServerFixture;
use mockito::Matcher;
use snapads_rust::{Error, OAuthConfig, SdkConfig};

fn config_for(fixture: &MockServerFixture) -> SdkConfig {
    SdkConfig {
        oauth: Some(OAuthConfig {
            client_id: "app".into(),
            client_secret: "secret".into(),
            redirect_uri: "https://example.com/cb".into(),
            authorize_url: format!("{}/login/oauth2/authorize", fixture.base_url),
            token_url: format!("{}/login/oauth2/access_token", fixture.base_url),
            scope: "snapchat-marketing-api".into(),
        }),
        ..SdkConfig::default()
    }
}

#[test]
fn exchange_code_posts_form_and_decodes_tokens() {
    let mut fixture = MockServerFixture::new();
    let mock = fixture
        .server
        .mock("POST", "/login/oauth2/access_token")
        .match_header("content-type", "application/x-www-form-urlencoded")
        .match_body(Matcher::AllOf(vec![
            Matcher::UrlEncoded("grant_type".into(), "authorization_code".into()),
            Matcher::UrlEncoded("code".into(), "the-code".into()),
            Matcher::UrlEncoded("client_secret".into(), "secret".into()),
        ]))
        .with_status(200)
        .with_body(r#"{"access_token":"at","refresh_token":"rt","token_type":"Bearer","expires_in":1800}"#)
        .create();

    let client = fixture.client_with(config_for(&fixture));
    let tokens = client.oauth().unwrap().exchange_code("the-code").unwrap();

    mock.assert();
    assert_eq!(tokens.access_token, "at");
    assert_eq!(tokens.refresh_token.as_deref(), Some("rt"));
    assert_eq!(tokens.expires_in, Some(1800));
}

#[test]
fn rejected_refresh_is_classified() {
    let mut fixture = MockServerFixture::new();
    let _mock = fixture
        .server
        .mock("POST", "/login/oauth2/access_token")
        .match_body(Matcher::UrlEncoded("grant_type".into(), "refresh_token".into()))
        .with_status(400)
        .with_body(r#"{"error":"invalid_grant"}"#)
        .create();

    let client = fixture.client_with(config_for(&fixture));
    let err = client.oauth().unwrap().refresh("stale").unwrap_err();

    assert!(matches!(err, Error::Response(_)));
    assert_eq!(err.to_string(), "Bad Request");
}
