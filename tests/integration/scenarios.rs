//! End-to-end behaviour of the request pipeline.

use crate::mock_server::MockServerFixture;
use crate::recording::{self, RecordingTransport};
use chrono::{TimeZone, Utc};
use mockito::Matcher;
use snapads_rust::{Campaign, EntityStatus, Error, StatusKind};

#[test]
fn list_organizations_projects_bare_entries() {
    let mut fixture = MockServerFixture::new();
    let mock = fixture.mock_json("GET", "/me/organizations", 200, r#"{"organizations":[{"id":"abc"}]}"#);

    let orgs = fixture.client().organizations().list_mine().unwrap();

    mock.assert();
    assert_eq!(orgs.len(), 1);
    assert_eq!(orgs[0].id.as_deref(), Some("abc"));
}

#[test]
fn unauthorized_maps_to_fixed_message() {
    let mut fixture = MockServerFixture::new();
    let _mock = fixture.mock_json(
        "GET",
        "/me/organizations",
        401,
        r#"{"request_status":"ERROR","display_message":"token expired"}"#,
    );

    let err = fixture.client().organizations().list_mine().unwrap_err();

    assert_eq!(err.to_string(), "Unauthorized - Check your API key");
    assert_eq!(err.status(), Some(401));
    match err {
        Error::Response(resp) => {
            assert_eq!(resp.kind, StatusKind::Unauthorized);
            assert!(resp.body.unwrap().contains("token expired"));
        }
        other => panic!("expected response error, got {other:?}"),
    }
}

fn spring_campaign() -> Campaign {
    Campaign {
        id: Some("c1".into()),
        ad_account_id: Some("acc1".into()),
        name: Some("Spring".into()),
        status: Some(EntityStatus::Active),
        start_time: Some(Utc.with_ymd_and_hms(2024, 3, 1, 0, 0, 0).unwrap()),
        ..Default::default()
    }
}

#[test]
fn update_sends_json_payload() {
    let campaign = spring_campaign();
    let expected = serde_json::json!({ "campaigns": [campaign.clone()] });

    let mut fixture = MockServerFixture::new();
    let mock = fixture
        .server
        .mock("PUT", "/adaccounts/acc1/campaigns")
        .match_header("content-type", "application/json")
        .match_header("authorization", "Bearer test-token")
        .match_body(Matcher::Json(expected))
        .with_status(200)
        .with_body(r#"{"campaigns":[{"sub_request_status":"SUCCESS","campaign":{"id":"c1","name":"Spring"}}]}"#)
        .create();

    let updated = fixture.client().campaigns().update(&campaign).unwrap().unwrap();

    mock.assert();
    assert_eq!(updated.id.as_deref(), Some("c1"));
}

#[test]
fn update_body_is_the_serialized_payload() {
    let campaign = spring_campaign();
    let transport = RecordingTransport::replying(200, "");
    let client = recording::client(&transport, Some("tok"));

    assert!(client.campaigns().update(&campaign).unwrap().is_none());

    let request = transport.last();
    assert_eq!(request.method.as_str(), "PUT");
    assert_eq!(request.header("Content-Type"), Some("application/json"));
    assert_eq!(request.header("Authorization"), Some("Bearer tok"));
    let sent: serde_json::Value = serde_json::from_str(request.json_body().unwrap()).unwrap();
    assert_eq!(sent, serde_json::json!({ "campaigns": [campaign] }));
    assert_eq!(sent["campaigns"][0]["start_time"], "2024-03-01T00:00:00.000Z");
}

#[test]
fn unlisted_status_falls_back_to_generic_message() {
    let transport = RecordingTransport::replying(1337, "teapot overflow");
    let client = recording::client(&transport, Some("tok"));

    let err = client.organizations().list_mine().unwrap_err();

    assert_eq!(err.to_string(), "Error 1337");
    assert_eq!(err.status(), Some(1337));
}

#[test]
fn both_wire_date_formats_decode_to_the_same_instant() {
    let mut fixture = MockServerFixture::new();
    let _mock = fixture.mock_json(
        "GET",
        "/campaigns/c1",
        200,
        r#"{"campaigns":[{"campaign":{
            "id":"c1",
            "created_at":"2016-08-12T22:59:42.405Z",
            "updated_at":"2016-08-12T22:59:42.405"
        }}]}"#,
    );

    let campaign = fixture.client().campaigns().get("c1").unwrap().unwrap();

    assert!(campaign.created_at.is_some());
    assert_eq!(campaign.created_at, campaign.updated_at);
}

#[test]
fn unparseable_date_is_a_decoding_error() {
    let transport = RecordingTransport::replying(
        200,
        r#"{"campaigns":[{"id":"c1","start_time":"12/08/2016"}]}"#,
    );
    let client = recording::client(&transport, Some("tok"));

    let err = client.campaigns().get("c1").unwrap_err();

    assert!(matches!(err, Error::Decoding { .. }), "{err:?}");
}

#[test]
fn empty_success_body_is_no_content() {
    let transport = RecordingTransport::replying(200, "");
    let client = recording::client(&transport, Some("tok"));

    assert!(client.campaigns().list_by_ad_account("acc1").unwrap().is_empty());
    assert!(client.campaigns().get("c1").unwrap().is_none());
}

#[test]
fn transport_failure_is_an_execution_error() {
    let transport = RecordingTransport::failing("connection reset");
    let client = recording::client(&transport, Some("tok"));

    let err = client.organizations().list_mine().unwrap_err();

    assert!(matches!(err, Error::Execution(_)));
    assert!(err.to_string().contains("connection reset"));
    assert_eq!(transport.calls(), 1);
}

#[test]
fn shared_transport_survives_token_swap() {
    let transport = RecordingTransport::replying(200, r#"{"organizations":[]}"#);
    let client = recording::client(&transport, None);
    let authed = client.with_access_token("second");

    authed.organizations().list_mine().unwrap();

    assert_eq!(transport.last().header("authorization"), Some("Bearer second"));
    assert!(client.access_token().is_none());
}

#[test]
fn serialized_objects_decode_back_field_for_field() {
    use snapads_rust::codec::{decode, ResponseWrapper};
    use snapads_rust::transport::ResponseEnvelope;

    let mut campaign = spring_campaign();
    campaign.end_time = Some(Utc.with_ymd_and_hms(2024, 6, 30, 23, 59, 59).unwrap());
    campaign.daily_budget_micro = Some(25_000_000);
    campaign.objective = Some("BRAND_AWARENESS".into());

    let body = serde_json::to_string(&serde_json::json!({
        "request_status": "SUCCESS",
        "campaigns": [{"sub_request_status": "SUCCESS", "campaign": campaign.clone()}]
    }))
    .unwrap();
    let wrapper: ResponseWrapper = decode(&ResponseEnvelope::new(200, body)).unwrap().unwrap();
    let decoded: Vec<Campaign> = wrapper.into_entities("campaigns", "campaign").unwrap();

    assert_eq!(decoded, vec![campaign]);
}
