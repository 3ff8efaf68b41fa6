//! Resource operations over the real HTTP transport.

use crate::mock_server::{MockServerFixture, TOKEN};
use mockito::Matcher;
use snapads_rust::{
    AdSquad, AdSquadType, BillingEvent, EntityStatus, Error, GeoTarget, Placement, SegmentUsers,
    StatusKind, Targeting, UploadFile, UserSchema,
};

#[test]
fn failed_sub_requests_are_skipped() {
    let mut fixture = MockServerFixture::new();
    let _mock = fixture.mock_json(
        "GET",
        "/adaccounts/acc1/campaigns",
        200,
        r#"{
            "request_status": "PARTIAL_SUCCESS",
            "request_id": "r-1",
            "campaigns": [
                {"sub_request_status": "SUCCESS", "campaign": {"id": "c1", "status": "ACTIVE"}},
                {"sub_request_status": "ERROR", "sub_request_error_reason": "not visible"},
                {"sub_request_status": "SUCCESS", "campaign": {"id": "c2", "status": "PAUSED", "shiny_new_field": 1}}
            ]
        }"#,
    );

    let campaigns = fixture
        .client()
        .campaigns()
        .list_by_ad_account("acc1")
        .unwrap();

    let ids: Vec<_> = campaigns.iter().filter_map(|c| c.id.as_deref()).collect();
    assert_eq!(ids, vec!["c1", "c2"]);
    assert_eq!(campaigns[1].status, Some(EntityStatus::Paused));
}

#[test]
fn create_ad_squad_posts_under_campaign() {
    let squad = AdSquad {
        campaign_id: Some("c1".into()),
        name: Some("US squad".into()),
        squad_type: Some(AdSquadType::SnapAds),
        placement: Some(Placement::SnapAds),
        status: Some(EntityStatus::Active),
        billing_event: Some(BillingEvent::Impression),
        bid_micro: Some(1_000_000),
        targeting: Some(Targeting {
            geos: vec![GeoTarget {
                country_code: "us".into(),
                ..Default::default()
            }],
            ..Default::default()
        }),
        ..Default::default()
    };

    let mut fixture = MockServerFixture::new();
    let mock = fixture
        .server
        .mock("POST", "/campaigns/c1/adsquads")
        .match_body(Matcher::Json(serde_json::json!({ "adsquads": [squad.clone()] })))
        .with_status(200)
        .with_body(r#"{"adsquads":[{"sub_request_status":"SUCCESS","adsquad":{"id":"sq1","campaign_id":"c1","type":"SNAP_ADS"}}]}"#)
        .create();

    let created = fixture.client().ad_squads().create(&squad).unwrap().unwrap();

    mock.assert();
    assert_eq!(created.id.as_deref(), Some("sq1"));
    assert_eq!(created.squad_type, Some(AdSquadType::SnapAds));
}

#[test]
fn delete_returns_unit_on_success() {
    let mut fixture = MockServerFixture::new();
    let mock = fixture.mock_json("DELETE", "/ads/ad1", 200, r#"{"request_status":"SUCCESS"}"#);

    fixture.client().ads().delete("ad1").unwrap();

    mock.assert();
}

#[test]
fn service_unavailable_keeps_body_for_diagnostics() {
    let mut fixture = MockServerFixture::new();
    let _mock = fixture.mock_json("GET", "/adsquads/sq1", 503, "upstream down");

    let err = fixture.client().ad_squads().get("sq1").unwrap_err();

    assert_eq!(err.to_string(), "Service Unavailable");
    match err {
        Error::Response(resp) => {
            assert_eq!(resp.kind, StatusKind::ServiceUnavailable);
            assert_eq!(resp.body.as_deref(), Some("upstream down"));
        }
        other => panic!("expected response error, got {other:?}"),
    }
}

#[test]
fn pixel_is_looked_up_by_ad_account() {
    let mut fixture = MockServerFixture::new();
    let _mock = fixture.mock_json(
        "GET",
        "/adaccounts/acc1/pixels",
        200,
        r#"{"pixels":[{"sub_request_status":"SUCCESS","pixel":{"id":"px1","ad_account_id":"acc1","status":"ACTIVE"}}]}"#,
    );

    let pixel = fixture
        .client()
        .pixels()
        .get_by_ad_account("acc1")
        .unwrap()
        .unwrap();

    assert_eq!(pixel.id.as_deref(), Some("px1"));
    assert_eq!(pixel.status, Some(EntityStatus::Active));
}

#[test]
fn media_upload_is_multipart() {
    let mut fixture = MockServerFixture::new();
    let mock = fixture
        .server
        .mock("POST", "/media/m1/upload")
        .match_header("authorization", format!("Bearer {}", TOKEN).as_str())
        .match_header(
            "content-type",
            Matcher::Regex("^multipart/form-data; boundary=.+".to_string()),
        )
        .match_body(Matcher::Regex(r#"filename="clip.mp4""#.to_string()))
        .with_status(200)
        .with_body(r#"{"request_status":"SUCCESS","result":{"file_name":"clip.mp4","download_link":"https://cdn.example.com/clip.mp4"}}"#)
        .create();

    let result = fixture
        .client()
        .media()
        .upload("m1", UploadFile::new("clip.mp4", b"not really a video".to_vec()))
        .unwrap()
        .unwrap();

    mock.assert();
    assert_eq!(result.file_name.as_deref(), Some("clip.mp4"));
    assert!(result.download_link.unwrap().ends_with("clip.mp4"));
}

#[test]
fn segment_users_are_removed_with_a_delete_body() {
    let users = SegmentUsers::new(UserSchema::EmailSha256, vec!["9f86d081".to_string()]);

    let mut fixture = MockServerFixture::new();
    let mock = fixture
        .server
        .mock("DELETE", "/segments/s1/users")
        .match_header("content-type", "application/json")
        .match_body(Matcher::Json(serde_json::json!({
            "users": [{"schema": ["EMAIL_SHA256"], "data": [["9f86d081"]]}]
        })))
        .with_status(200)
        .with_body(r#"{"users":[{"sub_request_status":"SUCCESS","user":{"number_uploaded_users":1}}]}"#)
        .create();

    let result = fixture
        .client()
        .segments()
        .remove_users("s1", &users)
        .unwrap()
        .unwrap();

    mock.assert();
    assert_eq!(result.number_uploaded_users, Some(1));
}

#[test]
fn funding_sources_keep_unknown_types_as_text() {
    let mut fixture = MockServerFixture::new();
    let _mock = fixture.mock_json(
        "GET",
        "/organizations/org1/fundingsources",
        200,
        r#"{"fundingsources":[{"fundingsource":{"id":"fs1","type":"PAYPAL_V2","status":"ACTIVE","last_4":"4242"}}]}"#,
    );

    let sources = fixture
        .client()
        .funding_sources()
        .list_by_organization("org1")
        .unwrap();

    assert_eq!(sources[0].source_type.as_deref(), Some("PAYPAL_V2"));
    assert_eq!(sources[0].last_4.as_deref(), Some("4242"));
}
