//! Pre-flight failures never reach the transport.

use crate::recording::{self, RecordingTransport};
use snapads_rust::{
    AdSquad, AudienceSegment, Campaign, EntityStatus, Error, Pixel, SegmentUsers, UploadFile,
};

fn idle() -> std::sync::Arc<RecordingTransport> {
    RecordingTransport::replying(200, "{}")
}

fn violations(err: Error) -> Vec<String> {
    match err {
        Error::Argument { violations, .. } => violations,
        other => panic!("expected argument error, got {other:?}"),
    }
}

#[test]
fn missing_token_is_rejected_without_network() {
    let transport = idle();
    let client = recording::client(&transport, None);

    let err = client.organizations().list_mine().unwrap_err();

    assert!(matches!(err, Error::Auth { .. }));
    assert_eq!(
        err.to_string(),
        "Authentication error: The OAuth access token is required"
    );
    assert_eq!(transport.calls(), 0);
}

#[test]
fn blank_token_counts_as_missing() {
    let transport = idle();
    let client = recording::client(&transport, Some("   "));

    assert!(matches!(
        client.campaigns().delete("c1"),
        Err(Error::Auth { .. })
    ));
    assert!(matches!(
        client.media().upload("m1", UploadFile::new("a.png", vec![1])),
        Err(Error::Auth { .. })
    ));
    assert_eq!(transport.calls(), 0);
}

#[test]
fn token_is_checked_before_payload() {
    let transport = idle();
    let client = recording::client(&transport, None);

    let err = client.campaigns().create(&Campaign::default()).unwrap_err();

    assert!(matches!(err, Error::Auth { .. }));
    assert_eq!(transport.calls(), 0);
}

#[test]
fn every_missing_field_is_reported_once() {
    let transport = idle();
    let client = recording::client(&transport, Some("tok"));
    let campaign = Campaign {
        ad_account_id: Some("acc1".into()),
        ..Default::default()
    };

    let err = client.campaigns().create(&campaign).unwrap_err();

    assert!(err
        .to_string()
        .starts_with("Invalid argument: The campaign name is required, The campaign status is required, The campaign start time is required"));
    assert_eq!(violations(err).len(), 3);
    assert_eq!(transport.calls(), 0);
}

#[test]
fn update_requires_an_id() {
    let transport = idle();
    let client = recording::client(&transport, Some("tok"));
    let squad = AdSquad {
        campaign_id: Some("c1".into()),
        name: Some("squad".into()),
        status: Some(EntityStatus::Paused),
        ..Default::default()
    };

    let found = violations(client.ad_squads().update(&squad).unwrap_err());

    assert_eq!(found[0], "The ad squad ID is required");
    assert!(found.contains(&"The ad squad targeting is required".to_string()));
    assert_eq!(transport.calls(), 0);
}

#[test]
fn pixel_update_needs_id_and_account() {
    let transport = idle();
    let client = recording::client(&transport, Some("tok"));

    let found = violations(client.pixels().update(&Pixel::default()).unwrap_err());

    assert_eq!(
        found,
        vec!["The pixel ID is required", "The ad account ID is required"]
    );
    assert_eq!(transport.calls(), 0);
}

#[test]
fn blank_path_parameter_is_an_argument_error() {
    let transport = idle();
    let client = recording::client(&transport, Some("tok"));

    let found = violations(client.campaigns().get(" ").unwrap_err());
    assert_eq!(found, vec!["The campaign ID is required"]);

    let found = violations(client.ad_accounts().list_by_organization("").unwrap_err());
    assert_eq!(found, vec!["The organization ID is required"]);

    assert_eq!(transport.calls(), 0);
}

#[test]
fn segment_user_batches_need_schema_and_data() {
    let transport = idle();
    let client = recording::client(&transport, Some("tok"));

    let found = violations(
        client
            .segments()
            .add_users("s1", &SegmentUsers::default())
            .unwrap_err(),
    );
    assert_eq!(
        found,
        vec![
            "The user schema is required",
            "At least one user identifier is required"
        ]
    );

    let found = violations(
        client
            .segments()
            .create(&AudienceSegment {
                ad_account_id: Some("acc1".into()),
                name: Some("buyers".into()),
                ..Default::default()
            })
            .unwrap_err(),
    );
    assert_eq!(found.len(), 2);
    assert_eq!(transport.calls(), 0);
}
