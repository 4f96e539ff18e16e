use fedifollow_client::error::ClientError;
use fedifollow_client::types::FollowReport;
use reqwest::StatusCode;

#[test]
fn test_remote_error_carries_status_and_endpoint() {
    let err = ClientError::remote("/api/v1/lists", StatusCode::NOT_FOUND);
    match &err {
        ClientError::RemoteRequestFailed { endpoint, status } => {
            assert_eq!(endpoint, "/api/v1/lists");
            assert_eq!(*status, StatusCode::NOT_FOUND);
        }
        _ => panic!("Expected RemoteRequestFailed"),
    }
}

#[test]
fn test_remote_error_display_names_both() {
    let err = ClientError::remote("/api/v1/timelines/tag/rust", StatusCode::NOT_FOUND);
    let msg = err.to_string();
    assert!(msg.contains("/api/v1/timelines/tag/rust"));
    assert!(msg.contains("404"));
}

#[test]
fn test_remote_error_unauthorized() {
    let err = ClientError::remote("/api/v1/accounts/42/follow", StatusCode::UNAUTHORIZED);
    assert!(err.to_string().contains("401"));
}

#[test]
fn test_follow_report_clean() {
    let report = FollowReport {
        followed: vec!["a1".to_string(), "a2".to_string()],
        failed: vec![],
    };
    assert!(report.is_clean());
}

#[test]
fn test_follow_report_keeps_both_sides() {
    let report = FollowReport {
        followed: vec!["a1".to_string()],
        failed: vec![("a2".to_string(), "status 403".to_string())],
    };
    assert!(!report.is_clean());
    assert_eq!(report.followed.len(), 1);
    assert_eq!(report.failed.len(), 1);
    assert_eq!(report.failed[0].0, "a2");
}

#[test]
fn test_follow_report_default_is_clean() {
    let report = FollowReport::default();
    assert!(report.is_clean());
    assert!(report.followed.is_empty());
}
