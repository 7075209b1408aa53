mod common;

use common::FakeApi;
use shodan_bot::commands::health::HealthReport;
use shodan_bot::error::ShodanError;
use shodan_bot::flow::AuthGate;
use std::time::Duration;

#[tokio::test]
async fn healthy_when_configured_and_reachable() {
    let api = FakeApi::default();
    let report = HealthReport::collect(&api, true, true, Some(Duration::from_millis(42))).await;
    assert_eq!(report.status, "ok");
    assert_eq!(report.latency_ms, Some(42));
    let text = report.render();
    assert!(text.contains("42 ms"));
    assert!(text.contains("`dev`"));
}

#[tokio::test]
async fn degraded_when_upstream_fails() {
    let api = FakeApi::failing(ShodanError::Api("Invalid API key".into()));
    let report = HealthReport::collect(&api, true, true, None).await;
    assert_eq!(report.status, "degraded");
    assert!(report.account.is_none());
    assert!(report.render().contains("N/A"));
}

#[tokio::test]
async fn missing_key_skips_the_probe() {
    let api = FakeApi::default();
    let report = HealthReport::collect(&api, false, true, None).await;
    assert_eq!(report.status, "degraded");
    assert!(api.calls().is_empty());
}

#[tokio::test]
async fn ping_is_refused_for_users_off_the_allow_list() {
    let api = FakeApi::default();
    let gate = AuthGate::new([7]);
    let denied = HealthReport::collect_for(&gate, 42, &api, true, true, None)
        .await
        .unwrap_err();
    assert_eq!(denied.user, 42);
    assert!(denied.notice().contains("`42`"));
    assert!(api.calls().is_empty());
}

#[tokio::test]
async fn ping_reports_for_allowed_users() {
    let api = FakeApi::default();
    let gate = AuthGate::new([7]);
    let report = HealthReport::collect_for(&gate, 7, &api, true, true, None)
        .await
        .unwrap();
    assert_eq!(report.status, "ok");
    assert_eq!(api.calls(), vec!["account_info".to_string()]);
}
