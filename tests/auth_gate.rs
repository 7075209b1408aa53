mod common;

use common::*;
use shodan_bot::commands::Command;
use shodan_bot::flow::AuthGate;
use shodan_bot::session::ConversationState;
use std::sync::Arc;

#[tokio::test]
async fn outsider_gets_notice_with_own_id_and_nothing_else() {
    let api = Arc::new(FakeApi::default());
    let engine = engine(api.clone(), AuthGate::new([7]));
    let out = RecordingOutbox::default();

    let state = engine
        .on_command(&inbound(&out, false), Command::Host, &args(&["8.8.8.8"]))
        .await;

    assert_eq!(state, ConversationState::Idle);
    assert!(api.calls().is_empty());
    assert!(out.replies().is_empty());
    let acks = out.acks();
    assert_eq!(acks.len(), 1);
    let notice = acks[0].clone().expect("denial notice");
    assert!(notice.contains("Access denied"));
    assert!(notice.contains(&USER.to_string()));
}

#[tokio::test]
async fn denied_user_never_gets_a_session() {
    let api = Arc::new(FakeApi::default());
    let engine = engine(api.clone(), AuthGate::new([7]));
    let out = RecordingOutbox::default();

    engine.on_callback(&inbound(&out, true), "use:net_provider").await;
    engine.on_text(&inbound(&out, true), "ID").await;
    assert_eq!(engine.state_of(key()).await, ConversationState::Idle);
    assert!(api.calls().is_empty());
}

#[tokio::test]
async fn guild_chatter_from_outsiders_is_ignored_quietly() {
    let engine = engine(Arc::new(FakeApi::default()), AuthGate::new([7]));
    let out = RecordingOutbox::default();

    engine.on_text(&inbound(&out, false), "hello").await;
    assert!(out.acks().is_empty());
    assert!(out.replies().is_empty());
}

#[tokio::test]
async fn empty_list_lets_everyone_in() {
    let api = Arc::new(FakeApi::default());
    let engine = engine(api.clone(), AuthGate::new(Vec::new()));
    let out = RecordingOutbox::default();

    engine
        .on_command(&inbound(&out, false), Command::Host, &args(&["8.8.8.8"]))
        .await;
    assert_eq!(api.calls(), vec!["host|8.8.8.8"]);
    assert_eq!(out.acks(), vec![None]);
}

#[test]
fn listed_user_passes() {
    let gate = AuthGate::new([1, 2]);
    assert!(gate.check(2).is_ok());
    assert_eq!(gate.check(3).unwrap_err().user, 3);
    assert!(AuthGate::allow_all().is_open());
}
