//! End-to-end conversations driven through the engine with fake collaborators.
mod common;

use common::*;
use shodan_bot::commands::Command;
use shodan_bot::error::ShodanError;
use shodan_bot::flow::{AuthGate, Tone};
use shodan_bot::session::{ConversationState, InputKind, SessionStore};
use shodan_bot::ui::keyboard;
use std::sync::Arc;

fn awaiting(template: &'static str, index: usize) -> ConversationState {
    ConversationState::AwaitingTemplateParam { template, index }
}

#[tokio::test]
async fn host_with_argument_runs_immediately() {
    let api = Arc::new(FakeApi::default());
    let engine = engine(api.clone(), AuthGate::allow_all());
    let out = RecordingOutbox::default();

    let state = engine
        .on_command(&inbound(&out, false), Command::Host, &args(&["8.8.8.8"]))
        .await;

    assert_eq!(state, ConversationState::Idle);
    assert_eq!(api.calls(), vec!["host|8.8.8.8"]);
    assert!(out.bodies().contains("8.8.8.8"));
    assert!(out.bodies().contains("Google LLC"));
}

#[tokio::test]
async fn bare_search_waits_for_query_then_runs_it() {
    let api = Arc::new(FakeApi::with_total(3));
    let engine = engine(api.clone(), AuthGate::allow_all());
    let out = RecordingOutbox::default();
    let ib = inbound(&out, false);

    let state = engine.on_command(&ib, Command::Search, &[]).await;
    assert_eq!(state, ConversationState::AwaitingInput(InputKind::RawQuery));
    assert!(api.calls().is_empty());

    let state = engine.on_text(&ib, "port:22").await;
    assert_eq!(state, ConversationState::Idle);
    assert_eq!(api.calls(), vec!["search|port:22|1|"]);
}

#[tokio::test]
async fn template_collects_each_parameter_then_searches() {
    let api = Arc::new(FakeApi::with_total(1));
    let engine = engine(api.clone(), AuthGate::allow_all());
    let out = RecordingOutbox::default();
    let ib = inbound(&out, false);

    assert_eq!(engine.on_callback(&ib, "use:net_provider").await, awaiting("net_provider", 0));
    assert!(out.last().keyboard.unwrap().contains("default:org:Telkom Indonesia"));
    assert_eq!(engine.on_text(&ib, "Telkom Indonesia").await, awaiting("net_provider", 1));
    assert_eq!(engine.on_text(&ib, "ID").await, ConversationState::Idle);

    assert_eq!(
        api.calls(),
        vec![r#"search|org:"Telkom Indonesia" country:"ID"|1|"#]
    );
    assert_eq!(engine.state_of(key()).await, ConversationState::Idle);
}

#[tokio::test]
async fn page_token_keeps_colons_and_offers_both_directions() {
    let api = Arc::new(FakeApi::with_total(12));
    let engine = engine(api.clone(), AuthGate::allow_all());
    let out = RecordingOutbox::default();

    let state = engine
        .on_callback(&inbound(&out, false), "page:2:port:22")
        .await;

    assert_eq!(state, ConversationState::Idle);
    assert_eq!(api.calls(), vec!["search|port:22|2|"]);
    let kb = out.last().keyboard.expect("pagination keyboard");
    assert!(kb.contains("page:1:port:22"));
    assert!(kb.contains("page:3:port:22"));
    assert!(kb.rows[0].iter().any(|b| b.label == "📄 2/3" && b.disabled));
    assert_eq!(out.acks(), vec![None]);
}

#[tokio::test]
async fn defaults_and_text_mix_until_all_parameters_are_filled() {
    let api = Arc::new(FakeApi::with_total(1));
    let engine = engine(api.clone(), AuthGate::allow_all());
    let out = RecordingOutbox::default();
    let ib = inbound(&out, false);

    engine.on_callback(&ib, "use:net_service_city").await;
    assert_eq!(engine.on_text(&ib, "apache").await, awaiting("net_service_city", 1));
    assert_eq!(
        engine.on_callback(&ib, "default:city:Jakarta").await,
        awaiting("net_service_city", 2)
    );
    assert_eq!(engine.on_text(&ib, "US").await, ConversationState::Idle);
    assert_eq!(
        api.calls(),
        vec![r#"search|product:"apache" city:"Jakarta" country:"US"|1|"#]
    );
}

#[tokio::test]
async fn stale_default_button_repeats_current_prompt() {
    let api = Arc::new(FakeApi::default());
    let engine = engine(api.clone(), AuthGate::allow_all());
    let out = RecordingOutbox::default();
    let ib = inbound(&out, false);

    engine.on_callback(&ib, "use:net_provider").await;
    engine.on_text(&ib, "Telkom Indonesia").await;
    out.clear();

    let state = engine.on_callback(&ib, "default:org:Telkom Indonesia").await;
    assert_eq!(state, awaiting("net_provider", 1));
    assert!(api.calls().is_empty());
    assert!(out.last().keyboard.unwrap().contains("default:country:ID"));
}

#[tokio::test]
async fn empty_default_value_uses_the_example() {
    let api = Arc::new(FakeApi::with_total(1));
    let engine = engine(api.clone(), AuthGate::allow_all());
    let out = RecordingOutbox::default();
    let ib = inbound(&out, false);

    engine.on_callback(&ib, "use:net_asn").await;
    assert_eq!(engine.on_callback(&ib, "default:asn:").await, ConversationState::Idle);
    assert_eq!(api.calls(), vec!["search|asn:AS17974|1|"]);
}

#[tokio::test]
async fn main_menu_button_cancels_a_template_flow() {
    let api = Arc::new(FakeApi::default());
    let engine = engine(api.clone(), AuthGate::allow_all());
    let out = RecordingOutbox::default();
    let ib = inbound(&out, false);

    engine.on_callback(&ib, "use:net_provider").await;
    assert_eq!(engine.on_callback(&ib, "menu:main").await, ConversationState::Idle);
    assert_eq!(out.last().keyboard, Some(keyboard::main_menu()));
    // Later text is not taken as a parameter.
    engine.on_text(&ib, "ID").await;
    assert!(api.calls().is_empty());
}

#[tokio::test]
async fn unknown_token_resets_silently() {
    let api = Arc::new(FakeApi::default());
    let engine = engine(api.clone(), AuthGate::allow_all());
    let out = RecordingOutbox::default();
    let ib = inbound(&out, false);

    engine.on_command(&ib, Command::Host, &[]).await;
    out.clear();
    for raw in ["bogus:1", "page:x:port:22", "page:0:q", "cat:nowhere", "menu"] {
        assert_eq!(engine.on_callback(&ib, raw).await, ConversationState::Idle, "{raw}");
    }
    assert!(out.replies().is_empty());
    assert!(api.calls().is_empty());
}

#[tokio::test]
async fn unknown_template_is_reported() {
    let engine = engine(Arc::new(FakeApi::default()), AuthGate::allow_all());
    let out = RecordingOutbox::default();

    let state = engine.on_callback(&inbound(&out, false), "use:missing").await;
    assert_eq!(state, ConversationState::Idle);
    assert!(out.last().body.contains("Template not found"));
}

#[tokio::test]
async fn informational_buttons_keep_the_current_wait() {
    let api = Arc::new(FakeApi::default());
    let engine = engine(api.clone(), AuthGate::allow_all());
    let out = RecordingOutbox::default();
    let ib = inbound(&out, false);

    engine.on_command(&ib, Command::Count, &[]).await;
    let state = engine.on_callback(&ib, "cmd:filters").await;
    assert_eq!(state, ConversationState::AwaitingInput(InputKind::CountQuery));
    assert_eq!(engine.on_callback(&ib, "noop").await, state);
}

#[tokio::test]
async fn api_rejection_is_shown_and_flow_ends() {
    let api = Arc::new(FakeApi::failing(ShodanError::Api("Invalid IP".into())));
    let engine = engine(api.clone(), AuthGate::allow_all());
    let out = RecordingOutbox::default();

    let state = engine
        .on_command(&inbound(&out, false), Command::Host, &args(&["1.2.3.4"]))
        .await;

    assert_eq!(state, ConversationState::Idle);
    let last = out.last();
    assert_eq!(last.tone, Tone::Error);
    assert!(last.body.contains("Invalid IP"));
}

#[tokio::test]
async fn transport_failure_gets_generic_notice_and_reset() {
    let api = Arc::new(FakeApi::failing(ShodanError::Transport("timed out".into())));
    let engine = engine(api.clone(), AuthGate::allow_all());
    let out = RecordingOutbox::default();
    let ib = inbound(&out, false);

    engine.on_command(&ib, Command::Search, &[]).await;
    let state = engine.on_text(&ib, "port:22").await;

    assert_eq!(state, ConversationState::Idle);
    let last = out.last();
    assert_eq!(last.tone, Tone::Error);
    assert!(last.body.contains("Something went wrong"));
    assert!(last.body.contains("!start"));
    assert!(last.body.contains("timed out"));
}

#[tokio::test]
async fn rejected_rich_reply_falls_back_to_plain_text() {
    let engine = engine(Arc::new(FakeApi::default()), AuthGate::allow_all());
    let out = RecordingOutbox::rejecting_rich();

    engine.on_command(&inbound(&out, false), Command::Start, &[]).await;

    let replies = out.replies();
    assert_eq!(replies.len(), 1);
    assert!(replies[0].plain);
    assert!(replies[0].body.chars().count() <= 1990);
    assert_eq!(replies[0].keyboard, Some(keyboard::main_menu()));
}

#[tokio::test]
async fn idle_text_searches_only_in_direct_messages() {
    let api = Arc::new(FakeApi::with_total(0));
    let engine = engine(api.clone(), AuthGate::allow_all());
    let out = RecordingOutbox::default();

    engine.on_text(&inbound(&out, false), "nginx").await;
    assert!(api.calls().is_empty());
    assert!(out.replies().is_empty());

    engine.on_text(&inbound(&out, true), "nginx").await;
    assert_eq!(api.calls(), vec!["search|nginx|1|"]);
    assert_eq!(out.last().keyboard, Some(keyboard::back_to_main()));
}

#[tokio::test]
async fn scan_asks_for_confirmation_first() {
    let api = Arc::new(FakeApi::default());
    let engine = engine(api.clone(), AuthGate::allow_all());
    let out = RecordingOutbox::default();
    let ib = inbound(&out, false);

    engine.on_command(&ib, Command::Scan, &args(&["1.2.3.4"])).await;
    assert!(api.calls().is_empty());
    let confirm = out.last();
    assert_eq!(confirm.tone, Tone::Warning);
    assert!(confirm.keyboard.unwrap().contains("doscan:1.2.3.4"));

    assert_eq!(engine.on_callback(&ib, "doscan:1.2.3.4").await, ConversationState::Idle);
    assert_eq!(api.calls(), vec!["scan|1.2.3.4"]);
    assert_eq!(out.last().tone, Tone::Success);
}

#[tokio::test]
async fn scanstatus_without_id_shows_usage() {
    let api = Arc::new(FakeApi::default());
    let engine = engine(api.clone(), AuthGate::allow_all());
    let out = RecordingOutbox::default();

    let state = engine
        .on_command(&inbound(&out, false), Command::ScanStatus, &[])
        .await;
    assert_eq!(state, ConversationState::Idle);
    assert!(api.calls().is_empty());
    assert!(out.last().body.contains("!scanstatus"));
}

#[tokio::test]
async fn honeypot_failure_is_reported_not_raised() {
    let api = Arc::new(FakeApi::failing(ShodanError::Transport("down".into())));
    let engine = engine(api.clone(), AuthGate::allow_all());
    let out = RecordingOutbox::default();

    engine
        .on_command(&inbound(&out, false), Command::Honeypot, &args(&["5.6.7.8"]))
        .await;
    assert!(out.last().body.contains("Could not check"));
}

#[tokio::test]
async fn a_new_command_abandons_the_previous_flow() {
    let api = Arc::new(FakeApi::default());
    let engine = engine(api.clone(), AuthGate::allow_all());
    let out = RecordingOutbox::default();
    let ib = inbound(&out, false);

    engine.on_callback(&ib, "use:net_provider").await;
    let state = engine.on_command(&ib, Command::Dns, &[]).await;
    assert_eq!(state, ConversationState::AwaitingInput(InputKind::DnsResolve));
    engine.on_text(&ib, "example.com").await;
    assert_eq!(api.calls(), vec!["dns_resolve|example.com"]);
}

#[tokio::test]
async fn finished_lookups_leave_no_session_behind() {
    let api = Arc::new(FakeApi::with_total(3));
    let (engine, store) = engine_with_store(api.clone(), AuthGate::allow_all());
    let out = RecordingOutbox::default();
    let ib = inbound(&out, true);

    engine.on_command(&ib, Command::Host, &args(&["8.8.8.8"])).await;
    assert_eq!(store.len().await, 0);

    engine.on_command(&ib, Command::Host, &[]).await;
    assert_eq!(store.len().await, 1);
    engine.on_command(&ib, Command::Start, &[]).await;
    assert_eq!(store.len().await, 0);

    // The last query backs later page buttons, so it is kept.
    engine.on_command(&ib, Command::Search, &args(&["port:22"])).await;
    assert_eq!(store.len().await, 1);
}

#[tokio::test]
async fn templates_keyword_lists_matching_templates() {
    let api = Arc::new(FakeApi::default());
    let engine = engine(api.clone(), AuthGate::allow_all());
    let out = RecordingOutbox::default();
    let ib = inbound(&out, false);

    engine.on_command(&ib, Command::Templates, &args(&["MongoDB"])).await;
    let reply = out.last();
    assert!(reply.body.contains("`MongoDB`"));
    let kb = reply.keyboard.expect("template list");
    assert!(kb.contains("tmpl:db_mongodb"));
    assert!(kb.contains("menu:templates"));
    assert!(!kb.contains("tmpl:db_redis"));

    engine.on_command(&ib, Command::Templates, &args(&["zzzz"])).await;
    let reply = out.last();
    assert!(reply.body.contains("No templates match"));
    let kb = reply.keyboard.expect("categories");
    assert!(kb.tokens().any(|t| t.starts_with("cat:")));
    assert!(api.calls().is_empty());
}
