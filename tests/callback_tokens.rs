use shodan_bot::interactions::ids::{CallbackToken, DnsTool, InfoAction, MenuTarget, page_token};
use shodan_bot::templates::Category;

#[test]
fn page_query_keeps_its_colons() {
    assert_eq!(
        CallbackToken::parse("page:2:port:22"),
        Some(CallbackToken::Page {
            page: 2,
            query: "port:22".into()
        })
    );
    assert_eq!(
        CallbackToken::parse(r#"page:3:product:"nginx" country:"ID""#),
        Some(CallbackToken::Page {
            page: 3,
            query: r#"product:"nginx" country:"ID""#.into()
        })
    );
}

#[test]
fn malformed_tokens_are_rejected() {
    for raw in [
        "", "menu", "menu:nowhere", "cmd:reboot", "cat:x", "tmpl:", "page:2", "page:0:q",
        "page:-1:q", "dns:mx", "default::v", "default:param", "what:ever",
    ] {
        assert_eq!(CallbackToken::parse(raw), None, "{raw:?}");
    }
}

#[test]
fn namespaces_decode() {
    assert_eq!(CallbackToken::parse("noop"), Some(CallbackToken::Noop));
    assert_eq!(CallbackToken::parse("menu:main"), Some(CallbackToken::Menu(MenuTarget::Main)));
    assert_eq!(CallbackToken::parse("cmd:info"), Some(CallbackToken::Cmd(InfoAction::Account)));
    assert_eq!(CallbackToken::parse("cat:iot"), Some(CallbackToken::Category(Category::Iot)));
    assert_eq!(CallbackToken::parse("dns:reverse"), Some(CallbackToken::Dns(DnsTool::Reverse)));
    assert_eq!(
        CallbackToken::parse("default:port:22"),
        Some(CallbackToken::Default {
            param: "port".into(),
            value: "22".into()
        })
    );
}

#[test]
fn encoded_tokens_decode_to_themselves() {
    let tokens = [
        CallbackToken::Menu(MenuTarget::Vuln),
        CallbackToken::Cmd(InfoAction::Filters),
        CallbackToken::Category(Category::Database),
        CallbackToken::Use("db_redis".into()),
        CallbackToken::Page {
            page: 4,
            query: "ssl.cert.expired:true".into(),
        },
        CallbackToken::DoScan("10.0.0.0/24".into()),
        CallbackToken::Noop,
    ];
    for t in tokens {
        let raw = t.encode();
        assert_eq!(CallbackToken::parse(&raw), Some(t.clone()), "{raw}");
        // Re-encoding a decoded token is stable.
        assert_eq!(CallbackToken::parse(&raw).map(|d| d.encode()), Some(raw));
    }
}

#[test]
fn oversized_arguments_are_left_out() {
    let query = "a".repeat(200);
    let raw = page_token(2, &query);
    assert_eq!(raw, "page:2:");
    assert_eq!(
        CallbackToken::parse(&raw),
        Some(CallbackToken::Page {
            page: 2,
            query: String::new()
        })
    );
    let scan = CallbackToken::DoScan("1".repeat(120)).encode();
    assert_eq!(scan, "doscan:");
    assert!(page_token(9, "port:22").len() <= 100);
}
