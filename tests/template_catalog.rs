use shodan_bot::templates::{
    Category, TEMPLATES, build_query, get_template, populated_categories, search_templates,
    templates_in,
};
use std::collections::{HashMap, HashSet};

#[test]
fn empty_values_fall_back_to_examples() {
    for t in TEMPLATES {
        let by_hand = t
            .params
            .iter()
            .fold(t.query.to_string(), |q, p| q.replace(&p.placeholder(), p.example));
        assert_eq!(build_query(t, &HashMap::new()), by_hand, "{}", t.id);
        assert_eq!(by_hand, t.example, "stored example drifted for {}", t.id);
        assert!(!by_hand.contains('{'), "unfilled placeholder in {}", t.id);
    }
}

#[test]
fn supplied_values_are_inserted_verbatim() {
    let t = get_template("net_port_country").expect("template");
    let values = HashMap::from([
        ("port".to_string(), "8080 OR 1".to_string()),
        ("country".to_string(), "US".to_string()),
    ]);
    assert_eq!(build_query(t, &values), r#"port:8080 OR 1 country:"US""#);
}

#[test]
fn ids_and_parameter_names_are_unique() {
    let mut ids = HashSet::new();
    for t in TEMPLATES {
        assert!(ids.insert(t.id), "duplicate template id {}", t.id);
        let mut names = HashSet::new();
        for p in t.params {
            assert!(names.insert(p.name), "duplicate param {} in {}", p.name, t.id);
            assert!(t.query.contains(&p.placeholder()), "{} unused in {}", p.name, t.id);
        }
    }
    assert_eq!(TEMPLATES.len(), 36);
}

#[test]
fn ids_fit_in_callback_tokens() {
    for t in TEMPLATES {
        assert!(format!("example:{}", t.id).len() <= 100);
    }
}

#[test]
fn menu_lists_only_populated_categories() {
    let populated = populated_categories();
    assert!(populated.iter().all(|(_, n)| *n > 0));
    assert!(!populated.iter().any(|(c, _)| *c == Category::Custom));
    let listed: usize = populated.iter().map(|(_, n)| n).sum();
    assert_eq!(listed, TEMPLATES.len());
    assert_eq!(templates_in(Category::Network).len(), 7);
}

#[test]
fn keyword_search_is_case_insensitive() {
    let hits = search_templates("MONGODB");
    assert!(hits.iter().any(|t| t.id == "db_mongodb"));
    assert!(search_templates("  ").is_empty());
    assert!(search_templates("no-such-keyword").is_empty());
}
