use shodan_bot::constants::{MAX_PAGES, PAGE_SIZE};
use shodan_bot::flow::pagination::{paginate, total_pages};
use shodan_bot::ui::keyboard;

#[test]
fn total_pages_is_at_least_one() {
    assert_eq!(total_pages(0, 5), 1);
    assert_eq!(total_pages(5, 5), 1);
    assert_eq!(total_pages(6, 5), 2);
    assert_eq!(total_pages(12, 5), 3);
    assert_eq!(total_pages(7, 0), 7);
}

#[test]
fn controls_follow_position_and_cap() {
    for total in [0u64, 1, 4, 5, 6, 12, 49, 50, 51, 1_000_000] {
        let pages = total_pages(total, PAGE_SIZE);
        for current in 1..=12u32 {
            let p = paginate(total, PAGE_SIZE, current);
            assert_eq!(p.prev.is_some(), current > 1, "total={total} current={current}");
            let expect_next = u64::from(current) < pages && current < MAX_PAGES;
            assert_eq!(p.next.is_some(), expect_next, "total={total} current={current}");
            if let Some(next) = p.next {
                assert!(next <= MAX_PAGES);
            }
        }
    }
}

#[test]
fn middle_page_has_both_buttons() {
    let kb = keyboard::pagination("port:22", 2, 12, PAGE_SIZE);
    let labels: Vec<&str> = kb.rows[0].iter().map(|b| b.label.as_str()).collect();
    assert_eq!(labels, vec!["⬅️ Prev", "📄 2/3", "➡️ Next"]);
    assert!(kb.contains("menu:main"));
}

#[test]
fn single_page_has_no_navigation() {
    let kb = keyboard::pagination("x", 1, 3, PAGE_SIZE);
    assert_eq!(kb.rows[0].len(), 1);
    assert!(kb.rows[0][0].disabled);
}
