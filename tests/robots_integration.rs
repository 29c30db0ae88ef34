use argus::Evaluator;

#[test]
fn prefix_match_requires_only_a_version_suffix() {
    let doc = b"user-agent: testbot\ndisallow: /private\n";
    let e = Evaluator::new(doc, "testbot/1.0");
    assert!(e.user_agent_found());
    assert!(!e.is_allowed("/private/x"));
}

#[test]
fn user_agent_comparison_is_case_insensitive() {
    let doc = b"User-Agent: TestBot\nDisallow: /private\n";
    let e = Evaluator::new(doc, "testbot");
    assert!(e.user_agent_found());
    assert!(!e.is_allowed("/private"));
}

#[test]
fn star_group_never_matches_by_prefix() {
    // A crawler whose token literally is "*" still shouldn't treat the
    // default group as a specific match.
    let doc = b"user-agent: *\ndisallow: /\n";
    let e = Evaluator::new(doc, "*");
    assert!(!e.user_agent_found());
    assert!(e.default_user_agent_found());
}

#[test]
fn no_crawl_delay_is_unset_even_with_rules() {
    let doc = b"user-agent: testbot\ndisallow: /a\n";
    let e = Evaluator::new(doc, "testbot");
    assert_eq!(e.crawl_delay_ms(), None);
}

#[test]
fn malformed_crawl_delay_values_are_ignored() {
    for value in ["abc", "60abc", ""] {
        let doc = format!("user-agent: testbot\ncrawl-delay: {value}\n");
        let e = Evaluator::new(doc.as_bytes(), "testbot");
        assert_eq!(e.crawl_delay_ms(), None, "value {value:?} should be unset");
    }
}

#[test]
fn trailing_comment_on_crawl_delay_still_parses() {
    let doc = b"user-agent: testbot\ncrawl-delay: 60#cmt\n";
    let e = Evaluator::new(doc, "testbot");
    assert_eq!(e.crawl_delay_ms(), Some(60_000));
}

#[test]
fn multiple_sitemaps_collected_in_order() {
    let doc = b"sitemap: https://example.com/a.xml\n\
                sitemap: https://example.com/b.xml\n";
    let e = Evaluator::new(doc, "testbot");
    assert_eq!(
        e.sitemaps(),
        &[
            "https://example.com/a.xml".to_string(),
            "https://example.com/b.xml".to_string(),
        ]
    );
}

#[test]
fn directive_before_any_user_agent_is_dropped() {
    let doc = b"disallow: /orphan\nuser-agent: testbot\ndisallow: /real\n";
    let e = Evaluator::new(doc, "testbot");
    assert!(e.is_allowed("/orphan"));
    assert!(!e.is_allowed("/real"));
}

#[test]
fn construction_never_panics_on_arbitrary_bytes() {
    // Not valid UTF-8 and not well-formed in any sense; parsing is total.
    let garbage: &[u8] = &[0xff, 0xfe, b':', b'\n', 0x00, 0x01, b'\r'];
    let e = Evaluator::new(garbage, "testbot");
    assert!(e.is_allowed("/anything"));
}
