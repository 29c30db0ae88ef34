mod group;
pub mod lexer;
mod rule;

use group::{GroupBuilder, Selection, select};
use lexer::{Lines, eq_ignore_ascii_case, split_field_value};
use rule::{Rule, RuleKind};

/// A parsed `robots.txt` document, evaluated against one fixed agent token
/// (§4.2). Immutable after construction; cheap to query repeatedly.
pub struct Evaluator {
    selection: Selection,
    sitemaps: Vec<String>,
}

impl Evaluator {
    /// Parses `document` in one pass and selects the rule set for
    /// `agent_token`. Parsing is total: any malformed line is silently
    /// skipped (§7), so this never fails.
    pub fn new(document: &[u8], agent_token: &str) -> Self {
        let mut builder = GroupBuilder::new();

        for line in Lines::new(document) {
            let Some((field, value)) = split_field_value(line) else {
                continue;
            };
            let value = match std::str::from_utf8(value) {
                Ok(v) => v,
                // Non-UTF-8 bytes above 0x7F are compared byte-for-byte in
                // patterns (§6); a value that isn't valid UTF-8 at all can't
                // be used as a str, so treat the line as malformed.
                Err(_) => continue,
            };

            if eq_ignore_ascii_case(field, b"user-agent") {
                builder.push_user_agent(value);
            } else if eq_ignore_ascii_case(field, b"allow") {
                builder.push_rule(RuleKind::Allow, value);
            } else if eq_ignore_ascii_case(field, b"disallow") {
                builder.push_rule(RuleKind::Disallow, value);
            } else if eq_ignore_ascii_case(field, b"crawl-delay") {
                builder.push_crawl_delay(value);
            } else if eq_ignore_ascii_case(field, b"sitemap") {
                builder.push_sitemap(value);
            }
            // All other fields are recognized-but-ignored (§4.2).
        }

        let (groups, sitemaps) = builder.finish();
        let selection = select(groups, agent_token);

        Self {
            selection,
            sitemaps,
        }
    }

    /// Decides fetch permission for `path` (§4.2). Specific-agent rules are
    /// consulted first; the default group's rules apply only when no
    /// specific group matched at all. Within the selected rule set, the
    /// earliest matching rule in document order wins.
    pub fn is_allowed(&self, path: &str) -> bool {
        let rules: &[Rule] = match &self.selection.specific_rules {
            Some(rules) => rules,
            None => self
                .selection
                .default_rules
                .as_deref()
                .unwrap_or(&[]),
        };

        for rule in rules {
            if rule.matches(path) {
                return matches!(rule.kind, RuleKind::Allow);
            }
        }
        true
    }

    /// The selected group's crawl delay in milliseconds, or `None` if absent
    /// or unparseable (§4.2).
    pub fn crawl_delay_ms(&self) -> Option<u32> {
        self.selection.crawl_delay_ms
    }

    pub fn sitemaps(&self) -> &[String] {
        &self.sitemaps
    }

    /// True iff any non-default `user-agent` line prefix-matched the
    /// configured agent token (§4.2, introspection).
    pub fn user_agent_found(&self) -> bool {
        self.selection.user_agent_found
    }

    /// True iff at least one `user-agent: *` line appeared in the document.
    pub fn default_user_agent_found(&self) -> bool {
        self.selection.default_user_agent_found
    }

    /// True iff the selected specific group contributed zero rules (or no
    /// specific group matched at all).
    pub fn rules_empty(&self) -> bool {
        self.selection
            .specific_rules
            .as_ref()
            .is_none_or(|r| r.is_empty())
    }

    /// True iff the default group contributed zero rules (or no default
    /// group was present).
    pub fn default_rules_empty(&self) -> bool {
        self.selection
            .default_rules
            .as_ref()
            .is_none_or(|r| r.is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scenario_single_agent_crawl_delay_only() {
        let e = Evaluator::new(b"user-agent: testbot\ncrawl-delay: 1\n", "testbot");
        assert!(e.user_agent_found());
        assert!(e.rules_empty());
        assert_eq!(e.crawl_delay_ms(), Some(1000));
        assert!(e.is_allowed("/anything"));
    }

    #[test]
    fn scenario_default_group_disallow_all() {
        let e = Evaluator::new(b"user-agent: *\ndisallow: /\n", "testbot");
        assert!(!e.user_agent_found());
        assert!(e.default_user_agent_found());
        assert!(!e.is_allowed("/"));
        assert!(!e.is_allowed("/index.html"));
    }

    #[test]
    fn scenario_allow_first_wins() {
        let doc = b"user-agent: testbot\nallow: /p\ndisallow: /\n";
        let e = Evaluator::new(doc, "testbot");
        assert!(e.is_allowed("/page"));
        assert!(!e.is_allowed("/other"));
    }

    #[test]
    fn scenario_multi_agent_crawl_delay() {
        let doc = b"user-agent: abcbot\ncrawl-delay: 1\n\
                    user-agent: testbot\ncrawl-delay: 2\n\
                    user-agent: defbot\ncrawl-delay: 3\n";
        let e = Evaluator::new(doc, "testbot");
        assert_eq!(e.crawl_delay_ms(), Some(2000));
    }

    #[test]
    fn scenario_empty_document() {
        let e = Evaluator::new(b"", "testbot");
        assert!(!e.user_agent_found());
        assert!(e.is_allowed("/"));
    }

    #[test]
    fn no_matching_group_allows_everything() {
        let e = Evaluator::new(b"user-agent: otherbot\ndisallow: /\n", "testbot");
        assert!(e.is_allowed("/"));
        assert!(e.is_allowed("/anything/else"));
    }

    #[test]
    fn specific_group_shadows_default_entirely() {
        let doc = b"user-agent: *\ndisallow: /\n\
                    user-agent: testbot\nallow: /\n";
        let e = Evaluator::new(doc, "testbot");
        assert!(e.is_allowed("/anything"));
    }

    #[test]
    fn sitemaps_collected_independent_of_agent() {
        let doc = b"user-agent: otherbot\ndisallow: /\nsitemap: https://example.com/sitemap.xml\n";
        let e = Evaluator::new(doc, "testbot");
        assert_eq!(e.sitemaps(), &["https://example.com/sitemap.xml".to_string()]);
    }

    #[test]
    fn line_ending_normalization() {
        let lf = Evaluator::new(b"user-agent: testbot\ndisallow: /a\n", "testbot");
        let crlf = Evaluator::new(b"user-agent: testbot\r\ndisallow: /a\r\n", "testbot");
        let cr = Evaluator::new(b"user-agent: testbot\rdisallow: /a\r", "testbot");
        for e in [&lf, &crlf, &cr] {
            assert!(!e.is_allowed("/a/b"));
            assert!(e.is_allowed("/b"));
        }
    }
}
