use super::rule::{Rule, RuleKind, parse_crawl_delay_ms};

/// One group of the document: the `user-agent` tokens that head it and the
/// directives that follow before the next group starts (§4.2).
#[derive(Debug, Default)]
pub struct Group {
    pub agents: Vec<String>,
    pub rules: Vec<Rule>,
    pub crawl_delay_ms: Option<u32>,
}

impl Group {
    fn is_default(&self) -> bool {
        self.agents.iter().any(|a| a == "*")
    }

    /// ASCII case-insensitive prefix match against `token`. The `*` default
    /// group never matches this way — callers special-case it separately.
    fn matches_token(&self, token: &str) -> bool {
        self.agents
            .iter()
            .filter(|a| a.as_str() != "*")
            .any(|a| token.len() >= a.len() && token[..a.len()].eq_ignore_ascii_case(a))
    }
}

/// Incrementally builds `Group`s out of a stream of field/value records,
/// implementing the "consecutive user-agent lines start/extend a group,
/// a directive closes the header phase" algorithm from §4.2.
#[derive(Default)]
pub struct GroupBuilder {
    groups: Vec<Group>,
    in_header: bool,
    sitemaps: Vec<String>,
}

impl GroupBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push_user_agent(&mut self, value: &str) {
        if self.in_header {
            if let Some(last) = self.groups.last_mut() {
                last.agents.push(value.to_string());
                return;
            }
        }
        self.groups.push(Group {
            agents: vec![value.to_string()],
            ..Default::default()
        });
        self.in_header = true;
    }

    pub fn push_rule(&mut self, kind: RuleKind, pattern: &str) {
        // A directive before any user-agent line is dropped (§4.2).
        let Some(last) = self.groups.last_mut() else {
            return;
        };
        self.in_header = false;
        if pattern.is_empty() {
            // Empty pattern in allow/disallow is ignored (§7): it can never match.
            return;
        }
        last.rules.push(Rule {
            kind,
            pattern: pattern.to_string(),
        });
    }

    pub fn push_crawl_delay(&mut self, value: &str) {
        let Some(last) = self.groups.last_mut() else {
            return;
        };
        self.in_header = false;
        if let Some(ms) = parse_crawl_delay_ms(value) {
            // First value wins per group; later crawl-delay lines in the same
            // group's body don't override (mirrors "first matching group wins").
            if last.crawl_delay_ms.is_none() {
                last.crawl_delay_ms = Some(ms);
            }
        }
    }

    pub fn push_sitemap(&mut self, value: &str) {
        self.sitemaps.push(value.to_string());
    }

    pub fn finish(self) -> (Vec<Group>, Vec<String>) {
        (self.groups, self.sitemaps)
    }
}

/// The rule set and crawl delay selected for a given agent token, plus the
/// introspection flags §8's tests depend on.
pub struct Selection {
    pub specific_rules: Option<Vec<Rule>>,
    pub default_rules: Option<Vec<Rule>>,
    pub crawl_delay_ms: Option<u32>,
    pub user_agent_found: bool,
    pub default_user_agent_found: bool,
}

/// Applies the "first matching group of each class wins" selection rule
/// (§4.2) across all parsed groups for `token`.
pub fn select(groups: Vec<Group>, token: &str) -> Selection {
    let mut specific: Option<Group> = None;
    let mut default: Option<Group> = None;
    let mut user_agent_found = false;
    let mut default_user_agent_found = false;

    for group in groups {
        if group.is_default() {
            default_user_agent_found = true;
        }
        if group.matches_token(token) {
            user_agent_found = true;
        }

        if group.is_default() {
            if default.is_none() {
                default = Some(group);
            }
        } else if group.matches_token(token) && specific.is_none() {
            specific = Some(group);
        }
    }

    let crawl_delay_ms = specific
        .as_ref()
        .and_then(|g| g.crawl_delay_ms)
        .or_else(|| default.as_ref().and_then(|g| g.crawl_delay_ms));

    Selection {
        specific_rules: specific.map(|g| g.rules),
        default_rules: default.map(|g| g.rules),
        crawl_delay_ms,
        user_agent_found,
        default_user_agent_found,
    }
}
