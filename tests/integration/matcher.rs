use regex::Regex;
use serde::Deserialize;
use tracing::{debug, error};

#[derive(Debug, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MatcherKind {
    Include,
    NotInclude,
    Eq,
    Regex,
    IncludeAll,
    IncludeNone,
    /// Every pattern must match at least one output line.
    RegexAll,
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub enum MatcherValue {
    Single(String),
    Multiple(Vec<String>),
}

#[derive(Debug, Deserialize)]
pub struct Matcher {
    pub kind: MatcherKind,
    pub value: MatcherValue,
}

fn compile(pattern: &str) -> Option<Regex> {
    Regex::new(pattern)
        .map_err(|e| error!("Invalid regex '{}': {}", pattern, e))
        .ok()
}

impl Matcher {
    pub fn matches(&self, actual: &str) -> bool {
        let result = match (&self.kind, &self.value) {
            (MatcherKind::Include, MatcherValue::Single(s)) => actual.contains(s.as_str()),
            (MatcherKind::NotInclude, MatcherValue::Single(s)) => !actual.contains(s.as_str()),
            (MatcherKind::Eq, MatcherValue::Single(s)) => actual.trim() == s.trim(),
            (MatcherKind::Regex, MatcherValue::Single(s)) => {
                compile(s).is_some_and(|re| re.is_match(actual))
            }
            (MatcherKind::IncludeAll, MatcherValue::Multiple(frags)) => {
                frags.iter().all(|f| actual.contains(f.as_str()))
            }
            (MatcherKind::IncludeNone, MatcherValue::Multiple(frags)) => {
                frags.iter().all(|f| !actual.contains(f.as_str()))
            }
            (MatcherKind::RegexAll, MatcherValue::Multiple(patterns)) => {
                patterns.iter().all(|p| {
                    compile(p).is_some_and(|re| actual.lines().any(|line| re.is_match(line)))
                })
            }
            _ => {
                error!("Invalid matcher kind/value combination");
                false
            }
        };
        debug!("{:?} -> {}", self, result);
        result
    }
}
