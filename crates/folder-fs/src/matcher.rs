//! Exclusion rule evaluation
//!
//! Rules come in two shapes:
//! - **Wildcard** rules contain `*`. Each `*` becomes `.*`, the rest of the
//!   rule is taken as regex syntax, and the result is searched for anywhere
//!   in the entry name. `build*` therefore also excludes `prebuild`, and the
//!   `.` in `*.tmp` matches any character.
//! - **Literal** rules match when the entry name equals the rule, or when the
//!   entry's relative path contains the rule as a substring.
//!
//! The substring form lets `node_modules` exclude nested occurrences at any
//! depth. It also means a literal rule `git` excludes a folder named `legit`;
//! that sharp edge is kept as-is.
//!
//! Matching runs on the raw encoded bytes of names and paths, so entries
//! whose names are not valid UTF-8 are still evaluated.

use std::ffi::OsStr;

use regex::bytes::Regex;

use crate::{Error, RelativePath, Result};

/// A single compiled exclusion rule.
#[derive(Debug, Clone)]
pub enum ExclusionRule {
    /// Exact name or relative-path substring.
    Literal(String),
    /// `*` pattern searched for within the entry name.
    Wildcard { pattern: String, regex: Regex },
}

impl ExclusionRule {
    /// Compile a rule string.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidPattern`] if the wildcard form is not a valid
    /// regular expression, e.g. `[*`.
    pub fn parse(rule: &str) -> Result<Self> {
        if !rule.contains('*') {
            return Ok(Self::Literal(rule.to_string()));
        }

        let regex = Regex::new(&rule.replace('*', ".*")).map_err(|e| Error::InvalidPattern {
            pattern: rule.to_string(),
            reason: e.to_string(),
        })?;

        Ok(Self::Wildcard {
            pattern: rule.to_string(),
            regex,
        })
    }

    /// The rule as written in configuration.
    pub fn as_str(&self) -> &str {
        match self {
            Self::Literal(rule) => rule,
            Self::Wildcard { pattern, .. } => pattern,
        }
    }

    /// Check this rule against one entry.
    pub fn matches(&self, name: &OsStr, relative_path: &RelativePath) -> bool {
        self.matches_encoded(name.as_encoded_bytes(), &relative_path.to_encoded_bytes())
    }

    fn matches_encoded(&self, name: &[u8], relative_path: &[u8]) -> bool {
        match self {
            Self::Literal(rule) => {
                name == rule.as_bytes() || contains_bytes(relative_path, rule.as_bytes())
            }
            Self::Wildcard { regex, .. } => regex.is_match(name),
        }
    }
}

fn contains_bytes(haystack: &[u8], needle: &[u8]) -> bool {
    needle.is_empty() || haystack.windows(needle.len()).any(|w| w == needle)
}

/// The active rule set, built once per run and passed to the scanner.
#[derive(Debug, Clone, Default)]
pub struct ExclusionRules {
    rules: Vec<ExclusionRule>,
}

impl ExclusionRules {
    /// A rule set that excludes nothing.
    pub fn none() -> Self {
        Self::default()
    }

    /// Compile a rule set from raw strings, in order.
    ///
    /// Empty strings are skipped: as a substring they would match every path.
    pub fn new<I, S>(rules: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let rules = rules
            .into_iter()
            .filter(|r| !r.as_ref().is_empty())
            .map(|r| ExclusionRule::parse(r.as_ref()))
            .collect::<Result<Vec<_>>>()?;
        Ok(Self { rules })
    }

    /// True if any rule excludes the entry.
    pub fn matches(&self, name: &OsStr, relative_path: &RelativePath) -> bool {
        self.matching_rule(name, relative_path).is_some()
    }

    /// The first rule that excludes the entry, if any.
    pub fn matching_rule(&self, name: &OsStr, relative_path: &RelativePath) -> Option<&ExclusionRule> {
        if self.rules.is_empty() {
            return None;
        }
        let name = name.as_encoded_bytes();
        let path = relative_path.to_encoded_bytes();
        self.rules.iter().find(|r| r.matches_encoded(name, &path))
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn rules(raw: &[&str]) -> ExclusionRules {
        ExclusionRules::new(raw).unwrap()
    }

    fn excluded(set: &ExclusionRules, rel: &str) -> bool {
        let rel = RelativePath::parse(rel);
        let name = rel.file_name().unwrap().to_os_string();
        set.matches(&name, &rel)
    }

    #[rstest]
    #[case(".git", ".git", true)]
    #[case(".git", "src/.git", true)]
    #[case("node_modules", "packages/a/node_modules", true)]
    #[case(".git", "src", false)]
    #[case("git", "legit", true)]
    fn literal_rules(#[case] rule: &str, #[case] rel: &str, #[case] expected: bool) {
        assert_eq!(excluded(&rules(&[rule]), rel), expected);
    }

    #[rstest]
    #[case("*.tmp", "cache.tmp", true)]
    #[case("*.tmp", "cache.tmpx", true)]
    #[case("*.tmp", "tmp", false)]
    #[case("build*", "build-output", true)]
    #[case("build*", "prebuild", true)]
    #[case("build*", "bui", false)]
    #[case("*", "anything", true)]
    #[case("a*c", "xabcx", true)]
    #[case("a.c*", "abc", true)]
    #[case("^dist*$", "dist-old", true)]
    #[case("^dist*$", "old-dist", false)]
    fn wildcard_rules_search_within_name(#[case] rule: &str, #[case] name: &str, #[case] expected: bool) {
        assert_eq!(excluded(&rules(&[rule]), name), expected);
    }

    #[test]
    fn wildcard_ignores_relative_path() {
        assert!(!excluded(&rules(&["logs*"]), "logs/current"));
    }

    #[test]
    fn invalid_wildcard_is_rejected() {
        let err = ExclusionRules::new(["[*"]).unwrap_err();
        assert!(matches!(err, Error::InvalidPattern { ref pattern, .. } if pattern == "[*"));
    }

    #[test]
    fn empty_rules_are_dropped() {
        let set = rules(&["", ".git"]);
        assert_eq!(set.len(), 1);
        assert!(!excluded(&set, "src"));
    }

    #[test]
    fn matching_rule_reports_first_hit() {
        let set = rules(&["node_modules", "*_modules"]);
        let rel = RelativePath::parse("node_modules");
        let hit = set.matching_rule(OsStr::new("node_modules"), &rel).unwrap();
        assert_eq!(hit.as_str(), "node_modules");
    }

    #[test]
    fn empty_set_excludes_nothing() {
        assert!(!excluded(&ExclusionRules::none(), ".git"));
    }

    #[cfg(unix)]
    #[test]
    fn non_utf8_names_are_matched_on_raw_bytes() {
        use std::os::unix::ffi::OsStrExt;

        let name = OsStr::from_bytes(b"cache\xff");
        let rel = RelativePath::root().join(name);
        assert!(rules(&["cache*"]).matches(name, &rel));
        assert!(rules(&["cache"]).matches(name, &rel));
        assert!(!rules(&["cache\u{fffd}"]).matches(name, &rel));
    }
}
