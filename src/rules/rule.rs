//! A single substitution rule

use regex::{NoExpand, Regex};
use thiserror::Error;

/// Errors raised while building rules
#[derive(Debug, Error)]
pub enum RuleError {
    #[error("invalid pattern for rule '{rule}': {source}")]
    InvalidPattern {
        rule: String,
        #[source]
        source: regex::Error,
    },

    #[error("unknown preset '{0}' (expected: lenient, strict)")]
    UnknownPreset(String),
}

/// How many matches of each pattern get replaced
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReplaceScope {
    /// Leftmost match only
    First,
    /// Every non-overlapping match, left to right
    All,
}

impl ReplaceScope {
    pub fn as_str(self) -> &'static str {
        match self {
            ReplaceScope::First => "first",
            ReplaceScope::All => "all",
        }
    }
}

/// A named substitution: patterns applied in order, each replaced by the same literal text
#[derive(Debug, Clone)]
pub struct Rule {
    pub id: &'static str,
    pub description: &'static str,
    patterns: Vec<Regex>,
    replacement: &'static str,
    scope: ReplaceScope,
}

impl Rule {
    pub fn new(
        id: &'static str,
        description: &'static str,
        patterns: &[&str],
        replacement: &'static str,
        scope: ReplaceScope,
    ) -> Result<Self, RuleError> {
        let patterns = patterns
            .iter()
            .map(|p| {
                Regex::new(p).map_err(|source| RuleError::InvalidPattern {
                    rule: id.to_string(),
                    source,
                })
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self {
            id,
            description,
            patterns,
            replacement,
            scope,
        })
    }

    pub fn scope(&self) -> ReplaceScope {
        self.scope
    }

    pub fn replacement(&self) -> &str {
        self.replacement
    }

    /// Source text of every pattern, in application order
    pub fn pattern_sources(&self) -> impl Iterator<Item = &str> {
        self.patterns.iter().map(|re| re.as_str())
    }

    /// Apply the rule, returning the rewritten text and the number of replacements made.
    ///
    /// Text without a match comes back unchanged with a count of 0.
    pub fn apply(&self, text: &str) -> (String, usize) {
        let mut current = text.to_string();
        let mut total = 0;

        for re in &self.patterns {
            let found = match self.scope {
                ReplaceScope::First => usize::from(re.is_match(&current)),
                ReplaceScope::All => re.find_iter(&current).count(),
            };
            if found == 0 {
                continue;
            }

            let limit = match self.scope {
                ReplaceScope::First => 1,
                ReplaceScope::All => 0,
            };
            current = re
                .replacen(&current, limit, NoExpand(self.replacement))
                .into_owned();
            total += found;
        }

        (current, total)
    }
}
