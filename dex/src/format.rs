//! Formats and their rule tables

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

/// Rule flag that turns on legality enforcement
pub const ILLEGAL_RULE: &str = "-illegal";

/// Rule flag that admits Create-A-Pokemon species and moves
pub const ALLOW_CAP_RULE: &str = "allowcap";

/// Active rule flags of a format
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RuleTable {
    rules: BTreeSet<String>,
}

impl RuleTable {
    /// Create an empty rule table
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a rule table from rule names
    pub fn from_rules<I, S>(rules: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut table = Self::new();
        for rule in rules {
            table.insert(rule.as_ref());
        }
        table
    }

    /// Add a rule (stored lowercased and trimmed)
    pub fn insert(&mut self, rule: &str) {
        self.rules.insert(normalize_rule(rule));
    }

    /// Check whether a rule is active
    pub fn has(&self, rule: &str) -> bool {
        self.rules.contains(&normalize_rule(rule))
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// Iterate over active rules in sorted order
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.rules.iter().map(String::as_str)
    }
}

fn normalize_rule(rule: &str) -> String {
    rule.trim().to_lowercase()
}

/// Serialized form of a [`Format`]
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FormatData {
    pub name: String,

    #[serde(default)]
    pub rules: Vec<String>,

    /// Only Pokemon originating from the current generation are allowed
    #[serde(default)]
    pub require_pentagon: bool,
}

/// A named ruleset a team is validated against
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Format {
    pub name: String,
    pub rule_table: RuleTable,
    pub require_pentagon: bool,
}

impl Format {
    /// Build a format from its serialized form
    pub fn new(data: FormatData) -> Self {
        Self {
            rule_table: RuleTable::from_rules(&data.rules),
            name: data.name,
            require_pentagon: data.require_pentagon,
        }
    }

    /// Build a format directly from rule names
    pub fn with_rules<I, S>(name: impl Into<String>, rules: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self {
            name: name.into(),
            rule_table: RuleTable::from_rules(rules),
            require_pentagon: false,
        }
    }

    /// Parse a format from JSON
    pub fn from_json_str(json: &str) -> Result<Self, crate::DexError> {
        let data: FormatData =
            serde_json::from_str(json).map_err(crate::DexError::InvalidFormat)?;
        Ok(Self::new(data))
    }

    /// Constructs the [`FormatData`] for this format.
    pub fn data(&self) -> FormatData {
        FormatData {
            name: self.name.clone(),
            rules: self.rule_table.iter().map(str::to_string).collect(),
            require_pentagon: self.require_pentagon,
        }
    }

    pub fn enforces_legality(&self) -> bool {
        self.rule_table.has(ILLEGAL_RULE)
    }

    pub fn allows_cap(&self) -> bool {
        self.rule_table.has(ALLOW_CAP_RULE)
    }
}
