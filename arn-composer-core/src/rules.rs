//! Service rule table: which ARN fields a service/resource pair requires.
//!
//! Rules are scanned in order. A rule applies when its service name matches
//! exactly and, if it carries a resource pattern, the pattern is found
//! somewhere in the resource string. The first applicable rule wins; a
//! service may appear several times with different resource-scoped rules, so
//! a pattern mismatch continues the scan rather than ending it.

use regex::Regex;
use serde::Deserialize;

use crate::error::{ArnComposerError, ArnComposerResult};

/// A single entry in the rule table.
#[derive(Debug, Clone)]
pub struct Rule {
    service: String,
    resource: Option<Regex>,
    region: bool,
    account: bool,
}

impl Rule {
    /// A rule for `service` that requires both region and account.
    pub fn new(service: impl Into<String>) -> Self {
        Self {
            service: service.into(),
            resource: None,
            region: true,
            account: true,
        }
    }

    /// Scope this rule to resources matching `pattern` (unanchored search).
    pub fn resource_pattern(mut self, pattern: &str) -> ArnComposerResult<Self> {
        let regex = Regex::new(pattern).map_err(|e| {
            ArnComposerError::config(format!("invalid resource pattern '{pattern}': {e}"))
        })?;
        self.resource = Some(regex);
        Ok(self)
    }

    pub fn region(mut self, needed: bool) -> Self {
        self.region = needed;
        self
    }

    pub fn account(mut self, needed: bool) -> Self {
        self.account = needed;
        self
    }

    fn applies_to(&self, service: &str, resource: &str) -> bool {
        if self.service != service {
            return false;
        }
        match &self.resource {
            Some(pattern) => pattern.is_match(resource),
            None => true,
        }
    }
}

/// Tri-state force flags. `Some(_)` unconditionally overrides the table,
/// including `Some(false)`; `None` leaves the table's answer in place.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Overrides {
    pub region: Option<bool>,
    pub account: Option<bool>,
}

/// Resolved field requirements for one service/resource pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Requirements {
    pub region: bool,
    pub account: bool,
}

/// Ordered, immutable rule table.
#[derive(Debug, Clone, Default)]
pub struct RuleSet {
    rules: Vec<Rule>,
}

#[derive(Debug, Deserialize)]
struct RawRule {
    service: String,
    resource: Option<String>,
    region: Option<bool>,
    account: Option<bool>,
}

#[derive(Debug, Deserialize)]
struct RawRuleTable {
    services: Vec<RawRule>,
}

impl RuleSet {
    pub fn new(rules: Vec<Rule>) -> Self {
        Self { rules }
    }

    /// Parse a rule table from its JSON document form:
    /// `{"services": [{"service", "resource"?, "region"?, "account"?}]}`.
    pub fn from_json(json: &str) -> ArnComposerResult<Self> {
        let raw: RawRuleTable = serde_json::from_str(json)
            .map_err(|e| ArnComposerError::config(format!("invalid rules JSON: {e}")))?;

        let mut rules = Vec::with_capacity(raw.services.len());
        for entry in raw.services {
            let mut rule = Rule::new(entry.service);
            if let Some(pattern) = &entry.resource {
                rule = rule.resource_pattern(pattern)?;
            }
            rule.region = entry.region.unwrap_or(true);
            rule.account = entry.account.unwrap_or(true);
            rules.push(rule);
        }

        log::debug!("loaded {} service rules", rules.len());
        Ok(Self::new(rules))
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// Determine whether an ARN for `service` and `resource` carries a region
    /// and/or an account. Unmatched pairs require both fields.
    pub fn requirements(&self, service: &str, resource: &str, overrides: Overrides) -> Requirements {
        let mut needs = Requirements {
            region: true,
            account: true,
        };

        for rule in &self.rules {
            if !rule.applies_to(service, resource) {
                continue;
            }
            needs = Requirements {
                region: rule.region,
                account: rule.account,
            };
            break;
        }

        if let Some(region) = overrides.region {
            needs.region = region;
        }
        if let Some(account) = overrides.account {
            needs.account = account;
        }

        needs
    }
}
