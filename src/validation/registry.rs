use std::collections::BTreeMap;

use tracing::debug;

use super::countries::DEFAULT_COUNTRIES;
use super::rule::CountryRule;
use crate::core::ConfigError;

/// Country code → validation rule.
///
/// Lookups normalize the code to uppercase; registration fails on
/// duplicates so a rule cannot be replaced by accident.
#[derive(Debug, Clone, Default)]
pub struct Registry {
    rules: BTreeMap<&'static str, CountryRule>,
}

impl Registry {
    /// An empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// A registry holding the built-in rules for the ten default countries.
    ///
    /// # Panics
    ///
    /// If a default country has no built-in rule or is listed twice.
    pub fn with_defaults() -> Self {
        let mut registry = Self::new();
        for code in DEFAULT_COUNTRIES {
            if let Err(err) = registry.register_builtin(code) {
                panic!("built-in country table is inconsistent: {err}");
            }
        }
        registry
    }

    /// Register a rule under its own country code.
    pub fn register(&mut self, rule: CountryRule) -> Result<(), ConfigError> {
        self.register_as(rule.country(), rule)
    }

    /// Register a rule under `country`, which must equal the rule's own code.
    pub fn register_as(&mut self, country: &str, rule: CountryRule) -> Result<(), ConfigError> {
        let code = country.to_ascii_uppercase();
        if code != rule.country() {
            return Err(ConfigError::CountryMismatch {
                requested: code,
                rule: rule.country().to_string(),
            });
        }
        if self.rules.contains_key(rule.country()) {
            return Err(ConfigError::DuplicateCountry(code));
        }
        debug!(country = rule.country(), "registered country rule");
        self.rules.insert(rule.country(), rule);
        Ok(())
    }

    /// Register the built-in rule for `country`.
    pub fn register_builtin(&mut self, country: &str) -> Result<(), ConfigError> {
        self.register(CountryRule::builtin(country)?)
    }

    pub fn resolve(&self, country: &str) -> Option<&CountryRule> {
        let code = country.to_ascii_uppercase();
        self.rules.get(code.as_str())
    }

    /// Remove every rule.
    pub fn clear(&mut self) {
        self.rules.clear();
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// Registered country codes in alphabetical order.
    pub fn countries(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.rules.keys().copied()
    }
}
