use super::registry::Registry;
use crate::core::{BicError, CiError, IbanError, ValidationLevel};

/// Identifier validation context: a country [`Registry`] plus the active
/// [`ValidationLevel`].
///
/// Build one at startup and share it (`Arc<Validator>`) with every document.
/// Validation never mutates the context, so a shared validator can be used
/// from several threads.
///
/// # Example
///
/// ```
/// use sepakit::validation::Validator;
/// use sepakit::IbanError;
///
/// let validator = Validator::with_defaults();
///
/// let mut iban = "de11 6829 0000 0009 2158 08".to_string();
/// assert!(validator.validate_iban(&mut iban).is_ok());
/// assert_eq!(iban, "DE11682900000009215808");
///
/// let mut iban = "DE21682900000009215808".to_string();
/// assert_eq!(validator.validate_iban(&mut iban), Err(IbanError::Checksum));
/// ```
#[derive(Debug, Clone)]
pub struct Validator {
    registry: Registry,
    level: ValidationLevel,
}

impl Validator {
    pub fn new(registry: Registry) -> Self {
        Self {
            registry,
            level: ValidationLevel::FULL,
        }
    }

    /// Validator over the ten default countries at full validation level.
    pub fn with_defaults() -> Self {
        Self::new(Registry::with_defaults())
    }

    pub fn with_level(mut self, level: ValidationLevel) -> Self {
        self.level = level;
        self
    }

    pub fn level(&self) -> ValidationLevel {
        self.level
    }

    pub fn set_level(&mut self, level: ValidationLevel) {
        self.level = level;
    }

    /// True if the active level bypasses `flag`.
    pub fn skips(&self, flag: ValidationLevel) -> bool {
        self.level.skips(flag)
    }

    pub fn registry(&self) -> &Registry {
        &self.registry
    }

    pub fn registry_mut(&mut self) -> &mut Registry {
        &mut self.registry
    }

    /// Uppercase and strip all whitespace.
    pub fn normalize(raw: &str) -> String {
        raw.chars()
            .filter(|c| !c.is_whitespace())
            .flat_map(char::to_uppercase)
            .collect()
    }

    /// [`normalize`](Self::normalize) plus the `XXX` branch code for 8-character BICs.
    pub fn normalize_bic(raw: &str) -> String {
        let mut bic = Self::normalize(raw);
        if bic.chars().count() == 8 {
            bic.push_str("XXX");
        }
        bic
    }

    /// Normalize `iban` in place and validate it against its country rule.
    ///
    /// # Panics
    ///
    /// If the registry is empty.
    pub fn validate_iban(&self, iban: &mut String) -> Result<(), IbanError> {
        *iban = Self::normalize(iban);
        if self.skips(ValidationLevel::NO_IBAN) {
            return Ok(());
        }
        match self.rule_for(iban.get(..2)) {
            Some(rule) => rule.validate_iban(iban),
            None if self.skips(ValidationLevel::IGNORE_MISSING_COUNTRY) => Ok(()),
            None => Err(IbanError::InvalidCountry),
        }
    }

    /// Normalize `bic` in place, expand an 8-character BIC to 11 with `XXX`
    /// and validate it.
    ///
    /// # Panics
    ///
    /// If the registry is empty.
    pub fn validate_bic(&self, bic: &mut String) -> Result<(), BicError> {
        *bic = Self::normalize_bic(bic);
        if self.skips(ValidationLevel::NO_BIC) {
            return Ok(());
        }
        match self.rule_for(bic.get(4..6)) {
            Some(rule) => rule.validate_bic(bic),
            None if self.skips(ValidationLevel::IGNORE_MISSING_COUNTRY) => Ok(()),
            None => Err(BicError::InvalidCountry),
        }
    }

    /// Normalize `ci` in place and validate it against its country rule.
    ///
    /// # Panics
    ///
    /// If the registry is empty.
    pub fn validate_ci(&self, ci: &mut String) -> Result<(), CiError> {
        *ci = Self::normalize(ci);
        if self.skips(ValidationLevel::NO_CI) {
            return Ok(());
        }
        match self.rule_for(ci.get(..2)) {
            Some(rule) => rule.validate_ci(ci),
            None if self.skips(ValidationLevel::IGNORE_MISSING_COUNTRY) => Ok(()),
            None => Err(CiError::InvalidCountry),
        }
    }

    fn rule_for(&self, country: Option<&str>) -> Option<&super::CountryRule> {
        assert!(
            !self.registry.is_empty(),
            "identifier validation requires a populated country registry"
        );
        country.and_then(|code| self.registry.resolve(code))
    }
}

impl Default for Validator {
    fn default() -> Self {
        Self::with_defaults()
    }
}
