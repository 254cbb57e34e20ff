use std::fmt;

use serde::Serialize;

use super::checksum::{mod97_check_digits, substitute_letters};
use crate::core::{BicError, CiError, ConfigError, IbanError};

/// Character class of a grammar run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum CharClass {
    /// `A-Z`
    Alpha,
    /// `0-9`
    Numeric,
    /// `0-9A-Z`
    AlphaNumeric,
    /// `0-9A-F`
    Hex,
}

impl CharClass {
    pub fn matches(self, c: char) -> bool {
        match self {
            Self::Alpha => c.is_ascii_uppercase(),
            Self::Numeric => c.is_ascii_digit(),
            Self::AlphaNumeric => c.is_ascii_uppercase() || c.is_ascii_digit(),
            Self::Hex => c.is_ascii_digit() || ('A'..='F').contains(&c),
        }
    }
}

/// One element of a format grammar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Segment {
    /// Exactly `n` characters of a class.
    Run(CharClass, usize),
    /// A fixed character.
    Literal(char),
}

impl Segment {
    fn len(self) -> usize {
        match self {
            Self::Run(_, n) => n,
            Self::Literal(_) => 1,
        }
    }
}

/// Character-class run-length grammar for everything after the country code.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct Grammar(&'static [Segment]);

impl Grammar {
    pub const fn new(segments: &'static [Segment]) -> Self {
        Self(segments)
    }

    pub fn segments(&self) -> &'static [Segment] {
        self.0
    }

    /// Number of characters the grammar describes.
    pub fn len(&self) -> usize {
        self.0.iter().map(|s| s.len()).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// True if `s` matches the grammar exactly.
    pub fn matches(&self, s: &str) -> bool {
        let mut chars = s.chars();
        for segment in self.0 {
            match *segment {
                Segment::Run(class, n) => {
                    for _ in 0..n {
                        match chars.next() {
                            Some(c) if class.matches(c) => {}
                            _ => return false,
                        }
                    }
                }
                Segment::Literal(lit) => {
                    if chars.next() != Some(lit) {
                        return false;
                    }
                }
            }
        }
        chars.next().is_none()
    }
}

impl fmt::Debug for Grammar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for segment in self.0 {
            match segment {
                Segment::Run(CharClass::Alpha, n) => write!(f, "a{n}")?,
                Segment::Run(CharClass::Numeric, n) => write!(f, "n{n}")?,
                Segment::Run(CharClass::AlphaNumeric, n) => write!(f, "c{n}")?,
                Segment::Run(CharClass::Hex, n) => write!(f, "h{n}")?,
                Segment::Literal(c) => write!(f, "'{c}'")?,
            }
        }
        Ok(())
    }
}

/// Length, grammar and letter-substitution flag of one identifier class.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct IdentifierFormat {
    /// Exact length including country code and check digits.
    pub length: usize,
    /// Grammar of the characters after the country code.
    pub grammar: Grammar,
    /// Letters in the body are substituted before the checksum is computed.
    pub alphanumeric: bool,
}

impl IdentifierFormat {
    pub const fn new(length: usize, grammar: &'static [Segment], alphanumeric: bool) -> Self {
        Self {
            length,
            grammar: Grammar::new(grammar),
            alphanumeric,
        }
    }
}

/// Creditor Identifier layout of a country.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum CiFormat {
    /// One fixed-length layout.
    Fixed(IdentifierFormat),
    /// Several layouts told apart by their length (Belgium).
    ByLength(&'static [IdentifierFormat]),
}

impl CiFormat {
    fn for_length(&self, len: usize) -> Option<&IdentifierFormat> {
        match self {
            Self::Fixed(format) => (format.length == len).then_some(format),
            Self::ByLength(formats) => formats.iter().find(|f| f.length == len),
        }
    }
}

/// Offset of the check digits in IBAN and CI.
const CHECK_DIGITS: std::ops::Range<usize> = 2..4;
/// First body character of an IBAN.
const IBAN_BODY: usize = 4;
/// First body character of a CI; positions 5-7 hold the business code.
const CI_BODY: usize = 7;

/// Validation rule for IBAN, BIC and Creditor Identifier of one country.
///
/// Rules expect normalized input (uppercase, no whitespace); the
/// [`Validator`](super::Validator) facade takes care of that.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct CountryRule {
    country: &'static str,
    iban: IdentifierFormat,
    ci: CiFormat,
}

impl CountryRule {
    /// # Panics
    ///
    /// If `country` is not two uppercase ASCII letters.
    pub const fn new(country: &'static str, iban: IdentifierFormat, ci: CiFormat) -> Self {
        let code = country.as_bytes();
        assert!(
            code.len() == 2 && code[0].is_ascii_uppercase() && code[1].is_ascii_uppercase(),
            "country code of a rule must be two uppercase letters"
        );
        Self { country, iban, ci }
    }

    /// The built-in rule for `country` (case insensitive).
    pub fn builtin(country: &str) -> Result<Self, ConfigError> {
        let code = country.to_ascii_uppercase();
        super::countries::RULES
            .iter()
            .find(|rule| rule.country == code)
            .copied()
            .ok_or(ConfigError::UnknownRule(code))
    }

    /// ISO 3166-1 alpha-2 code the rule applies to.
    pub fn country(&self) -> &'static str {
        self.country
    }

    pub fn iban_format(&self) -> &IdentifierFormat {
        &self.iban
    }

    pub fn ci_format(&self) -> &CiFormat {
        &self.ci
    }

    /// Validate a normalized IBAN.
    ///
    /// Stages run in order and stop at the first failure: length, country
    /// code, format, checksum.
    pub fn validate_iban(&self, iban: &str) -> Result<(), IbanError> {
        if iban.chars().count() != self.iban.length {
            return Err(IbanError::InvalidLength);
        }
        if iban.get(..2) != Some(self.country) {
            return Err(IbanError::InvalidCountry);
        }
        if !iban.get(2..).is_some_and(|rest| self.iban.grammar.matches(rest)) {
            return Err(IbanError::InvalidFormat);
        }
        let expected = self
            .check_digits(&iban[IBAN_BODY..], self.iban.alphanumeric)
            .ok_or(IbanError::InvalidFormat)?;
        if iban[CHECK_DIGITS] != expected {
            return Err(IbanError::Checksum);
        }
        Ok(())
    }

    /// Validate a normalized 8 or 11 character BIC.
    ///
    /// The country code at positions 5-6 is checked before the format.
    pub fn validate_bic(&self, bic: &str) -> Result<(), BicError> {
        if bic.get(4..6) != Some(self.country) {
            return Err(BicError::InvalidCountry);
        }
        if !is_bic_format(bic) {
            return Err(BicError::InvalidFormat);
        }
        Ok(())
    }

    /// Validate a normalized Creditor Identifier.
    ///
    /// The business code at positions 5-7 is not part of the checksum.
    pub fn validate_ci(&self, ci: &str) -> Result<(), CiError> {
        let Some(format) = self.ci.for_length(ci.chars().count()) else {
            return Err(CiError::InvalidLength);
        };
        if ci.get(..2) != Some(self.country) {
            return Err(CiError::InvalidCountry);
        }
        if !ci.get(2..).is_some_and(|rest| format.grammar.matches(rest)) {
            return Err(CiError::InvalidFormat);
        }
        let expected = self
            .check_digits(&ci[CI_BODY..], format.alphanumeric)
            .ok_or(CiError::InvalidFormat)?;
        if ci[CHECK_DIGITS] != expected {
            return Err(CiError::Checksum);
        }
        Ok(())
    }

    /// Check digits the IBAN should carry, if its length and format are valid.
    pub fn expected_iban_check_digits(&self, iban: &str) -> Option<String> {
        if iban.chars().count() != self.iban.length
            || !iban.get(2..).is_some_and(|rest| self.iban.grammar.matches(rest))
        {
            return None;
        }
        self.check_digits(&iban[IBAN_BODY..], self.iban.alphanumeric)
    }

    /// Check digits the CI should carry, if its length and format are valid.
    pub fn expected_ci_check_digits(&self, ci: &str) -> Option<String> {
        let format = self.ci.for_length(ci.chars().count())?;
        if !ci.get(2..).is_some_and(|rest| format.grammar.matches(rest)) {
            return None;
        }
        self.check_digits(&ci[CI_BODY..], format.alphanumeric)
    }

    /// `None` when letters remain in a body that does not allow substitution.
    fn check_digits(&self, body: &str, alphanumeric: bool) -> Option<String> {
        let digits = if alphanumeric {
            substitute_letters(body)
        } else {
            body.to_string()
        };
        digits
            .chars()
            .all(|c| c.is_ascii_digit())
            .then(|| mod97_check_digits(&digits, self.country))
    }
}

/// 4 letters bank code, 2 letters country, 2 alphanumeric location, optional 3 alphanumeric branch.
pub fn is_bic_format(bic: &str) -> bool {
    const BIC8: Grammar = Grammar::new(&[
        Segment::Run(CharClass::Alpha, 6),
        Segment::Run(CharClass::AlphaNumeric, 2),
    ]);
    const BIC11: Grammar = Grammar::new(&[
        Segment::Run(CharClass::Alpha, 6),
        Segment::Run(CharClass::AlphaNumeric, 5),
    ]);
    BIC8.matches(bic) || BIC11.matches(bic)
}
