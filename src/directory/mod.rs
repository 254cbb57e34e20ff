//! Bank directory lookups (participants reachable via SEPA, keyed by BIC).
//!
//! The directory only enriches BIC handling with a participant check and a
//! display name. Format and checksum validation never consult it.

use std::collections::BTreeMap;

use tracing::debug;

use crate::validation::Validator;

/// Source of bank participant data.
pub trait BankDirectory {
    /// Participant name for `bic`, if known. Lookups normalize the BIC and
    /// fall back to the 8-character form for `XXX` branch codes.
    fn name_for_bic(&self, bic: &str) -> Option<&str>;

    /// Participants of one country (all participants for an empty code),
    /// as `(bic, name)` pairs.
    fn providers(&self, country: &str) -> Vec<(&str, &str)>;

    fn is_known_bic(&self, bic: &str) -> bool {
        self.name_for_bic(bic).is_some()
    }
}

/// In-memory [`BankDirectory`].
///
/// ```
/// use sepakit::directory::{BankDirectory, InMemoryDirectory};
///
/// let directory = InMemoryDirectory::from_lines("GENODE61LAH;VOLKSBANK LAHR\nSOLADES1OFG;SPARKASSE OFFENBURG/ORTENAU");
/// assert!(directory.is_known_bic("genode61lah"));
/// assert_eq!(directory.name_for_bic("SOLADES1OFG"), Some("SPARKASSE OFFENBURG/ORTENAU"));
/// assert_eq!(directory.providers("DE").len(), 2);
/// ```
#[derive(Debug, Clone, Default)]
pub struct InMemoryDirectory {
    entries: BTreeMap<String, String>,
}

impl InMemoryDirectory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse `BIC;NAME` lines. Blank lines, `#` comments and lines without a
    /// separator are skipped.
    pub fn from_lines(data: &str) -> Self {
        let mut directory = Self::new();
        let mut skipped = 0usize;
        for line in data.lines().map(str::trim) {
            if line.is_empty() || line.starts_with('#') {
                continue;
            }
            match line.split_once(';') {
                Some((bic, name)) if !bic.trim().is_empty() => directory.insert(bic, name.trim()),
                _ => skipped += 1,
            }
        }
        debug!(entries = directory.len(), skipped, "loaded bank directory");
        directory
    }

    /// Add or replace a participant. The BIC is stored in its 11-character form.
    pub fn insert(&mut self, bic: &str, name: impl Into<String>) {
        self.entries.insert(Validator::normalize_bic(bic), name.into());
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl BankDirectory for InMemoryDirectory {
    fn name_for_bic(&self, bic: &str) -> Option<&str> {
        self.entries.get(&Validator::normalize_bic(bic)).map(String::as_str)
    }

    fn providers(&self, country: &str) -> Vec<(&str, &str)> {
        let country = country.to_ascii_uppercase();
        self.entries
            .iter()
            .filter(|(bic, _)| country.is_empty() || bic.get(4..6) == Some(country.as_str()))
            .map(|(bic, name)| (bic.as_str(), name.as_str()))
            .collect()
    }
}

const LOWER_WORDS: &[&str] = &[
    "a", "ab", "de", "der", "di", "do", "du", "et", "for", "im", "of", "on", "plc", "s", "und", "van", "von",
];
const UPPER_WORDS: &[&str] = &[
    "ABC", "AG", "BCP", "BGL", "BHF", "BKS", "BLG", "BNP", "CIB", "GB", "HSBC", "KG", "LGT", "NV", "SA", "UK", "VR",
];
const SPECIAL_WORDS: &[(&str, &str)] = &[("eg", "eG"), ("gmbh", "GmbH")];

/// Convert an all-caps participant name to title case, keeping common
/// abbreviations and legal forms readable (`VOLKSBANK LAHR EG` → `Volksbank Lahr eG`).
pub fn title_case(name: &str) -> String {
    let mut text = name.to_lowercase();
    for delimiter in [' ', '-', '.', '\''] {
        text = text
            .split(delimiter)
            .map(title_word)
            .collect::<Vec<_>>()
            .join(&delimiter.to_string());
    }
    text
}

fn title_word(word: &str) -> String {
    if let Some((_, replacement)) = SPECIAL_WORDS.iter().find(|(w, _)| *w == word) {
        return replacement.to_string();
    }
    let upper = word.to_uppercase();
    if UPPER_WORDS.contains(&upper.as_str()) {
        return upper;
    }
    if LOWER_WORDS.contains(&word) {
        return word.to_string();
    }
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const DATA: &str = "\
# BIC;NAME
GENODE61LAH;VOLKSBANK LAHR EG
SOLADES1OFG;SPARKASSE OFFENBURG/ORTENAU
SNSBNL2A;SNS BANK N.V.

not a record
BNPAFRPP;BNP PARIBAS
";

    #[test]
    fn parses_records() {
        let directory = InMemoryDirectory::from_lines(DATA);
        assert_eq!(directory.len(), 4);
        assert_eq!(directory.providers("").len(), 4);
        assert_eq!(
            directory.providers("de"),
            vec![("GENODE61LAH", "VOLKSBANK LAHR EG"), ("SOLADES1OFG", "SPARKASSE OFFENBURG/ORTENAU")]
        );
    }

    #[test]
    fn eight_and_eleven_character_forms_match() {
        let directory = InMemoryDirectory::from_lines(DATA);
        assert!(directory.is_known_bic("SNSBNL2A"));
        assert!(directory.is_known_bic("snsb nl2a xxx"));
        assert_eq!(directory.name_for_bic("BNPAFRPPXXX"), Some("BNP PARIBAS"));
        assert!(!directory.is_known_bic("GENODE61XXX"));
    }

    #[test]
    fn title_case_names() {
        assert_eq!(title_case("VOLKSBANK LAHR EG"), "Volksbank Lahr eG");
        assert_eq!(title_case("BNP PARIBAS"), "BNP Paribas");
        assert_eq!(title_case("BANK OF SCOTLAND PLC"), "Bank of Scotland plc");
        assert_eq!(title_case("RAIFFEISEN-BANK GMBH"), "Raiffeisen-Bank GmbH");
    }
}
