//! Character-set hygiene for free-text fields of a pain message.

use rust_decimal::{Decimal, RoundingStrategy};

/// Field class controlling the allowed character set and maximum length.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextKind {
    /// Identifier, max 35 chars: letters, digits, blank and `.,+-/`.
    Id1,
    /// Like [`TextKind::Id1`] but without blank.
    Id2,
    Max35,
    Max70,
    Max140,
    Max1025,
}

impl TextKind {
    pub fn max_len(self) -> usize {
        match self {
            Self::Id1 | Self::Id2 | Self::Max35 => 35,
            Self::Max70 => 70,
            Self::Max140 => 140,
            Self::Max1025 => 1025,
        }
    }

    fn allows(self, c: char) -> bool {
        if c.is_ascii_alphanumeric() {
            return true;
        }
        match self {
            Self::Id1 => matches!(c, ' ' | '.' | ',' | '+' | '-' | '/'),
            Self::Id2 => matches!(c, '.' | ',' | '+' | '-' | '/'),
            _ => matches!(
                c,
                ' ' | '.' | ',' | '-' | '/' | '+' | '(' | ')' | ':' | '?'
            ),
        }
    }

    /// Identifiers drop disallowed characters, text fields blank them.
    fn replacement(self) -> Option<char> {
        match self {
            Self::Id1 | Self::Id2 => None,
            _ => Some(' '),
        }
    }
}

static SPECIAL_CHARS: &[(char, &str)] = &[
    ('á', "a"), ('à', "a"), ('ä', "ae"), ('â', "a"), ('ã', "a"), ('å', "a"), ('æ', "ae"),
    ('Á', "A"), ('À', "A"), ('Ä', "Ae"), ('Â', "A"), ('Ã', "A"), ('Å', "A"), ('Æ', "AE"),
    ('ç', "c"), ('Ç', "C"),
    ('é', "e"), ('è', "e"), ('ê', "e"), ('ë', "e"), ('É', "E"), ('È', "E"), ('Ê', "E"), ('Ë', "E"),
    ('ì', "i"), ('î', "i"), ('ï', "i"), ('Ì', "I"), ('Í', "I"), ('Î', "I"), ('Ï', "I"),
    ('ñ', "n"), ('Ñ', "N"),
    ('ó', "o"), ('ò', "o"), ('ö', "oe"), ('ô', "o"), ('õ', "o"), ('ø', "o"), ('œ', "oe"),
    ('Ó', "O"), ('Ò', "O"), ('Ö', "Oe"), ('Ô', "O"), ('Õ', "O"), ('Ø', "O"), ('Œ', "OE"),
    ('ß', "ss"), ('š', "s"), ('Š', "S"),
    ('ú', "u"), ('ù', "u"), ('ü', "ue"), ('û', "u"),
    ('Ú', "U"), ('Ù', "U"), ('Ü', "Ue"), ('Û', "U"),
    ('ý', "y"), ('ÿ', "y"), ('Ý', "Y"), ('Ÿ', "Y"),
    ('ž', "z"), ('Ž', "Z"),
    ('[', "("), (']', ")"), ('{', "("), ('}', ")"),
    ('_', "-"), ('@', "(at)"), ('€', "EUR"),
];

/// Replace umlauts, accents and a few symbols with their nearest SEPA-safe equivalent.
pub fn replace_special_chars(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match SPECIAL_CHARS.iter().find(|(special, _)| *special == c) {
            Some((_, replacement)) => out.push_str(replacement),
            None => out.push(c),
        }
    }
    out
}

/// Make `s` a valid SEPA string of the given kind.
///
/// Special characters are transliterated first, then anything outside the
/// allowed set is blanked (text) or dropped (identifiers), and the result is
/// cut to the maximum length.
pub fn valid_string(s: &str, kind: TextKind) -> String {
    replace_special_chars(s)
        .chars()
        .filter_map(|c| {
            if kind.allows(c) {
                Some(c)
            } else {
                kind.replacement()
            }
        })
        .take(kind.max_len())
        .collect()
}

/// Format an amount with exactly two decimals, e.g. `310.12`.
pub fn format_amount(value: Decimal) -> String {
    let rounded = value.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
    format!("{rounded:.2}")
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn umlauts_transliterated() {
        assert_eq!(replace_special_chars("äöüßÄÖÜ"), "aeoeuessAeOeUe");
        assert_eq!(replace_special_chars("Crème brûlée"), "Creme brulee");
        assert_eq!(replace_special_chars("a_b@c [x] 5€"), "a-b(at)c (x) 5EUR");
    }

    #[test]
    fn max_kinds_truncate() {
        assert_eq!(
            valid_string("abcdefghijklmnopqrstuvwxyz12345678901234", TextKind::Max35),
            "abcdefghijklmnopqrstuvwxyz123456789"
        );
        assert_eq!(valid_string(&"x".repeat(200), TextKind::Max140).len(), 140);
    }

    #[test]
    fn text_blanks_invalid_chars() {
        assert_eq!(valid_string("50% off & more", TextKind::Max70), "50  off   more");
        assert_eq!(valid_string("Müller {GmbH}", TextKind::Max70), "Mueller (GmbH)");
    }

    #[test]
    fn identifiers_drop_invalid_chars() {
        assert_eq!(valid_string("ID 08/15 (x)", TextKind::Id1), "ID 08/15 x");
        assert_eq!(valid_string("ID 08/15 (x)", TextKind::Id2), "ID08/15x");
        assert_eq!(valid_string("ID-0815", TextKind::Id2), "ID-0815");
    }

    #[test]
    fn amounts_have_two_decimals() {
        assert_eq!(format_amount(dec!(310.12)), "310.12");
        assert_eq!(format_amount(dec!(100)), "100.00");
        assert_eq!(format_amount(dec!(0.5)), "0.50");
        assert_eq!(format_amount(dec!(1.005)), "1.01");
        assert_eq!(format_amount(Decimal::ZERO), "0.00");
    }
}
