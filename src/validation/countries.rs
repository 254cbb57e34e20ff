//! Built-in country rules.
//!
//! Grammars describe the characters after the two-letter country code:
//! two check digits, then the national part. For Creditor Identifiers the
//! national part starts with the three-character business code.

use super::rule::{CharClass::*, CiFormat, CountryRule, IdentifierFormat, Segment, Segment::*};

/// Countries a [`Registry::with_defaults`](super::Registry::with_defaults) starts with.
pub const DEFAULT_COUNTRIES: [&str; 10] = ["DE", "CH", "FR", "AT", "LU", "BE", "GB", "EE", "IT", "ES"];

const fn fmt(length: usize, grammar: &'static [Segment], alphanumeric: bool) -> IdentifierFormat {
    IdentifierFormat::new(length, grammar, alphanumeric)
}

/// Every rule the crate knows, defaults first.
pub(crate) const RULES: &[CountryRule] = &[
    CountryRule::new(
        "DE",
        fmt(22, &[Run(Numeric, 20)], false),
        CiFormat::Fixed(fmt(
            18,
            &[Run(Numeric, 2), Run(AlphaNumeric, 3), Literal('0'), Run(Numeric, 10)],
            false,
        )),
    ),
    CountryRule::new(
        "CH",
        fmt(21, &[Run(Numeric, 19)], false),
        CiFormat::Fixed(fmt(18, &[Run(Numeric, 2), Run(AlphaNumeric, 3), Run(Numeric, 11)], false)),
    ),
    CountryRule::new(
        "FR",
        fmt(27, &[Run(Numeric, 12), Run(AlphaNumeric, 11), Run(Numeric, 2)], true),
        CiFormat::Fixed(fmt(13, &[Run(Numeric, 2), Run(AlphaNumeric, 3), Run(Hex, 6)], true)),
    ),
    CountryRule::new(
        "AT",
        fmt(20, &[Run(Numeric, 18)], false),
        CiFormat::Fixed(fmt(18, &[Run(Numeric, 2), Run(AlphaNumeric, 3), Run(Numeric, 11)], false)),
    ),
    CountryRule::new(
        "LU",
        fmt(20, &[Run(Numeric, 18)], false),
        CiFormat::Fixed(fmt(
            26,
            &[Run(Numeric, 2), Run(AlphaNumeric, 3), Literal('0'), Run(AlphaNumeric, 18)],
            true,
        )),
    ),
    CountryRule::new(
        "BE",
        fmt(16, &[Run(Numeric, 14)], false),
        // enterprise number (10 digits) or the older 'D' form
        CiFormat::ByLength(&[
            fmt(17, &[Run(Numeric, 2), Run(AlphaNumeric, 3), Run(Numeric, 10)], false),
            fmt(
                20,
                &[Run(Numeric, 2), Run(AlphaNumeric, 3), Run(Numeric, 3), Literal('D'), Run(Numeric, 9)],
                true,
            ),
        ]),
    ),
    CountryRule::new(
        "GB",
        fmt(22, &[Run(Numeric, 2), Run(Alpha, 4), Run(Numeric, 14)], true),
        CiFormat::Fixed(fmt(
            35,
            &[
                Run(Numeric, 2),
                Run(AlphaNumeric, 3),
                Run(Alpha, 7),
                Run(Numeric, 6),
                Run(AlphaNumeric, 15),
            ],
            true,
        )),
    ),
    CountryRule::new(
        "EE",
        fmt(20, &[Run(Numeric, 18)], false),
        CiFormat::Fixed(fmt(
            20,
            &[Run(Numeric, 2), Run(AlphaNumeric, 3), Run(Alpha, 2), Run(Numeric, 11)],
            true,
        )),
    ),
    CountryRule::new(
        "IT",
        fmt(27, &[Run(Numeric, 2), Run(AlphaNumeric, 6), Run(Numeric, 17)], true),
        CiFormat::Fixed(fmt(23, &[Run(Numeric, 2), Run(AlphaNumeric, 19)], true)),
    ),
    CountryRule::new(
        "ES",
        fmt(24, &[Run(Numeric, 22)], false),
        // NIF: optional leading letter, 7 digits, trailing control character
        CiFormat::Fixed(fmt(
            16,
            &[Run(Numeric, 2), Run(AlphaNumeric, 4), Run(Numeric, 7), Run(AlphaNumeric, 1)],
            true,
        )),
    ),
    CountryRule::new(
        "NL",
        fmt(18, &[Run(Numeric, 2), Run(AlphaNumeric, 4), Run(Numeric, 10)], true),
        CiFormat::Fixed(fmt(19, &[Run(Numeric, 2), Run(AlphaNumeric, 3), Run(Numeric, 12)], true)),
    ),
];

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{CiError, IbanError};

    fn rule(code: &str) -> CountryRule {
        CountryRule::builtin(code).unwrap()
    }

    #[test]
    fn defaults_have_rules() {
        for code in DEFAULT_COUNTRIES {
            assert_eq!(rule(code).country(), code);
        }
    }

    #[test]
    fn grammars_agree_with_lengths() {
        for r in RULES {
            assert_eq!(r.iban_format().grammar.len() + 2, r.iban_format().length, "{}", r.country());
            let formats: &[IdentifierFormat] = match r.ci_format() {
                CiFormat::Fixed(f) => std::slice::from_ref(f),
                CiFormat::ByLength(fs) => fs,
            };
            for f in formats {
                assert_eq!(f.grammar.len() + 2, f.length, "{}", r.country());
            }
        }
    }

    #[test]
    fn valid_ibans() {
        for iban in [
            "DE11682900000009215808",
            "DE71664500500070143559",
            "DE89370400440532013000",
            "CH1804835029882981000",
            "FR1420041010050500013M02606",
            "AT611904300234573201",
            "LU280019400644750000",
            "BE68539007547034",
            "GB29NWBK60161331926819",
            "EE382200221020145685",
            "IT60X0542811101000000123456",
            "ES9121000418450200051332",
            "NL45SNSB0787754390",
        ] {
            assert_eq!(rule(&iban[..2]).validate_iban(iban), Ok(()), "{iban}");
        }
    }

    #[test]
    fn valid_creditor_ids() {
        for ci in [
            "DE79ZZZ01234567890",
            "DE98ZZZ09999999999",
            "CH51ZZZ12345678901",
            "FR72ZZZ123456",
            "AT61ZZZ01234567890",
            "LU02ZZZ0ABCDEFGHIJKL123488",
            "BE68ZZZ0123456789",
            "BE69ZZZ050D000000008",
            "GB26ZZZSDDBKEN000000012345678901234",
            "EE49ZZZEE00012345678",
            "IT66ZZZA1B2C3D4E5F6G7H8",
            "ES50ZZZM23456789",
            "ES04ZZZ52840790N",
            "ES59ZZZX1234567L",
            "NL21ZZZ123456789012",
        ] {
            assert_eq!(rule(&ci[..2]).validate_ci(ci), Ok(()), "{ci}");
        }
    }

    #[test]
    fn belgian_ci_by_length() {
        assert_eq!(rule("BE").validate_ci("BE68ZZZ01234567890"), Err(CiError::InvalidLength));
    }

    #[test]
    fn french_ci_is_hex() {
        assert_eq!(rule("FR").validate_ci("FR72ZZZ12345G"), Err(CiError::InvalidFormat));
    }

    #[test]
    fn checksum_failures() {
        assert_eq!(rule("DE").validate_iban("DE71664600500070143559"), Err(IbanError::Checksum));
        assert_eq!(
            rule("DE").expected_iban_check_digits("DE21682900000009215808").as_deref(),
            Some("11")
        );
    }
}
