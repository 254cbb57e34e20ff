use sepakit::core::*;
use sepakit::validation::{CountryRule, Registry, Validator};

const IBANS: &[&str] = &[
    "DE11682900000009215808",
    "CH1804835029882981000",
    "FR1420041010050500013M02606",
    "AT611904300234573201",
    "LU280019400644750000",
    "BE68539007547034",
    "GB29NWBK60161331926819",
    "EE382200221020145685",
    "IT60X0542811101000000123456",
    "ES9121000418450200051332",
];

const CIS: &[&str] = &[
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
];

fn with_check_digits(id: &str, digits: u32) -> String {
    format!("{}{digits:02}{}", &id[..2], &id[4..])
}

fn iban(v: &Validator, s: &str) -> Result<(), IbanError> {
    v.validate_iban(&mut s.to_string())
}

fn bic(v: &Validator, s: &str) -> Result<(), BicError> {
    v.validate_bic(&mut s.to_string())
}

fn ci(v: &Validator, s: &str) -> Result<(), CiError> {
    v.validate_ci(&mut s.to_string())
}

// --- IBAN ---

#[test]
fn known_ibans_are_valid() {
    let v = Validator::with_defaults();
    for s in IBANS {
        assert_eq!(iban(&v, s), Ok(()), "{s}");
    }
}

#[test]
fn any_other_check_digits_fail() {
    let v = Validator::with_defaults();
    for s in IBANS {
        let actual: u32 = s[2..4].parse().unwrap();
        for digits in (0..100).filter(|d| *d != actual) {
            let mutated = with_check_digits(s, digits);
            assert_eq!(iban(&v, &mutated), Err(IbanError::Checksum), "{mutated}");
        }
    }
}

#[test]
fn truncated_ibans_have_invalid_length() {
    let v = Validator::with_defaults();
    for s in IBANS {
        assert_eq!(iban(&v, &s[..s.len() - 1]), Err(IbanError::InvalidLength), "{s}");
    }
}

#[test]
fn foreign_country_code_is_rejected_by_rule() {
    for s in IBANS {
        let rule = CountryRule::builtin(&s[..2]).unwrap();
        let other = if s.starts_with("AT") { "DE" } else { "AT" };
        let swapped = format!("{other}{}", &s[2..]);
        assert_eq!(rule.validate_iban(&swapped), Err(IbanError::InvalidCountry), "{swapped}");
    }
}

#[test]
fn unsupported_country() {
    let v = Validator::with_defaults();
    assert_eq!(iban(&v, "XX1168290000000921580 8"), Err(IbanError::InvalidCountry));
    assert_eq!(iban(&v, "NL45SNSB0787754390"), Err(IbanError::InvalidCountry));
}

#[test]
fn samples_from_the_field() {
    let v = Validator::with_defaults();
    assert_eq!(iban(&v, "DE71 6645 0050 0070 1435 59"), Ok(()));
    assert_eq!(iban(&v, "DE71664600500070143559"), Err(IbanError::Checksum));
    assert_eq!(iban(&v, "DE89 3704 0044 0532 0130 00"), Ok(()));
    assert_eq!(iban(&v, "DE8937040044053201300"), Err(IbanError::InvalidLength));
    assert_eq!(iban(&v, "DE89370400440532O13000"), Err(IbanError::InvalidFormat));
}

// --- BIC ---

#[test]
fn bic_checks() {
    let v = Validator::with_defaults();
    assert_eq!(bic(&v, "GENODE61LAH"), Ok(()));
    assert_eq!(bic(&v, "genode61"), Ok(()));
    assert_eq!(bic(&v, "GENOBE61LAH"), Ok(()));
    assert_eq!(bic(&v, "GENOXY61LAH"), Err(BicError::InvalidCountry));
    assert_eq!(bic(&v, "GEN0DE61LAH"), Err(BicError::InvalidFormat));
    assert_eq!(bic(&v, "GENODE6"), Err(BicError::InvalidFormat));
}

#[test]
fn bic_country_is_checked_against_rule() {
    let de = CountryRule::builtin("DE").unwrap();
    assert_eq!(de.validate_bic("GENOBE61LAH"), Err(BicError::InvalidCountry));
}

#[test]
fn dutch_bic_after_registration() {
    let mut v = Validator::with_defaults();
    assert_eq!(bic(&v, "SNSBNL2A"), Err(BicError::InvalidCountry));
    v.registry_mut().register_builtin("NL").unwrap();
    let mut s = "SNSBNL2A".to_string();
    assert_eq!(v.validate_bic(&mut s), Ok(()));
    assert_eq!(s, "SNSBNL2AXXX");
}

// --- CI ---

#[test]
fn known_cis_are_valid() {
    let v = Validator::with_defaults();
    for s in CIS {
        assert_eq!(ci(&v, s), Ok(()), "{s}");
    }
}

#[test]
fn any_other_ci_check_digits_fail() {
    let v = Validator::with_defaults();
    for s in CIS {
        let actual: u32 = s[2..4].parse().unwrap();
        for digits in (0..100).filter(|d| *d != actual) {
            let mutated = with_check_digits(s, digits);
            assert_eq!(ci(&v, &mutated), Err(CiError::Checksum), "{mutated}");
        }
    }
}

#[test]
fn foreign_country_code_in_ci_is_rejected_by_rule() {
    for s in CIS {
        let rule = CountryRule::builtin(&s[..2]).unwrap();
        let other = if s.starts_with("AT") { "DE" } else { "AT" };
        let swapped = format!("{other}{}", &s[2..]);
        assert_eq!(rule.validate_ci(&swapped), Err(CiError::InvalidCountry), "{swapped}");
    }
}

#[test]
fn ci_business_code_is_free() {
    let v = Validator::with_defaults();
    for s in CIS {
        let replaced = format!("{}ABC{}", &s[..4], &s[7..]);
        assert_eq!(ci(&v, &replaced), Ok(()), "{replaced}");
    }
}

#[test]
fn truncated_cis_have_invalid_length() {
    let v = Validator::with_defaults();
    for s in CIS {
        assert_eq!(ci(&v, &s[..s.len() - 1]), Err(CiError::InvalidLength), "{s}");
    }
}

#[test]
fn belgian_ci_lengths() {
    let v = Validator::with_defaults();
    assert_eq!(ci(&v, "BE68ZZZ0123456789"), Ok(()));
    assert_eq!(ci(&v, "BE69ZZZ050D000000008"), Ok(()));
    assert_eq!(ci(&v, "BE68ZZZ01234567890"), Err(CiError::InvalidLength));
    assert_eq!(ci(&v, "BE68ZZZ012345678"), Err(CiError::InvalidLength));
    assert_eq!(ci(&v, "BE69ZZZ050X000000008"), Err(CiError::InvalidFormat));
}

#[test]
fn german_ci_samples() {
    let v = Validator::with_defaults();
    assert_eq!(ci(&v, "DE79 ZZZ 01234567890"), Ok(()));
    assert_eq!(ci(&v, "DE79 ZZZ 0123456789x"), Err(CiError::InvalidFormat));
    assert_eq!(ci(&v, "DE79ZZZ11234567890"), Err(CiError::InvalidFormat));
}

// --- Validation level ---

#[test]
fn ignore_missing_country_applies_to_every_identifier() {
    let strict = Validator::with_defaults();
    assert_eq!(bic(&strict, "SNSBNL2A"), Err(BicError::InvalidCountry));
    assert_eq!(ci(&strict, "NL97ZZZ123456780001"), Err(CiError::InvalidCountry));

    let v = Validator::with_defaults().with_level(ValidationLevel::IGNORE_MISSING_COUNTRY);
    assert_eq!(iban(&v, "NL45SNSB0787754390"), Ok(()));
    assert_eq!(bic(&v, "SNSBNL2A"), Ok(()));
    assert_eq!(ci(&v, "NL97ZZZ123456780001"), Ok(()));
    // registered countries are still checked
    assert_eq!(bic(&v, "GEN0DE61LAH"), Err(BicError::InvalidFormat));
    assert_eq!(ci(&v, "DE71ZZZ01234567890"), Err(CiError::Checksum));
}

#[test]
fn skip_all_accepts_everything_and_normalizes() {
    let v = Validator::with_defaults().with_level(ValidationLevel::NONE);
    let mut s = " de21 6829 0000 0009 2158 08 ".to_string();
    assert_eq!(v.validate_iban(&mut s), Ok(()));
    assert_eq!(s, "DE21682900000009215808");

    let mut s = "gen0de61".to_string();
    assert_eq!(v.validate_bic(&mut s), Ok(()));
    assert_eq!(s, "GEN0DE61XXX");

    let mut s = "be68 zzz 01234567890".to_string();
    assert_eq!(v.validate_ci(&mut s), Ok(()));
    assert_eq!(s, "BE68ZZZ01234567890");
}

#[test]
fn level_can_be_changed() {
    let mut v = Validator::with_defaults();
    assert_eq!(iban(&v, "DE21682900000009215808"), Err(IbanError::Checksum));
    v.set_level(ValidationLevel::NO_IBAN | ValidationLevel::NO_CI);
    assert!(v.skips(ValidationLevel::NO_IBAN));
    assert!(!v.skips(ValidationLevel::NO_BIC));
    assert_eq!(iban(&v, "DE21682900000009215808"), Ok(()));
    assert_eq!(ci(&v, "DE00"), Ok(()));
    assert_eq!(bic(&v, "GEN0DE61LAH"), Err(BicError::InvalidFormat));
}

// --- Registry ---

#[test]
fn registry_reset_and_repopulate() {
    let mut registry = Registry::with_defaults();
    registry.clear();
    assert!(registry.is_empty());
    registry.register_builtin("DE").unwrap();
    registry.register_builtin("NL").unwrap();
    let v = Validator::new(registry);
    assert_eq!(iban(&v, "NL45SNSB0787754390"), Ok(()));
    assert_eq!(iban(&v, "AT611904300234573201"), Err(IbanError::InvalidCountry));
}

#[test]
fn duplicate_registration_is_a_config_error() {
    let mut registry = Registry::with_defaults();
    let err = registry.register(CountryRule::builtin("FR").unwrap()).unwrap_err();
    assert_eq!(err.to_string(), "validation for country FR already defined");
    let err: SepaError = err.into();
    assert!(matches!(err, SepaError::Config(ConfigError::DuplicateCountry(_))));
}

#[test]
#[should_panic(expected = "populated country registry")]
fn validating_without_rules_panics() {
    let v = Validator::new(Registry::new());
    let _ = ci(&v, "DE79ZZZ01234567890");
}

// --- Messages ---

#[test]
fn error_codes_render_through_catalog() {
    let v = Validator::with_defaults();
    let catalog = MessageCatalog::english();
    let err = iban(&v, "DE21682900000009215808").unwrap_err();
    insta::assert_snapshot!(catalog.identifier_message(err.code()), @"Invalid IBAN checksum!");
    let err = ci(&v, "BE68ZZZ01234567890").unwrap_err();
    insta::assert_snapshot!(catalog.identifier_message(err.code()), @"Invalid length of the CI!");
    let german = MessageCatalog::german();
    insta::assert_snapshot!(german.identifier_message(err.code()), @"Ungültige Länge der Gläubiger-ID!");
}
