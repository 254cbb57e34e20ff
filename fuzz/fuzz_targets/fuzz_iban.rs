#![no_main]

use libfuzzer_sys::fuzz_target;
use sepakit::validation::Validator;

fuzz_target!(|data: &[u8]| {
    if let Ok(s) = std::str::from_utf8(data) {
        // Errors are fine, panics are bugs.
        let validator = Validator::with_defaults();
        let mut input = s.to_string();
        let _ = validator.validate_iban(&mut input);
    }
});
