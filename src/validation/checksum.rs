//! ISO 7064 MOD 97-10 check digits for IBAN and Creditor Identifier.
//!
//! Bodies are arbitrarily long decimal numbers (a British CI body has 45
//! digits after letter substitution), well past `u128`. The remainder is
//! computed exactly by reducing modulo 97 one digit at a time, so no
//! intermediate value ever exceeds `97 * 10 + 9`.

/// Numeric value of a letter in the check-digit alphabet: `A` = 10 … `Z` = 35.
pub fn letter_value(c: char) -> Option<u32> {
    c.is_ascii_uppercase().then(|| c as u32 - 'A' as u32 + 10)
}

/// Replace every uppercase letter with its two-digit value. Other characters are kept.
pub fn substitute_letters(s: &str) -> String {
    let mut out = String::with_capacity(s.len() * 2);
    for c in s.chars() {
        match letter_value(c) {
            Some(v) => out.push_str(&v.to_string()),
            None => out.push(c),
        }
    }
    out
}

fn digit(c: char) -> u32 {
    match c.to_digit(10) {
        Some(d) => d,
        None => panic!("checksum input must be numeric, got {c:?}"),
    }
}

/// `digits mod 97`, for a decimal number of any length.
pub fn mod97(digits: &str) -> u32 {
    digits.chars().fold(0, |rem, c| (rem * 10 + digit(c)) % 97)
}

/// Check digits for `digits` issued under `country`.
///
/// The country trailer (letter values of the country code followed by `00`)
/// is appended to the right of the body, the remainder modulo 97 is taken and
/// subtracted from 98. The result is always two digits.
///
/// # Panics
///
/// If `digits` contains anything but ASCII digits or `country` is not two
/// uppercase letters. Callers substitute letters and check the format first.
pub fn mod97_check_digits(digits: &str, country: &str) -> String {
    let trailer: String = country
        .chars()
        .map(|c| match letter_value(c) {
            Some(v) => v.to_string(),
            None => panic!("country code must be uppercase letters, got {country:?}"),
        })
        .collect();
    assert_eq!(trailer.len(), 4, "country code must have two letters, got {country:?}");

    let body = mod97(digits);
    let rem = mod97(&format!("{trailer}00")) + body * pow10_mod97(6);
    format!("{:02}", 98 - rem % 97)
}

/// `10^exp mod 97`.
fn pow10_mod97(exp: u32) -> u32 {
    (0..exp).fold(1, |acc, _| acc * 10 % 97)
}
