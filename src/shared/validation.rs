use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    /// Regex for validating phone numbers
    /// Digits with optional leading "+", spaces, dashes and dots, at least 8 characters
    /// - Valid: "+237 690 00 00 00", "690000000", "06-90-00-00"
    /// - Invalid: "12345", "phone", "+237 abc 000"
    pub static ref PHONE_REGEX: Regex = Regex::new(r"^\+?[0-9][0-9 .\-]{6,}[0-9]$").unwrap();
}
