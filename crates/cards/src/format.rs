//! Keystroke masking for card fields.
//!
//! Every function here is pure: it receives the raw value of the input after a keystroke or a
//! paste and returns the value to display.

use crate::{max_security_code_length, CardBrand};

/// Characters per group in a displayed card number.
pub const CARD_NUMBER_GROUP_SIZE: usize = 4;

/// Longest displayed card number, 16 digits and 3 separators.
pub const MAX_CARD_NUMBER_DISPLAY_LENGTH: usize = 19;

const CARD_NUMBER_SEPARATOR: char = ' ';
const EXPIRY_SEPARATOR: char = '/';
const EXPIRY_MONTH_LENGTH: usize = 2;

/// Byte order mark, pasted along with numbers copied from some documents.
const ZERO_WIDTH_NO_BREAK_SPACE: char = '\u{FEFF}';
const NEXT_LINE: char = '\u{85}';

/// Whitespace as the browser's `\s` class knows it: Unicode white space plus the byte order
/// mark, minus NEL.
fn is_input_whitespace(c: char) -> bool {
    c == ZERO_WIDTH_NO_BREAK_SPACE || (c.is_whitespace() && c != NEXT_LINE)
}

/// Remove every whitespace character from a card number.
pub fn clean_card_number(value: &str) -> String {
    value.chars().filter(|&c| !is_input_whitespace(c)).collect()
}

/// Group a card number in blocks of four separated by a single space.
///
/// Whitespace is stripped first and the result is cut at 19 characters. Other characters are
/// kept as typed, so pasted letters are masked rather than rejected here.
pub fn format_card_number(value: &str) -> String {
    let cleaned = clean_card_number(value);

    let mut formatted = String::with_capacity(MAX_CARD_NUMBER_DISPLAY_LENGTH);
    for (index, c) in cleaned.chars().enumerate() {
        if index > 0 && index % CARD_NUMBER_GROUP_SIZE == 0 {
            formatted.push(CARD_NUMBER_SEPARATOR);
        }
        formatted.push(c);
    }

    formatted
        .chars()
        .take(MAX_CARD_NUMBER_DISPLAY_LENGTH)
        .collect()
}

/// Mask an expiry date as `MM/YY`.
///
/// Non digits are dropped. Once two digits are present a slash follows them, the remaining
/// digits are appended without further truncation.
pub fn format_expiry_date(value: &str) -> String {
    let digits = only_digits(value);

    if digits.len() < EXPIRY_MONTH_LENGTH {
        return digits;
    }

    let (month, rest) = digits.split_at(EXPIRY_MONTH_LENGTH);
    format!("{month}{EXPIRY_SEPARATOR}{rest}")
}

/// Keep the digits of a security code, capped at 4 for Amex and 3 otherwise.
pub fn format_cvv(value: &str, brand: Option<CardBrand>) -> String {
    only_digits(value)
        .chars()
        .take(max_security_code_length(brand))
        .collect()
}

fn only_digits(value: &str) -> String {
    value.chars().filter(char::is_ascii_digit).collect()
}
