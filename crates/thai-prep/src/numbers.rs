//! Thai numeral reading for speech output

use crate::{Result, ThaiPrepError};
use once_cell::sync::Lazy;
use regex::Regex;

/// Thai digit names (0-9)
const DIGIT_NAMES: [&str; 10] = [
    "ศูนย์",
    "หนึ่ง",
    "สอง",
    "สาม",
    "สี่",
    "ห้า",
    "หก",
    "เจ็ด",
    "แปด",
    "เก้า",
];

/// Thai unit names within a six-digit group
const UNIT_NAMES: [&str; 6] = ["", "สิบ", "ร้อย", "พัน", "หมื่น", "แสน"];

/// Unit word stacked at each six-digit group boundary
const MILLION: &str = "ล้าน";

/// Spoken word for the decimal point
const POINT: &str = "จุด";

/// Spoken word for a leading minus sign
const MINUS: &str = "ลบ";

/// Maximal digit run: optional sign, digits, optional fractional part.
/// Thai digits (๐-๙) are accepted alongside ASCII digits.
static DIGIT_RUN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"-?[0-9๐-๙]+(?:\.[0-9๐-๙]+)?").unwrap());

/// Numeric value of an ASCII or Thai decimal digit
fn digit_value(c: char) -> Option<u64> {
    match c {
        '0'..='9' => Some(c as u64 - '0' as u64),
        '๐'..='๙' => Some(c as u64 - '๐' as u64),
        _ => None,
    }
}

/// Parse an integer digit string into its magnitude.
///
/// Returns `Ok(None)` when the value does not fit in `u64`; the caller then
/// falls back to digit-by-digit reading.
fn parse_magnitude(digits: &str, numeral: &str) -> Result<Option<u64>> {
    let mut value: u64 = 0;

    for c in digits.chars() {
        let d = digit_value(c).ok_or_else(|| ThaiPrepError::InvalidNumeral(numeral.to_string()))?;
        value = match value.checked_mul(10).and_then(|v| v.checked_add(d)) {
            Some(v) => v,
            None => return Ok(None),
        };
    }

    Ok(Some(value))
}

/// Read a digit string one digit at a time (zero reads as ศูนย์)
fn read_digits(digits: &str, numeral: &str) -> Result<String> {
    let mut reading = String::new();

    for c in digits.chars() {
        let d = digit_value(c).ok_or_else(|| ThaiPrepError::InvalidNumeral(numeral.to_string()))?;
        reading.push_str(DIGIT_NAMES[d as usize]);
    }

    Ok(reading)
}

/// Read a magnitude with Thai place-value naming.
///
/// Irregular forms apply within each six-digit group: a tens digit of 1 is
/// bare สิบ, a tens digit of 2 is ยี่สิบ, and a ones digit of 1 is เอ็ด when
/// the same group has a nonzero tens digit (11 → สิบเอ็ด, 101 → หนึ่งร้อยหนึ่ง).
fn read_magnitude(n: u64) -> String {
    if n == 0 {
        return DIGIT_NAMES[0].to_string();
    }

    let mut n = n;
    let mut result = String::new();
    let mut position = 0;

    while n > 0 {
        let digit = (n % 10) as usize;
        let unit_index = position % 6;

        if digit > 0 {
            let digit_word = if unit_index == 1 && digit == 2 {
                "ยี่"
            } else if unit_index == 1 && digit == 1 {
                ""
            } else if unit_index == 0 && digit == 1 && (n / 10) % 10 > 0 {
                "เอ็ด"
            } else {
                DIGIT_NAMES[digit]
            };

            result = format!("{}{}{}", digit_word, UNIT_NAMES[unit_index], result);
        }

        // Crossing into the next six-digit group stacks a ล้าน marker
        if unit_index == 5 && n >= 10 {
            result = format!("{}{}", MILLION, result);
        }

        n /= 10;
        position += 1;
    }

    result
}

/// Read a single numeral string as Thai words.
///
/// Supports integers and decimals with an optional leading minus sign, in
/// ASCII or Thai digits. Fraction digits are read one at a time after จุด.
/// Integer parts too large for the place-value range are read digit by digit.
///
/// # Examples
/// ```
/// use thai_prep::read_thai_number;
/// assert_eq!(read_thai_number("0").unwrap(), "ศูนย์");
/// assert_eq!(read_thai_number("123").unwrap(), "หนึ่งร้อยยี่สิบสาม");
/// assert_eq!(read_thai_number("12.5").unwrap(), "สิบสองจุดห้า");
/// ```
pub fn read_thai_number(num: &str) -> Result<String> {
    let (negative, body) = match num.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, num),
    };

    let (int_digits, frac_digits) = match body.split_once('.') {
        Some((int_part, frac_part)) => (int_part, Some(frac_part)),
        None => (body, None),
    };

    if int_digits.is_empty() {
        return Err(ThaiPrepError::InvalidNumeral(num.to_string()));
    }
    if let Some(frac) = frac_digits {
        if frac.is_empty() || frac.contains('.') {
            return Err(ThaiPrepError::InvalidNumeral(num.to_string()));
        }
    }

    let mut reading = String::new();

    if negative {
        reading.push_str(MINUS);
    }

    match parse_magnitude(int_digits, num)? {
        Some(value) => reading.push_str(&read_magnitude(value)),
        None => reading.push_str(&read_digits(int_digits, num)?),
    }

    if let Some(frac) = frac_digits {
        reading.push_str(POINT);
        reading.push_str(&read_digits(frac, num)?);
    }

    Ok(reading)
}

/// Replace every digit run in `text` with its Thai word reading.
///
/// Scans left to right for maximal runs of decimal digits with an optional
/// leading sign and an optional fractional part. Runs never overlap, and all
/// other characters pass through unchanged.
///
/// # Examples
/// ```
/// use thai_prep::num_to_thai;
/// assert_eq!(num_to_thai("ฉันมี 123 บาท").unwrap(), "ฉันมี หนึ่งร้อยยี่สิบสาม บาท");
/// ```
pub fn num_to_thai(text: &str) -> Result<String> {
    if !text.chars().any(|c| digit_value(c).is_some()) {
        return Ok(text.to_string());
    }

    let mut result = String::with_capacity(text.len());
    let mut last_end = 0;

    for run in DIGIT_RUN.find_iter(text) {
        result.push_str(&text[last_end..run.start()]);
        result.push_str(&read_thai_number(run.as_str())?);
        last_end = run.end();
    }
    result.push_str(&text[last_end..]);

    Ok(result)
}
