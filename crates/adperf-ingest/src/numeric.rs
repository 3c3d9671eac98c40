//! Lenient conversion of locale-formatted numeric cells.
//!
//! Exports carry numbers as text with thousands separators (`"2,740.50"`).
//! Cells that cannot be read as a number resolve to zero instead of failing
//! the upload.

/// Thousands separator stripped before parsing.
const THOUSANDS_SEPARATOR: char = ',';

/// Converts a numeric cell to `f64`.
///
/// Separators are removed, then the longest leading decimal number is read
/// (`"12abc"` reads as 12). Empty, non-numeric and non-finite values give 0.
pub fn parse_number(value: &str) -> f64 {
    let cleaned = strip_separators(value);
    let prefix = decimal_prefix(&cleaned);
    match prefix.parse::<f64>() {
        Ok(parsed) if parsed.is_finite() => parsed,
        _ => 0.0,
    }
}

/// Converts a numeric cell to an integer, truncating any fraction.
///
/// Only the leading sign and digits are read (`"1,234.9"` reads as 1234).
pub fn parse_integer(value: &str) -> i64 {
    let cleaned = strip_separators(value);
    let prefix = integer_prefix(&cleaned);
    match prefix.parse::<f64>() {
        // Saturating cast keeps absurdly long digit runs in range.
        Ok(parsed) if parsed.is_finite() => parsed.trunc() as i64,
        _ => 0,
    }
}

/// Same as [`parse_number`] for an optional cell.
pub fn parse_number_cell(value: Option<&str>) -> f64 {
    value.map_or(0.0, parse_number)
}

/// Same as [`parse_integer`] for an optional cell.
pub fn parse_integer_cell(value: Option<&str>) -> i64 {
    value.map_or(0, parse_integer)
}

fn strip_separators(value: &str) -> String {
    value
        .trim()
        .chars()
        .filter(|ch| *ch != THOUSANDS_SEPARATOR)
        .collect()
}

fn sign_len(bytes: &[u8]) -> usize {
    usize::from(matches!(bytes.first(), Some(b'+' | b'-')))
}

fn digits_from(bytes: &[u8], start: usize) -> usize {
    bytes[start..]
        .iter()
        .take_while(|byte| byte.is_ascii_digit())
        .count()
}

fn integer_prefix(value: &str) -> &str {
    let bytes = value.as_bytes();
    let sign = sign_len(bytes);
    let digits = digits_from(bytes, sign);
    if digits == 0 {
        return "";
    }
    &value[..sign + digits]
}

fn decimal_prefix(value: &str) -> &str {
    let bytes = value.as_bytes();
    let mut end = sign_len(bytes);
    let int_digits = digits_from(bytes, end);
    end += int_digits;

    let mut frac_digits = 0;
    if bytes.get(end) == Some(&b'.') {
        frac_digits = digits_from(bytes, end + 1);
        if frac_digits > 0 {
            end += 1 + frac_digits;
        }
    }
    if int_digits == 0 && frac_digits == 0 {
        return "";
    }

    if matches!(bytes.get(end), Some(b'e' | b'E')) {
        let exp_sign = sign_len(&bytes[end + 1..]);
        let exp_digits = digits_from(bytes, end + 1 + exp_sign);
        if exp_digits > 0 {
            end += 1 + exp_sign + exp_digits;
        }
    }
    &value[..end]
}
