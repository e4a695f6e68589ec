use thiserror::Error;

/// Why a token failed to parse as a base-autodetected integer literal
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum LiteralError {
    #[error("empty token")]
    Empty,
    #[error("no digits after sign or base prefix")]
    MissingDigits,
    #[error("invalid digit for base")]
    InvalidDigit,
    #[error("decimal literal with leading zero")]
    LeadingZero,
    #[error("value out of range for 64-bit integer")]
    Overflow,
}

/// Parse an integer literal with base autodetection.
///
/// Accepts an optional `+`/`-` sign followed by `0x`/`0X` hexadecimal,
/// `0o`/`0O` octal, `0b`/`0B` binary, or plain decimal digits. A run of
/// zeros parses as zero; any other decimal literal starting with `0` is
/// rejected, so a base is never guessed silently.
///
/// # Errors
///
/// Returns a `LiteralError` describing the first malformed piece of the
/// token.
pub fn parse_auto(token: &str) -> Result<i64, LiteralError> {
    if token.is_empty() {
        return Err(LiteralError::Empty);
    }

    let (negative, rest) = match token.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, token.strip_prefix('+').unwrap_or(token)),
    };

    if rest.is_empty() {
        return Err(LiteralError::MissingDigits);
    }

    let (radix, digits) = if let Some(d) = strip_radix_prefix(rest, "0x", "0X") {
        (16, d)
    } else if let Some(d) = strip_radix_prefix(rest, "0o", "0O") {
        (8, d)
    } else if let Some(d) = strip_radix_prefix(rest, "0b", "0B") {
        (2, d)
    } else {
        if rest.starts_with('0') && rest.bytes().any(|b| b != b'0') {
            return Err(LiteralError::LeadingZero);
        }
        (10, rest)
    };

    if digits.is_empty() {
        return Err(LiteralError::MissingDigits);
    }

    let mut value: i64 = 0;
    for ch in digits.chars() {
        let digit = ch.to_digit(radix).ok_or(LiteralError::InvalidDigit)?;
        value = value
            .checked_mul(i64::from(radix))
            .and_then(|v| v.checked_add(i64::from(digit)))
            .ok_or(LiteralError::Overflow)?;
    }

    Ok(if negative { -value } else { value })
}

fn strip_radix_prefix<'a>(rest: &'a str, lower: &str, upper: &str) -> Option<&'a str> {
    rest.strip_prefix(lower)
        .or_else(|| rest.strip_prefix(upper))
}
