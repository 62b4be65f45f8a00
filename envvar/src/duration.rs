//! Duration literals such as `300ms`, `1h30m` or `1.5h`.

use std::time::Duration;

const NANOSECOND: u64 = 1;
const MICROSECOND: u64 = 1_000 * NANOSECOND;
const MILLISECOND: u64 = 1_000 * MICROSECOND;
const SECOND: u64 = 1_000 * MILLISECOND;
const MINUTE: u64 = 60 * SECOND;
const HOUR: u64 = 60 * MINUTE;

/// Errors produced by [`parse_duration`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DurationError {
    #[error("invalid duration {0:?}")]
    Invalid(String),

    #[error("missing unit in duration {0:?}")]
    MissingUnit(String),

    #[error("unknown unit {unit:?} in duration {literal:?}")]
    UnknownUnit { unit: String, literal: String },

    #[error("duration {0:?} overflows")]
    Overflow(String),

    #[error("negative duration {0:?} is not representable")]
    Negative(String),
}

fn unit_nanos(unit: &str) -> Option<u64> {
    let nanos = match unit {
        "ns" => NANOSECOND,
        // U+00B5 micro sign and U+03BC greek small letter mu
        "us" | "\u{b5}s" | "\u{3bc}s" => MICROSECOND,
        "ms" => MILLISECOND,
        "s" => SECOND,
        "m" => MINUTE,
        "h" => HOUR,
        _ => return None,
    };
    Some(nanos)
}

fn split_digits(s: &str) -> (&str, &str) {
    let len = s.bytes().take_while(u8::is_ascii_digit).count();
    s.split_at(len)
}

/// Parse a duration literal.
///
/// A literal is an optionally signed sequence of decimal numbers, each with an
/// optional fraction and a mandatory unit suffix: `ns`, `us` (or `µs`), `ms`,
/// `s`, `m`, `h`. A bare `0` needs no unit. Negative values other than zero
/// are rejected because [`Duration`] is unsigned.
pub fn parse_duration(literal: &str) -> Result<Duration, DurationError> {
    let (negative, mut rest) = match literal.as_bytes().first() {
        Some(b'-') => (true, &literal[1..]),
        Some(b'+') => (false, &literal[1..]),
        _ => (false, literal),
    };

    if rest == "0" {
        return Ok(Duration::ZERO);
    }
    if rest.is_empty() {
        return Err(DurationError::Invalid(literal.to_owned()));
    }

    let overflow = || DurationError::Overflow(literal.to_owned());
    let mut total: u64 = 0;

    while !rest.is_empty() {
        let (whole, tail) = split_digits(rest);
        rest = tail;

        let mut fraction = "";
        if let Some(tail) = rest.strip_prefix('.') {
            (fraction, rest) = split_digits(tail);
        }
        if whole.is_empty() && fraction.is_empty() {
            return Err(DurationError::Invalid(literal.to_owned()));
        }

        // Digits and '.' are ASCII, so this always splits on a char boundary.
        let unit_len = rest
            .bytes()
            .take_while(|b| *b != b'.' && !b.is_ascii_digit())
            .count();
        let (unit, tail) = rest.split_at(unit_len);
        rest = tail;
        if unit.is_empty() {
            return Err(DurationError::MissingUnit(literal.to_owned()));
        }
        let scale = unit_nanos(unit).ok_or_else(|| DurationError::UnknownUnit {
            unit: unit.to_owned(),
            literal: literal.to_owned(),
        })?;

        let whole: u64 = if whole.is_empty() {
            0
        } else {
            whole.parse().map_err(|_| overflow())?
        };
        let mut nanos = whole.checked_mul(scale).ok_or_else(overflow)?;

        if !fraction.is_empty() {
            let mut numerator = 0f64;
            let mut denominator = 1f64;
            for digit in fraction.bytes() {
                // Digits past this point are below nanosecond resolution.
                if denominator >= 1e18 {
                    break;
                }
                numerator = numerator * 10.0 + f64::from(digit - b'0');
                denominator *= 10.0;
            }
            let extra = (numerator * (scale as f64 / denominator)) as u64;
            nanos = nanos.checked_add(extra).ok_or_else(overflow)?;
        }

        total = total.checked_add(nanos).ok_or_else(overflow)?;
    }

    if negative && total != 0 {
        return Err(DurationError::Negative(literal.to_owned()));
    }

    Ok(Duration::from_nanos(total))
}
