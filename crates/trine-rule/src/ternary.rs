//! Base-3 digit codec for rule indices.

use trine_core::{InvalidArgument, Neighbourhood, RuleIndex, Symbol};

/// Number of base-3 digits in a rule index.
pub const DIGITS: usize = Neighbourhood::COUNT;

/// Decode `index` into nine base-3 digits, most significant first.
///
/// Remainders are collected least significant first by repeated
/// division until the quotient reaches zero (index `0` yields a single
/// `0` digit), then written right-aligned into a zero-filled array,
/// which reverses them and left-pads in one pass.
///
/// # Examples
///
/// ```
/// use trine_core::RuleIndex;
/// use trine_rule::ternary;
///
/// let digits = ternary::digits(RuleIndex::try_from(8711).unwrap());
/// assert_eq!(ternary::format(&digits), "102221122");
/// ```
pub fn digits(index: RuleIndex) -> [Symbol; DIGITS] {
    let base = Symbol::COUNT as u16;
    let mut quotient = index.get();
    let mut lsd_first = Vec::with_capacity(DIGITS);
    loop {
        lsd_first.push(Symbol::ALL[usize::from(quotient % base)]);
        quotient /= base;
        if quotient == 0 {
            break;
        }
    }

    let mut out = [Symbol::Zero; DIGITS];
    for (slot, digit) in out.iter_mut().rev().zip(lsd_first) {
        *slot = digit;
    }
    out
}

/// Encode nine digits (most significant first) back into a rule index.
pub fn encode(digits: &[Symbol; DIGITS]) -> RuleIndex {
    RuleIndex::from_ternary(*digits)
}

/// Render digits as a 9-character string such as `"000000012"`.
pub fn format(digits: &[Symbol; DIGITS]) -> String {
    digits.iter().map(|d| char::from(b'0' + d.value())).collect()
}

/// Parse a base-3 digit string of at most nine digits.
///
/// Shorter strings are left-padded with zeros, matching the decoder.
/// Characters other than `0`, `1`, `2` are reported as
/// [`InvalidArgument::InvalidSymbol`]; strings longer than nine digits
/// as [`InvalidArgument::RuleIndexOutOfRange`].
pub fn parse(s: &str) -> Result<[Symbol; DIGITS], InvalidArgument> {
    let chars: Vec<char> = s.trim().chars().collect();
    if chars.is_empty() || chars.len() > DIGITS {
        return Err(InvalidArgument::RuleIndexOutOfRange {
            value: s.to_string(),
        });
    }

    let mut out = [Symbol::Zero; DIGITS];
    let offset = DIGITS - chars.len();
    for (i, &ch) in chars.iter().enumerate() {
        out[offset + i] = ch
            .to_digit(3)
            .and_then(|d| u8::try_from(d).ok())
            .and_then(Symbol::from_digit)
            .ok_or_else(|| InvalidArgument::InvalidSymbol {
                index: i,
                value: ch.to_string(),
            })?;
    }
    Ok(out)
}
