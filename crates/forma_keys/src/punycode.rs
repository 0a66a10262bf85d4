//! Punycode encoder (RFC 3492)
//!
//! Only encoding is needed: keys are generated from user input and never
//! decoded back.

use thiserror::Error;

const BASE: u32 = 36;
const T_MIN: u32 = 1;
const T_MAX: u32 = 26;
const SKEW: u32 = 38;
const DAMP: u32 = 700;
const INITIAL_BIAS: u32 = 72;
const INITIAL_N: u32 = 0x80;
const DELIMITER: char = '-';

#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum PunycodeError {
    #[error("punycode overflow: input too long")]
    Overflow,
}

/// Encode `input` as Punycode, without the `xn--` ACE prefix.
///
/// ASCII characters are copied first, followed by a `-` delimiter when there
/// were any, then the encoded insertions for everything else.
pub fn encode(input: &str) -> Result<String, PunycodeError> {
    let code_points: Vec<u32> = input.chars().map(u32::from).collect();
    let total = u32::try_from(code_points.len()).map_err(|_| PunycodeError::Overflow)?;

    let mut output: String = input.chars().filter(|c| c.is_ascii()).collect();
    let basic_len = u32::try_from(output.len()).map_err(|_| PunycodeError::Overflow)?;
    if basic_len > 0 {
        output.push(DELIMITER);
    }

    let mut n = INITIAL_N;
    let mut delta: u32 = 0;
    let mut bias = INITIAL_BIAS;
    let mut handled = basic_len;

    while handled < total {
        // Smallest code point not yet handled
        let Some(m) = code_points.iter().copied().filter(|&c| c >= n).min() else {
            break;
        };
        delta = (m - n)
            .checked_mul(handled + 1)
            .and_then(|d| delta.checked_add(d))
            .ok_or(PunycodeError::Overflow)?;
        n = m;

        for &c in &code_points {
            if c < n {
                delta = delta.checked_add(1).ok_or(PunycodeError::Overflow)?;
            }
            if c == n {
                let mut q = delta;
                let mut k = BASE;
                loop {
                    let t = threshold(k, bias);
                    if q < t {
                        break;
                    }
                    output.push(encode_digit(t + (q - t) % (BASE - t)));
                    q = (q - t) / (BASE - t);
                    k += BASE;
                }
                output.push(encode_digit(q));
                bias = adapt(delta, handled + 1, handled == basic_len);
                delta = 0;
                handled += 1;
            }
        }

        delta = delta.checked_add(1).ok_or(PunycodeError::Overflow)?;
        n = n.checked_add(1).ok_or(PunycodeError::Overflow)?;
    }

    Ok(output)
}

fn threshold(k: u32, bias: u32) -> u32 {
    if k <= bias {
        T_MIN
    } else if k >= bias + T_MAX {
        T_MAX
    } else {
        k - bias
    }
}

fn adapt(delta: u32, num_points: u32, first_time: bool) -> u32 {
    let mut delta = if first_time { delta / DAMP } else { delta / 2 };
    delta += delta / num_points;

    let mut k = 0;
    while delta > ((BASE - T_MIN) * T_MAX) / 2 {
        delta /= BASE - T_MIN;
        k += BASE;
    }
    k + (BASE - T_MIN + 1) * delta / (delta + SKEW)
}

fn encode_digit(digit: u32) -> char {
    debug_assert!(digit < BASE);
    match digit {
        0..=25 => char::from(b'a' + digit as u8),
        _ => char::from(b'0' + (digit - 26) as u8),
    }
}
