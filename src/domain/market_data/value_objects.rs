use derive_more::{Constructor, Deref, From, Into};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Value Object - quoted price, serialized as a bare JSON number.
///
/// `Display` follows JavaScript's `Number#toString` (`65.2`, `65`, `1e+21`),
/// which is how prices appear in the table.
#[derive(Debug, Clone, Copy, PartialEq, From, Into, Deref, Constructor, Serialize, Deserialize)]
pub struct Price(f64);

impl Price {
    pub fn value(&self) -> f64 {
        self.0
    }
}

impl fmt::Display for Price {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&format_js_number(self.0))
    }
}

/// Value Object - percentage change over a trailing window (`-5.3` means -5.3%).
#[derive(Debug, Clone, Copy, PartialEq, From, Into, Deref, Constructor, Serialize, Deserialize)]
pub struct PercentChange(f64);

impl PercentChange {
    pub fn value(&self) -> f64 {
        self.0
    }
}

impl fmt::Display for PercentChange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&format_js_number(self.0))
    }
}

/// Shortest round-trip decimal laid out the way JavaScript prints numbers:
/// plain notation for exponents in `[-7, 21)`, `1.5e+300` style outside it,
/// and `-0` printed as `0`.
pub fn format_js_number(value: f64) -> String {
    if value.is_nan() {
        return "NaN".to_string();
    }
    if value.is_infinite() {
        return if value > 0.0 { "Infinity" } else { "-Infinity" }.to_string();
    }
    if value == 0.0 {
        return "0".to_string();
    }

    // `{:e}` yields the shortest round-trip digits, e.g. `-1.2345e3`.
    let scientific = format!("{:e}", value.abs());
    let (mantissa, exponent) = scientific.split_once('e').unwrap_or((&scientific, "0"));
    let exponent: i32 = exponent.parse().unwrap_or(0);
    let digits: String = mantissa.chars().filter(|c| *c != '.').collect();
    let k = digits.len() as i32;
    let n = exponent + 1;

    let body = if k <= n && n <= 21 {
        format!("{}{}", digits, "0".repeat((n - k) as usize))
    } else if 0 < n && n <= 21 {
        let (int_part, frac_part) = digits.split_at(n as usize);
        format!("{int_part}.{frac_part}")
    } else if -6 < n && n <= 0 {
        format!("0.{}{}", "0".repeat((-n) as usize), digits)
    } else {
        let (lead, rest) = digits.split_at(1);
        let sign = if n - 1 < 0 { '-' } else { '+' };
        if rest.is_empty() {
            format!("{lead}e{sign}{}", (n - 1).abs())
        } else {
            format!("{lead}.{rest}e{sign}{}", (n - 1).abs())
        }
    };

    if value < 0.0 { format!("-{body}") } else { body }
}
