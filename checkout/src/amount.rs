//! Money amounts and quantities

use std::fmt;

/// An amount of money in minor units (centavos).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Amount(u64);

impl Amount {
    /// Amount from minor units.
    pub const fn from_minor(minor: u64) -> Self {
        Amount(minor)
    }

    /// Amount from whole currency units, `None` on overflow.
    pub fn from_units(units: u64) -> Option<Self> {
        units.checked_mul(100).map(Amount)
    }

    /// Minor units.
    pub fn minor(self) -> u64 {
        self.0
    }

    /// Multiply by a quantity, `None` on overflow.
    pub fn checked_mul(self, qty: u32) -> Option<Self> {
        self.0.checked_mul(u64::from(qty)).map(Amount)
    }
}

/// Renders with exactly two fraction digits, e.g. `85000.00`.
impl fmt::Display for Amount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{:02}", self.0 / 100, self.0 % 100)
    }
}

/// Parse a quantity field the way the order form reads it.
///
/// Leading whitespace and an optional sign are skipped, then the leading run
/// of decimal digits is taken. Anything that yields no number, or a number
/// below one, counts as one.
pub fn parse_quantity(input: &str) -> u32 {
    let s = input.trim_start();
    let (negative, digits) = match s.as_bytes().first() {
        Some(b'-') => (true, &s[1..]),
        Some(b'+') => (false, &s[1..]),
        _ => (false, s),
    };

    let mut value: u32 = 0;
    let mut seen = false;
    for b in digits.bytes().take_while(u8::is_ascii_digit) {
        seen = true;
        value = value.saturating_mul(10).saturating_add(u32::from(b - b'0'));
    }

    if !seen || negative {
        return 1;
    }
    value.max(1)
}

/// Format whole pesos for display, e.g. `$ 85.000` (no-break space).
pub fn format_cop(pesos: u64) -> String {
    let digits = pesos.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3 + 2);
    out.push_str("$\u{a0}");
    let head = digits.len() % 3;
    for (i, ch) in digits.chars().enumerate() {
        if i != 0 && (i + 3 - head) % 3 == 0 {
            out.push('.');
        }
        out.push(ch);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_amount_display() {
        assert_eq!(Amount::from_units(85000).unwrap().to_string(), "85000.00");
        assert_eq!(Amount::from_minor(5).to_string(), "0.05");
        assert_eq!(Amount::from_minor(12345).to_string(), "123.45");
        assert_eq!(Amount::default().to_string(), "0.00");
    }

    #[test]
    fn test_amount_mul() {
        let unit = Amount::from_units(109000).unwrap();
        assert_eq!(unit.checked_mul(3).unwrap().to_string(), "327000.00");
        assert!(Amount::from_minor(u64::MAX).checked_mul(2).is_none());
        assert!(Amount::from_units(u64::MAX).is_none());
    }

    #[test]
    fn test_parse_quantity() {
        assert_eq!(parse_quantity("3"), 3);
        assert_eq!(parse_quantity("  12 units"), 12);
        assert_eq!(parse_quantity("+4"), 4);
        assert_eq!(parse_quantity("2.9"), 2);
        assert_eq!(parse_quantity(""), 1);
        assert_eq!(parse_quantity("abc"), 1);
        assert_eq!(parse_quantity("0"), 1);
        assert_eq!(parse_quantity("-5"), 1);
        assert_eq!(parse_quantity("99999999999999"), u32::MAX);
    }

    #[test]
    fn test_format_cop() {
        assert_eq!(format_cop(85000), "$\u{a0}85.000");
        assert_eq!(format_cop(276000), "$\u{a0}276.000");
        assert_eq!(format_cop(1234567), "$\u{a0}1.234.567");
        assert_eq!(format_cop(5000), "$\u{a0}5.000");
        assert_eq!(format_cop(1000), "$\u{a0}1.000");
        assert_eq!(format_cop(999), "$\u{a0}999");
        assert_eq!(format_cop(0), "$\u{a0}0");
    }
}
