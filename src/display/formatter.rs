use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Notation {
    /// `%g` style significant digits, six unless a precision is set
    #[default]
    Auto,
    Fixed,
    Scientific,
    Hex,
}

/// Digits after the decimal point when `Fixed` has no explicit precision
const DEFAULT_FIXED_PRECISION: usize = 6;
/// Significant digits when `Auto` has no explicit precision
const DEFAULT_SIGNIFICANT_DIGITS: usize = 6;

/// How numbers are rendered for display
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct NumberFormat {
    pub notation: Notation,
    pub precision: Option<usize>,
}

impl NumberFormat {
    pub fn new(notation: Notation, precision: Option<usize>) -> Self {
        Self {
            notation,
            precision,
        }
    }

    pub fn format(&self, value: f64) -> String {
        if !value.is_finite() {
            return value.to_string();
        }

        match (self.notation, self.precision) {
            (Notation::Auto, None) => significant(value, DEFAULT_SIGNIFICANT_DIGITS),
            (Notation::Auto, Some(digits)) => significant(value, digits),
            (Notation::Fixed, Some(digits)) => format!("{:.*}", digits, value),
            (Notation::Fixed, None) => {
                trim_fraction(format!("{:.*}", DEFAULT_FIXED_PRECISION, value))
            }
            (Notation::Scientific, Some(digits)) => format!("{:.*e}", digits, value),
            (Notation::Scientific, None) => format!("{:e}", value),
            (Notation::Hex, _) => hex_float(value),
        }
    }
}

// printf("%g") style
fn significant(value: f64, digits: usize) -> String {
    let digits = digits.max(1);
    if value == 0.0 {
        return "0".to_string();
    }

    let sci = format!("{:.*e}", digits - 1, value);
    let (mantissa, exponent) = match sci.split_once('e') {
        Some(parts) => parts,
        None => return sci,
    };
    let exponent: i32 = exponent.parse().unwrap_or(0);

    if exponent < -4 || exponent >= digits as i32 {
        format!("{}e{}", trim_fraction(mantissa.to_string()), exponent)
    } else {
        let decimals = (digits as i32 - 1 - exponent).max(0) as usize;
        trim_fraction(format!("{:.*}", decimals, value))
    }
}

/// Drop trailing zeros after the decimal point, and the point itself if bare
fn trim_fraction(s: String) -> String {
    if !s.contains('.') {
        return s;
    }
    s.trim_end_matches('0').trim_end_matches('.').to_string()
}

/// C-style hexadecimal floating point, e.g. 3.0 -> "0x1.8p+1"
fn hex_float(value: f64) -> String {
    let sign = if value.is_sign_negative() { "-" } else { "" };
    let bits = value.abs().to_bits();
    let exponent_bits = ((bits >> 52) & 0x7ff) as i64;
    let mantissa = bits & ((1u64 << 52) - 1);

    if exponent_bits == 0 && mantissa == 0 {
        return format!("{}0x0p+0", sign);
    }

    // subnormals have no implicit leading one
    let (lead, exponent) = if exponent_bits == 0 {
        (0, -1022)
    } else {
        (1, exponent_bits - 1023)
    };

    let digits = format!("{:013x}", mantissa);
    let digits = digits.trim_end_matches('0');
    if digits.is_empty() {
        format!("{}0x{}p{:+}", sign, lead, exponent)
    } else {
        format!("{}0x{}.{}p{:+}", sign, lead, digits, exponent)
    }
}
