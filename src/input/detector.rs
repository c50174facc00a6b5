use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    /// Characters a token may contain once commas are stripped
    static ref ALLOWED: Regex = Regex::new(r"^[0-9A-Za-z.\-]+$").unwrap();

    /// A plain number: optional leading sign, at most one decimal point
    /// Examples: "250", "-3.5", ".5", "10."
    static ref NUMBER: Regex = Regex::new(r"^-?(\d+(\.\d*)?|\.\d+)$").unwrap();

    /// A unit name or symbol
    static ref WORD: Regex = Regex::new(r"^[A-Za-z]+$").unwrap();

    /// A number immediately followed by a unit
    /// Examples: "250m", "-1.5ft", ".5km"
    static ref JOINED: Regex = Regex::new(r"^(-?(?:\d+(?:\.\d*)?|\.\d+))([A-Za-z]+)$").unwrap();
}

/// What a single input token holds
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TokenKind<'a> {
    Number,
    Word,
    Joined { value: &'a str, unit: &'a str },
}

/// Classify a comma-free token, or explain why it is malformed
pub fn classify(token: &str) -> Result<TokenKind<'_>, String> {
    if !ALLOWED.is_match(token) {
        return Err("contains unexpected characters".to_string());
    }
    if token.matches('.').count() > 1 {
        return Err("contains more than one decimal point".to_string());
    }

    if NUMBER.is_match(token) {
        return Ok(TokenKind::Number);
    }
    if WORD.is_match(token) {
        return Ok(TokenKind::Word);
    }
    if let Some(caps) = JOINED.captures(token) {
        if let (Some(value), Some(unit)) = (caps.get(1), caps.get(2)) {
            return Ok(TokenKind::Joined {
                value: value.as_str(),
                unit: unit.as_str(),
            });
        }
    }

    // Work out which rule was broken
    let first_alpha = token.find(|c: char| c.is_ascii_alphabetic());
    let last_digit = token.rfind(|c: char| c.is_ascii_digit());
    if let (Some(alpha), Some(digit)) = (first_alpha, last_digit) {
        if digit > alpha {
            return Err("has digits after the unit".to_string());
        }
    }
    if token.rfind('-').map_or(false, |pos| pos > 0) {
        return Err("has a misplaced sign".to_string());
    }
    Err("is neither a value nor a unit".to_string())
}

/// True for tokens made only of digits, decimal points and signs
pub fn looks_numeric(token: &str) -> bool {
    !token.is_empty()
        && token
            .chars()
            .all(|c| c.is_ascii_digit() || c == '.' || c == '-')
}
