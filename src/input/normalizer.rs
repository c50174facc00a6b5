use crate::conv::error::ConvError;
use crate::conv::resolver::resolve_unit;
use crate::conv::types::Unit;
use crate::input::detector::{classify, looks_numeric, TokenKind};
use std::fmt;

/// One requested conversion, still as raw strings
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Triple {
    pub input_unit: String,
    pub value: String,
    pub output_unit: String,
}

impl Triple {
    pub fn new(
        input_unit: impl Into<String>,
        value: impl Into<String>,
        output_unit: impl Into<String>,
    ) -> Self {
        Self {
            input_unit: input_unit.into(),
            value: value.into(),
            output_unit: output_unit.into(),
        }
    }
}

impl fmt::Display for Triple {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {}", self.input_unit, self.value, self.output_unit)
    }
}

/// Turn raw whitespace-delimited tokens into (unit, value, unit) triples.
///
/// Joined tokens such as "250m" are split into unit and value, the stream is
/// grouped in threes (a short last group is padded with empty strings), and a
/// group that starts with a number has its first two elements swapped.
pub fn normalize_tokens<S: AsRef<str>>(raw: &[S]) -> Result<Vec<Triple>, ConvError> {
    let tokens = expand_tokens(raw)?;
    Ok(group_triples(tokens))
}

/// Validate tokens and split joined value+unit tokens into unit, value
pub fn expand_tokens<S: AsRef<str>>(raw: &[S]) -> Result<Vec<String>, ConvError> {
    let mut tokens = Vec::with_capacity(raw.len());

    for token in raw {
        let token = token.as_ref().replace(',', "");
        let token = token.trim();
        if token.is_empty() {
            continue;
        }

        match classify(token) {
            Ok(TokenKind::Joined { value, unit }) => {
                tokens.push(unit.to_string());
                tokens.push(value.to_string());
            }
            Ok(TokenKind::Number) | Ok(TokenKind::Word) => tokens.push(token.to_string()),
            Err(reason) => {
                return Err(ConvError::MalformedInput {
                    token: token.to_string(),
                    reason,
                })
            }
        }
    }

    Ok(tokens)
}

fn group_triples(tokens: Vec<String>) -> Vec<Triple> {
    let mut triples = Vec::with_capacity((tokens.len() + 2) / 3);
    let mut iter = tokens.into_iter();

    while let Some(first) = iter.next() {
        let second = iter.next().unwrap_or_default();
        let third = iter.next().unwrap_or_default();

        // value typed before its unit
        let triple = if looks_numeric(&first) {
            Triple::new(second, first, third)
        } else {
            Triple::new(first, second, third)
        };
        triples.push(triple);
    }

    triples
}

/// Resolve both units of a triple and parse its value
pub fn to_convertible(triple: &Triple) -> Result<(Unit, f64, Unit), ConvError> {
    let value = triple
        .value
        .parse::<f64>()
        .ok()
        .filter(|v| v.is_finite())
        .ok_or_else(|| ConvError::InvalidValue(triple.value.clone()))?;
    let input = resolve_unit(&triple.input_unit, None)?;
    let output = resolve_unit(&triple.output_unit, None)?;
    Ok((input, value, output))
}
