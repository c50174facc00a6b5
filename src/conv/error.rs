use crate::conv::types::SystemId;
use std::fmt;

#[derive(Debug, Clone, PartialEq)]
pub enum ConvError {
    InvalidUnit(String),
    MalformedInput { token: String, reason: String },
    InvalidValue(String),
    ZeroConversionFactor(f64),
    DivideByZero,
    UnsupportedSystemPair(SystemId, SystemId),
    InvalidCatalog(String),
}

impl fmt::Display for ConvError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConvError::InvalidUnit(token) => {
                write!(f, "Couldn't find any measurement units matching '{}'", token)
            }
            ConvError::MalformedInput { token, reason } => {
                write!(f, "Malformed input '{}': {}", token, reason)
            }
            ConvError::InvalidValue(token) => write!(f, "Invalid value: '{}'", token),
            ConvError::ZeroConversionFactor(factor) => {
                write!(f, "Illegal conversion factor '{}'", factor)
            }
            ConvError::DivideByZero => write!(f, "Cannot divide by zero"),
            ConvError::UnsupportedSystemPair(input, output) => write!(
                f,
                "No conversion exists between the {} and {} systems",
                input, output
            ),
            ConvError::InvalidCatalog(msg) => write!(f, "Invalid unit catalog: {}", msg),
        }
    }
}

impl std::error::Error for ConvError {}
