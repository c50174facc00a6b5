// Turns raw command-line and piped tokens into conversion requests

pub mod detector;
pub mod normalizer;
pub mod stdin;

pub use detector::{classify, looks_numeric, TokenKind};
pub use normalizer::{expand_tokens, normalize_tokens, to_convertible, Triple};
pub use stdin::{read_piped_tokens, read_tokens_if_pending, split_tokens};
