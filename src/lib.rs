pub mod error;
pub mod matcher;
pub mod parser;
pub mod regex;

pub use error::{GrepError, Result};
pub use matcher::{match_line, Matcher};
pub use parser::{parse_pattern, tokenize};
pub use regex::{Anchor, EscapeClass, Pattern, Quantifier, Token};
