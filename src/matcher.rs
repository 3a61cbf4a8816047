use log::debug;

use crate::error::Result;
use crate::parser::parse_pattern;
use crate::regex::{match_prefix, Anchor, Pattern};

/// A compiled pattern that can be tested against any number of lines.
#[derive(Debug, Clone, PartialEq)]
pub struct Matcher {
    pattern: Pattern,
}

impl Matcher {
    pub fn new(pattern: &str) -> Result<Self> {
        let pattern = parse_pattern(pattern)?;
        debug!("compiled pattern: {:?}", pattern);
        Ok(Self { pattern })
    }

    pub fn pattern(&self) -> &Pattern {
        &self.pattern
    }

    pub fn anchor(&self) -> Anchor {
        self.pattern.anchor
    }

    /// Tests one line. Each byte of invalid UTF-8 decodes to U+FFFD.
    pub fn is_match(&self, line: &[u8]) -> bool {
        let chars = decode_line(line);
        let tokens = &self.pattern.tokens;

        match self.pattern.anchor {
            Anchor::Both => match_prefix(tokens, &chars) == Some(chars.len()),
            Anchor::Start => match_prefix(tokens, &chars).is_some(),
            Anchor::End => {
                let Some(start) = chars.len().checked_sub(self.pattern.width) else {
                    debug!("line shorter than pattern, no end match possible");
                    return false;
                };
                debug!("aligning end-anchored pattern at index {}", start);
                match_prefix(tokens, &chars[start..]).is_some()
            }
            Anchor::Unanchored => self.scan(&chars),
        }
    }

    fn scan(&self, chars: &[char]) -> bool {
        // A leading negated class stops the scan at its first failed offset.
        let stop_on_first_failure = self.pattern.starts_with_negated_class();

        for start in 0..chars.len() {
            debug!("attempting match starting at index {} ({:?})", start, chars[start]);

            if let Some(consumed) = match_prefix(&self.pattern.tokens, &chars[start..]) {
                debug!("match found at index {}, {} chars consumed", start, consumed);
                return true;
            }
            if stop_on_first_failure {
                debug!("negated class failed at index {}, stopping scan", start);
                return false;
            }
        }
        false
    }
}

fn decode_line(line: &[u8]) -> Vec<char> {
    let mut chars = Vec::with_capacity(line.len());
    let mut rest = line;

    loop {
        match std::str::from_utf8(rest) {
            Ok(valid) => {
                chars.extend(valid.chars());
                return chars;
            }
            Err(err) => {
                let (valid, after) = rest.split_at(err.valid_up_to());
                chars.extend(std::str::from_utf8(valid).unwrap_or_default().chars());
                let invalid = err.error_len().unwrap_or(after.len());
                chars.extend(std::iter::repeat(char::REPLACEMENT_CHARACTER).take(invalid));
                rest = &after[invalid..];
            }
        }
    }
}

/// Reports whether `pattern` matches `line`.
///
/// Fails only when the pattern is empty.
pub fn match_line(line: &[u8], pattern: &str) -> Result<bool> {
    Ok(Matcher::new(pattern)?.is_match(line))
}
