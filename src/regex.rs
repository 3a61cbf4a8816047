use log::trace;
use unicode_general_category::{get_general_category, GeneralCategory};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EscapeClass {
    Digit, // \d
    Word,  // \w
}

impl EscapeClass {
    pub fn matches(self, c: char) -> bool {
        match self {
            EscapeClass::Digit => is_decimal_digit(c),
            EscapeClass::Word => is_letter(c) || is_decimal_digit(c) || c == '_',
        }
    }
}

fn is_decimal_digit(c: char) -> bool {
    get_general_category(c) == GeneralCategory::DecimalNumber
}

fn is_letter(c: char) -> bool {
    matches!(
        get_general_category(c),
        GeneralCategory::UppercaseLetter
            | GeneralCategory::LowercaseLetter
            | GeneralCategory::TitlecaseLetter
            | GeneralCategory::ModifierLetter
            | GeneralCategory::OtherLetter
    )
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Quantifier {
    OneOrMore, // +
    ZeroOrOne, // ?
}

#[derive(Debug, Clone, PartialEq)]
pub enum Token {
    Char(char),
    Dot,                          // .
    Escape(EscapeClass),          // \d, \w
    CharClass(Vec<char>, bool),   // [abc] or [^abc]
    Group(Vec<Vec<Token>>),       // (a|b|c)
    Quantified(char, Quantifier), // a+ or a?
    Invalid,                      // never matches
}

/// Where in the line a pattern is allowed to match.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Anchor {
    Unanchored,
    Start, // ^abc
    End,   // abc$
    Both,  // ^abc$
}

/// A parsed pattern: its anchoring plus the tokens of the text between the
/// anchors.
#[derive(Debug, Clone, PartialEq)]
pub struct Pattern {
    pub anchor: Anchor,
    pub tokens: Vec<Token>,
    /// Code points of the pattern text once the anchors are stripped.
    pub width: usize,
}

impl Pattern {
    pub fn starts_with_negated_class(&self) -> bool {
        matches!(self.tokens.first(), Some(Token::CharClass(_, true)))
    }
}

/// Matches `tokens` against the start of `line`.
///
/// Returns the number of code points consumed once every token has matched.
/// The walk stops as soon as either side runs out, so trailing tokens that
/// could match nothing (`a?`) still fail on an exhausted line. Quantifiers
/// are greedy and never give characters back.
pub fn match_prefix(tokens: &[Token], line: &[char]) -> Option<usize> {
    let mut i = 0;
    let mut j = 0;

    while i < line.len() && j < tokens.len() {
        let c = line[i];

        match &tokens[j] {
            Token::Escape(class) => {
                if !class.matches(c) {
                    return None;
                }
            }
            Token::Group(alternatives) => {
                let consumed = alternatives
                    .iter()
                    .find_map(|alt| match_prefix(alt, &line[i..]))?;
                trace!("group matched {} chars at {}", consumed, i);
                let rest = match_prefix(&tokens[j + 1..], &line[i + consumed..])?;
                return Some(i + consumed + rest);
            }
            Token::CharClass(set, negated) => {
                if set.contains(&c) == *negated {
                    return None;
                }
            }
            Token::Quantified(expected, Quantifier::OneOrMore) => {
                if c != *expected {
                    return None;
                }
                i += 1;
                while i < line.len() && line[i] == *expected {
                    i += 1;
                }
                j += 1;
                continue;
            }
            Token::Quantified(expected, Quantifier::ZeroOrOne) => {
                if let Some(rest) = match_prefix(&tokens[j + 1..], &line[i..]) {
                    return Some(i + rest);
                }
                if c != *expected {
                    return None;
                }
            }
            Token::Dot => {}
            Token::Char(expected) => {
                if c != *expected {
                    return None;
                }
            }
            Token::Invalid => return None,
        }

        i += 1;
        j += 1;
    }

    if j == tokens.len() {
        Some(i)
    } else {
        trace!("line exhausted with {} tokens left", tokens.len() - j);
        None
    }
}
