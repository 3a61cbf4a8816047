use nom::{
    branch::alt,
    bytes::complete::take_till,
    character::complete::{anychar, char, one_of},
    combinator::{map, opt, value},
    multi::many0,
    sequence::{pair, preceded},
    IResult,
};

use crate::error::{GrepError, Result};
use crate::regex::{Anchor, EscapeClass, Pattern, Quantifier, Token};

/// Parses a pattern into its anchoring and token sequence.
///
/// Only the empty pattern is rejected. Malformed constructs parse to
/// [`Token::Invalid`] so that the attempt reaching them fails instead.
pub fn parse_pattern(pattern: &str) -> Result<Pattern> {
    if pattern.is_empty() {
        return Err(GrepError::InvalidPattern);
    }

    let starts = pattern.starts_with('^');
    let ends = pattern.ends_with('$');

    let (anchor, body) = match (starts, ends) {
        (true, true) => (Anchor::Both, &pattern[1..pattern.len() - 1]),
        (true, _) => (Anchor::Start, &pattern[1..]),
        (false, true) => (Anchor::End, &pattern[..pattern.len() - 1]),
        (false, false) => (Anchor::Unanchored, pattern),
    };

    Ok(Pattern {
        anchor,
        tokens: tokenize(body),
        width: body.chars().count(),
    })
}

/// Splits pattern text (anchors already removed) into tokens.
pub fn tokenize(text: &str) -> Vec<Token> {
    match sequence(text) {
        Ok(("", tokens)) => tokens,
        _ => vec![Token::Invalid],
    }
}

fn sequence(input: &str) -> IResult<&str, Vec<Token>> {
    many0(token)(input)
}

fn token(input: &str) -> IResult<&str, Token> {
    alt((escape, group, char_class, quantified, dot, literal))(input)
}

fn escape(input: &str) -> IResult<&str, Token> {
    map(preceded(char('\\'), opt(anychar)), |kind| match kind {
        Some('d') => Token::Escape(EscapeClass::Digit),
        Some('w') => Token::Escape(EscapeClass::Word),
        _ => Token::Invalid,
    })(input)
}

fn group(input: &str) -> IResult<&str, Token> {
    let (input, _) = char('(')(input)?;

    let Some(end) = closing_paren(input) else {
        return Ok(("", Token::Invalid));
    };

    // Nested groups are not special here: every `|` splits.
    let alternatives = input[..end].split('|').map(tokenize).collect();
    Ok((&input[end + 1..], Token::Group(alternatives)))
}

fn closing_paren(input: &str) -> Option<usize> {
    let mut depth = 1usize;
    for (idx, c) in input.char_indices() {
        match c {
            '(' => depth += 1,
            ')' => {
                depth -= 1;
                if depth == 0 {
                    return Some(idx);
                }
            }
            _ => {}
        }
    }
    None
}

fn char_class(input: &str) -> IResult<&str, Token> {
    let (input, _) = char('[')(input)?;
    let (input, negated) = opt(char('^'))(input)?;
    let (input, members) = take_till(|c: char| c == ']')(input)?;
    let (input, closed) = opt(char(']'))(input)?;

    let token = match closed {
        Some(_) => Token::CharClass(members.chars().collect(), negated.is_some()),
        None => Token::Invalid,
    };
    Ok((input, token))
}

fn quantified(input: &str) -> IResult<&str, Token> {
    map(pair(anychar, one_of("+?")), |(c, q)| {
        let quantifier = if q == '+' {
            Quantifier::OneOrMore
        } else {
            Quantifier::ZeroOrOne
        };
        Token::Quantified(c, quantifier)
    })(input)
}

fn dot(input: &str) -> IResult<&str, Token> {
    value(Token::Dot, char('.'))(input)
}

fn literal(input: &str) -> IResult<&str, Token> {
    map(anychar, Token::Char)(input)
}
