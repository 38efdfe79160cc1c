//! Reader for reaction listings of the form `7 A, 1 B => 1 C`.

use std::num::ParseIntError;

/// A `<quantity> <CHEMICAL>` pair as written in the input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Term {
    pub quantity: u64,
    pub chemical: String,
}

/// One line of the listing, names not yet interned.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedReaction {
    pub inputs: Vec<Term>,
    pub output: Term,
}

/// Errors that can occur while reading a reaction listing. `line` is 1-based.
#[derive(Debug, thiserror::Error)]
pub enum ParseError {
    #[error("line {line}: missing `=>`")]
    MissingArrow { line: usize },
    #[error("line {line}: reaction has no inputs")]
    NoInputs { line: usize },
    #[error("line {line}: expected `<quantity> <CHEMICAL>`, got `{term}`")]
    MalformedTerm { line: usize, term: String },
    #[error("line {line}: bad quantity `{value}`: {source}")]
    Quantity {
        line: usize,
        value: String,
        #[source]
        source: ParseIntError,
    },
    #[error("line {line}: quantity must be positive")]
    ZeroQuantity { line: usize },
    #[error("line {line}: invalid chemical name `{name}`")]
    InvalidName { line: usize, name: String },
}

/// Parse one reaction per non-blank line.
pub fn parse_reactions(text: &str) -> Result<Vec<ParsedReaction>, ParseError> {
    text.lines()
        .enumerate()
        .filter(|(_, l)| !l.trim().is_empty())
        .map(|(i, l)| parse_reaction(l, i + 1))
        .collect()
}

/// Parse a single `inputs => output` line.
pub fn parse_reaction(text: &str, line: usize) -> Result<ParsedReaction, ParseError> {
    let (lhs, rhs) = text
        .split_once("=>")
        .ok_or(ParseError::MissingArrow { line })?;

    if lhs.trim().is_empty() {
        return Err(ParseError::NoInputs { line });
    }
    let inputs = lhs
        .split(',')
        .map(|t| parse_term(t, line))
        .collect::<Result<Vec<_>, _>>()?;
    let output = parse_term(rhs, line)?;

    Ok(ParsedReaction { inputs, output })
}

fn parse_term(text: &str, line: usize) -> Result<Term, ParseError> {
    let mut tokens = text.split_whitespace();
    let (Some(quantity), Some(chemical), None) = (tokens.next(), tokens.next(), tokens.next())
    else {
        return Err(ParseError::MalformedTerm {
            line,
            term: text.trim().to_string(),
        });
    };

    let quantity: u64 = quantity.parse().map_err(|source| ParseError::Quantity {
        line,
        value: quantity.to_string(),
        source,
    })?;
    if quantity == 0 {
        return Err(ParseError::ZeroQuantity { line });
    }
    if !chemical.chars().all(|c| c.is_ascii_alphanumeric() || c == '_') {
        return Err(ParseError::InvalidName {
            line,
            name: chemical.to_string(),
        });
    }

    Ok(Term {
        quantity,
        chemical: chemical.to_string(),
    })
}
