//! Substring scan for reserved words and symbols.

use std::fmt;

use tracing::trace;

use crate::{ReservedWord, Symbol};

/// One logged match.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum ClassifiedToken {
    ReservedWord(ReservedWord),
    Symbol(Symbol),
}

impl fmt::Display for ClassifiedToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ClassifiedToken::ReservedWord(word) => write!(f, "Reserved Word: {word}"),
            ClassifiedToken::Symbol(symbol) => write!(f, "Symbol: {symbol}"),
        }
    }
}

/// Scan each whitespace-delimited word of `line`.
///
/// Per word, every reserved word contained in it is logged (table order),
/// then every symbol contained in it (table order). A word containing the
/// same entry twice still logs it once.
pub fn classify(line: &str) -> Vec<ClassifiedToken> {
    let mut tokens = Vec::new();
    for word in line.split_whitespace() {
        for reserved in ReservedWord::ALL {
            if word.contains(reserved.as_str()) {
                tokens.push(ClassifiedToken::ReservedWord(*reserved));
            }
        }
        for symbol in Symbol::ALL {
            if word.contains(symbol.as_str()) {
                tokens.push(ClassifiedToken::Symbol(*symbol));
            }
        }
    }
    trace!(line, count = tokens.len(), "classified line");
    tokens
}
