//! HL Lexical Classifier.
//!
//! Purely observational: nothing here can fail and nothing here decides how a
//! line executes. For every processed line the interpreter records
//!
//! 1. the *normalized* line (all spaces and tabs deleted), and
//! 2. one [`ClassifiedToken`] per reserved word or symbol found as a
//!    **substring** of each whitespace-delimited word.
//!
//! Substring matching is deliberate: `double1` registers `Reserved Word: double`
//! and `<<` registers both `Symbol: <` and `Symbol: <<`.

mod classify;
mod keywords;

pub use classify::{classify, ClassifiedToken};
pub use keywords::{ReservedWord, Symbol};

/// Delete every space and tab character from `line`.
///
/// Other whitespace (e.g. a stray `\r`) is kept.
pub fn normalize(line: &str) -> String {
    line.chars().filter(|c| *c != ' ' && *c != '\t').collect()
}

/// Everything the classifier records for one line.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LineScan {
    pub normalized: String,
    pub tokens: Vec<ClassifiedToken>,
}

/// Normalize and classify one line.
pub fn scan_line(line: &str) -> LineScan {
    LineScan {
        normalized: normalize(line),
        tokens: classify(line),
    }
}

#[cfg(test)]
mod tests;
