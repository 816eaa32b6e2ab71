//! Reserved word and symbol tables.
//!
//! Table order is the order in which matches are logged for a single word,
//! so `ALL` must not be re-sorted.

use std::fmt;

/// A reserved word of HL.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum ReservedWord {
    If,
    Else,
    Output,
    Integer,
    Double,
    Exit,
}

impl ReservedWord {
    /// Scan order.
    pub const ALL: &[ReservedWord] = &[
        ReservedWord::If,
        ReservedWord::Else,
        ReservedWord::Output,
        ReservedWord::Integer,
        ReservedWord::Double,
        ReservedWord::Exit,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            ReservedWord::If => "if",
            ReservedWord::Else => "else",
            ReservedWord::Output => "output",
            ReservedWord::Integer => "integer",
            ReservedWord::Double => "double",
            ReservedWord::Exit => "exit",
        }
    }
}

impl fmt::Display for ReservedWord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A symbol of HL.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum Symbol {
    /// `:=`
    Assign,
    /// `==`
    EqEq,
    /// `<`
    Lt,
    /// `>`
    Gt,
    /// `+`
    Plus,
    /// `-`
    Minus,
    /// `(`
    LParen,
    /// `)`
    RParen,
    /// `<<`
    Shl,
    /// `;`
    Semicolon,
}

impl Symbol {
    /// Scan order.
    pub const ALL: &[Symbol] = &[
        Symbol::Assign,
        Symbol::EqEq,
        Symbol::Lt,
        Symbol::Gt,
        Symbol::Plus,
        Symbol::Minus,
        Symbol::LParen,
        Symbol::RParen,
        Symbol::Shl,
        Symbol::Semicolon,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Symbol::Assign => ":=",
            Symbol::EqEq => "==",
            Symbol::Lt => "<",
            Symbol::Gt => ">",
            Symbol::Plus => "+",
            Symbol::Minus => "-",
            Symbol::LParen => "(",
            Symbol::RParen => ")",
            Symbol::Shl => "<<",
            Symbol::Semicolon => ";",
        }
    }
}

impl fmt::Display for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
