//! Error codes for all interpreter diagnostics.
//!
//! Each error code is a unique identifier (e.g., `E2002`) with the first digit
//! indicating the statement handler that produced it. Used for `hl explain`
//! lookups and for tagging diagnostics in `hl check` output.

use std::fmt;

/// Error codes for all interpreter diagnostics.
///
/// Format: E#### where first digit indicates origin:
/// - E1xxx: Declaration errors
/// - E2xxx: Assignment errors
/// - E3xxx: Condition errors
/// - E4xxx: Expression errors
/// - E5xxx: Statement classification errors
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum ErrorCode {
    // Declaration Errors (E1xxx)
    /// Declaration does not split into exactly a name and a type
    E1001,
    /// Declared type is neither `integer` nor `double`
    E1002,

    // Assignment Errors (E2xxx)
    /// Assignment does not split into exactly a name and a value
    E2001,
    /// Assignment to a variable that was never declared
    E2002,
    /// Literal does not parse as the variable's declared type
    E2003,

    // Condition Errors (E3xxx)
    /// Condition has none of `<`, `>`, `==`
    E3001,
    /// Condition references an undeclared variable
    E3002,
    /// Right-hand side of a condition is neither a variable nor a number
    E3003,
    /// Condition references a declared variable with no value
    E3004,

    // Expression Errors (E4xxx)
    /// Expression references an undeclared variable
    E4001,
    /// Expression references a declared variable with no value
    E4002,

    // Statement Errors (E5xxx)
    /// Line matches no statement form
    E5001,
}

impl ErrorCode {
    /// All error code variants, for exhaustive testing.
    ///
    /// Kept in sync with `as_str()` which is exhaustive (Rust match enforces it).
    pub const ALL: &[ErrorCode] = &[
        // Declaration
        ErrorCode::E1001,
        ErrorCode::E1002,
        // Assignment
        ErrorCode::E2001,
        ErrorCode::E2002,
        ErrorCode::E2003,
        // Condition
        ErrorCode::E3001,
        ErrorCode::E3002,
        ErrorCode::E3003,
        ErrorCode::E3004,
        // Expression
        ErrorCode::E4001,
        ErrorCode::E4002,
        // Statement
        ErrorCode::E5001,
    ];

    /// Get the numeric code as a string (e.g., "E1001").
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorCode::E1001 => "E1001",
            ErrorCode::E1002 => "E1002",
            ErrorCode::E2001 => "E2001",
            ErrorCode::E2002 => "E2002",
            ErrorCode::E2003 => "E2003",
            ErrorCode::E3001 => "E3001",
            ErrorCode::E3002 => "E3002",
            ErrorCode::E3003 => "E3003",
            ErrorCode::E3004 => "E3004",
            ErrorCode::E4001 => "E4001",
            ErrorCode::E4002 => "E4002",
            ErrorCode::E5001 => "E5001",
        }
    }

    /// Check if this is a declaration error (E1xxx range).
    pub fn is_declaration_error(&self) -> bool {
        matches!(self, ErrorCode::E1001 | ErrorCode::E1002)
    }

    /// Check if this is an assignment error (E2xxx range).
    pub fn is_assignment_error(&self) -> bool {
        matches!(self, ErrorCode::E2001 | ErrorCode::E2002 | ErrorCode::E2003)
    }

    /// Check if this is a condition error (E3xxx range).
    pub fn is_condition_error(&self) -> bool {
        matches!(
            self,
            ErrorCode::E3001 | ErrorCode::E3002 | ErrorCode::E3003 | ErrorCode::E3004
        )
    }

    /// Check if this is an expression error (E4xxx range).
    pub fn is_expression_error(&self) -> bool {
        matches!(self, ErrorCode::E4001 | ErrorCode::E4002)
    }

    /// Check if this is a statement classification error (E5xxx range).
    pub fn is_statement_error(&self) -> bool {
        matches!(self, ErrorCode::E5001)
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Parse an error code string like `"E2002"`.
///
/// Case-insensitive. Derived from [`ErrorCode::ALL`] and [`ErrorCode::as_str()`],
/// so new variants are picked up automatically.
impl std::str::FromStr for ErrorCode {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let upper = s.to_uppercase();
        Self::ALL
            .iter()
            .find(|code| code.as_str() == upper)
            .copied()
            .ok_or(())
    }
}
