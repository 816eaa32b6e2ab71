//! Typed failures for every statement handler.
//!
//! All of these are recoverable. Handlers return them through
//! [`StatementError`]; the dispatcher turns each one into exactly one
//! [`Diagnostic`] and moves on to the next line.

use hl_diagnostic::{Diagnostic, ErrorCode};

/// Declaration line failed.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum DeclarationError {
    #[error("Invalid variable declaration '{line}'")]
    Malformed { line: String },
    #[error("Unsupported variable type '{ty}'")]
    UnsupportedType { ty: String },
}

impl DeclarationError {
    pub fn code(&self) -> ErrorCode {
        match self {
            DeclarationError::Malformed { .. } => ErrorCode::E1001,
            DeclarationError::UnsupportedType { .. } => ErrorCode::E1002,
        }
    }
}

/// Assignment line failed. The target variable is left unchanged.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum AssignmentError {
    #[error("Invalid assignment '{line}'")]
    Malformed { line: String },
    #[error("Variable '{name}' is not declared")]
    Undeclared { name: String },
    #[error("Invalid value '{value}' for variable '{name}'")]
    InvalidValue { value: String, name: String },
}

impl AssignmentError {
    pub fn code(&self) -> ErrorCode {
        match self {
            AssignmentError::Malformed { .. } => ErrorCode::E2001,
            AssignmentError::Undeclared { .. } => ErrorCode::E2002,
            AssignmentError::InvalidValue { .. } => ErrorCode::E2003,
        }
    }
}

/// Condition of a pending conditional could not be evaluated.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ConditionError {
    #[error("Unsupported condition '{condition}'")]
    Unsupported { condition: String },
    #[error("Variable '{name}' is not defined")]
    UndefinedVariable { name: String },
    #[error("Invalid value in condition: '{value}'")]
    InvalidValue { value: String },
    #[error("Variable '{name}' has no value")]
    Unassigned { name: String },
}

impl ConditionError {
    pub fn code(&self) -> ErrorCode {
        match self {
            ConditionError::Unsupported { .. } => ErrorCode::E3001,
            ConditionError::UndefinedVariable { .. } => ErrorCode::E3002,
            ConditionError::InvalidValue { .. } => ErrorCode::E3003,
            ConditionError::Unassigned { .. } => ErrorCode::E3004,
        }
    }
}

/// Output expression could not be evaluated.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ExpressionError {
    #[error("One or both variables '{left}' and '{right}' are not defined")]
    UndefinedOperands { left: String, right: String },
    #[error("Variable '{name}' is not defined")]
    UndefinedVariable { name: String },
    #[error("Variable '{name}' has no value")]
    Unassigned { name: String },
}

impl ExpressionError {
    pub fn code(&self) -> ErrorCode {
        match self {
            ExpressionError::UndefinedOperands { .. } | ExpressionError::UndefinedVariable { .. } => {
                ErrorCode::E4001
            }
            ExpressionError::Unassigned { .. } => ErrorCode::E4002,
        }
    }
}

/// Line matched no statement form.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[error("Invalid input format '{line}'")]
pub struct InvalidStatementError {
    pub line: String,
}

/// Any per-line failure.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum StatementError {
    #[error(transparent)]
    Declaration(#[from] DeclarationError),
    #[error(transparent)]
    Assignment(#[from] AssignmentError),
    #[error(transparent)]
    Condition(#[from] ConditionError),
    #[error(transparent)]
    Expression(#[from] ExpressionError),
    #[error(transparent)]
    Invalid(#[from] InvalidStatementError),
}

impl StatementError {
    pub fn code(&self) -> ErrorCode {
        match self {
            StatementError::Declaration(e) => e.code(),
            StatementError::Assignment(e) => e.code(),
            StatementError::Condition(e) => e.code(),
            StatementError::Expression(e) => e.code(),
            StatementError::Invalid(_) => ErrorCode::E5001,
        }
    }

    /// Build the diagnostic recorded for this failure on source line `line`.
    pub fn to_diagnostic(&self, line: usize) -> Diagnostic {
        Diagnostic::error(self.code())
            .with_message(self.to_string())
            .with_line(line)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages_match_summary_text() {
        let err: StatementError = DeclarationError::UnsupportedType {
            ty: "string".to_string(),
        }
        .into();
        assert_eq!(
            err.to_diagnostic(1).to_string(),
            "Error: Unsupported variable type 'string'"
        );

        let err: StatementError = AssignmentError::Undeclared {
            name: "z".to_string(),
        }
        .into();
        assert_eq!(
            err.to_diagnostic(1).to_string(),
            "Error: Variable 'z' is not declared"
        );
    }

    #[test]
    fn test_codes_follow_origin() {
        let err: StatementError = InvalidStatementError {
            line: "foo".to_string(),
        }
        .into();
        assert_eq!(err.code(), ErrorCode::E5001);

        let err: StatementError = ExpressionError::Unassigned {
            name: "x".to_string(),
        }
        .into();
        assert_eq!(err.code(), ErrorCode::E4002);

        let err: StatementError = ConditionError::InvalidValue {
            value: "ten".to_string(),
        }
        .into();
        assert_eq!(err.code(), ErrorCode::E3003);
    }

    #[test]
    fn test_diagnostic_carries_line() {
        let err: StatementError = AssignmentError::Malformed {
            line: "a:=b:=c".to_string(),
        }
        .into();
        let diag = err.to_diagnostic(9);
        assert_eq!(diag.line, Some(9));
        assert_eq!(diag.code, ErrorCode::E2001);
    }
}
