//! HL Eval - statement dispatcher and evaluator for the HL interpreter.
//!
//! # Architecture
//!
//! One line at a time:
//!
//! ```text
//! raw line ──► hl_lexer::scan_line ──► normalized / classified logs
//!     │
//!     ▼
//! Statement::classify ──► Declaration | Assignment | ConditionalOpen
//!     │                   | ConditionalBody | Output | Invalid
//!     ▼
//! exec::* handlers ──► VariableTable mutation, printed output
//!     │
//!     ▼
//! StatementError ──► Diagnostic ──► DiagnosticLog
//! ```
//!
//! - `Session`: owns every table and log of one run, plus the single
//!   pending-conditional slot
//! - `Statement`: tagged result of the ordered classification rules
//! - `evaluate_expression` / `evaluate_condition`: first-match operator
//!   splitting over fixed operator tables
//! - `PrintHandlerImpl`: where output statements go

mod environment;
pub mod errors;
pub mod exec;
mod print_handler;
mod session;
pub mod statement;
mod value;

pub use environment::{LookupError, Variable, VariableTable};
pub use errors::{
    AssignmentError, ConditionError, DeclarationError, ExpressionError, InvalidStatementError,
    StatementError,
};
pub use exec::{evaluate_condition, evaluate_expression};
pub use print_handler::{
    buffer_handler, silent_handler, stdout_handler, BufferPrintHandler, PrintHandlerImpl,
    SharedPrintHandler,
};
pub use session::{RunStatus, Session, EXIT_SENTINEL};
pub use statement::{Statement, StatementKind};
pub use value::{Value, VarType};
