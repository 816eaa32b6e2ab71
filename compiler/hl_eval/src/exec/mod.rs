//! Statement handlers and the two evaluators.
//!
//! Handlers are free functions over the [`VariableTable`](crate::VariableTable)
//! returning typed errors; recording diagnostics is left to the session.

mod assignment;
mod condition;
mod declaration;
mod expr;
mod output;

pub use assignment::execute_assignment;
pub use condition::{evaluate_condition, Comparison};
pub use declaration::execute_declaration;
pub use expr::{evaluate_expression, ArithOp};
pub use output::render_output;
