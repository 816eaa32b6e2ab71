//! `name := literal`

use tracing::debug;

use crate::environment::VariableTable;
use crate::errors::AssignmentError;
use crate::statement::ASSIGNMENT_SEPARATOR;

/// Parse the literal by the variable's declared type and store it.
///
/// Atomic: on any failure the variable keeps its previous value.
pub fn execute_assignment(vars: &mut VariableTable, line: &str) -> Result<(), AssignmentError> {
    let parts: Vec<&str> = line.split(ASSIGNMENT_SEPARATOR).collect();
    let [name, literal] = parts.as_slice() else {
        return Err(AssignmentError::Malformed {
            line: line.to_string(),
        });
    };
    let name = name.trim();
    let literal = literal.trim();

    let Some(var) = vars.get(name) else {
        return Err(AssignmentError::Undeclared {
            name: name.to_string(),
        });
    };
    let Some(value) = var.ty.parse_literal(literal) else {
        return Err(AssignmentError::InvalidValue {
            value: literal.to_string(),
            name: name.to_string(),
        });
    };

    debug!(name, %value, "assign");
    vars.assign(name, value)
        .map_err(|_| AssignmentError::Undeclared {
            name: name.to_string(),
        })
}
