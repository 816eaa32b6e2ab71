//! Expression Evaluator: `IDENT` or `IDENT (+|-) IDENT`.

use crate::environment::{LookupError, VariableTable};
use crate::errors::ExpressionError;
use crate::value::Value;

/// Binary arithmetic operator.
#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub enum ArithOp {
    Add,
    Sub,
}

impl ArithOp {
    pub fn symbol(self) -> char {
        match self {
            ArithOp::Add => '+',
            ArithOp::Sub => '-',
        }
    }

    pub fn apply(self, left: Value, right: Value) -> Value {
        match self {
            ArithOp::Add => left.plus(right),
            ArithOp::Sub => left.minus(right),
        }
    }
}

/// Operators tried in order; the first one present splits the expression
/// at its first occurrence. `a-b+c` therefore splits at `+`.
const OPERATORS: &[ArithOp] = &[ArithOp::Add, ArithOp::Sub];

/// Evaluate an output expression against the variable table.
pub fn evaluate_expression(vars: &VariableTable, expression: &str) -> Result<Value, ExpressionError> {
    let expression = expression.trim();

    for op in OPERATORS {
        let Some((left, right)) = expression.split_once(op.symbol()) else {
            continue;
        };
        let (left, right) = (left.trim(), right.trim());
        if !vars.contains(left) || !vars.contains(right) {
            return Err(ExpressionError::UndefinedOperands {
                left: left.to_string(),
                right: right.to_string(),
            });
        }
        let lhs = operand(vars, left)?;
        let rhs = operand(vars, right)?;
        return Ok(op.apply(lhs, rhs));
    }

    operand(vars, expression)
}

fn operand(vars: &VariableTable, name: &str) -> Result<Value, ExpressionError> {
    vars.value(name).map_err(|err| match err {
        LookupError::Undeclared => ExpressionError::UndefinedVariable {
            name: name.to_string(),
        },
        LookupError::Unassigned => ExpressionError::Unassigned {
            name: name.to_string(),
        },
    })
}
