//! Condition Evaluator: `IDENT (<|>|==) (IDENT|NUMBER)`.

use std::cmp::Ordering;

use crate::environment::{LookupError, VariableTable};
use crate::errors::ConditionError;
use crate::value::Value;

/// Comparison operator.
#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub enum Comparison {
    Lt,
    Gt,
    Eq,
}

impl Comparison {
    pub fn symbol(self) -> &'static str {
        match self {
            Comparison::Lt => "<",
            Comparison::Gt => ">",
            Comparison::Eq => "==",
        }
    }

    fn holds(self, ordering: Option<Ordering>) -> bool {
        let wanted = match self {
            Comparison::Lt => Ordering::Less,
            Comparison::Gt => Ordering::Greater,
            Comparison::Eq => Ordering::Equal,
        };
        ordering == Some(wanted)
    }
}

/// Operators tried in order; the first one present splits the condition
/// at its first occurrence.
const COMPARISONS: &[Comparison] = &[Comparison::Lt, Comparison::Gt, Comparison::Eq];

/// Evaluate a condition to a boolean.
///
/// The right-hand side is resolved first: a declared variable's value, or
/// else a floating literal. The left-hand side must be a variable.
pub fn evaluate_condition(vars: &VariableTable, condition: &str) -> Result<bool, ConditionError> {
    let Some((op, left, right)) = COMPARISONS.iter().find_map(|op| {
        condition
            .split_once(op.symbol())
            .map(|(left, right)| (*op, left.trim(), right.trim()))
    }) else {
        return Err(ConditionError::Unsupported {
            condition: condition.to_string(),
        });
    };

    let rhs = if vars.contains(right) {
        variable(vars, right)?
    } else {
        right
            .parse::<f64>()
            .map(Value::Double)
            .map_err(|_| ConditionError::InvalidValue {
                value: right.to_string(),
            })?
    };
    let lhs = variable(vars, left)?;

    Ok(op.holds(lhs.compare(rhs)))
}

fn variable(vars: &VariableTable, name: &str) -> Result<Value, ConditionError> {
    vars.value(name).map_err(|err| match err {
        LookupError::Undeclared => ConditionError::UndefinedVariable {
            name: name.to_string(),
        },
        LookupError::Unassigned => ConditionError::Unassigned {
            name: name.to_string(),
        },
    })
}
