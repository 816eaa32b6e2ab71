//! `output<<"text"` and `output<<EXPR`.

use crate::environment::VariableTable;
use crate::errors::ExpressionError;

use super::evaluate_expression;

const QUOTE: char = '"';

/// Produce the line an output statement prints.
///
/// `content` is the trimmed text after `output<<`. A double-quoted literal
/// prints its interior verbatim (no escapes); anything else is evaluated as
/// an expression.
pub fn render_output(vars: &VariableTable, content: &str) -> Result<String, ExpressionError> {
    if let Some(text) = string_literal(content) {
        return Ok(text.to_string());
    }
    evaluate_expression(vars, content).map(|value| value.to_string())
}

/// Interior of a `"..."` literal. A lone `"` is an empty literal.
fn string_literal(content: &str) -> Option<&str> {
    if !(content.starts_with(QUOTE) && content.ends_with(QUOTE)) {
        return None;
    }
    let inner = content.strip_prefix(QUOTE).unwrap_or(content);
    Some(inner.strip_suffix(QUOTE).unwrap_or(inner))
}
