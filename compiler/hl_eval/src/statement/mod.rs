//! Statement classification.
//!
//! Classification is a first-match-wins walk over an ordered rule list.
//! The order is observable: a line containing both `:` and `:=` is an
//! assignment, and a conditional-open line wins over a pending body.

/// Separator between a declared name and its type.
pub const DECLARATION_SEPARATOR: &str = ":";
/// Separator between an assigned name and its literal.
pub const ASSIGNMENT_SEPARATOR: &str = ":=";
/// Prefix of a conditional-open line.
pub const CONDITIONAL_PREFIX: &str = "if(";
/// Required last character of a conditional-open line.
pub const CONDITIONAL_SUFFIX: &str = ")";
/// Prefix of an output statement.
pub const OUTPUT_PREFIX: &str = "output<<";
/// Statement terminator removed before dispatch.
pub const TERMINATOR: char = ';';

/// A classified line, borrowing from the line text.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Statement<'a> {
    /// `name: type`
    Declaration(&'a str),
    /// `name := literal`
    Assignment(&'a str),
    /// `if(<condition>)`; holds the trimmed condition text.
    ConditionalOpen { condition: &'a str },
    /// The one line following a conditional-open line.
    ConditionalBody { condition: &'a str, body: &'a str },
    /// `output<<...`; holds the trimmed text after the prefix.
    Output(&'a str),
    /// Nothing matched.
    Invalid(&'a str),
}

/// Shape of a statement, for logging and rule tables.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StatementKind {
    Declaration,
    Assignment,
    ConditionalOpen,
    ConditionalBody,
    Output,
    Invalid,
}

impl StatementKind {
    pub fn as_str(self) -> &'static str {
        match self {
            StatementKind::Declaration => "declaration",
            StatementKind::Assignment => "assignment",
            StatementKind::ConditionalOpen => "conditional-open",
            StatementKind::ConditionalBody => "conditional-body",
            StatementKind::Output => "output",
            StatementKind::Invalid => "invalid",
        }
    }
}

type Rule = fn(&str, bool) -> bool;

/// Ordered classification rules. `Invalid` is the fallback.
const RULES: &[(Rule, StatementKind)] = &[
    (is_declaration, StatementKind::Declaration),
    (is_assignment, StatementKind::Assignment),
    (is_conditional_open, StatementKind::ConditionalOpen),
    (is_pending_body, StatementKind::ConditionalBody),
    (is_output, StatementKind::Output),
];

fn is_declaration(line: &str, _pending: bool) -> bool {
    line.contains(DECLARATION_SEPARATOR) && !line.contains(ASSIGNMENT_SEPARATOR)
}

fn is_assignment(line: &str, _pending: bool) -> bool {
    line.contains(ASSIGNMENT_SEPARATOR)
}

fn is_conditional_open(line: &str, _pending: bool) -> bool {
    line.starts_with(CONDITIONAL_PREFIX) && line.ends_with(CONDITIONAL_SUFFIX)
}

fn is_pending_body(_line: &str, pending: bool) -> bool {
    pending
}

fn is_output(line: &str, _pending: bool) -> bool {
    line.starts_with(OUTPUT_PREFIX)
}

/// Remove a single trailing statement terminator.
pub fn strip_terminator(line: &str) -> &str {
    line.strip_suffix(TERMINATOR).unwrap_or(line)
}

/// Pick the statement kind of `line`.
pub fn classify_kind(line: &str, pending: bool) -> StatementKind {
    RULES
        .iter()
        .find(|(rule, _)| rule(line, pending))
        .map_or(StatementKind::Invalid, |(_, kind)| *kind)
}

impl<'a> Statement<'a> {
    /// Classify a terminator-stripped line.
    ///
    /// `pending` is the condition of an open conditional, if any.
    pub fn classify(line: &'a str, pending: Option<&'a str>) -> Statement<'a> {
        match classify_kind(line, pending.is_some()) {
            StatementKind::Declaration => Statement::Declaration(line),
            StatementKind::Assignment => Statement::Assignment(line),
            StatementKind::ConditionalOpen => {
                let inner = line
                    .strip_prefix(CONDITIONAL_PREFIX)
                    .and_then(|rest| rest.strip_suffix(CONDITIONAL_SUFFIX))
                    .unwrap_or_default();
                Statement::ConditionalOpen {
                    condition: inner.trim(),
                }
            }
            StatementKind::ConditionalBody => match pending {
                Some(condition) => Statement::ConditionalBody {
                    condition,
                    body: line.trim(),
                },
                None => Statement::Invalid(line),
            },
            StatementKind::Output => {
                let rest = line.strip_prefix(OUTPUT_PREFIX).unwrap_or_default();
                Statement::Output(rest.trim())
            }
            StatementKind::Invalid => Statement::Invalid(line),
        }
    }

    pub fn kind(&self) -> StatementKind {
        match self {
            Statement::Declaration(_) => StatementKind::Declaration,
            Statement::Assignment(_) => StatementKind::Assignment,
            Statement::ConditionalOpen { .. } => StatementKind::ConditionalOpen,
            Statement::ConditionalBody { .. } => StatementKind::ConditionalBody,
            Statement::Output(_) => StatementKind::Output,
            Statement::Invalid(_) => StatementKind::Invalid,
        }
    }
}
