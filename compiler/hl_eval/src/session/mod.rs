//! Interpreter session: the shared state of one run and the per-line
//! dispatcher that mutates it.

use hl_diagnostic::DiagnosticLog;
use hl_lexer::ClassifiedToken;
use tracing::{debug, trace};

use crate::environment::VariableTable;
use crate::errors::{InvalidStatementError, StatementError};
use crate::exec::{
    evaluate_condition, execute_assignment, execute_declaration, render_output,
};
use crate::print_handler::SharedPrintHandler;
use crate::statement::{strip_terminator, Statement, OUTPUT_PREFIX};

/// Line that stops a run early, compared ignoring ASCII case.
pub const EXIT_SENTINEL: &str = "exit";

/// How a run over a line sequence ended.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RunStatus {
    /// Every line was processed.
    Completed,
    /// The exit sentinel was found on this 1-based source line.
    Exited { line: usize },
}

/// State of one interpreter run.
///
/// Created at run start, discarded at run end. Owns the variable table,
/// the single pending-conditional slot, the diagnostic log, and both
/// artifact logs.
pub struct Session {
    vars: VariableTable,
    pending: Option<String>,
    diagnostics: DiagnosticLog,
    normalized: Vec<String>,
    classified: Vec<ClassifiedToken>,
    printer: SharedPrintHandler,
    line_no: usize,
}

impl Session {
    pub fn new(printer: SharedPrintHandler) -> Self {
        Session {
            vars: VariableTable::new(),
            pending: None,
            diagnostics: DiagnosticLog::new(),
            normalized: Vec::new(),
            classified: Vec::new(),
            printer,
            line_no: 0,
        }
    }

    /// Feed lines in order until they run out or the exit sentinel appears.
    ///
    /// Each line is trimmed of surrounding whitespace first. The sentinel
    /// line is not logged.
    pub fn run<I, S>(&mut self, lines: I) -> RunStatus
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        for raw in lines {
            let line = raw.as_ref().trim();
            if line.eq_ignore_ascii_case(EXIT_SENTINEL) {
                let line = self.line_no + 1;
                debug!(line, "exit sentinel");
                return RunStatus::Exited { line };
            }
            self.process_line(line);
        }
        RunStatus::Completed
    }

    /// Log, classify, and execute one line.
    ///
    /// Never fails: a failing statement becomes one diagnostic.
    #[tracing::instrument(level = "debug", skip(self), fields(line_no = self.line_no + 1))]
    pub fn process_line(&mut self, line: &str) {
        self.line_no += 1;

        let scan = hl_lexer::scan_line(line);
        self.normalized.push(scan.normalized);
        self.classified.extend(scan.tokens);

        if let Err(err) = self.dispatch(strip_terminator(line)) {
            let diagnostic = err.to_diagnostic(self.line_no);
            debug!(code = %diagnostic.code, message = %diagnostic.message, "recorded diagnostic");
            self.diagnostics.push(diagnostic);
        }
    }

    fn dispatch(&mut self, line: &str) -> Result<(), StatementError> {
        // Whatever this line is, it consumes the pending conditional.
        let pending = self.pending.take();
        let statement = Statement::classify(line, pending.as_deref());
        debug!(kind = statement.kind().as_str(), "dispatch");

        match statement {
            Statement::Declaration(text) => execute_declaration(&mut self.vars, text)?,
            Statement::Assignment(text) => execute_assignment(&mut self.vars, text)?,
            Statement::ConditionalOpen { condition } => {
                self.pending = Some(condition.to_string());
            }
            Statement::ConditionalBody { condition, body } => {
                self.execute_body(condition, body)?;
            }
            Statement::Output(content) => self.execute_output(content)?,
            Statement::Invalid(text) => {
                return Err(InvalidStatementError {
                    line: text.to_string(),
                }
                .into());
            }
        }
        Ok(())
    }

    /// Run the body only when the condition holds and the body is an
    /// output statement. Any other body is ignored without a diagnostic.
    fn execute_body(&self, condition: &str, body: &str) -> Result<(), StatementError> {
        if !evaluate_condition(&self.vars, condition)? {
            trace!(condition, "condition false, body skipped");
            return Ok(());
        }
        match body.strip_prefix(OUTPUT_PREFIX) {
            Some(content) => self.execute_output(content.trim()),
            None => {
                trace!(body, "non-output body ignored");
                Ok(())
            }
        }
    }

    fn execute_output(&self, content: &str) -> Result<(), StatementError> {
        let text = render_output(&self.vars, content)?;
        self.printer.println(&text);
        Ok(())
    }

    pub fn variables(&self) -> &VariableTable {
        &self.vars
    }

    pub fn diagnostics(&self) -> &DiagnosticLog {
        &self.diagnostics
    }

    /// Condition text of the open conditional, if any.
    pub fn pending_condition(&self) -> Option<&str> {
        self.pending.as_deref()
    }

    /// Number of lines processed so far (the exit line is not counted).
    pub fn lines_processed(&self) -> usize {
        self.line_no
    }

    pub fn normalized_lines(&self) -> &[String] {
        &self.normalized
    }

    pub fn classified_tokens(&self) -> &[ClassifiedToken] {
        &self.classified
    }

    /// Normalized-code artifact: one normalized line per processed line.
    pub fn normalized_code(&self) -> String {
        self.normalized.join("\n")
    }

    /// Classified-token artifact: one `Reserved Word: X` / `Symbol: Y` per line.
    pub fn classified_code(&self) -> String {
        self.classified
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join("\n")
    }
}
