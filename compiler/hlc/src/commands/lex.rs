//! The `lex` command: show what the classifier records for each line.

use hl_eval::EXIT_SENTINEL;
use hl_lexer::scan_line;

use super::read_lines_or_report;
use crate::config::RunConfig;

/// Print each line's normalized form and classified tokens without
/// executing anything. Stops at the exit sentinel like a run does.
pub fn lex_file(config: &RunConfig) -> i32 {
    let Some(lines) = read_lines_or_report(config) else {
        return 1;
    };

    for (index, raw) in lines.iter().enumerate() {
        let line = raw.trim();
        if line.eq_ignore_ascii_case(EXIT_SENTINEL) {
            println!("{:>4}: <exit>", index + 1);
            break;
        }
        let scan = scan_line(line);
        println!("{:>4}: {}", index + 1, scan.normalized);
        for token in &scan.tokens {
            println!("        {token}");
        }
    }
    0
}
