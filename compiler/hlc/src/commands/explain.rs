//! The `explain` command: display documentation for HL error codes.

use hl_diagnostic::{ErrorCode, ErrorDocs};

/// Display detailed documentation for a given error code string.
pub fn explain_error(code_str: &str) -> i32 {
    let Ok(code) = code_str.parse::<ErrorCode>() else {
        eprintln!("Unknown error code: {code_str}");
        eprintln!();
        eprintln!("Codes have the format EXXXX where X is a digit.");
        eprintln!("Examples: E1002, E2002, E4001");
        return 1;
    };

    if let Some(doc) = ErrorDocs::get(code) {
        println!("{doc}");
        0
    } else {
        eprintln!("No documentation available for {code_str}");
        1
    }
}
