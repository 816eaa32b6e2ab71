//! HL interpreter CLI.

use hlc::commands::{check_file, explain_error, lex_file, run_file};
use hlc::config::RunConfig;
use hlc::tracing_setup::init_tracing;

fn main() {
    init_tracing();

    let args: Vec<String> = std::env::args().collect();

    // Bare `hl` runs PROG1.HL (or $HL_SOURCE) with the default artifacts.
    let Some(command) = args.get(1) else {
        std::process::exit(with_config(&[], run_file));
    };

    let code = match command.as_str() {
        "run" => with_config(&args[2..], run_file),
        "check" => {
            if args.len() < 3 {
                eprintln!("Usage: hl check <file.hl>");
                std::process::exit(1);
            }
            with_config(&args[2..], check_file)
        }
        "lex" => {
            if args.len() < 3 {
                eprintln!("Usage: hl lex <file.hl>");
                std::process::exit(1);
            }
            with_config(&args[2..], lex_file)
        }
        "--explain" | "explain" => {
            if args.len() < 3 {
                eprintln!("Usage: hl --explain <ERROR_CODE>");
                eprintln!("Example: hl --explain E2002");
                std::process::exit(1);
            }
            explain_error(&args[2])
        }
        "help" | "--help" | "-h" => {
            print_usage();
            0
        }
        "version" | "--version" | "-V" => {
            println!("HL Interpreter {}", env!("CARGO_PKG_VERSION"));
            0
        }
        _ => {
            // If it looks like a source file or a run option, run it
            if command.starts_with("--") || looks_like_source(command) {
                with_config(&args[1..], run_file)
            } else {
                eprintln!("Unknown command: {command}");
                eprintln!();
                print_usage();
                1
            }
        }
    };

    std::process::exit(code);
}

fn looks_like_source(arg: &str) -> bool {
    std::path::Path::new(arg)
        .extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("hl"))
}

fn with_config(args: &[String], command: fn(&RunConfig) -> i32) -> i32 {
    match RunConfig::from_env_args(args) {
        Ok(config) => command(&config),
        Err(err) => {
            eprintln!("error: {err}");
            eprintln!();
            print_usage();
            1
        }
    }
}

fn print_usage() {
    println!("HL Interpreter");
    println!();
    println!("Usage: hl [command] [file.hl] [options]");
    println!();
    println!("Commands:");
    println!("  run [file.hl]        Run a program, write artifacts, print the summary");
    println!("  check <file.hl>      Run silently and list coded diagnostics");
    println!("  lex <file.hl>        Show normalized lines and classified tokens");
    println!("  --explain <code>     Explain an error code (e.g., E2002)");
    println!("  help                 Show this help message");
    println!("  version              Show version information");
    println!();
    println!("With no command, `hl` runs PROG1.HL (or $HL_SOURCE).");
    println!();
    println!("Run options:");
    println!("  --nospaces=<path>    Normalized-code artifact (default: NOSPACES.TXT)");
    println!("  --res-sym=<path>     Classified-token artifact (default: RES_SYM.TXT)");
    println!();
    println!("Examples:");
    println!("  hl                              # Run PROG1.HL");
    println!("  hl run demo.hl");
    println!("  hl demo.hl --nospaces=out.txt");
    println!("  hl check demo.hl");
    println!("  hl --explain E1002              # Explain unsupported type");
}
