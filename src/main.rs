// evalr: space-separated arithmetic expression evaluator

use std::io::{self, Write};
use std::process;

use crossterm::style::Stylize;

use evalr::{EvalOptions, Evaluator, TokenPolicy};

fn usage(program_name: &str) {
    eprintln!("Usage: {} [--strict] [--trace] <count> <expr>...", program_name);
    eprintln!();
    eprintln!("Examples:");
    eprintln!("  {} 2 \"3 + 4\" \"( 2 + 3 ) * 4\"", program_name);
    eprintln!("  {} --trace 1 \"( 1 + ( 2 * 3 ) )\"", program_name);
}

fn fail(message: &str) {
    eprintln!("{} {}", "error:".red().bold(), message);
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let mut args = std::env::args();
    let program_name = args.next().unwrap_or_else(|| "evalr".to_string());
    let mut args = args.peekable();

    // Leading flags configure the evaluator
    let mut options = EvalOptions::default();
    while let Some(flag) = args.next_if(|arg| arg.starts_with("--")) {
        match flag.as_str() {
            "--strict" => options.policy = TokenPolicy::Strict,
            "--trace" => options.trace = true,
            _ => {
                fail(&format!("unknown option '{}'", flag));
                usage(&program_name);
                process::exit(2);
            }
        }
    }

    let Some(count) = args.next() else {
        return Ok(());
    };

    let count = match count.parse::<i64>() {
        Ok(n) => usize::try_from(n).unwrap_or(0),
        Err(_) => {
            fail(&format!("expression count '{}' is not an integer", count));
            usage(&program_name);
            process::exit(2);
        }
    };

    let expressions: Vec<String> = args.collect();
    if count > expressions.len() {
        return Ok(());
    }

    let mut evaluator = Evaluator::new(options);
    let mut stdout = io::stdout().lock();

    for expression in expressions.iter().take(count) {
        let result = evaluator.evaluate(expression);

        if options.trace {
            eprintln!("{}:", expression);
            for step in evaluator.trace() {
                eprintln!("  {}", step);
            }
            if evaluator.trace_truncated() {
                eprintln!("  ... trace truncated after {} steps", options.trace_limit);
            }
        }

        match result {
            Ok(value) => writeln!(stdout, "{}", value)?,
            Err(e) => {
                stdout.flush()?;
                fail(&e.to_string());
                process::exit(1);
            }
        }
    }

    Ok(())
}
