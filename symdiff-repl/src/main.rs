//! A read-eval-print loop for the calculus engine.
//!
//! Each line is parsed and echoed back, then differentiated twice with respect to `x`, with
//! both derivatives simplified and printed, and finally the first derivative is evaluated at a
//! sample point. Parse errors are printed as source-annotated reports instead.

use ariadne::Source;
use rustyline::error::ReadlineError;
use rustyline::DefaultEditor;
use std::collections::HashMap;
use std::io::{self, IsTerminal, Read};
use symdiff::ctxt::Ctxt;
use symdiff::parser::Parser;

/// The value of `x` used for the sample evaluation.
const SAMPLE_X: f64 = 12.46;

fn process_line(input: &str, ctxt: &Ctxt) {
    let ast = Parser::from_source(input, ctxt).parse_full();
    if let Some(err) = ast.as_error() {
        err.build_report("input")
            .eprint(("input", Source::from(input)))
            .unwrap();
        return;
    }

    println!("{ast}");

    let first = ast.differentiate("x").simplify();
    println!("d/dx: {first}");

    let second = first.differentiate("x").simplify();
    println!("d^2/dx^2: {second}");

    let bindings = HashMap::from([("x".to_string(), SAMPLE_X)]);
    println!("d/dx at x = {SAMPLE_X}: {}", first.evaluate(&bindings));
}

fn main() {
    let ctxt = Ctxt::default();

    if !io::stdin().is_terminal() {
        let mut input = String::new();
        io::stdin().read_to_string(&mut input).unwrap();
        for line in input.lines().filter(|line| !line.trim().is_empty()) {
            process_line(line, &ctxt);
        }
        return;
    }

    let mut rl = DefaultEditor::new().unwrap();
    loop {
        match rl.readline("> ") {
            Ok(line) => {
                if line.trim().is_empty() {
                    continue;
                }
                let _ = rl.add_history_entry(&line);
                process_line(&line, &ctxt);
            }
            Err(ReadlineError::Eof | ReadlineError::Interrupted) => break,
            Err(err) => {
                eprintln!("{err}");
                break;
            }
        }
    }
}
