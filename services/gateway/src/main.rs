mod error;
mod parser;
mod session;

use std::fs::File;
use std::io::{self, BufRead, BufReader};

use anyhow::Context;

use session::Session;

/// Feed every line of `input` through a fresh session, printing each
/// resulting line verbatim. Bad lines never abort the run.
fn run(input: &mut dyn BufRead) -> Result<(), anyhow::Error> {
    let mut session = Session::new();
    for line in input.lines() {
        let line = line.context("failed to read input line")?;
        for output in session.handle_line(&line) {
            println!("{output}");
        }
    }
    Ok(())
}

fn main() -> Result<(), anyhow::Error> {
    // Logs go to stderr so they never mix with the wire output
    tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .init();

    let path = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "actions.txt".to_string());

    if path == "-" {
        tracing::info!("reading actions from stdin");
        run(&mut io::stdin().lock())
    } else {
        tracing::info!("reading actions from {path}");
        let file = File::open(&path).with_context(|| format!("failed to read {path}"))?;
        run(&mut BufReader::new(file))
    }
}
