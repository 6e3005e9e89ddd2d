// hanca-translate: Translate Turkish text into Hanca.
//
// Translates the TEXT arguments as one line, or reads lines from stdin and
// prints one translated line per non-blank input line.
//
// Usage:
//   hanca-translate [-t TABLES] [--proper] [TEXT...]

use std::io::{self, Write};

use clap::Parser;

use hanca_cli::TablesArg;

/// Translate Turkish text into Hanca.
#[derive(Parser, Debug)]
#[command(name = "hanca-translate", version, about, long_about = None)]
struct Args {
    #[command(flatten)]
    tables: TablesArg,

    /// Treat input as proper names: re-case tokens instead of translating
    #[arg(short = 'p', long)]
    proper: bool,

    /// Text to translate; reads stdin when omitted
    text: Vec<String>,
}

fn main() {
    let args = Args::parse();
    hanca_cli::init_logging();

    let engine = hanca_cli::load_engine(args.tables.tables.as_deref())
        .unwrap_or_else(|e| hanca_cli::fatal(&e));

    let stdout = io::stdout();
    let mut out = io::BufWriter::new(stdout.lock());

    let result = if args.text.is_empty() {
        let stdin = io::stdin();
        hanca_cli::translate_stream(&engine, stdin.lock(), args.proper, &mut out).map(|_| ())
    } else {
        let line = args.text.join(" ");
        writeln!(out, "{}", engine.translate_line(&line, args.proper))
    };

    if let Err(e) = result.and_then(|()| out.flush()) {
        hanca_cli::fatal(&format!("I/O error: {e}"));
    }
}
