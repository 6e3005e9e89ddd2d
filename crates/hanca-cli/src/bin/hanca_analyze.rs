// hanca-analyze: Show how each word is translated.
//
// For every word prints the normalized form, the stem left after suffix
// stripping, where the root came from, the harmony class and each suffix
// as attached.
//
// Usage:
//   hanca-analyze [-t TABLES] [WORD...]

use std::io::{self, BufRead, Write};

use clap::Parser;

use hanca_cli::TablesArg;

/// Show how each word is translated.
#[derive(Parser, Debug)]
#[command(name = "hanca-analyze", version, about, long_about = None)]
struct Args {
    #[command(flatten)]
    tables: TablesArg,

    /// Words to analyze; reads stdin (one word per line) when omitted
    words: Vec<String>,
}

fn main() {
    let args = Args::parse();
    hanca_cli::init_logging();

    let engine = hanca_cli::load_engine(args.tables.tables.as_deref())
        .unwrap_or_else(|e| hanca_cli::fatal(&e));

    let stdout = io::stdout();
    let mut out = io::BufWriter::new(stdout.lock());

    let mut analyze_word = |word: &str| -> io::Result<()> {
        hanca_cli::write_trace(&mut out, word, &engine.analyze(word))
    };

    let result = if args.words.is_empty() {
        let stdin = io::stdin();
        stdin.lock().lines().try_for_each(|line| {
            let line = line?;
            let word = line.trim();
            if word.is_empty() {
                return Ok(());
            }
            analyze_word(word)
        })
    } else {
        args.words.iter().try_for_each(|w| analyze_word(w))
    };

    if let Err(e) = result.and_then(|()| out.flush()) {
        hanca_cli::fatal(&format!("I/O error: {e}"));
    }
}
