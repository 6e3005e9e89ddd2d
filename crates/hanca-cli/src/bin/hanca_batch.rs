// hanca-batch: Translate every record of a word list file.
//
// Reads a .txt file (one record per line) or a .csv file (first column,
// no header) and writes TURKCE/HANCA pairs as TSV or JSON lines. Output is
// only written once the whole file has been translated.
//
// Usage:
//   hanca-batch [-t TABLES] [--format tsv|jsonl] [-o OUT] INPUT

use std::io::{self, Write};
use std::path::PathBuf;

use clap::Parser;
use tracing::info;

use hanca_cli::{OutputFormat, TablesArg};

/// Translate every record of a word list file.
#[derive(Parser, Debug)]
#[command(name = "hanca-batch", version, about, long_about = None)]
struct Args {
    #[command(flatten)]
    tables: TablesArg,

    /// Output format
    #[arg(short = 'f', long, value_enum, default_value_t = OutputFormat::Tsv)]
    format: OutputFormat,

    /// Output file; stdout when omitted
    #[arg(short = 'o', long, value_name = "OUT")]
    output: Option<PathBuf>,

    /// Input .txt or .csv file
    input: PathBuf,
}

fn main() {
    let args = Args::parse();
    hanca_cli::init_logging();

    let engine = hanca_cli::load_engine(args.tables.tables.as_deref())
        .unwrap_or_else(|e| hanca_cli::fatal(&e));

    let (buf, rows) = hanca_cli::translate_file(&engine, &args.input, args.format)
        .unwrap_or_else(|e| hanca_cli::fatal(&e.to_string()));

    let written = match &args.output {
        Some(path) => std::fs::write(path, &buf)
            .map_err(|e| format!("failed to write {}: {e}", path.display())),
        None => {
            let stdout = io::stdout();
            let mut out = stdout.lock();
            out.write_all(&buf)
                .and_then(|()| out.flush())
                .map_err(|e| format!("failed to write output: {e}"))
        }
    };
    if let Err(e) = written {
        hanca_cli::fatal(&e);
    }

    info!(rows, input = %args.input.display(), "batch translated");
}
