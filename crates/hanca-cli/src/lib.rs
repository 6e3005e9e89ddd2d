// hanca-cli: shared utilities for the Hanca command-line tools.

use std::ffi::OsString;
use std::fs::File;
use std::io::{self, BufRead, Write};
use std::path::{Path, PathBuf};
use std::process;

use serde::Serialize;
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

use hanca_core::analysis::WordTrace;
use hanca_engine::{HancaEngine, TranslatedLine};

/// Environment variable naming a table overlay file.
pub const TABLES_ENV: &str = "HANCA_TABLES";

/// Environment variable holding the log filter.
pub const LOG_ENV: &str = "HANCA_LOG";

/// Overlay file looked up under `~/.hanca`.
const USER_TABLES_FILE: &str = "tables.toml";

// ---------------------------------------------------------------------------
// Setup
// ---------------------------------------------------------------------------

/// Table overlay option shared by every binary.
#[derive(Debug, Clone, Default, clap::Args)]
pub struct TablesArg {
    /// TOML file with extra dictionary entries and suffix rules
    #[arg(short = 't', long = "tables", value_name = "PATH")]
    pub tables: Option<PathBuf>,
}

/// Install the stderr log subscriber. The filter comes from `HANCA_LOG`
/// and defaults to `warn`.
pub fn init_logging() {
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

/// Create the engine, applying a table overlay if one is found.
///
/// Search order:
/// 1. `tables_path` argument (if provided)
/// 2. `HANCA_TABLES` environment variable
/// 3. `~/.hanca/tables.toml`
///
/// The first two must name an existing file. With none of them the engine
/// uses the built-in tables only.
pub fn load_engine(tables_path: Option<&Path>) -> Result<HancaEngine, String> {
    let overlay = find_overlay(
        tables_path,
        std::env::var_os(TABLES_ENV),
        home_dir(),
    )?;
    let Some(path) = overlay else {
        debug!("no table overlay, using built-in tables");
        return Ok(HancaEngine::new());
    };

    let text = std::fs::read_to_string(&path)
        .map_err(|e| format!("failed to read {}: {e}", path.display()))?;
    let engine =
        HancaEngine::with_overlay(&text).map_err(|e| format!("{}: {e}", path.display()))?;
    info!(path = %path.display(), "loaded table overlay");
    Ok(engine)
}

fn find_overlay(
    explicit: Option<&Path>,
    env_value: Option<OsString>,
    home: Option<PathBuf>,
) -> Result<Option<PathBuf>, String> {
    if let Some(p) = explicit {
        return require_file(p.to_path_buf(), "--tables").map(Some);
    }
    if let Some(value) = env_value.filter(|v| !v.is_empty()) {
        return require_file(PathBuf::from(value), TABLES_ENV).map(Some);
    }
    Ok(home
        .map(|h| h.join(".hanca").join(USER_TABLES_FILE))
        .filter(|p| p.is_file()))
}

fn require_file(path: PathBuf, origin: &str) -> Result<PathBuf, String> {
    if path.is_file() {
        Ok(path)
    } else {
        Err(format!("table overlay {} (from {origin}) is not a file", path.display()))
    }
}

/// Get the user's home directory.
fn home_dir() -> Option<PathBuf> {
    std::env::var_os("HOME").map(PathBuf::from)
}

/// Print an error message and exit with code 1.
pub fn fatal(msg: &str) -> ! {
    eprintln!("error: {msg}");
    process::exit(1);
}

// ---------------------------------------------------------------------------
// Line translation
// ---------------------------------------------------------------------------

/// Translate `input` line by line into `out`. Blank lines are skipped;
/// returns the number of lines written.
pub fn translate_stream<R: BufRead, W: Write>(
    engine: &HancaEngine,
    input: R,
    is_proper_name: bool,
    out: &mut W,
) -> io::Result<usize> {
    let mut written = 0;
    for line in input.lines() {
        let line = line?;
        let text = line.trim();
        if text.is_empty() {
            continue;
        }
        writeln!(out, "{}", engine.translate_line(text, is_proper_name))?;
        written += 1;
    }
    Ok(written)
}

// ---------------------------------------------------------------------------
// Batch files
// ---------------------------------------------------------------------------

/// Errors from batch file translation.
#[derive(Debug, thiserror::Error)]
pub enum BatchError {
    #[error("unsupported input format: {} (expected .txt or .csv)", .0.display())]
    UnsupportedFormat(PathBuf),

    #[error("failed to read {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("failed to write output: {0}")]
    Write(#[from] io::Error),

    #[error("failed to encode record: {0}")]
    Json(#[from] serde_json::Error),
}

/// Output layout for batch results.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// Tab-separated with a TURKCE/HANCA header row
    #[default]
    Tsv,
    /// One JSON object per line
    Jsonl,
}

#[derive(Serialize)]
struct Pair<'a> {
    #[serde(rename = "TURKCE")]
    turkce: &'a str,
    #[serde(rename = "HANCA")]
    hanca: &'a str,
}

/// Read the records of a batch input file.
///
/// `.txt`: one record per non-blank line. `.csv`: the first column of every
/// row; there is no header row. Any other extension is rejected.
pub fn read_records(path: &Path) -> Result<Vec<String>, BatchError> {
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .map(str::to_ascii_lowercase);
    match ext.as_deref() {
        Some("txt") => read_text_records(path),
        Some("csv") => read_csv_records(path),
        _ => Err(BatchError::UnsupportedFormat(path.to_path_buf())),
    }
}

fn open(path: &Path) -> Result<File, BatchError> {
    File::open(path).map_err(|source| BatchError::Read {
        path: path.to_path_buf(),
        source,
    })
}

fn read_text_records(path: &Path) -> Result<Vec<String>, BatchError> {
    let reader = io::BufReader::new(open(path)?);
    let mut records = Vec::new();
    for line in reader.lines() {
        let line = line.map_err(|source| BatchError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        if !line.trim().is_empty() {
            records.push(line);
        }
    }
    Ok(records)
}

fn read_csv_records(path: &Path) -> Result<Vec<String>, BatchError> {
    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_reader(open(path)?);
    let mut records = Vec::new();
    for row in rdr.records() {
        let row = row?;
        records.push(row.get(0).unwrap_or_default().to_string());
    }
    Ok(records)
}

/// Write translated pairs in `format`.
pub fn write_pairs<W: Write>(
    rows: &[TranslatedLine],
    format: OutputFormat,
    out: &mut W,
) -> Result<(), BatchError> {
    match format {
        OutputFormat::Tsv => {
            let mut wtr = csv::WriterBuilder::new()
                .delimiter(b'\t')
                .has_headers(false)
                .from_writer(out);
            wtr.write_record(["TURKCE", "HANCA"])?;
            for row in rows {
                wtr.write_record([row.source.as_str(), row.hanca.as_str()])?;
            }
            wtr.flush()?;
        }
        OutputFormat::Jsonl => {
            for row in rows {
                let pair = Pair {
                    turkce: &row.source,
                    hanca: &row.hanca,
                };
                serde_json::to_writer(&mut *out, &pair)?;
                out.write_all(b"\n")?;
            }
        }
    }
    Ok(())
}

/// Translate a batch file and render the result in memory, so nothing is
/// written when any step fails.
pub fn translate_file(
    engine: &HancaEngine,
    input: &Path,
    format: OutputFormat,
) -> Result<(Vec<u8>, usize), BatchError> {
    let records = read_records(input)?;
    let rows = engine.translate_lines(&records, false);
    let mut buf = Vec::new();
    write_pairs(&rows, format, &mut buf)?;
    Ok((buf, rows.len()))
}

// ---------------------------------------------------------------------------
// Trace output
// ---------------------------------------------------------------------------

/// Print a word trace as an indented block.
pub fn write_trace<W: Write>(out: &mut W, word: &str, trace: &WordTrace) -> io::Result<()> {
    writeln!(out, "{word}: {}", trace.output)?;
    writeln!(out, "  normalized={}", trace.normalized)?;
    writeln!(out, "  stem={}", trace.stem)?;
    writeln!(out, "  root={} ({})", trace.root, trace.root_source.as_str())?;
    if let Some(harmony) = trace.harmony {
        writeln!(out, "  harmony={}", harmony.as_str())?;
    }
    for (pair, applied) in trace.suffixes.iter().zip(&trace.applied) {
        writeln!(out, "  suffix={}/{} -> {applied}", pair.thick, pair.thin)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn write_temp(dir: &tempfile::TempDir, name: &str, contents: &str) -> PathBuf {
        let path = dir.path().join(name);
        std::fs::write(&path, contents).unwrap();
        path
    }

    // -- overlay discovery --

    #[test]
    fn explicit_overlay_wins() {
        let dir = tempfile::tempdir().unwrap();
        let a = write_temp(&dir, "a.toml", "");
        let b = write_temp(&dir, "b.toml", "");
        let found = find_overlay(Some(&a), Some(b.into_os_string()), None).unwrap();
        assert_eq!(found, Some(a));
    }

    #[test]
    fn env_overlay_used_without_flag() {
        let dir = tempfile::tempdir().unwrap();
        let b = write_temp(&dir, "b.toml", "");
        let found = find_overlay(None, Some(b.clone().into_os_string()), None).unwrap();
        assert_eq!(found, Some(b));
    }

    #[test]
    fn missing_explicit_overlay_is_an_error() {
        let err = find_overlay(Some(Path::new("/nonexistent/t.toml")), None, None).unwrap_err();
        assert!(err.contains("--tables"), "{err}");
    }

    #[test]
    fn home_overlay_is_optional() {
        let dir = tempfile::tempdir().unwrap();
        let home = dir.path().to_path_buf();
        assert_eq!(find_overlay(None, None, Some(home.clone())).unwrap(), None);

        std::fs::create_dir(home.join(".hanca")).unwrap();
        let user = write_temp(&dir, ".hanca/tables.toml", "");
        assert_eq!(find_overlay(None, None, Some(home)).unwrap(), Some(user));
    }

    #[test]
    fn empty_env_value_is_ignored() {
        assert_eq!(find_overlay(None, Some(OsString::new()), None).unwrap(), None);
    }

    #[test]
    fn load_engine_applies_overlay() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_temp(&dir, "t.toml", "[dictionary]\nev = \"dom\"\n");
        let engine = load_engine(Some(&path)).unwrap();
        assert_eq!(engine.translate_word("ev"), "dom");
    }

    #[test]
    fn load_engine_reports_bad_overlay() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_temp(&dir, "t.toml", "[dictionary\n");
        let err = load_engine(Some(&path)).unwrap_err();
        assert!(err.contains("t.toml"), "{err}");
    }

    // -- line translation --

    #[test]
    fn stream_skips_blank_lines() {
        let engine = HancaEngine::new();
        let mut out = Vec::new();
        let n = translate_stream(&engine, Cursor::new("ben\n\n  \nOnlar!\n"), false, &mut out)
            .unwrap();
        assert_eq!(n, 2);
        assert_eq!(String::from_utf8(out).unwrap(), "vo\nxwax!\n");
    }

    #[test]
    fn stream_proper_names() {
        let engine = HancaEngine::new();
        let mut out = Vec::new();
        translate_stream(&engine, Cursor::new("ankara\n"), true, &mut out).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "AnkarA\n");
    }

    // -- batch input --

    #[test]
    fn text_records() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_temp(&dir, "words.txt", "ben\r\n\nsen ve o\n");
        assert_eq!(read_records(&path).unwrap(), ["ben", "sen ve o"]);
    }

    #[test]
    fn csv_first_column() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_temp(&dir, "words.CSV", "ben,1\n\"sen, o\",2\nonlar\n");
        assert_eq!(read_records(&path).unwrap(), ["ben", "sen, o", "onlar"]);
    }

    #[test]
    fn unsupported_extension() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_temp(&dir, "words.xlsx", "");
        let err = read_records(&path).unwrap_err();
        assert!(matches!(err, BatchError::UnsupportedFormat(_)));
        assert!(err.to_string().contains("words.xlsx"));
    }

    #[test]
    fn missing_input() {
        let err = read_records(Path::new("/nonexistent/words.txt")).unwrap_err();
        assert!(matches!(err, BatchError::Read { .. }));
    }

    // -- batch output --

    fn rows() -> Vec<TranslatedLine> {
        HancaEngine::new().translate_lines(["ben", "Onlar!"], false)
    }

    #[test]
    fn tsv_output() {
        let mut out = Vec::new();
        write_pairs(&rows(), OutputFormat::Tsv, &mut out).unwrap();
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "TURKCE\tHANCA\nben\tvo\nOnlar!\txwax!\n"
        );
    }

    #[test]
    fn jsonl_output() {
        let mut out = Vec::new();
        write_pairs(&rows(), OutputFormat::Jsonl, &mut out).unwrap();
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "{\"TURKCE\":\"ben\",\"HANCA\":\"vo\"}\n{\"TURKCE\":\"Onlar!\",\"HANCA\":\"xwax!\"}\n"
        );
    }

    #[test]
    fn translate_file_counts_rows() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_temp(&dir, "words.txt", "ben\nsen\n");
        let (buf, n) = translate_file(&HancaEngine::new(), &path, OutputFormat::Tsv).unwrap();
        assert_eq!(n, 2);
        assert!(String::from_utf8(buf).unwrap().ends_with("sen\tze\n"));
    }

    // -- traces --

    #[test]
    fn trace_block() {
        let engine = HancaEngine::new();
        let mut out = Vec::new();
        write_trace(&mut out, "bizler", &engine.analyze("bizler")).unwrap();
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "bizler: voxax\n  normalized=bizler\n  stem=biz\n  root=vox (dictionary-stem)\n  harmony=thick\n  suffix=ax/ex -> ax\n"
        );
    }
}
