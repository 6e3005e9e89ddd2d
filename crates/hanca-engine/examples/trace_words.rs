// Print the full translation trace for a few words, or for the words given
// on the command line.
use hanca_engine::HancaEngine;

fn main() {
    let engine = HancaEngine::new();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let words: Vec<String> = if args.is_empty() {
        ["onlar", "bizlerde", "kitaplar", "evlerimizden", "g\u{00F6}zl\u{00FC}k\u{00E7}\u{00FC}"]
            .iter()
            .map(|w| w.to_string())
            .collect()
    } else {
        args
    };

    for word in &words {
        let t = engine.analyze(word);
        println!("{:15} -> {}", word, t.output);
        println!(
            "  stem={}, root={} ({}), harmony={}",
            t.stem,
            t.root,
            t.root_source.as_str(),
            t.harmony.map_or("-", |h| h.as_str())
        );
        if !t.applied.is_empty() {
            println!("  suffixes: {}", t.applied.join(" + "));
        }
    }
}
