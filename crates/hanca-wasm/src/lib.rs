// WASM bindings for the Hanca translation engine.
//
// Provides a `WasmHanca` class exported via wasm-bindgen that wraps
// `HancaEngine` from hanca-engine. Structured return values (batch pairs,
// word traces) are serialized to JavaScript values using serde-wasm-bindgen.
//
// Usage from JavaScript:
//
//   const hanca = new WasmHanca();            // or new WasmHanca(overlayToml)
//   hanca.translateLine("Onlar!", false);     // => "xwax!"
//   hanca.translateLine("ankara", true);      // => "AnkarA"
//   hanca.translateWord("onların");           // => "xwaxon"
//   hanca.translateLines(["ben", "sen"], false);
//                                             // => [{ source: "ben", hanca: "vo" }, ...]
//   hanca.analyze("bizler");                  // => { stem: "biz", rootSource: "dictionary-stem", ... }

use serde::Serialize;
use wasm_bindgen::prelude::*;

use hanca_core::analysis::WordTrace;
use hanca_engine::{EngineError, HancaEngine};

// ============================================================================
// Serde-serializable DTO types for JS interop
// ============================================================================

/// One attached suffix in a word trace.
#[derive(Debug, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
struct JsSuffix {
    thick: String,
    thin: String,
    applied: String,
}

/// Serializable representation of a word trace.
#[derive(Debug, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
struct JsWordTrace {
    normalized: String,
    stem: String,
    root: String,
    root_source: &'static str,
    harmony: Option<&'static str>,
    suffixes: Vec<JsSuffix>,
    output: String,
}

// ============================================================================
// Conversion helpers
// ============================================================================

fn trace_to_js(trace: WordTrace) -> JsWordTrace {
    let suffixes = trace
        .suffixes
        .into_iter()
        .zip(trace.applied)
        .map(|(pair, applied)| JsSuffix {
            thick: pair.thick,
            thin: pair.thin,
            applied,
        })
        .collect();
    JsWordTrace {
        normalized: trace.normalized,
        stem: trace.stem,
        root: trace.root,
        root_source: trace.root_source.as_str(),
        harmony: trace.harmony.map(|h| h.as_str()),
        suffixes,
        output: trace.output,
    }
}

fn engine_error_to_js(e: EngineError) -> JsError {
    JsError::new(&e.to_string())
}

// ============================================================================
// WasmHanca
// ============================================================================

/// Turkish-to-Hanca translator for WebAssembly.
#[wasm_bindgen]
pub struct WasmHanca {
    engine: HancaEngine,
}

#[wasm_bindgen]
impl WasmHanca {
    /// Create a translator with the built-in tables.
    ///
    /// - `overlay_toml`: optional TOML text with extra dictionary entries and
    ///   suffix rules, in the same format as the built-in tables
    #[wasm_bindgen(constructor)]
    pub fn new(overlay_toml: Option<String>) -> Result<WasmHanca, JsError> {
        let engine = match overlay_toml {
            Some(text) => HancaEngine::with_overlay(&text).map_err(engine_error_to_js)?,
            None => HancaEngine::new(),
        };
        Ok(WasmHanca { engine })
    }

    /// Translate a line of text. With `is_proper_name` the tokens are only
    /// re-cased.
    #[wasm_bindgen(js_name = "translateLine")]
    pub fn translate_line(&self, text: &str, is_proper_name: bool) -> String {
        self.engine.translate_line(text, is_proper_name)
    }

    /// Translate a single word.
    #[wasm_bindgen(js_name = "translateWord")]
    pub fn translate_word(&self, word: &str) -> String {
        self.engine.translate_word(word)
    }

    /// Translate many lines.
    ///
    /// Returns a JavaScript array of `{ source, hanca }` objects in input
    /// order.
    #[wasm_bindgen(js_name = "translateLines")]
    pub fn translate_lines(&self, lines: Vec<String>, is_proper_name: bool) -> Result<JsValue, JsError> {
        let pairs = self.engine.translate_lines(&lines, is_proper_name);
        serde_wasm_bindgen::to_value(&pairs).map_err(|e| JsError::new(&e.to_string()))
    }

    /// Show how a word is translated.
    ///
    /// Returns an object with fields `normalized`, `stem`, `root`,
    /// `rootSource`, `harmony` (null without suffixes), `suffixes`
    /// (`{ thick, thin, applied }`) and `output`.
    pub fn analyze(&self, word: &str) -> Result<JsValue, JsError> {
        let trace = trace_to_js(self.engine.analyze(word));
        serde_wasm_bindgen::to_value(&trace).map_err(|e| JsError::new(&e.to_string()))
    }

    /// Get the library version string.
    #[wasm_bindgen(js_name = "getVersion")]
    pub fn get_version() -> String {
        env!("CARGO_PKG_VERSION").to_string()
    }
}
