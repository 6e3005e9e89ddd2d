// hanca-engine: Turkish-to-Hanca translation.
//
// Pipeline per word: normalize, whole-word dictionary lookup, suffix
// stripping, root lookup or synthesis, harmony-aware recomposition.
// `HancaEngine` is the entry point; the modules are public for tooling
// that needs the individual stages.

pub mod engine;
pub mod harmony;
pub mod morphology;
pub mod synthesis;
pub mod tables;

pub use engine::{EngineError, HancaEngine, TranslatedLine};
pub use tables::{TableError, Tables};
