//! Adaptive result rendering
//!
//! Agent payloads have no negotiated schema. `classify` turns an opaque
//! JSON value into an ordered list of sections, and the engine maps each
//! section to a specialized renderer with a generic fallback at the end.

pub mod citations;
pub mod classify;
pub mod engine;
pub mod generic;
pub mod markdown;
pub mod sources;

pub use citations::CitationTable;
pub use classify::{classify, FieldValue, Section, StatChip};
pub use engine::AgentResultView;
pub use generic::GenericField;
pub use markdown::Markdown;
pub use sources::SourceList;
