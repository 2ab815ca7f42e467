//! annotext-analysis - built-in linguistic analysis backend.
//!
//! Implements the `AnalysisProvider` capability with rule-based components:
//! Unicode segmentation for tokens and sentences, Snowball stemming for
//! lemmas, pattern tables for coarse POS tags and named entities, and
//! trigram-based language detection. Heavier statistical backends can be
//! swapped in behind the same trait.

pub mod analysis;

pub use analysis::lexical::LexicalProvider;
pub use analysis::markup::HtmlStripper;
pub use analysis::ner::extract_entity_spans;
