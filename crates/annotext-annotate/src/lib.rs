//! annotext-annotate - annotation aggregation and document processing.
//!
//! Takes the token/entity/sentence analysis produced by an
//! `AnalysisProvider` and derives the reported structure: frequency-ranked
//! tokens with occurrence positions, ranked bigrams and trigrams, and
//! ordered entity and part-of-speech listings.

pub mod services;

pub use services::aggregation::{aggregate, filter_content_lemmas, AnnotationAggregator};
pub use services::document::DocumentProcessor;
pub use services::pipeline::{BatchProcessResult, DocumentPipeline};
