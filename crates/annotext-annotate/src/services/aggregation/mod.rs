pub mod aggregator;
pub mod ngram;
pub mod ranking;

pub use aggregator::{aggregate, filter_content_lemmas, AnnotationAggregator};
pub use ngram::{count_ngrams, ranked_ngrams};
pub use ranking::rank_by_frequency;
