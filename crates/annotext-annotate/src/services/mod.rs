pub mod aggregation;
pub mod document;
pub mod pipeline;
