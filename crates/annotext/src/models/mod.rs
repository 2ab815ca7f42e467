pub mod annotation;
pub mod document;

pub use annotation::{
    AnnotatedToken, AnnotationResult, EntitySpan, NamedEntity, NgramCount, PosEntry,
    TokenOccurrence,
};
pub use document::{ContentType, ProcessedDocument, RawDocument};
