pub mod language;
pub mod lexical;
pub mod markup;
pub mod ner;
pub mod pos;
pub mod tokenize;
