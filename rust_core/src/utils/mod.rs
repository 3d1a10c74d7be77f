pub mod text;

pub use text::{contains_phrase, normalize, title_case, tokenize, words, Word};
