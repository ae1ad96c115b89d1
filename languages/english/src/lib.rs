pub mod lexicon;
pub mod loader;

pub use lexicon::{EnglishLexicon, LoadError};
pub use loader::EnglishLexiconLoader;
