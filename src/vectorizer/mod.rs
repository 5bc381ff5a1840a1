// Interest text -> weighted term vectors
mod tfidf;
mod tokenize;

#[cfg(test)]
mod tests;

pub use tfidf::{DEFAULT_MAX_FEATURES, TfidfMatrix, TfidfVectorizer};
pub use tokenize::{MIN_TOKEN_CHARS, tokenize};
