use std::fmt::Debug;

use rust_stemmers::{Algorithm, Stemmer as SnowballStemmer};

/// Word stemming boundary
///
/// Stemming is a pure function from surface text to a root form. The
/// extractor lowercases the result itself, so implementations need not.
/// Any `Fn(&str) -> String` closure is a stemmer.
pub trait Stemmer {
    fn stem(&self, word: &str) -> String;
}

impl<F> Stemmer for F
where
    F: Fn(&str) -> String,
{
    #[inline]
    fn stem(&self, word: &str) -> String {
        self(word)
    }
}

/// Snowball English stemmer, the default
///
/// Snowball rules only match lower case suffixes, so input is lowercased
/// before stemming.
pub struct EnglishStemmer {
    inner: SnowballStemmer,
}

impl EnglishStemmer {
    pub fn new() -> Self {
        Self {
            inner: SnowballStemmer::create(Algorithm::English),
        }
    }
}

impl Default for EnglishStemmer {
    fn default() -> Self {
        Self::new()
    }
}

impl Debug for EnglishStemmer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EnglishStemmer").finish_non_exhaustive()
    }
}

impl Stemmer for EnglishStemmer {
    #[inline]
    fn stem(&self, word: &str) -> String {
        self.inner.stem(&word.to_lowercase()).into_owned()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn english_strips_suffixes() {
        let stemmer = EnglishStemmer::new();
        assert_eq!(stemmer.stem("extraction"), "extract");
        assert_eq!(stemmer.stem("cats"), "cat");
        assert_eq!(stemmer.stem("term"), "term");
        assert_eq!(stemmer.stem("Cats"), "cat");
    }

    #[test]
    fn closures_are_stemmers() {
        let identity = |word: &str| word.to_string();
        assert_eq!(identity.stem("Mice"), "Mice");
    }
}
