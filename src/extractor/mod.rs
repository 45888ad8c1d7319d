pub mod importance;
pub mod word;
pub mod phrase;

use std::fmt::{self, Display};

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::{
    stem::{EnglishStemmer, Stemmer},
    tree::{Node, Word},
};

use self::{
    phrase::{get_keyphrases, Keyphrase},
    word::{collect_important_words, get_keywords, Keyword},
};

/// Extraction settings
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Options {
    /// Try to return at most this many keywords and keyphrases.
    /// Ties at the cutoff score are all kept, so results can be longer;
    /// documents with few important words give fewer.
    pub maximum: usize,
}

impl Default for Options {
    fn default() -> Self {
        Self { maximum: 5 }
    }
}

impl Options {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_maximum(mut self, maximum: usize) -> Self {
        self.maximum = maximum;
        self
    }
}

/// Ranked keywords and keyphrases of one document
///
/// Both lists are ordered by descending score, scores normalized to (0, 1].
/// Matches borrow from the tree they were extracted from.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Extraction<'a> {
    pub keywords: Vec<Keyword<'a>>,
    pub keyphrases: Vec<Keyphrase<'a>>,
}

impl<'a> Extraction<'a> {
    pub fn is_empty(&self) -> bool {
        self.keywords.is_empty() && self.keyphrases.is_empty()
    }

    /// Every matched word with the normalized score of its keyword
    ///
    /// This is what a highlighting host writes back as `data.score`.
    pub fn word_scores(&self) -> Vec<(&'a Word, f64)> {
        self.keywords
            .iter()
            .flat_map(|keyword| {
                keyword
                    .matches
                    .iter()
                    .map(move |word_match| (word_match.node, keyword.score))
            })
            .collect()
    }
}

impl Display for Extraction<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Keywords:")?;
        for keyword in &self.keywords {
            writeln!(f, "    {:.6} {} ({})", keyword.score, keyword.stem, keyword.matches.len())?;
        }
        writeln!(f, "Keyphrases:")?;
        for keyphrase in &self.keyphrases {
            writeln!(
                f,
                "    {:.6} {} ({})",
                keyphrase.score,
                keyphrase.text(),
                keyphrase.matches.len()
            )?;
        }
        Ok(())
    }
}

/// Extract keywords and keyphrases with the default English stemmer
pub fn extract<'a>(tree: &'a Node, options: &Options) -> Extraction<'a> {
    extract_with(tree, options, &EnglishStemmer::new())
}

/// Extract keywords and keyphrases with a caller supplied stemmer
pub fn extract_with<'a, S>(tree: &'a Node, options: &Options, stemmer: &S) -> Extraction<'a>
where
    S: Stemmer + ?Sized,
{
    let important = collect_important_words(tree, stemmer);
    // keywords はコピーを正規化する; 生スコアはフレーズ計算で使う
    let keywords = get_keywords(&important, options.maximum);
    let keyphrases = get_keyphrases(&important, options.maximum, stemmer);

    debug!(
        stems = important.len(),
        keywords = keywords.len(),
        keyphrases = keyphrases.len(),
        maximum = options.maximum,
        "extracted keywords"
    );

    Extraction { keywords, keyphrases }
}
