//! This crate extracts keywords and keyphrases from part-of-speech tagged
//! nlcst syntax trees.

pub mod error;
pub mod extractor;
pub mod stem;
pub mod tree;
pub mod utils;

/// Extract keywords and keyphrases
/// The entry point of this crate. Walks the tree once, grouping nouns and
/// capitalised adjectives by stem, then grows every occurrence into the
/// longest run of such words in its sentence.
///
/// Both result lists are ranked by a raw score and normalized so the best
/// item scores 1.0. `Options::maximum` is a target length, not a hard cap:
/// items tied at the cutoff score are all returned.
///
/// `extract` uses the Snowball English stemmer; `extract_with` takes any
/// `Stemmer`, including plain closures.
///
/// # Examples
/// ```
/// use nlcst_keywords::{extract, Node, Options};
///
/// let tree = Node::root(vec![Node::sentence(vec![
///     Node::word("Cats", "NNS"),
///     Node::whitespace(" "),
///     Node::word("chase", "NN"),
///     Node::whitespace(" "),
///     Node::word("mice", "NNS"),
///     Node::punctuation("."),
/// ])]);
///
/// let extraction = extract(&tree, &Options::default());
/// assert_eq!(extraction.keywords.len(), 3);
/// assert_eq!(extraction.keyphrases[0].value, "cat chase mice");
/// ```
pub use extractor::{extract, extract_with, Extraction, Options};

/// Keyword and Keyphrase result structures
/// - `Keyword`: one stem with its score and every word occurrence
/// - `Keyphrase`: one stem sequence with its score, per-occurrence weight and
///   every phrase occurrence
///
/// Matches hold references into the tree, so results live as long as it.
pub use extractor::{phrase::{Keyphrase, PhraseMatch}, word::{Keyword, WordMatch}};

/// nlcst Syntax Tree
/// Serde model of the nlcst node types (`RootNode`, `SentenceNode`,
/// `WordNode`, `WhiteSpaceNode`, ...). Trees usually arrive as JSON from a
/// parser and tagger; `Node::from_json` rejects malformed documents, such as a
/// word whose `partOfSpeech` is not a string.
pub use tree::{Node, Parent, Word, WordData};

/// Stemming
/// `Stemmer` is the pluggable stemming function; `EnglishStemmer` is the
/// Snowball English default.
pub use stem::{EnglishStemmer, Stemmer};

pub use error::{KeywordError, Result};
