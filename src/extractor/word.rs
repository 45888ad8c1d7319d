use indexmap::IndexMap;
use serde::Serialize;

use crate::{
    stem::Stemmer,
    tree::{visit::visit_words, Node, Parent, Word},
    utils::normalizer::{filter_top, Scored},
};

use super::importance::is_important_word;

/// One occurrence of an important word
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct WordMatch<'a> {
    /// Matched word
    pub node: &'a Word,
    /// Index of `node` in `parent`
    pub index: usize,
    /// Sentence containing `node`
    #[serde(skip)]
    pub parent: &'a Parent,
}

impl<'a> WordMatch<'a> {
    /// The matched word as a sibling of the rest of the sentence
    pub fn as_node(&self) -> &'a Node {
        &self.parent.children[self.index]
    }
}

/// All occurrences of one stem
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Keyword<'a> {
    pub stem: String,
    /// Occurrence count, or the normalized score once filtered
    pub score: f64,
    pub matches: Vec<WordMatch<'a>>,
}

impl Scored for Keyword<'_> {
    fn score(&self) -> f64 {
        self.score
    }

    fn set_score(&mut self, score: f64) {
        self.score = score;
    }
}

/// Stem first, lowercase the stem second
pub fn stem_word<S>(word: &Word, stemmer: &S) -> String
where
    S: Stemmer + ?Sized,
{
    stemmer.stem(&word.text()).to_lowercase()
}

/// Group the important words of `tree` by stem, in document order
///
/// Scores are raw occurrence counts. Words that are not a direct child of a
/// sentence are skipped.
pub fn collect_important_words<'a, S>(tree: &'a Node, stemmer: &S) -> IndexMap<String, Keyword<'a>>
where
    S: Stemmer + ?Sized,
{
    let mut words: IndexMap<String, Keyword<'a>> = IndexMap::new();

    visit_words(tree, &mut |word: &'a Word, index, parent: &'a Node| {
        let Node::Sentence(sentence) = parent else {
            return;
        };
        if !is_important_word(word) {
            return;
        }

        let stem = stem_word(word, stemmer);
        let word_match = WordMatch {
            node: word,
            index,
            parent: sentence,
        };
        match words.get_mut(&stem) {
            Some(keyword) => {
                keyword.matches.push(word_match);
                keyword.score += 1.0;
            }
            None => {
                words.insert(
                    stem.clone(),
                    Keyword {
                        stem,
                        score: 1.0,
                        matches: vec![word_match],
                    },
                );
            }
        }
    });

    words
}

/// Top keywords with normalized scores
///
/// Works on a copy; the raw counts in `words` are left untouched for
/// phrase scoring.
pub fn get_keywords<'a>(words: &IndexMap<String, Keyword<'a>>, maximum: usize) -> Vec<Keyword<'a>> {
    filter_top(words.clone(), maximum)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::stem::EnglishStemmer;

    fn spaced(words: &[(&str, &str)]) -> Vec<Node> {
        let mut children = Vec::new();
        for (i, (text, tag)) in words.iter().enumerate() {
            if i > 0 {
                children.push(Node::whitespace(" "));
            }
            children.push(Node::word(text, tag));
        }
        children
    }

    #[test]
    fn groups_by_lowercased_stem() {
        let tree = Node::root(vec![Node::paragraph(vec![
            Node::sentence(spaced(&[("Cats", "NNS"), ("like", "VBP"), ("cat", "NN")])),
            Node::whitespace(" "),
            Node::sentence(spaced(&[("CATS", "NNS"), ("sleep", "VBP")])),
        ])]);

        let words = collect_important_words(&tree, &EnglishStemmer::new());
        assert_eq!(words.keys().collect::<Vec<_>>(), vec!["cat"]);

        let cat = &words["cat"];
        assert_eq!(cat.stem, "cat");
        assert_eq!(cat.score, 3.0);
        let texts: Vec<_> = cat.matches.iter().map(|m| m.node.text()).collect();
        assert_eq!(texts, vec!["Cats", "cat", "CATS"]);
        assert_eq!(
            cat.matches.iter().map(|m| m.index).collect::<Vec<_>>(),
            vec![0, 4, 0]
        );
    }

    #[test]
    fn match_points_back_into_its_sentence() {
        let tree = Node::sentence(spaced(&[("The", "DT"), ("dog", "NN")]));
        let words = collect_important_words(&tree, &EnglishStemmer::new());
        let dog = &words["dog"].matches[0];
        assert_eq!(dog.index, 2);
        assert_eq!(dog.as_node().to_text(), "dog");
        assert_eq!(dog.parent.children.len(), 3);
    }

    #[test]
    fn keeps_first_seen_order() {
        let tree = Node::root(vec![Node::sentence(spaced(&[
            ("zebra", "NN"),
            ("melon", "NN"),
            ("zebra", "NN"),
            ("mango", "NN"),
        ]))]);
        let words = collect_important_words(&tree, &EnglishStemmer::new());
        assert_eq!(words.keys().collect::<Vec<_>>(), vec!["zebra", "melon", "mango"]);
    }

    #[test]
    fn skips_words_outside_sentences() {
        let tree = Node::root(vec![
            Node::word("orphan", "NN"),
            Node::paragraph(vec![Node::word("stray", "NN")]),
            Node::sentence(vec![Node::word("kept", "NN")]),
        ]);
        let words = collect_important_words(&tree, &EnglishStemmer::new());
        assert_eq!(words.keys().collect::<Vec<_>>(), vec!["kept"]);
    }

    #[test]
    fn stems_before_lowercasing() {
        let seen = std::cell::RefCell::new(Vec::new());
        let recording = |word: &str| {
            seen.borrow_mut().push(word.to_string());
            word.to_string()
        };
        let tree = Node::sentence(vec![Node::word("Paris", "NNP")]);
        let words = collect_important_words(&tree, &recording);
        assert_eq!(*seen.borrow(), vec!["Paris"]);
        assert!(words.contains_key("paris"));
    }

    #[test]
    fn keyword_filter_does_not_touch_raw_counts() {
        let tree = Node::sentence(spaced(&[("dog", "NN"), ("dog", "NN"), ("cat", "NN")]));
        let words = collect_important_words(&tree, &EnglishStemmer::new());

        let keywords = get_keywords(&words, 5);
        assert_eq!(keywords[0].stem, "dog");
        assert_eq!(keywords[0].score, 1.0);
        assert_eq!(keywords[1].score, 0.5);

        assert_eq!(words["dog"].score, 2.0);
        assert_eq!(words["cat"].score, 1.0);
    }
}
