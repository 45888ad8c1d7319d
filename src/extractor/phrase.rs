use std::collections::HashSet;

use indexmap::{map::Entry, IndexMap};
use serde::Serialize;
use tracing::trace;

use crate::{
    stem::Stemmer,
    tree::{Node, Parent},
    utils::normalizer::{filter_top, Scored},
};

use super::{
    importance::is_important_word,
    word::{stem_word, Keyword, WordMatch},
};

/// Phrase found around one word occurrence
#[derive(Debug, Clone, PartialEq)]
pub struct Phrase<'a> {
    /// Stems in document order
    pub stems: Vec<String>,
    /// Words and interior whitespace in document order
    pub nodes: Vec<&'a Node>,
    /// Stems joined by a single space
    pub value: String,
}

impl<'a> Phrase<'a> {
    /// Leftmost word of the span
    pub fn head(&self) -> Option<&'a Node> {
        self.nodes.first().copied()
    }
}

/// One occurrence of a key phrase
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PhraseMatch<'a> {
    pub nodes: Vec<&'a Node>,
    #[serde(skip)]
    pub parent: &'a Parent,
}

impl PhraseMatch<'_> {
    /// Literal text of the span
    pub fn text(&self) -> String {
        self.nodes.iter().map(|node| node.to_text()).collect()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Keyphrase<'a> {
    /// Dedup key, the stems joined by a single space
    pub value: String,
    pub stems: Vec<String>,
    /// Phrase score over all matches, normalized once filtered
    pub score: f64,
    /// Score added per repeated occurrence
    pub weight: f64,
    pub matches: Vec<PhraseMatch<'a>>,
}

impl Keyphrase<'_> {
    /// Surface text of the first occurrence
    pub fn text(&self) -> String {
        self.matches
            .first()
            .map(PhraseMatch::text)
            .unwrap_or_default()
    }
}

impl Scored for Keyphrase<'_> {
    fn score(&self) -> f64 {
        self.score
    }

    fn set_score(&mut self, score: f64) {
        self.score = score;
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Backward,
    Forward,
}

/// Important words (and the whitespace between them) next to `index`
///
/// Nodes and stems come back in scan order, nearest first. Whitespace is
/// only kept when another important word follows it. An `index` past the
/// end of `parent` scans nothing.
pub fn scan_direction<'a, S>(
    parent: &'a Parent,
    index: usize,
    direction: Direction,
    stemmer: &S,
) -> (Vec<&'a Node>, Vec<String>)
where
    S: Stemmer + ?Sized,
{
    match direction {
        Direction::Backward => scan(
            parent.children.get(..index).unwrap_or_default().iter().rev(),
            stemmer,
        ),
        Direction::Forward => scan(
            parent.children.get(index + 1..).unwrap_or_default().iter(),
            stemmer,
        ),
    }
}

fn scan<'a, I, S>(siblings: I, stemmer: &S) -> (Vec<&'a Node>, Vec<String>)
where
    I: Iterator<Item = &'a Node>,
    S: Stemmer + ?Sized,
{
    let mut nodes = Vec::new();
    let mut stems = Vec::new();
    let mut queue = Vec::new();

    for sibling in siblings {
        match sibling {
            Node::WhiteSpace(_) => queue.push(sibling),
            Node::Word(word) if is_important_word(word) => {
                nodes.append(&mut queue);
                nodes.push(sibling);
                stems.push(stem_word(word, stemmer));
            }
            _ => break,
        }
    }
    // queue に残った末尾の空白は捨てる
    (nodes, stems)
}

/// Maximal run of important words around `word_match` within its sentence
pub fn find_phrase<'a, S>(word_match: &WordMatch<'a>, stemmer: &S) -> Phrase<'a>
where
    S: Stemmer + ?Sized,
{
    let (before_nodes, before_stems) =
        scan_direction(word_match.parent, word_match.index, Direction::Backward, stemmer);
    let (after_nodes, after_stems) =
        scan_direction(word_match.parent, word_match.index, Direction::Forward, stemmer);

    let stems = merge(before_stems, stem_word(word_match.node, stemmer), after_stems);
    let nodes = merge(before_nodes, word_match.as_node(), after_nodes);
    let value = stems.join(" ");

    Phrase { stems, nodes, value }
}

/// `reverse(before) ++ [current] ++ after`
fn merge<T>(mut before: Vec<T>, current: T, after: Vec<T>) -> Vec<T> {
    before.reverse();
    before.reserve(after.len() + 1);
    before.push(current);
    before.extend(after);
    before
}

/// Group every occurrence of every important word into key phrases
///
/// A new phrase starts at the summed raw keyword scores of its stems minus
/// one; that starting value is its weight, added again on each repeat. A
/// physical span found once per member word only counts as one match, keyed
/// on its head node. Scores end as `round(score * matches / stems)`.
pub fn collect_keyphrases<'a, S>(
    words: &IndexMap<String, Keyword<'a>>,
    stemmer: &S,
) -> IndexMap<String, Keyphrase<'a>>
where
    S: Stemmer + ?Sized,
{
    let mut phrases: IndexMap<String, Keyphrase<'a>> = IndexMap::new();
    let mut heads: HashSet<*const Node> = HashSet::new();

    for keyword in words.values() {
        for word_match in &keyword.matches {
            let phrase = find_phrase(word_match, stemmer);
            // 一致した単語自身が必ず含まれる
            let head: *const Node = phrase.head().unwrap_or(word_match.as_node());
            let found = PhraseMatch {
                nodes: phrase.nodes,
                parent: word_match.parent,
            };

            match phrases.entry(phrase.value) {
                Entry::Occupied(mut entry) => {
                    let keyphrase = entry.get_mut();
                    keyphrase.score += keyphrase.weight;
                    if heads.insert(head) {
                        keyphrase.matches.push(found);
                    }
                }
                Entry::Vacant(entry) => {
                    heads.insert(head);
                    let score = phrase
                        .stems
                        .iter()
                        .map(|stem| words.get(stem).map_or(0.0, |keyword| keyword.score))
                        .sum::<f64>()
                        - 1.0;
                    trace!(phrase = %entry.key(), score, "new keyphrase");

                    let value = entry.key().clone();
                    entry.insert(Keyphrase {
                        value,
                        stems: phrase.stems,
                        score,
                        weight: score,
                        matches: vec![found],
                    });
                }
            }
        }
    }

    for keyphrase in phrases.values_mut() {
        let matches = keyphrase.matches.len() as f64;
        let stems = keyphrase.stems.len() as f64;
        keyphrase.score = (keyphrase.score * matches / stems).round();
    }

    phrases
}

/// Top key phrases with normalized scores
pub fn get_keyphrases<'a, S>(
    words: &IndexMap<String, Keyword<'a>>,
    maximum: usize,
    stemmer: &S,
) -> Vec<Keyphrase<'a>>
where
    S: Stemmer + ?Sized,
{
    filter_top(collect_keyphrases(words, stemmer), maximum)
}
