use crate::tree::{Node, Word};

/// Whether `node` is a keyword candidate
///
/// Nouns (any tag starting with `N`) always qualify; adjectives (`JJ`) only
/// when capitalised, which catches proper adjectives such as "English".
#[inline]
pub fn is_important(node: &Node) -> bool {
    node.as_word().is_some_and(is_important_word)
}

pub fn is_important_word(word: &Word) -> bool {
    let Some(tag) = word.part_of_speech() else {
        return false;
    };
    tag.starts_with('N') || (tag == "JJ" && starts_uppercase(&word.text()))
}

/// First character equals its own upper case form
fn starts_uppercase(text: &str) -> bool {
    match text.chars().next() {
        Some(first) => first.to_uppercase().eq(std::iter::once(first)),
        // 空文字列は大文字化しても変わらない
        None => true,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn nouns_are_important() {
        assert!(is_important(&Node::word("cat", "NN")));
        assert!(is_important(&Node::word("cats", "NNS")));
        assert!(is_important(&Node::word("London", "NNP")));
        assert!(is_important(&Node::word("Alps", "NNPS")));
    }

    #[test]
    fn only_capitalised_adjectives_are_important() {
        assert!(is_important(&Node::word("English", "JJ")));
        assert!(!is_important(&Node::word("english", "JJ")));
        assert!(!is_important(&Node::word("Bigger", "JJR")));
    }

    #[test]
    fn other_tags_and_nodes_are_not() {
        assert!(!is_important(&Node::word("Run", "VB")));
        assert!(!is_important(&Node::word("the", "DT")));
        assert!(!is_important(&Node::untagged_word("Cat")));
        assert!(!is_important(&Node::whitespace(" ")));
        assert!(!is_important(&Node::punctuation(".")));
        assert!(!is_important(&Node::sentence(vec![Node::word("cat", "NN")])));
    }

    #[test]
    fn uppercase_check_is_unicode_aware() {
        assert!(is_important(&Node::word("Ärger", "JJ")));
        assert!(!is_important(&Node::word("ärger", "JJ")));
    }
}
