use super::{Node, Word};

/// Depth-first, document-order walk over every word in `node`
///
/// The callback receives the word, its index in the parent's children and
/// the parent itself. A word passed as `node` has no parent and is skipped.
pub fn visit_words<'a, F>(node: &'a Node, visitor: &mut F)
where
    F: FnMut(&'a Word, usize, &'a Node),
{
    let Some(children) = node.children() else {
        return;
    };
    for (index, child) in children.iter().enumerate() {
        match child {
            // 単語の子はリテラルのみなので潜らない
            Node::Word(word) => visitor(word, index, node),
            _ => visit_words(child, visitor),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn visits_words_in_document_order_with_parent() {
        let tree = Node::root(vec![
            Node::paragraph(vec![
                Node::sentence(vec![
                    Node::word("first", "JJ"),
                    Node::whitespace(" "),
                    Node::word("second", "NN"),
                ]),
                Node::whitespace(" "),
                Node::sentence(vec![Node::word("third", "NN")]),
            ]),
            Node::word("loose", "NN"),
        ]);

        let mut seen = Vec::new();
        visit_words(&tree, &mut |word: &Word, index, parent: &Node| {
            seen.push((word.text(), index, parent.kind()));
        });

        assert_eq!(
            seen,
            vec![
                ("first".to_string(), 0, "SentenceNode"),
                ("second".to_string(), 2, "SentenceNode"),
                ("third".to_string(), 0, "SentenceNode"),
                ("loose".to_string(), 1, "RootNode"),
            ]
        );
    }

    #[test]
    fn empty_root_visits_nothing() {
        let tree = Node::root(Vec::new());
        let mut count = 0;
        visit_words(&tree, &mut |_, _, _| count += 1);
        assert_eq!(count, 0);
    }
}
