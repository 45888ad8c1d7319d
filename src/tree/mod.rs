pub mod visit;

use std::io::Read;

use serde::{Deserialize, Serialize};

use crate::error::{KeywordError, Result};

/// nlcst syntax tree node
///
/// Mirrors the JSON shape produced by nlcst parsers, tagged on `type`.
/// Only `Root`, `Paragraph` and `Sentence` have node children; `Word` has
/// literal children whose concatenation is its surface text.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum Node {
    #[serde(rename = "RootNode")]
    Root(Parent),
    #[serde(rename = "ParagraphNode")]
    Paragraph(Parent),
    #[serde(rename = "SentenceNode")]
    Sentence(Parent),
    #[serde(rename = "WordNode")]
    Word(Word),
    #[serde(rename = "WhiteSpaceNode")]
    WhiteSpace(Literal),
    #[serde(rename = "PunctuationNode")]
    Punctuation(Literal),
    #[serde(rename = "SymbolNode")]
    Symbol(Literal),
    #[serde(rename = "SourceNode")]
    Source(Literal),
    #[serde(rename = "TextNode")]
    Text(Literal),
}

/// Root, paragraph or sentence content
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Parent {
    pub children: Vec<Node>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub position: Option<Position>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Word {
    pub children: Vec<Node>,
    #[serde(default)]
    pub data: WordData,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub position: Option<Position>,
}

/// Annotations attached to a word by earlier pipeline stages
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WordData {
    /// Penn Treebank tag assigned by the tagger
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub part_of_speech: Option<String>,
    /// Keyword score written back by a rendering host
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub score: Option<f64>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Literal {
    pub value: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub position: Option<Position>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Position {
    pub start: Point,
    pub end: Point,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Point {
    pub line: usize,
    pub column: usize,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub offset: Option<usize>,
}

impl Node {
    /// Parse a JSON nlcst document
    ///
    /// Fails on the first malformed node; no partial tree is returned.
    pub fn from_json(json: &str) -> Result<Self> {
        let node: Node = serde_json::from_str(json)?;
        node.ensure_parent()
    }

    /// Parse a JSON nlcst document from a reader
    pub fn from_reader<R: Read>(reader: R) -> Result<Self> {
        let node: Node = serde_json::from_reader(reader).map_err(|e| {
            // 読み込み失敗は構文エラーと区別する
            if e.is_io() {
                KeywordError::Io(e.into())
            } else {
                KeywordError::Json(e)
            }
        })?;
        node.ensure_parent()
    }

    fn ensure_parent(self) -> Result<Self> {
        match self {
            Node::Root(_) | Node::Paragraph(_) | Node::Sentence(_) => Ok(self),
            _ => Err(KeywordError::UnexpectedRoot(self.kind())),
        }
    }

    pub fn root(children: Vec<Node>) -> Self {
        Node::Root(Parent { children, position: None })
    }

    pub fn paragraph(children: Vec<Node>) -> Self {
        Node::Paragraph(Parent { children, position: None })
    }

    pub fn sentence(children: Vec<Node>) -> Self {
        Node::Sentence(Parent { children, position: None })
    }

    /// Tagged word with a single text child
    pub fn word(text: &str, part_of_speech: &str) -> Self {
        Node::Word(Word {
            children: vec![Node::text(text)],
            data: WordData {
                part_of_speech: Some(part_of_speech.to_string()),
                score: None,
            },
            position: None,
        })
    }

    pub fn untagged_word(text: &str) -> Self {
        Node::Word(Word {
            children: vec![Node::text(text)],
            ..Word::default()
        })
    }

    pub fn whitespace(value: &str) -> Self {
        Node::WhiteSpace(Literal::new(value))
    }

    pub fn punctuation(value: &str) -> Self {
        Node::Punctuation(Literal::new(value))
    }

    pub fn text(value: &str) -> Self {
        Node::Text(Literal::new(value))
    }

    /// nlcst type name
    pub fn kind(&self) -> &'static str {
        match self {
            Node::Root(_) => "RootNode",
            Node::Paragraph(_) => "ParagraphNode",
            Node::Sentence(_) => "SentenceNode",
            Node::Word(_) => "WordNode",
            Node::WhiteSpace(_) => "WhiteSpaceNode",
            Node::Punctuation(_) => "PunctuationNode",
            Node::Symbol(_) => "SymbolNode",
            Node::Source(_) => "SourceNode",
            Node::Text(_) => "TextNode",
        }
    }

    /// Child nodes, `None` for literals
    pub fn children(&self) -> Option<&[Node]> {
        match self {
            Node::Root(parent) | Node::Paragraph(parent) | Node::Sentence(parent) => {
                Some(&parent.children)
            }
            Node::Word(word) => Some(&word.children),
            _ => None,
        }
    }

    pub fn position(&self) -> Option<&Position> {
        match self {
            Node::Root(parent) | Node::Paragraph(parent) | Node::Sentence(parent) => {
                parent.position.as_ref()
            }
            Node::Word(word) => word.position.as_ref(),
            Node::WhiteSpace(literal)
            | Node::Punctuation(literal)
            | Node::Symbol(literal)
            | Node::Source(literal)
            | Node::Text(literal) => literal.position.as_ref(),
        }
    }

    pub fn as_word(&self) -> Option<&Word> {
        match self {
            Node::Word(word) => Some(word),
            _ => None,
        }
    }

    /// Surface text of the node and everything below it
    pub fn to_text(&self) -> String {
        let mut out = String::new();
        self.push_text(&mut out);
        out
    }

    fn push_text(&self, out: &mut String) {
        match self {
            Node::WhiteSpace(literal)
            | Node::Punctuation(literal)
            | Node::Symbol(literal)
            | Node::Source(literal)
            | Node::Text(literal) => out.push_str(&literal.value),
            _ => {
                for child in self.children().unwrap_or_default() {
                    child.push_text(out);
                }
            }
        }
    }
}

impl Word {
    pub fn part_of_speech(&self) -> Option<&str> {
        self.data.part_of_speech.as_deref()
    }

    /// Surface text (concatenated literal children)
    pub fn text(&self) -> String {
        let mut out = String::new();
        for child in &self.children {
            child.push_text(&mut out);
        }
        out
    }
}

impl Literal {
    pub fn new(value: &str) -> Self {
        Self {
            value: value.to_string(),
            position: None,
        }
    }
}
