//! Bulleted notes: plain strings or structured nodes carrying a text value.

use serde::{Deserialize, Serialize};

/// Anything that exposes a note's text, e.g. a node parsed from markup.
pub trait NoteNode {
    /// The node's text; `None` renders as an empty bullet.
    fn note_text(&self) -> Option<&str>;
}

impl<N: NoteNode + ?Sized> NoteNode for &N {
    fn note_text(&self) -> Option<&str> {
        (**self).note_text()
    }
}

/// A minimal structured node: `{ "text": "..." }`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TextNode {
    #[serde(default)]
    pub text: Option<String>,
}

impl TextNode {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: Some(text.into()),
        }
    }
}

impl NoteNode for TextNode {
    fn note_text(&self) -> Option<&str> {
        self.text.as_deref()
    }
}

/// A note as it appears in an evaluation input file: a bare string or a node.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum NoteEntry {
    Plain(String),
    Node(TextNode),
}

impl NoteNode for NoteEntry {
    fn note_text(&self) -> Option<&str> {
        match self {
            NoteEntry::Plain(text) => Some(text),
            NoteEntry::Node(node) => node.note_text(),
        }
    }
}

/// Notes input resolved at the call site instead of by runtime type inspection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Notes {
    Plain(Vec<String>),
    Nodes(Vec<TextNode>),
}

impl Notes {
    /// Flattens either shape into the bullet texts, in input order.
    pub fn into_texts(self) -> Vec<String> {
        match self {
            Notes::Plain(items) => items,
            Notes::Nodes(nodes) => nodes
                .into_iter()
                .map(|n| n.text.unwrap_or_default())
                .collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_and_node_notes_flatten_the_same() {
        let plain = Notes::Plain(vec!["x".to_string(), "y".to_string()]);
        let nodes = Notes::Nodes(vec![TextNode::new("x"), TextNode::new("y")]);
        assert_eq!(plain.into_texts(), nodes.into_texts());
    }

    #[test]
    fn test_textless_node_flattens_to_empty() {
        let nodes = Notes::Nodes(vec![TextNode::default()]);
        assert_eq!(nodes.into_texts(), vec![String::new()]);
    }

    #[test]
    fn test_note_entries_deserialize_mixed() {
        let entries: Vec<NoteEntry> =
            serde_json::from_str(r#"["plain", { "text": "structured" }, {}]"#).unwrap();
        let texts: Vec<Option<&str>> = entries.iter().map(|e| e.note_text()).collect();
        assert_eq!(texts, vec![Some("plain"), Some("structured"), None]);
    }
}
