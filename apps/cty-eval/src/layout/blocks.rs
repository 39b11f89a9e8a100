//! Typed content blocks an evaluation is assembled from.
//!
//! The builder only ever appends to a `Vec<Block>`; rendering to OpenXML
//! happens once, at save time.

use serde::{Deserialize, Serialize};

/// One line of the heading block: `left` ⇥ `right`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HeadingLine {
    pub left: String,
    pub right: String,
}

impl HeadingLine {
    pub fn new(left: impl Into<String>, right: impl Into<String>) -> Self {
        Self {
            left: left.into(),
            right: right.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Block {
    /// Centered bold banner at the top of the page.
    Title { text: String },
    /// Student / course / site lines with a tab-aligned second column.
    Heading { lines: Vec<HeadingLine> },
    Intro { text: String },
    /// Bold title line followed by free text.
    Body { title: String, text: String },
    /// One bulleted note.
    Bullet { text: String },
    /// Signature label followed by an underscore blank on the same line.
    Signature { label: String, blank: String },
}

impl Block {
    pub fn is_body(&self) -> bool {
        matches!(self, Block::Body { .. })
    }

    pub fn bullet_text(&self) -> Option<&str> {
        match self {
            Block::Bullet { text } => Some(text),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_block_serializes_with_kind_tag() {
        let block = Block::Bullet {
            text: "note".to_string(),
        };
        let json = serde_json::to_value(&block).unwrap();
        assert_eq!(json["kind"], "bullet");
        assert_eq!(json["text"], "note");
    }

    #[test]
    fn test_bullet_text_only_for_bullets() {
        let body = Block::Body {
            title: "Effort".to_string(),
            text: String::new(),
        };
        assert!(body.is_body());
        assert_eq!(body.bullet_text(), None);
    }
}
