use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::errors::EvaluationError;
use crate::evaluation::{EvaluationBuilder, EvaluationDetails, ExcessParagraphWarning, NoteEntry};

/// A titled body paragraph as written in an input file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BodyParagraphInput {
    pub title: String,
    #[serde(default)]
    pub text: String,
}

/// One whole evaluation described as JSON.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EvaluationInput {
    pub student: EvaluationDetails,
    pub paragraphs: Vec<BodyParagraphInput>,
    pub notes: Vec<NoteEntry>,
    pub signature: bool,
    pub suffix: Option<String>,
}

/// A builder populated from an input file, plus any warnings raised on the way.
#[derive(Debug)]
pub struct BuiltEvaluation {
    pub builder: EvaluationBuilder,
    pub warnings: Vec<ExcessParagraphWarning>,
}

impl EvaluationInput {
    pub fn from_json(json: &str) -> Result<Self, EvaluationError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, EvaluationError> {
        let raw = std::fs::read_to_string(path.as_ref())?;
        debug!("Read evaluation input {}", path.as_ref().display());
        Self::from_json(&raw)
    }

    /// Builds the evaluation: template sections, then paragraphs, notes and
    /// the signature line, in that order.
    pub fn build(&self) -> Result<BuiltEvaluation, EvaluationError> {
        let mut builder = EvaluationBuilder::new(self.student.clone())?;

        let warnings = self
            .paragraphs
            .iter()
            .filter_map(|p| builder.add_paragraph(p.title.as_str(), p.text.as_str()).warning)
            .collect();

        if !self.notes.is_empty() {
            builder.add_notes_from_nodes(&self.notes);
        }
        if self.signature {
            builder.add_signature();
        }

        Ok(BuiltEvaluation { builder, warnings })
    }

    pub fn suffix(&self) -> &str {
        self.suffix.as_deref().unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::RequiredField;
    use crate::layout::Block;

    const SAMPLE: &str = r#"{
        "student": {
            "first_name": "John",
            "last_name": "Smith",
            "child_name": "Johnny",
            "date": "July 28, 2017",
            "course": "Introduction to Robotics",
            "instructor": "Ada Byron",
            "site": "Lancaster",
            "teaching_assistant": "Grace Hopper",
            "completion": "successfully completing"
        },
        "paragraphs": [
            { "title": "Course Content", "text": "We built line followers." },
            { "title": "Participation" }
        ],
        "notes": ["check spelling", { "text": "attach course description" }],
        "signature": true,
        "suffix": "_draft"
    }"#;

    #[test]
    fn test_build_applies_sections_in_order() {
        let input = EvaluationInput::from_json(SAMPLE).unwrap();
        let built = input.build().unwrap();
        let blocks = built.builder.blocks();

        assert!(built.warnings.is_empty());
        assert_eq!(built.builder.paragraph_count(), 2);
        assert_eq!(blocks.len(), 3 + 2 + 2 + 1);
        assert!(matches!(blocks[4], Block::Body { ref text, .. } if text.is_empty()));
        assert_eq!(blocks[5].bullet_text(), Some("check spelling"));
        assert_eq!(blocks[6].bullet_text(), Some("attach course description"));
        assert!(matches!(blocks[7], Block::Signature { .. }));
        assert_eq!(input.suffix(), "_draft");
        assert_eq!(built.builder.filename(input.suffix()), "Smith_John_draft.docx");
    }

    #[test]
    fn test_build_collects_excess_paragraph_warnings() {
        let mut input = EvaluationInput::from_json(SAMPLE).unwrap();
        input.paragraphs = (1..=7)
            .map(|i| BodyParagraphInput {
                title: format!("Paragraph {i}"),
                text: String::new(),
            })
            .collect();
        let built = input.build().unwrap();
        let counts: Vec<usize> = built.warnings.iter().map(|w| w.paragraph_count).collect();
        assert_eq!(counts, vec![6, 7]);
    }

    #[test]
    fn test_missing_student_field_surfaces() {
        let input = EvaluationInput::from_json(r#"{ "student": { "first_name": "John" } }"#).unwrap();
        match input.build() {
            Err(EvaluationError::MissingField(err)) => {
                assert_eq!(err.field, RequiredField::LastName)
            }
            other => panic!("expected MissingField, got {other:?}"),
        }
    }

    #[test]
    fn test_malformed_json_is_input_error() {
        let err = EvaluationInput::from_json("{ not json").unwrap_err();
        assert!(matches!(err, EvaluationError::Input(_)));
    }

    #[test]
    fn test_from_path_reads_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("smith.json");
        std::fs::write(&path, SAMPLE).unwrap();
        let input = EvaluationInput::from_path(&path).unwrap();
        assert_eq!(input.student.last_name.as_deref(), Some("Smith"));
        assert_eq!(input.notes.len(), 2);
    }
}
