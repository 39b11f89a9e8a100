//! Evaluation builder: validates metadata, lays down the fixed template
//! sections, then accumulates body paragraphs, notes and a signature line.
//!
//! Flow: new() → title, heading, intro → add_paragraph / add_notes /
//!       add_signature (any order, any number) → save().

use std::fmt;
use std::fs::File;
use std::path::{Path, PathBuf};

use docx_rs::Docx;
use tracing::{debug, info, warn};

use crate::errors::EvaluationError;
use crate::evaluation::notes::{NoteNode, Notes};
use crate::evaluation::record::{EvaluationDetails, EvaluationRecord};
use crate::layout::{Block, DocumentStyle, HeadingLine};
use crate::render::render_document;

/// Body paragraphs in a standard CTY evaluation.
pub const STANDARD_BODY_PARAGRAPHS: usize = 5;

pub const TITLE_TEXT: &str = "CTY SUMMER PROGRAM FINAL EVALUATION";
pub const SIGNATURE_LABEL: &str = "Instructor's Signature: ";

// ────────────────────────────────────────────────────────────────────────────
// Paragraph outcome
// ────────────────────────────────────────────────────────────────────────────

/// Non-fatal signal that the evaluation now exceeds the standard paragraph count.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExcessParagraphWarning {
    /// Body paragraph count after the append that triggered the warning.
    pub paragraph_count: usize,
}

impl fmt::Display for ExcessParagraphWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Added body paragraph {}. Standard CTY evaluation only contains {}.",
            self.paragraph_count, STANDARD_BODY_PARAGRAPHS
        )
    }
}

/// Result of an accepted body paragraph.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParagraphOutcome {
    pub paragraph_count: usize,
    pub warning: Option<ExcessParagraphWarning>,
}

impl ParagraphOutcome {
    pub fn is_excess(&self) -> bool {
        self.warning.is_some()
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Builder
// ────────────────────────────────────────────────────────────────────────────

/// One evaluation session. Owns its document exclusively.
#[derive(Debug, Clone)]
pub struct EvaluationBuilder {
    record: EvaluationRecord,
    style: DocumentStyle,
    blocks: Vec<Block>,
    paragraph_count: usize,
}

impl EvaluationBuilder {
    /// Validates `details` and writes the title, heading and intro sections
    /// using the CTY template style.
    pub fn new(details: EvaluationDetails) -> Result<Self, EvaluationError> {
        Self::with_style(details, DocumentStyle::cty())
    }

    pub fn with_style(
        details: EvaluationDetails,
        style: DocumentStyle,
    ) -> Result<Self, EvaluationError> {
        let record = EvaluationRecord::from_details(&details)?;

        let blocks = vec![
            Block::Title {
                text: TITLE_TEXT.to_string(),
            },
            Block::Heading {
                lines: heading_lines(&record),
            },
            Block::Intro {
                text: intro_text(&record),
            },
        ];

        debug!("Started evaluation for {}", record.full_name());

        Ok(Self {
            record,
            style,
            blocks,
            paragraph_count: 0,
        })
    }

    pub fn record(&self) -> &EvaluationRecord {
        &self.record
    }

    pub fn style(&self) -> &DocumentStyle {
        &self.style
    }

    /// All blocks in document order, starting with title, heading and intro.
    pub fn blocks(&self) -> &[Block] {
        &self.blocks
    }

    pub fn paragraph_count(&self) -> usize {
        self.paragraph_count
    }

    /// Appends a bold-titled body paragraph. Always appends; past the
    /// standard five the outcome carries an [`ExcessParagraphWarning`].
    pub fn add_paragraph(
        &mut self,
        title: impl Into<String>,
        text: impl Into<String>,
    ) -> ParagraphOutcome {
        self.blocks.push(Block::Body {
            title: title.into(),
            text: text.into(),
        });
        self.paragraph_count += 1;

        let warning = (self.paragraph_count > STANDARD_BODY_PARAGRAPHS).then(|| {
            ExcessParagraphWarning {
                paragraph_count: self.paragraph_count,
            }
        });
        if let Some(w) = &warning {
            warn!("{}: {w}", self.record.full_name());
        }

        ParagraphOutcome {
            paragraph_count: self.paragraph_count,
            warning,
        }
    }

    /// Appends one bullet per note, in order. Returns how many were added.
    pub fn add_notes(&mut self, notes: Notes) -> usize {
        self.add_notes_from_strings(notes.into_texts())
    }

    pub fn add_notes_from_strings<I, S>(&mut self, notes: I) -> usize
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let before = self.blocks.len();
        self.blocks
            .extend(notes.into_iter().map(|n| Block::Bullet { text: n.into() }));
        let added = self.blocks.len() - before;
        debug!("Added {added} notes");
        added
    }

    pub fn add_notes_from_nodes<I, N>(&mut self, nodes: I) -> usize
    where
        I: IntoIterator<Item = N>,
        N: NoteNode,
    {
        self.add_notes_from_strings(
            nodes
                .into_iter()
                .map(|n| n.note_text().unwrap_or_default().to_string()),
        )
    }

    /// Appends the instructor's signature line with its underscore blank.
    pub fn add_signature(&mut self) {
        self.blocks.push(Block::Signature {
            label: SIGNATURE_LABEL.to_string(),
            blank: "_".repeat(self.style.signature_blank_len),
        });
    }

    /// CTY standard filename for this student.
    pub fn filename(&self, suffix: &str) -> String {
        self.record.standard_filename(suffix)
    }

    /// Renders the accumulated blocks into an OpenXML document.
    pub fn to_docx(&self) -> Docx {
        render_document(&self.blocks, &self.style)
    }

    /// Writes the document to the current working directory, overwriting
    /// any existing file of the same name.
    pub fn save(&self, suffix: &str) -> Result<PathBuf, EvaluationError> {
        self.save_in(".", suffix)
    }

    pub fn save_in(&self, dir: impl AsRef<Path>, suffix: &str) -> Result<PathBuf, EvaluationError> {
        let path = dir.as_ref().join(self.filename(suffix));
        let file = File::create(&path)?;

        self.to_docx()
            .build()
            .pack(file)
            .map_err(|e| EvaluationError::Package(Box::new(e)))?;

        info!(
            "Saved evaluation for {} to {}",
            self.record.full_name(),
            path.display()
        );
        Ok(path)
    }

    /// Whether a regular file with the standard name exists in the current
    /// working directory.
    pub fn file_exists(&self, suffix: &str) -> bool {
        self.file_exists_in(".", suffix)
    }

    pub fn file_exists_in(&self, dir: impl AsRef<Path>, suffix: &str) -> bool {
        dir.as_ref().join(self.filename(suffix)).is_file()
    }
}

fn heading_lines(record: &EvaluationRecord) -> Vec<HeadingLine> {
    vec![
        HeadingLine::new(
            format!("Student: {}", record.full_name()),
            format!("Date: {}", record.date),
        ),
        HeadingLine::new(
            format!("Course: {}", record.course),
            format!("Instructor: {}", record.instructor),
        ),
        HeadingLine::new(
            format!("Site: {}", record.site),
            format!("Teaching Assistant: {}", record.teaching_assistant),
        ),
    ]
}

fn intro_text(record: &EvaluationRecord) -> String {
    format!(
        "Congratulations, {}, on {} {}. Please see the enclosed course description \
         for more detailed information on the course.",
        record.child_name, record.completion, record.course
    )
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────
