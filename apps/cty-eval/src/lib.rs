//! CTY summer program final evaluations as OpenXML (`.docx`) documents.
//!
//! [`EvaluationBuilder`] validates student metadata, lays down the fixed
//! template (title, heading, intro), accumulates body paragraphs, notes and a
//! signature line, and saves to `Last_First[suffix].docx`.

pub mod batch;
pub mod config;
pub mod errors;
pub mod evaluation;
pub mod layout;
pub mod models;
pub mod render;

pub use errors::{EvaluationError, MissingFieldError, RequiredField};
pub use evaluation::{
    EvaluationBuilder, EvaluationDetails, EvaluationRecord, ExcessParagraphWarning, NoteEntry,
    NoteNode, Notes, ParagraphOutcome, TextNode,
};
pub use layout::DocumentStyle;
pub use models::EvaluationInput;
