// CTY evaluation: metadata validation, the document builder, and note inputs.

pub mod builder;
pub mod notes;
pub mod record;

pub use builder::{
    EvaluationBuilder, ExcessParagraphWarning, ParagraphOutcome, STANDARD_BODY_PARAGRAPHS,
};
pub use notes::{NoteEntry, NoteNode, Notes, TextNode};
pub use record::{EvaluationDetails, EvaluationRecord};
