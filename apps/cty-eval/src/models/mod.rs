pub mod evaluation_input;

pub use evaluation_input::{BodyParagraphInput, BuiltEvaluation, EvaluationInput};
