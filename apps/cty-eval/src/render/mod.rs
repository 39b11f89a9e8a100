// Converts evaluation blocks into an OpenXML word-processing document.

pub mod docx;

pub use self::docx::{render_block, render_document};
