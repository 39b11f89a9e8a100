// Evaluation layout: template style and the block model the builder appends to.

pub mod blocks;
pub mod style;

pub use blocks::{Block, HeadingLine};
pub use style::{DocumentStyle, Margins, PageSize};
