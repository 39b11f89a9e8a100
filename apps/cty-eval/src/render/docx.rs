//! OpenXML rendering of evaluation blocks via `docx-rs`.

use docx_rs::{
    AbstractNumbering, AlignmentType, BreakType, Docx, IndentLevel, Level, LevelJc, LevelText,
    LineSpacing, NumberFormat, Numbering, NumberingId, PageMargin, Paragraph, Run, RunFonts,
    SpecialIndentType, Start, Tab, TabValueType,
};

use crate::layout::{Block, DocumentStyle, HeadingLine};

/// Numbering id bound to the bullet list definition. `Docx::new()` already
/// registers its own decimal list under id 1.
const BULLET_NUMBERING_ID: usize = 2;
const BULLET_GLYPH: &str = "\u{2022}";
const BULLET_INDENT_TWIPS: i32 = 720;
const BULLET_HANGING_TWIPS: i32 = 360;

/// Builds the full document: page size and margins, default font, bullet numbering,
/// then one paragraph per block in order.
pub fn render_document(blocks: &[Block], style: &DocumentStyle) -> Docx {
    let margins = &style.margins;
    let docx = Docx::new()
        .page_size(style.page_size.width_twips(), style.page_size.height_twips())
        .page_margin(
            PageMargin::new()
                .top(margins.top_twips())
                .bottom(margins.bottom_twips())
                .left(margins.left_twips())
                .right(margins.right_twips()),
        )
        .default_fonts(
            RunFonts::new()
                .ascii(style.font.as_str())
                .hi_ansi(style.font.as_str())
                .cs(style.font.as_str()),
        )
        .add_abstract_numbering(bullet_definition())
        .add_numbering(Numbering::new(BULLET_NUMBERING_ID, BULLET_NUMBERING_ID));

    blocks
        .iter()
        .fold(docx, |docx, block| docx.add_paragraph(render_block(block, style)))
}

/// Renders a single block with the given style.
pub fn render_block(block: &Block, style: &DocumentStyle) -> Paragraph {
    match block {
        Block::Title { text } => Paragraph::new()
            .align(AlignmentType::Center)
            .line_spacing(LineSpacing::new().after(style.space_after_twips()))
            .add_run(Run::new().add_text(text.as_str()).bold()),
        Block::Heading { lines } => render_heading(lines, style),
        Block::Intro { text } => spaced(style).add_run(Run::new().add_text(text.as_str())),
        Block::Body { title, text } => spaced(style)
            .add_run(
                Run::new()
                    .add_text(title.as_str())
                    .add_break(BreakType::TextWrapping)
                    .bold(),
            )
            .add_run(Run::new().add_text(text.as_str())),
        Block::Bullet { text } => Paragraph::new()
            .numbering(
                NumberingId::new(BULLET_NUMBERING_ID),
                IndentLevel::new(0),
            )
            .add_run(Run::new().add_text(text.as_str())),
        Block::Signature { label, blank } => Paragraph::new()
            .add_run(Run::new().add_text(label.as_str()))
            .add_run(Run::new().add_text(blank.as_str())),
    }
}

/// Paragraph with the template's spacing-after and line spacing.
fn spaced(style: &DocumentStyle) -> Paragraph {
    Paragraph::new().line_spacing(
        LineSpacing::new()
            .after(style.space_after_twips())
            .line(style.line_spacing_value()),
    )
}

fn render_heading(lines: &[HeadingLine], style: &DocumentStyle) -> Paragraph {
    let last = lines.len().saturating_sub(1);
    lines.iter().enumerate().fold(
        spaced(style).add_tab(
            Tab::new()
                .val(TabValueType::Left)
                .pos(style.heading_tab_stop),
        ),
        |paragraph, (i, line)| {
            let mut right = Run::new().add_text(line.right.as_str());
            if i < last {
                right = right.add_break(BreakType::TextWrapping);
            }
            paragraph
                .add_run(Run::new().add_text(line.left.as_str()).add_tab())
                .add_run(right)
        },
    )
}

fn bullet_definition() -> AbstractNumbering {
    AbstractNumbering::new(BULLET_NUMBERING_ID).add_level(
        Level::new(
            0,
            Start::new(1),
            NumberFormat::new("bullet"),
            LevelText::new(BULLET_GLYPH),
            LevelJc::new("left"),
        )
        .indent(
            Some(BULLET_INDENT_TWIPS),
            Some(SpecialIndentType::Hanging(BULLET_HANGING_TWIPS)),
            None,
            None,
        ),
    )
}
