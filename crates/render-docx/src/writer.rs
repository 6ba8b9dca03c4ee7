//! Packages the block outline into the binary `.docx` container.

use std::io::Cursor;

use docx_rs::{
    AbstractNumbering, Docx, IndentLevel, Level, LevelJc, LevelText, NumberFormat, Numbering,
    NumberingId, Paragraph, Run, SpecialIndentType, Start, Style, StyleType,
};
use vitae_idf::{DocBlock, HeadingLevel};

use crate::error::DocxError;

/// The single bullet numbering definition; indent level selects the
/// nesting depth.
const BULLET_NUMBERING: usize = 1;

fn style_id(level: HeadingLevel) -> &'static str {
    match level {
        HeadingLevel::Title => "Title",
        HeadingLevel::Section => "Heading2",
        HeadingLevel::Item => "Heading3",
        HeadingLevel::Subtopic => "Heading4",
    }
}

/// An empty document carrying the heading styles and the bullet
/// numbering every outline needs. Sizes are half-points.
fn base_document() -> Docx {
    Docx::new()
        .add_style(
            Style::new("Title", StyleType::Paragraph)
                .name("Title")
                .size(56)
                .bold(),
        )
        .add_style(
            Style::new("Heading2", StyleType::Paragraph)
                .name("Heading 2")
                .size(32)
                .bold(),
        )
        .add_style(
            Style::new("Heading3", StyleType::Paragraph)
                .name("Heading 3")
                .size(26)
                .bold(),
        )
        .add_style(
            Style::new("Heading4", StyleType::Paragraph)
                .name("Heading 4")
                .size(22)
                .bold(),
        )
        .add_abstract_numbering(
            AbstractNumbering::new(BULLET_NUMBERING)
                .add_level(
                    Level::new(
                        0,
                        Start::new(1),
                        NumberFormat::new("bullet"),
                        LevelText::new("•"),
                        LevelJc::new("left"),
                    )
                    .indent(Some(720), Some(SpecialIndentType::Hanging(360)), None, None),
                )
                .add_level(
                    Level::new(
                        1,
                        Start::new(1),
                        NumberFormat::new("bullet"),
                        LevelText::new("◦"),
                        LevelJc::new("left"),
                    )
                    .indent(Some(1440), Some(SpecialIndentType::Hanging(360)), None, None),
                ),
        )
        .add_numbering(Numbering::new(BULLET_NUMBERING, BULLET_NUMBERING))
}

fn block_paragraph(block: &DocBlock) -> Paragraph {
    match block {
        DocBlock::Heading { level, text } => Paragraph::new()
            .style(style_id(*level))
            .add_run(Run::new().add_text(text.as_str())),
        DocBlock::Paragraph(text) => Paragraph::new().add_run(Run::new().add_text(text.as_str())),
        DocBlock::Bullet { level, text } => Paragraph::new()
            .add_run(Run::new().add_text(text.as_str()))
            .numbering(
                NumberingId::new(BULLET_NUMBERING),
                IndentLevel::new(*level as usize),
            ),
        DocBlock::Blank => Paragraph::new(),
    }
}

/// Serialize the outline as a `.docx` byte vector.
pub fn to_docx_bytes(blocks: &[DocBlock]) -> Result<Vec<u8>, DocxError> {
    let mut docx = base_document();
    for block in blocks {
        docx = docx.add_paragraph(block_paragraph(block));
    }

    let mut cursor = Cursor::new(Vec::new());
    docx.build()
        .pack(&mut cursor)
        .map_err(|e| DocxError::Pack(e.to_string()))?;
    Ok(cursor.into_inner())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_blocks() -> Vec<DocBlock> {
        vec![
            DocBlock::heading(HeadingLevel::Title, "Ada Lovelace"),
            DocBlock::paragraph("Engineer"),
            DocBlock::Blank,
            DocBlock::bullet(0, "Shipped X"),
            DocBlock::bullet(1, "Item A"),
        ]
    }

    fn contains_bytes(haystack: &[u8], needle: &[u8]) -> bool {
        haystack.windows(needle.len()).any(|w| w == needle)
    }

    #[test]
    fn test_output_is_a_zip_container() {
        let bytes = to_docx_bytes(&sample_blocks()).unwrap();
        assert!(bytes.len() > 4);
        assert_eq!(&bytes[..4], b"PK\x03\x04");
    }

    #[test]
    fn test_container_holds_document_part() {
        let bytes = to_docx_bytes(&sample_blocks()).unwrap();
        // Entry names are stored uncompressed in the archive directory.
        assert!(contains_bytes(&bytes, b"word/document.xml"));
        assert!(contains_bytes(&bytes, b"word/numbering.xml"));
    }

    #[test]
    fn test_empty_outline_still_packs() {
        let bytes = to_docx_bytes(&[]).unwrap();
        assert_eq!(&bytes[..2], b"PK");
    }
}
