//! Composes the content model into the word-processor block outline.
//!
//! This is the complete counterpart to the abbreviated print front
//! page: every list in every section is rendered in full, in the fixed
//! document order. Pure and deterministic; packaging into the binary
//! container happens separately.

use vitae_idf::{DocBlock, HeadingLevel};
use vitae_model::{CvData, join_comma, labels};

/// Build the linear block sequence of the word-processor document.
pub fn document_outline(data: &CvData) -> Vec<DocBlock> {
    let mut blocks = vec![
        DocBlock::heading(HeadingLevel::Title, &data.name),
        DocBlock::paragraph(&data.role),
        DocBlock::Blank,
        DocBlock::paragraph(&data.about),
        DocBlock::Blank,
        DocBlock::heading(HeadingLevel::Section, labels::CONTACT),
        DocBlock::paragraph(format!("{}: {}", labels::EMAIL, data.email)),
        DocBlock::paragraph(format!("{}: {}", labels::PHONE, data.phone)),
        DocBlock::paragraph(format!("{}: {}", labels::LOCATION, data.location)),
        DocBlock::paragraph(format!("{}: {}", labels::LINKEDIN, data.linkedin)),
        DocBlock::Blank,
        DocBlock::heading(HeadingLevel::Section, &data.experience_title),
    ];

    for exp in &data.experience_sections {
        blocks.push(DocBlock::heading(HeadingLevel::Item, &exp.company));
        blocks.push(DocBlock::paragraph(format!("{} | {}", exp.role, exp.period)));
        for highlight in &exp.highlights {
            blocks.push(DocBlock::bullet(0, highlight));
        }
        for sub in &exp.subtopics {
            blocks.push(DocBlock::heading(HeadingLevel::Subtopic, &sub.title));
            for item in &sub.items {
                blocks.push(DocBlock::bullet(1, item));
            }
        }
        blocks.push(DocBlock::Blank);
    }

    blocks.push(DocBlock::heading(HeadingLevel::Section, &data.skills_title));
    blocks.push(DocBlock::paragraph(format!(
        "{}: {}",
        labels::SKILLS_PRIMARY,
        join_comma(&data.skills_primary)
    )));
    blocks.push(DocBlock::paragraph(format!(
        "{}: {}",
        labels::SKILLS_SECONDARY,
        join_comma(&data.skills_secondary)
    )));
    blocks.push(DocBlock::paragraph(format!(
        "{}: {}",
        labels::LANGUAGES,
        join_comma(&data.languages)
    )));
    blocks.push(DocBlock::Blank);

    blocks.push(DocBlock::heading(HeadingLevel::Section, &data.projects_title));
    for proj in &data.projects_sections {
        blocks.push(DocBlock::heading(HeadingLevel::Item, &proj.title));
        blocks.push(DocBlock::paragraph(&proj.summary));
        blocks.push(DocBlock::paragraph(join_comma(&proj.stack)));
        blocks.push(DocBlock::Blank);
    }

    blocks.push(DocBlock::heading(HeadingLevel::Section, &data.credentials_title));
    for cred in &data.credentials_sections {
        blocks.push(DocBlock::heading(HeadingLevel::Item, &cred.title));
        blocks.push(DocBlock::paragraph(cred.detail_line()));
    }

    if !data.recommendation_groups.is_empty() {
        blocks.push(DocBlock::Blank);
        blocks.push(DocBlock::heading(
            HeadingLevel::Section,
            data.recommendations_heading(),
        ));
        for group in &data.recommendation_groups {
            blocks.push(DocBlock::heading(HeadingLevel::Item, &group.title));
            for person in &group.people {
                blocks.push(DocBlock::paragraph(&person.name));
                if let Some(phone) = &person.phone {
                    blocks.push(DocBlock::paragraph(phone));
                }
                if let Some(email) = &person.email {
                    blocks.push(DocBlock::paragraph(email));
                }
            }
        }
    }

    blocks
}
