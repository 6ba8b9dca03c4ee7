//! Print document renderer.
//!
//! Renders a [`CvData`] value into a single self-contained HTML string
//! with an embedded print stylesheet: a two-column front page (sidebar
//! plus header summary, with the capped highlight/credential/skill
//! lists) followed by full-width detail pages carrying every experience
//! entry and project untruncated. The function is pure (no I/O, no
//! clock, no randomness), so rendering the same data twice yields
//! byte-identical output.

mod escape;
mod styles;

use vitae_model::{CredentialSection, CvData, ExperienceSection, ProjectSection, labels};

use escape::text as esc;

/// Render the complete paginated print document.
pub fn render_print_document(data: &CvData) -> String {
    format!(
        r#"<!DOCTYPE html>
<html lang="pt-BR">
<head>
  <meta charset="UTF-8" />
  <meta name="viewport" content="width=device-width, initial-scale=1.0" />
  <title>{name} - {title_suffix}</title>
  <link rel="preconnect" href="https://fonts.googleapis.com" />
  <link rel="preconnect" href="https://fonts.gstatic.com" crossorigin />
  <link href="https://fonts.googleapis.com/css2?family=Inter:wght@400;500;600;700&family=Space+Grotesk:wght@500;600;700&display=swap" rel="stylesheet" />
  <style>{styles}</style>
</head>
<body>
  <div class="page">
{front}
{detail}
  </div>
</body>
</html>"#,
        name = esc(&data.name),
        title_suffix = labels::DOCUMENT_TITLE_SUFFIX,
        styles = styles::STYLES,
        front = front_page(data),
        detail = detail_pages(data),
    )
}

/// The abbreviated two-column front page; forced onto its own physical
/// page by the stylesheet's `break-after` rule.
fn front_page(data: &CvData) -> String {
    format!(
        "<section class=\"cv cv--first\">\n<aside class=\"sidebar\">\n{photo}<div class=\"divider\"></div>\n{contact}<div class=\"divider\"></div>\n{skills}<div class=\"divider\"></div>\n{languages}{credentials}</aside>\n<main class=\"content\">\n{header}{about}{highlights}{recommendations}</main>\n</section>",
        photo = photo_block(data),
        contact = contact_block(data),
        skills = skills_block(data),
        languages = languages_block(data),
        credentials = credentials_block(data),
        header = header_block(data),
        about = about_section(data),
        highlights = highlights_section(data),
        recommendations = recommendations_section(data),
    )
}

fn photo_block(data: &CvData) -> String {
    let avatar = match &data.photo_data_url {
        Some(src) => format!(
            "<img class=\"avatar\" src=\"{}\" alt=\"{}\" />",
            esc(src),
            esc(data.photo_alt.as_deref().unwrap_or(""))
        ),
        None => String::new(),
    };
    format!("<div class=\"avatar-wrap\">{avatar}</div>\n")
}

fn contact_block(data: &CvData) -> String {
    let mut items = String::new();
    items.push_str(&meta_item(
        labels::EMAIL,
        &format!("<a href=\"mailto:{0}\">{0}</a>", esc(&data.email)),
    ));
    items.push_str(&meta_item(
        labels::PHONE,
        &format!("<a href=\"tel:{0}\">{0}</a>", esc(&data.phone)),
    ));
    items.push_str(&meta_item(labels::LOCATION, &esc(&data.location)));
    items.push_str(&meta_item(
        labels::LINKEDIN,
        &format!(
            "<a href=\"{}\">{}</a>",
            esc(&data.linkedin_url()),
            esc(&data.linkedin)
        ),
    ));
    format!(
        "<div class=\"block\">\n<h2 class=\"section-title\">{}</h2>\n<div class=\"meta-list\">\n{items}</div>\n</div>\n",
        labels::CONTACT
    )
}

fn meta_item(label: &str, value_html: &str) -> String {
    format!(
        "<div class=\"meta-item\">\n<div class=\"meta-label\">{}</div>\n<div class=\"meta-value\">{}</div>\n</div>\n",
        esc(label),
        value_html
    )
}

fn skills_block(data: &CvData) -> String {
    format!(
        "<div class=\"block\">\n<h2 class=\"section-title\">{title}</h2>\n<div class=\"meta-item\">\n<div class=\"meta-label\">{primary_label}</div>\n{primary}</div>\n<div style=\"height: 12px\"></div>\n<div class=\"meta-item\">\n<div class=\"meta-label\">{secondary_label}</div>\n{secondary}</div>\n</div>\n",
        title = esc(&data.skills_title),
        primary_label = labels::SKILLS_PRIMARY,
        primary = tag_list(&data.skills_primary),
        secondary_label = labels::SKILLS_SECONDARY,
        secondary = tag_list(&data.skills_secondary),
    )
}

fn languages_block(data: &CvData) -> String {
    format!(
        "<div class=\"block\">\n<h2 class=\"section-title\">{}</h2>\n{}</div>\n",
        labels::LANGUAGES,
        tag_list(&data.languages)
    )
}

/// Sidebar credential cards, capped to the first three. Suppressed
/// entirely when there are no credentials.
fn credentials_block(data: &CvData) -> String {
    let sidebar = data.sidebar_credentials();
    if sidebar.is_empty() {
        return String::new();
    }
    let cards: String = sidebar.iter().map(credential_card).collect();
    format!(
        "<div class=\"divider\"></div>\n<div class=\"block\">\n<h2 class=\"section-title\">{}</h2>\n<div class=\"edu-list\">\n{cards}</div>\n</div>\n",
        esc(&data.credentials_title)
    )
}

fn credential_card(cred: &CredentialSection) -> String {
    let meta = match cred.period_status() {
        Some(line) => format!("<div class=\"edu-meta\">{}</div>\n", esc(&line)),
        None => String::new(),
    };
    format!(
        "<div class=\"edu-item\">\n<div class=\"edu-title\">{}</div>\n<div class=\"edu-issuer\">{}</div>\n{meta}</div>\n",
        esc(&cred.title),
        esc(&cred.issuer)
    )
}

fn header_block(data: &CvData) -> String {
    let chips: String = data
        .top_skills()
        .iter()
        .map(|s| format!("<span class=\"chip\">{}</span>", esc(s)))
        .collect();
    format!(
        "<header class=\"header\">\n<div>\n<h1 class=\"name\">{}</h1>\n<div class=\"role\">{}</div>\n<div class=\"top-skills\">{chips}</div>\n</div>\n<div></div>\n</header>\n",
        esc(&data.name),
        esc(&data.role)
    )
}

fn about_section(data: &CvData) -> String {
    format!(
        "<section class=\"content-section\">\n<h2 class=\"section-title\">{}</h2>\n<div class=\"summary\">{}</div>\n</section>\n",
        labels::ABOUT,
        esc(&data.about)
    )
}

/// Front-page highlights, capped to the first four. Suppressed when
/// the caller supplied none.
fn highlights_section(data: &CvData) -> String {
    let front = data.front_highlights();
    if front.is_empty() {
        return String::new();
    }
    let entries: String = front
        .iter()
        .map(|h| {
            format!(
                "<div class=\"meta-item\" style=\"margin-top: 10px\">\n<div class=\"meta-label\">{}</div>\n<div class=\"meta-value\">{}</div>\n</div>\n",
                esc(&h.label),
                esc(&h.value)
            )
        })
        .collect();
    format!(
        "<section class=\"content-section\">\n<h2 class=\"section-title\">{}</h2>\n{entries}</section>\n",
        esc(data.highlights_heading())
    )
}

fn recommendations_section(data: &CvData) -> String {
    if data.recommendation_groups.is_empty() {
        return String::new();
    }
    let groups: String = data
        .recommendation_groups
        .iter()
        .map(|group| {
            let cards: String = group
                .people
                .iter()
                .map(|person| {
                    let mut lines = String::new();
                    for line in [person.phone.as_deref(), person.email.as_deref()]
                        .into_iter()
                        .flatten()
                    {
                        lines.push_str(&format!("<div class=\"rec-line\">{}</div>\n", esc(line)));
                    }
                    format!(
                        "<div class=\"rec-card\">\n<div class=\"rec-name\">{}</div>\n{lines}</div>\n",
                        esc(&person.name)
                    )
                })
                .collect();
            format!(
                "<div class=\"rec-group\">\n<div class=\"rec-group-title\">{}</div>\n{cards}</div>\n",
                esc(&group.title)
            )
        })
        .collect();
    format!(
        "<section class=\"content-section\">\n<h2 class=\"section-title\">{}</h2>\n{groups}</section>\n",
        esc(data.recommendations_heading())
    )
}

/// The untruncated continuation pages: every experience entry and every
/// project, full width.
fn detail_pages(data: &CvData) -> String {
    let experience: String = data.experience_sections.iter().map(experience_item).collect();
    let projects: String = data.projects_sections.iter().map(project_item).collect();
    format!(
        "<section class=\"cv cv--rest\">\n<main class=\"content content--full\">\n<section class=\"content-section\">\n<h2 class=\"section-title\">{exp_title}</h2>\n{experience}</section>\n<section class=\"content-section\">\n<h2 class=\"section-title\">{proj_title}</h2>\n{projects}</section>\n</main>\n</section>",
        exp_title = esc(&data.experience_title),
        proj_title = esc(&data.projects_title),
    )
}

fn experience_item(exp: &ExperienceSection) -> String {
    let subtopics: String = exp
        .subtopics
        .iter()
        .map(|sub| {
            format!(
                "<div class=\"subtopic\">\n<div class=\"subtopic-title\">{}</div>\n{}</div>\n",
                esc(&sub.title),
                bullets(&sub.items)
            )
        })
        .collect();
    format!(
        "<div class=\"item\">\n<div class=\"item-head\">\n<div class=\"item-title\">{}</div>\n<div class=\"item-subtitle\">{}</div>\n<div class=\"item-meta\">{}</div>\n</div>\n{}{subtopics}</div>\n",
        esc(&exp.company),
        esc(&exp.role),
        esc(&exp.period),
        bullets(&exp.highlights)
    )
}

fn project_item(proj: &ProjectSection) -> String {
    let stack: String = proj
        .stack
        .iter()
        .map(|tech| format!("<span class=\"stack-tag\">{}</span>", esc(tech)))
        .collect();
    format!(
        "<div class=\"item\">\n<div class=\"project-title\">{}</div>\n<div class=\"project-summary\">{}</div>\n<div class=\"stack\">{stack}</div>\n</div>\n",
        esc(&proj.title),
        esc(&proj.summary)
    )
}

fn tag_list(items: &[String]) -> String {
    let tags: String = items
        .iter()
        .map(|item| format!("<span class=\"tag\">{}</span>", esc(item)))
        .collect();
    format!("<div class=\"tag-list\">{tags}</div>\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use vitae_model::{Highlight, Subtopic};

    fn base() -> CvData {
        CvData {
            name: "Ada Lovelace".into(),
            role: "Engineer".into(),
            photo_data_url: None,
            photo_alt: None,
            email: "ada@example.com".into(),
            phone: "+44 20 0000".into(),
            location: "London".into(),
            linkedin: "linkedin.com/in/ada".into(),
            about: "First programmer.".into(),
            highlights_title: None,
            highlights: vec![],
            experience_title: "Experiência".into(),
            experience_sections: vec![ExperienceSection {
                company: "Analytical Engines Ltd".into(),
                role: "Engineer".into(),
                period: "2020 - 2022".into(),
                highlights: vec!["Shipped X".into(), "Improved Y".into()],
                subtopics: vec![],
            }],
            skills_title: "Skills".into(),
            skills_primary: vec!["Math".into()],
            skills_secondary: vec![],
            languages: vec!["English".into()],
            projects_title: "Projetos".into(),
            projects_sections: vec![],
            credentials_title: "Certificações".into(),
            credentials_sections: vec![],
            recommendations_title: None,
            recommendation_groups: vec![],
        }
    }

    #[test]
    fn test_round_trip_scenario() {
        let html = render_print_document(&base());

        assert!(html.contains("Ada Lovelace"));
        assert!(html.contains("Analytical Engines Ltd"));
        assert!(html.contains("2020 - 2022"));
        assert!(html.contains("Shipped X"));
        assert!(html.contains("Improved Y"));
        assert!(!html.contains("Destaques"));

        // The experience block belongs to the detail pages, after the
        // front-page boundary.
        let boundary = html.find("cv--rest").unwrap();
        let company = html.find("Analytical Engines Ltd").unwrap();
        assert!(company > boundary);
    }

    #[test]
    fn test_render_is_deterministic() {
        let data = base();
        assert_eq!(render_print_document(&data), render_print_document(&data));
    }

    #[test]
    fn test_empty_highlights_suppresses_section() {
        let html = render_print_document(&base());
        assert!(!html.contains("Destaques"));

        let mut with_one = base();
        with_one.highlights = vec![Highlight {
            label: "Anos".into(),
            value: "8+".into(),
        }];
        let html = render_print_document(&with_one);
        assert!(html.contains("Destaques"));
        assert!(html.contains("Anos"));
    }

    #[test]
    fn test_highlights_capped_at_four_in_order() {
        let mut data = base();
        data.highlights = (0..6)
            .map(|i| Highlight {
                label: format!("Label{i}"),
                value: format!("Value{i}"),
            })
            .collect();
        let html = render_print_document(&data);

        for i in 0..4 {
            assert!(html.contains(&format!("Label{i}")), "missing Label{i}");
        }
        assert!(!html.contains("Label4"));
        assert!(!html.contains("Label5"));

        let positions: Vec<usize> = (0..4)
            .map(|i| html.find(&format!("Label{i}")).unwrap())
            .collect();
        assert!(positions.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn test_top_skills_capped_at_eight() {
        let mut data = base();
        data.skills_primary = (0..11).map(|i| format!("Primary{i}")).collect();
        let html = render_print_document(&data);

        assert_eq!(html.matches("class=\"chip\"").count(), 8);
        // Beyond the cap the skill still appears in the sidebar tag
        // list, but never as a header chip.
        assert!(!html.contains("<span class=\"chip\">Primary8</span>"));
    }

    #[test]
    fn test_sidebar_credentials_capped_at_three() {
        let mut data = base();
        data.credentials_sections = (0..5)
            .map(|i| CredentialSection {
                title: format!("Cert{i}"),
                issuer: "Issuer".into(),
                period: Some("2021".into()),
                status: None,
            })
            .collect();
        let html = render_print_document(&data);

        for i in 0..3 {
            assert!(html.contains(&format!("Cert{i}")));
        }
        assert!(!html.contains("Cert3"));
        assert!(!html.contains("Cert4"));
    }

    #[test]
    fn test_no_credentials_suppresses_sidebar_block() {
        let html = render_print_document(&base());
        assert!(!html.contains("edu-list"));
        assert!(!html.contains("Certificações"));
    }

    #[test]
    fn test_photo_rendering() {
        let html = render_print_document(&base());
        assert!(!html.contains("<img"));

        let mut with_photo = base();
        with_photo.photo_data_url = Some("data:image/jpeg;base64,AAAA".into());
        with_photo.photo_alt = Some("Portrait".into());
        let html = render_print_document(&with_photo);
        assert!(html.contains("data:image/jpeg;base64,AAAA"));
        assert!(html.contains("alt=\"Portrait\""));
    }

    #[test]
    fn test_subtopics_rendered_in_full() {
        let mut data = base();
        data.experience_sections[0].subtopics = vec![Subtopic {
            title: "Platform work".into(),
            items: vec!["Item A".into(), "Item B".into()],
        }];
        let html = render_print_document(&data);
        assert!(html.contains("Platform work"));
        assert!(html.contains("Item A"));
        assert!(html.contains("Item B"));
    }

    #[test]
    fn test_data_text_is_escaped() {
        let mut data = base();
        data.name = "Ada <script>alert(1)</script>".into();
        data.about = "Loves R&D".into();
        let html = render_print_document(&data);

        assert!(!html.contains("<script>alert(1)</script>"));
        assert!(html.contains("&lt;script&gt;"));
        assert!(html.contains("R&amp;D"));
    }

    #[test]
    fn test_about_blank_lines_survive() {
        let mut data = base();
        data.about = "First paragraph.\n\nSecond paragraph.".into();
        let html = render_print_document(&data);

        assert!(html.contains("First paragraph.\n\nSecond paragraph."));
        assert!(html.contains("white-space: pre-line"));
    }

    #[test]
    fn test_recommendations_suppressed_and_rendered() {
        let html = render_print_document(&base());
        assert!(!html.contains("Referências"));

        let mut data = base();
        data.recommendation_groups = vec![vitae_model::RecommendationGroup {
            title: "SAPUI5".into(),
            people: vec![vitae_model::RecommendationPerson {
                name: "Maylon Zanardi".into(),
                phone: Some("+55 041 99980-8928".into()),
                email: None,
            }],
        }];
        let html = render_print_document(&data);
        assert!(html.contains("Referências"));
        assert!(html.contains("Maylon Zanardi"));
        assert!(html.contains("+55 041 99980-8928"));
    }

    #[test]
    fn test_linkedin_href_normalized() {
        let html = render_print_document(&base());
        assert!(html.contains("href=\"https://linkedin.com/in/ada\""));
        assert!(html.contains(">linkedin.com/in/ada</a>"));
    }
}
