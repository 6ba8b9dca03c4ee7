//! Content model types and the shaping helpers shared by both
//! document renderers.

use itertools::Itertools;
use serde::{Deserialize, Serialize};

use crate::labels;

/// Maximum number of skill chips in the print document's header row.
pub const TOP_SKILLS_LIMIT: usize = 8;

/// Maximum number of highlight entries on the print document's front page.
pub const FRONT_HIGHLIGHTS_LIMIT: usize = 4;

/// Maximum number of credential cards in the print document's sidebar.
pub const SIDEBAR_CREDENTIALS_LIMIT: usize = 3;

/// The full content model for one export invocation.
///
/// Built fresh on every export action and discarded once the document
/// is produced. Field names serialize in camelCase, matching the object
/// shape the browser caller assembles. List order is insertion order
/// and is never re-sorted here; the caller decides ordering (experience
/// arrives sorted by start date descending).
///
/// Optional collections default to empty: an absent field and a
/// present-but-empty one both suppress the corresponding section.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CvData {
    pub name: String,
    pub role: String,
    /// Self-contained embeddable image (base64 data URI); the renderers
    /// never fetch anything themselves.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub photo_data_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub photo_alt: Option<String>,
    pub email: String,
    pub phone: String,
    pub location: String,
    pub linkedin: String,
    /// Summary text; blank-line-separated paragraphs are preserved.
    pub about: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub highlights_title: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub highlights: Vec<Highlight>,
    pub experience_title: String,
    pub experience_sections: Vec<ExperienceSection>,
    pub skills_title: String,
    pub skills_primary: Vec<String>,
    pub skills_secondary: Vec<String>,
    pub languages: Vec<String>,
    pub projects_title: String,
    pub projects_sections: Vec<ProjectSection>,
    pub credentials_title: String,
    pub credentials_sections: Vec<CredentialSection>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub recommendations_title: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub recommendation_groups: Vec<RecommendationGroup>,
}

/// A labeled front-page fact, e.g. "Experience" / "8+ years".
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Highlight {
    pub label: String,
    pub value: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExperienceSection {
    pub company: String,
    pub role: String,
    /// Pre-formatted, e.g. "2020 - 2022".
    pub period: String,
    pub highlights: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub subtopics: Vec<Subtopic>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Subtopic {
    pub title: String,
    pub items: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectSection {
    pub title: String,
    pub summary: String,
    pub stack: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CredentialSection {
    pub title: String,
    pub issuer: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub period: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecommendationGroup {
    pub title: String,
    pub people: Vec<RecommendationPerson>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecommendationPerson {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
}

impl CvData {
    /// The skill chips for the print document header: the first
    /// [`TOP_SKILLS_LIMIT`] primary skills, in order.
    pub fn top_skills(&self) -> &[String] {
        capped(&self.skills_primary, TOP_SKILLS_LIMIT)
    }

    /// The highlight entries shown on the print document's front page:
    /// the first [`FRONT_HIGHLIGHTS_LIMIT`], in order.
    pub fn front_highlights(&self) -> &[Highlight] {
        capped(&self.highlights, FRONT_HIGHLIGHTS_LIMIT)
    }

    /// The credential cards shown in the print document's sidebar: the
    /// first [`SIDEBAR_CREDENTIALS_LIMIT`], in order.
    pub fn sidebar_credentials(&self) -> &[CredentialSection] {
        capped(&self.credentials_sections, SIDEBAR_CREDENTIALS_LIMIT)
    }

    /// Heading for the highlights section, with the caller-supplied
    /// title taking precedence over the fallback label.
    pub fn highlights_heading(&self) -> &str {
        self.highlights_title
            .as_deref()
            .unwrap_or(labels::HIGHLIGHTS_FALLBACK)
    }

    /// Heading for the recommendations section.
    pub fn recommendations_heading(&self) -> &str {
        self.recommendations_title
            .as_deref()
            .unwrap_or(labels::RECOMMENDATIONS_FALLBACK)
    }

    /// The professional-network handle as an absolute URL.
    pub fn linkedin_url(&self) -> String {
        if self.linkedin.starts_with("http") {
            self.linkedin.clone()
        } else {
            format!("https://{}", self.linkedin)
        }
    }
}

impl CredentialSection {
    /// The front-page card meta line: period and status joined with a
    /// bullet separator, only including present fields. `None` when
    /// neither is present, so the card renders no meta row at all.
    pub fn period_status(&self) -> Option<String> {
        match (self.period.as_deref(), self.status.as_deref()) {
            (None, None) => None,
            (Some(p), None) => Some(p.to_string()),
            (None, Some(s)) => Some(s.to_string()),
            (Some(p), Some(s)) => Some(format!("{p} • {s}")),
        }
    }

    /// The word-processor detail line: issuer, then period and status,
    /// pipe-separated, only including present fields.
    pub fn detail_line(&self) -> String {
        let mut line = self.issuer.clone();
        for part in [self.period.as_deref(), self.status.as_deref()].into_iter().flatten() {
            line.push_str(" | ");
            line.push_str(part);
        }
        line
    }
}

/// Join display strings with a comma separator, as both renderers do
/// for stack lists and skill summaries.
pub fn join_comma<S: AsRef<str>>(items: &[S]) -> String {
    items.iter().map(AsRef::as_ref).join(", ")
}

fn capped<T>(items: &[T], limit: usize) -> &[T] {
    &items[..items.len().min(limit)]
}

#[cfg(test)]
mod tests {
    use super::*;

    fn skills(n: usize) -> Vec<String> {
        (0..n).map(|i| format!("Skill {i}")).collect()
    }

    fn minimal() -> CvData {
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
            experience_title: "Experience".into(),
            experience_sections: vec![],
            skills_title: "Skills".into(),
            skills_primary: vec![],
            skills_secondary: vec![],
            languages: vec![],
            projects_title: "Projects".into(),
            projects_sections: vec![],
            credentials_title: "Credentials".into(),
            credentials_sections: vec![],
            recommendations_title: None,
            recommendation_groups: vec![],
        }
    }

    #[test]
    fn test_top_skills_caps_at_limit_in_order() {
        let mut data = minimal();
        data.skills_primary = skills(12);

        let top = data.top_skills();
        assert_eq!(top.len(), TOP_SKILLS_LIMIT);
        assert_eq!(top[0], "Skill 0");
        assert_eq!(top[TOP_SKILLS_LIMIT - 1], "Skill 7");
    }

    #[test]
    fn test_top_skills_short_list_untouched() {
        let mut data = minimal();
        data.skills_primary = skills(3);
        assert_eq!(data.top_skills().len(), 3);
    }

    #[test]
    fn test_front_highlights_caps_at_four() {
        let mut data = minimal();
        data.highlights = (0..6)
            .map(|i| Highlight {
                label: format!("L{i}"),
                value: format!("V{i}"),
            })
            .collect();

        let front = data.front_highlights();
        assert_eq!(front.len(), FRONT_HIGHLIGHTS_LIMIT);
        assert_eq!(front[3].label, "L3");
    }

    #[test]
    fn test_sidebar_credentials_caps_at_three() {
        let mut data = minimal();
        data.credentials_sections = (0..5)
            .map(|i| CredentialSection {
                title: format!("Cert {i}"),
                issuer: "Issuer".into(),
                period: None,
                status: None,
            })
            .collect();

        assert_eq!(data.sidebar_credentials().len(), SIDEBAR_CREDENTIALS_LIMIT);
        assert_eq!(data.sidebar_credentials()[0].title, "Cert 0");
    }

    #[test]
    fn test_heading_fallbacks() {
        let mut data = minimal();
        assert_eq!(data.highlights_heading(), "Destaques");
        assert_eq!(data.recommendations_heading(), "Referências");

        data.highlights_title = Some("Highlights".into());
        data.recommendations_title = Some("References".into());
        assert_eq!(data.highlights_heading(), "Highlights");
        assert_eq!(data.recommendations_heading(), "References");
    }

    #[test]
    fn test_linkedin_url_prefixes_scheme() {
        let mut data = minimal();
        assert_eq!(data.linkedin_url(), "https://linkedin.com/in/ada");

        data.linkedin = "https://linkedin.com/in/ada".into();
        assert_eq!(data.linkedin_url(), "https://linkedin.com/in/ada");
    }

    #[test]
    fn test_credential_period_status_variants() {
        let mut cred = CredentialSection {
            title: "Cert".into(),
            issuer: "Issuer".into(),
            period: None,
            status: None,
        };
        assert_eq!(cred.period_status(), None);

        cred.period = Some("2021".into());
        assert_eq!(cred.period_status().as_deref(), Some("2021"));

        cred.status = Some("Em andamento".into());
        assert_eq!(cred.period_status().as_deref(), Some("2021 • Em andamento"));

        cred.period = None;
        assert_eq!(cred.period_status().as_deref(), Some("Em andamento"));
    }

    #[test]
    fn test_credential_detail_line_skips_absent_fields() {
        let cred = CredentialSection {
            title: "Cert".into(),
            issuer: "Issuer".into(),
            period: Some("2021".into()),
            status: None,
        };
        assert_eq!(cred.detail_line(), "Issuer | 2021");

        let bare = CredentialSection {
            title: "Cert".into(),
            issuer: "Issuer".into(),
            period: None,
            status: None,
        };
        assert_eq!(bare.detail_line(), "Issuer");
    }

    #[test]
    fn test_join_comma() {
        assert_eq!(join_comma(&["Rust", "TypeScript"]), "Rust, TypeScript");
        assert_eq!(join_comma::<String>(&[]), "");
    }

    #[test]
    fn test_camel_case_round_trip() {
        let json = r#"{
            "name": "Ada Lovelace",
            "role": "Engineer",
            "photoDataUrl": "data:image/jpeg;base64,AAAA",
            "email": "ada@example.com",
            "phone": "+44 20 0000",
            "location": "London",
            "linkedin": "linkedin.com/in/ada",
            "about": "First programmer.",
            "experienceTitle": "Experience",
            "experienceSections": [],
            "skillsTitle": "Skills",
            "skillsPrimary": ["Math"],
            "skillsSecondary": [],
            "languages": ["English"],
            "projectsTitle": "Projects",
            "projectsSections": [],
            "credentialsTitle": "Credentials",
            "credentialsSections": []
        }"#;

        let data: CvData = serde_json::from_str(json).unwrap();
        assert_eq!(data.photo_data_url.as_deref(), Some("data:image/jpeg;base64,AAAA"));
        assert!(data.highlights.is_empty());
        assert!(data.recommendation_groups.is_empty());

        let back = serde_json::to_value(&data).unwrap();
        assert_eq!(back["skillsPrimary"][0], "Math");
        assert!(back.get("highlights").is_none());
    }
}
