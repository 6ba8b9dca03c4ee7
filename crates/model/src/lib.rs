//! The normalized, pre-translated content model consumed by the CV
//! document renderers.
//!
//! A [`CvData`] value is assembled by the calling page once per export
//! action from translated strings and static content tables. Everything
//! in it is plain display text; the renderers perform structural
//! assembly only, no locale logic.

pub mod data;
pub mod labels;
pub mod naming;

pub use data::{
    CvData, CredentialSection, ExperienceSection, Highlight, ProjectSection, RecommendationGroup,
    RecommendationPerson, Subtopic, join_comma,
};
pub use data::{FRONT_HIGHLIGHTS_LIMIT, SIDEBAR_CREDENTIALS_LIMIT, TOP_SKILLS_LIMIT};
pub use naming::cv_file_name;
