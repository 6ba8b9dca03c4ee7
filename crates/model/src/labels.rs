//! Fixed section labels.
//!
//! The calling page hardcodes these outside its translation layer, so
//! they are shared constants here rather than fields on the model. Both
//! renderers read them from this one place.

pub const CONTACT: &str = "Contato";
pub const ABOUT: &str = "Sobre";
pub const LANGUAGES: &str = "Idiomas";

pub const EMAIL: &str = "Email";
pub const PHONE: &str = "Telefone";
pub const LOCATION: &str = "Local";
pub const LINKEDIN: &str = "LinkedIn";

pub const SKILLS_PRIMARY: &str = "Primárias";
pub const SKILLS_SECONDARY: &str = "Secundárias";

/// Used when the caller supplies no highlights title.
pub const HIGHLIGHTS_FALLBACK: &str = "Destaques";
/// Used when the caller supplies no recommendations title.
pub const RECOMMENDATIONS_FALLBACK: &str = "Referências";

/// Suffix of the print document's own `<title>` ("<name> - Currículo").
pub const DOCUMENT_TITLE_SUFFIX: &str = "Currículo";
