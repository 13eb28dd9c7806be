//! Domain template catalog.
//!
//! A static library of per-domain enhancement content (core features, page
//! lists, file structures), defined in `templates.toml` and embedded in the
//! binary at compile time. The catalog is read-only, deserialized once on
//! first access, and never mutated at runtime.
//!
//! The catalog is a struct with one field per templated domain rather than a
//! map keyed by domain name, so [`template_for`] matches on [`Domain`]
//! exhaustively: adding a domain variant without deciding its template is a
//! compile error.

use std::collections::BTreeMap;
use std::sync::OnceLock;

use serde::Deserialize;

use crate::domain::Domain;
use crate::plan::document::Page;

/// Enhancement content for a single templated domain.
#[derive(Debug, Clone, Deserialize)]
pub struct DomainTemplate {
    /// Feature list that replaces shallow `core_features` content.
    pub core_features: Vec<String>,
    /// Page list that replaces shallow `designer.pages` content.
    pub pages: Vec<Page>,
    /// File layout that replaces or backfills `coder.file_structure`.
    pub file_structure: BTreeMap<String, String>,
}

/// The full catalog, one entry per templated domain.
#[derive(Debug, Deserialize)]
pub struct TemplateCatalog {
    pub marketplace: DomainTemplate,
    pub dashboard: DomainTemplate,
    pub social: DomainTemplate,
}

/// The embedded template catalog TOML.
static TEMPLATES_TOML: &str = include_str!("templates.toml");

static CATALOG: OnceLock<TemplateCatalog> = OnceLock::new();

/// The process-wide catalog instance.
///
/// # Panics
///
/// Panics if the embedded TOML is malformed. This is a compile-time invariant
/// -- if the binary was built, the TOML is valid.
pub fn catalog() -> &'static TemplateCatalog {
    CATALOG.get_or_init(|| {
        toml::from_str(TEMPLATES_TOML).expect("embedded templates.toml is invalid")
    })
}

/// Look up the template for a domain. `general` has none.
pub fn template_for(domain: Domain) -> Option<&'static DomainTemplate> {
    let catalog = catalog();
    match domain {
        Domain::Marketplace => Some(&catalog.marketplace),
        Domain::Dashboard => Some(&catalog.dashboard),
        Domain::Social => Some(&catalog.social),
        Domain::General => None,
    }
}

impl Domain {
    /// Convenience accessor for [`template_for`].
    pub fn template(self) -> Option<&'static DomainTemplate> {
        template_for(self)
    }
}
