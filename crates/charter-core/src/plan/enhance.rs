//! Domain enhancement.
//!
//! Replaces shallow plan content with template content for domains that have
//! one. Every overwrite is guarded on the target key already existing: the
//! model attempted that part of the plan and produced something weak.
//! Creating structure the model never attempted is the completer's job, not
//! this pass's.

use crate::domain::Domain;

use super::document::PlanDocument;

/// Merge template content into `plan` for `domain`. No-op for domains
/// without a template.
pub fn enhance(plan: &mut PlanDocument, domain: Domain) {
    let Some(template) = domain.template() else {
        return;
    };

    if let Some(requirements) = plan
        .planner
        .as_mut()
        .and_then(|p| p.requirements.as_mut())
    {
        requirements.core_features = Some(template.core_features.clone());
    }

    if let Some(designer) = plan.designer.as_mut() {
        if designer.pages.is_some() {
            designer.pages = Some(template.pages.clone());
        }
    }

    if let Some(coder) = plan.coder.as_mut() {
        if coder.file_structure.is_some() {
            coder.file_structure = Some(template.file_structure.clone());
        }
    }
}
