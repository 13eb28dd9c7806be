//! Field completion.
//!
//! The last pass over every plan, whatever produced it. Guarantees the
//! structural minimum downstream agents rely on: the assigned domain, the
//! goal, and the `planner`/`coder`/`designer` sections with their required
//! containers. Population from templates happens only for keys that are
//! literally absent -- a present-but-empty list was the model's answer and
//! is left alone (the genericity/enhancement path is what upgrades shallow
//! content).
//!
//! The guarantee stops there: `core_features`, `tasks`, `theme` and the like
//! may remain absent when the model omitted them and no template applies.

use crate::domain::Domain;

use super::document::{PlanDocument, Requirements};

/// Enforce the structural post-conditions on `plan`. Idempotent.
pub fn complete(plan: &mut PlanDocument, goal: &str, domain: Domain) {
    // The classifier's verdict is the single source of truth for the domain,
    // not whatever the model claimed.
    plan.domain = Some(domain);

    if plan.goal.is_none() {
        plan.goal = Some(goal.to_owned());
    }
    if plan.project_type.is_none() {
        plan.project_type = Some("web_application".to_owned());
    }

    let planner = plan.planner.get_or_insert_with(Default::default);
    if planner.requirements.is_none() {
        planner.requirements = Some(Requirements::default());
    }

    let coder = plan.coder.get_or_insert_with(Default::default);
    if coder.file_structure.is_none() {
        if let Some(template) = domain.template() {
            coder.file_structure = Some(template.file_structure.clone());
        }
    }

    let designer = plan.designer.get_or_insert_with(Default::default);
    if designer.pages.is_none() {
        if let Some(template) = domain.template() {
            designer.pages = Some(template.pages.clone());
        }
    }
}
