//! Fallback plan synthesis.
//!
//! When the planning call fails or its output cannot be decoded, the
//! pipeline still owes its caller a complete plan. This generator builds one
//! from fixed prose templates parameterized by goal and domain, with every
//! field required of a finished plan populated. Domains with a template
//! contribute their real feature list, page list, and file structure in
//! place of the generic defaults.

use std::collections::BTreeMap;

use serde_json::{Map, Value, json};

use crate::domain::Domain;

use super::document::{
    CoderSection, DesignSystem, DesignerSection, Page, PlanDocument, PlannerSection, Requirements,
};

/// Synthesize a complete plan for `goal` in `domain`.
pub fn fallback_plan(goal: &str, domain: Domain) -> PlanDocument {
    let template = domain.template();

    let core_features = match template {
        Some(t) => t.core_features.clone(),
        None => vec![
            "User accounts and authentication".to_owned(),
            "Primary workflow screens".to_owned(),
            "Responsive layout".to_owned(),
        ],
    };

    let file_structure = match template {
        Some(t) => t.file_structure.clone(),
        None => default_file_structure(),
    };

    let pages = match template {
        Some(t) => t.pages.clone(),
        None => vec![
            Page {
                name: "Home".to_owned(),
                components: vec![
                    "Navigation bar".to_owned(),
                    "Primary panel".to_owned(),
                    "Footer".to_owned(),
                ],
            },
            Page {
                name: "Detail".to_owned(),
                components: vec!["Summary header".to_owned(), "Action buttons".to_owned()],
            },
        ],
    };

    PlanDocument {
        goal: Some(goal.to_owned()),
        project_type: Some("web_application".to_owned()),
        domain: Some(domain),
        planner: Some(PlannerSection {
            subtasks: Some(vec![
                format!("Define detailed requirements for the {domain} project"),
                format!("Design the {domain} data model and page flow"),
                format!("Implement the core {domain} features"),
                format!("Test and refine the {domain} experience"),
            ]),
            requirements: Some(Requirements {
                core_features: Some(core_features),
                tech_stack: Some("React frontend with a Node.js API".to_owned()),
                timeline: Some("2-3 weeks".to_owned()),
                extra: Map::new(),
            }),
            extra: Map::new(),
        }),
        coder: Some(CoderSection {
            tasks: Some(vec![
                "Scaffold the project and tooling".to_owned(),
                "Implement the API services".to_owned(),
                "Build the UI components".to_owned(),
                "Wire the pages together".to_owned(),
            ]),
            technical_specs: Some(object(json!({
                "frontend": "React",
                "backend": "Node.js",
                "database": "PostgreSQL",
                "deployment": "Vercel",
            }))),
            file_structure: Some(file_structure),
            extra: Map::new(),
        }),
        designer: Some(DesignerSection {
            theme: Some(format!("Clean, modern interface for a {domain} product")),
            pages: Some(pages),
            design_system: Some(DesignSystem {
                colors: object(json!({
                    "primary": "#2563EB",
                    "background": "#F8FAFC",
                    "text": "#0F172A",
                })),
                typography: object(json!({
                    "headings": "Inter",
                    "body": "Inter",
                })),
                extra: Map::new(),
            }),
            extra: Map::new(),
        }),
        generated_at: None,
        extra: Map::new(),
    }
}

fn default_file_structure() -> BTreeMap<String, String> {
    BTreeMap::from([
        ("src/App.js".to_owned(), "Application shell and routing".to_owned()),
        ("src/index.js".to_owned(), "Entry point".to_owned()),
        ("src/api/client.js".to_owned(), "Backend API client".to_owned()),
        ("src/pages/Home.js".to_owned(), "Landing page".to_owned()),
    ])
}

fn object(value: Value) -> Map<String, Value> {
    match value {
        Value::Object(map) => map,
        _ => unreachable!("json! literal above is an object"),
    }
}
