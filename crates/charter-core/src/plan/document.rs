//! Plan document types.
//!
//! These types map directly to the `plan.json` on-disk format and to the JSON
//! the model is prompted to emit. Every section field is an `Option` so that
//! key *presence* is representable: the enhancement and completion passes are
//! defined over whether the model emitted a key at all, not over whether its
//! content is empty. Unknown keys the model invents are captured in `extra`
//! maps and survive the parse -> persist path untouched.

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};

use crate::domain::Domain;

/// Top-level structure of a plan document.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct PlanDocument {
    /// The user-supplied goal this plan was generated for.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub goal: Option<String>,
    /// Coarse project shape (e.g. "web_application").
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub project_type: Option<String>,
    /// Assigned domain. Whatever the model claims here is overwritten by the
    /// completion pass with the classifier's verdict; an out-of-set value is
    /// dropped at decode time rather than failing the whole parse.
    #[serde(
        default,
        deserialize_with = "lenient_domain",
        skip_serializing_if = "Option::is_none"
    )]
    pub domain: Option<Domain>,
    /// Planner agent section: subtasks and requirements.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub planner: Option<PlannerSection>,
    /// Coder agent section: tasks, technical specs, file structure.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub coder: Option<CoderSection>,
    /// Designer agent section: theme, pages, design system.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub designer: Option<DesignerSection>,
    /// Stamped when the plan is finalized for persistence, not when the model
    /// first produced it.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub generated_at: Option<DateTime<Utc>>,
    /// Top-level keys the model emitted beyond the schema.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// The `planner` section.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct PlannerSection {
    /// Ordered subtasks; order is execution order.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subtasks: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub requirements: Option<Requirements>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// The `planner.requirements` object.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Requirements {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub core_features: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tech_stack: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timeline: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// The `coder` section.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct CoderSection {
    /// Ordered coding tasks.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tasks: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub technical_specs: Option<Map<String, Value>>,
    /// Relative file path -> one-line description. A map keyed by path keeps
    /// the paths unique by construction.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub file_structure: Option<BTreeMap<String, String>>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// The `designer` section.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct DesignerSection {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub theme: Option<String>,
    /// Ordered page list.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pages: Option<Vec<Page>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub design_system: Option<DesignSystem>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// A single page in the `designer.pages` list.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Page {
    #[serde(default)]
    pub name: String,
    /// Ordered component names on the page.
    #[serde(default)]
    pub components: Vec<String>,
}

/// The `designer.design_system` object.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct DesignSystem {
    #[serde(default, skip_serializing_if = "Map::is_empty")]
    pub colors: Map<String, Value>,
    #[serde(default, skip_serializing_if = "Map::is_empty")]
    pub typography: Map<String, Value>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl PlanDocument {
    /// The ordered subtask list, or empty if the model never produced one.
    /// Empty is a legitimate result, not an error.
    pub fn subtasks(&self) -> &[String] {
        self.planner
            .as_ref()
            .and_then(|p| p.subtasks.as_deref())
            .unwrap_or_default()
    }
}

/// Decode `domain` without letting an out-of-set token (e.g. the model
/// inventing `"weather"`) poison the rest of the document.
fn lenient_domain<'de, D>(deserializer: D) -> Result<Option<Domain>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<String>::deserialize(deserializer)?;
    Ok(raw.and_then(|s| s.trim().to_lowercase().parse().ok()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deserialize_minimal_document() {
        let doc: PlanDocument = serde_json::from_str("{}").expect("should parse");
        assert!(doc.goal.is_none());
        assert!(doc.planner.is_none());
        assert!(doc.subtasks().is_empty());
    }

    #[test]
    fn deserialize_full_document() {
        let json = r##"{
            "goal": "Build a weather app",
            "project_type": "web_application",
            "domain": "general",
            "planner": {
                "subtasks": ["Define app requirements", "Research weather APIs"],
                "requirements": {
                    "core_features": ["Current weather", "Forecast"],
                    "tech_stack": "React + OpenWeatherMap",
                    "timeline": "2 weeks"
                }
            },
            "coder": {
                "tasks": ["Setup React project"],
                "technical_specs": {"frontend": "React"},
                "file_structure": {"src/App.js": "Main component"}
            },
            "designer": {
                "theme": "Blue card UI with icons",
                "pages": [{"name": "Home", "components": ["Search", "Forecast cards"]}],
                "design_system": {
                    "colors": {"primary": "#2196F3"},
                    "typography": {"headings": "Inter", "body": "Sans"}
                }
            }
        }"##;
        let doc: PlanDocument = serde_json::from_str(json).expect("should parse");
        assert_eq!(doc.domain, Some(Domain::General));
        assert_eq!(doc.subtasks().len(), 2);
        let coder = doc.coder.as_ref().unwrap();
        assert_eq!(
            coder.file_structure.as_ref().unwrap()["src/App.js"],
            "Main component"
        );
        let designer = doc.designer.as_ref().unwrap();
        assert_eq!(designer.pages.as_ref().unwrap()[0].name, "Home");
    }

    #[test]
    fn out_of_set_domain_is_dropped_not_fatal() {
        let doc: PlanDocument =
            serde_json::from_str(r#"{"domain": "weather"}"#).expect("should parse");
        assert_eq!(doc.domain, None);
    }

    #[test]
    fn unknown_keys_are_preserved() {
        let json = r#"{"goal": "x", "confidence": 0.9, "planner": {"notes": "keep me"}}"#;
        let doc: PlanDocument = serde_json::from_str(json).expect("should parse");
        assert_eq!(doc.extra["confidence"], 0.9);
        assert_eq!(doc.planner.as_ref().unwrap().extra["notes"], "keep me");

        let out = serde_json::to_string(&doc).expect("should serialize");
        assert!(out.contains("confidence"));
        assert!(out.contains("keep me"));
    }

    #[test]
    fn absent_keys_stay_absent_on_serialize() {
        let doc = PlanDocument::default();
        let out = serde_json::to_string(&doc).expect("should serialize");
        assert_eq!(out, "{}");
    }

    #[test]
    fn roundtrip_serialize_deserialize() {
        let json = r#"{
            "goal": "Build a shoe marketplace",
            "designer": {"pages": []},
            "coder": {"file_structure": {"src/a.js": "a", "src/b.js": "b"}}
        }"#;
        let doc: PlanDocument = serde_json::from_str(json).expect("should parse");
        let out = serde_json::to_string(&doc).expect("should serialize");
        let back: PlanDocument = serde_json::from_str(&out).expect("should reparse");
        assert_eq!(doc, back);
        // Empty-but-present stays present.
        assert_eq!(back.designer.unwrap().pages, Some(vec![]));
    }
}
