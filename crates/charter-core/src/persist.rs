//! Plan persistence.
//!
//! Write path: pretty-printed JSON with stable struct-field order, so
//! successive plans diff cleanly. A plan that cannot be persisted cannot be
//! consumed downstream, so unlike every model-side failure these errors
//! propagate to the caller.
//!
//! Read path (used by downstream agents): decode the same format and verify
//! the sections they rely on are present.

use std::path::Path;

use thiserror::Error;

use crate::plan::document::PlanDocument;

/// Conventional destination file name.
pub const DEFAULT_PLAN_FILE: &str = "plan.json";

/// Errors from writing or reading a persisted plan.
#[derive(Debug, Error)]
pub enum PersistError {
    #[error("failed to serialize plan: {0}")]
    Serialize(#[source] serde_json::Error),

    #[error("failed to write plan to {path}: {source}")]
    Write {
        path: String,
        source: std::io::Error,
    },

    #[error("failed to read plan from {path}: {source}")]
    Read {
        path: String,
        source: std::io::Error,
    },

    #[error("plan file {path} is not valid plan JSON: {source}")]
    Decode {
        path: String,
        source: serde_json::Error,
    },

    #[error("plan file {path} is missing required section {section:?}")]
    MissingSection { path: String, section: &'static str },
}

/// Write `plan` to `path` as pretty-printed JSON.
pub fn write_plan(plan: &PlanDocument, path: &Path) -> Result<(), PersistError> {
    let json = serde_json::to_string_pretty(plan).map_err(PersistError::Serialize)?;
    std::fs::write(path, json).map_err(|source| PersistError::Write {
        path: path.display().to_string(),
        source,
    })
}

/// Load a persisted plan and validate the sections downstream agents need:
/// `goal`, `planner.subtasks`, and `coder`.
pub fn load_plan(path: &Path) -> Result<PlanDocument, PersistError> {
    let content = std::fs::read_to_string(path).map_err(|source| PersistError::Read {
        path: path.display().to_string(),
        source,
    })?;

    let plan: PlanDocument =
        serde_json::from_str(&content).map_err(|source| PersistError::Decode {
            path: path.display().to_string(),
            source,
        })?;

    let missing = if plan.goal.is_none() {
        Some("goal")
    } else if plan
        .planner
        .as_ref()
        .and_then(|p| p.subtasks.as_ref())
        .is_none()
    {
        Some("planner.subtasks")
    } else if plan.coder.is_none() {
        Some("coder")
    } else {
        None
    };

    if let Some(section) = missing {
        return Err(PersistError::MissingSection {
            path: path.display().to_string(),
            section,
        });
    }

    Ok(plan)
}

#[cfg(test)]
mod tests {
    use tempfile::TempDir;

    use super::*;
    use crate::domain::Domain;
    use crate::plan::fallback_plan;

    #[test]
    fn write_then_load_roundtrips() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join(DEFAULT_PLAN_FILE);

        let plan = fallback_plan("Build a shoe marketplace", Domain::Marketplace);
        write_plan(&plan, &path).expect("should write");

        let loaded = load_plan(&path).expect("should load");
        assert_eq!(loaded, plan);
    }

    #[test]
    fn written_plan_is_pretty_printed() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join(DEFAULT_PLAN_FILE);

        let plan = fallback_plan("g", Domain::General);
        write_plan(&plan, &path).unwrap();

        let content = std::fs::read_to_string(&path).unwrap();
        assert!(content.contains('\n'), "expected indented output");
        assert!(content.starts_with('{'));
    }

    #[test]
    fn write_to_missing_directory_fails() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("no/such/dir/plan.json");
        let plan = fallback_plan("g", Domain::General);
        let err = write_plan(&plan, &path).unwrap_err();
        assert!(matches!(err, PersistError::Write { .. }), "got: {err}");
    }

    #[test]
    fn load_missing_file_fails() {
        let err = load_plan(Path::new("/nonexistent/plan.json")).unwrap_err();
        assert!(matches!(err, PersistError::Read { .. }), "got: {err}");
    }

    #[test]
    fn load_invalid_json_fails() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("bad.json");
        std::fs::write(&path, "not json {{{").unwrap();
        let err = load_plan(&path).unwrap_err();
        assert!(matches!(err, PersistError::Decode { .. }), "got: {err}");
    }

    #[test]
    fn load_rejects_plan_without_subtasks() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("thin.json");
        std::fs::write(&path, r#"{"goal": "g", "coder": {}, "planner": {}}"#).unwrap();
        let err = load_plan(&path).unwrap_err();
        assert!(
            matches!(
                err,
                PersistError::MissingSection {
                    section: "planner.subtasks",
                    ..
                }
            ),
            "got: {err}"
        );
    }

    #[test]
    fn load_rejects_plan_without_goal() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("thin.json");
        std::fs::write(
            &path,
            r#"{"planner": {"subtasks": []}, "coder": {}}"#,
        )
        .unwrap();
        let err = load_plan(&path).unwrap_err();
        assert!(
            matches!(err, PersistError::MissingSection { section: "goal", .. }),
            "got: {err}"
        );
    }

    #[test]
    fn load_rejects_plan_without_coder() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("thin.json");
        std::fs::write(&path, r#"{"goal": "g", "planner": {"subtasks": ["a"]}}"#).unwrap();
        let err = load_plan(&path).unwrap_err();
        assert!(
            matches!(err, PersistError::MissingSection { section: "coder", .. }),
            "got: {err}"
        );
    }
}
