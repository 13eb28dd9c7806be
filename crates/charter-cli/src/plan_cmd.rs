//! The `charter plan` command.

use std::path::Path;
use std::sync::Arc;

use anyhow::{Context, bail};

use charter_core::{CommandModelAdapter, Domain, Pipeline, PlanSource};

/// Default model command when neither the flag nor the env var is set.
const DEFAULT_MODEL_CMD: &str = "claude -p";

/// Env var consulted when `--model-cmd` is not given.
const MODEL_CMD_ENV: &str = "CHARTER_MODEL_CMD";

/// Resolve the model command line: flag > env var > default.
fn resolve_model_cmd(flag: Option<&str>) -> String {
    if let Some(cmd) = flag {
        return cmd.to_string();
    }
    std::env::var(MODEL_CMD_ENV).unwrap_or_else(|_| DEFAULT_MODEL_CMD.to_string())
}

/// Execute `charter plan`.
pub async fn run_plan(
    goal: &str,
    output: &str,
    model_cmd: Option<&str>,
    domain: Option<&str>,
) -> anyhow::Result<()> {
    let command_line = resolve_model_cmd(model_cmd);
    let Some(adapter) = CommandModelAdapter::from_command_line(&command_line) else {
        bail!("model command is empty (set --model-cmd or {MODEL_CMD_ENV})");
    };

    let forced_domain = domain
        .map(|d| {
            d.parse::<Domain>()
                .with_context(|| format!("invalid --domain {d:?}"))
        })
        .transpose()?;

    let pipeline = Pipeline::new(Arc::new(adapter));
    let mut outcome = pipeline.run(goal, forced_domain).await;
    pipeline.persist(&mut outcome, Path::new(output))?;

    // Operator summary: make degraded runs visible. A template plan and a
    // model plan satisfy the same structure but read very differently.
    println!("Plan written to {output}");
    println!("  domain: {}{}", outcome.domain, if outcome.classifier_defaulted {
        " (classifier defaulted)"
    } else {
        ""
    });
    match outcome.source {
        PlanSource::Model => println!("  source: model output"),
        PlanSource::Fallback => {
            println!("  source: template fallback (model output was unusable)");
        }
    }

    let subtasks = outcome.plan.subtasks();
    if subtasks.is_empty() {
        println!("  subtasks: none");
    } else {
        println!("  subtasks:");
        for (i, subtask) in subtasks.iter().enumerate() {
            println!("    {}. {subtask}", i + 1);
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flag_wins_over_default() {
        assert_eq!(resolve_model_cmd(Some("my-model --fast")), "my-model --fast");
    }

    #[test]
    fn default_is_used_without_flag_or_env() {
        // The env var may leak in from the outer environment; only assert
        // the default when it is unset.
        if std::env::var(MODEL_CMD_ENV).is_err() {
            assert_eq!(resolve_model_cmd(None), DEFAULT_MODEL_CMD);
        }
    }
}
