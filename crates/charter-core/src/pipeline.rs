//! The planning pipeline: classify -> prompt -> parse-or-fallback ->
//! enhance -> complete -> persist.
//!
//! Every model-side failure is absorbed along the way (classification
//! degrades to `general`, an unusable planning response degrades to the
//! template fallback), so [`Pipeline::run`] always yields a plan. The one
//! fatal condition is persistence: a plan that cannot be written cannot be
//! consumed downstream.

use std::fmt;
use std::path::Path;
use std::sync::Arc;

use anyhow::Context;
use chrono::Utc;
use tracing::{info, warn};

use crate::classify::classify;
use crate::domain::Domain;
use crate::model::{GenerateRequest, ModelClient};
use crate::persist;
use crate::plan::document::PlanDocument;
use crate::plan::{complete, enhance, fallback_plan, is_generic, parse_plan};
use crate::prompt::{self, PLAN_MAX_TOKENS};

/// Which branch produced the plan content.
///
/// Both branches satisfy the same structural contract but differ sharply in
/// quality; operators need to be able to tell them apart.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlanSource {
    /// The model's response parsed (and was possibly enhanced).
    Model,
    /// The model's response was unusable; the plan is a synthesized template.
    Fallback,
}

impl fmt::Display for PlanSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Model => f.write_str("model"),
            Self::Fallback => f.write_str("fallback"),
        }
    }
}

/// A finished (but not yet persisted) pipeline result.
#[derive(Debug, Clone)]
pub struct PlanOutcome {
    pub plan: PlanDocument,
    /// The assigned domain; single source of truth, already written into the
    /// plan by the completion pass.
    pub domain: Domain,
    pub source: PlanSource,
    /// Whether classification degraded to the default domain.
    pub classifier_defaulted: bool,
}

/// Sequences the planning pipeline over a model client.
///
/// Stateless between invocations aside from the shared read-only template
/// catalog; independent goals can be planned with independent pipelines.
pub struct Pipeline {
    model: Arc<dyn ModelClient>,
}

impl Pipeline {
    pub fn new(model: Arc<dyn ModelClient>) -> Self {
        Self { model }
    }

    /// Run the pipeline through completion. Never fails.
    ///
    /// `forced_domain` skips classification (operator override); otherwise
    /// the classifier assigns the domain, degrading to `general` on any
    /// failure.
    pub async fn run(&self, goal: &str, forced_domain: Option<Domain>) -> PlanOutcome {
        // 1. Classify.
        let (domain, classifier_defaulted) = match forced_domain {
            Some(domain) => {
                info!(%domain, "skipping classification, domain forced");
                (domain, false)
            }
            None => {
                let verdict = classify(self.model.as_ref(), goal).await;
                (verdict.domain(), verdict.is_defaulted())
            }
        };

        // 2. Prompt the model and decode, or fall back.
        let (mut plan, source) = self.generate(goal, domain).await;

        // 3. Complete: unconditional structural post-conditions.
        complete(&mut plan, goal, domain);

        PlanOutcome {
            plan,
            domain,
            source,
            classifier_defaulted,
        }
    }

    /// Prompt -> parse -> (enhance | fallback). The fallback branch skips
    /// enhancement: synthesized plans are already domain-complete.
    async fn generate(&self, goal: &str, domain: Domain) -> (PlanDocument, PlanSource) {
        let request =
            GenerateRequest::new(prompt::build_planning_prompt(goal, domain), PLAN_MAX_TOKENS);

        let raw = match self.model.generate(&request).await {
            Ok(raw) => raw,
            Err(e) => {
                warn!(error = %e, %domain, "planning call failed, degrading to template plan");
                return (fallback_plan(goal, domain), PlanSource::Fallback);
            }
        };

        match parse_plan(&raw) {
            Ok(mut plan) => {
                if is_generic(&plan) {
                    info!(%domain, "plan content is generic, applying domain enhancement");
                    enhance(&mut plan, domain);
                }
                (plan, PlanSource::Model)
            }
            Err(e) => {
                warn!(error = %e, %domain, "could not decode model plan, degrading to template plan");
                (fallback_plan(goal, domain), PlanSource::Fallback)
            }
        }
    }

    /// Finalize and persist an outcome: stamp `generated_at`, then write.
    ///
    /// The timestamp marks when the plan was finalized, not when the model
    /// first produced it. Persistence failure is fatal and propagates.
    pub fn persist(&self, outcome: &mut PlanOutcome, destination: &Path) -> anyhow::Result<()> {
        outcome.plan.generated_at = Some(Utc::now());
        persist::write_plan(&outcome.plan, destination)
            .with_context(|| format!("failed to persist plan to {}", destination.display()))?;
        info!(
            path = %destination.display(),
            domain = %outcome.domain,
            source = %outcome.source,
            "plan persisted"
        );
        Ok(())
    }

    /// The full pipeline: run, finalize, persist, and return the ordered
    /// subtask list. An empty list is a legitimate result, not an error.
    pub async fn plan(&self, goal: &str, destination: &Path) -> anyhow::Result<Vec<String>> {
        let mut outcome = self.run(goal, None).await;
        self.persist(&mut outcome, destination)?;
        Ok(outcome.plan.subtasks().to_vec())
    }
}
