//! Domain classification with a deterministic default.
//!
//! Classification failure is absorbed, never propagated: a missing domain
//! would break every downstream step, so any model failure or out-of-set
//! reply resolves to [`Domain::General`]. The verdict records which path was
//! taken so the pipeline can tell a real classification from a degraded one.

use std::str::FromStr;

use tracing::{info, warn};

use crate::domain::Domain;
use crate::model::{GenerateRequest, ModelClient};
use crate::prompt::{self, CLASSIFY_MAX_TOKENS};

/// Outcome of a classification attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ClassifierVerdict {
    /// The model answered with a valid in-set token.
    Classified(Domain),
    /// The call failed or the reply was out of set; degraded to `general`.
    /// Carries the offending reply when there was one.
    Defaulted { reply: Option<String> },
}

impl ClassifierVerdict {
    /// The domain to use downstream, whichever path produced it.
    pub fn domain(&self) -> Domain {
        match self {
            Self::Classified(domain) => *domain,
            Self::Defaulted { .. } => Domain::General,
        }
    }

    /// Whether classification degraded to the default.
    pub fn is_defaulted(&self) -> bool {
        matches!(self, Self::Defaulted { .. })
    }
}

/// Classify a goal into a [`Domain`]. Never fails.
pub async fn classify(model: &dyn ModelClient, goal: &str) -> ClassifierVerdict {
    let request = GenerateRequest::new(
        prompt::build_classification_prompt(goal),
        CLASSIFY_MAX_TOKENS,
    )
    .with_stop("\n");

    let reply = match model.generate(&request).await {
        Ok(reply) => reply,
        Err(e) => {
            warn!(error = %e, "classification call failed, defaulting to general");
            return ClassifierVerdict::Defaulted { reply: None };
        }
    };

    match Domain::from_str(&reply.trim().to_lowercase()) {
        Ok(domain) => {
            info!(%domain, "goal classified");
            ClassifierVerdict::Classified(domain)
        }
        Err(_) => {
            warn!(reply = %reply.trim(), "out-of-set classification, defaulting to general");
            ClassifierVerdict::Defaulted { reply: Some(reply) }
        }
    }
}

#[cfg(test)]
mod tests {
    use async_trait::async_trait;

    use super::*;
    use crate::model::ModelError;

    /// Replies with a fixed string, or fails when `None`.
    struct OneShotModel(Option<&'static str>);

    #[async_trait]
    impl ModelClient for OneShotModel {
        fn name(&self) -> &str {
            "one-shot"
        }

        async fn generate(&self, _request: &GenerateRequest) -> Result<String, ModelError> {
            match self.0 {
                Some(reply) => Ok(reply.to_string()),
                None => Err(ModelError::Empty),
            }
        }
    }

    #[tokio::test]
    async fn valid_reply_classifies() {
        let verdict = classify(&OneShotModel(Some("marketplace")), "Build a shop").await;
        assert_eq!(verdict, ClassifierVerdict::Classified(Domain::Marketplace));
        assert_eq!(verdict.domain(), Domain::Marketplace);
        assert!(!verdict.is_defaulted());
    }

    #[tokio::test]
    async fn reply_is_trimmed_and_lowercased() {
        let verdict = classify(&OneShotModel(Some("  Dashboard \n")), "goal").await;
        assert_eq!(verdict.domain(), Domain::Dashboard);
    }

    #[tokio::test]
    async fn out_of_set_reply_defaults_to_general() {
        let verdict = classify(&OneShotModel(Some("weather")), "goal").await;
        assert!(verdict.is_defaulted());
        assert_eq!(verdict.domain(), Domain::General);
        assert_eq!(
            verdict,
            ClassifierVerdict::Defaulted {
                reply: Some("weather".to_string())
            }
        );
    }

    #[tokio::test]
    async fn model_failure_defaults_to_general() {
        let verdict = classify(&OneShotModel(None), "goal").await;
        assert_eq!(verdict, ClassifierVerdict::Defaulted { reply: None });
        assert_eq!(verdict.domain(), Domain::General);
    }

    #[tokio::test]
    async fn never_yields_an_out_of_set_domain() {
        for reply in [Some("banana"), Some("MARKETPLACE!"), Some(""), None] {
            let verdict = classify(&OneShotModel(reply), "goal").await;
            assert!(
                matches!(
                    verdict.domain(),
                    Domain::Marketplace | Domain::Dashboard | Domain::Social | Domain::General
                ),
                "reply {reply:?} escaped the domain set"
            );
        }
    }
}
