//! The `ModelClient` trait -- the adapter interface for generative models.
//!
//! Each concrete adapter (a local agent CLI, an API client, a test double)
//! implements this trait. The trait is intentionally object-safe so the
//! pipeline can hold an `Arc<dyn ModelClient>` without caring which backend
//! produced the text.

pub mod command;

use async_trait::async_trait;
use thiserror::Error;

pub use command::CommandModelAdapter;

/// A single generation request.
#[derive(Debug, Clone)]
pub struct GenerateRequest {
    /// The full prompt text.
    pub prompt: String,
    /// Upper bound on generated output length, in tokens. Advisory for
    /// backends that cannot enforce it.
    pub max_tokens: u32,
    /// Sequences at which generation should stop. Backends that cannot pass
    /// these through truncate the collected text instead.
    pub stop_sequences: Vec<String>,
}

impl GenerateRequest {
    /// A request with no stop sequences.
    pub fn new(prompt: impl Into<String>, max_tokens: u32) -> Self {
        Self {
            prompt: prompt.into(),
            max_tokens,
            stop_sequences: Vec::new(),
        }
    }

    /// Add a stop sequence.
    pub fn with_stop(mut self, stop: impl Into<String>) -> Self {
        self.stop_sequences.push(stop.into());
        self
    }
}

/// Errors from invoking a model backend.
///
/// These are generic invocation failures (network, subprocess, resource);
/// the pipeline never propagates them -- a failed classification call
/// degrades to the default domain and a failed planning call routes to the
/// fallback generator.
#[derive(Debug, Error)]
pub enum ModelError {
    #[error("failed to launch model command {command:?}: {source}")]
    Spawn {
        command: String,
        source: std::io::Error,
    },

    #[error("i/o error talking to model process: {0}")]
    Io(#[from] std::io::Error),

    #[error("model command exited with {status}: {stderr}")]
    Failed {
        status: std::process::ExitStatus,
        stderr: String,
    },

    #[error("model returned an empty response")]
    Empty,
}

/// Adapter interface for generative-model backends.
///
/// # Object Safety
///
/// This trait is object-safe: the pipeline stores `Arc<dyn ModelClient>`.
#[async_trait]
pub trait ModelClient: Send + Sync {
    /// Human-readable name for this backend (e.g. "command").
    fn name(&self) -> &str;

    /// Generate text for the given request.
    ///
    /// Blocks (asynchronously) for the full round trip; the pipeline issues
    /// one call at a time and enforces no timeout of its own.
    async fn generate(&self, request: &GenerateRequest) -> Result<String, ModelError>;
}

// Compile-time assertion: ModelClient must be object-safe.
const _: () = {
    fn _assert_object_safe(_: &dyn ModelClient) {}
};
