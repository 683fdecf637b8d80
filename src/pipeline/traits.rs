//! Collaborator seams for agent runs.
//!
//! Fetching, prompt construction, and text generation live outside this
//! crate. [`ContentAgent`](super::ContentAgent) only depends on these traits,
//! so any HTTP client, template store, or model backend can be plugged in.

use std::future::Future;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::errors::PipelineResult;

/// Transport key holding the location after redirects.
pub const FINAL_URL_KEY: &str = "final_url";

/// Markup delivered by a [`PageSource`], plus transport details
/// (status, final URL, content type, ...).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FetchedPage {
    pub markup: String,
    #[serde(default)]
    pub transport: Map<String, Value>,
}

impl FetchedPage {
    #[must_use]
    pub fn new(markup: impl Into<String>) -> Self {
        Self {
            markup: markup.into(),
            transport: Map::new(),
        }
    }

    #[must_use]
    pub fn with_transport(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.transport.insert(key.into(), value.into());
        self
    }

    /// Base location for reference resolution: the transport's final URL,
    /// else `requested`.
    #[must_use]
    pub fn base_url<'a>(&'a self, requested: &'a str) -> &'a str {
        self.transport
            .get(FINAL_URL_KEY)
            .and_then(Value::as_str)
            .filter(|u| !u.is_empty())
            .unwrap_or(requested)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PromptPair {
    pub system: String,
    pub user: String,
}

/// Generated text plus backend details (model, token usage, ...).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Generation {
    pub text: String,
    #[serde(default)]
    pub metadata: Map<String, Value>,
}

pub trait PageSource: Send + Sync {
    /// Retrieve the markup at `url`.
    fn fetch(&self, url: &str) -> impl Future<Output = PipelineResult<FetchedPage>> + Send;
}

pub trait PromptFormatter: Send + Sync {
    /// Build the system and user prompts for `template` over `content`.
    fn format_prompts(&self, template: &str, content: &str) -> PipelineResult<PromptPair>;
}

pub trait TextGenerator: Send + Sync {
    fn generate(
        &self,
        prompts: &PromptPair,
    ) -> impl Future<Output = PipelineResult<Generation>> + Send;
}
