//! Fetch → extract → prompt → generate → render, for one URL or a batch.

use futures::stream::{self, StreamExt};
use serde::{Deserialize, Serialize};

use super::errors::{PipelineError, PipelineResult};
use super::traits::{PageSource, PromptFormatter, TextGenerator};
use crate::config::AgentConfig;
use crate::content_formatter::{OutputFormat, RenderMetadata, assemble_metadata, render};
use crate::page_extractor::ContentProcessor;
use crate::utils::{char_len, is_valid_url};

/// Outcome of a successful run over one URL.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProcessedPage {
    pub url: String,
    pub template: String,
    pub format: OutputFormat,
    /// Rendered artifact
    pub content: String,
    /// Generated text before rendering
    pub raw_content: String,
    pub metadata: RenderMetadata,
}

/// Drives the collaborators for each URL.
#[derive(Debug, Clone)]
pub struct ContentAgent<S, P, G> {
    source: S,
    prompts: P,
    generator: G,
    processor: ContentProcessor,
    config: AgentConfig,
}

impl<S, P, G> ContentAgent<S, P, G>
where
    S: PageSource,
    P: PromptFormatter,
    G: TextGenerator,
{
    pub fn new(source: S, prompts: P, generator: G, config: AgentConfig) -> Self {
        Self {
            source,
            prompts,
            generator,
            processor: ContentProcessor::new(config.extract.clone()),
            config,
        }
    }

    #[must_use]
    pub fn config(&self) -> &AgentConfig {
        &self.config
    }

    #[must_use]
    pub fn source(&self) -> &S {
        &self.source
    }

    /// Process `url` with `template`, rendering in the configured format.
    ///
    /// # Errors
    /// See [`process_url_as`](Self::process_url_as).
    pub async fn process_url(&self, url: &str, template: &str) -> PipelineResult<ProcessedPage> {
        self.process_url_as(url, template, self.config.format).await
    }

    /// Process `url` with `template`, rendering in `format`.
    ///
    /// # Errors
    /// - [`PipelineError::InvalidUrl`] for anything but an absolute http(s) URL
    /// - [`PipelineError::ContentTooShort`] when the page yields less readable
    ///   text than `min_readable_chars`
    /// - whatever the page source, prompt formatter, or generator reports
    pub async fn process_url_as(
        &self,
        url: &str,
        template: &str,
        format: OutputFormat,
    ) -> PipelineResult<ProcessedPage> {
        if !is_valid_url(url) {
            return Err(PipelineError::InvalidUrl(url.to_string()));
        }
        tracing::info!(url, template, %format, "Processing URL");

        let page = self.source.fetch(url).await?;
        tracing::debug!(url, markup_bytes = page.markup.len(), "Fetched page");

        let readable = self
            .processor
            .readable_text(&page.markup, Some(page.base_url(url)));
        let length = char_len(readable.trim());
        if length < self.config.min_readable_chars {
            return Err(PipelineError::ContentTooShort {
                length,
                minimum: self.config.min_readable_chars,
            });
        }

        let prompts = self.prompts.format_prompts(template, &readable)?;
        let generation = self.generator.generate(&prompts).await?;
        tracing::debug!(url, generated_chars = char_len(&generation.text), "Generated content");

        let mut extra = RenderMetadata::from(page.transport);
        extra.merge(RenderMetadata::from(generation.metadata));
        let metadata = assemble_metadata(&generation.text, Some(url), Some(template), Some(extra));
        let content = render(&generation.text, format, Some(&metadata));

        tracing::info!(url, "URL processed");
        Ok(ProcessedPage {
            url: url.to_string(),
            template: template.to_string(),
            format,
            content,
            raw_content: generation.text,
            metadata,
        })
    }

    /// Process every URL, up to `concurrency` at a time.
    ///
    /// Results come back in input order, each paired with its URL. One
    /// URL failing does not affect the others.
    pub async fn process_many<I>(
        &self,
        urls: I,
        template: &str,
    ) -> Vec<(String, PipelineResult<ProcessedPage>)>
    where
        I: IntoIterator,
        I::Item: Into<String>,
    {
        let concurrency = self.config.concurrency.max(1);

        let results: Vec<(String, PipelineResult<ProcessedPage>)> =
            stream::iter(urls.into_iter().map(Into::into))
                .map(|url: String| async move {
                    let result = self.process_url(&url, template).await;
                    if let Err(e) = &result {
                        tracing::warn!(url = %url, error = %e, "URL failed");
                    }
                    (url, result)
                })
                .buffered(concurrency)
                .collect()
                .await;

        let succeeded = results.iter().filter(|(_, r)| r.is_ok()).count();
        tracing::info!(total = results.len(), succeeded, "Batch complete");
        results
    }
}
