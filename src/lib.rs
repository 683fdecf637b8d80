pub mod config;
pub mod content_formatter;
pub mod page_extractor;
pub mod pipeline;
pub mod utils;

pub use config::{AgentConfig, ExtractConfig, ExtractConfigBuilder};
pub use content_formatter::{
    OutputFormat, RenderError, RenderMetadata, UnknownFormat, assemble_metadata,
    format_with_template, render, render_named, try_render,
};
pub use page_extractor::schema::*;
pub use page_extractor::{
    ContentProcessor, ExtractError, SentenceTerminators, extract, generate_summary, readable_text,
    remove_unwanted_elements,
};
pub use pipeline::{
    ContentAgent, FetchedPage, Generation, PageSource, PipelineError, ProcessedPage,
    PromptFormatter, PromptPair, TextGenerator,
};
