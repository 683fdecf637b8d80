//! Agent glue around extraction and rendering.
//!
//! A [`ContentAgent`] fetches a page through a [`PageSource`], turns it into
//! readable text, asks a [`PromptFormatter`] and [`TextGenerator`] for a
//! rewritten version, and renders the result with merged metadata.

pub mod agent;
pub mod errors;
pub mod traits;

pub use agent::{ContentAgent, ProcessedPage};
pub use errors::{PipelineError, PipelineResult};
pub use traits::{FetchedPage, Generation, PageSource, PromptFormatter, PromptPair, TextGenerator};
