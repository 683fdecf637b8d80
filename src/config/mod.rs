//! Configuration module for extraction and agent runs
//!
//! This module provides the `ExtractConfig` struct and its validating builder,
//! plus `AgentConfig` for the collaborator-driven pipeline.

// Sub-modules
pub mod builder;
pub mod getters;
pub mod types;

// Re-exports for public API
pub use builder::ExtractConfigBuilder;
pub use types::{AgentConfig, ExtractConfig};
