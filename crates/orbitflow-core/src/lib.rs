//! # Orbitflow Core
//!
//! Domain primitives for Orbitflow automation blueprints.
//!
//! This crate provides the fundamental building blocks:
//! - [`ChannelConfig`] - A creator's validated channel configuration
//! - [`Blueprint`] - The compiled automation plan
//! - [`BlueprintError`] - Error taxonomy for compilation

pub mod blueprint;
pub mod config;
pub mod error;
pub mod types;

// Re-exports for convenience
pub use blueprint::{Blueprint, Metric, Milestone, PipelineStep, PromptTemplate};
pub use config::{ChannelConfig, ChannelConfigBuilder};
pub use error::{BlueprintError, Result};
pub use types::{AutomationLevel, CadenceLabel, Goal, Tone};

/// Prelude module for common imports
pub mod prelude {
    pub use crate::blueprint::{Blueprint, Metric, Milestone, PipelineStep, PromptTemplate};
    pub use crate::config::{ChannelConfig, ChannelConfigBuilder};
    pub use crate::error::{BlueprintError, Result};
    pub use crate::types::{AutomationLevel, CadenceLabel, Goal, Tone};
}
