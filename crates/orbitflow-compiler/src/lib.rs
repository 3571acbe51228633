//! # Orbitflow Compiler
//!
//! Deterministic compiler from a creator's channel configuration to an
//! automation blueprint ready to import into an external workflow
//! platform.
//!
//! The compilation pipeline has four pure stages:
//!
//! 1. **Scoring** - automation-fit score and cadence classification
//! 2. **Node graph** - step selection, dependency wiring, cycle check
//! 3. **Timeline** - calendar-relative rollout milestones
//! 4. **Content pack** - headline, prompt templates, hooks, advisories
//!
//! ## Quick Start
//!
//! ```rust
//! use orbitflow_compiler::compile;
//! use orbitflow_core::{ChannelConfig, Goal};
//!
//! let config = ChannelConfig::builder()
//!     .channel_name("Orbit Labs")
//!     .channel_topic("AI tools for creators")
//!     .goal(Goal::AudienceGrowth)
//!     .goal(Goal::ContentVelocity)
//!     .include_shorts(true)
//!     .build()?;
//!
//! let blueprint = compile(&config)?;
//! assert!(!blueprint.steps.is_empty());
//! # Ok::<(), orbitflow_core::BlueprintError>(())
//! ```

pub mod catalog;
pub mod compiler;
pub mod content;
pub mod graph;
pub mod scoring;
pub mod timeline;

// Re-export the main compilation API
pub use compiler::compile;

// Re-export core types for convenience
pub use orbitflow_core::{
    AutomationLevel, Blueprint, BlueprintError, CadenceLabel, ChannelConfig, Goal, Metric,
    Milestone, PipelineStep, PromptTemplate, Result, Tone,
};
