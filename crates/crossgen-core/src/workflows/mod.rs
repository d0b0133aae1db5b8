//! # Workflows Module
//!
//! High-level entry points that sequence the engine.
//!
//! - **Check Workflow** ([`check`]) - Analyze, classify, and optionally plot a single configuration
//! - **Generation Workflow** ([`generate`]) - Place and classify a batch of random configurations,
//!   tallying the outcomes

pub mod check;
pub mod generate;
