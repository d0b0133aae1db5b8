//! # Engine Module
//!
//! The computational layer of crossgen: everything that rewrites atom positions or
//! derives a classification from them.
//!
//! ## Architecture
//!
//! - **Placement** ([`placement`]) - Collinear and planar zig-zag layouts drawn from an injected random source
//! - **Analysis** ([`analysis`]) - Segment intersection solving, parallelism detection, and condition classification
//! - **Configuration** ([`config`]) - Generation parameters and their validating builder
//! - **Rendering Seam** ([`render`]) - The presentation trait the workflows hand snapshots to
//! - **Progress Monitoring** ([`progress`]) - Progress events for long-running batches
//! - **Error Handling** ([`error`]) - Engine-level error type wrapping the module errors
//!
//! Every operation is synchronous and deterministic given its random draws.

pub mod analysis;
pub mod config;
pub mod error;
pub mod placement;
pub mod progress;
pub mod render;
