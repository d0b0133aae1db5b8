//! # Core Module
//!
//! Fundamental building blocks shared by the engine and workflows.
//!
//! - **Cluster Representation** ([`models`]) - Atoms, distance bounds, and the four-atom cluster
//! - **Vector Math** ([`utils`]) - Segment vectors, angle cosines, and the 2x2 intersection solve

pub mod models;
pub mod utils;
