//! # crossgen Core Library
//!
//! Randomized generation of four-atom cluster configurations and analysis of whether
//! the two segments they form geometrically cross.
//!
//! ## Architectural Philosophy
//!
//! The library follows a three-layer layout so that the numerical logic stays pure and
//! independently testable.
//!
//! - **[`core`]: The Foundation.** Stateless data models (`Atom`, `FourAtomCluster`) and
//!   the vector math used by the analysis (`geometry`).
//!
//! - **[`engine`]: The Logic Core.** Placement strategies that rewrite atom positions from
//!   random draws, the intersection/parallelism/condition classifiers, configuration,
//!   progress plumbing, and the rendering seam.
//!
//! - **[`workflows`]: The Public API.** Entry points that sequence the engine: checking a
//!   single configuration and generating batches of them.

pub mod core;
pub mod engine;
pub mod workflows;
