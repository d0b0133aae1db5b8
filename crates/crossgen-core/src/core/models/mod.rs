//! # Core Models Module
//!
//! Data structures describing the atoms of a cluster and the cluster itself.
//!
//! ## Key Components
//!
//! - [`atom`] - A labelled point in 3D space
//! - [`cluster`] - Distance bounds, the cluster base trait, and the four-atom cluster
//!
//! ## Usage
//!
//! ```ignore
//! use crossgen::core::models::{atom::Atom, cluster::{ClusterBounds, FourAtomCluster}};
//! use nalgebra::Point3;
//!
//! let atoms = vec![
//!     Atom::new("0", Point3::new(0.0, 0.0, 0.0)),
//!     Atom::new("1", Point3::new(2.0, 0.0, 0.0)),
//!     Atom::new("2", Point3::new(1.0, -1.0, 0.0)),
//!     Atom::new("3", Point3::new(1.0, 1.0, 0.0)),
//! ];
//! let cluster = FourAtomCluster::new(atoms, ClusterBounds::new(0.5, 2.0))?;
//! ```

pub mod atom;
pub mod cluster;
