use super::config::PlacementMode;
use crate::core::models::cluster::{AtomCluster, ClusterBounds, FourAtomCluster};
use nalgebra::{Point3, Vector3};
use rand::Rng;
use std::f64::consts::PI;
use tracing::trace;

/// Positions of a collinear chain along the z-axis.
///
/// Atom 0 sits at the origin; each following atom is offset along +z by an
/// independent draw from `[min, max)`. `min <= max` is a precondition.
pub fn line_positions<R: Rng + ?Sized>(bounds: &ClusterBounds, rng: &mut R) -> [Point3<f64>; 4] {
    let mut positions = [Point3::origin(); 4];
    for i in 1..positions.len() {
        let step = bounds.scale(rng.r#gen::<f64>());
        positions[i] = positions[i - 1] + Vector3::new(0.0, 0.0, step);
    }
    positions
}

/// Positions of a zig-zag chain in the z = 0 plane.
///
/// Three bond lengths are drawn from `[min, max)` and then two bend angles from
/// `[0, π)`. The first bond always points along +x; the second turns by the first
/// angle and the third by the sum of both.
pub fn plane_positions<R: Rng + ?Sized>(bounds: &ClusterBounds, rng: &mut R) -> [Point3<f64>; 4] {
    let lengths: [f64; 3] = std::array::from_fn(|_| bounds.scale(rng.r#gen::<f64>()));
    let angles: [f64; 2] = std::array::from_fn(|_| rng.r#gen::<f64>() * PI);

    let p0 = Point3::origin();
    let p1 = p0 + Vector3::new(lengths[0], 0.0, 0.0);
    let p2 = p1 + lengths[1] * Vector3::new(angles[0].cos(), angles[0].sin(), 0.0);
    let turn = angles[0] + angles[1];
    let p3 = p2 + lengths[2] * Vector3::new(turn.cos(), turn.sin(), 0.0);

    trace!(?lengths, ?angles, "Drew planar zig-zag parameters.");
    [p0, p1, p2, p3]
}

impl FourAtomCluster {
    /// Lays the atoms out on a straight line along the z-axis.
    pub fn place_in_line<R: Rng + ?Sized>(&mut self, rng: &mut R) -> &mut Self {
        let positions = line_positions(&self.bounds(), rng);
        self.set_positions(positions);
        self
    }

    /// Lays the atoms out as a zig-zag chain in the z = 0 plane.
    pub fn place_in_plane<R: Rng + ?Sized>(&mut self, rng: &mut R) -> &mut Self {
        let positions = plane_positions(&self.bounds(), rng);
        self.set_positions(positions);
        self
    }

    pub fn place<R: Rng + ?Sized>(&mut self, mode: PlacementMode, rng: &mut R) -> &mut Self {
        match mode {
            PlacementMode::Line => self.place_in_line(rng),
            PlacementMode::Plane => self.place_in_plane(rng),
        }
    }
}
