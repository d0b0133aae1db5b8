use super::atom::Atom;
use nalgebra::Point3;
use thiserror::Error;

/// The number of atoms in a [`FourAtomCluster`].
pub const CLUSTER_SIZE: usize = 4;

#[derive(Debug, Error, PartialEq, Eq, Clone)]
pub enum ClusterError {
    #[error("FourAtomCluster must have 4 atoms, found {found}")]
    AtomCount { found: usize },
}

/// The `[min, max]` range of inter-atom distances used while generating a cluster.
///
/// Placement strategies draw every bond length from this range, and the condition
/// classifier uses `min` as the smallest acceptable distance between non-bonded atoms.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ClusterBounds {
    pub min: f64,
    pub max: f64,
}

impl ClusterBounds {
    pub fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    /// Width of the range, `max - min`.
    #[inline]
    pub fn span(&self) -> f64 {
        self.max - self.min
    }

    /// Maps a unit draw `r` in `[0, 1)` onto `[min, max)`.
    #[inline]
    pub fn scale(&self, r: f64) -> f64 {
        r * self.span() + self.min
    }

    /// Returns `true` when both bounds are finite, non-negative, and `min <= max`.
    ///
    /// Clusters never call this themselves; well-formed bounds are a precondition of
    /// the placement strategies and are checked by the configuration layer.
    pub fn is_valid(&self) -> bool {
        self.min.is_finite() && self.max.is_finite() && self.min >= 0.0 && self.min <= self.max
    }
}

/// Shared view over any ordered collection of atoms with generation bounds.
pub trait AtomCluster {
    /// The atoms in their semantic order.
    fn atoms(&self) -> &[Atom];

    /// The distance bounds of the cluster.
    fn bounds(&self) -> ClusterBounds;

    /// The current coordinate list, in atom order.
    fn coordinates(&self) -> Vec<Point3<f64>> {
        self.atoms().iter().map(|atom| atom.position).collect()
    }

    /// The atom labels, in atom order.
    fn labels(&self) -> Vec<String> {
        self.atoms().iter().map(|atom| atom.label.clone()).collect()
    }
}

/// A cluster of exactly four atoms whose order is significant.
///
/// Atoms 0 and 1 form segment A, atoms 2 and 3 form segment B. The fixed-size array
/// makes the atom count part of the type; the only runtime count check happens when
/// converting from a `Vec`.
#[derive(Debug, Clone, PartialEq)]
pub struct FourAtomCluster {
    atoms: [Atom; CLUSTER_SIZE],
    bounds: ClusterBounds,
}

impl FourAtomCluster {
    /// Creates a cluster from a variable-length list of atoms.
    ///
    /// # Errors
    ///
    /// Returns [`ClusterError::AtomCount`] if `atoms` does not hold exactly four atoms.
    /// The list is never truncated or padded.
    pub fn new(atoms: Vec<Atom>, bounds: ClusterBounds) -> Result<Self, ClusterError> {
        let found = atoms.len();
        let atoms: [Atom; CLUSTER_SIZE] = atoms
            .try_into()
            .map_err(|_| ClusterError::AtomCount { found })?;
        Ok(Self::from_atoms(atoms, bounds))
    }

    pub fn from_atoms(atoms: [Atom; CLUSTER_SIZE], bounds: ClusterBounds) -> Self {
        Self { atoms, bounds }
    }

    /// Creates a cluster of four atoms at the origin labelled `"0"` to `"3"`.
    pub fn with_labels(bounds: ClusterBounds) -> Self {
        Self::from_atoms(
            std::array::from_fn(|i| Atom::at_origin(&i.to_string())),
            bounds,
        )
    }

    pub fn atom(&self, index: usize) -> &Atom {
        &self.atoms[index]
    }

    pub fn position(&self, index: usize) -> Point3<f64> {
        self.atoms[index].position
    }

    pub fn positions(&self) -> [Point3<f64>; CLUSTER_SIZE] {
        std::array::from_fn(|i| self.atoms[i].position)
    }

    /// Overwrites every atom position at once, keeping labels.
    pub fn set_positions(&mut self, positions: [Point3<f64>; CLUSTER_SIZE]) {
        for (atom, position) in self.atoms.iter_mut().zip(positions) {
            atom.position = position;
        }
    }

    /// Euclidean distance between two atoms of the cluster.
    pub fn distance(&self, a: usize, b: usize) -> f64 {
        nalgebra::distance(&self.atoms[a].position, &self.atoms[b].position)
    }
}

impl AtomCluster for FourAtomCluster {
    fn atoms(&self) -> &[Atom] {
        &self.atoms
    }

    fn bounds(&self) -> ClusterBounds {
        self.bounds
    }
}

impl TryFrom<(Vec<Atom>, ClusterBounds)> for FourAtomCluster {
    type Error = ClusterError;

    fn try_from((atoms, bounds): (Vec<Atom>, ClusterBounds)) -> Result<Self, Self::Error> {
        Self::new(atoms, bounds)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn atoms(count: usize) -> Vec<Atom> {
        (0..count)
            .map(|i| Atom::new(&i.to_string(), Point3::new(i as f64, 0.0, 0.0)))
            .collect()
    }

    #[test]
    fn new_accepts_exactly_four_atoms() {
        let cluster = FourAtomCluster::new(atoms(4), ClusterBounds::new(1.0, 2.0)).unwrap();

        assert_eq!(cluster.atoms().len(), 4);
        assert_eq!(cluster.atom(3).label, "3");
        assert_eq!(cluster.position(2), Point3::new(2.0, 0.0, 0.0));
    }

    #[test]
    fn new_rejects_three_atoms() {
        let result = FourAtomCluster::new(atoms(3), ClusterBounds::new(1.0, 2.0));
        assert_eq!(result, Err(ClusterError::AtomCount { found: 3 }));
    }

    #[test]
    fn new_rejects_five_atoms_without_truncating() {
        let result = FourAtomCluster::new(atoms(5), ClusterBounds::new(1.0, 2.0));
        assert_eq!(result, Err(ClusterError::AtomCount { found: 5 }));
    }

    #[test]
    fn try_from_delegates_to_new() {
        let bounds = ClusterBounds::new(0.0, 1.0);
        assert!(FourAtomCluster::try_from((atoms(4), bounds)).is_ok());
        assert!(matches!(
            FourAtomCluster::try_from((atoms(0), bounds)),
            Err(ClusterError::AtomCount { found: 0 })
        ));
    }

    #[test]
    fn with_labels_creates_origin_atoms_in_order() {
        let cluster = FourAtomCluster::with_labels(ClusterBounds::new(1.0, 2.0));

        assert_eq!(cluster.labels(), vec!["0", "1", "2", "3"]);
        assert!(cluster.coordinates().iter().all(|p| *p == Point3::origin()));
    }

    #[test]
    fn set_positions_overwrites_all_positions_and_keeps_labels() {
        let mut cluster = FourAtomCluster::new(atoms(4), ClusterBounds::new(1.0, 2.0)).unwrap();
        let new_positions = [
            Point3::new(0.0, 0.0, 1.0),
            Point3::new(0.0, 0.0, 2.0),
            Point3::new(0.0, 0.0, 3.0),
            Point3::new(0.0, 0.0, 4.0),
        ];

        cluster.set_positions(new_positions);

        assert_eq!(cluster.positions(), new_positions);
        assert_eq!(cluster.coordinates(), new_positions.to_vec());
        assert_eq!(cluster.atom(0).label, "0");
    }

    #[test]
    fn distance_is_euclidean() {
        let cluster = FourAtomCluster::new(atoms(4), ClusterBounds::new(1.0, 2.0)).unwrap();
        assert!((cluster.distance(0, 3) - 3.0).abs() < 1e-12);
        assert!((cluster.distance(3, 1) - 2.0).abs() < 1e-12);
    }

    #[test]
    fn bounds_scale_maps_unit_draws_into_range() {
        let bounds = ClusterBounds::new(1.5, 3.5);
        assert_eq!(bounds.scale(0.0), 1.5);
        assert_eq!(bounds.scale(0.5), 2.5);
        assert!(bounds.scale(0.999_999) < 3.5);
    }

    #[test]
    fn bounds_validity_rejects_inverted_or_negative_ranges() {
        assert!(ClusterBounds::new(0.0, 0.0).is_valid());
        assert!(ClusterBounds::new(1.0, 2.0).is_valid());
        assert!(!ClusterBounds::new(2.0, 1.0).is_valid());
        assert!(!ClusterBounds::new(-1.0, 1.0).is_valid());
        assert!(!ClusterBounds::new(1.0, f64::INFINITY).is_valid());
    }
}
