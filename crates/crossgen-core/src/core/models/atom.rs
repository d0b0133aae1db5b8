use nalgebra::Point3;

/// A single point entity of a cluster.
///
/// An atom carries nothing but a label and a position. Positions are owned by the
/// cluster and rewritten wholesale by the placement strategies.
#[derive(Debug, Clone, PartialEq)]
pub struct Atom {
    /// Display label of the atom (e.g., "0", "C1").
    pub label: String,
    /// The 3D coordinates of the atom.
    pub position: Point3<f64>,
}

impl Atom {
    /// Creates a new `Atom` at the given position.
    ///
    /// # Arguments
    ///
    /// * `label` - The label of the atom.
    /// * `position` - The 3D coordinates of the atom.
    pub fn new(label: &str, position: Point3<f64>) -> Self {
        Self {
            label: label.to_string(),
            position,
        }
    }

    /// Creates a new `Atom` positioned at the origin.
    pub fn at_origin(label: &str) -> Self {
        Self::new(label, Point3::origin())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_atom_keeps_label_and_position() {
        let atom = Atom::new("C1", Point3::new(1.0, 2.0, 3.0));

        assert_eq!(atom.label, "C1");
        assert_eq!(atom.position, Point3::new(1.0, 2.0, 3.0));
    }

    #[test]
    fn at_origin_places_atom_at_zero() {
        let atom = Atom::at_origin("0");
        assert_eq!(atom.position, Point3::origin());
    }

    #[test]
    fn atom_equality_and_clone_works() {
        let mut atom1 = Atom::at_origin("N");
        atom1.position = Point3::new(0.5, -0.5, 1.5); // Also test a mutated position
        let atom2 = atom1.clone();
        assert_eq!(atom1, atom2);
    }
}
