use nalgebra::{Matrix2, Point3, Vector2, Vector3};

/// Direction vectors of the two segments of a four-point chain: `p1 - p0` and `p3 - p2`.
pub fn segment_vectors(positions: &[Point3<f64>; 4]) -> (Vector3<f64>, Vector3<f64>) {
    (positions[1] - positions[0], positions[3] - positions[2])
}

/// Cosine of the angle between two vectors.
///
/// Returns `None` if either vector has zero length.
pub fn cosine_between(a: &Vector3<f64>, b: &Vector3<f64>) -> Option<f64> {
    let norms = a.norm() * b.norm();
    if norms == 0.0 {
        return None;
    }
    Some(a.dot(b) / norms)
}

/// Solves `s * v01 - t * v23 = offset` on the x and y components.
///
/// The columns of the 2x2 system are the x/y parts of `v01` and `-v23`; the z components
/// are ignored. Returns `None` when that matrix is singular. Nearly singular systems
/// still produce a (numerically unreliable) solution.
pub fn solve_segment_parameters(
    v01: &Vector3<f64>,
    v23: &Vector3<f64>,
    offset: &Vector3<f64>,
) -> Option<(f64, f64)> {
    let matrix = Matrix2::new(v01.x, -v23.x, v01.y, -v23.y);
    let rhs = Vector2::new(offset.x, offset.y);
    let solution = matrix.lu().solve(&rhs)?;
    Some((solution.x, solution.y))
}
