use crate::core::models::cluster::{AtomCluster, FourAtomCluster};
use crate::core::utils::geometry::{cosine_between, segment_vectors, solve_segment_parameters};
use nalgebra::Vector3;
use std::fmt;
use thiserror::Error;
use tracing::trace;

/// Segments are treated as parallel once `|cos θ|` reaches this value (about 2.56°).
pub const PARALLEL_COSINE_THRESHOLD: f64 = 0.999;

/// One of the two segments of a four-atom cluster.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Segment {
    /// Atoms 0 and 1.
    A,
    /// Atoms 2 and 3.
    B,
}

impl fmt::Display for Segment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Segment::A => write!(f, "0-1"),
            Segment::B => write!(f, "2-3"),
        }
    }
}

#[derive(Debug, Error, PartialEq, Clone)]
pub enum AnalysisError {
    #[error("Degenerate segment {segment}: both endpoints coincide")]
    DegenerateSegment { segment: Segment },
    #[error(
        "Segment parameters are undefined: the x/y system is singular although the segments are not parallel (cos = {cosine})"
    )]
    SingularSystem { cosine: f64 },
}

/// Geometric relationship between segment A and segment B.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Intersection {
    /// Both parameters lie strictly inside `(0, 1)`.
    Crossed { s: f64, t: f64 },
    /// The lines meet, but outside the interior of at least one segment.
    NotCrossed { s: f64, t: f64 },
    /// The segments are (anti-)parallel; no parameters are reported.
    Parallel,
}

impl Intersection {
    pub fn from_parameters(s: f64, t: f64) -> Self {
        if is_interior(s) && is_interior(t) {
            Intersection::Crossed { s, t }
        } else {
            Intersection::NotCrossed { s, t }
        }
    }

    pub fn is_crossed(&self) -> bool {
        matches!(self, Intersection::Crossed { .. })
    }

    pub fn parameters(&self) -> Option<(f64, f64)> {
        match *self {
            Intersection::Crossed { s, t } | Intersection::NotCrossed { s, t } => Some((s, t)),
            Intersection::Parallel => None,
        }
    }
}

#[inline]
fn is_interior(value: f64) -> bool {
    0.0 < value && value < 1.0
}

/// Classification of a four-atom configuration.
///
/// The three distance guards take precedence over the crossing test.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Condition {
    /// Atoms 0 and 3 are closer than `min`.
    TooClose03,
    /// Atoms 0 and 2 are closer than `min`.
    TooClose02,
    /// Atoms 1 and 3 are closer than `min`.
    TooClose13,
    Crossed,
    NotCrossed,
}

impl Condition {
    pub const ALL: [Condition; 5] = [
        Condition::TooClose03,
        Condition::TooClose02,
        Condition::TooClose13,
        Condition::Crossed,
        Condition::NotCrossed,
    ];

    /// `true` for configurations that passed every distance guard.
    pub fn is_valid(&self) -> bool {
        matches!(self, Condition::Crossed | Condition::NotCrossed)
    }
}

impl fmt::Display for Condition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            Condition::TooClose03 => "False0-3",
            Condition::TooClose02 => "False0-2",
            Condition::TooClose13 => "False1-3",
            Condition::Crossed => "crossed",
            Condition::NotCrossed => "not crossed",
        };
        f.write_str(text)
    }
}

#[inline]
pub fn is_parallel(cosine: f64) -> bool {
    cosine.abs() >= PARALLEL_COSINE_THRESHOLD
}

/// Cosine of the angle between the two segment directions.
///
/// # Errors
///
/// Returns [`AnalysisError::DegenerateSegment`] naming the first zero-length segment.
pub fn segment_cosine(v01: &Vector3<f64>, v23: &Vector3<f64>) -> Result<f64, AnalysisError> {
    cosine_between(v01, v23).ok_or_else(|| AnalysisError::DegenerateSegment {
        segment: if v01.norm() == 0.0 {
            Segment::A
        } else {
            Segment::B
        },
    })
}

/// Determines how segment A (atoms 0-1) and segment B (atoms 2-3) relate.
///
/// The segment parameters are solved before the parallelism test; a parallel result
/// replaces whatever the solve produced. Parameters from nearly parallel segments just
/// under the threshold are numerically unreliable and are reported as computed.
///
/// # Errors
///
/// - [`AnalysisError::DegenerateSegment`] if a segment has zero length.
/// - [`AnalysisError::SingularSystem`] if the solve fails for non-parallel segments,
///   which happens when both directions project onto the same x/y line.
pub fn analyze_segments(cluster: &FourAtomCluster) -> Result<Intersection, AnalysisError> {
    let positions = cluster.positions();
    let (v01, v23) = segment_vectors(&positions);
    let offset = positions[2] - positions[0];

    let parameters = solve_segment_parameters(&v01, &v23, &offset);
    let cosine = segment_cosine(&v01, &v23)?;

    if is_parallel(cosine) {
        trace!(cosine, "Segments are parallel; discarding solved parameters.");
        return Ok(Intersection::Parallel);
    }

    let (s, t) = parameters.ok_or(AnalysisError::SingularSystem { cosine })?;
    trace!(s, t, cosine, "Solved segment parameters.");
    Ok(Intersection::from_parameters(s, t))
}

/// Classifies a configuration; the first matching rule wins.
///
/// 1. atoms 0-3 closer than `min`
/// 2. atoms 0-2 closer than `min`
/// 3. atoms 1-3 closer than `min`
/// 4. crossed
/// 5. not crossed (including parallel segments)
pub fn classify(cluster: &FourAtomCluster, intersection: &Intersection) -> Condition {
    let min = cluster.bounds().min;
    if cluster.distance(0, 3) < min {
        Condition::TooClose03
    } else if cluster.distance(0, 2) < min {
        Condition::TooClose02
    } else if cluster.distance(1, 3) < min {
        Condition::TooClose13
    } else if intersection.is_crossed() {
        Condition::Crossed
    } else {
        Condition::NotCrossed
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::models::atom::Atom;
    use crate::core::models::cluster::ClusterBounds;
    use nalgebra::Point3;

    fn cluster(points: [[f64; 3]; 4], min: f64) -> FourAtomCluster {
        let atoms = points
            .iter()
            .enumerate()
            .map(|(i, p)| Atom::new(&i.to_string(), Point3::new(p[0], p[1], p[2])))
            .collect();
        FourAtomCluster::new(atoms, ClusterBounds::new(min, min + 1.0)).unwrap()
    }

    #[test]
    fn parallel_threshold_is_inclusive_and_symmetric() {
        assert!(is_parallel(1.0));
        assert!(is_parallel(-1.0));
        assert!(is_parallel(0.999));
        assert!(is_parallel(-0.999));
        assert!(!is_parallel(0.998_9));
        assert!(!is_parallel(0.0));
    }

    #[test]
    fn perpendicular_segments_crossing_at_midpoints() {
        let c = cluster([[0., 0., 0.], [2., 0., 0.], [1., -1., 0.], [1., 1., 0.]], 0.5);

        let intersection = analyze_segments(&c).unwrap();

        let (s, t) = intersection.parameters().unwrap();
        assert!((s - 0.5).abs() < 1e-12);
        assert!((t - 0.5).abs() < 1e-12);
        assert!(intersection.is_crossed());
        assert_eq!(classify(&c, &intersection), Condition::Crossed);
    }

    #[test]
    fn offset_parallel_segments_are_not_crossed() {
        let c = cluster([[0., 0., 0.], [1., 0., 0.], [0., 1., 0.], [1., 1., 0.]], 0.5);

        let intersection = analyze_segments(&c).unwrap();

        assert_eq!(intersection, Intersection::Parallel);
        assert_eq!(classify(&c, &intersection), Condition::NotCrossed);
    }

    #[test]
    fn collinear_overlapping_segments_are_reported_as_parallel() {
        let c = cluster([[0., 0., 0.], [1., 0., 0.], [0.5, 0., 0.], [2.5, 0., 0.]], 0.1);
        assert_eq!(analyze_segments(&c).unwrap(), Intersection::Parallel);
    }

    #[test]
    fn anti_parallel_segments_are_parallel() {
        let c = cluster([[0., 0., 0.], [2., 0., 0.], [2., 1., 0.], [0., 1.001, 0.]], 0.5);
        assert_eq!(analyze_segments(&c).unwrap(), Intersection::Parallel);
    }

    #[test]
    fn lines_meeting_beyond_segment_ends_are_not_crossed() {
        let c = cluster([[0., 0., 0.], [1., 0., 0.], [3., -1., 0.], [3., 1., 0.]], 0.5);

        let intersection = analyze_segments(&c).unwrap();

        assert!(matches!(intersection, Intersection::NotCrossed { .. }));
        let (s, _) = intersection.parameters().unwrap();
        assert!((s - 3.0).abs() < 1e-12);
        assert_eq!(classify(&c, &intersection), Condition::NotCrossed);
    }

    #[test]
    fn touching_at_an_endpoint_is_not_crossed() {
        let c = cluster([[0., 0., 0.], [2., 0., 0.], [2., -1., 0.], [2., 1., 0.]], 0.5);

        let intersection = analyze_segments(&c).unwrap();

        assert!(matches!(intersection, Intersection::NotCrossed { s, .. } if (s - 1.0).abs() < 1e-12));
    }

    #[test]
    fn zero_length_segment_is_a_degenerate_error() {
        let a = cluster([[0., 0., 0.], [0., 0., 0.], [1., -1., 0.], [1., 1., 0.]], 0.0);
        assert_eq!(
            analyze_segments(&a),
            Err(AnalysisError::DegenerateSegment {
                segment: Segment::A
            })
        );

        let b = cluster([[0., 0., 0.], [2., 0., 0.], [1., 1., 0.], [1., 1., 0.]], 0.0);
        assert_eq!(
            analyze_segments(&b),
            Err(AnalysisError::DegenerateSegment {
                segment: Segment::B
            })
        );
    }

    #[test]
    fn non_parallel_segments_with_parallel_xy_projection_are_singular() {
        let c = cluster([[0., 0., 0.], [1., 0., 0.], [0., 1., 0.], [0., 1., 1.]], 0.5);

        let result = analyze_segments(&c);

        assert!(matches!(result, Err(AnalysisError::SingularSystem { cosine }) if cosine.abs() < 1e-12));
    }

    #[test]
    fn collinear_chain_along_z_is_parallel() {
        let c = cluster([[0., 0., 0.], [0., 0., 1.], [0., 0., 2.], [0., 0., 3.]], 1.0);

        let intersection = analyze_segments(&c).unwrap();

        assert_eq!(intersection, Intersection::Parallel);
        assert_eq!(classify(&c, &intersection), Condition::NotCrossed);
    }

    #[test]
    fn distance_guard_for_atoms_0_and_3_wins_over_crossing() {
        let c = cluster([[0., 0., 0.], [2., 0., 0.], [1., -1., 0.], [0.2, 0.2, 0.]], 0.5);
        let crossed = Intersection::Crossed { s: 0.5, t: 0.5 };
        assert_eq!(classify(&c, &crossed), Condition::TooClose03);
    }

    #[test]
    fn distance_guards_are_checked_in_order() {
        // 0-2 too close, 0-3 fine.
        let c = cluster([[0., 0., 0.], [2., 0., 0.], [0.1, 0., 0.], [0., 3., 0.]], 0.5);
        assert_eq!(classify(&c, &Intersection::Parallel), Condition::TooClose02);

        // Both 0-2 and 0-3 too close: 0-3 is reported first.
        let c = cluster([[0., 0., 0.], [2., 0., 0.], [0.1, 0., 0.], [0., 0.2, 0.]], 0.5);
        assert_eq!(classify(&c, &Intersection::Parallel), Condition::TooClose03);

        // Only 1-3 too close.
        let c = cluster([[0., 0., 0.], [2., 0., 0.], [0., 3., 0.], [2., 0.1, 0.]], 0.5);
        assert_eq!(
            classify(&c, &Intersection::Crossed { s: 0.5, t: 0.5 }),
            Condition::TooClose13
        );
    }

    #[test]
    fn distance_exactly_min_passes_the_guard() {
        let c = cluster([[0., 0., 0.], [2., 0., 0.], [1., -1., 0.], [0., 1., 0.]], 1.0);
        assert_eq!(classify(&c, &Intersection::Parallel), Condition::NotCrossed);
    }

    #[test]
    fn condition_display_matches_report_strings() {
        let rendered: Vec<String> = Condition::ALL.iter().map(|c| c.to_string()).collect();
        assert_eq!(
            rendered,
            vec!["False0-3", "False0-2", "False1-3", "crossed", "not crossed"]
        );
    }

    #[test]
    fn only_crossed_and_not_crossed_are_valid() {
        assert!(Condition::Crossed.is_valid());
        assert!(Condition::NotCrossed.is_valid());
        assert!(!Condition::TooClose03.is_valid());
        assert!(!Condition::TooClose02.is_valid());
        assert!(!Condition::TooClose13.is_valid());
    }

    #[test]
    fn from_parameters_uses_open_interval() {
        assert!(Intersection::from_parameters(0.5, 0.5).is_crossed());
        assert!(!Intersection::from_parameters(0.0, 0.5).is_crossed());
        assert!(!Intersection::from_parameters(0.5, 1.0).is_crossed());
        assert!(!Intersection::from_parameters(-0.1, 0.5).is_crossed());
    }
}
