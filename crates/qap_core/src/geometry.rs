//! Point type and distance calculations
//!
//! Agent and slot positions are plain 2D points in whatever length unit the
//! caller uses (meters, grid cells, ...). The solver only compares costs, so
//! the unit never matters as long as both position sets use the same one.

use serde::{Deserialize, Serialize};

/// Position in plane coordinates
/// - .0 = x
/// - .1 = y
pub type Point = (f64, f64);

/// Euclidean distance between two points
#[inline]
pub fn distance(a: Point, b: Point) -> f64 {
    distance_squared(a, b).sqrt()
}

/// Squared Euclidean distance between two points
///
/// Use for comparisons to avoid sqrt overhead.
#[inline]
pub fn distance_squared(a: Point, b: Point) -> f64 {
    let dx = b.0 - a.0;
    let dy = b.1 - a.1;
    dx * dx + dy * dy
}

/// Manhattan (L1) distance between two points
#[inline]
pub fn manhattan_distance(a: Point, b: Point) -> f64 {
    (b.0 - a.0).abs() + (b.1 - a.1).abs()
}

/// Distance metric used when turning two position sets into a cost matrix.
///
/// Euclidean is the default. SquaredEuclidean penalizes long moves harder and
/// skips the sqrt; Manhattan fits grid-constrained agents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DistanceMetric {
    Euclidean,
    SquaredEuclidean,
    Manhattan,
}

impl DistanceMetric {
    /// Evaluate this metric for a pair of points.
    #[inline]
    pub fn apply(&self, a: Point, b: Point) -> f64 {
        match self {
            DistanceMetric::Euclidean => distance(a, b),
            DistanceMetric::SquaredEuclidean => distance_squared(a, b),
            DistanceMetric::Manhattan => manhattan_distance(a, b),
        }
    }
}

impl Default for DistanceMetric {
    fn default() -> Self {
        DistanceMetric::Euclidean
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_distance_345_triangle() {
        let d = distance((0.0, 0.0), (3.0, 4.0));
        assert!((d - 5.0).abs() < 1e-9, "3-4-5 triangle should give 5, got {}", d);
    }

    #[test]
    fn test_distance_squared_consistency() {
        let a = (1.5, -2.0);
        let b = (-0.5, 3.0);
        let d = distance(a, b);
        assert!((d * d - distance_squared(a, b)).abs() < 1e-9);
    }

    #[test]
    fn test_manhattan_distance() {
        let d = manhattan_distance((0.0, 0.0), (3.0, -4.0));
        assert!((d - 7.0).abs() < 1e-9, "Manhattan distance should be 7, got {}", d);
    }

    #[test]
    fn test_metric_apply_matches_free_functions() {
        let a = (2.0, 2.0);
        let b = (5.0, 6.0);
        assert_eq!(DistanceMetric::Euclidean.apply(a, b), distance(a, b));
        assert_eq!(DistanceMetric::SquaredEuclidean.apply(a, b), distance_squared(a, b));
        assert_eq!(DistanceMetric::Manhattan.apply(a, b), manhattan_distance(a, b));
    }

    #[test]
    fn test_default_metric_is_euclidean() {
        assert_eq!(DistanceMetric::default(), DistanceMetric::Euclidean);
    }

    #[cfg(all(test, feature = "proptest"))]
    mod proptests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            /// Property: all metrics are symmetric and non-negative
            #[test]
            fn prop_metric_symmetric_nonnegative(
                ax in -100.0f64..100.0, ay in -100.0f64..100.0,
                bx in -100.0f64..100.0, by in -100.0f64..100.0
            ) {
                for metric in [
                    DistanceMetric::Euclidean,
                    DistanceMetric::SquaredEuclidean,
                    DistanceMetric::Manhattan,
                ] {
                    let d1 = metric.apply((ax, ay), (bx, by));
                    let d2 = metric.apply((bx, by), (ax, ay));
                    prop_assert!(d1 >= 0.0);
                    prop_assert!((d1 - d2).abs() < 1e-9);
                }
            }

            /// Property: distance to self is zero
            #[test]
            fn prop_distance_to_self_is_zero(
                x in -100.0f64..100.0, y in -100.0f64..100.0
            ) {
                prop_assert!(distance((x, y), (x, y)).abs() < 1e-12);
                prop_assert!(manhattan_distance((x, y), (x, y)).abs() < 1e-12);
            }
        }
    }
}
