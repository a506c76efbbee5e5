//! Fixed-iteration Lloyd's algorithm for 2D points.
//!
//! # The Objective
//!
//! K-means partitions points by minimizing **within-cluster sum of squares**
//! (WCSS):
//!
//! ```text
//! WCSS = Σₖ Σᵢ∈Cₖ ||xᵢ - μₖ||²
//! ```
//!
//! # The Loop
//!
//! Each iteration runs two phases, in order:
//!
//! 1. **Assign**: every point takes the index of its nearest centroid
//!    (Euclidean distance; the lowest index wins among equidistant
//!    candidates).
//! 2. **Update**: every centroid moves to the mean of its assigned points.
//!
//! Unlike convergence-driven variants, the engine runs the pair exactly
//! `max_iterations` times and then stops. There is no early exit when
//! labels stabilize; callers that want tighter budgets pass a smaller
//! iteration count.
//!
//! # Empty Clusters
//!
//! A cluster can end an assignment phase with zero members (likely when k
//! approaches the point count, or with unlucky centroid placement). The
//! mean is undefined there; the engine leaves such a centroid at its
//! previous position and emits a `log::debug!` record. Coordinates stay
//! finite in all cases.
//!
//! # Parallelism
//!
//! Iterations are inherently sequential, but the per-point assignment work
//! is independent. With the `parallel` feature the assignment phase fans
//! out over rayon; the update phase never starts until the whole phase has
//! joined.

use crate::error::{Error, Result};
use crate::point::{Centroid, Point};
use log::debug;

#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// Fixed-iteration k-means engine.
///
/// Owns no points or centroids itself; [`run`](ClusterEngine::run) mutates
/// caller-supplied slices in place.
#[derive(Debug, Clone)]
pub struct ClusterEngine {
    /// Number of clusters.
    k: usize,
}

impl ClusterEngine {
    /// Create an engine for `k` clusters.
    pub fn new(k: usize) -> Self {
        Self { k }
    }

    /// Get the number of clusters.
    pub fn n_clusters(&self) -> usize {
        self.k
    }

    /// Run exactly `max_iterations` assign/update rounds over `points` and
    /// `centroids`, mutating both in place.
    ///
    /// Labels and centroid coordinates are only meaningful after the call
    /// returns; intermediate state is not observable.
    ///
    /// # Errors
    ///
    /// - [`Error::InvalidClusterCount`] if the engine was built with `k == 0`.
    /// - [`Error::CentroidCountMismatch`] if `centroids.len() != k`.
    ///
    /// An empty `points` slice is not an error; the call returns without
    /// mutating anything.
    pub fn run(
        &self,
        points: &mut [Point],
        centroids: &mut [Centroid],
        max_iterations: usize,
    ) -> Result<()> {
        if self.k == 0 {
            return Err(Error::InvalidClusterCount { requested: 0 });
        }
        if centroids.len() != self.k {
            return Err(Error::CentroidCountMismatch {
                expected: self.k,
                found: centroids.len(),
            });
        }
        if points.is_empty() {
            return Ok(());
        }

        for _ in 0..max_iterations {
            Self::assign_clusters(points, centroids);
            self.update_centroids(points, centroids);
        }

        Ok(())
    }

    /// Index of the centroid nearest to `(x, y)`, scanning in index order.
    ///
    /// Only a strictly smaller distance replaces the current best, so the
    /// lowest index wins among equidistant centroids. Squared distances
    /// preserve the ordering of their square roots.
    fn nearest_centroid(centroids: &[Centroid], x: f64, y: f64) -> usize {
        let mut best_cluster = 0;
        let mut best_dist = f64::MAX;

        for (i, c) in centroids.iter().enumerate() {
            let dist = (x - c.x).powi(2) + (y - c.y).powi(2);
            if dist < best_dist {
                best_dist = dist;
                best_cluster = i;
            }
        }

        best_cluster
    }

    /// Assignment phase: label every point with its nearest centroid.
    fn assign_clusters(points: &mut [Point], centroids: &[Centroid]) {
        #[cfg(feature = "parallel")]
        points.par_iter_mut().for_each(|p| {
            p.cluster = Self::nearest_centroid(centroids, p.x, p.y);
        });

        #[cfg(not(feature = "parallel"))]
        for p in points.iter_mut() {
            p.cluster = Self::nearest_centroid(centroids, p.x, p.y);
        }
    }

    /// Update phase: move every centroid to the mean of its members.
    ///
    /// A centroid whose cluster is empty holds its previous position.
    fn update_centroids(&self, points: &[Point], centroids: &mut [Centroid]) {
        let mut sum_x = vec![0.0f64; self.k];
        let mut sum_y = vec![0.0f64; self.k];
        let mut counts = vec![0usize; self.k];

        for p in points {
            sum_x[p.cluster] += p.x;
            sum_y[p.cluster] += p.y;
            counts[p.cluster] += 1;
        }

        for (i, c) in centroids.iter_mut().enumerate() {
            if counts[i] == 0 {
                debug!("cluster {i} received no points; centroid holds position");
                continue;
            }
            c.x = sum_x[i] / counts[i] as f64;
            c.y = sum_y[i] / counts[i] as f64;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Bounds;
    use crate::generate::Generator;
    use crate::metrics::wcss;
    use crate::point::UNASSIGNED;

    fn points_from(coords: &[(f64, f64)]) -> Vec<Point> {
        coords.iter().map(|&(x, y)| Point::new(x, y)).collect()
    }

    fn centroids_from(coords: &[(f64, f64)]) -> Vec<Centroid> {
        coords.iter().map(|&(x, y)| Centroid::new(x, y)).collect()
    }

    #[test]
    fn test_zero_iterations_is_noop() {
        let mut points = points_from(&[(0.0, 0.0), (3.0, 4.0)]);
        let mut centroids = centroids_from(&[(1.0, 1.0), (2.0, 2.0)]);
        let before = centroids.clone();

        ClusterEngine::new(2)
            .run(&mut points, &mut centroids, 0)
            .unwrap();

        for p in &points {
            assert_eq!(p.cluster, UNASSIGNED);
        }
        assert_eq!(centroids, before);
    }

    #[test]
    fn test_empty_points_is_noop() {
        let mut points: Vec<Point> = Vec::new();
        let mut centroids = centroids_from(&[(1.0, 1.0), (2.0, 2.0)]);
        let before = centroids.clone();

        ClusterEngine::new(2)
            .run(&mut points, &mut centroids, 5)
            .unwrap();

        assert_eq!(centroids, before);
    }

    #[test]
    fn test_zero_clusters_error() {
        let mut points = points_from(&[(0.0, 0.0)]);
        let mut centroids: Vec<Centroid> = Vec::new();

        let result = ClusterEngine::new(0).run(&mut points, &mut centroids, 1);
        assert_eq!(result, Err(Error::InvalidClusterCount { requested: 0 }));
    }

    #[test]
    fn test_centroid_count_mismatch_error() {
        let mut points = points_from(&[(0.0, 0.0)]);
        let mut centroids = centroids_from(&[(1.0, 1.0), (2.0, 2.0)]);

        let result = ClusterEngine::new(3).run(&mut points, &mut centroids, 1);
        assert_eq!(
            result,
            Err(Error::CentroidCountMismatch {
                expected: 3,
                found: 2,
            })
        );
    }

    #[test]
    fn test_labels_in_range_after_run() {
        let mut gen = Generator::new(Bounds::new(100.0, 100.0)).with_seed(7);
        let mut points = gen.points(50);
        let mut centroids = gen.centroids(5);

        ClusterEngine::new(5)
            .run(&mut points, &mut centroids, 10)
            .unwrap();

        for p in &points {
            assert!(p.cluster < 5, "label {} out of range", p.cluster);
        }
    }

    #[test]
    fn test_deterministic() {
        // Identical inputs must produce bit-identical labels and centroids.
        let mut gen_a = Generator::new(Bounds::new(100.0, 100.0)).with_seed(42);
        let mut points_a = gen_a.points(60);
        let mut centroids_a = gen_a.centroids(4);

        let mut gen_b = Generator::new(Bounds::new(100.0, 100.0)).with_seed(42);
        let mut points_b = gen_b.points(60);
        let mut centroids_b = gen_b.centroids(4);

        let engine = ClusterEngine::new(4);
        engine.run(&mut points_a, &mut centroids_a, 20).unwrap();
        engine.run(&mut points_b, &mut centroids_b, 20).unwrap();

        assert_eq!(points_a, points_b);
        assert_eq!(centroids_a, centroids_b);
    }

    #[test]
    fn test_tie_break_lowest_index_wins() {
        // (5, 0) is exactly equidistant from both centroids.
        let mut points = points_from(&[(5.0, 0.0)]);
        let mut centroids = centroids_from(&[(0.0, 0.0), (10.0, 0.0)]);

        ClusterEngine::new(2)
            .run(&mut points, &mut centroids, 1)
            .unwrap();

        assert_eq!(points[0].cluster, 0);
        // Cluster 1 ended up empty, so its centroid held position.
        assert_eq!(centroids[1], Centroid::new(10.0, 0.0));
    }

    #[test]
    fn test_two_separated_pairs() {
        let mut points = points_from(&[(0.0, 0.0), (0.0, 1.0), (10.0, 0.0), (10.0, 1.0)]);
        let mut centroids = centroids_from(&[(0.0, 0.0), (10.0, 0.0)]);

        ClusterEngine::new(2)
            .run(&mut points, &mut centroids, 5)
            .unwrap();

        assert_eq!(points[0].cluster, 0);
        assert_eq!(points[1].cluster, 0);
        assert_eq!(points[2].cluster, 1);
        assert_eq!(points[3].cluster, 1);

        assert!((centroids[0].x - 0.0).abs() < 1e-12);
        assert!((centroids[0].y - 0.5).abs() < 1e-12);
        assert!((centroids[1].x - 10.0).abs() < 1e-12);
        assert!((centroids[1].y - 0.5).abs() < 1e-12);
    }

    #[test]
    fn test_single_point_single_cluster() {
        let mut points = points_from(&[(5.0, 5.0)]);
        let mut centroids = centroids_from(&[(100.0, 200.0)]);

        ClusterEngine::new(1)
            .run(&mut points, &mut centroids, 3)
            .unwrap();

        assert_eq!(points[0].cluster, 0);
        // The mean of a single point is exact.
        assert_eq!(centroids[0], Centroid::new(5.0, 5.0));
    }

    #[test]
    fn test_empty_cluster_holds_position() {
        // Two occupied locations, three clusters: the far centroid never
        // gains a member and must hold its position every iteration.
        let mut points = points_from(&[
            (0.0, 0.0),
            (0.0, 0.0),
            (0.0, 0.0),
            (10.0, 10.0),
            (10.0, 10.0),
            (10.0, 10.0),
        ]);
        let mut centroids = centroids_from(&[(0.0, 0.0), (10.0, 10.0), (50.0, 50.0)]);
        let engine = ClusterEngine::new(3);

        for _ in 0..4 {
            engine.run(&mut points, &mut centroids, 1).unwrap();
            assert_eq!(centroids[2], Centroid::new(50.0, 50.0));
            for c in &centroids {
                assert!(c.x.is_finite() && c.y.is_finite());
            }
        }
    }

    #[test]
    fn test_wcss_non_increasing() {
        // Each assign/update round can only lower the objective: assignment
        // picks nearer centroids, the mean minimizes per-cluster SSE.
        let mut gen = Generator::new(Bounds::new(100.0, 100.0)).with_seed(123);
        let mut points = gen.points(200);
        let mut centroids = gen.centroids(4);
        let engine = ClusterEngine::new(4);

        engine.run(&mut points, &mut centroids, 1).unwrap();
        let mut prev = wcss(&points, &centroids);

        for _ in 0..15 {
            engine.run(&mut points, &mut centroids, 1).unwrap();
            let current = wcss(&points, &centroids);
            assert!(
                current <= prev + 1e-9,
                "wcss increased: {prev} -> {current}"
            );
            prev = current;
        }
    }
}
