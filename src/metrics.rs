//! Clustering diagnostics.
//!
//! Small read-only measures over a labeled scatter. The engine never
//! consumes these; they exist for callers and tests that want to watch the
//! objective or spot degenerate clusters.

use crate::point::{Centroid, Point};

/// Within-cluster sum of squared distances.
///
/// The quantity Lloyd's algorithm drives down: for every labeled point, the
/// squared Euclidean distance to its assigned centroid, summed. Points whose
/// label does not index a centroid (including unassigned points) contribute
/// nothing.
pub fn wcss(points: &[Point], centroids: &[Centroid]) -> f64 {
    points
        .iter()
        .filter_map(|p| {
            centroids
                .get(p.cluster)
                .map(|c| (p.x - c.x).powi(2) + (p.y - c.y).powi(2))
        })
        .sum()
}

/// Number of points assigned to each of the `k` clusters.
///
/// A zero entry marks an empty cluster. Unassigned and out-of-range labels
/// are not counted.
pub fn cluster_sizes(points: &[Point], k: usize) -> Vec<usize> {
    let mut sizes = vec![0usize; k];
    for p in points {
        if p.cluster < k {
            sizes[p.cluster] += 1;
        }
    }
    sizes
}
