//! Uniform point and centroid generation.
//!
//! Produces fresh scatters inside a [`Bounds`] region, the raw material for
//! a clustering run. Both coordinates are drawn uniformly from
//! `[0, width) x [0, height)`. A seeded generator replays the same scatter
//! every time; an unseeded one draws from the thread RNG.

use crate::config::Bounds;
use crate::point::{Centroid, Point};
use rand::prelude::*;

/// Uniform random generator for points and centroids.
///
/// Consecutive calls on one generator continue the same random stream, so
/// generated centroids do not shadow previously generated points.
pub struct Generator {
    bounds: Bounds,
    rng: Box<dyn RngCore>,
}

impl Generator {
    /// Create a generator over `bounds` seeded from the thread RNG.
    ///
    /// `bounds` must have positive, finite extents
    /// (see [`RunConfig::validate`](crate::config::RunConfig::validate));
    /// sampling from a degenerate region panics.
    pub fn new(bounds: Bounds) -> Self {
        Self {
            bounds,
            rng: Box::new(rand::rng()),
        }
    }

    /// Use a fixed seed for reproducible scatters.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.rng = Box::new(StdRng::seed_from_u64(seed));
        self
    }

    /// Generate `n` unassigned points inside the bounds.
    pub fn points(&mut self, n: usize) -> Vec<Point> {
        (0..n)
            .map(|_| {
                Point::new(
                    self.rng.random_range(0.0..self.bounds.width),
                    self.rng.random_range(0.0..self.bounds.height),
                )
            })
            .collect()
    }

    /// Generate `k` centroids inside the bounds.
    pub fn centroids(&mut self, k: usize) -> Vec<Centroid> {
        (0..k)
            .map(|_| {
                Centroid::new(
                    self.rng.random_range(0.0..self.bounds.width),
                    self.rng.random_range(0.0..self.bounds.height),
                )
            })
            .collect()
    }
}

impl core::fmt::Debug for Generator {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Generator")
            .field("bounds", &self.bounds)
            .finish_non_exhaustive()
    }
}
