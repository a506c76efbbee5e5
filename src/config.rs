//! Run configuration.
//!
//! A [`RunConfig`] is an immutable snapshot of everything a clustering run
//! needs: how many points and clusters to generate, the iteration budget,
//! and the bounding region points are sampled from. Validation happens at
//! this boundary so the engine only ever sees well-formed values.

use crate::error::{Error, Result};

/// Bounding region for point and centroid generation.
///
/// Coordinates are sampled uniformly from `[0, width) x [0, height)`.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Bounds {
    /// Region width.
    pub width: f64,
    /// Region height.
    pub height: f64,
}

impl Bounds {
    /// Create a `width x height` region anchored at the origin.
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }
}

/// Immutable configuration for one clustering run.
///
/// Changing configuration invalidates any generated point/centroid set;
/// see [`Session`](crate::session::Session) for the lifecycle.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RunConfig {
    /// Number of points to generate.
    pub num_points: usize,
    /// Number of clusters (k).
    pub num_clusters: usize,
    /// Fixed iteration budget; every run performs exactly this many
    /// assign/update rounds.
    pub max_iterations: usize,
    /// Region points and centroids are sampled from.
    pub bounds: Bounds,
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            num_points: 100,
            num_clusters: 3,
            max_iterations: 100,
            bounds: Bounds::new(800.0, 600.0),
        }
    }
}

impl RunConfig {
    /// Set the number of points.
    pub fn with_num_points(mut self, num_points: usize) -> Self {
        self.num_points = num_points;
        self
    }

    /// Set the number of clusters.
    pub fn with_num_clusters(mut self, num_clusters: usize) -> Self {
        self.num_clusters = num_clusters;
        self
    }

    /// Set the iteration budget.
    pub fn with_max_iterations(mut self, max_iterations: usize) -> Self {
        self.max_iterations = max_iterations;
        self
    }

    /// Set the sampling region.
    pub fn with_bounds(mut self, bounds: Bounds) -> Self {
        self.bounds = bounds;
        self
    }

    /// Validate the configuration.
    ///
    /// Rejects zero point or cluster counts and degenerate sampling regions.
    /// A zero iteration budget is allowed; the run is then a no-op.
    pub fn validate(&self) -> Result<()> {
        if self.num_points == 0 {
            return Err(Error::InvalidParameter {
                name: "num_points",
                message: "must be at least 1",
            });
        }
        if self.num_clusters == 0 {
            return Err(Error::InvalidParameter {
                name: "num_clusters",
                message: "must be at least 1",
            });
        }
        if !(self.bounds.width > 0.0 && self.bounds.width.is_finite()) {
            return Err(Error::InvalidParameter {
                name: "bounds.width",
                message: "must be positive and finite",
            });
        }
        if !(self.bounds.height > 0.0 && self.bounds.height.is_finite()) {
            return Err(Error::InvalidParameter {
                name: "bounds.height",
                message: "must be positive and finite",
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        let config = RunConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.num_points, 100);
        assert_eq!(config.num_clusters, 3);
        assert_eq!(config.max_iterations, 100);
    }

    #[test]
    fn test_zero_points_rejected() {
        let config = RunConfig::default().with_num_points(0);
        assert_eq!(
            config.validate(),
            Err(Error::InvalidParameter {
                name: "num_points",
                message: "must be at least 1",
            })
        );
    }

    #[test]
    fn test_zero_clusters_rejected() {
        let config = RunConfig::default().with_num_clusters(0);
        assert!(matches!(
            config.validate(),
            Err(Error::InvalidParameter {
                name: "num_clusters",
                ..
            })
        ));
    }

    #[test]
    fn test_degenerate_bounds_rejected() {
        let config = RunConfig::default().with_bounds(Bounds::new(0.0, 600.0));
        assert!(config.validate().is_err());

        let config = RunConfig::default().with_bounds(Bounds::new(800.0, f64::NAN));
        assert!(config.validate().is_err());

        let config = RunConfig::default().with_bounds(Bounds::new(800.0, f64::INFINITY));
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_zero_iterations_allowed() {
        let config = RunConfig::default().with_max_iterations(0);
        assert!(config.validate().is_ok());
    }
}
