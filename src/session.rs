//! Explicit generate / run / read lifecycle.
//!
//! A [`Session`] ties a validated [`RunConfig`] to one generated scatter and
//! drives the engine over it. The lifecycle is explicit: [`regenerate`]
//! produces fresh points and centroids, [`run`] clusters them, and the
//! accessors are pure reads. Reading never triggers computation, and
//! running never silently generates.
//!
//! Replacing the configuration discards the scatter wholesale; a new
//! configuration never partially reuses points or centroids produced under
//! the old one.
//!
//! [`regenerate`]: Session::regenerate
//! [`run`]: Session::run

use crate::config::RunConfig;
use crate::engine::ClusterEngine;
use crate::error::{Error, Result};
use crate::generate::Generator;
use crate::point::{Centroid, Point};

/// One configured clustering session.
#[derive(Debug)]
pub struct Session {
    config: RunConfig,
    seed: Option<u64>,
    points: Vec<Point>,
    centroids: Vec<Centroid>,
    generated: bool,
}

impl Session {
    /// Create a session from a configuration.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidParameter`] if the configuration fails
    /// validation.
    pub fn new(config: RunConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            config,
            seed: None,
            points: Vec::new(),
            centroids: Vec::new(),
            generated: false,
        })
    }

    /// Use a fixed seed for reproducible scatters.
    ///
    /// Every [`regenerate`](Session::regenerate) on a seeded session
    /// replays the same scatter.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Discard any previous scatter and generate a fresh one from the
    /// configuration.
    pub fn regenerate(&mut self) {
        let mut generator = Generator::new(self.config.bounds);
        if let Some(seed) = self.seed {
            generator = generator.with_seed(seed);
        }
        self.points = generator.points(self.config.num_points);
        self.centroids = generator.centroids(self.config.num_clusters);
        self.generated = true;
    }

    /// Cluster the current scatter with the configured iteration budget.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NotGenerated`] if [`regenerate`](Session::regenerate)
    /// has not produced a scatter under the current configuration.
    pub fn run(&mut self) -> Result<()> {
        if !self.generated {
            return Err(Error::NotGenerated);
        }
        let engine = ClusterEngine::new(self.config.num_clusters);
        engine.run(
            &mut self.points,
            &mut self.centroids,
            self.config.max_iterations,
        )
    }

    /// Replace the configuration, invalidating any generated scatter.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidParameter`] if the new configuration fails
    /// validation; the session keeps its previous configuration and scatter
    /// in that case.
    pub fn set_config(&mut self, config: RunConfig) -> Result<()> {
        config.validate()?;
        self.config = config;
        self.points.clear();
        self.centroids.clear();
        self.generated = false;
        Ok(())
    }

    /// The active configuration.
    pub fn config(&self) -> &RunConfig {
        &self.config
    }

    /// The current points. Labeled after a successful [`run`](Session::run).
    pub fn points(&self) -> &[Point] {
        &self.points
    }

    /// The current centroids.
    pub fn centroids(&self) -> &[Centroid] {
        &self.centroids
    }
}
