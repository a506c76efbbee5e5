//! # lloyd
//!
//! Fixed-iteration k-means clustering over 2D point scatters.
//!
//! The [`ClusterEngine`] runs the classic Lloyd's assign/update loop for an
//! exact iteration budget over caller-owned points and centroids, mutating
//! them in place. Around it sit the collaborators a scatter visualization
//! needs: uniform [`generate`] for fresh points and centroids inside a
//! bounded region, a [`Session`] driving the explicit
//! generate → run → read lifecycle, a deterministic cluster-index
//! [`palette`], and [`metrics`] for watching the objective.
//!
//! ```rust
//! use lloyd::{RunConfig, Session};
//!
//! let config = RunConfig::default().with_num_points(50).with_num_clusters(3);
//! let mut session = Session::new(config).unwrap().with_seed(42);
//! session.regenerate();
//! session.run().unwrap();
//!
//! for point in session.points() {
//!     let color = lloyd::color_for(point.cluster);
//!     // hand (point, color) to a renderer
//!     let _ = (point, color);
//! }
//! ```
//!
//! Feature flags: `parallel` fans the assignment phase out over rayon;
//! `serde` derives serialization for the configuration types.

pub mod config;
pub mod engine;
/// Error types used across `lloyd`.
pub mod error;
pub mod generate;
pub mod metrics;
pub mod palette;
pub mod point;
pub mod session;

pub use config::{Bounds, RunConfig};
pub use engine::ClusterEngine;
pub use error::{Error, Result};
pub use generate::Generator;
pub use metrics::{cluster_sizes, wcss};
pub use palette::{color_for, Rgb};
pub use point::{Centroid, Point, UNASSIGNED};
pub use session::Session;
