use core::fmt;

/// Result alias for `lloyd`.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors returned by configuration validation and the clustering engine.
#[derive(Debug, Clone, PartialEq)]
pub enum Error {
    /// Invalid number of clusters requested.
    InvalidClusterCount {
        /// Requested count.
        requested: usize,
    },

    /// Centroid collection size does not match the cluster count.
    CentroidCountMismatch {
        /// Expected number of centroids (the cluster count).
        expected: usize,
        /// Number of centroids actually supplied.
        found: usize,
    },

    /// Invalid parameter value.
    InvalidParameter {
        /// Parameter name.
        name: &'static str,
        /// Error message.
        message: &'static str,
    },

    /// A run was requested before any points/centroids were generated.
    NotGenerated,
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::InvalidClusterCount { requested } => {
                write!(f, "cannot cluster into {requested} clusters")
            }
            Error::CentroidCountMismatch { expected, found } => {
                write!(f, "expected {expected} centroids, found {found}")
            }
            Error::InvalidParameter { name, message } => {
                write!(f, "invalid parameter '{name}': {message}")
            }
            Error::NotGenerated => {
                write!(f, "points and centroids have not been generated yet")
            }
        }
    }
}

impl std::error::Error for Error {}
