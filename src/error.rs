//! Errors surfaced by ratings-table access and the similarity kernels.
//!
//! Degenerate inputs are reported to the caller instead of being folded
//! into a substitute score. There is no meaningful fallback value for a
//! similarity that does not exist, so none is invented here.

use thiserror::Error;

/// A `Result` whose error type is [`SimilarityError`].
pub type Result<T> = core::result::Result<T, SimilarityError>;

/// The ways a similarity computation can fail.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum SimilarityError {
    /// The user index is not a row of the table.
    #[error("unknown user {user}: the table has {num_users} users")]
    UnknownUser {
        /// The offending user index.
        user: usize,
        /// The number of users in the table.
        num_users: usize,
    },

    /// The user has an empty rating history, so their mean rating is
    /// undefined.
    #[error("user {user} has no ratings")]
    NoRatings {
        /// The offending user index.
        user: usize,
    },

    /// The user has rated fewer items than the requested window covers.
    #[error("user {user} has {num_ratings} ratings but {num_items} items were requested")]
    NotEnoughRatings {
        /// The offending user index.
        user: usize,
        /// The number of items the user has rated.
        num_ratings: usize,
        /// The number of items requested.
        num_items: usize,
    },

    /// The user's centered ratings are identically zero over the
    /// considered items, so the correlation denominator is zero.
    #[error("user {user} has zero rating variance over the considered items")]
    ZeroVariance {
        /// The offending user index.
        user: usize,
    },

    /// The user's rating window has zero magnitude.
    #[error("user {user} has a zero-magnitude rating window")]
    ZeroMagnitude {
        /// The offending user index.
        user: usize,
    },
}
