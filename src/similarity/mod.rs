//! User-user similarity measures over a ratings table.
//!
//! # Potentially unexpected behaviors
//!
//! `pearson` centers each user's ratings on the mean of that user's
//! *full* rating history, while correlating only the first `num_items`
//! entries of each row. When a row is longer than the window, the mean
//! and the window therefore cover different sets of ratings, and the
//! score differs from that of a windowed-mean Pearson over the same
//! data.

mod angular;
mod correlation;

pub use angular::cosine;
pub use correlation::pearson;

use crate::{
    error::{Result, SimilarityError},
    Number, RatingsTable,
};

/// The first `num_items` ratings of `user`'s row.
pub(crate) fn window<T: Number>(
    ratings: &RatingsTable<T>,
    user: usize,
    num_items: usize,
) -> Result<&[T]> {
    let row = ratings.ratings(user)?;
    if row.is_empty() {
        return Err(SimilarityError::NoRatings { user });
    }
    row.get(..num_items)
        .ok_or(SimilarityError::NotEnoughRatings {
            user,
            num_ratings: row.len(),
            num_items,
        })
}
