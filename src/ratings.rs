//! The ratings table over which similarities are computed.

use serde::{Deserialize, Serialize};

use crate::{
    error::{Result, SimilarityError},
    number::Float,
    Number,
};

/// A table of per-item ratings, one row per user.
///
/// Row `i` holds the ratings user `i` has given, indexed by item. Rows
/// may be jagged: users need not have rated the same number of items.
/// The similarity kernels only ever read the table; ownership stays with
/// the caller.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RatingsTable<T: Number> {
    /// One row of ratings per user, indexed by item.
    rows: Vec<Vec<T>>,
}

impl<T: Number> RatingsTable<T> {
    /// Creates an empty table.
    #[must_use]
    pub const fn new() -> Self {
        Self { rows: Vec::new() }
    }

    /// Builds a table from one row of ratings per user.
    #[must_use]
    pub fn from_rows(rows: Vec<Vec<T>>) -> Self {
        Self { rows }
    }

    /// The number of users in the table.
    #[must_use]
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Whether the table has no users.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Appends a user's ratings, returning the new user's index.
    pub fn push_user(&mut self, ratings: Vec<T>) -> usize {
        self.rows.push(ratings);
        self.rows.len() - 1
    }

    /// The ratings of `user`, indexed by item.
    ///
    /// # Errors
    ///
    /// * `UnknownUser` if `user` is not a row of the table.
    pub fn ratings(&self, user: usize) -> Result<&[T]> {
        self.rows
            .get(user)
            .map(Vec::as_slice)
            .ok_or(SimilarityError::UnknownUser {
                user,
                num_users: self.rows.len(),
            })
    }

    /// The mean of all ratings `user` has given.
    ///
    /// The mean is always taken over the user's full rating history, not
    /// any shorter window a similarity is being computed over.
    ///
    /// # Errors
    ///
    /// * `UnknownUser` if `user` is not a row of the table.
    /// * `NoRatings` if the user has rated nothing.
    pub fn mean_rating<U: Float>(&self, user: usize) -> Result<U> {
        let row = self.ratings(user)?;
        if row.is_empty() {
            return Err(SimilarityError::NoRatings { user });
        }
        let sum = row.iter().fold(U::ZERO, |acc, &r| acc + U::from(r));
        Ok(sum / U::from(row.len()))
    }
}

impl<T: Number> From<Vec<Vec<T>>> for RatingsTable<T> {
    fn from(rows: Vec<Vec<T>>) -> Self {
        Self::from_rows(rows)
    }
}

impl<T: Number> FromIterator<Vec<T>> for RatingsTable<T> {
    fn from_iter<I: IntoIterator<Item = Vec<T>>>(iter: I) -> Self {
        Self {
            rows: iter.into_iter().collect(),
        }
    }
}
