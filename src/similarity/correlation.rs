//! Correlation-based similarity between users.

use crate::{
    error::{Result, SimilarityError},
    number::Float,
    Number, RatingsTable,
};

/// Pearson correlation similarity between two users.
///
/// Centers each user's ratings on the mean of that user's full rating
/// history, then correlates the first `num_items` centered entries: the
/// dot product of the two deviation windows divided by the product of
/// their Euclidean norms. The score is 1 for perfectly correlated
/// raters, -1 for perfectly anti-correlated raters, and lies in
/// `[-1, 1]` for non-degenerate inputs. The result is not clamped.
///
/// Note that when a row is longer than `num_items`, the mean covers
/// ratings the correlation window does not; see the [`crate::similarity`]
/// module docs.
///
/// # Arguments
///
/// * `ratings`: The table of per-item ratings, one row per user.
/// * `i`: A user index into the table.
/// * `j`: A user index into the table.
/// * `num_items`: The number of items to correlate over.
///
/// # Examples
///
/// ```
/// use affinities::{similarity::pearson, RatingsTable};
///
/// let table = RatingsTable::from_rows(vec![
///     vec![5.0_f64, 3.0, 4.0, 4.0],
///     vec![3.0, 1.0, 2.0, 3.0],
/// ]);
///
/// let sim: f64 = pearson(&table, 0, 1, 4).unwrap();
///
/// assert!((sim - 0.852_802_865_422_441_7).abs() < 1e-12);
/// ```
///
/// # Errors
///
/// * `UnknownUser` if `i` or `j` is not a row of the table.
/// * `NoRatings` if either user's row is empty.
/// * `NotEnoughRatings` if either row is shorter than `num_items`.
/// * `ZeroVariance` if either user's deviations over the window are
///   identically zero, e.g. a constant rating vector. The denominator
///   would be zero and the score undefined, so no value is substituted.
///
/// # References
///
/// * [Pearson correlation coefficient](https://en.wikipedia.org/wiki/Pearson_correlation_coefficient)
pub fn pearson<T: Number, U: Float>(
    ratings: &RatingsTable<T>,
    i: usize,
    j: usize,
    num_items: usize,
) -> Result<U> {
    let x = super::window(ratings, i, num_items)?;
    let y = super::window(ratings, j, num_items)?;

    // Means over the full rows, not the windows.
    let x_mean = ratings.mean_rating::<U>(i)?;
    let y_mean = ratings.mean_rating::<U>(j)?;

    let covariance = x.iter().zip(y.iter()).fold(U::ZERO, |acc, (&xi, &yi)| {
        acc + (U::from(xi) - x_mean) * (U::from(yi) - y_mean)
    });

    let x_var = x.iter().fold(U::ZERO, |acc, &v| {
        let d = U::from(v) - x_mean;
        acc + d * d
    });
    if x_var < U::EPSILON {
        return Err(SimilarityError::ZeroVariance { user: i });
    }

    let y_var = y.iter().fold(U::ZERO, |acc, &v| {
        let d = U::from(v) - y_mean;
        acc + d * d
    });
    if y_var < U::EPSILON {
        return Err(SimilarityError::ZeroVariance { user: j });
    }

    Ok(covariance / (x_var.sqrt() * y_var.sqrt()))
}
