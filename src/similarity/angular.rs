//! Angular similarity between users.

use crate::{
    error::{Result, SimilarityError},
    number::Float,
    Number, RatingsTable,
};

/// Cosine similarity between two users.
///
/// The dot product of the two users' rating windows divided by the
/// product of their magnitudes, over the first `num_items` items.
/// Ratings enter the formula raw; no mean-centering is applied, so
/// unlike [`super::pearson`] the score does not remove per-user rating
/// bias.
///
/// # Examples
///
/// ```
/// use affinities::{similarity::cosine, RatingsTable};
///
/// let table = RatingsTable::from_rows(vec![
///     vec![1.0_f32, 2.0, 3.0],
///     vec![2.0, 4.0, 6.0],
/// ]);
///
/// let sim: f32 = cosine(&table, 0, 1, 3).unwrap();
///
/// assert!((sim - 1.0).abs() < f32::EPSILON);
/// ```
///
/// # Errors
///
/// * `UnknownUser` if `i` or `j` is not a row of the table.
/// * `NoRatings` if either user's row is empty.
/// * `NotEnoughRatings` if either row is shorter than `num_items`.
/// * `ZeroMagnitude` if either user's window has zero magnitude.
pub fn cosine<T: Number, U: Float>(
    ratings: &RatingsTable<T>,
    i: usize,
    j: usize,
    num_items: usize,
) -> Result<U> {
    let x = super::window(ratings, i, num_items)?;
    let y = super::window(ratings, j, num_items)?;

    let [xx, yy, xy] = x
        .iter()
        .zip(y.iter())
        .fold([U::ZERO; 3], |[xx, yy, xy], (&a, &b)| {
            let (a, b) = (U::from(a), U::from(b));
            [a.mul_add(a, xx), b.mul_add(b, yy), a.mul_add(b, xy)]
        });

    if xx < U::EPSILON {
        return Err(SimilarityError::ZeroMagnitude { user: i });
    }
    if yy < U::EPSILON {
        return Err(SimilarityError::ZeroMagnitude { user: j });
    }

    Ok(xy * (xx * yy).inv_sqrt())
}
