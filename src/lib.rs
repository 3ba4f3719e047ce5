#![deny(clippy::correctness)]
#![warn(
    missing_docs,
    clippy::all,
    clippy::suspicious,
    clippy::style,
    clippy::complexity,
    clippy::perf,
    clippy::pedantic,
    clippy::nursery,
    clippy::missing_docs_in_private_items,
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::panic,
    clippy::cast_lossless
)]
#![doc = include_str!("../README.md")]

pub mod error;
pub mod number;
pub mod ratings;
pub mod similarity;

pub use error::{Result, SimilarityError};
pub use number::Number;
pub use ratings::RatingsTable;

/// The version of the crate.
pub const VERSION: &str = "0.1.0";
