//! Core record types and seed content for the tribute collections.

pub mod records;
pub mod seeds;

pub use records::{Nomination, Pledge, Postcard, Wish, NOMINATION_PLACEHOLDER_IMAGE};
