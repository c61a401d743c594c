//! The pet record and the names it is stored under.

pub mod contract;
mod types;

pub use types::{Gender, Pet, PetValues};
