//! Core domain types for Rawi.
//!
//! This crate contains pure domain types with no IO, no async, and minimal
//! dependencies. Everything here can be used from any layer of the
//! application.

mod errors;
mod testimony;
mod text;

pub use errors::{
    Field, NotFoundError, SeedError, SubmitError, TransitionError, ValidationError,
};
pub use testimony::{ANONYMOUS_AUTHOR, Draft, Status, Testimony, TestimonyId, TestimonyIdError};
pub use text::{EmptyTextError, NonEmptyText};
