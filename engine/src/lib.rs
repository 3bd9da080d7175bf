//! Operation surface for the Rawi testimony archive.
//!
//! [`Archive`] is what a presentation layer drives: it owns the store and
//! exposes submission, moderation, removal, querying, and aggregation. The
//! single asynchronous operation is `submit`, which models the intake
//! acceptance latency of the original service boundary.

mod archive;

pub use archive::{Archive, DEFAULT_INTAKE_LATENCY};
pub use rawi_core::{StatusCounts, StatusFilter, Submission};
pub use rawi_types::{
    NotFoundError, SeedError, Status, SubmitError, Testimony, TestimonyId, TransitionError,
};
