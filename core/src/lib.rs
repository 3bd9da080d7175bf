//! Domain logic for the Rawi testimony archive.
//!
//! Contains the owned testimony store, submission intake validation, the
//! moderation state machine, the archive query engine, and status
//! aggregation. Everything here is synchronous and IO-free; the engine crate
//! wraps this in the asynchronous operation surface the presentation layer
//! drives.

pub mod intake;
pub mod moderation;
pub mod query;
pub mod stats;
mod store;

pub use intake::Submission;
pub use query::StatusFilter;
pub use stats::StatusCounts;
pub use store::TestimonyStore;
