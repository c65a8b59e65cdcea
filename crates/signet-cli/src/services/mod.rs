//! Service layer for business logic with dependency injection.
//!
//! Services accept trait-based dependencies so they can be tested with the
//! mocks in `test_mocks`.

pub mod commit;

#[cfg(test)]
pub mod test_mocks;

pub use commit::{CommitConfig, CommitService};
