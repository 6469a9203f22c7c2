//! Development and test utilities.
//!
//! Compiled for tests and behind the `development` feature for running the
//! TUI against fixture data without a live server.

pub mod mock_store;

pub use mock_store::MockStore;
