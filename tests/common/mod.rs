//! Shared helpers for integration tests.

use rentals_core::types::Timestamp;
use rentals_fixtures::Fixtures;

/// The embedded data set.
pub fn fixtures() -> Fixtures {
    Fixtures::embedded().expect("embedded fixtures load")
}

/// Fixed reference time matching the fixture data.
pub fn as_of() -> Timestamp {
    Timestamp::parse("2024-06-01T12:00:00Z").expect("valid timestamp")
}
