//! Test utilities for WALS Explorer integration tests
//!
//! TestFixture writes CLDF CSV files into a temporary directory and opens a
//! DatasetEngine over it, using only the public API.

#![allow(dead_code)]

pub mod test_fixture;
