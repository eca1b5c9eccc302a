//! Property-based test suite
//!
//! Uses proptest to generate random inputs and verify properties of the
//! pure domain logic.

mod suggestions_proptest;
mod validation_proptest;
