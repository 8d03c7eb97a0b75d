//! Property-based tests for the factory adapter
//!
//! Uses proptest to verify:
//! 1. Canonical naming - names are idempotent and distinguish types
//! 2. Resolution order - parameters are looked up left to right and
//!    resolution stops at the first failing lookup

mod naming_properties;
mod resolution_properties;
