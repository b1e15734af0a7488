//! Integration tests for Layer 0: Foundation
//!
//! Tests for core types: Value, Tier, Domain, and Error.

mod errors;
mod values;
