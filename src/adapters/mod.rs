//! Adapters - implementations of the ports.
//!
//! - `memory` - in-memory adapters for tests and single-process embedding
//! - `realtime` - per-lecture broadcast rooms backing the live sink

pub mod memory;
pub mod realtime;
