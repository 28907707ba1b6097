//! Concurrency layer for scout
//!
//! This crate provides the sharded accumulator used by parallel ranking:
//! - ShardedMap: N independently locked shards with deterministic key routing
//! - Access: scoped guard that holds one shard lock while a value is mutated

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod sharded;

pub use sharded::{Access, ShardedMap};
