//! Sales analytics aggregation engine.
//!
//! Pure, synchronous computations over an in-memory snapshot of sale
//! records: nothing here fetches, caches or mutates anything. Every
//! function takes an explicit reference date instead of reading the wall
//! clock, so results are deterministic for a given snapshot.

pub mod dashboards;
pub mod shared;
