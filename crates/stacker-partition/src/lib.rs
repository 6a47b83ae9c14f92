//! # stacker-partition
//!
//! Seeded stick-breaking partition of a strength budget across LoRA
//! slots, some of which may be locked to fixed values.
//!
//! Every call builds its own generator from the seed it is given, so
//! results never depend on what ran before them.

pub mod partition;
pub mod rounding;
pub mod sampling;

pub use partition::{partition, partition_signed, partition_with_rng, LockMap};
pub use rounding::round_to;
pub use sampling::{seeded_rng, uniform_in_range, uniform_with_rng};
