//! Seams to the host runtime.

pub mod applier;

pub use applier::{LoraApplier, PassthroughApplier};
