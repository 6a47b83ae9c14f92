//! Stack description model: the JSON the UI serializes into `stack_data`.

pub mod group;
pub mod lora_entry;
pub mod preset;
pub mod stack_data;

pub use group::GroupSpec;
pub use lora_entry::LoraEntry;
pub use preset::Preset;
pub use stack_data::StackData;
