//! LoraApplier trait: the hand-off to the host's model-patching call.
//!
//! The stacker decides strengths; the host decides what applying a LoRA
//! means. Nothing in this workspace loads weights.

use crate::errors::ApplyError;
use crate::models::Preset;

/// Applies one LoRA to a model/conditioning pair at the given strengths.
///
/// Implementations receive ownership of the current state and return the
/// patched state, so a stack threads the pair through every call in order.
pub trait LoraApplier {
    type Model;
    type Clip;

    fn apply(
        &self,
        model: Self::Model,
        clip: Self::Clip,
        lora_name: &str,
        preset: Preset,
        model_strength: f64,
        clip_strength: f64,
    ) -> Result<(Self::Model, Self::Clip), ApplyError>;
}

/// Returns its inputs unchanged. Used for dry runs.
pub struct PassthroughApplier<M, C> {
    _marker: std::marker::PhantomData<fn(M, C)>,
}

impl<M, C> PassthroughApplier<M, C> {
    pub fn new() -> Self {
        Self {
            _marker: std::marker::PhantomData,
        }
    }
}

impl<M, C> Default for PassthroughApplier<M, C> {
    fn default() -> Self {
        Self::new()
    }
}

impl<M, C> LoraApplier for PassthroughApplier<M, C> {
    type Model = M;
    type Clip = C;

    fn apply(
        &self,
        model: M,
        clip: C,
        _lora_name: &str,
        _preset: Preset,
        _model_strength: f64,
        _clip_strength: f64,
    ) -> Result<(M, C), ApplyError> {
        Ok((model, clip))
    }
}
