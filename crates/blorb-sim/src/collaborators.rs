//! Host-side services the controller calls out to.
//!
//! The controller never renders, plays sound or reads devices itself; the
//! host injects implementations of these traits.

use blorb_core::commands::InputState;
use blorb_core::enums::Cue;

/// Plays named audio cues.
pub trait AudioSink {
    fn play(&mut self, cue: Cue);
}

/// Reports the input device state once per frame.
pub trait InputSource {
    fn poll(&mut self) -> InputState;
}

/// Audio sink that discards every cue.
#[derive(Debug, Default)]
pub struct NullAudio;

impl AudioSink for NullAudio {
    fn play(&mut self, _cue: Cue) {}
}

/// Input source that never moves or fires.
#[derive(Debug, Default)]
pub struct IdleInput;

impl InputSource for IdleInput {
    fn poll(&mut self) -> InputState {
        InputState::default()
    }
}
