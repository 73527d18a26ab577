use physix_core::sim::{AnimationParameters, ControlSpec, SceneKind};

use super::driver::DriverHandle;
use crate::error::DriverError;

/// Play, pause and reset buttons of a simulator scene, plus the "interacted" latch
/// that unlocks its Continue action.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Playback {
    gate: Option<ControlSpec>,
    interacted: bool,
}

impl Playback {
    #[must_use]
    pub fn for_scene(kind: SceneKind) -> Self {
        Self {
            gate: kind.play_control(),
            interacted: false,
        }
    }

    #[must_use]
    pub fn has_controls(&self) -> bool {
        self.gate.is_some()
    }

    #[must_use]
    pub fn is_playing(&self, params: &AnimationParameters) -> bool {
        self.gate.is_some_and(|gate| params.flag(&gate))
    }

    /// True once the user has played or changed a parameter.
    #[must_use]
    pub fn can_continue(&self) -> bool {
        self.interacted
    }

    pub fn mark_interacted(&mut self) {
        self.interacted = true;
    }

    /// # Errors
    ///
    /// Returns `DriverError::NoPlayControl` for scenes without a play toggle.
    pub fn play(&mut self, params: &mut AnimationParameters) -> Result<(), DriverError> {
        self.set_playing(params, true)?;
        self.interacted = true;
        Ok(())
    }

    /// # Errors
    ///
    /// Returns `DriverError::NoPlayControl` for scenes without a play toggle.
    pub fn pause(&mut self, params: &mut AnimationParameters) -> Result<(), DriverError> {
        self.set_playing(params, false)
    }

    /// Flips play state and returns whether the scene is now playing.
    ///
    /// # Errors
    ///
    /// Returns `DriverError::NoPlayControl` for scenes without a play toggle.
    pub fn toggle(&mut self, params: &mut AnimationParameters) -> Result<bool, DriverError> {
        if self.is_playing(params) {
            self.pause(params)?;
            Ok(false)
        } else {
            self.play(params)?;
            Ok(true)
        }
    }

    /// Pause and zero the running driver's clock on its next frame.
    ///
    /// # Errors
    ///
    /// Returns `DriverError::NoPlayControl` for scenes without a play toggle.
    pub fn reset(
        &mut self,
        params: &mut AnimationParameters,
        driver: &DriverHandle,
    ) -> Result<(), DriverError> {
        self.set_playing(params, false)?;
        driver.request_reset();
        Ok(())
    }

    /// Slider write that counts as interaction. Returns the stored value.
    ///
    /// # Errors
    ///
    /// Returns `DriverError::Param` if `key` is not a slider of `params`.
    pub fn set_number(
        &mut self,
        params: &mut AnimationParameters,
        key: &str,
        value: f64,
    ) -> Result<f64, DriverError> {
        let stored = params.set_number(key, value)?;
        self.interacted = true;
        Ok(stored)
    }

    /// Choice write that counts as interaction.
    ///
    /// # Errors
    ///
    /// Returns `DriverError::Param` if `key` is not a choice or `value` is not one of
    /// its options.
    pub fn set_choice(
        &mut self,
        params: &mut AnimationParameters,
        key: &str,
        value: &str,
    ) -> Result<(), DriverError> {
        params.set_choice(key, value)?;
        self.interacted = true;
        Ok(())
    }

    /// Toggle write that counts as interaction. Returns the new value.
    ///
    /// # Errors
    ///
    /// Returns `DriverError::Param` if `key` is not a toggle of `params`.
    pub fn toggle_flag(
        &mut self,
        params: &mut AnimationParameters,
        key: &str,
    ) -> Result<bool, DriverError> {
        let next = params.toggle(key)?;
        self.interacted = true;
        Ok(next)
    }

    fn set_playing(
        &self,
        params: &mut AnimationParameters,
        playing: bool,
    ) -> Result<(), DriverError> {
        let gate = self.gate.ok_or(DriverError::NoPlayControl)?;
        params.set_flag(gate.key, playing)?;
        Ok(())
    }
}
