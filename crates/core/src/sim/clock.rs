use super::params::{AnimationParameters, ControlSpec};

/// How much simulation time one rendered frame adds.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ClockStep {
    Fixed(f64),
    /// `value(control) * factor` per frame.
    Scaled { control: ControlSpec, factor: f64 },
}

/// Per-scene advancement rule.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ClockPolicy {
    pub step: ClockStep,
    /// When set, the clock only moves while this toggle is on.
    pub gate: Option<ControlSpec>,
}

impl ClockPolicy {
    #[must_use]
    pub const fn fixed(step: f64) -> Self {
        Self {
            step: ClockStep::Fixed(step),
            gate: None,
        }
    }

    #[must_use]
    pub const fn scaled(control: ControlSpec, factor: f64) -> Self {
        Self {
            step: ClockStep::Scaled { control, factor },
            gate: None,
        }
    }

    #[must_use]
    pub fn gated_by(mut self, toggle: ControlSpec) -> Self {
        self.gate = Some(toggle);
        self
    }

    /// Increment for one frame under the given parameters.
    #[must_use]
    pub fn increment(&self, params: &AnimationParameters) -> f64 {
        if let Some(gate) = &self.gate {
            if !params.flag(gate) {
                return 0.0;
            }
        }
        match self.step {
            ClockStep::Fixed(step) => step,
            ClockStep::Scaled { control, factor } => params.number(&control) * factor,
        }
    }
}

/// Monotonic simulation time owned by one running driver.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct SimulationClock {
    value: f64,
    frames: u64,
}

impl SimulationClock {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn value(&self) -> f64 {
        self.value
    }

    /// Frames rendered since the last reset, including paused ones.
    #[must_use]
    pub fn frames(&self) -> u64 {
        self.frames
    }

    /// Advances by one frame and returns the new value.
    ///
    /// Negative increments are ignored so the clock never runs backwards.
    pub fn advance(&mut self, policy: &ClockPolicy, params: &AnimationParameters) -> f64 {
        let step = policy.increment(params);
        if step.is_finite() && step > 0.0 {
            self.value += step;
        }
        self.frames += 1;
        self.value
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SPEED: ControlSpec = ControlSpec::slider("speed", "Speed", "%", 10.0, 100.0, 10.0, 50.0);
    const PLAYING: ControlSpec = ControlSpec::toggle("playing", "Play", false);

    #[test]
    fn fixed_step_accumulates_per_frame() {
        let params = AnimationParameters::new([]);
        let policy = ClockPolicy::fixed(1.0);
        let mut clock = SimulationClock::new();
        for _ in 0..3 {
            clock.advance(&policy, &params);
        }
        assert_eq!(clock.value(), 3.0);
        assert_eq!(clock.frames(), 3);
    }

    #[test]
    fn scaled_step_reads_current_parameter() {
        let mut params = AnimationParameters::new([SPEED]);
        let policy = ClockPolicy::scaled(SPEED, 1.0 / 1000.0);
        let mut clock = SimulationClock::new();
        clock.advance(&policy, &params);
        assert!((clock.value() - 0.05).abs() < 1e-12);

        params.set_number("speed", 100.0).unwrap();
        clock.advance(&policy, &params);
        assert!((clock.value() - 0.15).abs() < 1e-12);
    }

    #[test]
    fn gated_clock_freezes_while_paused() {
        let mut params = AnimationParameters::new([PLAYING]);
        let policy = ClockPolicy::fixed(0.1).gated_by(PLAYING);
        let mut clock = SimulationClock::new();

        clock.advance(&policy, &params);
        assert_eq!(clock.value(), 0.0);
        assert_eq!(clock.frames(), 1);

        params.set_flag("playing", true).unwrap();
        clock.advance(&policy, &params);
        assert!((clock.value() - 0.1).abs() < 1e-12);

        clock.reset();
        assert_eq!(clock, SimulationClock::new());
    }
}
