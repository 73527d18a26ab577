use std::collections::BTreeMap;
use std::fmt;

use thiserror::Error;

//
// ─── ERRORS ────────────────────────────────────────────────────────────────────
//

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum ParamError {
    #[error("unknown parameter `{key}`")]
    UnknownKey { key: String },

    #[error("parameter `{key}` is a {actual}, not a {expected}")]
    WrongKind {
        key: String,
        expected: &'static str,
        actual: &'static str,
    },

    #[error("`{value}` is not an option of `{key}`")]
    UnknownOption { key: String, value: String },

    #[error("parameter `{key}` must be a finite number")]
    NotFinite { key: String },
}

//
// ─── CONTROL SPECS ─────────────────────────────────────────────────────────────
//

/// One option of a choice control: stored value and button label.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChoiceOption {
    pub value: &'static str,
    pub label: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ControlKind {
    Slider {
        min: f64,
        max: f64,
        step: f64,
        default: f64,
    },
    Toggle {
        default: bool,
    },
    Choice {
        options: &'static [ChoiceOption],
        default: &'static str,
    },
}

/// Static description of a tunable lesson parameter.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ControlSpec {
    pub key: &'static str,
    pub label: &'static str,
    /// Shown after the value, e.g. `px` or `km/hr`.
    pub unit: &'static str,
    pub kind: ControlKind,
}

impl ControlSpec {
    #[must_use]
    pub const fn slider(
        key: &'static str,
        label: &'static str,
        unit: &'static str,
        min: f64,
        max: f64,
        step: f64,
        default: f64,
    ) -> Self {
        Self {
            key,
            label,
            unit,
            kind: ControlKind::Slider {
                min,
                max,
                step,
                default,
            },
        }
    }

    #[must_use]
    pub const fn toggle(key: &'static str, label: &'static str, default: bool) -> Self {
        Self {
            key,
            label,
            unit: "",
            kind: ControlKind::Toggle { default },
        }
    }

    #[must_use]
    pub const fn choice(
        key: &'static str,
        label: &'static str,
        options: &'static [ChoiceOption],
        default: &'static str,
    ) -> Self {
        Self {
            key,
            label,
            unit: "",
            kind: ControlKind::Choice { options, default },
        }
    }

    #[must_use]
    pub fn default_value(&self) -> ParamValue {
        match self.kind {
            ControlKind::Slider { default, .. } => ParamValue::Number(default),
            ControlKind::Toggle { default } => ParamValue::Flag(default),
            ControlKind::Choice { default, .. } => ParamValue::Choice(default),
        }
    }

    /// Clamps to `[min, max]` and snaps to the nearest step from `min`.
    ///
    /// Non-slider specs return `value` unchanged.
    #[must_use]
    pub fn snap(&self, value: f64) -> f64 {
        match self.kind {
            ControlKind::Slider { min, max, step, .. } => {
                let clamped = value.clamp(min, max);
                if step <= 0.0 {
                    return clamped;
                }
                let steps = ((clamped - min) / step).round();
                let snapped = (min + steps * step).clamp(min, max);
                // drop float noise such as 0.30000000000000004; irrational steps stay exact
                match decimal_places(step) {
                    Some(places) => {
                        let scale = 10f64.powi(places as i32);
                        (snapped * scale).round() / scale
                    }
                    None => snapped,
                }
            }
            ControlKind::Toggle { .. } | ControlKind::Choice { .. } => value,
        }
    }

    /// Human-readable value with as many decimals as the step needs (at most 3).
    #[must_use]
    pub fn format_number(&self, value: f64) -> String {
        let decimals = match self.kind {
            ControlKind::Slider { step, .. } => step_decimals(step),
            _ => 0,
        };
        format!("{value:.decimals$}")
    }
}

fn step_decimals(step: f64) -> usize {
    decimal_places(step).map_or(3, |places| places.min(3))
}

/// Decimal places of a step that is an exact decimal, `None` for steps like `π/8`.
fn decimal_places(step: f64) -> Option<usize> {
    (0..=6).find(|d| {
        let scaled = step * 10f64.powi(*d as i32);
        (scaled - scaled.round()).abs() < 1e-6
    })
}

//
// ─── VALUES ────────────────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ParamValue {
    Number(f64),
    Flag(bool),
    Choice(&'static str),
}

impl ParamValue {
    fn kind_name(&self) -> &'static str {
        match self {
            ParamValue::Number(_) => "slider",
            ParamValue::Flag(_) => "toggle",
            ParamValue::Choice(_) => "choice",
        }
    }
}

impl fmt::Display for ParamValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParamValue::Number(n) => write!(f, "{n}"),
            ParamValue::Flag(b) => write!(f, "{b}"),
            ParamValue::Choice(c) => f.write_str(c),
        }
    }
}

/// Current values of a lesson's controls.
///
/// Written by user interaction only; scenes read a snapshot every frame.
#[derive(Debug, Clone, PartialEq)]
pub struct AnimationParameters {
    specs: Vec<ControlSpec>,
    values: BTreeMap<&'static str, ParamValue>,
}

impl AnimationParameters {
    /// Every control starts at its default. Later duplicates of a key are ignored.
    #[must_use]
    pub fn new(specs: impl IntoIterator<Item = ControlSpec>) -> Self {
        let mut kept: Vec<ControlSpec> = Vec::new();
        let mut values = BTreeMap::new();
        for spec in specs {
            if values.contains_key(spec.key) {
                continue;
            }
            values.insert(spec.key, spec.default_value());
            kept.push(spec);
        }
        Self {
            specs: kept,
            values,
        }
    }

    #[must_use]
    pub fn specs(&self) -> &[ControlSpec] {
        &self.specs
    }

    #[must_use]
    pub fn spec(&self, key: &str) -> Option<&ControlSpec> {
        self.specs.iter().find(|s| s.key == key)
    }

    #[must_use]
    pub fn get(&self, key: &str) -> Option<ParamValue> {
        self.values.get(key).copied()
    }

    /// Value of a slider, or the spec's default when this set does not carry it.
    #[must_use]
    pub fn number(&self, spec: &ControlSpec) -> f64 {
        match (self.get(spec.key), spec.default_value()) {
            (Some(ParamValue::Number(n)), _) => n,
            (_, ParamValue::Number(n)) => n,
            _ => 0.0,
        }
    }

    #[must_use]
    pub fn flag(&self, spec: &ControlSpec) -> bool {
        match (self.get(spec.key), spec.default_value()) {
            (Some(ParamValue::Flag(b)), _) => b,
            (_, ParamValue::Flag(b)) => b,
            _ => false,
        }
    }

    #[must_use]
    pub fn choice(&self, spec: &ControlSpec) -> &'static str {
        match (self.get(spec.key), spec.default_value()) {
            (Some(ParamValue::Choice(c)), _) => c,
            (_, ParamValue::Choice(c)) => c,
            _ => "",
        }
    }

    /// Flag lookup by key alone; unknown keys read as `false`.
    #[must_use]
    pub fn flag_by_key(&self, key: &str) -> bool {
        matches!(self.get(key), Some(ParamValue::Flag(true)))
    }

    #[must_use]
    pub fn number_by_key(&self, key: &str) -> Option<f64> {
        match self.get(key) {
            Some(ParamValue::Number(n)) => Some(n),
            _ => None,
        }
    }

    /// Writes a slider value, clamped and snapped. Returns the stored value.
    ///
    /// # Errors
    ///
    /// Returns `ParamError` if the key is unknown, is not a slider, or `value` is
    /// not finite.
    pub fn set_number(&mut self, key: &str, value: f64) -> Result<f64, ParamError> {
        let spec = *self.require(key)?;
        if !matches!(spec.kind, ControlKind::Slider { .. }) {
            return Err(wrong_kind(&spec, "slider"));
        }
        if !value.is_finite() {
            return Err(ParamError::NotFinite {
                key: key.to_string(),
            });
        }
        let stored = spec.snap(value);
        self.values.insert(spec.key, ParamValue::Number(stored));
        Ok(stored)
    }

    /// # Errors
    ///
    /// Returns `ParamError` if the key is unknown or is not a toggle.
    pub fn set_flag(&mut self, key: &str, value: bool) -> Result<(), ParamError> {
        let spec = *self.require(key)?;
        if !matches!(spec.kind, ControlKind::Toggle { .. }) {
            return Err(wrong_kind(&spec, "toggle"));
        }
        self.values.insert(spec.key, ParamValue::Flag(value));
        Ok(())
    }

    /// Flips a toggle and returns the new value.
    ///
    /// # Errors
    ///
    /// Returns `ParamError` if the key is unknown or is not a toggle.
    pub fn toggle(&mut self, key: &str) -> Result<bool, ParamError> {
        let next = !self.flag_by_key(key);
        self.set_flag(key, next)?;
        Ok(next)
    }

    /// # Errors
    ///
    /// Returns `ParamError` if the key is unknown, is not a choice, or `value` is
    /// not one of its options.
    pub fn set_choice(&mut self, key: &str, value: &str) -> Result<(), ParamError> {
        let spec = *self.require(key)?;
        let ControlKind::Choice { options, .. } = spec.kind else {
            return Err(wrong_kind(&spec, "choice"));
        };
        let option = options
            .iter()
            .find(|o| o.value == value)
            .ok_or_else(|| ParamError::UnknownOption {
                key: key.to_string(),
                value: value.to_string(),
            })?;
        self.values.insert(spec.key, ParamValue::Choice(option.value));
        Ok(())
    }

    /// Restores every control to its default.
    pub fn reset(&mut self) {
        for spec in &self.specs {
            self.values.insert(spec.key, spec.default_value());
        }
    }

    fn require(&self, key: &str) -> Result<&ControlSpec, ParamError> {
        self.spec(key).ok_or_else(|| ParamError::UnknownKey {
            key: key.to_string(),
        })
    }
}

fn wrong_kind(spec: &ControlSpec, expected: &'static str) -> ParamError {
    ParamError::WrongKind {
        key: spec.key.to_string(),
        expected,
        actual: spec.default_value().kind_name(),
    }
}
