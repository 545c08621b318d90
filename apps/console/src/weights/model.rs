//! Weight Model: the weighted criteria behind the preference sliders.
//!
//! While normalization is on, the rounded values of all enabled criteria sum
//! to exactly 100. Values are stored fractional; rounding happens only when a
//! value is displayed or put into the request payload.
//!
//! Remainder correction goes to the LAST enabled criterion in insertion order,
//! not to the one with the largest fractional remainder. That can push the
//! last criterion's displayed value outside [0, 100] for extreme raw input;
//! this is left uncorrected.

use std::collections::BTreeMap;

use tracing::debug;

use crate::console::ConsoleError;

/// Criteria shipped with the console: (key, label, default value).
/// Keys are the names the scoring backend reads from the weight map.
pub const DEFAULT_CRITERIA: &[(&str, &str, f64)] = &[
    ("skills", "Skills", 40.0),
    ("title", "Job Title", 25.0),
    ("location", "Location", 15.0),
    ("industry", "Industry", 10.0),
    ("salary", "Salary", 10.0),
];

#[derive(Debug, Clone)]
pub struct WeightCriterion {
    pub key: String,
    pub label: String,
    pub value: f64,
    pub enabled: bool,
}

impl WeightCriterion {
    pub fn new(key: &str, label: &str, value: f64) -> Self {
        Self {
            key: key.to_string(),
            label: label.to_string(),
            value,
            enabled: true,
        }
    }

    /// Integer percentage shown next to the slider and sent to the backend.
    pub fn rounded(&self) -> i64 {
        round_half_up(self.value)
    }
}

#[derive(Debug, Clone)]
pub struct WeightModel {
    criteria: Vec<WeightCriterion>,
    normalizing: bool,
}

impl Default for WeightModel {
    fn default() -> Self {
        Self::with_defaults(true)
    }
}

impl WeightModel {
    /// Builds a model from criteria in display order. Normalizes immediately
    /// when `normalizing` is set so the invariant holds from the start.
    pub fn new(criteria: Vec<WeightCriterion>, normalizing: bool) -> Self {
        let mut model = Self {
            criteria,
            normalizing,
        };
        if normalizing {
            model.normalize();
        }
        model
    }

    pub fn with_defaults(normalizing: bool) -> Self {
        let criteria = DEFAULT_CRITERIA
            .iter()
            .map(|(key, label, value)| WeightCriterion::new(key, label, *value))
            .collect();
        Self::new(criteria, normalizing)
    }

    pub fn criteria(&self) -> &[WeightCriterion] {
        &self.criteria
    }

    #[cfg(test)]
    pub fn get(&self, key: &str) -> Option<&WeightCriterion> {
        self.criteria.iter().find(|c| c.key == key)
    }

    pub fn is_normalizing(&self) -> bool {
        self.normalizing
    }

    /// Sets a criterion's raw value. No clamping happens before normalization.
    pub fn set_value(&mut self, key: &str, raw: f64) -> Result<(), ConsoleError> {
        self.criterion_mut(key)?.value = raw;
        if self.normalizing {
            self.normalize();
        }
        Ok(())
    }

    /// Toggles participation. A disabled criterion keeps its stored value.
    pub fn set_enabled(&mut self, key: &str, enabled: bool) -> Result<(), ConsoleError> {
        self.criterion_mut(key)?.enabled = enabled;
        if self.normalizing {
            self.normalize();
        }
        Ok(())
    }

    /// Switching normalization on normalizes once; switching it off leaves
    /// the current values in place.
    pub fn set_normalizing(&mut self, on: bool) {
        self.normalizing = on;
        if on {
            self.normalize();
        }
    }

    /// Rescales enabled criteria so their rounded values sum to exactly 100.
    pub fn normalize(&mut self) {
        let mut enabled: Vec<&mut WeightCriterion> =
            self.criteria.iter_mut().filter(|c| c.enabled).collect();
        if enabled.is_empty() {
            return;
        }

        let total: f64 = enabled.iter().map(|c| c.value).sum();
        if total == 0.0 {
            let share = 100.0 / enabled.len() as f64;
            for c in enabled.iter_mut() {
                c.value = share;
            }
        } else {
            let factor = 100.0 / total;
            for c in enabled.iter_mut() {
                c.value *= factor;
            }
        }

        // Rounded values saturate at the i64 bounds for extreme input.
        let current_sum: i128 = enabled.iter().map(|c| i128::from(c.rounded())).sum();
        if current_sum != 100 {
            let diff = 100 - current_sum;
            if let Some(last) = enabled.last_mut() {
                last.value += diff as f64;
                debug!(key = %last.key, %diff, "assigned rounding remainder");
            }
        }
    }

    /// `key → rounded value` for enabled criteria only, regardless of
    /// whether normalization is on.
    pub fn collect_payload(&self) -> BTreeMap<String, i64> {
        self.criteria
            .iter()
            .filter(|c| c.enabled)
            .map(|c| (c.key.clone(), c.rounded()))
            .collect()
    }

    /// Sum of rounded values over enabled criteria.
    pub fn enabled_total(&self) -> i64 {
        self.criteria
            .iter()
            .filter(|c| c.enabled)
            .map(WeightCriterion::rounded)
            .fold(0, i64::saturating_add)
    }

    fn criterion_mut(&mut self, key: &str) -> Result<&mut WeightCriterion, ConsoleError> {
        self.criteria
            .iter_mut()
            .find(|c| c.key == key)
            .ok_or_else(|| ConsoleError::UnknownCriterion(key.to_string()))
    }
}

/// Rounds half-way cases towards positive infinity (2.5 → 3, -2.5 → -2).
/// Adding an integer to `x` shifts the result by exactly that integer.
pub fn round_half_up(x: f64) -> i64 {
    if x.is_finite() {
        (x + 0.5).floor() as i64
    } else {
        0
    }
}
