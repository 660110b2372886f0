use rand::Rng;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{trace, warn};

use crate::math::round::round_to_increment;

pub const DEFAULT_MAX_RETRIES: usize = 10_000;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum SamplerError {
    #[error("invalid sampler parameters: {0}")]
    InvalidParameters(String),
    #[error("batch mean stayed under its floor after {retries} attempts")]
    MaxRetriesExceeded { retries: usize }
}

fn default_quota() -> f64 { 1.0 }
fn default_under_min_probability() -> f64 { 0.05 }
fn default_time_increment() -> f64 { 0.5 }
fn default_max_retries() -> usize { DEFAULT_MAX_RETRIES }

/// Bounds and rules for synthesized daily work durations, in hours.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DurationSamplerSettings {
    pub min_hours: f64,
    pub max_hours: f64,
    /// Part-time fraction applied to every sampled duration.
    #[serde(default = "default_quota")]
    pub quota: f64,
    #[serde(default = "default_under_min_probability")]
    pub under_min_probability: f64,
    #[serde(default = "default_time_increment")]
    pub time_increment: f64,
    #[serde(default = "default_max_retries")]
    pub max_retries: usize
}

impl DurationSamplerSettings {
    pub fn new(min_hours: f64, max_hours: f64) -> DurationSamplerSettings {
        DurationSamplerSettings {
            min_hours,
            max_hours,
            quota: default_quota(),
            under_min_probability: default_under_min_probability(),
            time_increment: default_time_increment(),
            max_retries: default_max_retries()
        }
    }

    pub fn with_quota(mut self, quota: f64) -> DurationSamplerSettings {
        self.quota = quota;
        self
    }

    pub fn with_under_min_probability(mut self, under_min_probability: f64) -> DurationSamplerSettings {
        self.under_min_probability = under_min_probability;
        self
    }

    pub fn with_time_increment(mut self, time_increment: f64) -> DurationSamplerSettings {
        self.time_increment = time_increment;
        self
    }

    pub fn with_max_retries(mut self, max_retries: usize) -> DurationSamplerSettings {
        self.max_retries = max_retries;
        self
    }

    pub fn validate(&self) -> Result<(), SamplerError> {
        let invalid = |msg: String| Err(SamplerError::InvalidParameters(msg));

        if !(self.min_hours.is_finite() && self.max_hours.is_finite()) {
            return invalid(format!("non-finite bounds [{}, {}]", self.min_hours, self.max_hours));
        }
        if self.min_hours < 0.0 {
            return invalid(format!("min_hours {} is negative", self.min_hours));
        }
        if self.min_hours >= self.max_hours {
            return invalid(format!("min_hours {} must be below max_hours {}", self.min_hours, self.max_hours));
        }
        if !(self.time_increment > 0.0 && self.time_increment.is_finite()) {
            return invalid(format!("time_increment {} must be positive", self.time_increment));
        }
        if !(0.0..1.0).contains(&self.under_min_probability) {
            return invalid(format!("under_min_probability {} is outside [0, 1)", self.under_min_probability));
        }
        if !(self.quota > 0.0 && self.quota.is_finite()) {
            return invalid(format!("quota {} must be positive", self.quota));
        }
        if self.max_retries == 0 {
            return invalid("max_retries must be at least 1".to_owned());
        }
        Ok(())
    }

    /// Floor the mean of a full-day batch must reach.
    pub fn full_day_floor(&self) -> f64 {
        (self.min_hours + 0.1 * (self.max_hours - self.min_hours)) * self.quota
    }

    pub fn half_day_floor(&self) -> f64 {
        self.full_day_floor() / 2.0
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct WorkDurations {
    pub full_days: Vec<f64>,
    pub half_days: Vec<f64>
}

/// One raw duration drawn uniformly from `[min_hours, max_hours]`.
///
/// With probability `under_min_probability` (split evenly between both
/// tails of a second uniform draw) the duration is scaled down by
/// `min_hours / max_hours * 0.99`, modelling an under-quota day.
pub fn sample_one_duration<R: Rng + ?Sized>(
    rng: &mut R,
    min_hours: f64,
    max_hours: f64,
    under_min_probability: f64
) -> f64 {
    let duration = rng.gen_range(min_hours..=max_hours);
    let half_probability = under_min_probability / 2.0;
    let r: f64 = rng.gen_range(0.0..1.0);

    let in_central_band = half_probability <= r && r < 1.0 - half_probability;
    if !in_central_band && under_min_probability > 0.0 {
        return (min_hours / max_hours) * 0.99 * duration;
    }
    duration
}

pub struct DurationSampler {
    settings: DurationSamplerSettings
}

impl DurationSampler {
    pub fn new(settings: DurationSamplerSettings) -> Result<DurationSampler, SamplerError> {
        settings.validate()?;
        Ok(DurationSampler { settings })
    }

    pub fn settings(&self) -> &DurationSamplerSettings {
        &self.settings
    }

    /// Samples durations for `full_day_count` full days and
    /// `half_day_count` half days.
    ///
    /// Each batch is redrawn as a whole until its mean reaches the floor.
    /// An empty batch is returned as is.
    pub fn sample_durations<R: Rng + ?Sized>(
        &self,
        rng: &mut R,
        full_day_count: usize,
        half_day_count: usize
    ) -> Result<WorkDurations, SamplerError> {
        let s = &self.settings;

        let full_days = self.sample_batch(
            rng,
            full_day_count,
            s.min_hours,
            s.max_hours,
            s.full_day_floor()
        )?;
        let half_days = self.sample_batch(
            rng,
            half_day_count,
            s.min_hours / 2.0,
            s.max_hours / 2.0,
            s.half_day_floor()
        )?;

        Ok(WorkDurations { full_days, half_days })
    }

    fn draw_batch<R: Rng + ?Sized>(&self, rng: &mut R, count: usize, min_hours: f64, max_hours: f64) -> Vec<f64> {
        let s = &self.settings;
        (0..count)
            .map(|_| {
                let hours = sample_one_duration(rng, min_hours, max_hours, s.under_min_probability);
                round_to_increment(hours * s.quota, s.time_increment)
            })
            .collect()
    }

    fn sample_batch<R: Rng + ?Sized>(
        &self,
        rng: &mut R,
        count: usize,
        min_hours: f64,
        max_hours: f64,
        floor: f64
    ) -> Result<Vec<f64>, SamplerError> {
        if count == 0 {
            return Ok(Vec::new());
        }

        for attempt in 1..=self.settings.max_retries {
            let batch = self.draw_batch(rng, count, min_hours, max_hours);
            let mean = batch.iter().sum::<f64>() / count as f64;
            if mean >= floor {
                return Ok(batch);
            }
            trace!(attempt, mean, floor, "rejected duration batch");
        }

        warn!(
            count,
            floor,
            retries = self.settings.max_retries,
            "could not sample a duration batch above its floor"
        );
        Err(SamplerError::MaxRetriesExceeded { retries: self.settings.max_retries })
    }
}
