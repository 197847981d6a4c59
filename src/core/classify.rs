use crate::errors::{AppError, AppResult};
use crate::models::{Category, ParsedDuration};
use serde::{Deserialize, Serialize};

/// Inclusive upper bounds, in minutes, of the first two buckets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Thresholds {
    #[serde(default = "default_up_to_minutes")]
    pub up_to_minutes: u32,
    #[serde(default = "default_up_to_hour_minutes")]
    pub up_to_hour_minutes: u32,
}

fn default_up_to_minutes() -> u32 {
    45
}
fn default_up_to_hour_minutes() -> u32 {
    60
}

impl Default for Thresholds {
    fn default() -> Self {
        Self {
            up_to_minutes: default_up_to_minutes(),
            up_to_hour_minutes: default_up_to_hour_minutes(),
        }
    }
}

impl Thresholds {
    /// True for the 45 / 60 minute bounds the category labels are named after.
    pub fn is_default(&self) -> bool {
        *self == Self::default()
    }

    pub fn new(up_to_minutes: u32, up_to_hour_minutes: u32) -> AppResult<Self> {
        let t = Self {
            up_to_minutes,
            up_to_hour_minutes,
        };
        t.validate()?;
        Ok(t)
    }

    pub fn validate(&self) -> AppResult<()> {
        if self.up_to_minutes >= self.up_to_hour_minutes {
            return Err(AppError::InvalidThresholds {
                first: self.up_to_minutes,
                second: self.up_to_hour_minutes,
            });
        }
        Ok(())
    }

    /// Bucket for `duration`; a value equal to a bound stays in the lower bucket.
    pub fn classify(&self, duration: ParsedDuration) -> Category {
        let mins = duration.minutes();
        if mins <= u64::from(self.up_to_minutes) {
            Category::UpTo45Min
        } else if mins <= u64::from(self.up_to_hour_minutes) {
            Category::UpTo1Hour
        } else {
            Category::OverOneHour
        }
    }
}

/// Classify with the standard 45 / 60 minute bounds.
pub fn classify(duration: ParsedDuration) -> Category {
    Thresholds::default().classify(duration)
}
