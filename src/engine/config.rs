// Engine configuration and pacing constants

use crate::model::Family;
use serde::{Deserialize, Serialize};

/// Inclusive bounds on the advisory delay between automatic steps
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DelayRange {
    pub min: u64,
    pub max: u64,
}

impl DelayRange {
    /// Bounds for engines consuming `family` input
    pub fn for_family(family: Family) -> Self {
        match family {
            Family::Array => ARRAY_DELAY_RANGE,
            Family::Text => STRING_DELAY_RANGE,
        }
    }

    pub fn clamp(self, ms: u64) -> u64 {
        ms.clamp(self.min, self.max)
    }

    pub fn contains(self, ms: u64) -> bool {
        (self.min..=self.max).contains(&ms)
    }
}

/// Delay bounds for the array searches
pub const ARRAY_DELAY_RANGE: DelayRange = DelayRange {
    min: 100,
    max: 2000,
};

/// Delay bounds for the string searches, which show two lanes per step
pub const STRING_DELAY_RANGE: DelayRange = DelayRange {
    min: 200,
    max: 3000,
};

/// Delay a fresh engine starts with
pub const DEFAULT_EXECUTION_DELAY_MS: u64 = 1000;

/// Byte budget for a recorded step history (16 MiB)
pub const DEFAULT_HISTORY_LIMIT: usize = 16 * 1024 * 1024;

/// Host-tunable engine settings.
///
/// Missing fields fall back to their defaults when deserialised, so an empty
/// JSON object is a valid configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Advisory delay between automatic steps, in milliseconds. The engine
    /// clamps it to its family's [`DelayRange`].
    pub execution_delay_ms: u64,
}

impl Default for EngineConfig {
    fn default() -> Self {
        EngineConfig {
            execution_delay_ms: DEFAULT_EXECUTION_DELAY_MS,
        }
    }
}
