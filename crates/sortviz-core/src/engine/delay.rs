use std::fmt;
use std::str::FromStr;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::Error;

/// Shared, lock-free holder of the current inter-step delay
///
/// Clones share the same value. Writers win last; readers see the new value
/// at their next suspension point, never in a wait already underway.
#[derive(Debug, Clone, Default)]
pub struct DelaySource {
    ms: Arc<AtomicU64>,
}

impl DelaySource {
    pub fn new(ms: u64) -> Self {
        Self {
            ms: Arc::new(AtomicU64::new(ms)),
        }
    }

    /// Current delay in milliseconds
    #[inline]
    pub fn read(&self) -> u64 {
        self.ms.load(Ordering::Relaxed)
    }

    #[inline]
    pub fn write(&self, ms: u64) {
        self.ms.store(ms, Ordering::Relaxed);
    }

    #[inline]
    pub fn duration(&self) -> Duration {
        Duration::from_millis(self.read())
    }
}

/// Speed presets offered by the speed selector
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Speed {
    #[default]
    Slow,
    Medium,
    Fast,
}

impl Speed {
    pub const ALL: [Speed; 3] = [Speed::Slow, Speed::Medium, Speed::Fast];

    /// Delay between visualized steps
    pub fn delay_ms(self) -> u64 {
        match self {
            Speed::Slow => 128,
            Speed::Medium => 32,
            Speed::Fast => 8,
        }
    }

    /// Preset matching an exact delay, if any
    pub fn from_delay(ms: u64) -> Option<Self> {
        Self::ALL.into_iter().find(|speed| speed.delay_ms() == ms)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Speed::Slow => "slow",
            Speed::Medium => "medium",
            Speed::Fast => "fast",
        }
    }

    /// Next preset, wrapping from fast back to slow
    pub fn next(self) -> Self {
        match self {
            Speed::Slow => Speed::Medium,
            Speed::Medium => Speed::Fast,
            Speed::Fast => Speed::Slow,
        }
    }
}

impl fmt::Display for Speed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Speed {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "slow" => Ok(Speed::Slow),
            "medium" => Ok(Speed::Medium),
            "fast" => Ok(Speed::Fast),
            other => Err(Error::UnknownSpeed(other.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_delay_source_shared_between_clones() {
        let delay = DelaySource::new(128);
        let reader = delay.clone();

        assert_eq!(reader.read(), 128);
        delay.write(8);
        assert_eq!(reader.read(), 8);
        assert_eq!(reader.duration(), Duration::from_millis(8));
    }

    #[test]
    fn test_speed_delays() {
        assert_eq!(Speed::Slow.delay_ms(), 128);
        assert_eq!(Speed::Medium.delay_ms(), 32);
        assert_eq!(Speed::Fast.delay_ms(), 8);
        assert_eq!(Speed::from_delay(32), Some(Speed::Medium));
        assert_eq!(Speed::from_delay(500), None);
    }

    #[test]
    fn test_speed_parse_and_cycle() {
        assert_eq!("Fast".parse::<Speed>().unwrap(), Speed::Fast);
        assert!(matches!("warp".parse::<Speed>(), Err(Error::UnknownSpeed(_))));
        assert_eq!(Speed::Fast.next(), Speed::Slow);
        assert_eq!(Speed::Slow.next().next(), Speed::Fast);
    }
}
